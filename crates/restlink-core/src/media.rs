//! Media type helpers
//!
//! Content types are matched on their essence: parameters such as
//! `charset` are ignored and comparison is case-insensitive.

/// Content type sent with XML bodies when none is configured
pub const APPLICATION_XML: &str = "application/xml";

/// Content type sent with JSON bodies when none is configured
pub const APPLICATION_JSON: &str = "application/json";

/// Strip parameters from a content type (`text/xml; charset=utf-8` -> `text/xml`).
pub fn essence(content_type: &str) -> &str {
    content_type
        .split(';')
        .next()
        .unwrap_or(content_type)
        .trim()
}

/// `application/json`, `text/json`, `application/vnd.api+json`, ...
pub fn is_json(content_type: &str) -> bool {
    has_subtype(content_type, "json")
}

/// `application/xml`, `text/xml`, `application/atom+xml`, ...
pub fn is_xml(content_type: &str) -> bool {
    has_subtype(content_type, "xml")
}

fn has_subtype(content_type: &str, subtype: &str) -> bool {
    let Some((_, sub)) = essence(content_type).split_once('/') else {
        return false;
    };
    let sub = sub.to_ascii_lowercase();
    sub == subtype
        || sub
            .rsplit_once('+')
            .is_some_and(|(_, suffix)| suffix == subtype)
}
