//! Target URL assembly
//!
//! Turns `location` + `path` + parameters into the URL a request is sent to.
//! `location` is `host[:port]` with an optional base path; without an explicit
//! `http://` or `https://` prefix the scheme is plain HTTP.
//!
//! Path segments are joined the way a file path would be: empty and `.`
//! segments are dropped, `..` removes the previous segment but never the
//! host. Placeholders of the form `{name}` are replaced by the matching path
//! parameter, and every segment is percent-encoded as a single segment, so a
//! value such as `a b/c` arrives as `a%20b%2Fc`. A value that would turn its
//! segment into `.` or `..` is rejected instead of moving the request to
//! another resource. Query parameters use form encoding (`a b&c` becomes
//! `a+b%26c`) and are emitted in key order.

use std::collections::HashMap;

use restlink_core::{RestError, RestRequest, Result};
use url::Url;

const DEFAULT_SCHEME: &str = "http";

/// Build the URL `request` targets.
pub fn build_url(request: &RestRequest) -> Result<Url> {
    let location = request.location.trim();
    let (scheme, rest) = match location.split_once("://") {
        Some((scheme, rest)) => (scheme.to_ascii_lowercase(), rest),
        None => (DEFAULT_SCHEME.to_string(), location),
    };
    if scheme != "http" && scheme != "https" {
        return Err(RestError::InvalidRequest(format!(
            "unsupported scheme '{scheme}' in location '{location}'"
        )));
    }

    let (authority, base_path) = rest.split_once('/').unwrap_or((rest, ""));
    if authority.is_empty() {
        return Err(RestError::InvalidRequest(format!(
            "location '{location}' has no host"
        )));
    }

    let mut url = Url::parse(&format!("{scheme}://{authority}/")).map_err(|e| {
        RestError::InvalidRequest(format!("invalid location '{location}': {e}"))
    })?;

    {
        let mut segments = url.path_segments_mut().map_err(|()| {
            RestError::InvalidRequest(format!("location '{location}' cannot carry a path"))
        })?;
        segments.clear();
        for segment in join_segments(base_path, &request.path) {
            let resolved = substitute(segment, &request.path_params);
            if resolved == "." || resolved == ".." {
                return Err(RestError::InvalidRequest(format!(
                    "path segment '{segment}' resolves to '{resolved}'"
                )));
            }
            segments.push(&resolved);
        }
    }

    if !request.query_params.is_empty() {
        let mut pairs = url.query_pairs_mut();
        for (name, value) in &request.query_params {
            pairs.append_pair(name, value);
        }
    }

    Ok(url)
}

fn join_segments<'a>(base: &'a str, path: &'a str) -> Vec<&'a str> {
    let mut joined = Vec::new();
    for segment in base.split('/').chain(path.split('/')) {
        match segment {
            "" | "." => {}
            ".." => {
                joined.pop();
            }
            s => joined.push(s),
        }
    }
    joined
}

/// Replace `{name}` placeholders; unknown names are left in place.
fn substitute(segment: &str, params: &HashMap<String, String>) -> String {
    let mut out = String::with_capacity(segment.len());
    let mut rest = segment;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let Some(close) = after.find('}') else {
            out.push_str(&rest[open..]);
            rest = "";
            break;
        };

        let name = &after[..close];
        match params.get(name) {
            Some(value) => out.push_str(value),
            None => {
                out.push('{');
                out.push_str(name);
                out.push('}');
            }
        }
        rest = &after[close + 1..];
    }

    out.push_str(rest);
    out
}
