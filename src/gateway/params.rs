//! Request parameter extraction
//!
//! Parses the `token` and `file` query parameters. A parameter that appears
//! more than once is treated as absent.

use url::form_urlencoded;

/// Caller-supplied parameters for one request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestParams {
    pub token: Option<String>,
    pub file: Option<String>,
}

impl RequestParams {
    pub fn new(token: Option<&str>, file: Option<&str>) -> Self {
        Self {
            token: token.map(ToString::to_string),
            file: file.map(ToString::to_string),
        }
    }

    /// Parse from a raw query string (without the leading `?`)
    pub fn from_query(query: Option<&str>) -> Self {
        let Some(query) = query else {
            return Self::default();
        };

        let mut tokens = Vec::new();
        let mut files = Vec::new();
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "token" => tokens.push(value.into_owned()),
                "file" => files.push(value.into_owned()),
                _ => {}
            }
        }

        Self {
            token: single(tokens),
            file: single(files),
        }
    }
}

fn single(mut values: Vec<String>) -> Option<String> {
    if values.len() == 1 {
        values.pop()
    } else {
        None
    }
}
