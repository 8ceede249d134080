//! Fixed route table.
//!
//! Inbound templates and upstream paths share the same shape, so a single
//! table drives router registration, the index page and the `routes` command.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::Serialize;
use std::fmt;

use mailgate_types::GatewayError;

/// Characters escaped inside a single path segment (WHATWG path-segment set).
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'?')
    .add(b'{')
    .add(b'}')
    .add(b'/')
    .add(b'%');

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RouteSpec {
    /// Axum path template (`:name` placeholders)
    pub template: &'static str,
    pub method: &'static str,
    pub description: &'static str,
}

pub const ROUTES: &[RouteSpec] = &[
    RouteSpec {
        template: "/api/public/v1/me",
        method: "GET",
        description: "Profile of the account that owns the credential",
    },
    RouteSpec {
        template: "/api/public/v1/mail",
        method: "GET",
        description: "Overview of all incoming mail",
    },
    RouteSpec {
        template: "/api/public/v1/letters",
        method: "GET",
        description: "List of letters",
    },
    RouteSpec {
        template: "/api/public/v1/letters/:id",
        method: "GET",
        description: "A single letter by id",
    },
    RouteSpec {
        template: "/api/public/v1/packages",
        method: "GET",
        description: "List of packages",
    },
    RouteSpec {
        template: "/api/public/v1/packages/:id",
        method: "GET",
        description: "A single package by id",
    },
    RouteSpec {
        template: "/api/public/v1/lsv",
        method: "GET",
        description: "List of LSV items",
    },
    RouteSpec {
        template: "/api/public/v1/lsv/:type/:id",
        method: "GET",
        description: "A single LSV item by type and id",
    },
];

impl RouteSpec {
    /// Names of the path parameters, in order.
    pub fn params(&self) -> impl Iterator<Item = &'static str> {
        self.template.split('/').filter_map(|seg| seg.strip_prefix(':'))
    }

    /// Template in `{name}` notation, as shown to humans.
    pub fn display_path(&self) -> String {
        self.template
            .split('/')
            .map(|seg| match seg.strip_prefix(':') {
                Some(name) => format!("{{{}}}", name),
                None => seg.to_string(),
            })
            .collect::<Vec<_>>()
            .join("/")
    }
}

/// Escape one parameter as a single path segment.
///
/// `.` and `..` are refused outright: URL parsing resolves them (and their
/// `%2E` forms) as dot segments, which would move the call off the table.
fn encode_segment(value: &str) -> Result<String, GatewayError> {
    if value == "." || value == ".." {
        return Err(GatewayError::InvalidPathParameter {
            message: format!("'{}' is not allowed as a path parameter", value),
        });
    }
    Ok(utf8_percent_encode(value, PATH_SEGMENT).to_string())
}

/// Path appended to the upstream base URL. Always starts with `/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamPath(String);

impl UpstreamPath {
    /// Substitute `params` into the `:name` placeholders of `template`, in order.
    ///
    /// Parameters are opaque; each is percent-encoded as one path segment and
    /// otherwise left untouched.
    pub fn from_template(template: &str, params: &[String]) -> Result<Self, GatewayError> {
        let mut values = params.iter();
        let mut segments = Vec::new();

        for seg in template.split('/') {
            if seg.starts_with(':') {
                let value = values.next().ok_or_else(|| GatewayError::Internal {
                    message: format!("missing path parameter {} for {}", seg, template),
                })?;
                segments.push(encode_segment(value)?);
            } else {
                segments.push(seg.to_string());
            }
        }

        if values.next().is_some() {
            return Err(GatewayError::Internal {
                message: format!("too many path parameters for {}", template),
            });
        }

        Ok(Self(segments.join("/")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UpstreamPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_static_routes_map_to_themselves() {
        for route in ROUTES.iter().filter(|r| r.params().next().is_none()) {
            let path = UpstreamPath::from_template(route.template, &[]).unwrap();
            assert_eq!(path.as_str(), route.template);
        }
    }

    #[test]
    fn test_single_param_substitution() {
        let path = UpstreamPath::from_template("/api/public/v1/letters/:id", &params(&["abc123"]))
            .unwrap();
        assert_eq!(path.as_str(), "/api/public/v1/letters/abc123");
    }

    #[test]
    fn test_two_param_substitution_keeps_order() {
        let path =
            UpstreamPath::from_template("/api/public/v1/lsv/:type/:id", &params(&["typeX", "42"]))
                .unwrap();
        assert_eq!(path.to_string(), "/api/public/v1/lsv/typeX/42");
    }

    #[test]
    fn test_params_are_escaped_as_one_segment() {
        let path = UpstreamPath::from_template("/api/public/v1/letters/:id", &params(&["a/b c?"]))
            .unwrap();
        assert_eq!(path.as_str(), "/api/public/v1/letters/a%2Fb%20c%3F");
    }

    #[test]
    fn test_dot_segments_are_refused() {
        for value in [".", ".."] {
            let err = UpstreamPath::from_template("/api/public/v1/letters/:id", &params(&[value]))
                .unwrap_err();
            assert!(matches!(err, GatewayError::InvalidPathParameter { .. }), "{}", value);
        }

        let err =
            UpstreamPath::from_template("/api/public/v1/lsv/:type/:id", &params(&["..", ".."]))
                .unwrap_err();
        assert_eq!(err.http_status_code(), 400);
    }

    #[test]
    fn test_dots_inside_a_value_are_kept() {
        let path = UpstreamPath::from_template("/api/public/v1/letters/:id", &params(&["a..b"]))
            .unwrap();
        assert_eq!(path.as_str(), "/api/public/v1/letters/a..b");

        let path = UpstreamPath::from_template("/api/public/v1/letters/:id", &params(&["..."]))
            .unwrap();
        assert_eq!(path.as_str(), "/api/public/v1/letters/...");
    }

    #[test]
    fn test_arity_mismatch_is_internal_error() {
        let err = UpstreamPath::from_template("/api/public/v1/letters/:id", &[]).unwrap_err();
        assert!(matches!(err, GatewayError::Internal { .. }));

        let err = UpstreamPath::from_template("/api/public/v1/me", &params(&["x"])).unwrap_err();
        assert!(matches!(err, GatewayError::Internal { .. }));
    }

    #[test]
    fn test_route_table_shape() {
        assert_eq!(ROUTES.len(), 8);
        assert!(ROUTES.iter().all(|r| r.method == "GET"));
        assert!(ROUTES.iter().all(|r| r.template.starts_with("/api/public/v1/")));

        let lsv = ROUTES.iter().find(|r| r.template.ends_with(":type/:id")).unwrap();
        assert_eq!(lsv.params().collect::<Vec<_>>(), vec!["type", "id"]);
        assert_eq!(lsv.display_path(), "/api/public/v1/lsv/{type}/{id}");
    }
}
