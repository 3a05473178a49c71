//! Route resolution
//!
//! API Gateway HTTP APIs report the matched route as a route key
//! (`"GET /notes/{id}"`). Catch-all integrations report `$default` or a greedy
//! proxy route instead, in which case the route is derived from the request
//! method and path.
//!
//! Paths of non-`$default` stages carry the stage name first (`/dev/notes`);
//! one leading segment before `/notes` is skipped.

use percent_encoding::percent_decode_str;

/// Collection path for notes
pub const NOTES_PATH: &str = "/notes";

/// Route key of the create operation
pub const CREATE_NOTE_ROUTE_KEY: &str = "POST /notes";

/// Route key of the read operation
pub const GET_NOTE_ROUTE_KEY: &str = "GET /notes/{id}";

/// Catch-all route key
pub const DEFAULT_ROUTE_KEY: &str = "$default";

/// Supported routes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `POST /notes`
    CreateNote,
    /// `GET /notes/{id}`
    ///
    /// `id` holds the decoded path segment when the route was resolved from the
    /// path. It is `None` when resolved from a route key, where the id comes
    /// from the path parameters instead.
    GetNote { id: Option<String> },
    /// Anything else
    Unmatched,
}

impl Route {
    /// Resolve the route of a request
    ///
    /// # Arguments
    /// * `route_key` - route key from the request context, if any
    /// * `method` - HTTP method (upper case)
    /// * `path` - request path
    pub fn resolve(route_key: Option<&str>, method: &str, path: &str) -> Self {
        route_key
            .and_then(Self::from_route_key)
            .unwrap_or_else(|| Self::from_method_and_path(method, path))
    }

    /// Resolve from a concrete route key
    ///
    /// Returns `None` for catch-all keys (`$default`, `ANY ...`, greedy
    /// `{proxy+}` templates) that say nothing about the operation.
    pub fn from_route_key(route_key: &str) -> Option<Self> {
        let route_key = route_key.trim();
        if route_key.is_empty() || route_key == DEFAULT_ROUTE_KEY {
            return None;
        }

        let (method, template) = route_key.split_once(' ')?;
        if method == "ANY" || template.contains("+}") {
            return None;
        }

        let route = match route_key {
            CREATE_NOTE_ROUTE_KEY => Self::CreateNote,
            GET_NOTE_ROUTE_KEY => Self::GetNote { id: None },
            _ => Self::Unmatched,
        };
        Some(route)
    }

    /// Resolve from method and path
    ///
    /// `POST /notes` (trailing slash tolerated) creates; `GET /notes/<segment>`
    /// with a single, possibly empty, segment reads. The segment is
    /// percent-decoded.
    pub fn from_method_and_path(method: &str, path: &str) -> Self {
        let Some(rest) = Self::notes_subpath(path) else {
            return Self::Unmatched;
        };

        match method {
            "POST" if rest.is_empty() || rest == "/" => Self::CreateNote,
            "GET" => match rest.strip_prefix('/') {
                Some(segment) if !segment.contains('/') => Self::GetNote {
                    id: Some(percent_decode_str(segment).decode_utf8_lossy().into_owned()),
                },
                _ => Self::Unmatched,
            },
            _ => Self::Unmatched,
        }
    }

    /// Part of the path after `/notes`, allowing one stage segment before it
    fn notes_subpath(path: &str) -> Option<&str> {
        fn under_notes(path: &str) -> Option<&str> {
            path.strip_prefix(NOTES_PATH)
                .filter(|rest| rest.is_empty() || rest.starts_with('/'))
        }

        under_notes(path).or_else(|| {
            let after_stage = path.strip_prefix('/')?;
            let slash = after_stage.find('/')?;
            under_notes(&after_stage[slash..])
        })
    }

    /// Short name for logging
    pub fn name(&self) -> &'static str {
        match self {
            Self::CreateNote => "create_note",
            Self::GetNote { .. } => "get_note",
            Self::Unmatched => "unmatched",
        }
    }
}
