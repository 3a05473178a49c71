/// Request parser
///
/// Extracts the route, the note id and the create payload from an incoming
/// Lambda HTTP request.
use lambda_http::request::RequestContext;
use lambda_http::{Request, RequestExt};
use serde::Deserialize;

use crate::domain::Route;

/// Name of the path parameter holding the note id
pub const NOTE_ID_PARAM: &str = "id";

/// Body of `POST /notes`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CreateNoteRequest {
    #[serde(default)]
    pub content: Option<String>,
}

/// Stateless request parser
pub struct RequestParser;

impl RequestParser {
    /// Resolve the route of a request
    ///
    /// Uses the API Gateway route key when it names a concrete route,
    /// otherwise the method and path.
    pub fn route(request: &Request) -> Route {
        let route_key = Self::route_key(request);
        Route::resolve(
            route_key.as_deref(),
            request.method().as_str(),
            request.uri().path(),
        )
    }

    /// Route key reported by an HTTP API (payload v2) request context
    pub fn route_key(request: &Request) -> Option<String> {
        match request.request_context_ref()? {
            RequestContext::ApiGatewayV2(context) => context.route_key.clone(),
            _ => None,
        }
    }

    /// Note id of a read request
    ///
    /// The `id` path parameter wins; the path segment captured during route
    /// resolution is the fallback. Empty values count as missing.
    pub fn note_id(request: &Request, route: &Route) -> Option<String> {
        let from_params = request
            .path_parameters_ref()
            .and_then(|params| params.first(NOTE_ID_PARAM))
            .filter(|id| !id.is_empty())
            .map(str::to_string);

        let from_path = match route {
            Route::GetNote { id } => id.clone().filter(|id| !id.is_empty()),
            _ => None,
        };

        from_params.or(from_path)
    }

    /// `content` of a create request
    ///
    /// An empty, malformed or non-object body parses as an empty request, so
    /// every unusable body yields `None`. Empty strings count as missing.
    pub fn content(body: &[u8]) -> Option<String> {
        let request: CreateNoteRequest = serde_json::from_slice(body).unwrap_or_default();
        request.content.filter(|content| !content.is_empty())
    }
}
