/// Notes request handler
///
/// Translates one HTTP request into at most one store operation and a JSON
/// response. Faults never escape `handle`; they become 500 responses.
use lambda_http::http::header::{HeaderValue, CONTENT_TYPE};
use lambda_http::http::StatusCode;
use lambda_http::{Body, Request, Response};
use thiserror::Error;
use tracing::{error, info, warn};

use crate::application::RequestParser;
use crate::domain::{ApiMessage, Note, Route};
use crate::infrastructure::{NoteRepository, RepositoryError};

/// Internal faults raised while handling a request
#[derive(Debug, Error, Clone, PartialEq)]
pub enum NotesHandlerError {
    /// Store operation failed
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// Response body could not be serialized
    #[error("{0}")]
    Serialization(String),
}

/// Handler for `POST /notes` and `GET /notes/{id}`
pub struct NotesHandler<NR>
where
    NR: NoteRepository,
{
    /// Note repository
    note_repo: NR,
}

impl<NR> NotesHandler<NR>
where
    NR: NoteRepository,
{
    /// Create a new NotesHandler
    pub fn new(note_repo: NR) -> Self {
        Self { note_repo }
    }

    /// Handle one HTTP request
    ///
    /// # Flow
    /// 1. Resolve the route from the route key or method + path
    /// 2. Validate the input of the matched route
    /// 3. Perform the store operation
    /// 4. Build the JSON response; internal faults are logged and become 500
    pub async fn handle(&self, request: &Request) -> Response<Body> {
        let route = RequestParser::route(request);

        info!(
            method = request.method().as_str(),
            path = request.uri().path(),
            route = route.name(),
            "request received"
        );

        match self.dispatch(request, &route).await {
            Ok(response) => response,
            Err(err) => {
                error!(route = route.name(), error = %err, "request failed");
                Self::internal_error_response(&err.to_string())
            }
        }
    }

    async fn dispatch(
        &self,
        request: &Request,
        route: &Route,
    ) -> Result<Response<Body>, NotesHandlerError> {
        match route {
            Route::CreateNote => self.create_note(request.body().as_ref()).await,
            Route::GetNote { .. } => match RequestParser::note_id(request, route) {
                Some(id) => self.get_note(&id).await,
                None => {
                    warn!("note id missing in path");
                    Ok(message_response(StatusCode::BAD_REQUEST, &ApiMessage::missing_note_id()))
                }
            },
            Route::Unmatched => Ok(message_response(
                StatusCode::NOT_FOUND,
                &ApiMessage::route_not_found(),
            )),
        }
    }

    /// Create a note from a request body
    ///
    /// # Returns
    /// * 201 with the created note
    /// * 400 when the body has no usable `content`
    /// * `Err(NotesHandlerError)` when the write fails
    pub async fn create_note(&self, body: &[u8]) -> Result<Response<Body>, NotesHandlerError> {
        let Some(content) = RequestParser::content(body) else {
            warn!("content missing in request body");
            return Ok(message_response(StatusCode::BAD_REQUEST, &ApiMessage::missing_content()));
        };

        let note = Note::new(content);
        self.note_repo.put(&note).await?;

        info!(note_id = %note.id, "note created");
        note_response(StatusCode::CREATED, &note)
    }

    /// Fetch a note by id
    ///
    /// # Returns
    /// * 200 with the stored note
    /// * 404 when no note has this id
    /// * `Err(NotesHandlerError)` when the read fails
    pub async fn get_note(&self, id: &str) -> Result<Response<Body>, NotesHandlerError> {
        match self.note_repo.get(id).await? {
            Some(note) => note_response(StatusCode::OK, &note),
            None => {
                info!(note_id = id, "note not found");
                Ok(message_response(StatusCode::NOT_FOUND, &ApiMessage::note_not_found()))
            }
        }
    }

    /// 500 response carrying the fault description
    pub fn internal_error_response(description: &str) -> Response<Body> {
        message_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            &ApiMessage::internal(description),
        )
    }
}

/// JSON response with the given status
fn json_response(status: StatusCode, body: String) -> Response<Body> {
    let mut response = Response::new(Body::Text(body));
    *response.status_mut() = status;
    response
        .headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    response
}

fn message_response(status: StatusCode, message: &ApiMessage) -> Response<Body> {
    json_response(status, message.to_json())
}

fn note_response(status: StatusCode, note: &Note) -> Result<Response<Body>, NotesHandlerError> {
    let body =
        serde_json::to_string(note).map_err(|e| NotesHandlerError::Serialization(e.to_string()))?;
    Ok(json_response(status, body))
}
