/// Notes HTTP Lambda entry point
///
/// Receives API Gateway HTTP API requests and serves `POST /notes` and
/// `GET /notes/{id}` backed by DynamoDB.
use lambda_http::{run, service_fn, Body, Error, Request, Response};
use notes::application::NotesHandler;
use notes::infrastructure::{init_logging, ConfigError, DynamoDbConfig, DynamoNoteRepository};
use tokio::sync::OnceCell;
use tracing::{error, info};

/// Repository shared across warm invocations
///
/// Built on first use so a configuration error surfaces as a 500 response
/// instead of a failed cold start.
static NOTE_REPO: OnceCell<DynamoNoteRepository> = OnceCell::const_new();

/// Get the repository, initializing it on first call
async fn get_note_repo() -> Result<&'static DynamoNoteRepository, ConfigError> {
    NOTE_REPO
        .get_or_try_init(|| async {
            let config = DynamoDbConfig::from_env().await?;
            info!(table_name = config.table_name(), "note repository initialized");
            Ok(DynamoNoteRepository::new(
                config.client().clone(),
                config.table_name().to_string(),
            ))
        })
        .await
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    // structured logging
    init_logging();

    info!("notes Lambda function starting");

    run(service_fn(handler)).await
}

/// HTTP request handler
///
/// Always answers with a response; configuration and store faults become
/// 500 responses.
async fn handler(request: Request) -> Result<Response<Body>, Error> {
    let note_repo = match get_note_repo().await {
        Ok(repo) => repo,
        Err(err) => {
            error!(error = %err, "failed to initialize note repository");
            return Ok(NotesHandler::<DynamoNoteRepository>::internal_error_response(
                &err.to_string(),
            ));
        }
    };

    let notes_handler = NotesHandler::new(note_repo.clone());
    Ok(notes_handler.handle(&request).await)
}
