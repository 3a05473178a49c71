/// Note repository backed by DynamoDB
///
/// Notes are stored one item per note, keyed by the `id` partition key.
use async_trait::async_trait;
use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client as DynamoDbClient;
use std::collections::HashMap;
use thiserror::Error;

use crate::domain::Note;

/// Error type for repository operations
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RepositoryError {
    /// Writing to DynamoDB failed
    #[error("Write error: {0}")]
    WriteError(String),

    /// Reading from DynamoDB failed
    #[error("Read error: {0}")]
    ReadError(String),

    /// Converting between a note and a DynamoDB item failed
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Note persistence
///
/// Abstracts the key-value store so the handler can run against DynamoDB in
/// production and an in-memory mock in tests.
#[async_trait]
pub trait NoteRepository: Send + Sync {
    /// Store a note under its id
    ///
    /// The write is unconditional; an existing item with the same id is
    /// replaced.
    async fn put(&self, note: &Note) -> Result<(), RepositoryError>;

    /// Fetch a note by id
    ///
    /// Items are expected to hold exactly `id`, `content` and `createdAt`;
    /// any other attribute is dropped when the item is decoded into a `Note`.
    ///
    /// # Returns
    /// * `Ok(Some(Note))` if found
    /// * `Ok(None)` if no item has this id
    /// * `Err(RepositoryError)` on failure
    async fn get(&self, id: &str) -> Result<Option<Note>, RepositoryError>;
}

/// DynamoDB implementation of NoteRepository
#[derive(Debug, Clone)]
pub struct DynamoNoteRepository {
    /// DynamoDB client
    client: DynamoDbClient,
    /// Notes table name
    table_name: String,
}

impl DynamoNoteRepository {
    /// Create a new DynamoNoteRepository
    ///
    /// # Arguments
    /// * `client` - DynamoDB client
    /// * `table_name` - name of the notes table
    pub fn new(client: DynamoDbClient, table_name: String) -> Self {
        Self { client, table_name }
    }

    /// Convert a note into a DynamoDB item
    fn to_item(note: &Note) -> Result<HashMap<String, AttributeValue>, RepositoryError> {
        serde_dynamo::to_item(note).map_err(|e| RepositoryError::SerializationError(e.to_string()))
    }

    /// Convert a DynamoDB item into a note
    fn from_item(item: HashMap<String, AttributeValue>) -> Result<Note, RepositoryError> {
        serde_dynamo::from_item(item)
            .map_err(|e| RepositoryError::SerializationError(e.to_string()))
    }
}

#[async_trait]
impl NoteRepository for DynamoNoteRepository {
    async fn put(&self, note: &Note) -> Result<(), RepositoryError> {
        let item = Self::to_item(note)?;

        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .send()
            .await
            .map_err(|e| RepositoryError::WriteError(DisplayErrorContext(&e).to_string()))?;

        Ok(())
    }

    async fn get(&self, id: &str) -> Result<Option<Note>, RepositoryError> {
        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key("id", AttributeValue::S(id.to_string()))
            .send()
            .await
            .map_err(|e| RepositoryError::ReadError(DisplayErrorContext(&e).to_string()))?;

        result.item.map(Self::from_item).transpose()
    }
}
