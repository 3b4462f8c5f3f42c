//! Persistence seam for patient records
//!
//! Handlers talk to a [`PatientStore`] trait object. The production
//! implementation is [`mysql::MySqlPatientStore`]; [`memory::MemoryStore`]
//! backs the HTTP integration tests.

pub mod memory;
pub mod mysql;

use async_trait::async_trait;
use thiserror::Error;

use crate::patient::{Patient, PatientDraft};

/// Errors surfaced by a patient store. The cause string is for server-side
/// logs only and is never shown to clients.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        StoreError::Database(err.to_string())
    }
}

/// Storage operations needed by the patient handlers.
///
/// Implementations are shared across request tasks; two requests never share
/// an underlying connection.
#[async_trait]
pub trait PatientStore: Send + Sync {
    /// All records, newest `createdAt` first.
    async fn list(&self) -> Result<Vec<Patient>, StoreError>;

    /// Insert a full record under a caller-supplied id.
    async fn insert(&self, id: &str, draft: &PatientDraft) -> Result<(), StoreError>;

    /// Fetch one record by id.
    async fn fetch(&self, id: &str) -> Result<Option<Patient>, StoreError>;

    /// Replace every field of the record with `id`. Returns matched rows.
    async fn update(&self, id: &str, draft: &PatientDraft) -> Result<u64, StoreError>;

    /// Remove the record with `id`. Returns deleted rows.
    async fn delete(&self, id: &str) -> Result<u64, StoreError>;

    /// Release backend resources on shutdown.
    async fn close(&self) {}
}
