//! Patient CRUD Routes
//!
//! The four endpoint handlers: list, create, update, delete. Each request is
//! a single stateless cycle against the store; create and update finish with
//! a read-back so the caller sees server-assigned fields.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::Serialize;
use uuid::Uuid;

use super::errors::ApiError;
use crate::patient::{Patient, PatientDraft};
use crate::store::{PatientStore, StoreError};

// ==================
// Shared State
// ==================

/// Patient state shared across handlers
pub struct PatientState {
    pub store: Arc<dyn PatientStore>,
}

impl PatientState {
    pub fn new(store: Arc<dyn PatientStore>) -> Self {
        Self { store }
    }
}

// ==================
// Response Types
// ==================

/// Confirmation body for a successful delete.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: String,
    pub id: String,
}

// ==================
// Patient Routes
// ==================

/// Create patient routes
pub fn patient_routes(state: Arc<PatientState>) -> Router {
    Router::new()
        .route("/patients", get(list_patients_handler))
        .route("/patients", post(create_patient_handler))
        .route("/patients/:id", put(update_patient_handler))
        .route("/patients/:id", delete(delete_patient_handler))
        .with_state(state)
}

// ==================
// Handlers
// ==================

async fn list_patients_handler(
    State(state): State<Arc<PatientState>>,
) -> Result<Json<Vec<Patient>>, ApiError> {
    let patients = state.store.list().await?;
    Ok(Json(patients))
}

async fn create_patient_handler(
    State(state): State<Arc<PatientState>>,
    Json(draft): Json<PatientDraft>,
) -> Result<(StatusCode, Json<Patient>), ApiError> {
    if !draft.has_required_fields() {
        return Err(ApiError::MissingRequiredFields);
    }

    let id = Uuid::new_v4().to_string();
    state.store.insert(&id, &draft).await?;
    let patient = read_back(state.store.as_ref(), &id).await?;

    Ok((StatusCode::CREATED, Json(patient)))
}

async fn update_patient_handler(
    State(state): State<Arc<PatientState>>,
    Path(id): Path<String>,
    Json(draft): Json<PatientDraft>,
) -> Result<Json<Patient>, ApiError> {
    if !draft.has_required_fields() {
        return Err(ApiError::MissingRequiredFields);
    }

    let affected = state.store.update(&id, &draft).await?;
    if affected == 0 {
        return Err(ApiError::NotFound("No patient found to update."));
    }

    let patient = read_back(state.store.as_ref(), &id).await?;
    Ok(Json(patient))
}

async fn delete_patient_handler(
    State(state): State<Arc<PatientState>>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let affected = state.store.delete(&id).await?;
    if affected == 0 {
        return Err(ApiError::NotFound("No patient found to delete."));
    }

    Ok(Json(DeleteResponse {
        message: "Patient record deleted.".to_string(),
        id,
    }))
}

/// Re-read a row just written. The write/read pair is not transactional, so
/// a concurrent delete can make the read come back empty; that surfaces as a
/// generic storage failure.
async fn read_back(store: &dyn PatientStore, id: &str) -> Result<Patient, ApiError> {
    match store.fetch(id).await? {
        Some(patient) => Ok(patient),
        None => Err(ApiError::Storage(StoreError::Database(format!(
            "read-back of patient {id} returned no row"
        )))),
    }
}
