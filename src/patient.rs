//! Patient data model
//!
//! The wire format uses camelCase keys, matching the column names of the
//! `patients` table (see `schema.sql`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A persisted patient record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
#[sqlx(rename_all = "camelCase")]
pub struct Patient {
    /// Server-generated UUID, immutable.
    pub id: String,
    /// Full name, required.
    pub ho_ten: String,
    /// Date of birth, kept as a string end to end.
    pub ngay_sinh: String,
    pub gioi_tinh: Option<String>,
    pub dia_chi: Option<String>,
    pub so_dien_thoai: Option<String>,
    pub nghe_nghiep: Option<String>,
    pub benh_nen: Option<String>,
    pub ly_do_kham: Option<String>,
    pub tien_su_nha_khoa: Option<String>,
    pub chi_tiet: Option<String>,
    /// Set by the storage layer at insertion, immutable.
    pub created_at: DateTime<Utc>,
}

/// Incoming patient fields for create and update requests.
///
/// Every field is optional at the parsing stage; only `hoTen` and `ngaySinh`
/// are checked for presence, nothing else is validated.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientDraft {
    #[serde(default)]
    pub ho_ten: Option<String>,
    #[serde(default)]
    pub ngay_sinh: Option<String>,
    #[serde(default)]
    pub gioi_tinh: Option<String>,
    #[serde(default)]
    pub dia_chi: Option<String>,
    #[serde(default)]
    pub so_dien_thoai: Option<String>,
    #[serde(default)]
    pub nghe_nghiep: Option<String>,
    #[serde(default)]
    pub benh_nen: Option<String>,
    #[serde(default)]
    pub ly_do_kham: Option<String>,
    #[serde(default)]
    pub tien_su_nha_khoa: Option<String>,
    #[serde(default)]
    pub chi_tiet: Option<String>,
}

impl PatientDraft {
    /// Presence check for the two mandatory fields. Empty strings count as
    /// missing; whitespace does not.
    pub fn has_required_fields(&self) -> bool {
        let present = |field: &Option<String>| field.as_deref().is_some_and(|s| !s.is_empty());
        present(&self.ho_ten) && present(&self.ngay_sinh)
    }
}
