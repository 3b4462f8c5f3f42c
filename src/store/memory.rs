//! In-memory patient store
//!
//! Mirrors the MySQL store's observable behavior without a running database.
//! The HTTP integration tests run the real router against this store.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;

use super::{PatientStore, StoreError};
use crate::patient::{Patient, PatientDraft};

#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    // (insertion sequence, record); the sequence breaks createdAt ties so
    // list ordering stays deterministic under fast successive inserts.
    rows: Vec<(u64, Patient)>,
    next_seq: u64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn materialize(id: &str, seq: u64, draft: &PatientDraft) -> (u64, Patient) {
    let patient = Patient {
        id: id.to_string(),
        ho_ten: draft.ho_ten.clone().unwrap_or_default(),
        ngay_sinh: draft.ngay_sinh.clone().unwrap_or_default(),
        gioi_tinh: draft.gioi_tinh.clone(),
        dia_chi: draft.dia_chi.clone(),
        so_dien_thoai: draft.so_dien_thoai.clone(),
        nghe_nghiep: draft.nghe_nghiep.clone(),
        benh_nen: draft.benh_nen.clone(),
        ly_do_kham: draft.ly_do_kham.clone(),
        tien_su_nha_khoa: draft.tien_su_nha_khoa.clone(),
        chi_tiet: draft.chi_tiet.clone(),
        created_at: Utc::now(),
    };
    (seq, patient)
}

#[async_trait]
impl PatientStore for MemoryStore {
    async fn list(&self) -> Result<Vec<Patient>, StoreError> {
        let inner = self.inner.lock().await;
        let mut rows = inner.rows.clone();
        rows.sort_by(|a, b| b.1.created_at.cmp(&a.1.created_at).then(b.0.cmp(&a.0)));
        Ok(rows.into_iter().map(|(_, patient)| patient).collect())
    }

    async fn insert(&self, id: &str, draft: &PatientDraft) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().await;
        let seq = inner.next_seq;
        inner.next_seq += 1;
        let row = materialize(id, seq, draft);
        inner.rows.push(row);
        Ok(())
    }

    async fn fetch(&self, id: &str) -> Result<Option<Patient>, StoreError> {
        let inner = self.inner.lock().await;
        Ok(inner
            .rows
            .iter()
            .find(|(_, patient)| patient.id == id)
            .map(|(_, patient)| patient.clone()))
    }

    async fn update(&self, id: &str, draft: &PatientDraft) -> Result<u64, StoreError> {
        let mut inner = self.inner.lock().await;
        match inner.rows.iter_mut().find(|(_, patient)| patient.id == id) {
            Some((_, patient)) => {
                // Full replacement; id and createdAt are immutable.
                patient.ho_ten = draft.ho_ten.clone().unwrap_or_default();
                patient.ngay_sinh = draft.ngay_sinh.clone().unwrap_or_default();
                patient.gioi_tinh = draft.gioi_tinh.clone();
                patient.dia_chi = draft.dia_chi.clone();
                patient.so_dien_thoai = draft.so_dien_thoai.clone();
                patient.nghe_nghiep = draft.nghe_nghiep.clone();
                patient.benh_nen = draft.benh_nen.clone();
                patient.ly_do_kham = draft.ly_do_kham.clone();
                patient.tien_su_nha_khoa = draft.tien_su_nha_khoa.clone();
                patient.chi_tiet = draft.chi_tiet.clone();
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: &str) -> Result<u64, StoreError> {
        let mut inner = self.inner.lock().await;
        let before = inner.rows.len();
        inner.rows.retain(|(_, patient)| patient.id != id);
        Ok((before - inner.rows.len()) as u64)
    }
}
