//! MySQL-backed patient store (sqlx)

use async_trait::async_trait;
use sqlx::mysql::{MySqlPool, MySqlPoolOptions};
use tracing::{info, warn};

use super::{PatientStore, StoreError};
use crate::config::DatabaseConfig;
use crate::patient::{Patient, PatientDraft};

/// Patient store over a bounded sqlx connection pool.
pub struct MySqlPatientStore {
    pool: MySqlPool,
}

impl MySqlPatientStore {
    /// Build the store with a lazily-connected pool. The server starts
    /// listening even while MySQL is unreachable; statements fail per
    /// request until it comes back.
    pub fn connect(config: &DatabaseConfig) -> Self {
        let pool = MySqlPoolOptions::new()
            .max_connections(config.max_connections)
            .connect_lazy_with(config.connect_options());
        Self { pool }
    }

    /// One diagnostic round-trip at startup. Logs the outcome, never fails.
    pub async fn ping(&self) {
        match sqlx::query("SELECT 1").execute(&self.pool).await {
            Ok(_) => info!("connected to MySQL"),
            Err(err) => warn!(error = %err, "MySQL unreachable at startup, continuing"),
        }
    }
}

#[async_trait]
impl PatientStore for MySqlPatientStore {
    async fn list(&self) -> Result<Vec<Patient>, StoreError> {
        let patients = sqlx::query_as::<_, Patient>(
            "SELECT id, hoTen, ngaySinh, gioiTinh, diaChi, soDienThoai, \
                    ngheNghiep, benhNen, lyDoKham, tienSuNhaKhoa, chiTiet, createdAt \
             FROM patients ORDER BY createdAt DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(patients)
    }

    async fn insert(&self, id: &str, draft: &PatientDraft) -> Result<(), StoreError> {
        sqlx::query(
            "INSERT INTO patients \
                 (id, hoTen, ngaySinh, gioiTinh, diaChi, soDienThoai, \
                  ngheNghiep, benhNen, lyDoKham, tienSuNhaKhoa, chiTiet) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(id)
        .bind(&draft.ho_ten)
        .bind(&draft.ngay_sinh)
        .bind(&draft.gioi_tinh)
        .bind(&draft.dia_chi)
        .bind(&draft.so_dien_thoai)
        .bind(&draft.nghe_nghiep)
        .bind(&draft.benh_nen)
        .bind(&draft.ly_do_kham)
        .bind(&draft.tien_su_nha_khoa)
        .bind(&draft.chi_tiet)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn fetch(&self, id: &str) -> Result<Option<Patient>, StoreError> {
        let patient = sqlx::query_as::<_, Patient>(
            "SELECT id, hoTen, ngaySinh, gioiTinh, diaChi, soDienThoai, \
                    ngheNghiep, benhNen, lyDoKham, tienSuNhaKhoa, chiTiet, createdAt \
             FROM patients WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(patient)
    }

    async fn update(&self, id: &str, draft: &PatientDraft) -> Result<u64, StoreError> {
        // Full replacement: omitted optional fields become NULL.
        let result = sqlx::query(
            "UPDATE patients SET \
                 hoTen = ?, ngaySinh = ?, gioiTinh = ?, diaChi = ?, soDienThoai = ?, \
                 ngheNghiep = ?, benhNen = ?, lyDoKham = ?, tienSuNhaKhoa = ?, chiTiet = ? \
             WHERE id = ?",
        )
        .bind(&draft.ho_ten)
        .bind(&draft.ngay_sinh)
        .bind(&draft.gioi_tinh)
        .bind(&draft.dia_chi)
        .bind(&draft.so_dien_thoai)
        .bind(&draft.nghe_nghiep)
        .bind(&draft.benh_nen)
        .bind(&draft.ly_do_kham)
        .bind(&draft.tien_su_nha_khoa)
        .bind(&draft.chi_tiet)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: &str) -> Result<u64, StoreError> {
        let result = sqlx::query("DELETE FROM patients WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}
