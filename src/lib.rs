//! patient-api - a minimal patient records CRUD service over MySQL

pub mod config;
pub mod http_server;
pub mod patient;
pub mod store;
