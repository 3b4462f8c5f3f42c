//! HTTP surface for the patient service.

pub mod errors;
pub mod patient_routes;
pub mod server;

pub use server::HttpServer;
