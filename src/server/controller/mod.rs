//! HTTP request handlers.
//!
//! Controllers convert DTOs into operation parameters, call the service layer and
//! convert the returned domain models back into DTOs. Every handler carries a
//! `#[utoipa::path]` annotation so it shows up in the OpenAPI document.

pub mod classroom;
pub mod event;
pub mod participant;
pub mod tag;
pub mod user;
