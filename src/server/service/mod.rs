//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Enforcing registration, role and scheduling rules
//! - **Orchestration**: Resolving references across repositories before writing
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Error Mapping**: Turning missing rows and rule violations into distinct error kinds

pub mod classroom;
pub mod event;
pub mod participant;
pub mod tag;
pub mod user;


use crate::server::error::AppError;

/// Rejects an empty or whitespace-only text field with `AppError::BadRequest`.
fn ensure_present(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::BadRequest(format!("{} must not be empty", field)));
    }

    Ok(())
}
