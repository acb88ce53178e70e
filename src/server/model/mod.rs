//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. Parameter types carry the input of
//! a single service or repository operation.

pub mod classroom;
pub mod event;
pub mod tag;
pub mod user;
