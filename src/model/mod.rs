//! JSON request and response types exchanged over the REST API.
//!
//! Field names are camelCase on the wire. Every type derives `ToSchema` so it appears
//! in the generated OpenAPI document.

pub mod api;
pub mod classroom;
pub mod event;
pub mod tag;
pub mod user;
