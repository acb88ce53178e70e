//! Database repository layer for all domain entities.
//!
//! Each repository borrows the database connection, performs CRUD and finder queries
//! through SeaORM entities, and returns domain models so the service layer never sees
//! entity types. Multi-row writes run inside a transaction that commits on success
//! and rolls back when dropped on error.

pub mod classroom;
pub mod event;
pub mod participant;
pub mod tag;
pub mod user;

#[cfg(test)]
mod test;
