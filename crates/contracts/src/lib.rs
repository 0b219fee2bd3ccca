//! Shared types for the catalog admin front-end: records, DTOs,
//! GraphQL documents and form validation.

pub mod domain;
pub mod shared;
