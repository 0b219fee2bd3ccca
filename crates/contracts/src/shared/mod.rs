pub mod graphql;
pub mod permissions;
pub mod timestamp;
pub mod validation;
