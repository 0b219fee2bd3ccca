pub mod aggregate;
pub mod graphql;
