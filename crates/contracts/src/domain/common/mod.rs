//! Common types and traits for all catalog records

pub mod field_key;
pub mod locale;
pub mod localized_title;
pub mod record_id;

// Re-exports
pub use field_key::FieldKey;
pub use locale::Locale;
pub use localized_title::LocalizedTitle;
pub use record_id::{remove_by_id, upsert_by_id, HasId};
