pub mod api_utils;
pub mod components;
pub mod data_access;
pub mod date_utils;
pub mod form_state;
pub mod graphql;
pub mod i18n;
pub mod icons;
pub mod list_state;
pub mod list_utils;
pub mod query_cache;
