pub mod form_field;
pub mod row_actions;
pub mod snackbar;
pub mod status;
pub mod table;

pub use form_field::{SelectField, SelectOption, TextField};
pub use row_actions::RowActions;
pub use snackbar::SnackbarView;
pub use status::{confirm, Empty, ErrorBox, Loader};
