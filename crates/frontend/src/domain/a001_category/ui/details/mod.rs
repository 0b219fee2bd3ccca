//! Форма категории (MVVM):
//! - view_model.rs: состояние формы и команды load/save
//! - view.rs: компоненты Leptos

mod view;
mod view_model;

pub use view::{CategoryDetails, CategoryDetailsPage};
pub use view_model::CategoryDetailsViewModel;
