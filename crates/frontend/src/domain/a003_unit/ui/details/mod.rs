mod view;
mod view_model;

pub use view::{UnitDetails, UnitDetailsPage};
pub use view_model::UnitDetailsViewModel;
