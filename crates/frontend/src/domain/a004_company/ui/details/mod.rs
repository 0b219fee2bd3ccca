mod view;
mod view_model;

pub use view::{CompanyDetails, CompanyDetailsPage};
pub use view_model::CompanyDetailsViewModel;
