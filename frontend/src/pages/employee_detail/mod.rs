mod panel;
pub mod repository;
mod view_model;

pub use panel::EmployeeDetailPage;
