pub mod file;
pub mod photos;
