pub mod auth;
pub mod board;
