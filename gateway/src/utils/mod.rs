pub mod cookies;
pub mod google;
pub mod jwt;
