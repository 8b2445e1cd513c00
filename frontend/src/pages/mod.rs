pub mod board;
pub mod employee_detail;
pub mod employees;
pub mod login;
pub mod register;
