pub mod accountant;
pub mod user;
