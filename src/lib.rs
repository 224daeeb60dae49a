pub mod actors;
pub mod agent;
pub mod api;
pub mod config;
pub mod engine;
pub mod errors;
pub mod logging;
pub mod policies;
