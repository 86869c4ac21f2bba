pub mod consts;
pub mod errors;
pub mod handlers;
pub mod message_types;
pub mod models;
pub mod services;
