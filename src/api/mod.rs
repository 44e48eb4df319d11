//! Lambda handlers and response shaping

pub mod helpers;
pub mod list_handler;
pub mod query_handler;
