//! Commands Layer
//!
//! Tauri command handlers that bridge frontend to the order store.

mod order_cmd;
mod log_cmd;

pub use order_cmd::*;
pub use log_cmd::*;
