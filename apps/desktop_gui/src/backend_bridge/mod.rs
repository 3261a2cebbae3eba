//! Bridge between the UI thread and the async backend worker.

pub mod commands;
pub mod runtime;
pub mod save_dialog;
