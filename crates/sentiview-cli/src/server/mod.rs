//! Web server for the interactive analysis page.

pub mod app;
pub mod error;
pub mod handlers;
pub mod state;
