//! API request handlers.

mod analyze;
mod status;

pub use analyze::*;
pub use status::*;
