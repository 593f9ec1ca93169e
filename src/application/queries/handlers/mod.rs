//! Query Handlers 实现

mod arithmetic_handlers;
mod stats_handlers;

pub use arithmetic_handlers::*;
pub use stats_handlers::*;
