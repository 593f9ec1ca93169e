//! HTTP Handlers

mod arithmetic;
mod health;
mod root;
mod stats;

pub use arithmetic::*;
pub use health::*;
pub use root::*;
pub use stats::*;
