//! Implementations of the presenter ports.

pub mod memory;
pub mod recording;
pub mod tracing_view;

pub use memory::*;
pub use recording::*;
pub use tracing_view::*;
