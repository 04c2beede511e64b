//! These traits define what the presenter needs from the outside world.

pub mod identity;
pub mod profile;
pub mod view;

pub use identity::*;
pub use profile::*;
pub use view::*;
