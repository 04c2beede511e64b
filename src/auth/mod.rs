//! Signed-in identity and login input.

mod credentials;
mod identity;

pub use credentials::*;
pub use identity::*;
