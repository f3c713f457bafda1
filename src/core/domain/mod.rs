//! Domain types.

mod env;
mod lifecycle;
mod secret;

pub use env::ChildEnv;
pub use lifecycle::{Lifecycle, Step};
pub use secret::SecretMap;
