//! Secret backends.
//!
//! A backend turns the resolved connection parameters into a [`SecretMap`].
//! The only production backend is [`VaultClient`], which speaks either of the
//! two response schemas described in [`Schema`].
//!
//! ## Adding a New Backend
//!
//! 1. Implement the `SecretSource` trait
//! 2. Add the implementation in a new file next to `vault.rs`
//! 3. Re-export from this module

mod schema;
mod vault;

pub use schema::Schema;
pub use vault::VaultClient;

use crate::core::domain::SecretMap;
use crate::error::Result;

/// Something secrets can be fetched from.
pub trait SecretSource {
    /// Fetch all secrets at the configured location.
    ///
    /// An empty map means no secrets are stored there, which is not an error.
    ///
    /// # Errors
    ///
    /// Returns `SecretError` on transport failure, remote-reported errors, or
    /// a response that does not match the expected shape.
    fn fetch(&self) -> Result<SecretMap>;
}
