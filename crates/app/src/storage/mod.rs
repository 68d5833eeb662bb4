//! Persisted Cart Store
//!
//! A single durable string slot holding the serialized cart between sessions.

use mockall::automock;

mod errors;
mod file;
mod memory;

pub use errors::CartStoreError;
pub use file::FileCartStore;
pub use memory::MemoryCartStore;

/// Default slot key for the cart.
pub const CART_KEY: &str = "cart";

/// Single-slot persistence for the session cart.
#[automock]
pub trait CartStore: Send + Sync {
    /// Read the stored value, if any.
    ///
    /// # Errors
    ///
    /// Returns an error when the slot exists but cannot be read.
    fn load(&self) -> Result<Option<String>, CartStoreError>;

    /// Replace the stored value.
    ///
    /// # Errors
    ///
    /// Returns an error when the value cannot be written durably.
    fn save(&self, value: &str) -> Result<(), CartStoreError>;
}
