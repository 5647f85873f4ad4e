//! Client-side reactive state containers.
//!
//! The cart and theme stores are explicit context objects handed by
//! reference to whichever views need them, not ambient globals. Each
//! store guards its state with a single mutex around every
//! read-modify-write, and notifies registered subscribers after any
//! mutation that actually changed state.

pub mod cart;
pub mod theme;

pub use cart::{CartLine, CartSnapshot, CartStore};
pub use theme::{Theme, ThemeStore};

/// Handle returned by a store's `subscribe`, used to unsubscribe later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    pub(crate) const fn new(id: u64) -> Self {
        Self(id)
    }

    pub(crate) const fn value(self) -> u64 {
        self.0
    }
}
