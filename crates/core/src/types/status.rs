//! Status enums for orders.

use serde::{Deserialize, Serialize};

/// Fulfillment status of an order in the order history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Order received and being prepared.
    #[default]
    Processing,
    /// Order delivered to the customer.
    Delivered,
    /// Order cancelled before fulfillment.
    Cancelled,
}

impl OrderStatus {
    /// Human-readable label for display.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Processing => "Processing",
            Self::Delivered => "Delivered",
            Self::Cancelled => "Cancelled",
        }
    }

    /// Whether the order is still in flight.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self, Self::Processing)
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.label())
    }
}
