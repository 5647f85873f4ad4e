//! Shopping cart store.
//!
//! Holds the ordered list of cart line items and exposes the mutation
//! operations. The total is always derived from the current lines,
//! never stored, so it cannot desync.
//!
//! All operations are total: invalid input (a quantity below 1) is
//! rejected with the prior state retained, and operations on absent
//! product ids are silent no-ops.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use rust_decimal::Decimal;
use shopzone_core::ProductId;
use tracing::debug;

use crate::catalog::Product;
use crate::stores::SubscriptionId;

type CartCallback = Arc<dyn Fn(&CartSnapshot) + Send + Sync>;

/// One product entry in the cart, keyed by product id.
///
/// Display fields are denormalized from the catalog record at add time.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    /// Catalog product ID (unique within the cart).
    pub product_id: ProductId,
    /// Product title, captured at add time.
    pub title: String,
    /// Unit price, captured at add time.
    pub price: Decimal,
    /// Category slug, captured at add time.
    pub category: String,
    /// Thumbnail URL, captured at add time.
    pub thumbnail: String,
    /// Quantity, always >= 1.
    pub quantity: u32,
}

impl CartLine {
    fn from_product(product: &Product) -> Self {
        Self {
            product_id: product.id,
            title: product.title.clone(),
            price: product.price,
            category: product.category.clone(),
            thumbnail: product.thumbnail.clone(),
            quantity: 1,
        }
    }

    /// Price of this line: unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

/// A consistent view of the cart delivered to subscribers.
#[derive(Debug, Clone)]
pub struct CartSnapshot {
    /// Line items in insertion (display) order.
    pub lines: Vec<CartLine>,
    /// Sum of unit price times quantity over all lines.
    pub total: Decimal,
}

/// Reactive cart state container.
///
/// Cheaply cloneable handle; all clones share the same state. Created
/// empty and discarded with the session - nothing is persisted.
#[derive(Clone, Default)]
pub struct CartStore {
    inner: Arc<CartStoreInner>,
}

#[derive(Default)]
struct CartStoreInner {
    lines: Mutex<Vec<CartLine>>,
    subscribers: Mutex<Vec<(u64, CartCallback)>>,
    next_subscriber: AtomicU64,
}

impl CartStore {
    /// Create an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Add a product to the cart.
    ///
    /// If a line with the same product id exists, its quantity is
    /// incremented by 1; otherwise a new line with quantity 1 is
    /// appended. Always succeeds.
    pub fn add_item(&self, product: &Product) {
        let snapshot = {
            let mut lines = self.lock_lines();
            match lines.iter_mut().find(|l| l.product_id == product.id) {
                Some(line) => line.quantity += 1,
                None => lines.push(CartLine::from_product(product)),
            }
            Self::snapshot_of(&lines)
        };
        self.notify(&snapshot);
    }

    /// Remove the line with the given product id.
    ///
    /// Silent no-op if no such line exists.
    pub fn remove_item(&self, product_id: ProductId) {
        let snapshot = {
            let mut lines = self.lock_lines();
            let before = lines.len();
            lines.retain(|l| l.product_id != product_id);
            if lines.len() == before {
                return;
            }
            Self::snapshot_of(&lines)
        };
        self.notify(&snapshot);
    }

    /// Set the quantity of the line with the given product id.
    ///
    /// A quantity below 1 is rejected and the line is left at its
    /// previous quantity - not removed, not zeroed. Silent no-op if no
    /// such line exists.
    pub fn update_quantity(&self, product_id: ProductId, quantity: u32) {
        if quantity < 1 {
            debug!(%product_id, quantity, "Rejected cart quantity below 1");
            return;
        }
        let snapshot = {
            let mut lines = self.lock_lines();
            let Some(line) = lines.iter_mut().find(|l| l.product_id == product_id) else {
                return;
            };
            if line.quantity == quantity {
                return;
            }
            line.quantity = quantity;
            Self::snapshot_of(&lines)
        };
        self.notify(&snapshot);
    }

    /// Empty the cart unconditionally.
    pub fn clear(&self) {
        let snapshot = {
            let mut lines = self.lock_lines();
            if lines.is_empty() {
                return;
            }
            lines.clear();
            Self::snapshot_of(&lines)
        };
        self.notify(&snapshot);
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// Derived total: sum of unit price times quantity over all lines.
    ///
    /// Pure read, recomputed on demand.
    #[must_use]
    pub fn total(&self) -> Decimal {
        Self::total_of(&self.lock_lines())
    }

    /// Snapshot of the current lines in display order.
    #[must_use]
    pub fn lines(&self) -> Vec<CartLine> {
        self.lock_lines().clone()
    }

    /// Number of distinct lines in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock_lines().len()
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock_lines().is_empty()
    }

    /// Total number of units across all lines.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.lock_lines()
            .iter()
            .map(|l| u64::from(l.quantity))
            .sum()
    }

    // =========================================================================
    // Subscriptions
    // =========================================================================

    /// Register a callback invoked after every mutation that changed
    /// the cart. Rejected and no-op mutations do not notify.
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&CartSnapshot) + Send + Sync + 'static,
    {
        let id = self.inner.next_subscriber.fetch_add(1, Ordering::Relaxed);
        self.lock_subscribers().push((id, Arc::new(callback)));
        SubscriptionId::new(id)
    }

    /// Drop a previously registered callback.
    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.lock_subscribers().retain(|(sid, _)| *sid != id.value());
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn lock_lines(&self) -> std::sync::MutexGuard<'_, Vec<CartLine>> {
        // Lock poisoning only happens if a holder panicked; the line
        // list is still structurally valid, so keep serving it.
        self.inner
            .lines
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn lock_subscribers(&self) -> std::sync::MutexGuard<'_, Vec<(u64, CartCallback)>> {
        self.inner
            .subscribers
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn total_of(lines: &[CartLine]) -> Decimal {
        lines.iter().map(CartLine::line_total).sum()
    }

    fn snapshot_of(lines: &[CartLine]) -> CartSnapshot {
        CartSnapshot {
            lines: lines.to_vec(),
            total: Self::total_of(lines),
        }
    }

    /// Deliver a snapshot to all subscribers. Called with no store
    /// locks held, so callbacks may read the store or re-subscribe.
    fn notify(&self, snapshot: &CartSnapshot) {
        let callbacks: Vec<CartCallback> = self
            .lock_subscribers()
            .iter()
            .map(|(_, cb)| Arc::clone(cb))
            .collect();
        for callback in callbacks {
            callback(snapshot);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn product(id: i64, price: f64) -> Product {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "title": format!("Product {id}"),
            "category": "test",
            "price": price,
            "thumbnail": format!("https://cdn.example.com/{id}/thumbnail.jpg"),
        }))
        .expect("valid product")
    }

    #[test]
    fn test_add_same_product_twice_merges_lines() {
        let cart = CartStore::new();
        let p = product(1, 10.0);
        cart.add_item(&p);
        cart.add_item(&p);

        let lines = cart.lines();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].quantity, 2);
        assert_eq!(cart.total(), dec!(20));
    }

    #[test]
    fn test_update_quantity_below_one_rejected() {
        let cart = CartStore::new();
        cart.add_item(&product(1, 10.0));

        cart.update_quantity(ProductId::new(1), 0);
        assert_eq!(cart.lines()[0].quantity, 1);
        assert_eq!(cart.total(), dec!(10));
    }

    #[test]
    fn test_remove_absent_id_is_noop() {
        let cart = CartStore::new();
        cart.add_item(&product(1, 10.0));

        cart.remove_item(ProductId::new(99));
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.total(), dec!(10));
    }

    #[test]
    fn test_update_absent_id_is_noop() {
        let cart = CartStore::new();
        cart.add_item(&product(1, 10.0));

        cart.update_quantity(ProductId::new(99), 5);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.total(), dec!(10));
    }

    #[test]
    fn test_clear_empties_cart() {
        let cart = CartStore::new();
        cart.add_item(&product(1, 10.0));
        cart.add_item(&product(2, 5.0));

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), Decimal::ZERO);
    }

    #[test]
    fn test_insertion_order_is_display_order() {
        let cart = CartStore::new();
        cart.add_item(&product(3, 1.0));
        cart.add_item(&product(1, 1.0));
        cart.add_item(&product(2, 1.0));

        let ids: Vec<i64> = cart.lines().iter().map(|l| l.product_id.as_i64()).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_scenario_walkthrough() {
        let cart = CartStore::new();
        let p1 = product(1, 10.0);
        let p2 = product(2, 5.0);

        cart.add_item(&p1);
        cart.add_item(&p1);
        cart.add_item(&p2);

        let lines = cart.lines();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            (lines[0].product_id.as_i64(), lines[0].quantity),
            (1, 2)
        );
        assert_eq!(
            (lines[1].product_id.as_i64(), lines[1].quantity),
            (2, 1)
        );
        assert_eq!(cart.total(), dec!(25));

        cart.update_quantity(ProductId::new(1), 5);
        assert_eq!(cart.total(), dec!(55));

        cart.remove_item(ProductId::new(2));
        assert_eq!(cart.total(), dec!(50));
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_item_count_sums_quantities() {
        let cart = CartStore::new();
        cart.add_item(&product(1, 1.0));
        cart.add_item(&product(1, 1.0));
        cart.add_item(&product(2, 1.0));
        assert_eq!(cart.item_count(), 3);
        assert_eq!(cart.len(), 2);
    }

    #[test]
    fn test_subscribers_observe_mutations() {
        let cart = CartStore::new();
        let seen: Arc<Mutex<Vec<Decimal>>> = Arc::new(Mutex::new(Vec::new()));

        let sink = Arc::clone(&seen);
        cart.subscribe(move |snapshot| {
            sink.lock().expect("sink lock").push(snapshot.total);
        });

        cart.add_item(&product(1, 10.0));
        cart.update_quantity(ProductId::new(1), 3);
        cart.clear();

        let totals = seen.lock().expect("sink lock").clone();
        assert_eq!(totals, vec![dec!(10), dec!(30), Decimal::ZERO]);
    }

    #[test]
    fn test_rejected_mutations_do_not_notify() {
        let cart = CartStore::new();
        cart.add_item(&product(1, 10.0));

        let count = Arc::new(Mutex::new(0_u32));
        let sink = Arc::clone(&count);
        cart.subscribe(move |_| *sink.lock().expect("sink lock") += 1);

        cart.update_quantity(ProductId::new(1), 0); // rejected
        cart.update_quantity(ProductId::new(99), 5); // absent id
        cart.remove_item(ProductId::new(99)); // absent id
        assert_eq!(*count.lock().expect("sink lock"), 0);

        cart.update_quantity(ProductId::new(1), 2);
        assert_eq!(*count.lock().expect("sink lock"), 1);
    }

    #[test]
    fn test_unsubscribe_stops_notifications() {
        let cart = CartStore::new();
        let count = Arc::new(Mutex::new(0_u32));
        let sink = Arc::clone(&count);
        let id = cart.subscribe(move |_| *sink.lock().expect("sink lock") += 1);

        cart.add_item(&product(1, 10.0));
        cart.unsubscribe(id);
        cart.add_item(&product(2, 5.0));

        assert_eq!(*count.lock().expect("sink lock"), 1);
    }

    #[test]
    fn test_clones_share_state() {
        let cart = CartStore::new();
        let view = cart.clone();
        cart.add_item(&product(1, 10.0));
        assert_eq!(view.total(), dec!(10));
    }
}
