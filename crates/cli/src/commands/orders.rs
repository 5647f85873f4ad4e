//! Order history command.

use shopzone_core::Price;
use shopzone_storefront::orders::order_history;

/// Print the mock order history.
#[allow(clippy::print_stdout)]
pub fn show() {
    let orders = order_history();
    for order in &orders {
        println!(
            "{:<12}  {}  {:<10}  {:>9}  {} item{}",
            order.id,
            order.placed_on.format("%Y-%m-%d"),
            order.status,
            Price::usd(order.total).display(),
            order.items,
            if order.items == 1 { "" } else { "s" },
        );
    }
}
