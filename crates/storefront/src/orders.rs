//! Static mock order history.
//!
//! There is no order backend; the order history page renders a fixed
//! set of sample orders.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use shopzone_core::OrderStatus;

/// An entry in the mock order history.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    /// Display order reference (e.g., "ORD-8921-XJ").
    pub id: &'static str,
    /// Date the order was placed.
    pub placed_on: NaiveDate,
    /// Current fulfillment status.
    pub status: OrderStatus,
    /// Order total.
    pub total: Decimal,
    /// Number of items in the order.
    pub items: u32,
    /// Representative product image URL.
    pub image: &'static str,
}

/// The fixed sample order history.
#[must_use]
pub fn order_history() -> Vec<Order> {
    vec![
        Order {
            id: "ORD-8921-XJ",
            placed_on: date(2024, 2, 15),
            status: OrderStatus::Delivered,
            total: Decimal::new(24999, 2),
            items: 2,
            image: "https://cdn.dummyjson.com/product-images/1/thumbnail.jpg",
        },
        Order {
            id: "ORD-3321-MK",
            placed_on: date(2024, 2, 18),
            status: OrderStatus::Processing,
            total: Decimal::new(8950, 2),
            items: 1,
            image: "https://cdn.dummyjson.com/product-images/2/thumbnail.jpg",
        },
        Order {
            id: "ORD-1102-PP",
            placed_on: date(2024, 1, 20),
            status: OrderStatus::Cancelled,
            total: Decimal::new(1200, 2),
            items: 1,
            image: "https://cdn.dummyjson.com/product-images/5/thumbnail.jpg",
        },
    ]
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date")
}
