//! Plain-text rendering of the order list.

use std::fmt::Write as _;

use ordex_core::{LineItem, OrderRecord};
use ordex_export::{format_currency, parse_currency};

use crate::state::PopupState;

pub const NO_ORDERS: &str = "No orders found. Open your Amazon orders page and try again.";

/// Renders the whole list view for `state`.
#[must_use]
pub fn render_order_list(state: &PopupState) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", state.heading());

    match state {
        PopupState::Error(message) => {
            let _ = writeln!(out, "{message}");
        }
        PopupState::Ready(orders) if orders.is_empty() => {
            let _ = writeln!(out, "{NO_ORDERS}");
        }
        PopupState::Ready(orders) => {
            for (index, order) in orders.iter().enumerate() {
                out.push('\n');
                out.push_str(&render_order(order, index + 1));
            }
        }
        PopupState::Idle | PopupState::Loading => {}
    }
    out
}

/// Renders one order with its 1-based position in the list.
#[must_use]
pub fn render_order(order: &OrderRecord, position: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{position}. Order items ({})", order.items.len());

    let order_number = order.display_order_number();
    let date = order.date.as_deref().unwrap_or_default();
    let value = order.order_value.as_deref().unwrap_or_default();
    if !order_number.is_empty() || !date.is_empty() || !value.is_empty() {
        if !order_number.is_empty() {
            let _ = writeln!(out, "   Order #: {order_number}");
        }
        if !date.is_empty() {
            let _ = writeln!(out, "   Order placed date: {date}");
        }
        let value = if value.is_empty() { "N/A" } else { value };
        let _ = writeln!(out, "   Order value: {value}");
    }

    if !order.items.is_empty() {
        let _ = writeln!(
            out,
            "   Subtotal ({} item{}): {}",
            order.items.len(),
            if order.items.len() > 1 { "s" } else { "" },
            format_currency(order_subtotal(order))
        );
    }

    for item in &order.items {
        out.push_str(&render_item(item));
    }
    out
}

fn render_item(item: &LineItem) -> String {
    let mut out = format!("   - {}\n", item.title);
    let _ = writeln!(out, "     Price: {}  Quantity: {}", item.price, item.quantity);
    if !item.product_url.is_empty() {
        let _ = writeln!(out, "     {}", item.product_url);
    }
    out
}

/// Estimated subtotal: each item's displayed price times its quantity.
#[must_use]
pub fn order_subtotal(order: &OrderRecord) -> f64 {
    order
        .items
        .iter()
        .map(|item| parse_currency(&item.price) * f64::from(item.quantity))
        .sum()
}
