//! Order-card extraction: header fields plus the item aggregation cascade.

use std::collections::HashSet;

use ordex_core::{LineItem, OrderRecord};
use scraper::ElementRef;

use crate::items::{extract_item, extract_items};
use crate::options::ScrapeOptions;
use crate::selectors::{header, layout};
use crate::text::element_text;

/// Where items are looked for inside an order card, in priority order.
///
/// The first strategy that yields any item wins; later strategies are not
/// consulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemStrategy {
    /// Left item column of every shipment / delivery grouping.
    ShipmentColumns,
    /// Item boxes anywhere under the card.
    CardItemBoxes,
    /// Any left column under the card except the header column.
    LooseColumns,
}

impl ItemStrategy {
    pub const PRIORITY: [ItemStrategy; 3] = [
        ItemStrategy::ShipmentColumns,
        ItemStrategy::CardItemBoxes,
        ItemStrategy::LooseColumns,
    ];

    /// Runs this strategy against `card`. May return an empty list.
    #[must_use]
    pub fn collect(self, card: ElementRef<'_>, options: &ScrapeOptions) -> Vec<LineItem> {
        match self {
            ItemStrategy::ShipmentColumns => {
                // Nested groupings can share a column; read each column once.
                let mut seen = HashSet::new();
                card.select(&layout::SHIPMENT)
                    .filter_map(|shipment| shipment.select(&layout::LEFT_COLUMN).next())
                    .filter(|column| seen.insert(column.id()))
                    .flat_map(|column| extract_items(prefer_item_list(column), options))
                    .collect()
            }
            ItemStrategy::CardItemBoxes => card
                .select(&layout::ITEM_BOX)
                .filter_map(|item_box| extract_item(item_box, options))
                .collect(),
            ItemStrategy::LooseColumns => card
                .select(&layout::LEFT_COLUMN)
                .filter(|column| column.select(&header::LIST_ITEM).next().is_none())
                .flat_map(|column| extract_items(prefer_item_list(column), options))
                .collect(),
        }
    }
}

/// Extracts an [`OrderRecord`] from one order card.
///
/// Missing header fields come back as `None`; this never fails.
#[must_use]
pub fn extract_order(card: ElementRef<'_>, options: &ScrapeOptions) -> OrderRecord {
    let order_number = non_empty(element_text(card.select(&header::ORDER_ID).next()));
    let date = non_empty(order_date(card));
    let order_value = non_empty(order_value(card));
    let items = collect_items(card, options);

    tracing::debug!(
        order_number = order_number.as_deref().unwrap_or(""),
        items = items.len(),
        "extracted order card"
    );

    OrderRecord {
        order_number,
        date,
        order_value,
        status: None,
        items,
    }
}

/// Runs [`ItemStrategy::PRIORITY`] until one strategy yields items.
#[must_use]
pub fn collect_items(card: ElementRef<'_>, options: &ScrapeOptions) -> Vec<LineItem> {
    for strategy in ItemStrategy::PRIORITY {
        let items = strategy.collect(card, options);
        if !items.is_empty() {
            tracing::trace!(?strategy, items = items.len(), "item strategy matched");
            return items;
        }
    }
    Vec::new()
}

fn order_date(card: ElementRef<'_>) -> String {
    header_entry(card, |text| text.contains("Order placed"))
        .map(|entry| element_text(entry.select(&header::VALUE).next()))
        .unwrap_or_default()
}

fn order_value(card: ElementRef<'_>) -> String {
    let Some(entry) = header_entry(card, |text| text.contains("Total") || text.contains("total"))
    else {
        return String::new();
    };

    let value = [&header::VALUE, &header::VALUE_SPAN, &header::VALUE_BREAK_WORD]
        .iter()
        .map(|selector| element_text(entry.select(selector).next()))
        .find(|text| !text.is_empty());
    if let Some(value) = value {
        return value;
    }

    // Two-row header entry: label row then value row.
    let rows: Vec<ElementRef<'_>> = entry.select(&header::ROW).collect();
    if rows.len() >= 2 {
        return element_text(Some(rows[1]));
    }
    String::new()
}

/// First header list entry whose text satisfies `predicate`.
fn header_entry<'a>(
    card: ElementRef<'a>,
    predicate: impl Fn(&str) -> bool,
) -> Option<ElementRef<'a>> {
    card.select(&header::LIST_ITEM)
        .find(|entry| predicate(&entry.text().collect::<String>()))
}

/// The structured list inside `column` when present, else `column` itself.
fn prefer_item_list(column: ElementRef<'_>) -> ElementRef<'_> {
    column.select(&layout::ITEM_LIST).next().unwrap_or(column)
}

fn non_empty(text: String) -> Option<String> {
    (!text.is_empty()).then_some(text)
}

#[cfg(test)]
#[path = "order_test.rs"]
mod tests;
