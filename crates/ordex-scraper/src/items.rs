//! Line-item extraction from an item container.
//!
//! A container holds items in one of two markup shapes. The current shape
//! puts `.item-box` elements directly inside the container. The legacy shape
//! wraps each box in a list entry. Only one shape is read per container: the
//! list traversal runs only when no item box is found directly.

use std::collections::HashSet;

use ordex_core::LineItem;
use scraper::ElementRef;

use crate::options::ScrapeOptions;
use crate::quantity::resolve_quantity;
use crate::selectors::{item as sel, layout};
use crate::text::{absolute_url, element_text, non_empty_attr};

/// Markup shape an item container was read with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemLayout {
    /// `.item-box` elements directly inside the container.
    ItemBoxes,
    /// `.item-box` elements reached through `li .a-list-item` entries.
    ListEntries,
}

/// Extracts every titled line item found in `container`.
#[must_use]
pub fn extract_items(container: ElementRef<'_>, options: &ScrapeOptions) -> Vec<LineItem> {
    let (layout, boxes) = locate_item_boxes(container);
    let items: Vec<LineItem> = boxes
        .into_iter()
        .filter_map(|item_box| extract_item(item_box, options))
        .collect();
    tracing::debug!(?layout, items = items.len(), "extracted items from container");
    items
}

/// Finds the item boxes inside `container` and reports which shape matched.
#[must_use]
pub fn locate_item_boxes(container: ElementRef<'_>) -> (ItemLayout, Vec<ElementRef<'_>>) {
    let direct: Vec<ElementRef<'_>> = container.select(&layout::ITEM_BOX).collect();
    if !direct.is_empty() {
        return (ItemLayout::ItemBoxes, direct);
    }

    let mut seen = HashSet::new();
    let boxes = container
        .select(&layout::LIST_ENTRY)
        .filter_map(|entry| {
            entry
                .select(&layout::ITEM_BOX)
                .next()
                .or_else(|| closest(entry, &layout::ITEM_BOX))
        })
        .filter(|item_box| seen.insert(item_box.id()))
        .collect();
    (ItemLayout::ListEntries, boxes)
}

/// Reads one item box. Returns `None` when no title can be found.
#[must_use]
pub fn extract_item(item_box: ElementRef<'_>, options: &ScrapeOptions) -> Option<LineItem> {
    let Some((title, anchor)) = title_anchor(item_box) else {
        tracing::trace!("skipping item box without a title");
        return None;
    };

    let product_url = non_empty_attr(anchor, "href")
        .map(|href| absolute_url(href, &options.site_origin))
        .unwrap_or_default();

    Some(LineItem {
        title,
        image_url: image_url(item_box, options),
        price: price(item_box),
        quantity: resolve_quantity(item_box),
        product_url,
    })
}

/// First anchor in the title chain whose text is non-empty.
fn title_anchor(item_box: ElementRef<'_>) -> Option<(String, ElementRef<'_>)> {
    sel::TITLE_CHAIN.iter().find_map(|selector| {
        item_box.select(selector).find_map(|anchor| {
            let text = element_text(Some(anchor));
            (!text.is_empty()).then_some((text, anchor))
        })
    })
}

/// High-resolution `data-a-hires` when present, else the rendered `src`.
fn image_url(item_box: ElementRef<'_>, options: &ScrapeOptions) -> String {
    item_box
        .select(&sel::IMAGE)
        .next()
        .and_then(|img| non_empty_attr(img, "data-a-hires").or_else(|| non_empty_attr(img, "src")))
        .map(|src| absolute_url(src, &options.site_origin))
        .unwrap_or_default()
}

/// Price display text; empty on most order-history views.
fn price(item_box: ElementRef<'_>) -> String {
    element_text(item_box.select(&sel::PRICE).next())
}

/// Nearest inclusive ancestor of `element` matching `selector`.
fn closest<'a>(element: ElementRef<'a>, selector: &scraper::Selector) -> Option<ElementRef<'a>> {
    if selector.matches(&element) {
        return Some(element);
    }
    element
        .ancestors()
        .filter_map(ElementRef::wrap)
        .find(|ancestor| selector.matches(ancestor))
}

#[cfg(test)]
#[path = "items_test.rs"]
mod tests;
