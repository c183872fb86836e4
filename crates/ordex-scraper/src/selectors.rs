//! CSS selectors for the order-history page.
//!
//! Every selector the extractor uses lives here so a markup change on the
//! site is a one-file edit. Field chains are ordered most specific first.

use std::sync::LazyLock;

use scraper::Selector;

fn parse(css: &str) -> Selector {
    Selector::parse(css).unwrap_or_else(|e| panic!("invalid built-in selector {css:?}: {e}"))
}

/// Page-level containers.
pub mod page {
    use super::{parse, LazyLock, Selector};

    /// One order card per placed order.
    pub static ORDER_CARD: LazyLock<Selector> =
        LazyLock::new(|| parse(".order-card.js-order-card"));
}

/// Order header fields.
pub mod header {
    use super::{parse, LazyLock, Selector};

    pub static ORDER_ID: LazyLock<Selector> =
        LazyLock::new(|| parse(r#".yohtmlc-order-id span[dir="ltr"]"#));

    /// Header entries such as "Order placed" and "Total".
    pub static LIST_ITEM: LazyLock<Selector> =
        LazyLock::new(|| parse(".order-header__header-list-item"));

    pub static VALUE: LazyLock<Selector> = LazyLock::new(|| parse(".a-size-base"));

    pub static VALUE_SPAN: LazyLock<Selector> = LazyLock::new(|| parse("span.a-size-base"));

    pub static VALUE_BREAK_WORD: LazyLock<Selector> = LazyLock::new(|| parse(".aok-break-word"));

    pub static ROW: LazyLock<Selector> = LazyLock::new(|| parse(".a-row"));
}

/// Shipment groupings and the columns that hold items.
pub mod layout {
    use super::{parse, LazyLock, Selector};

    pub static SHIPMENT: LazyLock<Selector> =
        LazyLock::new(|| parse(r#".delivery-box, [class*="shipment"]"#));

    pub static LEFT_COLUMN: LazyLock<Selector> =
        LazyLock::new(|| parse(".a-fixed-right-grid-col.a-col-left"));

    pub static ITEM_LIST: LazyLock<Selector> =
        LazyLock::new(|| parse(r#"ul.a-unordered-list, ul[role="list"]"#));

    pub static ITEM_BOX: LazyLock<Selector> = LazyLock::new(|| parse(".item-box"));

    /// Legacy markup: list entries that wrap an item box.
    pub static LIST_ENTRY: LazyLock<Selector> =
        LazyLock::new(|| parse("li span.a-list-item, li .a-list-item"));
}

/// Per-item field selectors.
pub mod item {
    use super::{parse, LazyLock, Selector};

    pub static TITLE_PRODUCT_LINK: LazyLock<Selector> =
        LazyLock::new(|| parse(".yohtmlc-product-title a"));

    pub static TITLE_DP_LINK: LazyLock<Selector> =
        LazyLock::new(|| parse(r#"a[href*="/dp/"]"#));

    pub static TITLE_NORMAL_DP_LINK: LazyLock<Selector> =
        LazyLock::new(|| parse(r#"a.a-link-normal[href*="/dp/"]"#));

    pub static TITLE_ANY_DP_LINK: LazyLock<Selector> =
        LazyLock::new(|| parse(r#"a[href*="dp/"]"#));

    /// Title anchors, most specific first.
    pub static TITLE_CHAIN: [&LazyLock<Selector>; 4] = [
        &TITLE_PRODUCT_LINK,
        &TITLE_DP_LINK,
        &TITLE_NORMAL_DP_LINK,
        &TITLE_ANY_DP_LINK,
    ];

    pub static IMAGE: LazyLock<Selector> =
        LazyLock::new(|| parse(r#"img[src*="media-amazon"], .product-image img"#));

    pub static PRICE: LazyLock<Selector> =
        LazyLock::new(|| parse(r#".a-price, [class*="price"], .a-color-price"#));
}

/// Quantity signals, in the order the resolver consults them.
pub mod quantity {
    use super::{parse, LazyLock, Selector};

    pub static STEPPER_VALUE: LazyLock<Selector> =
        LazyLock::new(|| parse(r#"[data-steppervalue] span[data-a-selector="value"]"#));

    pub static INPUT: LazyLock<Selector> = LazyLock::new(|| {
        parse(".sc-update-quantity-input, select[name$='quantity'], input[name='quantityBox']")
    });

    pub static SELECTED_OPTION: LazyLock<Selector> =
        LazyLock::new(|| parse("option[selected]"));

    pub static OPTION: LazyLock<Selector> = LazyLock::new(|| parse("option"));
}
