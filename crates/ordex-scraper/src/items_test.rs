use scraper::{Html, Selector};

use super::*;

fn container_items(html: &str) -> Vec<LineItem> {
    let doc = Html::parse_fragment(html);
    let sel = Selector::parse("#container").unwrap();
    let container = doc.select(&sel).next().expect("fixture has #container");
    extract_items(container, &ScrapeOptions::default())
}

fn layout_of(html: &str) -> (ItemLayout, usize) {
    let doc = Html::parse_fragment(html);
    let sel = Selector::parse("#container").unwrap();
    let container = doc.select(&sel).next().expect("fixture has #container");
    let (layout, boxes) = locate_item_boxes(container);
    (layout, boxes.len())
}

#[test]
fn reads_direct_item_boxes() {
    let items = container_items(
        r#"<div id="container">
            <div class="item-box">
                <div class="yohtmlc-product-title"><a href="/dp/B0A">Widget A</a></div>
                <img src="https://m.media-amazon.com/images/I/a.jpg">
                <span class="a-price">$4.99</span>
            </div>
            <div class="item-box">
                <div class="yohtmlc-product-title"><a href="/dp/B0B">Widget B</a></div>
            </div>
        </div>"#,
    );
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].title, "Widget A");
    assert_eq!(items[0].product_url, "https://www.amazon.com/dp/B0A");
    assert_eq!(items[0].image_url, "https://m.media-amazon.com/images/I/a.jpg");
    assert_eq!(items[0].price, "$4.99");
    assert_eq!(items[0].quantity, 1);
    assert_eq!(items[1].title, "Widget B");
    assert_eq!(items[1].price, "");
}

#[test]
fn item_without_title_is_skipped() {
    let items = container_items(
        r#"<div id="container">
            <div class="item-box"><img src="https://m.media-amazon.com/x.jpg"></div>
            <div class="item-box"><a href="/dp/B0C">Kept</a></div>
        </div>"#,
    );
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].title, "Kept");
}

#[test]
fn empty_title_anchor_falls_through_to_next_selector() {
    let items = container_items(
        r#"<div id="container">
            <div class="item-box">
                <div class="yohtmlc-product-title"><a href="/dp/B0D"><img src="x.jpg"></a></div>
                <a class="a-link-normal" href="/gp/product/dp/B0D">Text Link Title</a>
            </div>
        </div>"#,
    );
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].title, "Text Link Title");
    assert_eq!(items[0].product_url, "https://www.amazon.com/gp/product/dp/B0D");
}

#[test]
fn hires_image_preferred_over_src() {
    let items = container_items(
        r#"<div id="container">
            <div class="item-box">
                <a href="/dp/B0E">Camera</a>
                <div class="product-image"><img src="https://m.media-amazon.com/small.jpg" data-a-hires="https://m.media-amazon.com/large.jpg"></div>
            </div>
        </div>"#,
    );
    assert_eq!(items[0].image_url, "https://m.media-amazon.com/large.jpg");
}

#[test]
fn absolute_product_url_is_kept() {
    let items = container_items(
        r#"<div id="container">
            <div class="item-box"><a href="https://smile.amazon.com/dp/B0F">Lamp</a></div>
        </div>"#,
    );
    assert_eq!(items[0].product_url, "https://smile.amazon.com/dp/B0F");
}

#[test]
fn quantity_is_scoped_to_each_item_box() {
    let items = container_items(
        r#"<div id="container">
            <div class="item-box"><a href="/dp/B01">One</a><span>Qty: 3</span></div>
            <div class="item-box"><a href="/dp/B02">Two</a></div>
        </div>"#,
    );
    assert_eq!(items[0].quantity, 3);
    assert_eq!(items[1].quantity, 1);
}

#[test]
fn list_entries_without_item_box_yield_nothing() {
    let html = r#"<ul id="container" class="a-unordered-list">
        <li><span class="a-list-item"><div class="item-box-wrapper"></div></span></li>
    </ul>"#;
    assert_eq!(layout_of(html), (ItemLayout::ListEntries, 0));
}

#[test]
fn legacy_list_entry_resolves_item_box_ancestor() {
    // The container sits inside the item box, so the box is reached through
    // the ancestor walk rather than a descendant search.
    let doc = Html::parse_fragment(
        r#"<div class="item-box"><section id="container">
            <ul><li><span class="a-list-item"><a href="/dp/B0G">Inner Title</a></span></li></ul>
            <ul><li><span class="a-list-item">Delivered</span></li></ul>
        </section></div>"#,
    );
    let sel = Selector::parse("#container").unwrap();
    let container = doc.select(&sel).next().unwrap();
    let (layout, boxes) = locate_item_boxes(container);
    assert_eq!(layout, ItemLayout::ListEntries);
    assert_eq!(boxes.len(), 1, "both entries share one item box");
    let items = extract_items(container, &ScrapeOptions::default());
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].title, "Inner Title");
}

#[test]
fn direct_item_box_wins_over_list_entry() {
    let html = r#"<div id="container"><ul>
        <li><span class="a-list-item"><div class="item-box"><a href="/dp/B0H">Dup</a></div></span></li>
    </ul></div>"#;
    // The item box is a descendant of the container, so the direct shape wins.
    assert_eq!(layout_of(html), (ItemLayout::ItemBoxes, 1));
}

#[test]
fn container_without_items_yields_nothing() {
    assert!(container_items(r#"<div id="container"><p>Nothing here</p></div>"#).is_empty());
}
