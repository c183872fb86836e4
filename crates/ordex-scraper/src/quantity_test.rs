use scraper::{Html, Selector};

use super::*;

/// Parses `html` and runs `resolve_quantity` on the `#item` element.
fn quantity_of(html: &str) -> u32 {
    let doc = Html::parse_fragment(html);
    let sel = Selector::parse("#item").unwrap();
    let item = doc.select(&sel).next().expect("fixture has #item");
    resolve_quantity(item)
}

// -----------------------------------------------------------------------
// parse_positive_quantity
// -----------------------------------------------------------------------

#[test]
fn parses_plain_integer() {
    assert_eq!(parse_positive_quantity("4"), Some(4));
}

#[test]
fn parses_leading_integer_with_trailing_text() {
    assert_eq!(parse_positive_quantity(" 3 items"), Some(3));
    assert_eq!(parse_positive_quantity("2.5"), Some(2));
}

#[test]
fn rejects_zero_negative_and_text() {
    assert_eq!(parse_positive_quantity("0"), None);
    assert_eq!(parse_positive_quantity("-2"), None);
    assert_eq!(parse_positive_quantity("two"), None);
    assert_eq!(parse_positive_quantity(""), None);
}

// -----------------------------------------------------------------------
// resolve_quantity
// -----------------------------------------------------------------------

#[test]
fn defaults_to_one_without_any_signal() {
    assert_eq!(quantity_of(r#"<div id="item"><a href="/dp/B1">Thing</a></div>"#), 1);
}

#[test]
fn data_attribute_wins_over_everything_else() {
    let html = r#"<div id="item" data-quantity="5">
        <div data-steppervalue="2"><span data-a-selector="value">2</span></div>
        Qty: 9
    </div>"#;
    assert_eq!(quantity_of(html), 5);
}

#[test]
fn zero_data_attribute_falls_through_to_stepper() {
    let html = r#"<div id="item" data-quantity="0">
        <div data-steppervalue="2"><span data-a-selector="value"> 2 </span></div>
    </div>"#;
    assert_eq!(quantity_of(html), 2);
}

#[test]
fn non_numeric_stepper_falls_through_to_input() {
    let html = r#"<div id="item">
        <div data-steppervalue><span data-a-selector="value">many</span></div>
        <input name="quantityBox" value="7">
    </div>"#;
    assert_eq!(quantity_of(html), 7);
}

#[test]
fn select_reports_selected_option() {
    let html = r#"<div id="item">
        <select name="item.quantity">
            <option value="1">1</option>
            <option value="3" selected>3</option>
        </select>
    </div>"#;
    assert_eq!(quantity_of(html), 3);
}

#[test]
fn select_without_selection_reports_first_option() {
    let html = r#"<div id="item">
        <select name="item.quantity"><option value="6">6</option><option value="8">8</option></select>
    </div>"#;
    assert_eq!(quantity_of(html), 6);
}

#[test]
fn quantity_input_class_uses_text_when_value_missing() {
    let html = r#"<div id="item"><span class="sc-update-quantity-input">4</span></div>"#;
    assert_eq!(quantity_of(html), 4);
}

#[test]
fn negative_input_falls_through_to_text_pattern() {
    let html = r#"<div id="item">
        <input name="quantityBox" value="-1">
        <span>Qty: 3</span>
    </div>"#;
    assert_eq!(quantity_of(html), 3);
}

#[test]
fn text_pattern_qty_is_case_insensitive() {
    assert_eq!(quantity_of(r#"<div id="item"><span>QTY 12</span></div>"#), 12);
}

#[test]
fn text_pattern_quantity_label() {
    assert_eq!(
        quantity_of(r#"<div id="item"><span>Quantity: 2</span></div>"#),
        2
    );
}

#[test]
fn zero_text_pattern_defaults_to_one() {
    assert_eq!(quantity_of(r#"<div id="item"><span>Qty: 0</span></div>"#), 1);
}
