//! Full cart flows: catalog product -> line items, composer -> committed
//! build, quantity changes, and order-line flattening.

#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;

use microtek_cart::{BuildComposer, CartStore, MemoryStore};
use microtek_core::{BuildDraft, ComponentSlot, Product, order_lines};
use microtek_integration_tests::init_tracing;

fn catalog_product(json: &str) -> Product {
    serde_json::from_str(json).unwrap()
}

#[test]
fn catalog_product_to_cart_line() {
    init_tracing();
    let mut store = CartStore::open(MemoryStore::new(), "cart");

    // legacy catalog record with a French price field
    let mouse = catalog_product(
        r#"{"name": "Logitech G203", "reference": "M1", "category": "peripheral", "prixVente": "1500"}"#,
    );
    let item = mouse.line_item(2);
    store.add_line_item(item.name, item.reference, item.unit_price, item.quantity);

    assert_eq!(store.total(), Decimal::from(3000));
    assert_eq!(store.cart_item_count(), 2);
}

#[test]
fn composer_selection_commits_as_custom_build() {
    init_tracing();
    let mut store = CartStore::open(MemoryStore::new(), "cart");
    let mut composer = BuildComposer::new();

    let cpu = catalog_product(
        r#"{"name": "Ryzen 7 5800X", "reference": "C-01", "category": "cpu", "unitPrice": "30000"}"#,
    );
    let ram = catalog_product(
        r#"{"name": "Vengeance 16GB", "reference": "R-01", "category": "ram", "unitPrice": "8000"}"#,
    );
    composer.set_component(ComponentSlot::Cpu, cpu.into_component());
    composer.set_component(ComponentSlot::Ram, ram.into_component());
    composer.set_component_quantity(ComponentSlot::Ram, 2);
    assert_eq!(composer.total(), Decimal::from(46_000));

    let id = store.add_pc_build(composer.draft("Workstation", None));
    composer.reset();

    assert!(composer.is_empty());
    assert_eq!(store.total(), Decimal::from(46_000));
    assert_eq!(store.cart_item_count(), 1);

    // bump the CPU line inside the committed build
    store.set_pc_build_component_quantity(id, ComponentSlot::Cpu, 3);
    assert_eq!(store.total(), Decimal::from(106_000));
    assert_eq!(store.total(), store.state().computed_total());
}

#[test]
fn preconfigured_bundle_quantity_multiplies_price_and_count() {
    init_tracing();
    let mut store = CartStore::open(MemoryStore::new(), "cart");

    let id = store.add_pc_build(BuildDraft::preconfigured(
        "Office bundle",
        Decimal::from(120_000),
        1,
    ));
    store.set_pc_build_quantity(id, 3);

    assert_eq!(store.total(), Decimal::from(360_000));
    assert_eq!(store.cart_item_count(), 3);
}

#[test]
fn mixed_cart_flattens_to_order_lines() {
    init_tracing();
    let mut store = CartStore::open(MemoryStore::new(), "cart");

    store.add_line_item("Logitech G203", "M1", Decimal::from(1500), 2);
    store.add_pc_build(BuildDraft::preconfigured(
        "Office bundle",
        Decimal::from(120_000),
        2,
    ));

    let mut composer = BuildComposer::new();
    let cpu = catalog_product(
        r#"{"name": "Ryzen 5 5600", "reference": "C-02", "category": "cpu", "price": "22000"}"#,
    );
    composer.set_component(ComponentSlot::Cpu, cpu.into_component());
    composer.set_component_quantity(ComponentSlot::Cpu, 2);
    store.add_pc_build(composer.draft("Budget build", None));

    let lines = order_lines(store.state());
    assert_eq!(lines.len(), 3);

    // submission total matches the cart total
    let submitted: Decimal = lines
        .iter()
        .map(|line| line.unit_price * Decimal::from(line.quantity))
        .sum();
    assert_eq!(submitted, store.total());

    // the order consumer clears the cart on confirmed success
    store.clear();
    assert!(store.state().is_empty());
    assert!(order_lines(store.state()).is_empty());
}

#[test]
fn total_invariant_holds_across_arbitrary_sequences() {
    init_tracing();
    let mut store = CartStore::open(MemoryStore::new(), "cart");

    store.add_line_item("Mouse", "M1", Decimal::from(1500), 2);
    store.add_line_item("Keyboard", "K1", Decimal::from(4500), 1);
    let build = store.add_pc_build(BuildDraft::preconfigured(
        "Office bundle",
        Decimal::from(120_000),
        2,
    ));
    store.set_line_item_quantity("K1", 3);
    store.set_line_item_quantity("K1", 0);
    store.remove_line_item("M1");
    store.set_pc_build_quantity(build, 1);
    store.add_line_item("Mouse", "M1", Decimal::from(1500), 1);

    assert_eq!(store.total(), store.state().computed_total());
    assert_eq!(store.total(), Decimal::from(135_000));
}
