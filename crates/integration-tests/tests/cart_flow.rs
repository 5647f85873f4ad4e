//! End-to-end session: browse the stubbed catalog, fill the cart,
//! adjust quantities, flip the theme.

use std::sync::{Arc, Mutex};

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use shopzone_core::ProductId;
use shopzone_integration_tests::{TestContext, product_json};
use shopzone_storefront::stores::Theme;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn shopping_session() {
    let ctx = TestContext::new().await;

    Mock::given(method("GET"))
        .and(path("/products/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(product_json(1, "Widget", 10.0)))
        .mount(&ctx.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/products/2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(product_json(2, "Gadget", 5.0)))
        .mount(&ctx.server)
        .await;

    let catalog = ctx.state.catalog();
    let widget = catalog.get_product(ProductId::new(1)).await.expect("widget");
    let gadget = catalog.get_product(ProductId::new(2)).await.expect("gadget");

    let cart = ctx.state.cart();
    let totals: Arc<Mutex<Vec<Decimal>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&totals);
    cart.subscribe(move |snapshot| sink.lock().expect("sink lock").push(snapshot.total));

    // Same product twice merges into one line with quantity 2
    cart.add_item(&widget);
    cart.add_item(&widget);
    cart.add_item(&gadget);

    let lines = cart.lines();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].quantity, 2);
    assert_eq!(lines[0].title, "Widget");
    assert_eq!(lines[1].quantity, 1);
    assert_eq!(cart.total(), dec!(25));

    cart.update_quantity(ProductId::new(1), 5);
    assert_eq!(cart.total(), dec!(55));

    cart.remove_item(ProductId::new(2));
    assert_eq!(cart.total(), dec!(50));
    assert_eq!(cart.len(), 1);

    // Every mutation notified with the matching derived total
    assert_eq!(
        *totals.lock().expect("sink lock"),
        vec![dec!(10), dec!(20), dec!(25), dec!(55), dec!(50)]
    );

    // Theme flips light -> dark -> light
    let theme = ctx.state.theme();
    assert_eq!(theme.get(), Theme::Light);
    theme.toggle();
    assert_eq!(theme.get(), Theme::Dark);
    theme.toggle();
    assert_eq!(theme.get(), Theme::Light);
}

#[tokio::test]
async fn cart_survives_catalog_failures() {
    let ctx = TestContext::new().await;

    Mock::given(method("GET"))
        .and(path("/products/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(product_json(1, "Widget", 10.0)))
        .mount(&ctx.server)
        .await;

    let widget = ctx
        .state
        .catalog()
        .get_product(ProductId::new(1))
        .await
        .expect("widget");
    ctx.state.cart().add_item(&widget);

    // A failing catalog call leaves the cart untouched
    let err = ctx.state.catalog().get_product(ProductId::new(404)).await;
    assert!(err.is_err());
    assert_eq!(ctx.state.cart().total(), dec!(10));
    assert_eq!(ctx.state.cart().len(), 1);
}
