mod common;

use serde_json::{json, Value};

fn nested_reviews(value: &Value) -> &Vec<Value> {
    value["reviews"].as_array().expect("reviews array")
}

#[tokio::test]
async fn customer_scenario_matches_expected_document() {
    let app = common::TestApp::new().await;
    let (ada, _, _) = app.seed_scenario().await;

    let value = app.services.customers.serialize_customer(ada.id).await.unwrap();

    assert_eq!(
        value,
        json!({
            "id": 1,
            "name": "Ada",
            "reviews": [
                {
                    "id": 1,
                    "comment": "Great",
                    "item": {"id": 1, "name": "Widget", "price": 9.99}
                }
            ]
        })
    );
}

#[tokio::test]
async fn item_reviews_omit_item_back_reference() {
    let app = common::TestApp::new().await;
    let (ada, widget, _) = app.seed_scenario().await;
    let grace = app.customer("Grace").await;
    app.review("Solid", grace.id, widget.id).await;
    app.review("Bought another", ada.id, widget.id).await;

    let value = app.services.items.serialize_item(widget.id).await.unwrap();
    let reviews = nested_reviews(&value);

    assert_eq!(value["price"], json!(9.99));
    assert_eq!(reviews.len(), 3);
    for review in reviews {
        assert!(review.get("item").is_none());
        assert!(review["customer"].get("reviews").is_none());
    }
    assert_eq!(reviews[1]["customer"], json!({"id": grace.id, "name": "Grace"}));
}

#[tokio::test]
async fn review_document_stops_after_one_hop() {
    let app = common::TestApp::new().await;
    let (_, _, great) = app.seed_scenario().await;

    let value = app.services.reviews.serialize_review(great.id).await.unwrap();

    assert_eq!(
        value,
        json!({
            "id": 1,
            "comment": "Great",
            "customer": {"id": 1, "name": "Ada"},
            "item": {"id": 1, "name": "Widget", "price": 9.99}
        })
    );
}

#[tokio::test]
async fn customer_without_reviews_serializes_empty_collection() {
    let app = common::TestApp::new().await;
    let lonely = app.customer("Lonely").await;

    let value = app.services.customers.serialize_customer(lonely.id).await.unwrap();
    assert_eq!(value, json!({"id": lonely.id, "name": "Lonely", "reviews": []}));
}

#[tokio::test]
async fn review_display_matches_stored_row() {
    let app = common::TestApp::new().await;
    let (_, _, great) = app.seed_scenario().await;

    let detail = app.services.reviews.load_review(great.id).await.unwrap();
    assert_eq!(detail.to_string(), "<Review 1, Great, Customer 1, Item 1>");
}
