//! MongoDB repository tests
//!
//! These run against a throwaway MongoDB container and need Docker:
//! `cargo test -p domain_items -- --ignored`

use domain_items::*;
use test_utils::{TestDataBuilder, TestMongo};

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_create_then_get_round_trips_fields() {
    let mongo = TestMongo::new().await;
    let builder = TestDataBuilder::from_test_name("mongo_create_get");
    let repo = MongoItemRepository::with_collection(&mongo.database(), &builder.name("items", "a"));
    let service = ItemService::new(repo);

    let item = Item::new("widget", "a widget", 9.99);
    service.create_item(item.clone()).await.unwrap();

    let fetched = service.get_item("widget").await.unwrap();
    assert_eq!(fetched, item);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_update_and_delete_by_name() {
    let mongo = TestMongo::new().await;
    let builder = TestDataBuilder::from_test_name("mongo_update_delete");
    let repo = MongoItemRepository::with_collection(&mongo.database(), &builder.name("items", "b"));
    let service = ItemService::new(repo);

    service
        .create_item(Item::new("widget", "a widget", 9.99))
        .await
        .unwrap();

    let updated = service
        .update_item("widget", Item::new("widget", "new", 5.0))
        .await
        .unwrap();
    assert_eq!(updated, Item::new("widget", "new", 5.0));

    let ack = service.delete_item("widget").await.unwrap();
    assert_eq!(ack, ItemDeleted::default());

    assert!(matches!(
        service.get_item("widget").await,
        Err(ItemError::NotFound(_))
    ));
    assert!(matches!(
        service.delete_item("widget").await,
        Err(ItemError::NotFound(_))
    ));
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_list_is_capped() {
    let mongo = TestMongo::new().await;
    let builder = TestDataBuilder::from_test_name("mongo_list_cap");
    let repo = MongoItemRepository::with_collection(&mongo.database(), &builder.name("items", "c"));

    let docs: Vec<Item> = (0..1001)
        .map(|i| Item::new(format!("item-{i}"), "bulk", 1.0))
        .collect();
    repo.collection().insert_many(docs).await.unwrap();

    let service = ItemService::new(repo);
    let items = service.list_items().await.unwrap();
    assert_eq!(items.len(), 1000);
}
