//! Order placement integration tests against a real SQLite schema.

mod common;

use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, Set};
use uuid::Uuid;

use bairro_market::application::orders::RequestedLine;
use bairro_market::application::{OrderService, PlaceOrder};
use bairro_market::domain::order::{
    OrderRepository, OrderRole, OrderStatus, PaymentMethod, PaymentStatus, PricedLine,
};
use bairro_market::infrastructure::database::entities::{order, order_item, product};
use bairro_market::shared::{AppError, DomainError};

use common::{provider, seed_customer, seed_merchant, seed_product, setup_db, stock_of};

fn cart(merchant_id: Uuid, items: Vec<(Uuid, i32)>) -> PlaceOrder {
    PlaceOrder {
        merchant_id,
        items: items
            .into_iter()
            .map(|(product_id, quantity)| RequestedLine {
                product_id,
                quantity,
            })
            .collect(),
        payment_method: PaymentMethod::Pix,
        delivery_address_id: None,
        notes: None,
    }
}

async fn order_count(db: &sea_orm::DatabaseConnection) -> u64 {
    order::Entity::find().count(db).await.unwrap()
}

#[tokio::test]
async fn placing_an_order_commits_header_lines_and_stock() {
    let db = setup_db().await;
    let customer = seed_customer(&db, "Ana").await;
    let merchant = seed_merchant(&db, "Padaria Central").await;
    let bread = seed_product(&db, merchant, "Bread", 10_00, 5).await;
    let cake = seed_product(&db, merchant, "Cake", 20_00, 3).await;

    let service = OrderService::new(provider(&db));
    let order = service
        .place_order(customer, cart(merchant, vec![(bread, 2), (cake, 1)]))
        .await
        .unwrap();

    assert_eq!(order.customer_id, customer);
    assert_eq!(order.merchant_id, merchant);
    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.payment_status, PaymentStatus::Pending);
    assert_eq!(order.payment_method, PaymentMethod::Pix);
    assert_eq!(order.total, Decimal::new(40_00, 2));

    assert_eq!(stock_of(&db, bread).await, 3);
    assert_eq!(stock_of(&db, cake).await, 2);

    let lines = order_item::Entity::find()
        .filter(order_item::Column::OrderId.eq(order.id))
        .all(&db)
        .await
        .unwrap();
    assert_eq!(lines.len(), 2);
}

#[tokio::test]
async fn unknown_product_leaves_no_rows() {
    let db = setup_db().await;
    let customer = seed_customer(&db, "Ana").await;
    let merchant = seed_merchant(&db, "Padaria Central").await;
    let bread = seed_product(&db, merchant, "Bread", 10_00, 5).await;

    let service = OrderService::new(provider(&db));
    let ghost = Uuid::new_v4();
    let err = service
        .place_order(customer, cart(merchant, vec![(bread, 1), (ghost, 1)]))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        AppError::Domain(DomainError::ProductNotFound(id)) if id == ghost
    ));
    assert_eq!(order_count(&db).await, 0);
    assert_eq!(stock_of(&db, bread).await, 5);
}

#[tokio::test]
async fn cross_merchant_cart_is_rejected() {
    let db = setup_db().await;
    let customer = seed_customer(&db, "Ana").await;
    let bakery = seed_merchant(&db, "Padaria Central").await;
    let grocer = seed_merchant(&db, "Quitanda do Zé").await;
    let bread = seed_product(&db, bakery, "Bread", 10_00, 5).await;
    let mango = seed_product(&db, grocer, "Mango", 4_00, 9).await;

    let service = OrderService::new(provider(&db));
    let err = service
        .place_order(customer, cart(bakery, vec![(bread, 1), (mango, 1)]))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        AppError::Domain(DomainError::CrossMerchantOrder { product_id }) if product_id == mango
    ));
    assert_eq!(order_count(&db).await, 0);
    assert_eq!(stock_of(&db, bread).await, 5);
    assert_eq!(stock_of(&db, mango).await, 9);
}

#[tokio::test]
async fn duplicate_product_ids_are_rejected() {
    let db = setup_db().await;
    let customer = seed_customer(&db, "Ana").await;
    let merchant = seed_merchant(&db, "Padaria Central").await;
    let bread = seed_product(&db, merchant, "Bread", 10_00, 5).await;

    let service = OrderService::new(provider(&db));
    let err = service
        .place_order(customer, cart(merchant, vec![(bread, 1), (bread, 2)]))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        AppError::Domain(DomainError::InvalidRequest(_))
    ));
    assert_eq!(order_count(&db).await, 0);
}

#[tokio::test]
async fn shortfall_is_caught_before_any_write() {
    let db = setup_db().await;
    let customer = seed_customer(&db, "Ana").await;
    let merchant = seed_merchant(&db, "Padaria Central").await;
    let bread = seed_product(&db, merchant, "Bread", 10_00, 2).await;

    let service = OrderService::new(provider(&db));
    let err = service
        .place_order(customer, cart(merchant, vec![(bread, 3)]))
        .await
        .unwrap_err();

    match err {
        AppError::Domain(DomainError::InsufficientStock { product_id, name }) => {
            assert_eq!(product_id, bread);
            assert_eq!(name, "Bread");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(order_count(&db).await, 0);
    assert_eq!(stock_of(&db, bread).await, 2);
}

#[tokio::test]
async fn last_unit_goes_to_exactly_one_order() {
    let db = setup_db().await;
    let ana = seed_customer(&db, "Ana").await;
    let bia = seed_customer(&db, "Bia").await;
    let merchant = seed_merchant(&db, "Padaria Central").await;
    let cake = seed_product(&db, merchant, "Cake", 20_00, 1).await;

    let service = OrderService::new(provider(&db));
    service
        .place_order(ana, cart(merchant, vec![(cake, 1)]))
        .await
        .unwrap();

    let err = service
        .place_order(bia, cart(merchant, vec![(cake, 1)]))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        AppError::Domain(DomainError::InsufficientStock { .. })
    ));
    assert_eq!(stock_of(&db, cake).await, 0);
    assert_eq!(order_count(&db).await, 1);
}

/// A cart validated against a stale catalog read must be refused atomically
/// at commit time: the guarded decrement finds too little stock, and the
/// already-inserted header and lines are rolled back with it.
#[tokio::test]
async fn commit_stage_shortfall_rolls_back_everything() {
    let db = setup_db().await;
    let customer = seed_customer(&db, "Ana").await;
    let merchant = seed_merchant(&db, "Padaria Central").await;
    let cake = seed_product(&db, merchant, "Cake", 20_00, 3).await;

    let repos = provider(&db);

    // Another order drains the stock between this cart's validation and
    // its commit.
    let rival = repos.orders();
    rival
        .place(
            bairro_market::domain::order::NewOrder {
                customer_id: seed_customer(&db, "Bia").await,
                merchant_id: merchant,
                total: Decimal::new(40_00, 2),
                payment_method: PaymentMethod::Cash,
                delivery_address_id: None,
                notes: None,
            },
            &[PricedLine {
                product_id: cake,
                quantity: 2,
                unit_price: Decimal::new(20_00, 2),
            }],
        )
        .await
        .unwrap();
    assert_eq!(stock_of(&db, cake).await, 1);

    // Stale lines still believe 3 units exist.
    let err = repos
        .orders()
        .place(
            bairro_market::domain::order::NewOrder {
                customer_id: customer,
                merchant_id: merchant,
                total: Decimal::new(60_00, 2),
                payment_method: PaymentMethod::Pix,
                delivery_address_id: None,
                notes: None,
            },
            &[PricedLine {
                product_id: cake,
                quantity: 3,
                unit_price: Decimal::new(20_00, 2),
            }],
        )
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        AppError::Domain(DomainError::InsufficientStock { .. })
    ));
    // Only the rival order survives; the failed commit left nothing behind.
    assert_eq!(order_count(&db).await, 1);
    assert_eq!(
        order_item::Entity::find().count(&db).await.unwrap(),
        1
    );
    assert_eq!(stock_of(&db, cake).await, 1);
}

#[tokio::test]
async fn non_storable_total_is_rejected_without_writes() {
    let db = setup_db().await;
    let customer = seed_customer(&db, "Ana").await;
    let merchant = seed_merchant(&db, "Padaria Central").await;
    // Max-priced product with enough stock that an i32::MAX-quantity cart
    // passes validation; the resulting total does not fit in stored cents.
    let gold = seed_product(&db, merchant, "Gold Bar", 9_999_999_999, i32::MAX).await;

    let service = OrderService::new(provider(&db));
    let err = service
        .place_order(customer, cart(merchant, vec![(gold, i32::MAX)]))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        AppError::Domain(DomainError::InvalidRequest(_))
    ));
    assert_eq!(order_count(&db).await, 0);
    assert_eq!(stock_of(&db, gold).await, i32::MAX);
}

#[tokio::test]
async fn line_prices_are_snapshots_not_references() {
    let db = setup_db().await;
    let customer = seed_customer(&db, "Ana").await;
    let merchant = seed_merchant(&db, "Padaria Central").await;
    let bread = seed_product(&db, merchant, "Bread", 10_00, 5).await;

    let service = OrderService::new(provider(&db));
    let placed = service
        .place_order(customer, cart(merchant, vec![(bread, 2)]))
        .await
        .unwrap();

    // Catalog price changes after the order
    let mut model: product::ActiveModel = product::Entity::find_by_id(bread)
        .one(&db)
        .await
        .unwrap()
        .unwrap()
        .into();
    model.price_cents = Set(99_00);
    model.update(&db).await.unwrap();

    let (order, lines) = service.get_order(customer, placed.id).await.unwrap();
    assert_eq!(order.total, Decimal::new(20_00, 2));
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].unit_price, Decimal::new(10_00, 2));
}

#[tokio::test]
async fn histories_are_newest_first_and_name_the_counterparty() {
    let db = setup_db().await;
    let customer = seed_customer(&db, "Ana").await;
    let bakery = seed_merchant(&db, "Padaria Central").await;
    let grocer = seed_merchant(&db, "Quitanda do Zé").await;
    let bread = seed_product(&db, bakery, "Bread", 10_00, 5).await;
    let mango = seed_product(&db, grocer, "Mango", 4_00, 9).await;

    let service = OrderService::new(provider(&db));
    service
        .place_order(customer, cart(bakery, vec![(bread, 1)]))
        .await
        .unwrap();
    tokio::time::sleep(std::time::Duration::from_millis(10)).await;
    service
        .place_order(customer, cart(grocer, vec![(mango, 2)]))
        .await
        .unwrap();

    let mine = service
        .list_orders(customer, OrderRole::Customer, 50)
        .await
        .unwrap();
    assert_eq!(mine.len(), 2);
    assert_eq!(mine[0].counterparty_name.as_deref(), Some("Quitanda do Zé"));
    assert_eq!(mine[1].counterparty_name.as_deref(), Some("Padaria Central"));
    assert!(mine[0].created_at >= mine[1].created_at);

    let sales = service
        .list_orders(bakery, OrderRole::Merchant, 50)
        .await
        .unwrap();
    assert_eq!(sales.len(), 1);
    assert_eq!(sales[0].counterparty_name.as_deref(), Some("Ana"));
    assert_eq!(sales[0].total, Decimal::new(10_00, 2));
}

#[tokio::test]
async fn list_limit_is_honored() {
    let db = setup_db().await;
    let customer = seed_customer(&db, "Ana").await;
    let merchant = seed_merchant(&db, "Padaria Central").await;
    let bread = seed_product(&db, merchant, "Bread", 10_00, 100).await;

    let service = OrderService::new(provider(&db));
    for _ in 0..3 {
        service
            .place_order(customer, cart(merchant, vec![(bread, 1)]))
            .await
            .unwrap();
    }

    let mine = service
        .list_orders(customer, OrderRole::Customer, 2)
        .await
        .unwrap();
    assert_eq!(mine.len(), 2);
}

#[tokio::test]
async fn order_detail_is_hidden_from_non_participants() {
    let db = setup_db().await;
    let customer = seed_customer(&db, "Ana").await;
    let stranger = seed_customer(&db, "Caio").await;
    let merchant = seed_merchant(&db, "Padaria Central").await;
    let bread = seed_product(&db, merchant, "Bread", 10_00, 5).await;

    let service = OrderService::new(provider(&db));
    let placed = service
        .place_order(customer, cart(merchant, vec![(bread, 1)]))
        .await
        .unwrap();

    assert!(service.get_order(customer, placed.id).await.is_ok());
    assert!(service.get_order(merchant, placed.id).await.is_ok());

    let err = service.get_order(stranger, placed.id).await.unwrap_err();
    assert!(matches!(
        err,
        AppError::Domain(DomainError::NotFound { entity: "Order", .. })
    ));
}
