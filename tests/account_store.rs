//! Account store behaviour against an in-memory SQLite database.
use gamble_bot::database::accounts::set_field_in;
use gamble_bot::database::{Account, AccountField, AccountStore, FieldWrite, StoreError};
use serenity::model::id::UserId;
use sqlx::sqlite::SqlitePoolOptions;

async fn memory_store() -> AccountStore {
    AccountStore::connect("sqlite::memory:")
        .await
        .expect("in-memory store")
}

async fn with_money(store: &AccountStore, id: u64, money: i64) -> UserId {
    let user = UserId::new(id);
    store.ensure_account(user).await.expect("ensure");
    store
        .set_field(AccountField::Money, FieldWrite::Set(money), user)
        .await
        .expect("seed money");
    user
}

async fn row_count(store: &AccountStore) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(store.pool())
        .await
        .expect("count")
}

#[tokio::test]
async fn ensure_account_is_idempotent() {
    let store = memory_store().await;
    let user = UserId::new(42);
    store.ensure_account(user).await.expect("first ensure");
    store.ensure_account(user).await.expect("second ensure");

    assert_eq!(row_count(&store).await, 1);
    assert_eq!(
        store.account(user).await.expect("account"),
        Account { id: 42, money: 0, last_daily_timestamp: 0 }
    );
}

#[tokio::test]
async fn reading_an_unknown_account_fails() {
    let store = memory_store().await;
    let err = store.money(UserId::new(7)).await.unwrap_err();
    assert!(matches!(err, StoreError::MissingAccount(7)));

    let err = store
        .set_field(AccountField::Money, FieldWrite::Add(5), UserId::new(7))
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::MissingAccount(7)));
    assert_eq!(row_count(&store).await, 0);
}

#[tokio::test]
async fn set_and_add_fields() {
    let store = memory_store().await;
    let user = with_money(&store, 1, 40).await;

    store
        .set_field(AccountField::Money, FieldWrite::Add(-15), user)
        .await
        .expect("add");
    store
        .set_field(AccountField::LastDailyTimestamp, FieldWrite::Set(1_700_000_000), user)
        .await
        .expect("set ts");

    assert_eq!(store.money(user).await.expect("money"), 25);
    assert_eq!(
        store.last_daily_timestamp(user).await.expect("ts"),
        1_700_000_000
    );
}

#[tokio::test]
async fn uncommitted_writes_are_rolled_back() {
    let store = memory_store().await;
    let user = with_money(&store, 3, 10).await;

    {
        let mut tx = store.pool().begin().await.expect("begin");
        set_field_in(&mut tx, AccountField::Money, FieldWrite::Add(1_000), user)
            .await
            .expect("write in tx");
        // dropped without commit
    }

    assert_eq!(store.money(user).await.expect("money"), 10);
}

#[tokio::test]
async fn claim_daily_updates_both_fields() {
    let store = memory_store().await;
    let user = with_money(&store, 5, 20).await;

    let balance = store.claim_daily(user, 1_000_000, 100).await.expect("claim");
    assert_eq!(balance, 120);
    assert_eq!(
        store.account(user).await.expect("account"),
        Account { id: 5, money: 120, last_daily_timestamp: 1_000_000 }
    );
}

#[tokio::test]
async fn transfer_conserves_money() {
    let store = memory_store().await;
    let a = with_money(&store, 10, 100).await;
    let b = with_money(&store, 11, 0).await;

    store.transfer(a, b, 30).await.expect("transfer");

    let (ma, mb) = (store.money(a).await.unwrap(), store.money(b).await.unwrap());
    assert_eq!((ma, mb), (70, 30));
    assert_eq!(ma + mb, 100);
}

#[tokio::test]
async fn transfer_to_missing_account_changes_nothing() {
    let store = memory_store().await;
    let a = with_money(&store, 10, 100).await;

    let err = store.transfer(a, UserId::new(99), 30).await.unwrap_err();
    assert!(matches!(err, StoreError::MissingAccount(99)));
    assert_eq!(store.money(a).await.unwrap(), 100);
}

#[tokio::test]
async fn top_n_orders_by_money_descending() {
    let store = memory_store().await;
    for (id, money) in [(1, 5), (2, 1), (3, 9), (4, 3), (5, 7)] {
        with_money(&store, id, money).await;
    }

    let top: Vec<i64> = store
        .top_n(3)
        .await
        .expect("top 3")
        .iter()
        .map(|e| e.money)
        .collect();
    assert_eq!(top, vec![9, 7, 5]);

    let all = store.top_n(50).await.expect("top 50");
    assert_eq!(all.len(), 5);
    assert!(all.windows(2).all(|w| w[0].money >= w[1].money));
    assert_eq!(all[0].user_id, 3);
}

#[tokio::test]
async fn duplicate_rows_are_fatal() {
    // A table without the primary key is the only way to get two rows for one id.
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("pool");
    sqlx::query(
        "CREATE TABLE users (id INTEGER, money INTEGER NOT NULL DEFAULT 0, last_daily_timestamp INTEGER NOT NULL DEFAULT 0)",
    )
    .execute(&pool)
    .await
    .expect("schema");
    sqlx::query("INSERT INTO users (id) VALUES (8), (8)")
        .execute(&pool)
        .await
        .expect("seed");

    let store = AccountStore::from_pool(pool);
    let err = store.ensure_account(UserId::new(8)).await.unwrap_err();
    assert!(matches!(
        err,
        StoreError::DuplicateAccount { user_id: 8, count: 2 }
    ));
}

#[tokio::test]
async fn overflowing_add_is_refused_and_rolled_back() {
    let store = memory_store().await;
    let a = with_money(&store, 20, 100).await;
    let b = with_money(&store, 21, i64::MAX - 5).await;

    let err = store
        .set_field(AccountField::Money, FieldWrite::Add(10), b)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        StoreError::Overflow { user_id: 21, column: "money", delta: 10 }
    ));

    // The sender's debit shares the transaction, so it is undone too.
    let err = store.transfer(a, b, 10).await.unwrap_err();
    assert!(matches!(err, StoreError::Overflow { user_id: 21, .. }));
    assert_eq!(store.money(a).await.unwrap(), 100);
    assert_eq!(store.money(b).await.unwrap(), i64::MAX - 5);

    let err = store.claim_daily(b, 1_000, 100).await.unwrap_err();
    assert!(matches!(err, StoreError::Overflow { .. }));
    assert_eq!(store.last_daily_timestamp(b).await.unwrap(), 0);

    // Every row still decodes as an integer.
    assert_eq!(store.top_n(50).await.expect("top").len(), 2);
}

#[tokio::test]
async fn negative_add_within_range_still_applies() {
    let store = memory_store().await;
    let user = with_money(&store, 22, i64::MIN + 10).await;
    store
        .set_field(AccountField::Money, FieldWrite::Add(-10), user)
        .await
        .expect("fits");
    assert_eq!(store.money(user).await.unwrap(), i64::MIN);

    let err = store
        .set_field(AccountField::Money, FieldWrite::Add(-1), user)
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::Overflow { .. }));
}
