use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Statement, TransactionTrait};

use engine::{Bill, BillCount, DrawerStore, EngineError};
use migration::MigratorTrait;

async fn migrated_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    migration::Migrator::up(&db, None).await.unwrap();
    db
}

#[tokio::test]
async fn initialize_is_idempotent() {
    let db = migrated_db().await;
    let drawer = DrawerStore::new(&db);

    drawer.initialize().await.unwrap();
    drawer.increment(Bill::Ten).await.unwrap();
    drawer.add_lemonades(2).await.unwrap();
    drawer.initialize().await.unwrap();

    assert_eq!(drawer.count(Bill::Ten).await.unwrap(), 1);
    assert_eq!(drawer.lemonades_sold().await.unwrap(), 2);
}

#[tokio::test]
async fn decrement_stops_at_zero() {
    let db = migrated_db().await;
    let drawer = DrawerStore::new(&db);
    drawer.initialize().await.unwrap();

    assert!(!drawer.decrement(Bill::Five).await.unwrap());
    assert_eq!(drawer.count(Bill::Five).await.unwrap(), 0);

    drawer.increment(Bill::Five).await.unwrap();
    assert!(drawer.decrement(Bill::Five).await.unwrap());
    assert!(!drawer.decrement(Bill::Five).await.unwrap());
    assert_eq!(drawer.count(Bill::Five).await.unwrap(), 0);
}

#[tokio::test]
async fn missing_rows_read_as_zero() {
    let db = migrated_db().await;
    let drawer = DrawerStore::new(&db);

    assert_eq!(drawer.count(Bill::Twenty).await.unwrap(), 0);
    assert_eq!(drawer.lemonades_sold().await.unwrap(), 0);

    drawer.increment(Bill::Twenty).await.unwrap();
    assert_eq!(drawer.count(Bill::Twenty).await.unwrap(), 1);
}

#[tokio::test]
async fn deposit_and_restore() {
    let db = migrated_db().await;
    let drawer = DrawerStore::new(&db);
    drawer.initialize().await.unwrap();

    let bills: BillCount = [Bill::Twenty, Bill::Ten, Bill::Ten].into_iter().collect();
    drawer.deposit(&bills).await.unwrap();
    assert_eq!(drawer.counts().await.unwrap(), bills);

    assert!(drawer.decrement(Bill::Ten).await.unwrap());
    let consumed: BillCount = [Bill::Ten].into_iter().collect();
    drawer.restore(&consumed).await.unwrap();
    assert_eq!(drawer.counts().await.unwrap(), bills);
}

#[tokio::test]
async fn dropped_transaction_rolls_back() {
    let db = migrated_db().await;
    DrawerStore::new(&db).initialize().await.unwrap();

    {
        let db_tx = db.begin().await.unwrap();
        let drawer = DrawerStore::new(&db_tx);
        drawer.increment(Bill::Five).await.unwrap();
        drawer.add_lemonades(1).await.unwrap();
    }

    let drawer = DrawerStore::new(&db);
    assert_eq!(drawer.count(Bill::Five).await.unwrap(), 0);
    assert_eq!(drawer.lemonades_sold().await.unwrap(), 0);
}

#[tokio::test]
async fn clear_then_snapshot() {
    let db = migrated_db().await;
    let drawer = DrawerStore::new(&db);
    drawer.initialize().await.unwrap();
    drawer.increment(Bill::Five).await.unwrap();
    drawer.add_lemonades(1).await.unwrap();

    drawer.clear().await.unwrap();
    let snapshot = drawer.snapshot().await.unwrap();

    assert!(snapshot.bills.is_empty());
    assert_eq!(snapshot.lemonades_sold, 0);
    assert_eq!(snapshot.profit(), 0);
}

#[tokio::test]
async fn unknown_denomination_is_invalid_record() {
    let db = migrated_db().await;
    let drawer = DrawerStore::new(&db);
    drawer.initialize().await.unwrap();

    let backend = db.get_database_backend();
    db.execute(Statement::from_sql_and_values(
        backend,
        "INSERT INTO bill_counts (denomination, count) VALUES (?, ?)",
        vec![7.into(), 1.into()],
    ))
    .await
    .unwrap();

    assert_eq!(
        drawer.counts().await.unwrap_err(),
        EngineError::InvalidRecord("unknown denomination 7".to_string())
    );
}
