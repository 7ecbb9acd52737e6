//! Demo data for an empty store. Startup tooling only; nothing over HTTP writes.

use crate::error::AppError;
use sqlx::SqlitePool;

/// (bakery name, [(good name, price)])
const DEMO_BAKERIES: &[(&str, &[(&str, f64)])] = &[
    (
        "Sweet Treats",
        &[("Croissant", 3.5), ("Pain au Chocolat", 4.25), ("Baguette", 2.75)],
    ),
    (
        "Rise & Shine",
        &[("Sourdough Loaf", 8.0), ("Cinnamon Roll", 4.5)],
    ),
    (
        "Crumb Corner",
        &[("Blueberry Muffin", 3.0), ("Lemon Tart", 5.75), ("Croissant", 3.25)],
    ),
];

/// Insert the demo bakeries and goods when `bakeries` is empty.
/// Returns the number of bakeries inserted (0 if the store already had data).
pub async fn seed_if_empty(pool: &SqlitePool) -> Result<u64, AppError> {
    let mut tx = pool.begin().await?;
    let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM bakeries")
        .fetch_one(&mut *tx)
        .await?;
    if existing > 0 {
        tracing::info!(existing, "store already has bakeries, skipping seed");
        return Ok(0);
    }

    let mut inserted = 0u64;
    for (bakery_name, goods) in DEMO_BAKERIES {
        let bakery_id: i64 = sqlx::query_scalar("INSERT INTO bakeries (name) VALUES (?) RETURNING id")
            .bind(*bakery_name)
            .fetch_one(&mut *tx)
            .await?;
        for (good_name, price) in goods.iter() {
            sqlx::query("INSERT INTO baked_goods (name, price, bakery_id) VALUES (?, ?, ?)")
                .bind(*good_name)
                .bind(*price)
                .bind(bakery_id)
                .execute(&mut *tx)
                .await?;
        }
        inserted += 1;
    }
    tx.commit().await?;
    tracing::info!(bakeries = inserted, "seeded demo data");
    Ok(inserted)
}
