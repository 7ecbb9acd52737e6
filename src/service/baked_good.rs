//! Read queries for baked goods.

use crate::error::AppError;
use crate::models::BakedGood;
use sqlx::SqlitePool;

/// `price` may be stored as INTEGER under NUMERIC affinity; always read it back as REAL.
const BAKED_GOOD_COLUMNS: &str = "id, name, CAST(price AS REAL) AS price, bakery_id";

pub struct BakedGoodService;

impl BakedGoodService {
    /// Goods owned by one bakery, in the store's natural order.
    pub async fn baked_goods_by_bakery_id(pool: &SqlitePool, bakery_id: i64) -> Result<Vec<BakedGood>, AppError> {
        let sql = format!("SELECT {} FROM baked_goods WHERE bakery_id = ?", BAKED_GOOD_COLUMNS);
        let rows = sqlx::query_as::<_, BakedGood>(&sql)
            .bind(bakery_id)
            .fetch_all(pool)
            .await?;
        Ok(rows)
    }

    /// All goods, highest price first. Equal prices have no defined order.
    pub async fn list_by_price_desc(pool: &SqlitePool) -> Result<Vec<BakedGood>, AppError> {
        let sql = format!("SELECT {} FROM baked_goods ORDER BY price DESC", BAKED_GOOD_COLUMNS);
        let rows = sqlx::query_as::<_, BakedGood>(&sql).fetch_all(pool).await?;
        Ok(rows)
    }

    /// First row of `list_by_price_desc`, or None when the table is empty.
    pub async fn most_expensive(pool: &SqlitePool) -> Result<Option<BakedGood>, AppError> {
        let sql = format!("SELECT {} FROM baked_goods ORDER BY price DESC LIMIT 1", BAKED_GOOD_COLUMNS);
        let row = sqlx::query_as::<_, BakedGood>(&sql).fetch_optional(pool).await?;
        Ok(row)
    }
}
