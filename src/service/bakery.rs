//! Read queries for bakeries.

use crate::error::AppError;
use crate::models::{BakedGood, Bakery, BakeryWithGoods};
use crate::service::BakedGoodService;
use sqlx::SqlitePool;

pub struct BakeryService;

impl BakeryService {
    /// Every bakery, in primary key order.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Bakery>, AppError> {
        let rows = sqlx::query_as::<_, Bakery>(
            "SELECT id, name, created_at, updated_at FROM bakeries ORDER BY id",
        )
        .fetch_all(pool)
        .await?;
        Ok(rows)
    }

    pub async fn find(pool: &SqlitePool, id: i64) -> Result<Option<Bakery>, AppError> {
        let row = sqlx::query_as::<_, Bakery>(
            "SELECT id, name, created_at, updated_at FROM bakeries WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;
        Ok(row)
    }

    /// Bakery plus its baked goods; two independent reads.
    pub async fn find_with_goods(pool: &SqlitePool, id: i64) -> Result<Option<BakeryWithGoods>, AppError> {
        let Some(bakery) = Self::find(pool, id).await? else {
            return Ok(None);
        };
        let goods: Vec<BakedGood> = BakedGoodService::baked_goods_by_bakery_id(pool, bakery.id).await?;
        tracing::debug!(bakery_id = bakery.id, goods = goods.len(), "loaded bakery");
        Ok(Some(BakeryWithGoods::new(bakery, goods)))
    }
}
