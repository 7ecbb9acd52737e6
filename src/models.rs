//! Row types for `bakeries` and `baked_goods`, and the composed views the API returns.
//! Each type's `Serialize` impl is its JSON shape.

use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::FromRow;

/// A shop. Serializes without its baked goods.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Bakery {
    pub id: i64,
    pub name: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// A priced item, optionally owned by a bakery.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct BakedGood {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub bakery_id: Option<i64>,
}

/// Baked good as nested under its bakery (no back-reference).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BakedGoodSummary {
    pub id: i64,
    pub name: String,
    pub price: f64,
}

impl From<BakedGood> for BakedGoodSummary {
    fn from(good: BakedGood) -> Self {
        BakedGoodSummary {
            id: good.id,
            name: good.name,
            price: good.price,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BakeryWithGoods {
    #[serde(flatten)]
    pub bakery: Bakery,
    pub baked_goods: Vec<BakedGoodSummary>,
}

impl BakeryWithGoods {
    pub fn new(bakery: Bakery, goods: Vec<BakedGood>) -> Self {
        BakeryWithGoods {
            bakery,
            baked_goods: goods.into_iter().map(BakedGoodSummary::from).collect(),
        }
    }
}
