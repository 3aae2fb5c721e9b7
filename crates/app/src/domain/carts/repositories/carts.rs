//! Carts Repository

use jiff::Timestamp;
use sqlx::{FromRow, Row, Sqlite, Transaction, query, query_as, sqlite::SqliteRow};

use crate::domain::carts::models::{Cart, CartId, UserId};

const GET_CART_SQL: &str = include_str!("../sql/get_cart.sql");
const CREATE_CART_SQL: &str = include_str!("../sql/create_cart.sql");
const TOUCH_CART_SQL: &str = include_str!("../sql/touch_cart.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct SqliteCartsRepository;

impl SqliteCartsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn get_cart(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        cart: CartId,
    ) -> Result<Cart, sqlx::Error> {
        query_as::<Sqlite, Cart>(GET_CART_SQL)
            .bind(cart.into_i64())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn create_cart(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        user: UserId,
    ) -> Result<Cart, sqlx::Error> {
        query_as::<Sqlite, Cart>(CREATE_CART_SQL)
            .bind(user.into_i64())
            .bind(Timestamp::now().as_microsecond())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn touch_cart(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        cart: CartId,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(TOUCH_CART_SQL)
            .bind(cart.into_i64())
            .bind(Timestamp::now().as_microsecond())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Cart {
    fn from_row(row: &'r SqliteRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: CartId::new(row.try_get("id")?),
            user_id: UserId::new(row.try_get("user_id")?),
            items: Vec::new(),
            created_at: try_get_timestamp(row, "created_at")?,
            updated_at: try_get_timestamp(row, "updated_at")?,
        })
    }
}

/// Timestamps are stored as microseconds since the Unix epoch.
pub(super) fn try_get_timestamp(row: &SqliteRow, col: &str) -> Result<Timestamp, sqlx::Error> {
    let micros: i64 = row.try_get(col)?;

    Timestamp::from_microsecond(micros).map_err(|e| sqlx::Error::ColumnDecode {
        index: col.to_string(),
        source: Box::new(e),
    })
}
