//! Line Items Repository

use jiff::Timestamp;
use sqlx::{FromRow, Row, Sqlite, Transaction, query, query_as, sqlite::SqliteRow};

use crate::domain::carts::models::{CartId, LineItem, LineItemId, NewLineItem, ProductId};

use super::carts::try_get_timestamp;

const GET_LINE_ITEMS_SQL: &str = include_str!("../sql/get_line_items.sql");
const UPSERT_LINE_ITEM_SQL: &str = include_str!("../sql/upsert_line_item.sql");
const DELETE_LINE_ITEMS_SQL: &str = include_str!("../sql/delete_line_items.sql");
const DELETE_LINE_ITEM_SQL: &str = include_str!("../sql/delete_line_item.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct SqliteLineItemsRepository;

impl SqliteLineItemsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn get_line_items(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        cart: CartId,
    ) -> Result<Vec<LineItem>, sqlx::Error> {
        query_as::<Sqlite, LineItem>(GET_LINE_ITEMS_SQL)
            .bind(cart.into_i64())
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn upsert_line_item(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        cart: CartId,
        item: &NewLineItem,
    ) -> Result<LineItem, sqlx::Error> {
        query_as::<Sqlite, LineItem>(UPSERT_LINE_ITEM_SQL)
            .bind(cart.into_i64())
            .bind(item.product_id.into_i64())
            .bind(item.quantity)
            .bind(Timestamp::now().as_microsecond())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn delete_line_items(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        cart: CartId,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_LINE_ITEMS_SQL)
            .bind(cart.into_i64())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    pub(crate) async fn delete_line_item(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        cart: CartId,
        item: LineItemId,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_LINE_ITEM_SQL)
            .bind(cart.into_i64())
            .bind(item.into_i64())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, SqliteRow> for LineItem {
    fn from_row(row: &'r SqliteRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: LineItemId::new(row.try_get("id")?),
            cart_id: CartId::new(row.try_get("cart_id")?),
            product_id: ProductId::new(row.try_get("product_id")?),
            quantity: row.try_get("quantity")?,
            created_at: try_get_timestamp(row, "created_at")?,
            updated_at: try_get_timestamp(row, "updated_at")?,
        })
    }
}
