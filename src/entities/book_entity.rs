use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use surrealdb::sql::Thing;

use crate::database::client::Db;
use crate::database::table_names::BOOK_GENRE_TABLE_NAME;
use crate::middleware::error::{AppError, AppResult};
use crate::middleware::utils::db_utils::{
    get_entity_view, get_list_qry, with_not_found_err, IdentIdName, QryBindingsVal, QryOrder,
    ViewFieldSelector,
};
use crate::models::view::book::BookCardView;

#[derive(Debug, Serialize, Deserialize)]
pub struct Book {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Thing>,
    pub title: String,
    pub author: String,
    pub views_count: i64,
    pub total_likes: i64,
    pub total_chapters: i64,
    pub cover_image: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct CreateBook {
    pub title: String,
    pub author: String,
    pub views_count: i64,
    pub total_chapters: i64,
    pub cover_image: Option<String>,
    pub description: Option<String>,
}

pub struct BookDbService<'a> {
    pub db: &'a Db,
}

pub const TABLE_NAME: &str = "book";

impl<'a> BookDbService<'a> {
    pub fn get_table_name() -> &'static str {
        TABLE_NAME
    }

    pub async fn mutate_db(&self) -> AppResult<()> {
        let sql = format!("
    DEFINE TABLE IF NOT EXISTS {TABLE_NAME} SCHEMAFULL;
    DEFINE FIELD IF NOT EXISTS title ON TABLE {TABLE_NAME} TYPE string ASSERT string::len(string::trim($value))>0;
    DEFINE FIELD IF NOT EXISTS author ON TABLE {TABLE_NAME} TYPE string;
    DEFINE FIELD IF NOT EXISTS views_count ON TABLE {TABLE_NAME} TYPE number DEFAULT 0;
    DEFINE FIELD IF NOT EXISTS total_likes ON TABLE {TABLE_NAME} TYPE number DEFAULT 0;
    DEFINE FIELD IF NOT EXISTS total_chapters ON TABLE {TABLE_NAME} TYPE number DEFAULT 0;
    DEFINE FIELD IF NOT EXISTS cover_image ON TABLE {TABLE_NAME} TYPE option<string>;
    DEFINE FIELD IF NOT EXISTS description ON TABLE {TABLE_NAME} TYPE option<string>;
    DEFINE FIELD IF NOT EXISTS created_at ON TABLE {TABLE_NAME} TYPE datetime DEFAULT time::now() VALUE $before OR time::now();
    // counter recomputes must not advance updated_at, only explicit writes do
    DEFINE FIELD IF NOT EXISTS updated_at ON TABLE {TABLE_NAME} TYPE datetime DEFAULT time::now() VALUE $value OR $before OR time::now();
    DEFINE INDEX IF NOT EXISTS idx_views_count ON TABLE {TABLE_NAME} COLUMNS views_count;
    DEFINE INDEX IF NOT EXISTS idx_updated_at ON TABLE {TABLE_NAME} COLUMNS updated_at;
");
        let mutation = self.db.query(sql).await?;
        mutation.check()?;

        Ok(())
    }

    pub async fn create(&self, data: CreateBook) -> AppResult<Book> {
        let created: Option<Book> = self.db.create(TABLE_NAME).content(data).await?;
        created.ok_or_else(|| AppError::Generic {
            description: "Failed to create book".to_string(),
        })
    }

    pub async fn get_view_by_id<T: for<'b> Deserialize<'b> + ViewFieldSelector>(
        &self,
        id: &str,
    ) -> AppResult<T> {
        let thing = Self::book_thing(id);
        let opt =
            get_entity_view::<T>(self.db, TABLE_NAME, &IdentIdName::Id(thing.clone())).await?;
        with_not_found_err(opt, thing.to_raw().as_str())
    }

    pub async fn get_all_views<T: for<'b> Deserialize<'b> + ViewFieldSelector>(
        &self,
    ) -> AppResult<Vec<T>> {
        let fields = T::get_select_query_fields();
        let mut res = self
            .db
            .query(format!("SELECT {fields} FROM {TABLE_NAME};"))
            .await?;
        let books = res.take::<Vec<T>>(0)?;
        Ok(books)
    }

    pub async fn get_top_viewed(&self, limit: i8) -> AppResult<Vec<BookCardView>> {
        self.get_cards_ordered_by("views_count", limit).await
    }

    pub async fn get_latest(&self, limit: i8) -> AppResult<Vec<BookCardView>> {
        self.get_cards_ordered_by("updated_at", limit).await
    }

    async fn get_cards_ordered_by(
        &self,
        order_by: &'static str,
        limit: i8,
    ) -> AppResult<Vec<BookCardView>> {
        let fields = BookCardView::get_select_query_fields();
        let order_dir = QryOrder::DESC;
        let qry = QryBindingsVal::new(
            format!(
                "SELECT {fields} FROM {TABLE_NAME} ORDER BY {order_by} {order_dir} LIMIT type::int($_limit_val);"
            ),
            HashMap::from([("_limit_val".to_string(), limit.to_string())]),
        );
        get_list_qry(self.db, qry).await
    }

    pub async fn search_by_title<T: for<'b> Deserialize<'b> + ViewFieldSelector>(
        &self,
        keyword: &str,
    ) -> AppResult<Vec<T>> {
        let fields = T::get_select_query_fields();
        let qry = QryBindingsVal::new(
            format!(
                "SELECT {fields} FROM {TABLE_NAME} WHERE string::contains(string::lowercase(title), string::lowercase($keyword));"
            ),
            HashMap::from([("keyword".to_string(), keyword.to_string())]),
        );
        get_list_qry(self.db, qry).await
    }

    pub async fn assign_genre(&self, book: Thing, genre: Thing) -> AppResult<()> {
        let res = self
            .db
            .query(format!("RELATE $book->{BOOK_GENRE_TABLE_NAME}->$genre;"))
            .bind(("book", book))
            .bind(("genre", genre))
            .await?;
        res.check()?;
        Ok(())
    }

    pub fn book_thing(id: &str) -> Thing {
        Thing::from((TABLE_NAME, id))
    }
}
