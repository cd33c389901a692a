use serde::{Deserialize, Serialize};
use surrealdb::sql::Thing;

use crate::database::client::Db;
use crate::entities::book_entity::TABLE_NAME as BOOK_TABLE_NAME;
use crate::middleware::error::{AppError, AppResult};
use crate::middleware::utils::db_utils::QryOrder;
use crate::models::view::chapter::ChapterView;

#[derive(Debug, Serialize, Deserialize)]
pub struct Chapter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Thing>,
    pub book: Thing,
    pub title: String,
    pub chapter_order: i64,
}

pub struct ChapterDbService<'a> {
    pub db: &'a Db,
}

pub const TABLE_NAME: &str = "chapter";

impl<'a> ChapterDbService<'a> {
    pub fn get_table_name() -> &'static str {
        TABLE_NAME
    }

    pub async fn mutate_db(&self) -> AppResult<()> {
        let sql = format!("
    DEFINE TABLE IF NOT EXISTS {TABLE_NAME} SCHEMAFULL;
    DEFINE FIELD IF NOT EXISTS book ON TABLE {TABLE_NAME} TYPE record<{BOOK_TABLE_NAME}>;
    DEFINE FIELD IF NOT EXISTS title ON TABLE {TABLE_NAME} TYPE string;
    DEFINE FIELD IF NOT EXISTS chapter_order ON TABLE {TABLE_NAME} TYPE number;
    DEFINE INDEX IF NOT EXISTS chapter_book_idx ON TABLE {TABLE_NAME} COLUMNS book;
    DEFINE INDEX IF NOT EXISTS chapter_book_order_idx ON TABLE {TABLE_NAME} COLUMNS book, chapter_order UNIQUE;
");
        let mutation = self.db.query(sql).await?;
        mutation.check()?;

        Ok(())
    }

    pub async fn create(&self, data: Chapter) -> AppResult<Chapter> {
        let created: Option<Chapter> = self.db.create(TABLE_NAME).content(data).await?;
        created.ok_or_else(|| AppError::Generic {
            description: "Failed to create chapter".to_string(),
        })
    }

    pub async fn get_first_of_book(&self, book: Thing) -> AppResult<Option<ChapterView>> {
        self.get_adjacent(book, None, QryOrder::ASC).await
    }

    // smallest order greater than the given one; gaps in the sequence are fine
    pub async fn get_next_of_book(
        &self,
        book: Thing,
        current_order: i64,
    ) -> AppResult<Option<ChapterView>> {
        self.get_adjacent(book, Some(current_order), QryOrder::ASC)
            .await
    }

    // largest order smaller than the given one
    pub async fn get_previous_of_book(
        &self,
        book: Thing,
        current_order: i64,
    ) -> AppResult<Option<ChapterView>> {
        self.get_adjacent(book, Some(current_order), QryOrder::DESC)
            .await
    }

    async fn get_adjacent(
        &self,
        book: Thing,
        current_order: Option<i64>,
        order_dir: QryOrder,
    ) -> AppResult<Option<ChapterView>> {
        let cmp = match (&current_order, &order_dir) {
            (None, _) => "",
            (Some(_), QryOrder::ASC) => "AND chapter_order>$current_order",
            (Some(_), QryOrder::DESC) => "AND chapter_order<$current_order",
        };
        let mut res = self
            .db
            .query(format!(
                "SELECT id, title, chapter_order FROM {TABLE_NAME} WHERE book=$book {cmp} ORDER BY chapter_order {order_dir} LIMIT 1;"
            ))
            .bind(("book", book))
            .bind(("current_order", current_order))
            .await?;
        let chapter = res.take::<Option<ChapterView>>(0)?;
        Ok(chapter)
    }
}
