use serde::{Deserialize, Serialize};
use surrealdb::sql::Thing;

use crate::database::client::Db;
use crate::entities::chapter_entity::TABLE_NAME as CHAPTER_TABLE_NAME;
use crate::middleware::error::{AppError, AppResult};
use crate::models::view::page::PageView;

#[derive(Debug, Serialize, Deserialize)]
pub struct Page {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Thing>,
    pub chapter: Thing,
    pub content: String,
    pub page_order: i64,
}

pub struct PageDbService<'a> {
    pub db: &'a Db,
}

pub const TABLE_NAME: &str = "page";

impl<'a> PageDbService<'a> {
    pub fn get_table_name() -> &'static str {
        TABLE_NAME
    }

    pub async fn mutate_db(&self) -> AppResult<()> {
        let sql = format!("
    DEFINE TABLE IF NOT EXISTS {TABLE_NAME} SCHEMAFULL;
    DEFINE FIELD IF NOT EXISTS chapter ON TABLE {TABLE_NAME} TYPE record<{CHAPTER_TABLE_NAME}>;
    DEFINE FIELD IF NOT EXISTS content ON TABLE {TABLE_NAME} TYPE string;
    DEFINE FIELD IF NOT EXISTS page_order ON TABLE {TABLE_NAME} TYPE number;
    DEFINE INDEX IF NOT EXISTS page_chapter_idx ON TABLE {TABLE_NAME} COLUMNS chapter;
    DEFINE INDEX IF NOT EXISTS page_chapter_order_idx ON TABLE {TABLE_NAME} COLUMNS chapter, page_order UNIQUE;
");
        let mutation = self.db.query(sql).await?;
        mutation.check()?;

        Ok(())
    }

    pub async fn create(&self, data: Page) -> AppResult<Page> {
        let created: Option<Page> = self.db.create(TABLE_NAME).content(data).await?;
        created.ok_or_else(|| AppError::Generic {
            description: "Failed to create page".to_string(),
        })
    }

    pub async fn get_by_chapter(&self, chapter: Thing) -> AppResult<Vec<PageView>> {
        let mut res = self
            .db
            .query(format!(
                "SELECT id, content, page_order, chapter AS chapter_id FROM {TABLE_NAME} WHERE chapter=$chapter ORDER BY page_order ASC;"
            ))
            .bind(("chapter", chapter))
            .await?;
        let pages = res.take::<Vec<PageView>>(0)?;
        Ok(pages)
    }
}
