use serde::{Deserialize, Serialize};
use surrealdb::sql::Thing;

use crate::database::client::Db;
use crate::database::table_names::BOOK_GENRE_TABLE_NAME;
use crate::entities::book_entity::TABLE_NAME as BOOK_TABLE_NAME;
use crate::middleware::error::{AppError, AppResult};

#[derive(Debug, Serialize, Deserialize)]
pub struct Genre {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Thing>,
    pub name: String,
}

pub struct GenreDbService<'a> {
    pub db: &'a Db,
}

pub const TABLE_NAME: &str = "genre";

impl<'a> GenreDbService<'a> {
    pub fn get_table_name() -> &'static str {
        TABLE_NAME
    }

    pub async fn mutate_db(&self) -> AppResult<()> {
        let sql = format!("
    DEFINE TABLE IF NOT EXISTS {TABLE_NAME} SCHEMAFULL;
    DEFINE FIELD IF NOT EXISTS name ON TABLE {TABLE_NAME} TYPE string ASSERT string::len(string::trim($value))>0;
    DEFINE INDEX IF NOT EXISTS genre_name_idx ON TABLE {TABLE_NAME} COLUMNS name UNIQUE;

    DEFINE TABLE IF NOT EXISTS {BOOK_GENRE_TABLE_NAME} TYPE RELATION IN {BOOK_TABLE_NAME} OUT {TABLE_NAME} ENFORCED SCHEMAFULL PERMISSIONS NONE;
    DEFINE INDEX IF NOT EXISTS in_out_unique_idx ON {BOOK_GENRE_TABLE_NAME} FIELDS in, out UNIQUE;
");
        let mutation = self.db.query(sql).await?;
        mutation.check()?;

        Ok(())
    }

    pub async fn create(&self, name: &str) -> AppResult<Genre> {
        let created: Option<Genre> = self
            .db
            .create(TABLE_NAME)
            .content(Genre {
                id: None,
                name: name.to_string(),
            })
            .await?;
        created.ok_or_else(|| AppError::Generic {
            description: "Failed to create genre".to_string(),
        })
    }
}
