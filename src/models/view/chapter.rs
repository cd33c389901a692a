use serde::{Deserialize, Serialize};
use surrealdb::sql::Thing;

#[derive(Debug, Serialize, Deserialize)]
pub struct ChapterView {
    pub id: Thing,
    pub title: String,
    pub chapter_order: i64,
}
