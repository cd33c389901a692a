use serde::{Deserialize, Serialize};
use surrealdb::sql::Thing;

#[derive(Debug, Serialize, Deserialize)]
pub struct PageView {
    pub id: Thing,
    pub content: String,
    pub page_order: i64,
    pub chapter_id: Thing,
}
