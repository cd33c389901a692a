use serde::{Deserialize, Serialize};
use surrealdb::sql::Thing;

use crate::database::table_names::BOOK_GENRE_TABLE_NAME;
use crate::middleware::utils::db_utils::ViewFieldSelector;

#[derive(Debug, Serialize, Deserialize)]
pub struct GenreView {
    pub id: Thing,
    pub name: String,
}

/// List projection: the full book row minus the description, plus the
/// genres reached through the book_genre relation.
#[derive(Debug, Serialize, Deserialize)]
pub struct BookView {
    pub id: Thing,
    pub title: String,
    pub author: String,
    pub views_count: i64,
    pub total_likes: i64,
    pub total_chapters: i64,
    pub cover_image: Option<String>,
    pub genres: Vec<GenreView>,
}

impl ViewFieldSelector for BookView {
    fn get_select_query_fields() -> String {
        format!(
            "id, title, author, views_count, total_likes, total_chapters, cover_image, ->{BOOK_GENRE_TABLE_NAME}->genre.* AS genres"
        )
    }
}

/// Single-book projection: everything the list shows plus the description.
#[derive(Debug, Serialize, Deserialize)]
pub struct BookDetailView {
    pub id: Thing,
    pub title: String,
    pub author: String,
    pub views_count: i64,
    pub total_likes: i64,
    pub total_chapters: i64,
    pub cover_image: Option<String>,
    pub description: Option<String>,
    pub genres: Vec<GenreView>,
}

impl ViewFieldSelector for BookDetailView {
    fn get_select_query_fields() -> String {
        format!(
            "id, title, author, views_count, total_likes, total_chapters, cover_image, description, ->{BOOK_GENRE_TABLE_NAME}->genre.* AS genres"
        )
    }
}

/// Compact card for ranked lists and per-user shelves.
#[derive(Debug, Serialize, Deserialize)]
pub struct BookCardView {
    pub id: Thing,
    pub title: String,
    pub cover_image: Option<String>,
}

impl ViewFieldSelector for BookCardView {
    fn get_select_query_fields() -> String {
        "id, title, cover_image".to_string()
    }
}
