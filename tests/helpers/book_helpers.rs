use axum_test::{TestResponse, TestServer};
use reading_server::database::client::Db;
use reading_server::entities::book_entity::{Book, BookDbService, CreateBook};
use reading_server::entities::chapter_entity::{Chapter, ChapterDbService};
use reading_server::entities::genre_entity::{Genre, GenreDbService};
use reading_server::entities::page_entity::{Page, PageDbService};
use serde_json::json;
use surrealdb::sql::Thing;

#[allow(dead_code)]
pub async fn seed_book(db: &Db, title: &str, author: &str, views_count: i64) -> Book {
    BookDbService { db }
        .create(CreateBook {
            title: title.to_string(),
            author: author.to_string(),
            views_count,
            total_chapters: 0,
            cover_image: Some(format!("/covers/{}.jpg", views_count)),
            description: Some(format!("About {title}")),
        })
        .await
        .expect("seed book")
}

#[allow(dead_code)]
pub async fn seed_genre(db: &Db, name: &str) -> Genre {
    GenreDbService { db }.create(name).await.expect("seed genre")
}

#[allow(dead_code)]
pub async fn assign_genre(db: &Db, book: &Book, genre: &Genre) {
    BookDbService { db }
        .assign_genre(
            book.id.clone().expect("book id"),
            genre.id.clone().expect("genre id"),
        )
        .await
        .expect("assign genre");
}

#[allow(dead_code)]
pub async fn seed_chapter(db: &Db, book: &Book, title: &str, chapter_order: i64) -> Chapter {
    ChapterDbService { db }
        .create(Chapter {
            id: None,
            book: book.id.clone().expect("book id"),
            title: title.to_string(),
            chapter_order,
        })
        .await
        .expect("seed chapter")
}

#[allow(dead_code)]
pub async fn seed_page(db: &Db, chapter: &Chapter, content: &str, page_order: i64) -> Page {
    PageDbService { db }
        .create(Page {
            id: None,
            chapter: chapter.id.clone().expect("chapter id"),
            content: content.to_string(),
            page_order,
        })
        .await
        .expect("seed page")
}

// path segment for /books/:book_id routes
#[allow(dead_code)]
pub fn raw_id(thing: &Option<Thing>) -> String {
    thing.clone().expect("record id").id.to_raw()
}

#[allow(dead_code)]
pub async fn toggle_like(server: &TestServer, book_id: &str, user_id: &str) -> TestResponse {
    server
        .post(format!("/books/{book_id}/like").as_str())
        .json(&json!({ "user_id": user_id }))
        .await
}

#[allow(dead_code)]
pub async fn toggle_save(server: &TestServer, book_id: &str, user_id: &str) -> TestResponse {
    server
        .post(format!("/books/{book_id}/save").as_str())
        .json(&json!({ "user_id": user_id }))
        .await
}

#[allow(dead_code)]
pub async fn get_like_status(server: &TestServer, book_id: &str, user_id: &str) -> TestResponse {
    server
        .get(format!("/books/{book_id}/like").as_str())
        .add_query_param("user_id", user_id)
        .await
}

#[allow(dead_code)]
pub async fn get_save_status(server: &TestServer, book_id: &str, user_id: &str) -> TestResponse {
    server
        .get(format!("/books/{book_id}/save").as_str())
        .add_query_param("user_id", user_id)
        .await
}
