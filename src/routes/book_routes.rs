use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use surrealdb::sql::Thing;

use crate::entities::book_entity::BookDbService;
use crate::entities::chapter_entity::{self, ChapterDbService};
use crate::entities::interaction_entity::{InteractionDbService, InteractionKind};
use crate::entities::page_entity::PageDbService;
use crate::middleware::error::{AppError, AppResult};
use crate::middleware::mw_ctx::CtxState;
use crate::middleware::utils::string_utils::get_string_thing;
use crate::models::view::book::{BookCardView, BookDetailView, BookView};
use crate::models::view::chapter::ChapterView;
use crate::models::view::page::PageView;

pub fn routes() -> Router<Arc<CtxState>> {
    Router::new()
        .route("/books", get(get_books))
        .route("/books/top-viewed", get(get_top_viewed))
        .route("/books/latest", get(get_latest))
        .route("/books/search", get(search_books))
        .route("/books/like", get(get_liked_books))
        .route("/books/save", get(get_saved_books))
        .route("/books/:book_id", get(get_book))
        .route("/books/:book_id/like", post(toggle_like).get(get_like_status))
        .route("/books/:book_id/save", post(toggle_save).get(get_save_status))
        .route("/books/:book_id/chapters/first", get(get_first_chapter))
        .route("/books/:book_id/chapters/next", get(get_next_chapter))
        .route(
            "/books/:book_id/chapters/previous",
            get(get_previous_chapter),
        )
        .route("/books/chapters/:chapter_id/pages", get(get_chapter_pages))
}

#[derive(Debug, Deserialize)]
pub struct UserIdQuery {
    pub user_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub keyword: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ChapterNavQuery {
    pub current_order: Option<i64>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct InteractionInput {
    pub user_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LikeToggleResponse {
    pub message: String,
    pub is_liked: bool,
    pub total_likes: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SaveToggleResponse {
    pub message: String,
    pub is_saved: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LikeStatusResponse {
    pub is_liked: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SaveStatusResponse {
    pub is_saved: bool,
}

fn require_user_id(user_id: Option<String>) -> AppResult<Thing> {
    match user_id {
        Some(user_id) => get_string_thing(user_id),
        None => Err(AppError::MissingField {
            field: "user_id".to_string(),
        }),
    }
}

async fn get_books(State(state): State<Arc<CtxState>>) -> AppResult<Json<Vec<BookView>>> {
    let books = BookDbService {
        db: &state.db.client,
    }
    .get_all_views::<BookView>()
    .await?;
    Ok(Json(books))
}

async fn get_top_viewed(
    State(state): State<Arc<CtxState>>,
) -> AppResult<Json<Vec<BookCardView>>> {
    let books = BookDbService {
        db: &state.db.client,
    }
    .get_top_viewed(10)
    .await?;
    Ok(Json(books))
}

async fn get_latest(State(state): State<Arc<CtxState>>) -> AppResult<Json<Vec<BookCardView>>> {
    let books = BookDbService {
        db: &state.db.client,
    }
    .get_latest(10)
    .await?;
    Ok(Json(books))
}

async fn search_books(
    State(state): State<Arc<CtxState>>,
    Query(qry): Query<SearchQuery>,
) -> AppResult<Json<Vec<BookView>>> {
    let keyword = qry.keyword.ok_or(AppError::MissingField {
        field: "keyword".to_string(),
    })?;

    let books = BookDbService {
        db: &state.db.client,
    }
    .search_by_title::<BookView>(&keyword)
    .await?;
    Ok(Json(books))
}

async fn get_liked_books(
    State(state): State<Arc<CtxState>>,
    Query(qry): Query<UserIdQuery>,
) -> AppResult<Json<Vec<BookCardView>>> {
    let user = require_user_id(qry.user_id)?;
    let books = InteractionDbService {
        db: &state.db.client,
        kind: InteractionKind::Like,
    }
    .get_books_for_user(user)
    .await?;
    Ok(Json(books))
}

async fn get_saved_books(
    State(state): State<Arc<CtxState>>,
    Query(qry): Query<UserIdQuery>,
) -> AppResult<Json<Vec<BookCardView>>> {
    let user = require_user_id(qry.user_id)?;
    let books = InteractionDbService {
        db: &state.db.client,
        kind: InteractionKind::Save,
    }
    .get_books_for_user(user)
    .await?;
    Ok(Json(books))
}

async fn get_book(
    State(state): State<Arc<CtxState>>,
    Path(book_id): Path<String>,
) -> AppResult<Json<BookDetailView>> {
    let book = BookDbService {
        db: &state.db.client,
    }
    .get_view_by_id::<BookDetailView>(&book_id)
    .await?;
    Ok(Json(book))
}

async fn toggle_like(
    State(state): State<Arc<CtxState>>,
    Path(book_id): Path<String>,
    Json(body): Json<InteractionInput>,
) -> AppResult<Json<LikeToggleResponse>> {
    let user = require_user_id(body.user_id)?;
    let outcome = InteractionDbService {
        db: &state.db.client,
        kind: InteractionKind::Like,
    }
    .toggle(user, BookDbService::book_thing(&book_id))
    .await?;

    Ok(Json(LikeToggleResponse {
        message: if outcome.active { "Liked" } else { "Unliked" }.to_string(),
        is_liked: outcome.active,
        total_likes: outcome.total.unwrap_or(0),
    }))
}

async fn get_like_status(
    State(state): State<Arc<CtxState>>,
    Path(book_id): Path<String>,
    Query(qry): Query<UserIdQuery>,
) -> AppResult<Json<LikeStatusResponse>> {
    let user = require_user_id(qry.user_id)?;
    let is_liked = InteractionDbService {
        db: &state.db.client,
        kind: InteractionKind::Like,
    }
    .get_status(user, BookDbService::book_thing(&book_id))
    .await?;
    Ok(Json(LikeStatusResponse { is_liked }))
}

async fn toggle_save(
    State(state): State<Arc<CtxState>>,
    Path(book_id): Path<String>,
    Json(body): Json<InteractionInput>,
) -> AppResult<Json<SaveToggleResponse>> {
    let user = require_user_id(body.user_id)?;
    let outcome = InteractionDbService {
        db: &state.db.client,
        kind: InteractionKind::Save,
    }
    .toggle(user, BookDbService::book_thing(&book_id))
    .await?;

    Ok(Json(SaveToggleResponse {
        message: if outcome.active { "Saved" } else { "Unsaved" }.to_string(),
        is_saved: outcome.active,
    }))
}

async fn get_save_status(
    State(state): State<Arc<CtxState>>,
    Path(book_id): Path<String>,
    Query(qry): Query<UserIdQuery>,
) -> AppResult<Json<SaveStatusResponse>> {
    let user = require_user_id(qry.user_id)?;
    let is_saved = InteractionDbService {
        db: &state.db.client,
        kind: InteractionKind::Save,
    }
    .get_status(user, BookDbService::book_thing(&book_id))
    .await?;
    Ok(Json(SaveStatusResponse { is_saved }))
}

async fn get_first_chapter(
    State(state): State<Arc<CtxState>>,
    Path(book_id): Path<String>,
) -> AppResult<Json<ChapterView>> {
    let chapter = ChapterDbService {
        db: &state.db.client,
    }
    .get_first_of_book(BookDbService::book_thing(&book_id))
    .await?
    .ok_or(AppError::EntityFailIdNotFound {
        ident: "First chapter".to_string(),
    })?;
    Ok(Json(chapter))
}

async fn get_next_chapter(
    State(state): State<Arc<CtxState>>,
    Path(book_id): Path<String>,
    Query(qry): Query<ChapterNavQuery>,
) -> AppResult<Json<ChapterView>> {
    let current_order = qry.current_order.ok_or(AppError::MissingField {
        field: "current_order".to_string(),
    })?;

    let chapter = ChapterDbService {
        db: &state.db.client,
    }
    .get_next_of_book(BookDbService::book_thing(&book_id), current_order)
    .await?
    .ok_or(AppError::EntityFailIdNotFound {
        ident: "Next chapter".to_string(),
    })?;
    Ok(Json(chapter))
}

async fn get_previous_chapter(
    State(state): State<Arc<CtxState>>,
    Path(book_id): Path<String>,
    Query(qry): Query<ChapterNavQuery>,
) -> AppResult<Json<ChapterView>> {
    let current_order = qry.current_order.ok_or(AppError::MissingField {
        field: "current_order".to_string(),
    })?;

    let chapter = ChapterDbService {
        db: &state.db.client,
    }
    .get_previous_of_book(BookDbService::book_thing(&book_id), current_order)
    .await?
    .ok_or(AppError::EntityFailIdNotFound {
        ident: "Previous chapter".to_string(),
    })?;
    Ok(Json(chapter))
}

async fn get_chapter_pages(
    State(state): State<Arc<CtxState>>,
    Path(chapter_id): Path<String>,
) -> AppResult<Json<Vec<PageView>>> {
    let chapter = Thing::from((chapter_entity::TABLE_NAME, chapter_id.as_str()));
    let pages = PageDbService {
        db: &state.db.client,
    }
    .get_by_chapter(chapter)
    .await?;

    if pages.is_empty() {
        return Err(AppError::EntityFailIdNotFound {
            ident: "Pages for chapter".to_string(),
        });
    }
    Ok(Json(pages))
}
