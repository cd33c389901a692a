use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use surrealdb::sql::Thing;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::database::client::Database;
use crate::entities::book_entity::{BookDbService, CreateBook};
use crate::entities::chapter_entity::{Chapter, ChapterDbService};
use crate::entities::genre_entity::GenreDbService;
use crate::entities::interaction_entity::{InteractionDbService, InteractionKind};
use crate::entities::local_user_entity::LocalUserDbService;
use crate::entities::page_entity::{Page, PageDbService};
use crate::middleware::error::AppResult;
use crate::middleware::mw_ctx::CtxState;
use crate::routes::{auth_routes, book_routes};

pub async fn run_migrations(database: &Database) -> AppResult<()> {
    let db = &database.client;

    LocalUserDbService { db }.mutate_db().await?;
    BookDbService { db }.mutate_db().await?;
    GenreDbService { db }.mutate_db().await?;
    ChapterDbService { db }.mutate_db().await?;
    PageDbService { db }.mutate_db().await?;
    InteractionDbService {
        db,
        kind: InteractionKind::Like,
    }
    .mutate_db()
    .await?;
    InteractionDbService {
        db,
        kind: InteractionKind::Save,
    }
    .mutate_db()
    .await?;
    Ok(())
}

/// Seeds a small catalog so the read endpoints answer out of the box on a
/// fresh development database. Skipped when any book already exists.
pub async fn create_default_data_for_dev(ctx_state: &Arc<CtxState>) -> AppResult<()> {
    if !ctx_state.is_development {
        return Ok(());
    }

    let db = &ctx_state.db.client;
    let book_service = BookDbService { db };

    let existing = book_service.get_top_viewed(1).await?;
    if !existing.is_empty() {
        return Ok(());
    }

    let genre_service = GenreDbService { db };
    let fantasy = genre_service.create("Fantasy").await?;
    let scifi = genre_service.create("Science Fiction").await?;

    let first = book_service
        .create(CreateBook {
            title: "The Hollow Crown".to_string(),
            author: "M. R. Vance".to_string(),
            views_count: 42,
            total_chapters: 2,
            cover_image: Some("/covers/hollow-crown.jpg".to_string()),
            description: Some("A deposed king bargains with the winter court.".to_string()),
        })
        .await?;
    let second = book_service
        .create(CreateBook {
            title: "Starlight Ledger".to_string(),
            author: "I. Okafor".to_string(),
            views_count: 7,
            total_chapters: 1,
            cover_image: None,
            description: Some("An accountant audits a generation ship.".to_string()),
        })
        .await?;

    let first_id = first.id.clone().expect("seeded book has id");
    let second_id = second.id.clone().expect("seeded book has id");
    book_service
        .assign_genre(first_id.clone(), fantasy.id.clone().expect("genre id"))
        .await?;
    book_service
        .assign_genre(second_id.clone(), scifi.id.clone().expect("genre id"))
        .await?;

    let chapter_service = ChapterDbService { db };
    let page_service = PageDbService { db };
    for (book_id, titles) in [
        (first_id, vec!["Winter Comes", "The Bargain"]),
        (second_id, vec!["Departure"]),
    ] {
        for (idx, title) in titles.iter().enumerate() {
            let chapter = chapter_service
                .create(Chapter {
                    id: None,
                    book: book_id.clone(),
                    title: title.to_string(),
                    chapter_order: (idx + 1) as i64,
                })
                .await?;
            let chapter_id: Thing = chapter.id.expect("seeded chapter has id");
            page_service
                .create(Page {
                    id: None,
                    chapter: chapter_id,
                    content: format!("{title} begins here."),
                    page_order: 1,
                })
                .await?;
        }
    }

    Ok(())
}

pub fn main_router(ctx_state: &Arc<CtxState>) -> Router {
    Router::new()
        .route("/", get(get_root))
        .route("/hc", get(get_hc))
        .merge(book_routes::routes())
        .merge(auth_routes::routes())
        .with_state(ctx_state.clone())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

async fn get_root() -> Response {
    Html("<h1>Reading Book API</h1>").into_response()
}

async fn get_hc() -> Response {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    (StatusCode::OK, format!("v{}", VERSION)).into_response()
}
