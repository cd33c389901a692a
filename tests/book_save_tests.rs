mod helpers;

use helpers::book_helpers::{self, raw_id};
use helpers::user_helpers::create_fake_register_user;
use reading_server::models::view::book::{BookCardView, BookDetailView};
use reading_server::routes::book_routes::{SaveStatusResponse, SaveToggleResponse};
use serde_json::json;

test_with_server!(toggle_save_alternates, |server, ctx_state, config| {
    let user = create_fake_register_user(&server).await;
    let book = book_helpers::seed_book(&ctx_state.db.client, "Bookmarked", "V", 0).await;
    let book_id = raw_id(&book.id);

    let response = book_helpers::toggle_save(&server, &book_id, &user.id).await;
    response.assert_status_ok();
    let body = response.json::<SaveToggleResponse>();
    assert!(body.is_saved);
    assert_eq!(body.message, "Saved");

    let response = book_helpers::toggle_save(&server, &book_id, &user.id).await;
    let body = response.json::<SaveToggleResponse>();
    assert!(!body.is_saved);
    assert_eq!(body.message, "Unsaved");
});

test_with_server!(save_does_not_touch_like_counter, |server, ctx_state, config| {
    let user = create_fake_register_user(&server).await;
    let book = book_helpers::seed_book(&ctx_state.db.client, "Quietly Kept", "V", 0).await;
    let book_id = raw_id(&book.id);

    book_helpers::toggle_save(&server, &book_id, &user.id)
        .await
        .assert_status_ok();

    let response = server.get(format!("/books/{book_id}").as_str()).await;
    assert_eq!(response.json::<BookDetailView>().total_likes, 0);
});

test_with_server!(save_status_follows_toggle_parity, |server, ctx_state, config| {
    let user = create_fake_register_user(&server).await;
    let book = book_helpers::seed_book(&ctx_state.db.client, "Watched", "V", 0).await;
    let book_id = raw_id(&book.id);

    let response = book_helpers::get_save_status(&server, &book_id, &user.id).await;
    response.assert_status_ok();
    assert!(!response.json::<SaveStatusResponse>().is_saved);

    book_helpers::toggle_save(&server, &book_id, &user.id).await;
    let response = book_helpers::get_save_status(&server, &book_id, &user.id).await;
    assert!(response.json::<SaveStatusResponse>().is_saved);
});

test_with_server!(saved_books_lists_active_flags_only, |server, ctx_state, config| {
    let user = create_fake_register_user(&server).await;
    let db = &ctx_state.db.client;
    let kept = book_helpers::seed_book(db, "On Shelf", "V", 0).await;
    let removed = book_helpers::seed_book(db, "Off Shelf", "V", 0).await;

    book_helpers::toggle_save(&server, &raw_id(&kept.id), &user.id).await;
    book_helpers::toggle_save(&server, &raw_id(&removed.id), &user.id).await;
    book_helpers::toggle_save(&server, &raw_id(&removed.id), &user.id).await;

    let response = server
        .get("/books/save")
        .add_query_param("user_id", &user.id)
        .await;
    response.assert_status_ok();
    let cards = response.json::<Vec<BookCardView>>();
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].title, "On Shelf");
});

test_with_server!(save_requires_user_id, |server, ctx_state, config| {
    let book = book_helpers::seed_book(&ctx_state.db.client, "Unkept", "V", 0).await;
    let book_id = raw_id(&book.id);

    let response = server
        .post(format!("/books/{book_id}/save").as_str())
        .json(&json!({}))
        .await;
    response.assert_status_bad_request();

    let response = server.get("/books/save").await;
    response.assert_status_bad_request();
});
