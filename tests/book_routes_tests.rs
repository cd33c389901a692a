mod helpers;

use helpers::book_helpers::{self, raw_id};
use reading_server::middleware::error::ErrorResponseBody;
use reading_server::models::view::book::{BookCardView, BookDetailView, BookView};

test_with_server!(list_books_with_genres, |server, ctx_state, config| {
    let db = &ctx_state.db.client;
    let fantasy = book_helpers::seed_genre(db, "Fantasy").await;
    let horror = book_helpers::seed_genre(db, "Horror").await;

    let first = book_helpers::seed_book(db, "The Hollow Crown", "M. R. Vance", 5).await;
    let second = book_helpers::seed_book(db, "Grave Harvest", "P. Albright", 9).await;
    book_helpers::assign_genre(db, &first, &fantasy).await;
    book_helpers::assign_genre(db, &second, &horror).await;
    book_helpers::assign_genre(db, &second, &fantasy).await;

    let response = server.get("/books").await;
    response.assert_status_ok();

    let books = response.json::<Vec<BookView>>();
    assert_eq!(books.len(), 2);

    let listed_second = books
        .iter()
        .find(|b| b.title == "Grave Harvest")
        .expect("seeded book listed");
    assert_eq!(listed_second.author, "P. Albright");
    assert_eq!(listed_second.views_count, 9);
    assert_eq!(listed_second.genres.len(), 2);
});

test_with_server!(list_books_empty, |server, ctx_state, config| {
    let response = server.get("/books").await;
    response.assert_status_ok();
    assert!(response.json::<Vec<BookView>>().is_empty());
});

test_with_server!(top_viewed_orders_by_views, |server, ctx_state, config| {
    let db = &ctx_state.db.client;
    book_helpers::seed_book(db, "Middling", "A", 50).await;
    book_helpers::seed_book(db, "Obscure", "B", 1).await;
    book_helpers::seed_book(db, "Smash Hit", "C", 900).await;

    let response = server.get("/books/top-viewed").await;
    response.assert_status_ok();

    let cards = response.json::<Vec<BookCardView>>();
    let titles: Vec<&str> = cards.iter().map(|c| c.title.as_str()).collect();
    assert_eq!(titles, vec!["Smash Hit", "Middling", "Obscure"]);
});

test_with_server!(top_viewed_caps_at_ten, |server, ctx_state, config| {
    let db = &ctx_state.db.client;
    for i in 0..12 {
        book_helpers::seed_book(db, &format!("Book {i}"), "A", i).await;
    }

    let response = server.get("/books/top-viewed").await;
    response.assert_status_ok();
    assert_eq!(response.json::<Vec<BookCardView>>().len(), 10);
});

test_with_server!(latest_orders_by_updated_at, |server, ctx_state, config| {
    let db = &ctx_state.db.client;
    book_helpers::seed_book(db, "Older", "A", 0).await;
    book_helpers::seed_book(db, "Newest", "B", 0).await;

    let response = server.get("/books/latest").await;
    response.assert_status_ok();

    let cards = response.json::<Vec<BookCardView>>();
    assert_eq!(cards.first().map(|c| c.title.as_str()), Some("Newest"));
});

test_with_server!(search_is_case_insensitive_substring, |server, ctx_state, config| {
    let db = &ctx_state.db.client;
    book_helpers::seed_book(db, "The Hollow Crown", "M. R. Vance", 5).await;
    book_helpers::seed_book(db, "Starlight Ledger", "I. Okafor", 2).await;

    let response = server
        .get("/books/search")
        .add_query_param("keyword", "hOLLoW")
        .await;
    response.assert_status_ok();

    let books = response.json::<Vec<BookView>>();
    assert_eq!(books.len(), 1);
    assert_eq!(books[0].title, "The Hollow Crown");

    // no match is an empty list, not an error
    let response = server
        .get("/books/search")
        .add_query_param("keyword", "zzzz")
        .await;
    response.assert_status_ok();
    assert!(response.json::<Vec<BookView>>().is_empty());
});

test_with_server!(search_requires_keyword, |server, ctx_state, config| {
    let response = server.get("/books/search").await;
    response.assert_status_bad_request();
    assert_eq!(
        response.json::<ErrorResponseBody>().get_err(),
        "Missing keyword"
    );
});

test_with_server!(get_book_by_id_returns_detail, |server, ctx_state, config| {
    let db = &ctx_state.db.client;
    let genre = book_helpers::seed_genre(db, "Fantasy").await;
    let book = book_helpers::seed_book(db, "The Hollow Crown", "M. R. Vance", 5).await;
    book_helpers::assign_genre(db, &book, &genre).await;

    let response = server
        .get(format!("/books/{}", raw_id(&book.id)).as_str())
        .await;
    response.assert_status_ok();

    let detail = response.json::<BookDetailView>();
    assert_eq!(detail.title, "The Hollow Crown");
    assert_eq!(detail.description.as_deref(), Some("About The Hollow Crown"));
    assert_eq!(detail.genres.len(), 1);
    assert_eq!(detail.genres[0].name, "Fantasy");
});

test_with_server!(get_book_by_unknown_id_is_not_found, |server, ctx_state, config| {
    let response = server.get("/books/does_not_exist").await;
    response.assert_status_not_found();
});

test_with_server!(root_and_health_check_answer, |server, ctx_state, config| {
    let response = server.get("/").await;
    response.assert_status_ok();
    assert!(response.text().contains("Reading Book API"));

    let response = server.get("/hc").await;
    response.assert_status_ok();
    assert!(response.text().starts_with('v'));
});
