pub const BOOK_GENRE_TABLE_NAME: &str = "book_genre";
pub const LIKE_TABLE_NAME: &str = "like";
pub const SAVED_BOOK_TABLE_NAME: &str = "saved_book";
