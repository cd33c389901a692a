use serde::Deserialize;
use surrealdb::sql::Thing;

use crate::database::client::Db;
use crate::database::table_names::{LIKE_TABLE_NAME, SAVED_BOOK_TABLE_NAME};
use crate::entities::book_entity::TABLE_NAME as BOOK_TABLE_NAME;
use crate::entities::local_user_entity::TABLE_NAME as USER_TABLE_NAME;
use crate::middleware::error::{AppError, AppResult};
use crate::models::view::book::BookCardView;

/// The two flavours of per-user book flags. Both share the same
/// upsert-then-flip lifecycle; only the like flavour maintains the
/// denormalized `total_likes` counter on the book.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InteractionKind {
    Like,
    Save,
}

impl InteractionKind {
    pub fn table_name(&self) -> &'static str {
        match self {
            InteractionKind::Like => LIKE_TABLE_NAME,
            InteractionKind::Save => SAVED_BOOK_TABLE_NAME,
        }
    }

    pub fn flag_field(&self) -> &'static str {
        match self {
            InteractionKind::Like => "is_liked",
            InteractionKind::Save => "is_saved",
        }
    }

    fn maintains_counter(&self) -> bool {
        matches!(self, InteractionKind::Like)
    }
}

#[derive(Debug, Deserialize)]
pub struct ToggleOutcome {
    pub active: bool,
    #[serde(default)]
    pub total: Option<i64>,
}

pub struct InteractionDbService<'a> {
    pub db: &'a Db,
    pub kind: InteractionKind,
}

impl<'a> InteractionDbService<'a> {
    pub async fn mutate_db(&self) -> AppResult<()> {
        let table = self.kind.table_name();
        let flag = self.kind.flag_field();
        let sql = format!("
    DEFINE TABLE IF NOT EXISTS {table} TYPE RELATION IN {USER_TABLE_NAME} OUT {BOOK_TABLE_NAME} ENFORCED SCHEMAFULL PERMISSIONS NONE;
    DEFINE INDEX IF NOT EXISTS in_out_unique_idx ON {table} FIELDS in, out UNIQUE;
    DEFINE FIELD IF NOT EXISTS {flag} ON TABLE {table} TYPE bool;
    DEFINE FIELD IF NOT EXISTS updated_at ON TABLE {table} TYPE datetime DEFAULT time::now() VALUE time::now();
");
        let mutation = self.db.query(sql).await?;
        mutation.check()?;

        Ok(())
    }

    /// Invert-or-initialize the flag row for (user, book). An absent row
    /// becomes an active one; an existing row is flipped in place. The
    /// like-counter recompute runs in the same transaction as the flag
    /// write, so the counter and the flag rows cannot drift apart.
    pub async fn toggle(&self, user: Thing, book: Thing) -> AppResult<ToggleOutcome> {
        let table = self.kind.table_name();
        let flag = self.kind.flag_field();

        let (counter_q, return_q) = if self.kind.maintains_counter() {
            (
                format!(
                    "LET $total = array::len((SELECT VALUE id FROM {table} WHERE out=$book AND {flag}=true)); \
                    UPDATE $book SET total_likes=$total; "
                ),
                "RETURN { active: $state, total: $total };",
            )
        } else {
            (String::new(), "RETURN { active: $state };")
        };

        let mut res = self
            .db
            .query(format!(
                "BEGIN TRANSACTION; \
                LET $rec = (SELECT id, {flag} AS active FROM {table} WHERE in=$user AND out=$book)[0]; \
                LET $state = IF $rec THEN !$rec.active ELSE true END; \
                IF $rec THEN UPDATE $rec.id SET {flag}=$state ELSE RELATE $user->{table}->$book SET {flag}=$state END; \
                {counter_q}\
                COMMIT TRANSACTION; \
                {return_q}"
            ))
            .bind(("user", user))
            .bind(("book", book))
            .await?;

        let outcome = res.take::<Option<ToggleOutcome>>(res.num_statements() - 1)?;
        outcome.ok_or_else(|| AppError::Generic {
            description: "Toggle yielded no result".to_string(),
        })
    }

    /// Whether (user, book) currently holds an active flag. A missing row
    /// and a row with the flag off both read as false.
    pub async fn get_status(&self, user: Thing, book: Thing) -> AppResult<bool> {
        let table = self.kind.table_name();
        let flag = self.kind.flag_field();
        let mut res = self
            .db
            .query(format!(
                "SELECT VALUE {flag} FROM {table} WHERE in=$user AND out=$book;"
            ))
            .bind(("user", user))
            .bind(("book", book))
            .await?;
        let status = res.take::<Option<bool>>(0)?;
        Ok(status.unwrap_or(false))
    }

    pub async fn get_books_for_user(&self, user: Thing) -> AppResult<Vec<BookCardView>> {
        let table = self.kind.table_name();
        let flag = self.kind.flag_field();
        let mut res = self
            .db
            .query(format!(
                "SELECT VALUE out.{{id, title, cover_image}} FROM {table} WHERE in=$user AND {flag}=true;"
            ))
            .bind(("user", user))
            .await?;
        let books = res.take::<Vec<BookCardView>>(0)?;
        Ok(books)
    }
}
