use serde::{Deserialize, Serialize};
use surrealdb::sql::Thing;

use crate::database::client::Db;
use crate::middleware::error::{AppError, AppResult};
use crate::middleware::utils::db_utils::{
    exists_entity, get_entity, with_not_found_err, EmailIdent, IdentIdName,
};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LocalUser {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Thing>,
    pub username: String,
    pub email: String,
    pub password: String,
}

pub struct LocalUserDbService<'a> {
    pub db: &'a Db,
}

pub const TABLE_NAME: &str = "local_user";

impl<'a> LocalUserDbService<'a> {
    pub fn get_table_name() -> &'static str {
        TABLE_NAME
    }

    pub async fn mutate_db(&self) -> AppResult<()> {
        let sql = format!("
    DEFINE TABLE IF NOT EXISTS {TABLE_NAME} SCHEMAFULL;
    DEFINE FIELD IF NOT EXISTS username ON TABLE {TABLE_NAME} TYPE string ASSERT string::len(string::trim($value))>0;
    DEFINE FIELD IF NOT EXISTS email ON TABLE {TABLE_NAME} TYPE string;
    DEFINE FIELD IF NOT EXISTS password ON TABLE {TABLE_NAME} TYPE string;
    DEFINE INDEX IF NOT EXISTS local_user_email_idx ON TABLE {TABLE_NAME} COLUMNS email UNIQUE;
");
        let mutation = self.db.query(sql).await?;
        mutation.check()?;

        Ok(())
    }

    pub async fn create(&self, data: LocalUser) -> AppResult<LocalUser> {
        let created: Option<LocalUser> = self.db.create(TABLE_NAME).content(data).await?;
        created.ok_or_else(|| AppError::Generic {
            description: "Failed to create user".to_string(),
        })
    }

    pub async fn exists(&self, ident: IdentIdName) -> AppResult<Option<Thing>> {
        exists_entity(self.db, TABLE_NAME, &ident).await
    }

    pub async fn get(&self, ident: IdentIdName) -> AppResult<LocalUser> {
        let opt = get_entity::<LocalUser>(self.db, TABLE_NAME, &ident).await?;
        with_not_found_err(opt, ident.to_string().as_str())
    }

    pub async fn get_by_email(&self, email: &str) -> AppResult<LocalUser> {
        self.get(EmailIdent(email.to_string()).into()).await
    }
}
