use crate::{
    database::client::Db,
    entities::local_user_entity::{LocalUser, LocalUserDbService},
    middleware::{
        error::{AppError, AppResult},
        utils::db_utils::EmailIdent,
    },
    utils::hash::{hash_password, verify_password},
};

pub struct AuthRegisterInput {
    pub username: String,
    pub email: String,
    pub password: String,
}

pub struct AuthLoginInput {
    pub email: String,
    pub password: String,
}

/// Identity verification seam: register hashes and stores, login verifies
/// and returns the user. No session or token is issued.
pub struct AuthService<'a> {
    user_repository: LocalUserDbService<'a>,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a Db) -> AuthService<'a> {
        AuthService {
            user_repository: LocalUserDbService { db },
        }
    }

    pub async fn register_password(&self, input: AuthRegisterInput) -> AppResult<LocalUser> {
        if self.is_exists_by_email(&input.email).await? {
            return Err(AppError::Generic {
                description: "Email already registered".to_string(),
            });
        }

        let hash = hash_password(&input.password).map_err(|err| AppError::Generic {
            description: format!("Hash password error: {err}"),
        })?;

        self.user_repository
            .create(LocalUser {
                id: None,
                username: input.username,
                email: input.email,
                password: hash,
            })
            .await
    }

    pub async fn login_password(&self, input: AuthLoginInput) -> AppResult<LocalUser> {
        let user = self
            .user_repository
            .get_by_email(&input.email)
            .await
            .map_err(|err| match err {
                // an unknown email reads the same as a bad password
                AppError::EntityFailIdNotFound { .. } => AppError::Generic {
                    description: "Invalid credentials".to_string(),
                },
                other => other,
            })?;

        if !verify_password(&user.password, &input.password) {
            return Err(AppError::Generic {
                description: "Invalid credentials".to_string(),
            });
        }

        Ok(user)
    }

    async fn is_exists_by_email(&self, email: &str) -> AppResult<bool> {
        let existing = self
            .user_repository
            .exists(EmailIdent(email.to_string()).into())
            .await?;
        Ok(existing.is_some())
    }
}
