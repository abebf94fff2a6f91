//! MySQL implementation of the UserRepository trait.
//!
//! Email and phone uniqueness is enforced by unique keys on the `users`
//! table; a duplicate insert surfaces as `AuthError::UserAlreadyExists`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{mysql::MySqlRow, MySqlPool, Row};
use uuid::Uuid;

use frcc_core::domain::entities::otp::OneTimePasscode;
use frcc_core::domain::entities::user::User;
use frcc_core::errors::{AuthError, DomainError};
use frcc_core::repositories::UserRepository;

const USER_COLUMNS: &str = r#"
    id, first_name, last_name, email, phone, quality, organization,
    confirmation_token, confirmed_account, current_otp, current_otp_validity_time,
    created_at, updated_at
"#;

/// MySQL implementation of UserRepository
pub struct MySqlUserRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlUserRepository {
    /// Create a new MySQL user repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn database_error(context: &str, error: sqlx::Error) -> DomainError {
        tracing::error!(error = %error, "{}", context);
        DomainError::Internal {
            message: format!("{}: {}", context, error),
        }
    }

    /// Convert database row to User entity
    fn row_to_user(row: &MySqlRow) -> Result<User, DomainError> {
        fn column<'r, T>(row: &'r MySqlRow, name: &str) -> Result<T, DomainError>
        where
            T: sqlx::Decode<'r, sqlx::MySql> + sqlx::Type<sqlx::MySql>,
        {
            row.try_get(name).map_err(|e| DomainError::Internal {
                message: format!("Failed to get {}: {}", name, e),
            })
        }

        let id: String = column(row, "id")?;
        let current_otp: Option<String> = column(row, "current_otp")?;
        let otp_expires_at: Option<DateTime<Utc>> = column(row, "current_otp_validity_time")?;

        Ok(User {
            id: Uuid::parse_str(&id).map_err(|e| DomainError::Internal {
                message: format!("Invalid UUID: {}", e),
            })?,
            first_name: column(row, "first_name")?,
            last_name: column(row, "last_name")?,
            email: column(row, "email")?,
            phone: column(row, "phone")?,
            quality: column(row, "quality")?,
            organization: column(row, "organization")?,
            confirmation_token_hash: column(row, "confirmation_token")?,
            is_confirmed: column(row, "confirmed_account")?,
            current_otp: current_otp
                .zip(otp_expires_at)
                .map(|(code, expires_at)| OneTimePasscode { code, expires_at }),
            created_at: column(row, "created_at")?,
            updated_at: column(row, "updated_at")?,
        })
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn create(&self, user: User) -> Result<User, DomainError> {
        let query = r#"
            INSERT INTO users (
                id, first_name, last_name, email, phone, quality, organization,
                confirmation_token, confirmed_account, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        let result = sqlx::query(query)
            .bind(user.id.to_string())
            .bind(&user.first_name)
            .bind(&user.last_name)
            .bind(&user.email)
            .bind(&user.phone)
            .bind(&user.quality)
            .bind(&user.organization)
            .bind(&user.confirmation_token_hash)
            .bind(user.is_confirmed)
            .bind(user.created_at)
            .bind(user.updated_at)
            .execute(&self.pool)
            .await;

        match result {
            Ok(_) => Ok(user),
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                Err(AuthError::UserAlreadyExists.into())
            }
            Err(e) => Err(Self::database_error("Failed to create user", e)),
        }
    }

    async fn find_by_email_or_phone(
        &self,
        email: &str,
        phone: Option<&str>,
    ) -> Result<Option<User>, DomainError> {
        let row = match phone {
            Some(phone) => {
                let query = format!(
                    "SELECT {} FROM users WHERE email = ? OR phone = ? LIMIT 1",
                    USER_COLUMNS
                );
                sqlx::query(&query)
                    .bind(email)
                    .bind(phone)
                    .fetch_optional(&self.pool)
                    .await
            }
            None => {
                let query = format!("SELECT {} FROM users WHERE email = ? LIMIT 1", USER_COLUMNS);
                sqlx::query(&query)
                    .bind(email)
                    .fetch_optional(&self.pool)
                    .await
            }
        }
        .map_err(|e| Self::database_error("Database query failed", e))?;

        row.as_ref().map(Self::row_to_user).transpose()
    }

    async fn confirm_registration(&self, token_hash: &str) -> Result<Option<User>, DomainError> {
        let query = r#"
            UPDATE users SET
                confirmed_account = TRUE,
                updated_at = ?
            WHERE confirmation_token = ? AND confirmed_account = FALSE
        "#;

        let result = sqlx::query(query)
            .bind(Utc::now())
            .bind(token_hash)
            .execute(&self.pool)
            .await
            .map_err(|e| Self::database_error("Failed to confirm registration", e))?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        let query = format!(
            "SELECT {} FROM users WHERE confirmation_token = ? LIMIT 1",
            USER_COLUMNS
        );
        let row = sqlx::query(&query)
            .bind(token_hash)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| Self::database_error("Database query failed", e))?;

        row.as_ref().map(Self::row_to_user).transpose()
    }

    async fn set_current_otp(
        &self,
        email: &str,
        otp: &OneTimePasscode,
    ) -> Result<bool, DomainError> {
        let query = r#"
            UPDATE users SET
                current_otp = ?,
                current_otp_validity_time = ?,
                updated_at = ?
            WHERE email = ?
        "#;

        let result = sqlx::query(query)
            .bind(&otp.code)
            .bind(otp.expires_at)
            .bind(Utc::now())
            .bind(email)
            .execute(&self.pool)
            .await
            .map_err(|e| Self::database_error("Failed to store passcode", e))?;

        Ok(result.rows_affected() > 0)
    }
}
