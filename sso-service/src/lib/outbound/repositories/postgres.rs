use async_trait::async_trait;
use sqlx::migrate::MigrateError;
use sqlx::postgres::PgPoolOptions;
use sqlx::FromRow;
use sqlx::PgPool;

use crate::config::DatabaseConfig;
use crate::domain::auth::errors::StorageError;
use crate::domain::auth::models::App;
use crate::domain::auth::models::AppId;
use crate::domain::auth::models::User;
use crate::domain::auth::models::UserId;
use crate::domain::auth::ports::AppProvider;
use crate::domain::auth::ports::UserProvider;
use crate::domain::auth::ports::UserSaver;

const USERS_EMAIL_KEY: &str = "users_email_key";

/// PostgreSQL storage for users and applications.
///
/// Implements every storage capability the authentication service needs.
#[derive(Clone)]
pub struct PostgresStorage {
    pool: PgPool,
}

#[derive(FromRow)]
struct UserRow {
    id: i64,
    email: String,
    pass_hash: String,
    is_admin: bool,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: UserId(row.id),
            email: row.email,
            password_hash: row.pass_hash,
            is_admin: row.is_admin,
        }
    }
}

#[derive(FromRow)]
struct AppRow {
    id: i32,
    name: String,
    secret: String,
}

impl From<AppRow> for App {
    fn from(row: AppRow) -> Self {
        Self {
            id: AppId(row.id),
            name: row.name,
            secret: row.secret,
        }
    }
}

impl PostgresStorage {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Open a connection pool described by `config`.
    ///
    /// Connection acquisition is bounded by `acquire_timeout_secs`, so a saturated or
    /// unreachable database surfaces as an error instead of a hang.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.acquire_timeout())
            .connect(&config.url)
            .await?;

        Ok(Self::new(pool))
    }

    pub async fn run_migrations(&self) -> Result<(), MigrateError> {
        sqlx::migrate!("./migrations").run(&self.pool).await
    }
}

#[async_trait]
impl UserSaver for PostgresStorage {
    async fn save_user(&self, email: &str, password_hash: &str) -> Result<UserId, StorageError> {
        // One statement: the unique constraint decides concurrent duplicates, no pre-check.
        sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO users (email, pass_hash)
            VALUES ($1, $2)
            RETURNING id
            "#,
        )
        .bind(email)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await
        .map(UserId)
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() && db_err.constraint() == Some(USERS_EMAIL_KEY) {
                    return StorageError::DuplicateEmail(email.to_string());
                }
            }
            StorageError::Database(format!("storage.save_user: {}", e))
        })
    }
}

#[async_trait]
impl UserProvider for PostgresStorage {
    async fn user_by_email(&self, email: &str) -> Result<Option<User>, StorageError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, email, pass_hash, is_admin
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| StorageError::Database(format!("storage.user_by_email: {}", e)))?;

        Ok(row.map(User::from))
    }

    async fn admin_flag(&self, user_id: UserId) -> Result<Option<bool>, StorageError> {
        sqlx::query_scalar::<_, bool>(
            r#"
            SELECT is_admin
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(user_id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| StorageError::Database(format!("storage.admin_flag: {}", e)))
    }
}

#[async_trait]
impl AppProvider for PostgresStorage {
    async fn app_by_id(&self, app_id: AppId) -> Result<Option<App>, StorageError> {
        let row = sqlx::query_as::<_, AppRow>(
            r#"
            SELECT id, name, secret
            FROM apps
            WHERE id = $1
            "#,
        )
        .bind(app_id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| StorageError::Database(format!("storage.app_by_id: {}", e)))?;

        Ok(row.map(App::from))
    }
}
