use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use auth::PasswordHasher;
use auth::TokenIssuer;
use auth::TokenSubject;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::errors::StorageError;
use crate::domain::auth::models::LoginCommand;
use crate::domain::auth::models::RegisterCommand;
use crate::domain::auth::models::UserId;
use crate::domain::auth::ports::AppProvider;
use crate::domain::auth::ports::AuthServicePort;
use crate::domain::auth::ports::UserProvider;
use crate::domain::auth::ports::UserSaver;

/// Domain service implementation for authentication.
///
/// Holds no per-request state; every dependency is immutable and shared.
pub struct AuthService<US, UP, AP>
where
    US: UserSaver,
    UP: UserProvider,
    AP: AppProvider,
{
    user_saver: Arc<US>,
    user_provider: Arc<UP>,
    app_provider: Arc<AP>,
    password_hasher: PasswordHasher,
    token_issuer: TokenIssuer,
    token_ttl: Duration,
}

impl<US, UP, AP> AuthService<US, UP, AP>
where
    US: UserSaver,
    UP: UserProvider,
    AP: AppProvider,
{
    /// Create a new authentication service with injected dependencies.
    ///
    /// # Arguments
    /// * `user_saver` - User creation capability
    /// * `user_provider` - User lookup capability
    /// * `app_provider` - Application lookup capability
    /// * `token_ttl` - Lifetime of issued session tokens
    pub fn new(
        user_saver: Arc<US>,
        user_provider: Arc<UP>,
        app_provider: Arc<AP>,
        token_ttl: Duration,
    ) -> Self {
        Self {
            user_saver,
            user_provider,
            app_provider,
            password_hasher: PasswordHasher::new(),
            token_issuer: TokenIssuer::new(),
            token_ttl,
        }
    }

    /// Replace the default-cost password hasher.
    pub fn with_password_hasher(mut self, password_hasher: PasswordHasher) -> Self {
        self.password_hasher = password_hasher;
        self
    }

    async fn hash_password(&self, password: String) -> Result<String, String> {
        let hasher = self.password_hasher.clone();

        tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| format!("hashing task failed: {}", e))?
            .map_err(|e| e.to_string())
    }

    async fn verify_password(&self, password: String, hash: String) -> Result<bool, String> {
        let hasher = self.password_hasher.clone();

        tokio::task::spawn_blocking(move || hasher.verify(&password, &hash))
            .await
            .map_err(|e| format!("verification task failed: {}", e))?
            .map_err(|e| e.to_string())
    }
}

#[async_trait]
impl<US, UP, AP> AuthServicePort for AuthService<US, UP, AP>
where
    US: UserSaver,
    UP: UserProvider,
    AP: AppProvider,
{
    async fn register(&self, command: RegisterCommand) -> Result<UserId, AuthError> {
        const OP: &str = "auth.register";

        let RegisterCommand { email, password } = command;

        let password_hash = self.hash_password(password).await.map_err(|e| {
            tracing::error!(op = OP, email = %email, error = %e, "Failed to hash password");
            AuthError::Internal(format!("{}: {}", OP, e))
        })?;

        match self.user_saver.save_user(&email, &password_hash).await {
            Ok(user_id) => {
                tracing::info!(op = OP, email = %email, user_id = %user_id, "User registered");
                Ok(user_id)
            }
            Err(StorageError::DuplicateEmail(_)) => {
                tracing::warn!(op = OP, email = %email, "User already exists");
                Err(AuthError::UserAlreadyExists)
            }
            Err(e) => {
                tracing::error!(op = OP, email = %email, error = %e, "Failed to save user");
                Err(AuthError::Internal(format!("{}: {}", OP, e)))
            }
        }
    }

    async fn login(&self, command: LoginCommand) -> Result<String, AuthError> {
        const OP: &str = "auth.login";

        let LoginCommand {
            email,
            password,
            app_id,
        } = command;

        tracing::info!(op = OP, email = %email, app_id = %app_id, "Login attempt");

        let user = match self.user_provider.user_by_email(&email).await {
            Ok(Some(user)) => user,
            Ok(None) => {
                tracing::warn!(op = OP, email = %email, "User not found");
                // Match the cost of a real verification so timing does not reveal the email.
                let _ = self.hash_password(password).await;
                return Err(AuthError::InvalidCredentials);
            }
            Err(e) => {
                tracing::error!(op = OP, email = %email, error = %e, "Failed to get user");
                return Err(AuthError::Internal(format!("{}: {}", OP, e)));
            }
        };

        let matches = self
            .verify_password(password, user.password_hash.clone())
            .await
            .map_err(|e| {
                tracing::error!(op = OP, user_id = %user.id, error = %e, "Failed to verify password");
                AuthError::Internal(format!("{}: {}", OP, e))
            })?;

        if !matches {
            tracing::info!(op = OP, user_id = %user.id, "Invalid password");
            return Err(AuthError::InvalidCredentials);
        }

        let app = match self.app_provider.app_by_id(app_id).await {
            Ok(Some(app)) => app,
            Ok(None) => {
                tracing::warn!(op = OP, app_id = %app_id, "App not found");
                return Err(AuthError::AppNotFound);
            }
            Err(e) => {
                tracing::error!(op = OP, app_id = %app_id, error = %e, "Failed to get app");
                return Err(AuthError::Internal(format!("{}: {}", OP, e)));
            }
        };

        let subject = TokenSubject {
            user_id: user.id.0,
            email: &user.email,
            app_id: app.id.0,
        };

        let token = self
            .token_issuer
            .issue(subject, app.secret.as_bytes(), self.token_ttl)
            .map_err(|e| {
                tracing::error!(op = OP, user_id = %user.id, app_id = %app.id, error = %e, "Failed to issue token");
                AuthError::Internal(format!("{}: {}", OP, e))
            })?;

        tracing::info!(op = OP, user_id = %user.id, app_id = %app.id, "User logged in");

        Ok(token)
    }

    async fn is_admin(&self, user_id: UserId) -> Result<bool, AuthError> {
        const OP: &str = "auth.is_admin";

        match self.user_provider.admin_flag(user_id).await {
            Ok(Some(is_admin)) => {
                tracing::info!(op = OP, user_id = %user_id, is_admin, "Checked admin flag");
                Ok(is_admin)
            }
            Ok(None) => {
                tracing::warn!(op = OP, user_id = %user_id, "User not found");
                Err(AuthError::UserNotFound)
            }
            Err(e) => {
                tracing::error!(op = OP, user_id = %user_id, error = %e, "Failed to get admin flag");
                Err(AuthError::Internal(format!("{}: {}", OP, e)))
            }
        }
    }
}
