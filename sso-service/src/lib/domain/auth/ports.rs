use async_trait::async_trait;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::errors::StorageError;
use crate::domain::auth::models::App;
use crate::domain::auth::models::AppId;
use crate::domain::auth::models::LoginCommand;
use crate::domain::auth::models::RegisterCommand;
use crate::domain::auth::models::User;
use crate::domain::auth::models::UserId;

/// Port for authentication service operations.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Register a new user.
    ///
    /// # Arguments
    /// * `command` - Email and plaintext password
    ///
    /// # Returns
    /// Identifier assigned to the new user
    ///
    /// # Errors
    /// * `UserAlreadyExists` - Email is already registered
    /// * `Internal` - Hashing or storage failed
    async fn register(&self, command: RegisterCommand) -> Result<UserId, AuthError>;

    /// Check credentials and issue a session token for an application.
    ///
    /// # Arguments
    /// * `command` - Email, plaintext password and target application
    ///
    /// # Returns
    /// Signed session token
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email or wrong password
    /// * `AppNotFound` - Application is not provisioned
    /// * `Internal` - Verification, storage or signing failed
    async fn login(&self, command: LoginCommand) -> Result<String, AuthError>;

    /// Report whether a user has the administrator flag.
    ///
    /// # Errors
    /// * `UserNotFound` - No user with this identifier
    /// * `Internal` - Storage failed
    async fn is_admin(&self, user_id: UserId) -> Result<bool, AuthError>;
}

/// Write capability for users.
#[async_trait]
pub trait UserSaver: Send + Sync + 'static {
    /// Persist a new user in a single atomic step.
    ///
    /// # Returns
    /// Identifier assigned by storage
    ///
    /// # Errors
    /// * `DuplicateEmail` - Email is already registered
    /// * `Database` - Database operation failed
    async fn save_user(&self, email: &str, password_hash: &str) -> Result<UserId, StorageError>;
}

/// Read capability for users.
#[async_trait]
pub trait UserProvider: Send + Sync + 'static {
    /// Retrieve user by email address.
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `Database` - Database operation failed
    async fn user_by_email(&self, email: &str) -> Result<Option<User>, StorageError>;

    /// Retrieve the administrator flag of a user.
    ///
    /// # Returns
    /// Optional flag (None if the user does not exist)
    ///
    /// # Errors
    /// * `Database` - Database operation failed
    async fn admin_flag(&self, user_id: UserId) -> Result<Option<bool>, StorageError>;
}

/// Read capability for applications.
#[async_trait]
pub trait AppProvider: Send + Sync + 'static {
    /// Retrieve application by identifier.
    ///
    /// # Returns
    /// Optional application (None if not provisioned)
    ///
    /// # Errors
    /// * `Database` - Database operation failed
    async fn app_by_id(&self, app_id: AppId) -> Result<Option<App>, StorageError>;
}
