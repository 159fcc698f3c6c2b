use std::fmt;

/// User unique identifier, assigned by storage on creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub i64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Application unique identifier, provisioned outside this service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AppId(pub i32);

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Registered user.
#[derive(Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub email: String,
    /// PHC-encoded password hash
    pub password_hash: String,
    pub is_admin: bool,
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("password_hash", &"<redacted>")
            .field("is_admin", &self.is_admin)
            .finish()
    }
}

/// Client application that session tokens are scoped to.
#[derive(Clone, PartialEq, Eq)]
pub struct App {
    pub id: AppId,
    pub name: String,
    /// Symmetric key used to sign this app's tokens
    pub secret: String,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("secret", &"<redacted>")
            .finish()
    }
}

/// Command to register a new user.
pub struct RegisterCommand {
    pub email: String,
    pub password: String,
}

impl RegisterCommand {
    /// # Arguments
    /// * `email` - Email address, unique across users
    /// * `password` - Plain text password (will be hashed by service)
    pub fn new(email: String, password: String) -> Self {
        Self { email, password }
    }
}

impl fmt::Debug for RegisterCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterCommand")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Command to authenticate a user for a given application.
pub struct LoginCommand {
    pub email: String,
    pub password: String,
    pub app_id: AppId,
}

impl LoginCommand {
    pub fn new(email: String, password: String, app_id: AppId) -> Self {
        Self {
            email,
            password,
            app_id,
        }
    }
}

impl fmt::Debug for LoginCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginCommand")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("app_id", &self.app_id)
            .finish()
    }
}
