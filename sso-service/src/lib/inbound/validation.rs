//! Request-shape checks shared by every transport.
//!
//! These run before the domain service is called. Email is checked before password, so a
//! request missing both reports the email.

use thiserror::Error;

use crate::domain::auth::models::AppId;
use crate::domain::auth::models::LoginCommand;
use crate::domain::auth::models::RegisterCommand;
use crate::domain::auth::models::UserId;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("email required")]
    EmailRequired,

    #[error("password required")]
    PasswordRequired,

    #[error("app required")]
    AppRequired,

    #[error("user_id required")]
    UserIdRequired,
}

pub fn register_command(
    email: String,
    password: String,
) -> Result<RegisterCommand, ValidationError> {
    check_credentials(&email, &password)?;
    Ok(RegisterCommand::new(email, password))
}

pub fn login_command(
    email: String,
    password: String,
    app_id: i32,
) -> Result<LoginCommand, ValidationError> {
    check_credentials(&email, &password)?;
    if app_id == 0 {
        return Err(ValidationError::AppRequired);
    }
    Ok(LoginCommand::new(email, password, AppId(app_id)))
}

pub fn user_id(user_id: i64) -> Result<UserId, ValidationError> {
    if user_id == 0 {
        return Err(ValidationError::UserIdRequired);
    }
    Ok(UserId(user_id))
}

fn check_credentials(email: &str, password: &str) -> Result<(), ValidationError> {
    if email.is_empty() {
        return Err(ValidationError::EmailRequired);
    }
    if password.is_empty() {
        return Err(ValidationError::PasswordRequired);
    }
    Ok(())
}
