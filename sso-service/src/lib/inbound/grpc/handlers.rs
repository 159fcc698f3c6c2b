use tonic::Status;

use crate::domain::auth::errors::AuthError;
use crate::inbound::validation::ValidationError;

pub mod is_admin;
pub mod login;
pub mod register;

impl From<ValidationError> for Status {
    fn from(err: ValidationError) -> Self {
        Status::invalid_argument(err.to_string())
    }
}

impl From<AuthError> for Status {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials => Status::unauthenticated("invalid login or password"),
            AuthError::UserAlreadyExists => Status::already_exists("user already exists"),
            AuthError::UserNotFound => Status::not_found("user not found"),
            AuthError::AppNotFound => Status::not_found("app not found"),
            // Detail is already logged by the service.
            AuthError::Internal(_) => Status::internal("internal error"),
        }
    }
}
