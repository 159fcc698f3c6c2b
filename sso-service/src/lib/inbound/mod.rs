pub mod grpc;
pub mod http;
pub mod validation;

#[cfg(test)]
pub(crate) mod test_support {
    use std::time::Duration;

    use async_trait::async_trait;
    use mockall::mock;

    use crate::domain::auth::errors::AuthError;
    use crate::domain::auth::models::LoginCommand;
    use crate::domain::auth::models::RegisterCommand;
    use crate::domain::auth::models::UserId;
    use crate::domain::auth::ports::AuthServicePort;

    mock! {
        pub TestAuthService {}

        #[async_trait]
        impl AuthServicePort for TestAuthService {
            async fn register(&self, command: RegisterCommand) -> Result<UserId, AuthError>;
            async fn login(&self, command: LoginCommand) -> Result<String, AuthError>;
            async fn is_admin(&self, user_id: UserId) -> Result<bool, AuthError>;
        }
    }

    /// Service whose every call outlives any reasonable request deadline.
    pub struct StalledAuthService {
        pub delay: Duration,
    }

    #[async_trait]
    impl AuthServicePort for StalledAuthService {
        async fn register(&self, _command: RegisterCommand) -> Result<UserId, AuthError> {
            tokio::time::sleep(self.delay).await;
            Ok(UserId(1))
        }

        async fn login(&self, _command: LoginCommand) -> Result<String, AuthError> {
            tokio::time::sleep(self.delay).await;
            Ok(String::new())
        }

        async fn is_admin(&self, _user_id: UserId) -> Result<bool, AuthError> {
            tokio::time::sleep(self.delay).await;
            Ok(false)
        }
    }
}
