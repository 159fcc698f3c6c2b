use tonic::Status;

use crate::domain::auth::ports::AuthServicePort;
use crate::inbound::validation;
use crate::proto::LoginRequest;
use crate::proto::LoginResponse;

pub async fn login<S: AuthServicePort>(
    service: &S,
    request: LoginRequest,
) -> Result<LoginResponse, Status> {
    let command = validation::login_command(request.email, request.password, request.app_id)?;

    let token = service.login(command).await?;

    Ok(LoginResponse { token })
}
