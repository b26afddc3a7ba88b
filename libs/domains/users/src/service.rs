use axum_helpers::TokenIssuer;
use std::sync::Arc;
use tracing::instrument;

use crate::error::{UserError, UserResult};
use crate::models::{CreateUser, TokenRequest, TokenResponse, User, UserResponse};
use crate::repository::UserRepository;

/// Service layer for User business logic
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
    tokens: TokenIssuer,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repository: R, tokens: TokenIssuer) -> Self {
        Self {
            repository: Arc::new(repository),
            tokens,
        }
    }

    /// Create a new user with password hashing
    #[instrument(skip(self, input), fields(user_email = %input.email))]
    pub async fn create_user(&self, input: CreateUser) -> UserResult<UserResponse> {
        let user = User::new(input.name, input.email, &input.password)?;
        self.repository.create(&user).await?;
        Ok(user.into())
    }

    /// Exchange email and password for a signed access token
    ///
    /// The token subject is the user id.
    #[instrument(skip(self, request), fields(user_email = %request.email))]
    pub async fn issue_token(&self, request: TokenRequest) -> UserResult<TokenResponse> {
        let user = self.repository.find_by_email(&request.email).await?;

        if !user.validate_password(&request.password) {
            tracing::info!(user_id = %user.id(), "Rejected token request with wrong password");
            return Err(UserError::InvalidCredentials);
        }

        let access_token = self.tokens.issue_access_token(&user.id().to_string())?;
        tracing::info!(user_id = %user.id(), "Issued access token");

        Ok(TokenResponse { access_token })
    }
}

impl<R: UserRepository> Clone for UserService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            tokens: self.tokens.clone(),
        }
    }
}
