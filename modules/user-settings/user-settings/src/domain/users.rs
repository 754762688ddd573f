use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;
use user_settings_sdk::models::User;
use user_settings_sdk::response::ServiceResponse;

use super::error::DomainError;

#[async_trait]
pub trait UsersRepository: Send + Sync {
    /// Users whose name or email contains `filter`, ignoring case.
    /// `None` lists everyone.
    async fn find_all(&self, filter: Option<&str>) -> anyhow::Result<Vec<User>>;

    async fn find_by_id(&self, id: u64) -> anyhow::Result<Option<User>>;
}

/// Read-only user directory.
pub struct UsersService {
    repo: Arc<dyn UsersRepository>,
}

impl UsersService {
    #[must_use]
    pub fn new(repo: Arc<dyn UsersRepository>) -> Self {
        Self { repo }
    }

    pub async fn find_all(&self, filter: Option<&str>) -> ServiceResponse<Vec<User>> {
        let filter = filter.map(str::trim).filter(|f| !f.is_empty());
        debug!(?filter, "Listing users");
        match self.repo.find_all(filter).await {
            Ok(users) if users.is_empty() => ServiceResponse::not_found("No Users found"),
            Ok(users) => ServiceResponse::success("Users found", users),
            Err(e) => DomainError::from(e).into_response("An error occurred while finding users."),
        }
    }

    pub async fn find_by_id(&self, id: u64) -> ServiceResponse<User> {
        debug!(user_id = id, "Finding user");
        match self.repo.find_by_id(id).await {
            Ok(Some(user)) => ServiceResponse::success("User found", user),
            Ok(None) => ServiceResponse::not_found("User not found"),
            Err(e) => DomainError::from(e).into_response("An error occurred while finding user."),
        }
    }
}
