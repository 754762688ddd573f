use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use user_settings_sdk::models::User;

use crate::domain::users::UsersRepository;

/// Fixed, read-only user directory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUsersRepository {
    users: Vec<User>,
}

impl InMemoryUsersRepository {
    #[must_use]
    pub fn new(users: Vec<User>) -> Self {
        Self { users }
    }

    /// Directory with the two demo accounts.
    #[must_use]
    pub fn seeded() -> Self {
        let created_at = Utc
            .with_ymd_and_hms(2024, 1, 15, 9, 30, 0)
            .single()
            .unwrap_or(DateTime::UNIX_EPOCH);
        Self::new(vec![
            demo_user(1, "Alice", "alice@example.com", 42, created_at),
            demo_user(2, "Robert", "robert@example.com", 21, created_at),
        ])
    }
}

fn demo_user(id: u64, name: &str, email: &str, age: u32, created_at: DateTime<Utc>) -> User {
    User {
        id,
        name: name.to_owned(),
        email: email.to_owned(),
        age,
        created_at,
        updated_at: created_at + Duration::days(5),
    }
}

fn matches(user: &User, needle: &str) -> bool {
    user.name.to_lowercase().contains(needle) || user.email.to_lowercase().contains(needle)
}

#[async_trait]
impl UsersRepository for InMemoryUsersRepository {
    async fn find_all(&self, filter: Option<&str>) -> anyhow::Result<Vec<User>> {
        let needle = filter.map(str::to_lowercase);
        Ok(self
            .users
            .iter()
            .filter(|user| needle.as_deref().is_none_or(|n| matches(user, n)))
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: u64) -> anyhow::Result<Option<User>> {
        Ok(self.users.iter().find(|user| user.id == id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_filter_matches_email() {
        let repo = InMemoryUsersRepository::seeded();

        let users = repo.find_all(Some("alice@")).await.unwrap();

        assert_eq!(users.len(), 1);
        assert_eq!(users[0].id, 1);
    }

    #[tokio::test]
    async fn test_filter_shared_substring_returns_both() {
        let repo = InMemoryUsersRepository::seeded();

        let users = repo.find_all(Some("EXAMPLE.COM")).await.unwrap();

        assert_eq!(users.len(), 2);
    }

    #[test]
    fn test_seeded_timestamps() {
        let repo = InMemoryUsersRepository::seeded();

        for user in &repo.users {
            assert_eq!(user.updated_at - user.created_at, Duration::days(5));
        }
    }
}
