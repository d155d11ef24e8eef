//! User repository: generic CRUD plus case-insensitive email and name queries.

use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use super::base::BaseRepository;
use super::entities::UserEntity;
use common::AppResult;
use domain::{EntityId, User};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// Lookups and searches treat absence as an empty result, never an error.
/// Operations that need an existing record fail with `AppError::NotFound`.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a user; a transient user gets its id from the store
    async fn create(&self, user: User) -> AppResult<User>;

    /// Replace every field of the stored user with the same id
    async fn update(&self, user: User) -> AppResult<User>;

    /// Delete user by ID
    async fn remove(&self, id: EntityId) -> AppResult<()>;

    /// Find user by ID
    async fn get(&self, id: EntityId) -> AppResult<User>;

    /// List all users in id order
    async fn get_all(&self) -> AppResult<Vec<User>>;

    /// Case-insensitive exact email match.
    ///
    /// Email is not unique in the store; when several users share it the
    /// one with the lowest id is returned.
    async fn get_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Users whose email contains `fragment`, ignoring case
    async fn search_by_email(&self, fragment: &str) -> AppResult<Vec<User>>;

    /// Users whose name contains `fragment`, ignoring case
    async fn search_by_name(&self, fragment: &str) -> AppResult<Vec<User>>;
}

/// Concrete implementation of UserRepository
#[derive(Clone)]
pub struct UserStore {
    base: BaseRepository<UserEntity>,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Users matching `matches`, in id order.
    ///
    /// Matching runs in process with `domain::text::fold` on both sides.
    /// Store-side `LOWER` folds only ASCII on SQLite and follows the
    /// collation on PostgreSQL, so stored characters such as KELVIN SIGN
    /// (lowercase `k`) would slip past it.
    async fn scan<F>(&self, matches: F) -> AppResult<Vec<User>>
    where
        F: Fn(&User) -> bool + Send,
    {
        let users = self.base.get_all().await?;
        Ok(users.into_iter().filter(|user| matches(user)).collect())
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn create(&self, user: User) -> AppResult<User> {
        self.base.create(user).await
    }

    async fn update(&self, user: User) -> AppResult<User> {
        self.base.update(user).await
    }

    async fn remove(&self, id: EntityId) -> AppResult<()> {
        self.base.remove(id).await
    }

    async fn get(&self, id: EntityId) -> AppResult<User> {
        self.base.get(id).await
    }

    async fn get_all(&self) -> AppResult<Vec<User>> {
        self.base.get_all().await
    }

    async fn get_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let users = self.scan(|user| user.has_email(email)).await?;
        Ok(users.into_iter().next())
    }

    async fn search_by_email(&self, fragment: &str) -> AppResult<Vec<User>> {
        self.scan(|user| user.email_contains(fragment)).await
    }

    async fn search_by_name(&self, fragment: &str) -> AppResult<Vec<User>> {
        self.scan(|user| user.name_contains(fragment)).await
    }
}
