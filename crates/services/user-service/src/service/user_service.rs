//! User service - Handles user-related business logic.

use async_trait::async_trait;
use std::sync::Arc;

use common::AppResult;
use domain::{RegisterUser, SaveRole, TokenGenerator};

use crate::unit_of_work::UnitOfWork;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserService: Send + Sync {
    /// Register a new user and return its freshly issued token
    async fn register_user(&self, command: RegisterUser) -> AppResult<String>;

    /// Store a new role
    async fn save_role(&self, command: SaveRole) -> AppResult<()>;
}

/// Concrete implementation of UserService on top of a unit of work.
pub struct UserManager<U> {
    uow: Arc<U>,
    tokens: Arc<dyn TokenGenerator>,
}

impl<U: UnitOfWork> UserManager<U> {
    pub fn new(uow: Arc<U>, tokens: Arc<dyn TokenGenerator>) -> Self {
        Self { uow, tokens }
    }
}

#[async_trait]
impl<U: UnitOfWork> UserService for UserManager<U> {
    async fn register_user(&self, command: RegisterUser) -> AppResult<String> {
        let user = command.into_entity(self.tokens.as_ref())?;

        let uow = self.uow.as_ref();
        let saved = crate::with_transaction!(uow, |store| store.store_user(user).await)?;

        tracing::info!(user_id = ?saved.id(), "User registered");
        Ok(saved.into_user_token())
    }

    async fn save_role(&self, command: SaveRole) -> AppResult<()> {
        let role = command.into_entity()?;

        let uow = self.uow.as_ref();
        let saved = crate::with_transaction!(uow, |store| store.store_role(role).await)?;

        tracing::info!(role_id = ?saved.id(), name = saved.name(), "Role saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::future::Future;
    use std::pin::Pin;

    use common::AppError;
    use domain::{Role, User, UserProfile};

    use super::*;
    use crate::repository::{MockUserStore, UserStore};

    struct FixedTokens(&'static str);

    impl TokenGenerator for FixedTokens {
        fn generate(&self, prefix: &str) -> String {
            format!("{}{}", prefix, self.0)
        }
    }

    /// Test double for UnitOfWork that runs the closure against a mock store
    struct TestUnitOfWork {
        store: MockUserStore,
    }

    #[async_trait]
    impl UnitOfWork for TestUnitOfWork {
        async fn transaction<F, T>(&self, f: F) -> AppResult<T>
        where
            F: for<'a> FnOnce(
                    &'a dyn UserStore,
                ) -> Pin<Box<dyn Future<Output = AppResult<T>> + Send + 'a>>
                + Send,
            T: Send,
        {
            f(&self.store).await
        }
    }

    fn manager(store: MockUserStore, token: &'static str) -> UserManager<TestUnitOfWork> {
        UserManager::new(
            Arc::new(TestUnitOfWork { store }),
            Arc::new(FixedTokens(token)),
        )
    }

    fn persisted(user: User, id: i64) -> User {
        User::restore(
            id,
            user.user_token().to_string(),
            user.username().to_string(),
            UserProfile::default(),
            Vec::new(),
        )
    }

    #[tokio::test]
    async fn test_register_user_returns_token() {
        let mut store = MockUserStore::new();
        store
            .expect_store_user()
            .withf(|user| user.username() == "alice" && user.id().is_none())
            .times(1)
            .returning(|user| Ok(persisted(user, 1)));

        let token = manager(store, "abc123")
            .register_user(RegisterUser::new("alice"))
            .await
            .unwrap();

        assert_eq!(token, "user_abc123");
    }

    #[tokio::test]
    async fn test_register_user_without_username_skips_store() {
        // No expectations: any store call panics
        let store = MockUserStore::new();

        let result = manager(store, "abc123")
            .register_user(RegisterUser { username: None })
            .await;

        assert!(matches!(result, Err(AppError::InvalidParameter(ref f)) if f == "User.username"));
    }

    #[tokio::test]
    async fn test_register_user_propagates_store_failure() {
        let mut store = MockUserStore::new();
        store
            .expect_store_user()
            .returning(|_| Err(AppError::internal("disk full")));

        let result = manager(store, "abc123")
            .register_user(RegisterUser::new("bob"))
            .await;

        assert!(matches!(result, Err(AppError::Internal(_))));
    }

    #[tokio::test]
    async fn test_save_role_success() {
        let mut store = MockUserStore::new();
        store
            .expect_store_role()
            .withf(|role| role.name() == "admin")
            .times(1)
            .returning(|role| Ok(Role::restore(1, role.name().to_string())));

        let result = manager(store, "unused")
            .save_role(SaveRole::new("admin"))
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_save_role_without_name() {
        let store = MockUserStore::new();

        let result = manager(store, "unused")
            .save_role(SaveRole { name: None })
            .await;

        assert!(matches!(result, Err(AppError::InvalidParameter(ref f)) if f == "Role.name"));
    }
}
