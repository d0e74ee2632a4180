//! User store - persists users, roles and the links between them.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, ModelTrait, NotSet, Set};

use super::entities::{role as role_entity, user as user_entity, user_role};
use common::{AppError, AppResult};
use domain::{Role, User};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Store trait for dependency injection.
///
/// Both methods take an unsaved entity and return it with its
/// storage identity filled in.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert a user together with links to its (already stored) roles
    async fn store_user(&self, user: User) -> AppResult<User>;

    /// Insert a role
    async fn store_role(&self, role: Role) -> AppResult<Role>;
}

/// SeaORM implementation of `UserStore`.
///
/// Generic over the connection so the same code runs on a pooled
/// connection or inside a transaction.
pub struct UserStoreImpl<'c, C> {
    conn: &'c C,
}

impl<'c, C: ConnectionTrait> UserStoreImpl<'c, C> {
    pub fn new(conn: &'c C) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl<'c, C: ConnectionTrait> UserStore for UserStoreImpl<'c, C> {
    async fn store_user(&self, user: User) -> AppResult<User> {
        let now = Utc::now();
        let profile = user.profile().clone();
        let role_ids: Vec<i64> = user.roles().iter().filter_map(Role::id).collect();

        let active_model = user_entity::ActiveModel {
            id: NotSet,
            user_token: Set(user.user_token().to_string()),
            email: Set(profile.email),
            username: Set(user.username().to_string()),
            password: Set(profile.password),
            phone_number: Set(profile.phone_number),
            current_hashed_refresh_token: Set(profile.current_hashed_refresh_token),
            kakao_id: Set(profile.kakao_id),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = active_model.insert(self.conn).await.map_err(AppError::from)?;

        if !role_ids.is_empty() {
            let links = role_ids.into_iter().map(|role_id| user_role::ActiveModel {
                user_id: Set(model.id),
                role_id: Set(role_id),
            });
            user_role::Entity::insert_many(links)
                .exec_without_returning(self.conn)
                .await
                .map_err(AppError::from)?;
        }

        let roles = model
            .find_related(role_entity::Entity)
            .all(self.conn)
            .await
            .map_err(AppError::from)?;

        Ok(model.into_domain(roles))
    }

    async fn store_role(&self, role: Role) -> AppResult<Role> {
        let now = Utc::now();
        let active_model = role_entity::ActiveModel {
            id: NotSet,
            name: Set(role.name().to_string()),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = active_model.insert(self.conn).await.map_err(AppError::from)?;
        Ok(Role::from(model))
    }
}
