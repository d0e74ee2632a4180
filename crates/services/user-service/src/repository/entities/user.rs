//! User database entity for SeaORM.

use sea_orm::entity::prelude::*;

use domain::{Role, User, UserProfile};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "tb_user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub user_token: String,
    pub email: Option<String>,
    pub username: String,
    pub password: Option<String>,
    pub phone_number: Option<String>,
    pub current_hashed_refresh_token: Option<String>,
    pub kakao_id: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::user_role::Entity")]
    UserRole,
}

impl Related<super::user_role::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserRole.def()
    }
}

impl Related<super::role::Entity> for Entity {
    fn to() -> RelationDef {
        super::user_role::Relation::Role.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::user_role::Relation::User.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Convert database row plus its linked roles to the domain entity
    pub fn into_domain(self, roles: Vec<super::role::Model>) -> User {
        User::restore(
            self.id,
            self.user_token,
            self.username,
            UserProfile {
                email: self.email,
                password: self.password,
                phone_number: self.phone_number,
                current_hashed_refresh_token: self.current_hashed_refresh_token,
                kakao_id: self.kakao_id,
            },
            roles.into_iter().map(Role::from).collect(),
        )
    }
}
