//! Migration: Create user, role and user-role link tables.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TbUser::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TbUser::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(TbUser::UserToken)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(TbUser::Email).string().null())
                    .col(ColumnDef::new(TbUser::Username).string().not_null())
                    .col(ColumnDef::new(TbUser::Password).string().null())
                    .col(ColumnDef::new(TbUser::PhoneNumber).string().null())
                    .col(
                        ColumnDef::new(TbUser::CurrentHashedRefreshToken)
                            .string()
                            .null(),
                    )
                    .col(ColumnDef::new(TbUser::KakaoId).string().null())
                    .col(
                        ColumnDef::new(TbUser::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TbUser::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(TbRole::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TbRole::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(TbRole::Name).string().not_null())
                    .col(
                        ColumnDef::new(TbRole::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TbRole::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(TbUserRoles::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(TbUserRoles::UserId).big_integer().not_null())
                    .col(ColumnDef::new(TbUserRoles::RoleId).big_integer().not_null())
                    .primary_key(
                        Index::create()
                            .col(TbUserRoles::UserId)
                            .col(TbUserRoles::RoleId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_roles_user")
                            .from(TbUserRoles::Table, TbUserRoles::UserId)
                            .to(TbUser::Table, TbUser::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_roles_role")
                            .from(TbUserRoles::Table, TbUserRoles::RoleId)
                            .to(TbRole::Table, TbRole::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Link table first, it references both others
        manager
            .drop_table(Table::drop().table(TbUserRoles::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(TbRole::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(TbUser::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum TbUser {
    Table,
    Id,
    UserToken,
    Email,
    Username,
    Password,
    PhoneNumber,
    CurrentHashedRefreshToken,
    KakaoId,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum TbRole {
    Table,
    Id,
    Name,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum TbUserRoles {
    Table,
    UserId,
    RoleId,
}
