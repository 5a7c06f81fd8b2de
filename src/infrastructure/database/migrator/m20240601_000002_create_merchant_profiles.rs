//! Create merchant_profiles table

use sea_orm_migration::prelude::*;

use super::m20240601_000001_create_users::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MerchantProfiles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(MerchantProfiles::UserId)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(MerchantProfiles::BusinessName)
                            .string()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_merchant_profiles_user")
                            .from(MerchantProfiles::Table, MerchantProfiles::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MerchantProfiles::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum MerchantProfiles {
    Table,
    UserId,
    BusinessName,
}
