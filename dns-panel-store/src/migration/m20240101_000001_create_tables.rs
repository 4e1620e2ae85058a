//! create channels / domains / dns_records tables migration

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Channels::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Channels::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Channels::Name).string().not_null())
                    .col(ColumnDef::new(Channels::ProviderType).string().not_null())
                    .col(ColumnDef::new(Channels::Credentials).string().not_null())
                    .col(
                        ColumnDef::new(Channels::Active)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(Channels::CreatedAt).string().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Domains::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Domains::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Domains::DomainName).string().not_null())
                    .col(ColumnDef::new(Domains::ProviderType).string().not_null())
                    .col(ColumnDef::new(Domains::ZoneRef).string().not_null())
                    .col(ColumnDef::new(Domains::Credentials).string().not_null())
                    .col(
                        ColumnDef::new(Domains::ProxiedDefault)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Domains::ExpirationTime).string().null())
                    .col(ColumnDef::new(Domains::CreatedAt).string().not_null())
                    .to_owned(),
            )
            .await?;

        // 域名在镜像内唯一
        manager
            .create_index(
                Index::create()
                    .name("idx_domains_domain_name")
                    .table(Domains::Table)
                    .col(Domains::DomainName)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(DnsRecords::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(DnsRecords::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(DnsRecords::DomainId).string().not_null())
                    .col(ColumnDef::new(DnsRecords::UserId).string().null())
                    .col(ColumnDef::new(DnsRecords::Subdomain).string().not_null())
                    .col(ColumnDef::new(DnsRecords::RecordType).string().not_null())
                    .col(ColumnDef::new(DnsRecords::Content).string().not_null())
                    .col(
                        ColumnDef::new(DnsRecords::Proxied)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(DnsRecords::RemoteId).string().null())
                    .col(ColumnDef::new(DnsRecords::Remark).string().null())
                    .col(ColumnDef::new(DnsRecords::CreatedAt).string().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_dns_records_domain")
                            .from(DnsRecords::Table, DnsRecords::DomainId)
                            .to(Domains::Table, Domains::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 按域名列记录是最热路径
        manager
            .create_index(
                Index::create()
                    .name("idx_dns_records_domain_id")
                    .table(DnsRecords::Table)
                    .col(DnsRecords::DomainId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DnsRecords::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Domains::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Channels::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Channels {
    Table,
    Id,
    Name,
    ProviderType,
    Credentials,
    Active,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Domains {
    Table,
    Id,
    DomainName,
    ProviderType,
    ZoneRef,
    Credentials,
    ProxiedDefault,
    ExpirationTime,
    CreatedAt,
}

#[derive(DeriveIden)]
enum DnsRecords {
    Table,
    Id,
    DomainId,
    UserId,
    Subdomain,
    RecordType,
    Content,
    Proxied,
    RemoteId,
    Remark,
    CreatedAt,
}
