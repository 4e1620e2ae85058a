//! SQLite 镜像存储实现

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ColumnTrait, Database, DatabaseConnection, EntityTrait, QueryFilter, TransactionTrait,
};
use sea_orm_migration::MigratorTrait;

use dns_panel_core::error::{CoreError, CoreResult};
use dns_panel_core::traits::{ChannelRepository, DomainRepository, RecordRepository};
use dns_panel_core::types::{Channel, DnsRecordEntry, Domain, RecordType};

use crate::entities::{channel, dns_record, domain};
use crate::migration::Migrator;

/// 基于 `SeaORM`/SQLite 的本地镜像存储
///
/// 同时实现渠道、域名、记录三个仓库 trait，平台层把同一个实例
/// 以三种身份注入 `ServiceContext`。
#[derive(Clone)]
pub struct SqliteStore {
    db: DatabaseConnection,
}

impl SqliteStore {
    /// 连接数据库并执行待应用的迁移
    ///
    /// `url` 形如 `sqlite://panel.db?mode=rwc`。
    pub async fn connect(url: &str) -> CoreResult<Self> {
        let db = Database::connect(url)
            .await
            .map_err(|e| CoreError::StorageError(format!("Failed to open database: {e}")))?;
        Migrator::up(&db, None)
            .await
            .map_err(|e| CoreError::StorageError(format!("Failed to run migrations: {e}")))?;
        log::info!("SQLite mirror ready at {url}");
        Ok(Self { db })
    }

    /// 复用既有连接（迁移由调用方负责）
    #[must_use]
    pub fn from_connection(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ==================== 模型转换 ====================
//
// 时间戳在数据库里统一存 RFC3339 字符串，凭证存 JSON 字符串。

fn encode_credentials(map: &HashMap<String, String>) -> CoreResult<String> {
    serde_json::to_string(map)
        .map_err(|e| CoreError::StorageError(format!("Failed to encode credentials: {e}")))
}

fn decode_credentials(raw: &str) -> CoreResult<HashMap<String, String>> {
    serde_json::from_str(raw)
        .map_err(|e| CoreError::StorageError(format!("Failed to decode credentials: {e}")))
}

fn parse_timestamp(raw: &str) -> CoreResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| CoreError::StorageError(format!("Invalid timestamp \"{raw}\": {e}")))
}

fn channel_from_model(m: channel::Model) -> CoreResult<Channel> {
    Ok(Channel {
        credentials: decode_credentials(&m.credentials)?,
        created_at: parse_timestamp(&m.created_at)?,
        id: m.id,
        name: m.name,
        provider_type: m.provider_type,
        active: m.active,
    })
}

fn channel_to_model(c: &Channel) -> CoreResult<channel::ActiveModel> {
    Ok(channel::ActiveModel {
        id: Set(c.id.clone()),
        name: Set(c.name.clone()),
        provider_type: Set(c.provider_type.clone()),
        credentials: Set(encode_credentials(&c.credentials)?),
        active: Set(c.active),
        created_at: Set(c.created_at.to_rfc3339()),
    })
}

fn domain_from_model(m: domain::Model) -> CoreResult<Domain> {
    Ok(Domain {
        credentials: decode_credentials(&m.credentials)?,
        expiration_time: m.expiration_time.as_deref().map(parse_timestamp).transpose()?,
        created_at: parse_timestamp(&m.created_at)?,
        id: m.id,
        domain_name: m.domain_name,
        provider_type: m.provider_type,
        zone_ref: m.zone_ref,
        proxied_default: m.proxied_default,
    })
}

fn domain_to_model(d: &Domain) -> CoreResult<domain::ActiveModel> {
    Ok(domain::ActiveModel {
        id: Set(d.id.clone()),
        domain_name: Set(d.domain_name.clone()),
        provider_type: Set(d.provider_type.clone()),
        zone_ref: Set(d.zone_ref.clone()),
        credentials: Set(encode_credentials(&d.credentials)?),
        proxied_default: Set(d.proxied_default),
        expiration_time: Set(d.expiration_time.map(|dt| dt.to_rfc3339())),
        created_at: Set(d.created_at.to_rfc3339()),
    })
}

fn record_from_model(m: dns_record::Model) -> CoreResult<DnsRecordEntry> {
    let record_type = RecordType::parse(&m.record_type).ok_or_else(|| {
        CoreError::StorageError(format!("Unknown record type in mirror: {}", m.record_type))
    })?;
    Ok(DnsRecordEntry {
        created_at: parse_timestamp(&m.created_at)?,
        id: m.id,
        domain_id: m.domain_id,
        user_id: m.user_id,
        subdomain: m.subdomain,
        record_type,
        content: m.content,
        proxied: m.proxied,
        remote_id: m.remote_id,
        remark: m.remark,
    })
}

fn record_to_model(r: &DnsRecordEntry) -> dns_record::ActiveModel {
    dns_record::ActiveModel {
        id: Set(r.id.clone()),
        domain_id: Set(r.domain_id.clone()),
        user_id: Set(r.user_id.clone()),
        subdomain: Set(r.subdomain.clone()),
        record_type: Set(r.record_type.as_str().to_string()),
        content: Set(r.content.clone()),
        proxied: Set(r.proxied),
        remote_id: Set(r.remote_id.clone()),
        remark: Set(r.remark.clone()),
        created_at: Set(r.created_at.to_rfc3339()),
    }
}

// ==================== 仓库实现 ====================

#[async_trait]
impl ChannelRepository for SqliteStore {
    async fn find_all(&self) -> CoreResult<Vec<Channel>> {
        channel::Entity::find()
            .all(&self.db)
            .await
            .map_err(|e| CoreError::StorageError(format!("Failed to query channels: {e}")))?
            .into_iter()
            .map(channel_from_model)
            .collect()
    }

    async fn find_by_id(&self, id: &str) -> CoreResult<Option<Channel>> {
        channel::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| CoreError::StorageError(format!("Failed to query channel: {e}")))?
            .map(channel_from_model)
            .transpose()
    }

    async fn save(&self, ch: &Channel) -> CoreResult<()> {
        let model = channel_to_model(ch)?;
        channel::Entity::insert(model)
            .on_conflict(
                sea_orm::sea_query::OnConflict::column(channel::Column::Id)
                    .update_columns([
                        channel::Column::Name,
                        channel::Column::ProviderType,
                        channel::Column::Credentials,
                        channel::Column::Active,
                        channel::Column::CreatedAt,
                    ])
                    .to_owned(),
            )
            .exec(&self.db)
            .await
            .map_err(|e| CoreError::StorageError(format!("Failed to save channel: {e}")))?;
        Ok(())
    }

    async fn delete(&self, id: &str) -> CoreResult<()> {
        channel::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| CoreError::StorageError(format!("Failed to delete channel: {e}")))?;
        Ok(())
    }
}

#[async_trait]
impl DomainRepository for SqliteStore {
    async fn find_all(&self) -> CoreResult<Vec<Domain>> {
        domain::Entity::find()
            .all(&self.db)
            .await
            .map_err(|e| CoreError::StorageError(format!("Failed to query domains: {e}")))?
            .into_iter()
            .map(domain_from_model)
            .collect()
    }

    async fn find_by_id(&self, id: &str) -> CoreResult<Option<Domain>> {
        domain::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| CoreError::StorageError(format!("Failed to query domain: {e}")))?
            .map(domain_from_model)
            .transpose()
    }

    async fn find_by_name(&self, domain_name: &str) -> CoreResult<Option<Domain>> {
        domain::Entity::find()
            .filter(domain::Column::DomainName.eq(domain_name))
            .one(&self.db)
            .await
            .map_err(|e| CoreError::StorageError(format!("Failed to query domain: {e}")))?
            .map(domain_from_model)
            .transpose()
    }

    async fn save(&self, d: &Domain) -> CoreResult<()> {
        let model = domain_to_model(d)?;
        domain::Entity::insert(model)
            .on_conflict(
                sea_orm::sea_query::OnConflict::column(domain::Column::Id)
                    .update_columns([
                        domain::Column::DomainName,
                        domain::Column::ProviderType,
                        domain::Column::ZoneRef,
                        domain::Column::Credentials,
                        domain::Column::ProxiedDefault,
                        domain::Column::ExpirationTime,
                        domain::Column::CreatedAt,
                    ])
                    .to_owned(),
            )
            .exec(&self.db)
            .await
            .map_err(|e| CoreError::StorageError(format!("Failed to save domain: {e}")))?;
        Ok(())
    }

    async fn delete_with_records(&self, id: &str) -> CoreResult<()> {
        // 记录行和域名行要么都删掉要么都保留
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| CoreError::StorageError(format!("Failed to begin transaction: {e}")))?;
        dns_record::Entity::delete_many()
            .filter(dns_record::Column::DomainId.eq(id))
            .exec(&txn)
            .await
            .map_err(|e| CoreError::StorageError(format!("Failed to delete records: {e}")))?;
        domain::Entity::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(|e| CoreError::StorageError(format!("Failed to delete domain: {e}")))?;
        txn.commit()
            .await
            .map_err(|e| CoreError::StorageError(format!("Failed to commit transaction: {e}")))?;
        Ok(())
    }
}

#[async_trait]
impl RecordRepository for SqliteStore {
    async fn find_by_domain(&self, domain_id: &str) -> CoreResult<Vec<DnsRecordEntry>> {
        dns_record::Entity::find()
            .filter(dns_record::Column::DomainId.eq(domain_id))
            .all(&self.db)
            .await
            .map_err(|e| CoreError::StorageError(format!("Failed to query records: {e}")))?
            .into_iter()
            .map(record_from_model)
            .collect()
    }

    async fn find_by_id(&self, id: &str) -> CoreResult<Option<DnsRecordEntry>> {
        dns_record::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| CoreError::StorageError(format!("Failed to query record: {e}")))?
            .map(record_from_model)
            .transpose()
    }

    async fn save(&self, r: &DnsRecordEntry) -> CoreResult<()> {
        let model = record_to_model(r);
        dns_record::Entity::insert(model)
            .on_conflict(
                sea_orm::sea_query::OnConflict::column(dns_record::Column::Id)
                    .update_columns([
                        dns_record::Column::DomainId,
                        dns_record::Column::UserId,
                        dns_record::Column::Subdomain,
                        dns_record::Column::RecordType,
                        dns_record::Column::Content,
                        dns_record::Column::Proxied,
                        dns_record::Column::RemoteId,
                        dns_record::Column::Remark,
                        dns_record::Column::CreatedAt,
                    ])
                    .to_owned(),
            )
            .exec(&self.db)
            .await
            .map_err(|e| CoreError::StorageError(format!("Failed to save record: {e}")))?;
        Ok(())
    }

    async fn delete(&self, id: &str) -> CoreResult<()> {
        dns_record::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| CoreError::StorageError(format!("Failed to delete record: {e}")))?;
        Ok(())
    }
}
