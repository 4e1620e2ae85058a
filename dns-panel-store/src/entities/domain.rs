//! 域名实体

use sea_orm::entity::prelude::*;

/// `domains` 表：本地镜像中的一个 DNS 区域
///
/// `credentials` 是导入时复制的凭证快照（JSON 字符串），
/// 与渠道之间没有外键关系。`domain_name` 全表唯一。
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "domains")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    #[sea_orm(unique)]
    pub domain_name: String,
    pub provider_type: String,
    pub zone_ref: String,
    pub credentials: String,
    pub proxied_default: bool,
    pub expiration_time: Option<String>,
    pub created_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::dns_record::Entity")]
    DnsRecord,
}

impl Related<super::dns_record::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DnsRecord.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
