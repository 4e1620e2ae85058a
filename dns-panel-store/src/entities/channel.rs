//! 渠道实体

use sea_orm::entity::prelude::*;

/// `channels` 表：一组服务商凭证
///
/// `credentials` 以 JSON 键值对字符串存储，时间戳以 RFC3339 字符串存储。
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "channels")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub provider_type: String,
    pub credentials: String,
    pub active: bool,
    pub created_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
