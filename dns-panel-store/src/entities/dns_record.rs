//! DNS 记录实体

use sea_orm::entity::prelude::*;

/// `dns_records` 表：一条本地镜像记录行
///
/// `remote_id` 为空表示该行从未与服务商同步成功。
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "dns_records")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub domain_id: String,
    pub user_id: Option<String>,
    pub subdomain: String,
    pub record_type: String,
    pub content: String,
    pub proxied: bool,
    pub remote_id: Option<String>,
    pub remark: Option<String>,
    pub created_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::domain::Entity",
        from = "Column::DomainId",
        to = "super::domain::Column::Id",
        on_delete = "Cascade"
    )]
    Domain,
}

impl Related<super::domain::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Domain.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
