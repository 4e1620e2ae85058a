//! 数据库迁移

mod m20240101_000001_create_tables;

use sea_orm_migration::prelude::*;

/// 迁移器
pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20240101_000001_create_tables::Migration)]
    }
}
