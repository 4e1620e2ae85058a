//! DNS Panel SQLite Store
//!
//! `dns-panel-core` 三个仓库 trait 的默认实现，基于 `SeaORM` + SQLite。
//! 连接时自动执行迁移，平台层只需要一个数据库 URL。

pub mod entities;
pub mod migration;
mod store;

pub use migration::Migrator;
pub use store::SqliteStore;
