//! DNS Panel Core Library
//!
//! 面板的多服务商 DNS 同步与冲突调和核心：
//! - 冲突前置检查（Conflict Detector）
//! - 记录调和（创建/更新/删除，镜像一致性语义）
//! - 级联删除（部分失败容忍，聚合报告）
//! - 渠道与域名导入管理
//!
//! 存储层通过 trait 抽象注入，本库自身不依赖具体数据库，
//! 默认的 `SQLite` 实现在 `dns-panel-store` 中。

pub mod conflict;
pub mod error;
pub mod expiry;
pub mod services;
pub mod traits;
pub mod types;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use services::{ChannelService, DomainService, RecordService, ServiceContext};
pub use traits::{
    AuditSink, ChannelRepository, CredentialProviderRegistry, DomainRepository, ExpirationLookup,
    LogAuditSink, ProviderRegistry, RecordRepository, WhoisExpirationLookup,
};
