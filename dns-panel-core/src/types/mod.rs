//! 类型定义模块

mod audit;
mod channel;
mod domain;
mod record;
mod report;

pub use audit::{Actor, ActorKind};
pub use channel::{Channel, CreateChannelRequest, UpdateChannelRequest};
pub use domain::Domain;
pub use record::{CreateRecordCommand, DnsRecordEntry, UpdateOutcome, UpdateRecordCommand};
pub use report::{DomainDeleteReport, ZoneImportReport};

// Re-export provider 库的公共类型
pub use dns_panel_provider::{
    CreateRecordRequest, CredentialCheck, CredentialValidationError, ProviderCredentials,
    ProviderType, RecordType, RemoteRecord, UpdateRecordRequest, ZoneStatus, ZoneSummary,
};
