//! Storage layer abstraction trait definition

mod audit_sink;
mod channel_repository;
mod domain_repository;
mod expiration_lookup;
mod provider_registry;
mod record_repository;

pub use audit_sink::{AuditSink, LogAuditSink};
pub use channel_repository::ChannelRepository;
pub use domain_repository::DomainRepository;
pub use expiration_lookup::{ExpirationLookup, WhoisExpirationLookup};
pub use provider_registry::{CredentialProviderRegistry, ProviderRegistry};
pub use record_repository::RecordRepository;
