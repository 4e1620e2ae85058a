//! # dns-panel-provider
//!
//! A unified DNS provider abstraction for the panel's synchronization core,
//! translating one capability contract onto four incompatible vendor APIs.
//!
//! ## Supported Providers
//!
//! | Provider | Feature Flag | Auth Method | Zone Reference |
//! |----------|-------------|-------------|----------------|
//! | [Cloudflare](https://www.cloudflare.com/) | `cloudflare` | Bearer Token or Email + Global Key | zone id |
//! | RainbowDNS (self-hosted panel) | `rainbow` | uid + key signed query | "thirdid" |
//! | [DNSPod (Tencent Cloud)](https://www.dnspod.cn/) | `dnspod` | TC3-HMAC-SHA256 | numeric `DomainId` |
//! | [PowerDNS](https://www.powerdns.com/) (self-hosted) | `powerdns` | `X-API-Key` | server-scoped zone id |
//!
//! ## Feature Flags
//!
//! ### Provider Selection
//!
//! - **`all-providers`** *(default)* — Enable all providers listed above.
//! - **`cloudflare`** / **`rainbow`** / **`dnspod`** / **`powerdns`** —
//!   Enable individual providers.
//!
//! ### TLS Backend
//!
//! - **`native-tls`** *(default)* — Use the platform's native TLS implementation.
//! - **`rustls`** — Use rustls. Recommended for cross-compilation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use dns_panel_provider::{create_provider, DnsProvider, ProviderCredentials};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let credentials = ProviderCredentials::Cloudflare {
//!         api_token: Some("your-token".to_string()),
//!         email: None,
//!         api_key: None,
//!     };
//!     let provider = create_provider(credentials)?;
//!
//!     let check = provider.verify_credentials().await?;
//!     assert!(check.is_valid());
//!
//!     for zone in provider.list_zones().await? {
//!         println!("{} ({:?})", zone.name, zone.status);
//!         for record in provider.list_records(&zone.id).await? {
//!             println!("  {} {} -> {}", record.name, record.record_type, record.content);
//!         }
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, ProviderError>`](ProviderError). The
//! enum carries structured variants for the failure modes the reconciler
//! distinguishes:
//!
//! - [`ProviderError::InvalidCredentials`] — authentication failed
//! - [`ProviderError::RecordNotFound`] — remote record already gone
//!   (idempotent-delete signal, see [`ProviderError::is_not_found`])
//! - [`ProviderError::RateLimited`] — API rate limit exceeded (retryable)
//! - [`ProviderError::NetworkError`] — connectivity issue (retryable)
//!
//! Transient errors are retried with exponential backoff inside the shared
//! HTTP executor; vendor rejections are surfaced immediately.

mod error;
mod factory;
mod http_client;
mod providers;
mod traits;
mod types;
mod utils;

// Re-export error types
pub use error::{ProviderError, Result};

// Re-export factory functions
pub use factory::create_provider;

// Re-export core trait only (internal traits are not exported)
pub use traits::DnsProvider;

// Re-export types
pub use types::{
    CreateRecordRequest, CredentialCheck, CredentialValidationError, ProviderCredentials,
    ProviderType, RecordType, RemoteRecord, UpdateRecordRequest, ZoneStatus, ZoneSummary,
    POWERDNS_DEFAULT_SERVER_ID,
};

// Re-export concrete providers (behind feature flags)
#[cfg(feature = "cloudflare")]
pub use providers::CloudflareProvider;

#[cfg(feature = "dnspod")]
pub use providers::DnspodProvider;

#[cfg(feature = "powerdns")]
pub use providers::PowerdnsProvider;

#[cfg(feature = "rainbow")]
pub use providers::RainbowProvider;
