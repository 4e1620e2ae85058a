//! DNS Provider implementations

/// Shared utilities used by provider implementations.
pub mod common;

#[cfg(feature = "cloudflare")]
mod cloudflare;
#[cfg(feature = "dnspod")]
mod dnspod;
#[cfg(feature = "powerdns")]
mod powerdns;
#[cfg(feature = "rainbow")]
mod rainbow;

#[cfg(feature = "cloudflare")]
pub use cloudflare::CloudflareProvider;
#[cfg(feature = "dnspod")]
pub use dnspod::DnspodProvider;
#[cfg(feature = "powerdns")]
pub use powerdns::PowerdnsProvider;
#[cfg(feature = "rainbow")]
pub use rainbow::RainbowProvider;
