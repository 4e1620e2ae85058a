//! Provider factory functions.

use std::sync::Arc;

use crate::error::Result;
use crate::traits::DnsProvider;
use crate::types::ProviderCredentials;

#[cfg(feature = "cloudflare")]
use crate::providers::CloudflareProvider;
#[cfg(feature = "dnspod")]
use crate::providers::DnspodProvider;
#[cfg(feature = "powerdns")]
use crate::providers::PowerdnsProvider;
#[cfg(feature = "rainbow")]
use crate::providers::RainbowProvider;

/// Creates a [`DnsProvider`] instance from the given credentials.
///
/// The concrete provider type is determined by the [`ProviderCredentials`]
/// variant. The returned provider is wrapped in `Arc<dyn DnsProvider>` for
/// sharing across async tasks.
///
/// # Examples
///
/// ```rust,no_run
/// use dns_panel_provider::{create_provider, ProviderCredentials};
///
/// let provider = create_provider(ProviderCredentials::Dnspod {
///     secret_id: "your-secret-id".to_string(),
///     secret_key: "your-secret-key".to_string(),
/// }).unwrap();
/// ```
pub fn create_provider(credentials: ProviderCredentials) -> Result<Arc<dyn DnsProvider>> {
    match credentials {
        #[cfg(feature = "cloudflare")]
        ProviderCredentials::Cloudflare {
            api_token,
            email,
            api_key,
        } => Ok(Arc::new(CloudflareProvider::new(api_token, email, api_key))),
        #[cfg(feature = "rainbow")]
        ProviderCredentials::Rainbow {
            provider_uid,
            api_key,
            base_url,
        } => Ok(Arc::new(RainbowProvider::new(
            provider_uid,
            api_key,
            base_url,
        ))),
        #[cfg(feature = "dnspod")]
        ProviderCredentials::Dnspod {
            secret_id,
            secret_key,
        } => Ok(Arc::new(DnspodProvider::new(secret_id, secret_key))),
        #[cfg(feature = "powerdns")]
        ProviderCredentials::Powerdns {
            api_url,
            api_key,
            server_id,
        } => Ok(Arc::new(PowerdnsProvider::new(api_url, api_key, server_id))),
    }
}
