use serde::{Deserialize, Serialize};

// ============ Provider Types ============

/// Identifies which DNS provider implementation to use.
///
/// Each variant is gated behind its corresponding feature flag.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ProviderType {
    /// Cloudflare DNS. Requires feature `cloudflare`.
    #[cfg(feature = "cloudflare")]
    Cloudflare,
    /// RainbowDNS aggregation service. Requires feature `rainbow`.
    #[cfg(feature = "rainbow")]
    Rainbow,
    /// Tencent Cloud `DNSPod`. Requires feature `dnspod`.
    #[cfg(feature = "dnspod")]
    Dnspod,
    /// Self-hosted PowerDNS authoritative server. Requires feature `powerdns`.
    #[cfg(feature = "powerdns")]
    Powerdns,
}

impl ProviderType {
    /// Parse a stored `provider_type` string. Returns `None` for unrecognized
    /// or feature-disabled providers; the registry turns that into a
    /// distinguishable error.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            #[cfg(feature = "cloudflare")]
            "cloudflare" => Some(Self::Cloudflare),
            #[cfg(feature = "rainbow")]
            "rainbow" => Some(Self::Rainbow),
            #[cfg(feature = "dnspod")]
            "dnspod" => Some(Self::Dnspod),
            #[cfg(feature = "powerdns")]
            "powerdns" => Some(Self::Powerdns),
            _ => None,
        }
    }
}

impl std::fmt::Display for ProviderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            #[cfg(feature = "cloudflare")]
            Self::Cloudflare => write!(f, "cloudflare"),
            #[cfg(feature = "rainbow")]
            Self::Rainbow => write!(f, "rainbow"),
            #[cfg(feature = "dnspod")]
            Self::Dnspod => write!(f, "dnspod"),
            #[cfg(feature = "powerdns")]
            Self::Powerdns => write!(f, "powerdns"),
        }
    }
}

// ============ Zone Types ============

/// Status of a zone as reported by a DNS provider.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ZoneStatus {
    /// Zone is active and resolving.
    Active,
    /// Zone is paused (not resolving).
    Paused,
    /// Zone is pending activation/verification.
    Pending,
    /// Zone is in an error state.
    Error,
    /// Status could not be determined.
    Unknown,
}

/// A zone as listed by a provider, used by import flows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZoneSummary {
    /// Provider-specific zone reference (Cloudflare zone id, Rainbow
    /// `thirdid`, `DNSPod` `DomainId`, PowerDNS zone id).
    pub id: String,
    /// Zone name (e.g. `"example.com"`).
    pub name: String,
    /// Current zone status.
    pub status: ZoneStatus,
}

// ============ Record Types ============

/// DNS record type, constrained to the subset the panel enables.
///
/// Serialized as uppercase strings (`"A"`, `"AAAA"`, `"CNAME"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RecordType {
    /// IPv4 address record.
    A,
    /// IPv6 address record.
    Aaaa,
    /// Canonical name (alias) record.
    Cname,
    /// Mail exchange record.
    Mx,
    /// Name server record.
    Ns,
    /// Text record.
    Txt,
    /// Service locator record.
    Srv,
    /// Pointer record (reverse mapping).
    Ptr,
    /// Certificate Authority Authorization record.
    Caa,
}

impl RecordType {
    /// Parse a stored record type string, case-insensitively. Returns `None`
    /// for types the panel does not manage.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_uppercase().as_str() {
            "A" => Some(Self::A),
            "AAAA" => Some(Self::Aaaa),
            "CNAME" => Some(Self::Cname),
            "MX" => Some(Self::Mx),
            "NS" => Some(Self::Ns),
            "TXT" => Some(Self::Txt),
            "SRV" => Some(Self::Srv),
            "PTR" => Some(Self::Ptr),
            "CAA" => Some(Self::Caa),
            _ => None,
        }
    }

    /// Whether Cloudflare's CDN proxy is legal for this record type.
    ///
    /// Only address-ish records (A/AAAA/CNAME) can be proxied; the reconciler
    /// forces `proxied = false` for everything else before the adapter is
    /// ever called.
    #[must_use]
    pub fn is_proxiable(self) -> bool {
        matches!(self, Self::A | Self::Aaaa | Self::Cname)
    }

    /// Whether this type participates in the mutually exclusive
    /// A/AAAA/CNAME set used by conflict detection.
    #[must_use]
    pub fn is_address_like(self) -> bool {
        matches!(self, Self::A | Self::Aaaa | Self::Cname)
    }

    /// Uppercase wire representation.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::Aaaa => "AAAA",
            Self::Cname => "CNAME",
            Self::Mx => "MX",
            Self::Ns => "NS",
            Self::Txt => "TXT",
            Self::Srv => "SRV",
            Self::Ptr => "PTR",
            Self::Caa => "CAA",
        }
    }
}

impl std::fmt::Display for RecordType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A DNS record as returned by a provider, normalized across vendors.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteRecord {
    /// Provider-native record identifier. For PowerDNS this is a synthesized
    /// `name|type|content` triple since the RRset model has no record ids.
    pub id: String,
    /// Full record name (e.g. `"www.example.com"`).
    pub name: String,
    /// Record type.
    pub record_type: RecordType,
    /// Record content/value.
    pub content: String,
    /// Whether CDN proxy is enabled. Only meaningful for Cloudflare.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxied: Option<bool>,
    /// Whether the provider has pinned this record as the fallback origin of
    /// a TLS/SaaS feature. Updates to such records must keep the proxy on.
    #[serde(default)]
    pub fallback_origin: bool,
}

/// Request to create a new DNS record upstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRecordRequest {
    /// Provider-specific zone reference.
    pub zone_ref: String,
    /// Full record name (apex records use the zone name itself).
    pub name: String,
    /// Record type.
    pub record_type: RecordType,
    /// Record content/value.
    pub content: String,
    /// Enable CDN proxy (Cloudflare only, ignored by other providers).
    pub proxied: Option<bool>,
}

/// Request to update an existing DNS record upstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRecordRequest {
    /// Provider-specific zone reference.
    pub zone_ref: String,
    /// New full record name.
    pub name: String,
    /// New record type.
    pub record_type: RecordType,
    /// New record content/value.
    pub content: String,
    /// Enable CDN proxy (Cloudflare only, ignored by other providers).
    pub proxied: Option<bool>,
}

// ============ Credential Check ============

/// Result of a best-effort credential probe.
///
/// A provider may accept two independent auth modes (Cloudflare API Token vs.
/// Global Key); each gets its own flag. Single-mode providers report their
/// only mode through `api_token_valid` and leave `global_key_valid` false.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialCheck {
    /// Whether the token-style credential authenticated successfully.
    pub api_token_valid: bool,
    /// Whether the legacy key-style credential authenticated successfully.
    pub global_key_valid: bool,
    /// Probe failure detail, when neither mode worked.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl CredentialCheck {
    /// Whether at least one auth mode is usable.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.api_token_valid || self.global_key_valid
    }
}

// ============ Credential Types ============

/// Validation error for provider credentials.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum CredentialValidationError {
    /// A required credential field is missing entirely.
    MissingField {
        /// Which provider the error relates to.
        provider: ProviderType,
        /// Machine-readable field key.
        field: String,
        /// Human-readable field label.
        label: String,
    },
    /// A credential field is present but empty/whitespace-only.
    EmptyField {
        /// Which provider the error relates to.
        provider: ProviderType,
        /// Machine-readable field key.
        field: String,
        /// Human-readable field label.
        label: String,
    },
    /// A credential field (or combination) has an invalid shape.
    InvalidFormat {
        /// Which provider the error relates to.
        provider: ProviderType,
        /// Machine-readable field key.
        field: String,
        /// Human-readable field label.
        label: String,
        /// Description of what's wrong.
        reason: String,
    },
}

impl std::fmt::Display for CredentialValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField { label, .. } => write!(f, "Missing required field: {label}"),
            Self::EmptyField { label, .. } => write!(f, "Field must not be empty: {label}"),
            Self::InvalidFormat { label, reason, .. } => write!(f, "{label}: {reason}"),
        }
    }
}

impl std::error::Error for CredentialValidationError {}

/// Type-safe credential container for all supported DNS providers.
///
/// Each variant holds the authentication fields required by that provider.
/// Pass this to [`create_provider()`](crate::create_provider) to instantiate
/// an adapter.
///
/// # Serialization
///
/// Tagged enum with `"provider"` as the tag and `"credentials"` as content:
///
/// ```json
/// { "provider": "dnspod", "credentials": { "secret_id": "...", "secret_key": "..." } }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "provider", content = "credentials")]
pub enum ProviderCredentials {
    /// Cloudflare credentials. Either an API token, or email + Global API
    /// Key; both modes are accepted and probed independently.
    #[cfg(feature = "cloudflare")]
    #[serde(rename = "cloudflare")]
    Cloudflare {
        /// API token (preferred auth mode).
        #[serde(skip_serializing_if = "Option::is_none")]
        api_token: Option<String>,
        /// Account email (legacy Global Key mode).
        #[serde(skip_serializing_if = "Option::is_none")]
        email: Option<String>,
        /// Global API Key (legacy mode, requires `email`).
        #[serde(skip_serializing_if = "Option::is_none")]
        api_key: Option<String>,
    },

    /// RainbowDNS credentials: numeric provider uid + API key against a
    /// configurable panel URL.
    #[cfg(feature = "rainbow")]
    #[serde(rename = "rainbow")]
    Rainbow {
        /// Numeric provider user id.
        provider_uid: u64,
        /// API key paired with the uid.
        api_key: String,
        /// Base URL of the RainbowDNS instance.
        base_url: String,
    },

    /// Tencent Cloud `DNSPod` credentials.
    #[cfg(feature = "dnspod")]
    #[serde(rename = "dnspod")]
    Dnspod {
        /// Tencent Cloud Secret ID.
        secret_id: String,
        /// Tencent Cloud Secret Key.
        secret_key: String,
    },

    /// Self-hosted PowerDNS credentials.
    #[cfg(feature = "powerdns")]
    #[serde(rename = "powerdns")]
    Powerdns {
        /// Base URL of the PowerDNS API (e.g. `http://ns1:8081`).
        api_url: String,
        /// API key sent via `X-API-Key`.
        api_key: String,
        /// Server id, defaults to `localhost`.
        server_id: String,
    },
}

/// Default PowerDNS server id when one is not configured.
pub const POWERDNS_DEFAULT_SERVER_ID: &str = "localhost";

impl ProviderCredentials {
    /// Construct credentials from a flat key-value map, validating required
    /// fields. This is the shape credential snapshots take in the mirror.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialValidationError`] if a required field is missing,
    /// empty, or malformed.
    pub fn from_map(
        provider: ProviderType,
        map: &std::collections::HashMap<String, String>,
    ) -> Result<Self, CredentialValidationError> {
        match provider {
            #[cfg(feature = "cloudflare")]
            ProviderType::Cloudflare => {
                let api_token = Self::get_optional_field(map, "apiToken");
                let email = Self::get_optional_field(map, "email");
                let api_key = Self::get_optional_field(map, "apiKey");

                // 两种认证方式二选一：token，或 email + Global Key
                if api_token.is_none() && (email.is_none() || api_key.is_none()) {
                    return Err(CredentialValidationError::InvalidFormat {
                        provider,
                        field: "apiToken".to_string(),
                        label: "API Token".to_string(),
                        reason: "Provide an API Token, or both Email and Global API Key"
                            .to_string(),
                    });
                }
                Ok(Self::Cloudflare {
                    api_token,
                    email,
                    api_key,
                })
            }
            #[cfg(feature = "rainbow")]
            ProviderType::Rainbow => {
                let uid_raw =
                    Self::get_required_field(provider, map, "providerUid", "Provider UID")?;
                let provider_uid = uid_raw.trim().parse::<u64>().map_err(|_| {
                    CredentialValidationError::InvalidFormat {
                        provider,
                        field: "providerUid".to_string(),
                        label: "Provider UID".to_string(),
                        reason: format!("must be numeric, got '{uid_raw}'"),
                    }
                })?;
                Ok(Self::Rainbow {
                    provider_uid,
                    api_key: Self::get_required_field(provider, map, "apiKey", "API Key")?,
                    base_url: Self::get_required_field(provider, map, "baseUrl", "API Base URL")?,
                })
            }
            #[cfg(feature = "dnspod")]
            ProviderType::Dnspod => Ok(Self::Dnspod {
                secret_id: Self::get_required_field(provider, map, "secretId", "Secret ID")?,
                secret_key: Self::get_required_field(provider, map, "secretKey", "Secret Key")?,
            }),
            #[cfg(feature = "powerdns")]
            ProviderType::Powerdns => Ok(Self::Powerdns {
                api_url: Self::get_required_field(provider, map, "apiUrl", "API URL")?,
                api_key: Self::get_required_field(provider, map, "apiKey", "API Key")?,
                server_id: Self::get_optional_field(map, "serverId")
                    .unwrap_or_else(|| POWERDNS_DEFAULT_SERVER_ID.to_string()),
            }),
        }
    }

    /// Obtain a required field from the map and verify that it is not empty.
    fn get_required_field(
        provider: ProviderType,
        map: &std::collections::HashMap<String, String>,
        key: &str,
        label: &str,
    ) -> Result<String, CredentialValidationError> {
        match map.get(key) {
            None => Err(CredentialValidationError::MissingField {
                provider,
                field: key.to_string(),
                label: label.to_string(),
            }),
            Some(v) if v.trim().is_empty() => Err(CredentialValidationError::EmptyField {
                provider,
                field: key.to_string(),
                label: label.to_string(),
            }),
            Some(v) => Ok(v.clone()),
        }
    }

    /// Obtain an optional field, treating whitespace-only values as absent.
    fn get_optional_field(
        map: &std::collections::HashMap<String, String>,
        key: &str,
    ) -> Option<String> {
        map.get(key)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    /// Convert credentials to a flat key-value map for snapshot storage.
    pub fn to_map(&self) -> std::collections::HashMap<String, String> {
        match self {
            #[cfg(feature = "cloudflare")]
            Self::Cloudflare {
                api_token,
                email,
                api_key,
            } => {
                let mut map = std::collections::HashMap::new();
                if let Some(token) = api_token {
                    map.insert("apiToken".to_string(), token.clone());
                }
                if let Some(email) = email {
                    map.insert("email".to_string(), email.clone());
                }
                if let Some(key) = api_key {
                    map.insert("apiKey".to_string(), key.clone());
                }
                map
            }
            #[cfg(feature = "rainbow")]
            Self::Rainbow {
                provider_uid,
                api_key,
                base_url,
            } => [
                ("providerUid".to_string(), provider_uid.to_string()),
                ("apiKey".to_string(), api_key.clone()),
                ("baseUrl".to_string(), base_url.clone()),
            ]
            .into(),
            #[cfg(feature = "dnspod")]
            Self::Dnspod {
                secret_id,
                secret_key,
            } => [
                ("secretId".to_string(), secret_id.clone()),
                ("secretKey".to_string(), secret_key.clone()),
            ]
            .into(),
            #[cfg(feature = "powerdns")]
            Self::Powerdns {
                api_url,
                api_key,
                server_id,
            } => [
                ("apiUrl".to_string(), api_url.clone()),
                ("apiKey".to_string(), api_key.clone()),
                ("serverId".to_string(), server_id.clone()),
            ]
            .into(),
        }
    }

    /// Returns the [`ProviderType`] corresponding to this credential variant.
    #[must_use]
    pub fn provider_type(&self) -> ProviderType {
        match self {
            #[cfg(feature = "cloudflare")]
            Self::Cloudflare { .. } => ProviderType::Cloudflare,
            #[cfg(feature = "rainbow")]
            Self::Rainbow { .. } => ProviderType::Rainbow,
            #[cfg(feature = "dnspod")]
            Self::Dnspod { .. } => ProviderType::Dnspod,
            #[cfg(feature = "powerdns")]
            Self::Powerdns { .. } => ProviderType::Powerdns,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    // ============ ProviderType round trip ============

    #[test]
    fn provider_type_parse_known() {
        assert_eq!(
            ProviderType::parse("cloudflare"),
            Some(ProviderType::Cloudflare)
        );
        assert_eq!(ProviderType::parse("Rainbow"), Some(ProviderType::Rainbow));
        assert_eq!(ProviderType::parse("DNSPOD"), Some(ProviderType::Dnspod));
        assert_eq!(
            ProviderType::parse("powerdns"),
            Some(ProviderType::Powerdns)
        );
    }

    #[test]
    fn provider_type_parse_unknown() {
        assert_eq!(ProviderType::parse("route53"), None);
        assert_eq!(ProviderType::parse(""), None);
    }

    #[test]
    fn provider_type_display_matches_parse() {
        for t in [
            ProviderType::Cloudflare,
            ProviderType::Rainbow,
            ProviderType::Dnspod,
            ProviderType::Powerdns,
        ] {
            assert_eq!(ProviderType::parse(&t.to_string()), Some(t));
        }
    }

    // ============ RecordType helpers ============

    #[test]
    fn proxiable_types() {
        assert!(RecordType::A.is_proxiable());
        assert!(RecordType::Aaaa.is_proxiable());
        assert!(RecordType::Cname.is_proxiable());
        assert!(!RecordType::Mx.is_proxiable());
        assert!(!RecordType::Txt.is_proxiable());
        assert!(!RecordType::Ns.is_proxiable());
        assert!(!RecordType::Srv.is_proxiable());
        assert!(!RecordType::Ptr.is_proxiable());
        assert!(!RecordType::Caa.is_proxiable());
    }

    #[test]
    fn record_type_parse_round_trip() {
        for rt in [
            RecordType::A,
            RecordType::Aaaa,
            RecordType::Cname,
            RecordType::Mx,
            RecordType::Ns,
            RecordType::Txt,
            RecordType::Srv,
            RecordType::Ptr,
            RecordType::Caa,
        ] {
            assert_eq!(RecordType::parse(rt.as_str()), Some(rt));
        }
        assert_eq!(RecordType::parse("cname"), Some(RecordType::Cname));
        assert_eq!(RecordType::parse("SOA"), None);
        assert_eq!(RecordType::parse(""), None);
    }

    #[test]
    fn record_type_serde_uppercase() {
        assert_eq!(serde_json::to_string(&RecordType::Aaaa).unwrap(), "\"AAAA\"");
        let back: RecordType = serde_json::from_str("\"CNAME\"").unwrap();
        assert_eq!(back, RecordType::Cname);
    }

    // ============ Credentials ============

    #[test]
    fn credentials_cloudflare_token_mode() {
        let map: HashMap<String, String> =
            [("apiToken".to_string(), "my-token".to_string())].into();
        let cred = ProviderCredentials::from_map(ProviderType::Cloudflare, &map).unwrap();
        let back = cred.to_map();
        assert_eq!(back.get("apiToken").map(String::as_str), Some("my-token"));
        assert_eq!(cred.provider_type(), ProviderType::Cloudflare);
    }

    #[test]
    fn credentials_cloudflare_global_key_mode() {
        let map: HashMap<String, String> = [
            ("email".to_string(), "admin@example.com".to_string()),
            ("apiKey".to_string(), "gk-123".to_string()),
        ]
        .into();
        let cred = ProviderCredentials::from_map(ProviderType::Cloudflare, &map).unwrap();
        let back = cred.to_map();
        assert_eq!(
            back.get("email").map(String::as_str),
            Some("admin@example.com")
        );
        assert_eq!(back.get("apiKey").map(String::as_str), Some("gk-123"));
    }

    #[test]
    fn credentials_cloudflare_rejects_incomplete_global_key() {
        // 只有 email 没有 key 不构成有效认证方式
        let map: HashMap<String, String> =
            [("email".to_string(), "admin@example.com".to_string())].into();
        let res = ProviderCredentials::from_map(ProviderType::Cloudflare, &map);
        assert!(matches!(
            res,
            Err(CredentialValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn credentials_rainbow_roundtrip() {
        let map: HashMap<String, String> = [
            ("providerUid".to_string(), "1001".to_string()),
            ("apiKey".to_string(), "rk".to_string()),
            ("baseUrl".to_string(), "https://dns.example.net".to_string()),
        ]
        .into();
        let cred = ProviderCredentials::from_map(ProviderType::Rainbow, &map).unwrap();
        let back = cred.to_map();
        assert_eq!(back.get("providerUid").map(String::as_str), Some("1001"));
        assert_eq!(
            back.get("baseUrl").map(String::as_str),
            Some("https://dns.example.net")
        );
    }

    #[test]
    fn credentials_rainbow_non_numeric_uid() {
        let map: HashMap<String, String> = [
            ("providerUid".to_string(), "abc".to_string()),
            ("apiKey".to_string(), "rk".to_string()),
            ("baseUrl".to_string(), "https://dns.example.net".to_string()),
        ]
        .into();
        let res = ProviderCredentials::from_map(ProviderType::Rainbow, &map);
        assert!(matches!(
            res,
            Err(CredentialValidationError::InvalidFormat { field, .. }) if field == "providerUid"
        ));
    }

    #[test]
    fn credentials_dnspod_roundtrip() {
        let map: HashMap<String, String> = [
            ("secretId".to_string(), "sid".to_string()),
            ("secretKey".to_string(), "skey".to_string()),
        ]
        .into();
        let cred = ProviderCredentials::from_map(ProviderType::Dnspod, &map).unwrap();
        let back = cred.to_map();
        assert_eq!(back.get("secretId").map(String::as_str), Some("sid"));
        assert_eq!(back.get("secretKey").map(String::as_str), Some("skey"));
    }

    #[test]
    fn credentials_powerdns_default_server_id() {
        let map: HashMap<String, String> = [
            ("apiUrl".to_string(), "http://ns1:8081".to_string()),
            ("apiKey".to_string(), "pk".to_string()),
        ]
        .into();
        let cred = ProviderCredentials::from_map(ProviderType::Powerdns, &map).unwrap();
        match &cred {
            ProviderCredentials::Powerdns { server_id, .. } => {
                assert_eq!(server_id, POWERDNS_DEFAULT_SERVER_ID);
            }
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn credentials_missing_field() {
        let map: HashMap<String, String> = HashMap::new();
        let res = ProviderCredentials::from_map(ProviderType::Dnspod, &map);
        assert!(matches!(
            res,
            Err(CredentialValidationError::MissingField { .. })
        ));
    }

    #[test]
    fn credentials_empty_field() {
        let map: HashMap<String, String> = [
            ("secretId".to_string(), "  ".to_string()),
            ("secretKey".to_string(), "k".to_string()),
        ]
        .into();
        let res = ProviderCredentials::from_map(ProviderType::Dnspod, &map);
        assert!(matches!(
            res,
            Err(CredentialValidationError::EmptyField { .. })
        ));
    }

    // ============ CredentialCheck ============

    #[test]
    fn credential_check_either_mode_valid() {
        let check = CredentialCheck {
            api_token_valid: false,
            global_key_valid: true,
            error_message: None,
        };
        assert!(check.is_valid());
        assert!(!CredentialCheck::default().is_valid());
    }
}
