//! PowerDNS DnsProvider trait 实现

use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::providers::common::{normalize_domain_name, parse_record_type};
use crate::traits::{DnsProvider, ErrorContext, ProviderErrorMapper};
use crate::types::{
    CreateRecordRequest, CredentialCheck, RecordType, RemoteRecord, UpdateRecordRequest,
    ZoneStatus, ZoneSummary,
};

use super::types::{PowerdnsRecord, RrsetChange, RrsetPatch};
use super::{PowerdnsProvider, PowerdnsRrset, PowerdnsZone, PowerdnsZoneDetail, RECORD_ID_SEPARATOR};

/// 新建 RRset 的默认 TTL
const DEFAULT_TTL: u32 = 3600;

/// 合成 `name|type|content` 形式的记录 id
fn encode_record_id(name: &str, record_type: RecordType, content: &str) -> String {
    format!(
        "{}{RECORD_ID_SEPARATOR}{}{RECORD_ID_SEPARATOR}{content}",
        normalize_domain_name(name),
        record_type.as_str()
    )
}

/// 拆开合成 id，返回 (name, type, content)
fn parse_record_id(id: &str) -> Option<(&str, &str, &str)> {
    let mut parts = id.splitn(3, RECORD_ID_SEPARATOR);
    match (parts.next(), parts.next(), parts.next()) {
        (Some(name), Some(record_type), Some(content))
            if !name.is_empty() && !record_type.is_empty() =>
        {
            Some((name, record_type, content))
        }
        _ => None,
    }
}

/// API 侧名称带尾点
fn to_api_name(name: &str) -> String {
    format!("{}.", normalize_domain_name(name))
}

impl PowerdnsProvider {
    fn bad_record_id(&self, id: &str) -> ProviderError {
        ProviderError::RecordNotFound {
            provider: self.provider_name().to_string(),
            record_id: id.to_string(),
            raw_message: Some("malformed synthesized record id".to_string()),
        }
    }

    async fn fetch_zone(&self, zone_ref: &str) -> Result<PowerdnsZoneDetail> {
        let context = ErrorContext {
            zone: Some(zone_ref.to_string()),
            ..ErrorContext::default()
        };
        self.get(&format!("/zones/{zone_ref}"), context).await
    }

    /// 在区域详情里找指定 (name, type) 的 RRset
    fn find_rrset<'a>(
        zone: &'a PowerdnsZoneDetail,
        name: &str,
        record_type: &str,
    ) -> Option<&'a PowerdnsRrset> {
        let api_name = to_api_name(name);
        zone.rrsets.iter().find(|rs| {
            rs.name.eq_ignore_ascii_case(&api_name)
                && rs.record_type.eq_ignore_ascii_case(record_type)
        })
    }

    fn rrset_to_remote(&self, rrset: &PowerdnsRrset) -> Vec<RemoteRecord> {
        let record_type = match parse_record_type(&rrset.record_type, self.provider_name()) {
            Ok(t) => t,
            Err(e) => {
                // SOA 等面板未启用的类型不进镜像
                log::debug!("[powerdns] Skipping rrset: {e}");
                return Vec::new();
            }
        };

        let name = normalize_domain_name(&rrset.name);
        rrset
            .records
            .iter()
            .filter(|r| !r.disabled)
            .map(|r| RemoteRecord {
                id: encode_record_id(&name, record_type, &r.content),
                name: name.clone(),
                record_type,
                content: r.content.clone(),
                proxied: None,
                fallback_origin: false,
            })
            .collect()
    }

    /// 对一个 RRset 应用内容增删，生成补丁变更
    ///
    /// `remove` 先于 `add`；剩余内容为空时产出 DELETE。
    fn rebuild_rrset(
        existing: Option<&PowerdnsRrset>,
        name: &str,
        record_type: &str,
        remove: Option<&str>,
        add: Option<&str>,
    ) -> RrsetChange {
        let ttl = existing.map_or(DEFAULT_TTL, |rs| rs.ttl);
        let mut records: Vec<PowerdnsRecord> = existing
            .map(|rs| rs.records.clone())
            .unwrap_or_default();

        if let Some(content) = remove {
            records.retain(|r| r.content != content);
        }
        if let Some(content) = add {
            records.push(PowerdnsRecord {
                content: content.to_string(),
                disabled: false,
            });
        }

        let api_name = to_api_name(name);
        if records.is_empty() {
            RrsetChange::delete(api_name, record_type.to_string())
        } else {
            RrsetChange::replace(api_name, record_type.to_string(), ttl, records)
        }
    }
}

#[async_trait]
impl DnsProvider for PowerdnsProvider {
    fn id(&self) -> &'static str {
        "powerdns"
    }

    async fn verify_credentials(&self) -> Result<CredentialCheck> {
        match self
            .get::<Vec<PowerdnsZone>>("/zones", ErrorContext::default())
            .await
        {
            Ok(_) => Ok(CredentialCheck {
                api_token_valid: true,
                ..CredentialCheck::default()
            }),
            Err(e @ ProviderError::InvalidCredentials { .. }) => Ok(CredentialCheck {
                error_message: Some(e.to_string()),
                ..CredentialCheck::default()
            }),
            Err(e) => Err(e),
        }
    }

    async fn list_zones(&self) -> Result<Vec<ZoneSummary>> {
        let zones: Vec<PowerdnsZone> = self.get("/zones", ErrorContext::default()).await?;
        log::info!("[powerdns] Listed {} zones", zones.len());

        Ok(zones
            .into_iter()
            .map(|z| ZoneSummary {
                id: z.id,
                name: normalize_domain_name(&z.name),
                // 权威服务器上配置了就在解析
                status: ZoneStatus::Active,
            })
            .collect())
    }

    async fn list_records(&self, zone_ref: &str) -> Result<Vec<RemoteRecord>> {
        let zone = self.fetch_zone(zone_ref).await?;
        Ok(zone
            .rrsets
            .iter()
            .flat_map(|rs| self.rrset_to_remote(rs))
            .collect())
    }

    async fn create_record(&self, req: &CreateRecordRequest) -> Result<RemoteRecord> {
        let zone = self.fetch_zone(&req.zone_ref).await?;
        let type_str = req.record_type.as_str();
        let existing = Self::find_rrset(&zone, &req.name, type_str);

        // RRset 里已有等值内容时上游 REPLACE 会静默去重，这里主动报冲突
        if existing.is_some_and(|rs| rs.records.iter().any(|r| r.content == req.content)) {
            return Err(ProviderError::RecordExists {
                provider: self.provider_name().to_string(),
                record_name: req.name.clone(),
                raw_message: None,
            });
        }

        let change = Self::rebuild_rrset(existing, &req.name, type_str, None, Some(&req.content));
        let context = ErrorContext {
            record_name: Some(req.name.clone()),
            zone: Some(req.zone_ref.clone()),
            ..ErrorContext::default()
        };
        self.patch(
            &format!("/zones/{}", req.zone_ref),
            &RrsetPatch {
                rrsets: vec![change],
            },
            context,
        )
        .await?;

        Ok(RemoteRecord {
            id: encode_record_id(&req.name, req.record_type, &req.content),
            name: normalize_domain_name(&req.name),
            record_type: req.record_type,
            content: req.content.clone(),
            proxied: None,
            fallback_origin: false,
        })
    }

    async fn update_record(
        &self,
        remote_id: &str,
        req: &UpdateRecordRequest,
    ) -> Result<RemoteRecord> {
        let (old_name, old_type, old_content) =
            parse_record_id(remote_id).ok_or_else(|| self.bad_record_id(remote_id))?;

        let zone = self.fetch_zone(&req.zone_ref).await?;
        let new_type = req.record_type.as_str();

        let old_rrset = Self::find_rrset(&zone, old_name, old_type);
        if !old_rrset.is_some_and(|rs| rs.records.iter().any(|r| r.content == old_content)) {
            return Err(ProviderError::RecordNotFound {
                provider: self.provider_name().to_string(),
                record_id: remote_id.to_string(),
                raw_message: None,
            });
        }

        let same_rrset = normalize_domain_name(old_name).eq_ignore_ascii_case(
            &normalize_domain_name(&req.name),
        ) && old_type.eq_ignore_ascii_case(new_type);

        // 同一 RRset 内改内容是一次 REPLACE；跨 RRset 则旧减新增，
        // 两个变更放进同一个 PATCH，由服务端原子应用
        let changes = if same_rrset {
            vec![Self::rebuild_rrset(
                old_rrset,
                old_name,
                old_type,
                Some(old_content),
                Some(&req.content),
            )]
        } else {
            let new_rrset = Self::find_rrset(&zone, &req.name, new_type);
            vec![
                Self::rebuild_rrset(old_rrset, old_name, old_type, Some(old_content), None),
                Self::rebuild_rrset(new_rrset, &req.name, new_type, None, Some(&req.content)),
            ]
        };

        let context = ErrorContext {
            record_name: Some(req.name.clone()),
            record_id: Some(remote_id.to_string()),
            zone: Some(req.zone_ref.clone()),
        };
        self.patch(
            &format!("/zones/{}", req.zone_ref),
            &RrsetPatch { rrsets: changes },
            context,
        )
        .await?;

        Ok(RemoteRecord {
            id: encode_record_id(&req.name, req.record_type, &req.content),
            name: normalize_domain_name(&req.name),
            record_type: req.record_type,
            content: req.content.clone(),
            proxied: None,
            fallback_origin: false,
        })
    }

    async fn delete_record(&self, zone_ref: &str, remote_id: &str) -> Result<()> {
        let (name, record_type, content) =
            parse_record_id(remote_id).ok_or_else(|| self.bad_record_id(remote_id))?;

        let zone = self.fetch_zone(zone_ref).await?;
        let rrset = Self::find_rrset(&zone, name, record_type);

        // 内容已经不在了就报 not found，让上层按幂等删除处理
        if !rrset.is_some_and(|rs| rs.records.iter().any(|r| r.content == content)) {
            return Err(ProviderError::RecordNotFound {
                provider: self.provider_name().to_string(),
                record_id: remote_id.to_string(),
                raw_message: None,
            });
        }

        let change = Self::rebuild_rrset(rrset, name, record_type, Some(content), None);
        let context = ErrorContext {
            record_id: Some(remote_id.to_string()),
            zone: Some(zone_ref.to_string()),
            ..ErrorContext::default()
        };
        self.patch(
            &format!("/zones/{zone_ref}"),
            &RrsetPatch {
                rrsets: vec![change],
            },
            context,
        )
        .await
    }
}
