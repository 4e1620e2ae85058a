//! RainbowDNS DnsProvider trait 实现

use async_trait::async_trait;
use serde::Serialize;

use crate::error::Result;
use crate::providers::common::parse_record_type;
use crate::traits::{DnsProvider, ErrorContext, ProviderErrorMapper};
use crate::types::{
    CreateRecordRequest, CredentialCheck, RemoteRecord, UpdateRecordRequest, ZoneStatus,
    ZoneSummary,
};

use super::types::RainbowPage;
use super::{MAX_PAGE_SIZE, RainbowProvider, RainbowRecord, RainbowZone};

/// 记录写请求体
#[derive(Debug, Serialize)]
struct RecordPayload<'a> {
    domain_id: &'a str,
    name: &'a str,
    #[serde(rename = "type")]
    record_type: &'static str,
    value: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    record_id: Option<&'a str>,
}

impl RainbowProvider {
    fn zone_to_summary(zone: RainbowZone) -> ZoneSummary {
        ZoneSummary {
            id: zone.id,
            name: zone.name,
            status: if zone.status == 1 {
                ZoneStatus::Active
            } else {
                ZoneStatus::Paused
            },
        }
    }

    fn rainbow_record_to_remote(&self, record: RainbowRecord) -> Result<RemoteRecord> {
        let record_type = parse_record_type(&record.record_type, self.provider_name())?;
        Ok(RemoteRecord {
            id: record.id,
            name: record.name,
            record_type,
            content: record.value,
            // RainbowDNS 没有代理概念
            proxied: None,
            fallback_origin: false,
        })
    }

    /// 拉取一个分页列表接口的全部条目
    async fn fetch_all_pages<T: for<'de> serde::Deserialize<'de>>(
        &self,
        path: &str,
        extra: &[(&str, String)],
    ) -> Result<Vec<T>> {
        let mut items: Vec<T> = Vec::new();
        let mut offset = 0_u32;

        loop {
            let mut query: Vec<(&str, String)> = vec![
                ("offset", offset.to_string()),
                ("limit", MAX_PAGE_SIZE.to_string()),
            ];
            query.extend(extra.iter().cloned());

            let page: RainbowPage<T> = self.get(path, &query, ErrorContext::default()).await?;
            let batch_len = page.rows.len() as u32;
            items.extend(page.rows);

            offset += batch_len;
            if batch_len < MAX_PAGE_SIZE || offset >= page.total {
                break;
            }
        }

        Ok(items)
    }
}

#[async_trait]
impl DnsProvider for RainbowProvider {
    fn id(&self) -> &'static str {
        "rainbow"
    }

    async fn verify_credentials(&self) -> Result<CredentialCheck> {
        // 面板只有一种认证方式，拉一页域名列表作为探测
        let query = [("offset", "0".to_string()), ("limit", "1".to_string())];
        match self
            .get::<RainbowPage<RainbowZone>>("/api/domain/list", &query, ErrorContext::default())
            .await
        {
            Ok(_) => Ok(CredentialCheck {
                api_token_valid: true,
                ..CredentialCheck::default()
            }),
            Err(e) if e.is_expected() => Ok(CredentialCheck {
                error_message: Some(e.to_string()),
                ..CredentialCheck::default()
            }),
            Err(e) => Err(e),
        }
    }

    async fn list_zones(&self) -> Result<Vec<ZoneSummary>> {
        let zones: Vec<RainbowZone> = self.fetch_all_pages("/api/domain/list", &[]).await?;
        log::info!("[rainbow] Listed {} zones", zones.len());
        Ok(zones.into_iter().map(Self::zone_to_summary).collect())
    }

    async fn list_records(&self, zone_ref: &str) -> Result<Vec<RemoteRecord>> {
        let extra = [("domain_id", zone_ref.to_string())];
        let raw: Vec<RainbowRecord> = self.fetch_all_pages("/api/record/list", &extra).await?;

        let mut records = Vec::with_capacity(raw.len());
        for record in raw {
            match self.rainbow_record_to_remote(record) {
                Ok(r) => records.push(r),
                Err(e) => log::warn!("[rainbow] Skipping record: {e}"),
            }
        }
        Ok(records)
    }

    async fn create_record(&self, req: &CreateRecordRequest) -> Result<RemoteRecord> {
        let payload = RecordPayload {
            domain_id: &req.zone_ref,
            name: &req.name,
            record_type: req.record_type.as_str(),
            value: &req.content,
            record_id: None,
        };
        let context = ErrorContext {
            record_name: Some(req.name.clone()),
            zone: Some(req.zone_ref.clone()),
            ..ErrorContext::default()
        };

        let created: RainbowRecord = self.post("/api/record/add", &payload, context).await?;
        self.rainbow_record_to_remote(created)
    }

    async fn update_record(
        &self,
        remote_id: &str,
        req: &UpdateRecordRequest,
    ) -> Result<RemoteRecord> {
        let payload = RecordPayload {
            domain_id: &req.zone_ref,
            name: &req.name,
            record_type: req.record_type.as_str(),
            value: &req.content,
            record_id: Some(remote_id),
        };
        let context = ErrorContext {
            record_name: Some(req.name.clone()),
            record_id: Some(remote_id.to_string()),
            zone: Some(req.zone_ref.clone()),
        };

        let updated: RainbowRecord = self.post("/api/record/update", &payload, context).await?;
        self.rainbow_record_to_remote(updated)
    }

    async fn delete_record(&self, zone_ref: &str, remote_id: &str) -> Result<()> {
        #[derive(Serialize)]
        struct DeletePayload<'a> {
            domain_id: &'a str,
            record_id: &'a str,
        }

        let context = ErrorContext {
            record_id: Some(remote_id.to_string()),
            zone: Some(zone_ref.to_string()),
            ..ErrorContext::default()
        };

        self.post_unit(
            "/api/record/delete",
            &DeletePayload {
                domain_id: zone_ref,
                record_id: remote_id,
            },
            context,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RecordType;

    #[test]
    fn zone_status_mapping() {
        let active = RainbowZone {
            id: "t1".to_string(),
            name: "example.com".to_string(),
            status: 1,
        };
        let paused = RainbowZone {
            id: "t2".to_string(),
            name: "example.org".to_string(),
            status: 0,
        };
        assert_eq!(
            RainbowProvider::zone_to_summary(active).status,
            ZoneStatus::Active
        );
        assert_eq!(
            RainbowProvider::zone_to_summary(paused).status,
            ZoneStatus::Paused
        );
    }

    #[test]
    fn record_conversion_no_proxy() {
        let p = RainbowProvider::new(1, "k".into(), "https://x".into());
        let record = p
            .rainbow_record_to_remote(RainbowRecord {
                id: "9".to_string(),
                name: "www.example.com".to_string(),
                record_type: "cname".to_string(),
                value: "origin.example.net".to_string(),
            })
            .unwrap();

        assert_eq!(record.record_type, RecordType::Cname);
        assert_eq!(record.proxied, None);
    }
}
