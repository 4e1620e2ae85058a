//! DNSPod DnsProvider trait 实现

use async_trait::async_trait;
use serde::Serialize;

use crate::error::{ProviderError, Result};
use crate::providers::common::{full_name_to_relative, parse_record_type, relative_to_full_name};
use crate::traits::{DnsProvider, ErrorContext, ProviderErrorMapper};
use crate::types::{
    CreateRecordRequest, CredentialCheck, RecordType, RemoteRecord, UpdateRecordRequest,
    ZoneStatus, ZoneSummary,
};

use super::types::DnspodRecord;
use super::{
    CreateRecordResponse, DnspodDomain, DnspodProvider, DomainListResponse, MAX_PAGE_SIZE,
    RecordListResponse,
};

#[derive(Serialize)]
struct DescribeDomainListRequest {
    #[serde(rename = "Offset")]
    offset: u32,
    #[serde(rename = "Limit")]
    limit: u32,
    #[serde(rename = "Keyword", skip_serializing_if = "Option::is_none")]
    keyword: Option<String>,
}

impl DnspodProvider {
    /// 将 DNSPod 域名状态转换为内部状态
    fn convert_zone_status(status: &str, dns_status: &str) -> ZoneStatus {
        match (status, dns_status) {
            ("ENABLE" | "enable", "DNSERROR") => ZoneStatus::Error,
            ("ENABLE" | "enable", _) => ZoneStatus::Active,
            ("PAUSE" | "pause", _) => ZoneStatus::Paused,
            ("SPAM" | "spam", _) => ZoneStatus::Error,
            _ => ZoneStatus::Unknown,
        }
    }

    fn zone_to_summary(domain: DnspodDomain) -> ZoneSummary {
        ZoneSummary {
            id: domain.domain_id.to_string(),
            name: domain.name,
            status: Self::convert_zone_status(&domain.status, &domain.dns_status),
        }
    }

    /// 将统一的 content 拆成 DNSPod 的 (Value, MX)
    ///
    /// MX 记录的优先级折叠在 content 里（`"10 mail.example.com"`），
    /// 其余类型（含 SRV/CAA，DNSPod 本就把全部字段放 Value）原样透传。
    fn content_to_api(&self, record_type: RecordType, content: &str) -> Result<(String, Option<u16>)> {
        if record_type != RecordType::Mx {
            return Ok((content.to_string(), None));
        }

        let mut parts = content.splitn(2, ' ');
        let priority = parts
            .next()
            .and_then(|p| p.parse::<u16>().ok())
            .ok_or_else(|| ProviderError::InvalidParameter {
                provider: self.provider_name().to_string(),
                param: "content".to_string(),
                detail: format!("MX content must be 'priority exchange', got '{content}'"),
            })?;
        let exchange = parts.next().unwrap_or_default().trim();
        if exchange.is_empty() {
            return Err(ProviderError::InvalidParameter {
                provider: self.provider_name().to_string(),
                param: "content".to_string(),
                detail: format!("MX content must be 'priority exchange', got '{content}'"),
            });
        }
        Ok((exchange.to_string(), Some(priority)))
    }

    /// 把 DNSPod 记录折回统一的 content
    fn api_to_content(record_type: RecordType, value: &str, mx: Option<u16>) -> String {
        if record_type == RecordType::Mx {
            if let Some(priority) = mx {
                return format!("{priority} {value}");
            }
        }
        value.to_string()
    }

    fn dnspod_record_to_remote(
        &self,
        record: DnspodRecord,
        zone_name: &str,
    ) -> Result<RemoteRecord> {
        let record_type = parse_record_type(&record.record_type, self.provider_name())?;
        Ok(RemoteRecord {
            id: record.record_id.to_string(),
            name: relative_to_full_name(&record.name, zone_name),
            record_type,
            content: Self::api_to_content(record_type, &record.value, record.mx),
            proxied: None,
            fallback_origin: false,
        })
    }

    /// 把 zone_ref 解析为 DNSPod 域名信息
    ///
    /// 区域引用是数字 DomainId，但记录接口要求域名名称，翻一遍域名列表
    /// 找回名称。引用带 `.` 时按名称直接关键字查询。
    async fn resolve_zone(&self, zone_ref: &str) -> Result<DnspodDomain> {
        if zone_ref.contains('.') {
            let req = DescribeDomainListRequest {
                offset: 0,
                limit: MAX_PAGE_SIZE,
                keyword: Some(zone_ref.to_string()),
            };
            let response: DomainListResponse = self
                .request("DescribeDomainList", &req, ErrorContext::default())
                .await?;
            return response
                .domain_list
                .unwrap_or_default()
                .into_iter()
                .find(|d| d.name.eq_ignore_ascii_case(zone_ref))
                .ok_or_else(|| ProviderError::ZoneNotFound {
                    provider: self.provider_name().to_string(),
                    zone: zone_ref.to_string(),
                    raw_message: None,
                });
        }

        let mut offset = 0_u32;
        loop {
            let req = DescribeDomainListRequest {
                offset,
                limit: MAX_PAGE_SIZE,
                keyword: None,
            };
            let response: DomainListResponse = self
                .request("DescribeDomainList", &req, ErrorContext::default())
                .await?;

            let batch = response.domain_list.unwrap_or_default();
            if batch.is_empty() {
                break;
            }
            let batch_len = batch.len() as u32;
            if let Some(domain) = batch
                .into_iter()
                .find(|d| d.domain_id.to_string() == zone_ref)
            {
                return Ok(domain);
            }

            offset += batch_len;
            let total = response
                .domain_count_info
                .and_then(|c| c.all_total)
                .unwrap_or(0);
            if offset >= total {
                break;
            }
        }

        Err(ProviderError::ZoneNotFound {
            provider: self.provider_name().to_string(),
            zone: zone_ref.to_string(),
            raw_message: None,
        })
    }
}

#[async_trait]
impl DnsProvider for DnspodProvider {
    fn id(&self) -> &'static str {
        "dnspod"
    }

    async fn verify_credentials(&self) -> Result<CredentialCheck> {
        let req = DescribeDomainListRequest {
            offset: 0,
            limit: 1,
            keyword: None,
        };

        match self
            .request::<DomainListResponse, _>("DescribeDomainList", &req, ErrorContext::default())
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
        let mut zones: Vec<ZoneSummary> = Vec::new();
        let mut offset = 0_u32;

        loop {
            let req = DescribeDomainListRequest {
                offset,
                limit: MAX_PAGE_SIZE,
                keyword: None,
            };
            let response: DomainListResponse = self
                .request("DescribeDomainList", &req, ErrorContext::default())
                .await?;

            let batch = response.domain_list.unwrap_or_default();
            if batch.is_empty() {
                break;
            }
            offset += batch.len() as u32;
            zones.extend(batch.into_iter().map(Self::zone_to_summary));

            let total = response
                .domain_count_info
                .and_then(|c| c.all_total)
                .unwrap_or(0);
            if offset >= total {
                break;
            }
        }

        log::info!("[dnspod] Listed {} zones", zones.len());
        Ok(zones)
    }

    async fn list_records(&self, zone_ref: &str) -> Result<Vec<RemoteRecord>> {
        #[derive(Serialize)]
        struct DescribeRecordListRequest {
            #[serde(rename = "Domain")]
            domain: String,
            #[serde(rename = "Offset")]
            offset: u32,
            #[serde(rename = "Limit")]
            limit: u32,
        }

        let zone = self.resolve_zone(zone_ref).await?;
        let context = ErrorContext {
            zone: Some(zone_ref.to_string()),
            ..ErrorContext::default()
        };

        let mut records: Vec<RemoteRecord> = Vec::new();
        let mut offset = 0_u32;

        loop {
            let req = DescribeRecordListRequest {
                domain: zone.name.clone(),
                offset,
                limit: MAX_PAGE_SIZE,
            };

            let response: Result<RecordListResponse> = self
                .request("DescribeRecordList", &req, context.clone())
                .await;

            let data = match response {
                Ok(data) => data,
                // 空域名报 NoDataOfRecord 而不是空列表
                Err(ProviderError::RecordNotFound { .. }) => break,
                Err(e) => return Err(e),
            };

            let batch = data.record_list.unwrap_or_default();
            if batch.is_empty() {
                break;
            }
            offset += batch.len() as u32;

            for record in batch {
                match self.dnspod_record_to_remote(record, &zone.name) {
                    Ok(r) => records.push(r),
                    Err(e) => log::warn!("[dnspod] Skipping record: {e}"),
                }
            }

            let total = data
                .record_count_info
                .and_then(|c| c.total_count)
                .unwrap_or(0);
            if offset >= total {
                break;
            }
        }

        Ok(records)
    }

    async fn create_record(&self, req: &CreateRecordRequest) -> Result<RemoteRecord> {
        #[derive(Serialize)]
        struct CreateRecordApiRequest {
            #[serde(rename = "Domain")]
            domain: String,
            #[serde(rename = "SubDomain")]
            sub_domain: String,
            #[serde(rename = "RecordType")]
            record_type: &'static str,
            #[serde(rename = "RecordLine")]
            record_line: &'static str,
            #[serde(rename = "Value")]
            value: String,
            #[serde(rename = "MX", skip_serializing_if = "Option::is_none")]
            mx: Option<u16>,
        }

        let zone = self.resolve_zone(&req.zone_ref).await?;
        let (value, mx) = self.content_to_api(req.record_type, &req.content)?;

        let api_req = CreateRecordApiRequest {
            domain: zone.name.clone(),
            sub_domain: full_name_to_relative(&req.name, &zone.name),
            record_type: req.record_type.as_str(),
            record_line: "默认",
            value,
            mx,
        };

        let context = ErrorContext {
            record_name: Some(req.name.clone()),
            zone: Some(req.zone_ref.clone()),
            ..ErrorContext::default()
        };

        let response: CreateRecordResponse =
            self.request("CreateRecord", &api_req, context).await?;

        Ok(RemoteRecord {
            id: response.record_id.to_string(),
            name: req.name.clone(),
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
        #[derive(Serialize)]
        struct ModifyRecordApiRequest {
            #[serde(rename = "Domain")]
            domain: String,
            #[serde(rename = "RecordId")]
            record_id: u64,
            #[serde(rename = "SubDomain")]
            sub_domain: String,
            #[serde(rename = "RecordType")]
            record_type: &'static str,
            #[serde(rename = "RecordLine")]
            record_line: &'static str,
            #[serde(rename = "Value")]
            value: String,
            #[serde(rename = "MX", skip_serializing_if = "Option::is_none")]
            mx: Option<u16>,
        }

        let record_id: u64 = remote_id
            .parse()
            .map_err(|_| ProviderError::RecordNotFound {
                provider: self.provider_name().to_string(),
                record_id: remote_id.to_string(),
                raw_message: None,
            })?;

        let zone = self.resolve_zone(&req.zone_ref).await?;
        let (value, mx) = self.content_to_api(req.record_type, &req.content)?;

        let api_req = ModifyRecordApiRequest {
            domain: zone.name.clone(),
            record_id,
            sub_domain: full_name_to_relative(&req.name, &zone.name),
            record_type: req.record_type.as_str(),
            record_line: "默认",
            value,
            mx,
        };

        let context = ErrorContext {
            record_name: Some(req.name.clone()),
            record_id: Some(remote_id.to_string()),
            zone: Some(req.zone_ref.clone()),
        };

        // ModifyRecord 只回 RecordId，按请求内容构造结果
        let _: serde_json::Value = self.request("ModifyRecord", &api_req, context).await?;

        Ok(RemoteRecord {
            id: remote_id.to_string(),
            name: req.name.clone(),
            record_type: req.record_type,
            content: req.content.clone(),
            proxied: None,
            fallback_origin: false,
        })
    }

    async fn delete_record(&self, zone_ref: &str, remote_id: &str) -> Result<()> {
        #[derive(Serialize)]
        struct DeleteRecordApiRequest {
            #[serde(rename = "Domain")]
            domain: String,
            #[serde(rename = "RecordId")]
            record_id: u64,
        }

        let record_id: u64 = remote_id
            .parse()
            .map_err(|_| ProviderError::RecordNotFound {
                provider: self.provider_name().to_string(),
                record_id: remote_id.to_string(),
                raw_message: None,
            })?;

        let zone = self.resolve_zone(zone_ref).await?;

        let context = ErrorContext {
            record_id: Some(remote_id.to_string()),
            zone: Some(zone_ref.to_string()),
            ..ErrorContext::default()
        };

        let _: serde_json::Value = self
            .request(
                "DeleteRecord",
                &DeleteRecordApiRequest {
                    domain: zone.name,
                    record_id,
                },
                context,
            )
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider() -> DnspodProvider {
        DnspodProvider::new("id".to_string(), "key".to_string())
    }

    #[test]
    fn zone_status_mapping() {
        assert_eq!(
            DnspodProvider::convert_zone_status("ENABLE", ""),
            ZoneStatus::Active
        );
        assert_eq!(
            DnspodProvider::convert_zone_status("ENABLE", "DNSERROR"),
            ZoneStatus::Error
        );
        assert_eq!(
            DnspodProvider::convert_zone_status("PAUSE", ""),
            ZoneStatus::Paused
        );
        assert_eq!(
            DnspodProvider::convert_zone_status("SPAM", ""),
            ZoneStatus::Error
        );
        assert_eq!(
            DnspodProvider::convert_zone_status("???", ""),
            ZoneStatus::Unknown
        );
    }

    #[test]
    fn mx_content_split_and_fold() {
        let p = provider();
        let (value, mx) = p
            .content_to_api(RecordType::Mx, "10 mail.example.com")
            .unwrap();
        assert_eq!(value, "mail.example.com");
        assert_eq!(mx, Some(10));

        assert_eq!(
            DnspodProvider::api_to_content(RecordType::Mx, "mail.example.com", Some(10)),
            "10 mail.example.com"
        );
    }

    #[test]
    fn mx_content_invalid() {
        let p = provider();
        assert!(p.content_to_api(RecordType::Mx, "mail.example.com").is_err());
        assert!(p.content_to_api(RecordType::Mx, "10").is_err());
    }

    #[test]
    fn non_mx_content_passthrough() {
        let p = provider();
        let (value, mx) = p
            .content_to_api(RecordType::Srv, "10 5 443 target.example.com")
            .unwrap();
        assert_eq!(value, "10 5 443 target.example.com");
        assert_eq!(mx, None);
    }

    #[test]
    fn record_conversion_builds_full_name() {
        let p = provider();
        let record = p
            .dnspod_record_to_remote(
                DnspodRecord {
                    record_id: 42,
                    name: "www".to_string(),
                    record_type: "A".to_string(),
                    value: "203.0.113.7".to_string(),
                    mx: None,
                },
                "example.com",
            )
            .unwrap();
        assert_eq!(record.name, "www.example.com");
        assert_eq!(record.id, "42");

        let apex = p
            .dnspod_record_to_remote(
                DnspodRecord {
                    record_id: 43,
                    name: "@".to_string(),
                    record_type: "A".to_string(),
                    value: "203.0.113.7".to_string(),
                    mx: None,
                },
                "example.com",
            )
            .unwrap();
        assert_eq!(apex.name, "example.com");
    }
}
