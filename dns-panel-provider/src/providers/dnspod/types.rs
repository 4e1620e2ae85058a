//! 腾讯云 `DNSPod` API 类型定义

use serde::Deserialize;

// ============ 腾讯云响应信封 ============

/// 腾讯云 API 响应外层
#[derive(Debug, Deserialize)]
pub struct TencentResponse<T> {
    #[serde(rename = "Response")]
    pub response: TencentResponseBody<T>,
}

/// `Response` 内层：要么 Error，要么业务字段
#[derive(Debug, Deserialize)]
pub struct TencentResponseBody<T> {
    #[serde(rename = "Error")]
    pub error: Option<TencentError>,
    #[serde(flatten)]
    pub data: Option<T>,
}

/// 腾讯云错误结构
#[derive(Debug, Deserialize)]
pub struct TencentError {
    #[serde(rename = "Code")]
    pub code: String,
    #[serde(rename = "Message")]
    pub message: String,
}

// ============ 域名相关 ============

/// `DescribeDomainList` 业务字段
#[derive(Debug, Deserialize)]
pub struct DomainListResponse {
    #[serde(rename = "DomainList")]
    pub domain_list: Option<Vec<DnspodDomain>>,
    #[serde(rename = "DomainCountInfo")]
    pub domain_count_info: Option<DomainCountInfo>,
}

#[derive(Debug, Deserialize)]
pub struct DomainCountInfo {
    #[serde(rename = "AllTotal")]
    pub all_total: Option<u32>,
}

/// DNSPod 域名条目
#[derive(Debug, Deserialize)]
pub struct DnspodDomain {
    #[serde(rename = "DomainId")]
    pub domain_id: u64,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Status")]
    pub status: String,
    #[serde(rename = "DNSStatus", default)]
    pub dns_status: String,
}

// ============ 记录相关 ============

/// `DescribeRecordList` 业务字段
#[derive(Debug, Deserialize)]
pub struct RecordListResponse {
    #[serde(rename = "RecordList")]
    pub record_list: Option<Vec<DnspodRecord>>,
    #[serde(rename = "RecordCountInfo")]
    pub record_count_info: Option<RecordCountInfo>,
}

#[derive(Debug, Deserialize)]
pub struct RecordCountInfo {
    #[serde(rename = "TotalCount")]
    pub total_count: Option<u32>,
}

/// DNSPod 记录条目
#[derive(Debug, Deserialize)]
pub struct DnspodRecord {
    #[serde(rename = "RecordId")]
    pub record_id: u64,
    /// 相对主机名（`@` 表示根域名）
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Type")]
    pub record_type: String,
    #[serde(rename = "Value")]
    pub value: String,
    /// MX 优先级，只有 MX 记录有
    #[serde(rename = "MX")]
    pub mx: Option<u16>,
}

/// `CreateRecord` 业务字段
#[derive(Debug, Deserialize)]
pub struct CreateRecordResponse {
    #[serde(rename = "RecordId")]
    pub record_id: u64,
}
