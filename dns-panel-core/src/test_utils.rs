//! 测试用的 mock 实现

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use dns_panel_provider::{
    CreateRecordRequest, CredentialCheck, DnsProvider, ProviderError, RemoteRecord,
    UpdateRecordRequest, ZoneStatus, ZoneSummary,
};

use crate::error::{CoreError, CoreResult};
use crate::services::ServiceContext;
use crate::traits::{
    AuditSink, ChannelRepository, DomainRepository, ExpirationLookup, ProviderRegistry,
    RecordRepository,
};
use crate::types::{Actor, Channel, DnsRecordEntry, Domain, RecordType};

// ==================== Mock Provider ====================

/// 可编程的 mock 适配器
///
/// 远程状态、注入的失败、调用计数都可脚本化。
pub(crate) struct MockDnsProvider {
    remote: RwLock<Vec<RemoteRecord>>,
    zones: RwLock<Vec<ZoneSummary>>,
    created: RwLock<Vec<RemoteRecord>>,
    last_create_proxied: RwLock<Option<bool>>,
    fail_next_create: RwLock<bool>,
    fail_deletes: RwLock<HashSet<String>>,
    not_found: RwLock<HashSet<String>>,
    delete_calls: RwLock<usize>,
}

impl MockDnsProvider {
    pub(crate) fn new() -> Self {
        Self {
            remote: RwLock::new(Vec::new()),
            zones: RwLock::new(Vec::new()),
            created: RwLock::new(Vec::new()),
            last_create_proxied: RwLock::new(None),
            fail_next_create: RwLock::new(false),
            fail_deletes: RwLock::new(HashSet::new()),
            not_found: RwLock::new(HashSet::new()),
            delete_calls: RwLock::new(0),
        }
    }

    /// 预置一条远程记录
    pub(crate) async fn seed_remote(&self, record: RemoteRecord) {
        self.remote.write().await.push(record);
    }

    /// 预置一个区域
    pub(crate) async fn seed_zone(&self, id: &str, name: &str) {
        self.zones.write().await.push(ZoneSummary {
            id: id.to_string(),
            name: name.to_string(),
            status: ZoneStatus::Active,
        });
    }

    /// 成功创建过的记录名
    pub(crate) async fn created_names(&self) -> Vec<String> {
        self.created.read().await.iter().map(|r| r.name.clone()).collect()
    }

    /// 最近一次创建请求携带的 proxied 值
    pub(crate) async fn last_create_proxied(&self) -> Option<bool> {
        *self.last_create_proxied.read().await
    }

    /// 让下一次创建失败
    pub(crate) async fn fail_next_create(&self) {
        *self.fail_next_create.write().await = true;
    }

    /// 让指定远程 ID 的删除失败（非 not-found 错误）
    pub(crate) async fn fail_delete_of(&self, remote_id: &str) {
        self.fail_deletes.write().await.insert(remote_id.to_string());
    }

    /// 让指定远程 ID 表现为远程已不存在
    pub(crate) async fn mark_not_found(&self, remote_id: &str) {
        self.not_found.write().await.insert(remote_id.to_string());
    }

    /// 删除调用次数
    pub(crate) async fn delete_calls(&self) -> usize {
        *self.delete_calls.read().await
    }
}

#[async_trait]
impl DnsProvider for MockDnsProvider {
    fn id(&self) -> &'static str {
        "mock"
    }

    async fn verify_credentials(&self) -> Result<CredentialCheck, ProviderError> {
        Ok(CredentialCheck {
            api_token_valid: true,
            global_key_valid: false,
            error_message: None,
        })
    }

    async fn list_zones(&self) -> Result<Vec<ZoneSummary>, ProviderError> {
        Ok(self.zones.read().await.clone())
    }

    async fn list_records(&self, _zone_ref: &str) -> Result<Vec<RemoteRecord>, ProviderError> {
        let mut records = self.remote.read().await.clone();
        records.extend(self.created.read().await.iter().cloned());
        Ok(records)
    }

    async fn create_record(
        &self,
        req: &CreateRecordRequest,
    ) -> Result<RemoteRecord, ProviderError> {
        *self.last_create_proxied.write().await = req.proxied;

        let mut fail = self.fail_next_create.write().await;
        if *fail {
            *fail = false;
            return Err(ProviderError::Unknown {
                provider: "mock".to_string(),
                raw_code: None,
                raw_message: "injected create failure".to_string(),
            });
        }
        drop(fail);

        let mut created = self.created.write().await;
        let record = RemoteRecord {
            id: format!("mock-{}", created.len() + 1),
            name: req.name.clone(),
            record_type: req.record_type,
            content: req.content.clone(),
            proxied: req.proxied,
            fallback_origin: false,
        };
        created.push(record.clone());
        Ok(record)
    }

    async fn update_record(
        &self,
        remote_id: &str,
        req: &UpdateRecordRequest,
    ) -> Result<RemoteRecord, ProviderError> {
        if self.not_found.read().await.contains(remote_id) {
            return Err(ProviderError::RecordNotFound {
                provider: "mock".to_string(),
                record_id: remote_id.to_string(),
                raw_message: None,
            });
        }
        Ok(RemoteRecord {
            id: remote_id.to_string(),
            name: req.name.clone(),
            record_type: req.record_type,
            content: req.content.clone(),
            proxied: req.proxied,
            fallback_origin: false,
        })
    }

    async fn delete_record(&self, _zone_ref: &str, remote_id: &str) -> Result<(), ProviderError> {
        *self.delete_calls.write().await += 1;

        if self.not_found.read().await.contains(remote_id) {
            return Err(ProviderError::RecordNotFound {
                provider: "mock".to_string(),
                record_id: remote_id.to_string(),
                raw_message: None,
            });
        }
        if self.fail_deletes.read().await.contains(remote_id) {
            return Err(ProviderError::NetworkError {
                provider: "mock".to_string(),
                detail: "injected delete failure".to_string(),
            });
        }
        Ok(())
    }
}

// ==================== Mock Registry ====================

/// 总是返回同一个 mock 适配器的注册表
struct MockProviderRegistry {
    provider: Arc<MockDnsProvider>,
}

impl ProviderRegistry for MockProviderRegistry {
    fn adapter_for(
        &self,
        _provider_type: &str,
        _credentials: &HashMap<String, String>,
    ) -> CoreResult<Arc<dyn DnsProvider>> {
        Ok(self.provider.clone())
    }
}

/// 构造适配器一律失败的注册表（模拟凭证快照损坏）
struct BrokenProviderRegistry;

impl ProviderRegistry for BrokenProviderRegistry {
    fn adapter_for(
        &self,
        provider_type: &str,
        _credentials: &HashMap<String, String>,
    ) -> CoreResult<Arc<dyn DnsProvider>> {
        Err(CoreError::UnknownProvider(provider_type.to_string()))
    }
}

// ==================== Mock Repositories ====================

struct MockChannelRepository {
    store: RwLock<HashMap<String, Channel>>,
}

#[async_trait]
impl ChannelRepository for MockChannelRepository {
    async fn find_all(&self) -> CoreResult<Vec<Channel>> {
        Ok(self.store.read().await.values().cloned().collect())
    }

    async fn find_by_id(&self, id: &str) -> CoreResult<Option<Channel>> {
        Ok(self.store.read().await.get(id).cloned())
    }

    async fn save(&self, channel: &Channel) -> CoreResult<()> {
        self.store.write().await.insert(channel.id.clone(), channel.clone());
        Ok(())
    }

    async fn delete(&self, id: &str) -> CoreResult<()> {
        self.store.write().await.remove(id);
        Ok(())
    }
}

struct MockDomainRepository {
    store: RwLock<HashMap<String, Domain>>,
    records: Arc<RwLock<HashMap<String, DnsRecordEntry>>>,
}

#[async_trait]
impl DomainRepository for MockDomainRepository {
    async fn find_all(&self) -> CoreResult<Vec<Domain>> {
        Ok(self.store.read().await.values().cloned().collect())
    }

    async fn find_by_id(&self, id: &str) -> CoreResult<Option<Domain>> {
        Ok(self.store.read().await.get(id).cloned())
    }

    async fn find_by_name(&self, domain_name: &str) -> CoreResult<Option<Domain>> {
        Ok(self
            .store
            .read()
            .await
            .values()
            .find(|d| d.domain_name.eq_ignore_ascii_case(domain_name))
            .cloned())
    }

    async fn save(&self, domain: &Domain) -> CoreResult<()> {
        self.store.write().await.insert(domain.id.clone(), domain.clone());
        Ok(())
    }

    async fn delete_with_records(&self, id: &str) -> CoreResult<()> {
        self.records
            .write()
            .await
            .retain(|_, record| record.domain_id != id);
        self.store.write().await.remove(id);
        Ok(())
    }
}

struct MockRecordRepository {
    store: Arc<RwLock<HashMap<String, DnsRecordEntry>>>,
    save_error: RwLock<Option<String>>,
}

#[async_trait]
impl RecordRepository for MockRecordRepository {
    async fn find_by_domain(&self, domain_id: &str) -> CoreResult<Vec<DnsRecordEntry>> {
        Ok(self
            .store
            .read()
            .await
            .values()
            .filter(|r| r.domain_id == domain_id)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: &str) -> CoreResult<Option<DnsRecordEntry>> {
        Ok(self.store.read().await.get(id).cloned())
    }

    async fn save(&self, record: &DnsRecordEntry) -> CoreResult<()> {
        if let Some(msg) = self.save_error.read().await.clone() {
            return Err(CoreError::StorageError(msg));
        }
        self.store.write().await.insert(record.id.clone(), record.clone());
        Ok(())
    }

    async fn delete(&self, id: &str) -> CoreResult<()> {
        self.store.write().await.remove(id);
        Ok(())
    }
}

// ==================== Mock ambient dependencies ====================

struct NoopAuditSink;

#[async_trait]
impl AuditSink for NoopAuditSink {
    async fn log_action(&self, _actor: &Actor, _action: &str, _detail: &str) {}
}

struct NoopExpirationLookup;

#[async_trait]
impl ExpirationLookup for NoopExpirationLookup {
    async fn lookup(&self, _domain: &str) -> Option<chrono::DateTime<Utc>> {
        None
    }
}

// ==================== Context factories ====================

fn build_context(
    registry: Arc<dyn ProviderRegistry>,
    record_save_error: Option<String>,
) -> Arc<ServiceContext> {
    let records = Arc::new(RwLock::new(HashMap::new()));
    Arc::new(ServiceContext::new(
        Arc::new(MockChannelRepository {
            store: RwLock::new(HashMap::new()),
        }),
        Arc::new(MockDomainRepository {
            store: RwLock::new(HashMap::new()),
            records: records.clone(),
        }),
        Arc::new(MockRecordRepository {
            store: records,
            save_error: RwLock::new(record_save_error),
        }),
        registry,
        Arc::new(NoopAuditSink),
        Arc::new(NoopExpirationLookup),
    ))
}

/// 标准测试上下文：mock 仓库 + 固定返回同一个 mock 适配器的注册表
pub(crate) fn test_context() -> (Arc<ServiceContext>, Arc<MockDnsProvider>) {
    let provider = Arc::new(MockDnsProvider::new());
    let ctx = build_context(
        Arc::new(MockProviderRegistry {
            provider: provider.clone(),
        }),
        None,
    );
    (ctx, provider)
}

/// 注册表构造适配器一律失败的上下文
pub(crate) fn test_context_with_broken_registry() -> (Arc<ServiceContext>, Arc<MockDnsProvider>) {
    let provider = Arc::new(MockDnsProvider::new());
    let ctx = build_context(Arc::new(BrokenProviderRegistry), None);
    (ctx, provider)
}

/// 记录仓库写入一律失败的上下文（模拟镜像落盘故障）
pub(crate) fn test_context_with_failing_record_save(
    msg: &str,
) -> (Arc<ServiceContext>, Arc<MockDnsProvider>) {
    let provider = Arc::new(MockDnsProvider::new());
    let ctx = build_context(
        Arc::new(MockProviderRegistry {
            provider: provider.clone(),
        }),
        Some(msg.to_string()),
    );
    (ctx, provider)
}

// ==================== Fixtures ====================

pub(crate) fn test_domain(id: &str, domain_name: &str) -> Domain {
    let mut credentials = HashMap::new();
    credentials.insert("apiToken".to_string(), "token".to_string());
    Domain {
        id: id.to_string(),
        domain_name: domain_name.to_string(),
        provider_type: "cloudflare".to_string(),
        zone_ref: format!("zone-{id}"),
        credentials,
        proxied_default: false,
        expiration_time: None,
        created_at: Utc::now(),
    }
}

pub(crate) fn test_channel(id: &str) -> Channel {
    let mut credentials = HashMap::new();
    credentials.insert("secretId".to_string(), "AKIDtest".to_string());
    credentials.insert("secretKey".to_string(), "secret".to_string());
    Channel {
        id: id.to_string(),
        name: format!("channel-{id}"),
        provider_type: "dnspod".to_string(),
        credentials,
        active: true,
        created_at: Utc::now(),
    }
}

pub(crate) fn test_record(
    id: &str,
    domain_id: &str,
    subdomain: &str,
    record_type: RecordType,
    content: &str,
) -> DnsRecordEntry {
    DnsRecordEntry {
        id: id.to_string(),
        domain_id: domain_id.to_string(),
        user_id: None,
        subdomain: subdomain.to_string(),
        record_type,
        content: content.to_string(),
        proxied: false,
        remote_id: None,
        remark: None,
        created_at: Utc::now(),
    }
}
