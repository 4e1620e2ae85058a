//! DNS 记录调和服务
//!
//! 创建/更新/删除单条记录，保证本地镜像与服务商之间的一致性语义：
//! 远程失败不落本地行，远程成功后本地写入失败按镜像漂移高调上报。

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::conflict;
use crate::error::{CoreError, CoreResult};
use crate::services::ServiceContext;
use crate::types::{
    CreateRecordCommand, CreateRecordRequest, DnsRecordEntry, UpdateOutcome, UpdateRecordCommand,
    UpdateRecordRequest,
};

/// DNS 记录管理服务
pub struct RecordService {
    ctx: Arc<ServiceContext>,
}

impl RecordService {
    /// 创建记录服务实例
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// 列出某个域名在本地镜像中的全部记录
    pub async fn list_records(&self, domain_id: &str) -> CoreResult<Vec<DnsRecordEntry>> {
        // 确认域名存在，避免把空列表和不存在混为一谈
        self.ctx.load_domain(domain_id).await?;
        self.ctx.records.find_by_domain(domain_id).await
    }

    /// 创建 DNS 记录
    ///
    /// 流程：拼完整主机名 → 远程全量冲突检查 → 代理开关归一化 →
    /// 远程创建 → 本地落行。远程创建失败时不写任何本地行。
    pub async fn create_record(&self, cmd: CreateRecordCommand) -> CoreResult<DnsRecordEntry> {
        let domain = self.ctx.load_domain(&cmd.domain_id).await?;
        let adapter = self.ctx.adapter_for_domain(&domain)?;
        let full_name = domain.full_name(&cmd.subdomain);

        let existing = adapter.list_records(&domain.zone_ref).await?;
        conflict::check_create(&existing, &full_name, cmd.record_type, &cmd.content)?;

        // 调用方未指定时跟随域名的默认代理开关；
        // 非可代理类型强制关闭代理，无论调用方怎么传
        let proxied = cmd.proxied.unwrap_or(domain.proxied_default) && cmd.record_type.is_proxiable();

        let request = CreateRecordRequest {
            zone_ref: domain.zone_ref.clone(),
            name: full_name.clone(),
            record_type: cmd.record_type,
            content: cmd.content.clone(),
            proxied: Some(proxied),
        };
        let remote = adapter.create_record(&request).await?;

        let entry = DnsRecordEntry {
            id: Uuid::new_v4().to_string(),
            domain_id: domain.id.clone(),
            user_id: cmd.user_id.clone(),
            subdomain: cmd.subdomain.clone(),
            record_type: cmd.record_type,
            content: cmd.content.clone(),
            proxied,
            remote_id: Some(remote.id.clone()),
            remark: cmd.remark.clone(),
            created_at: Utc::now(),
        };

        if let Err(e) = self.ctx.records.save(&entry).await {
            let drift = CoreError::MirrorDrift {
                detail: format!(
                    "record {full_name} was created remotely (remote id {}) but the mirror insert failed: {e}",
                    remote.id
                ),
            };
            log::error!("{drift}");
            return Err(drift);
        }

        self.ctx
            .log_action(
                &cmd.actor,
                "dns_record.create",
                &format!("{full_name} {} {}", cmd.record_type.as_str(), cmd.content),
            )
            .await;

        Ok(entry)
    }

    /// 更新 DNS 记录
    ///
    /// 若远程记录被服务商钉选为回退源站，代理开关会被强制保持开启，
    /// 通过 [`UpdateOutcome::warning`] 提示调用方而非报错。
    pub async fn update_record(&self, cmd: UpdateRecordCommand) -> CoreResult<UpdateOutcome> {
        let mut record = self
            .ctx
            .records
            .find_by_id(&cmd.record_id)
            .await?
            .ok_or_else(|| CoreError::RecordNotFound(cmd.record_id.clone()))?;
        let domain = self.ctx.load_domain(&record.domain_id).await?;
        let adapter = self.ctx.adapter_for_domain(&domain)?;
        let full_name = domain.full_name(&cmd.subdomain);

        let remote_id = record.remote_id.clone().ok_or_else(|| {
            CoreError::ValidationError(format!(
                "record {} was never synced to the provider; delete and recreate it",
                record.id
            ))
        })?;

        let mut proxied = cmd.proxied && cmd.record_type.is_proxiable();
        let mut warning = None;

        let existing = adapter.list_records(&domain.zone_ref).await?;
        if let Some(remote) = existing.iter().find(|r| r.id == remote_id) {
            if remote.fallback_origin && !proxied {
                proxied = true;
                warning = Some(format!(
                    "{full_name} is pinned as the fallback origin; the proxy stays enabled"
                ));
            }
        }

        let request = UpdateRecordRequest {
            zone_ref: domain.zone_ref.clone(),
            name: full_name.clone(),
            record_type: cmd.record_type,
            content: cmd.content.clone(),
            proxied: Some(proxied),
        };
        let remote = adapter.update_record(&remote_id, &request).await?;

        record.subdomain = cmd.subdomain.clone();
        record.record_type = cmd.record_type;
        record.content = cmd.content.clone();
        record.proxied = proxied;
        record.remote_id = Some(remote.id);
        record.remark = cmd.remark.clone();

        if let Err(e) = self.ctx.records.save(&record).await {
            let drift = CoreError::MirrorDrift {
                detail: format!(
                    "record {full_name} was updated remotely but the mirror write failed: {e}"
                ),
            };
            log::error!("{drift}");
            return Err(drift);
        }

        self.ctx
            .log_action(
                &cmd.actor,
                "dns_record.update",
                &format!("{full_name} {} {}", cmd.record_type.as_str(), cmd.content),
            )
            .await;

        Ok(UpdateOutcome { record, warning })
    }

    /// 删除单条 DNS 记录
    ///
    /// 远程已不存在视为删除成功（幂等）；其余远程错误中止操作并保留
    /// 本地行。没有远程 ID 的行直接清理本地。
    pub async fn delete_record(
        &self,
        record_id: &str,
        actor: &crate::types::Actor,
    ) -> CoreResult<()> {
        let record = self
            .ctx
            .records
            .find_by_id(record_id)
            .await?
            .ok_or_else(|| CoreError::RecordNotFound(record_id.to_string()))?;
        let domain = self.ctx.load_domain(&record.domain_id).await?;

        if let Some(remote_id) = &record.remote_id {
            let adapter = self.ctx.adapter_for_domain(&domain)?;
            match adapter.delete_record(&domain.zone_ref, remote_id).await {
                Ok(()) => {}
                Err(e) if e.is_not_found() => {
                    log::debug!("record {remote_id} already gone upstream: {e}");
                }
                Err(e) => return Err(e.into()),
            }
        }

        self.ctx.records.delete(&record.id).await?;

        self.ctx
            .log_action(
                actor,
                "dns_record.delete",
                &format!(
                    "{} {}",
                    domain.full_name(&record.subdomain),
                    record.record_type.as_str()
                ),
            )
            .await;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{test_context, test_domain, test_record, MockDnsProvider};
    use crate::types::{Actor, RecordType, RemoteRecord};

    fn create_cmd(subdomain: &str, record_type: RecordType, content: &str) -> CreateRecordCommand {
        CreateRecordCommand {
            domain_id: "d1".to_string(),
            subdomain: subdomain.to_string(),
            record_type,
            content: content.to_string(),
            proxied: Some(false),
            remark: None,
            user_id: None,
            actor: Actor::admin("admin-1"),
        }
    }

    #[tokio::test]
    async fn test_create_record_persists_mirror_row() {
        let (ctx, provider) = test_context();
        ctx.domains.save(&test_domain("d1", "example.com")).await.unwrap();

        let service = RecordService::new(ctx.clone());
        let entry = service
            .create_record(create_cmd("api", RecordType::A, "2.2.2.2"))
            .await
            .unwrap();

        assert_eq!(entry.subdomain, "api");
        assert!(entry.remote_id.is_some());
        assert_eq!(provider.created_names().await, vec!["api.example.com"]);
        let rows = ctx.records.find_by_domain("d1").await.unwrap();
        assert_eq!(rows.len(), 1);
    }

    #[tokio::test]
    async fn test_create_conflicting_cname_fails_before_remote_call() {
        let (ctx, provider) = test_context();
        ctx.domains.save(&test_domain("d1", "example.com")).await.unwrap();
        provider
            .seed_remote(RemoteRecord {
                id: "r1".to_string(),
                name: "www.example.com".to_string(),
                record_type: RecordType::A,
                content: "1.1.1.1".to_string(),
                proxied: Some(false),
                fallback_origin: false,
            })
            .await;

        let service = RecordService::new(ctx);
        let err = service
            .create_record(create_cmd("www", RecordType::Cname, "example.net"))
            .await
            .unwrap_err();

        let msg = err.to_string();
        assert!(matches!(err, CoreError::Conflict { .. }));
        assert!(msg.contains("www.example.com"));
        assert!(msg.contains("1.1.1.1"));
        assert!(provider.created_names().await.is_empty());
    }

    #[tokio::test]
    async fn test_create_exact_duplicate_is_duplicate_error() {
        let (ctx, provider) = test_context();
        ctx.domains.save(&test_domain("d1", "example.com")).await.unwrap();
        provider
            .seed_remote(RemoteRecord {
                id: "r1".to_string(),
                name: "www.example.com".to_string(),
                record_type: RecordType::A,
                content: "1.1.1.1".to_string(),
                proxied: Some(false),
                fallback_origin: false,
            })
            .await;

        let service = RecordService::new(ctx);
        let err = service
            .create_record(create_cmd("www", RecordType::A, "1.1.1.1"))
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::Duplicate { .. }));
    }

    #[tokio::test]
    async fn test_mx_proxied_request_is_normalized_to_false() {
        let (ctx, provider) = test_context();
        ctx.domains.save(&test_domain("d1", "example.com")).await.unwrap();

        let mut cmd = create_cmd("@", RecordType::Mx, "10 mail.example.com");
        cmd.proxied = Some(true);

        let service = RecordService::new(ctx.clone());
        let entry = service.create_record(cmd).await.unwrap();

        assert!(!entry.proxied);
        assert_eq!(provider.last_create_proxied().await, Some(false));
    }

    #[tokio::test]
    async fn test_proxied_a_record_passes_through() {
        let (ctx, provider) = test_context();
        ctx.domains.save(&test_domain("d1", "example.com")).await.unwrap();

        let mut cmd = create_cmd("api", RecordType::A, "2.2.2.2");
        cmd.proxied = Some(true);

        let service = RecordService::new(ctx.clone());
        let entry = service.create_record(cmd).await.unwrap();

        assert!(entry.proxied);
        assert_eq!(provider.last_create_proxied().await, Some(true));
    }

    #[tokio::test]
    async fn test_unspecified_proxy_follows_domain_default() {
        let (ctx, provider) = test_context();
        let mut domain = test_domain("d1", "example.com");
        domain.proxied_default = true;
        ctx.domains.save(&domain).await.unwrap();

        let mut cmd = create_cmd("api", RecordType::A, "2.2.2.2");
        cmd.proxied = None;

        let service = RecordService::new(ctx.clone());
        let entry = service.create_record(cmd).await.unwrap();
        assert!(entry.proxied);
        assert_eq!(provider.last_create_proxied().await, Some(true));

        // 域名默认值挡不住非可代理类型
        let mut cmd = create_cmd("@", RecordType::Txt, "v=spf1 -all");
        cmd.proxied = None;
        let entry = service.create_record(cmd).await.unwrap();
        assert!(!entry.proxied);
    }

    #[tokio::test]
    async fn test_remote_create_failure_leaves_no_local_row() {
        let (ctx, provider) = test_context();
        ctx.domains.save(&test_domain("d1", "example.com")).await.unwrap();
        provider.fail_next_create().await;

        let service = RecordService::new(ctx.clone());
        let err = service
            .create_record(create_cmd("api", RecordType::A, "2.2.2.2"))
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::Provider(_)));
        assert!(ctx.records.find_by_domain("d1").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_local_insert_failure_after_remote_success_is_mirror_drift() {
        let (ctx, provider) = crate::test_utils::test_context_with_failing_record_save("disk full");
        ctx.domains.save(&test_domain("d1", "example.com")).await.unwrap();

        let service = RecordService::new(ctx);
        let err = service
            .create_record(create_cmd("api", RecordType::A, "2.2.2.2"))
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::MirrorDrift { .. }));
        // 远程侧已经写入，漂移正是由此产生
        assert_eq!(provider.created_names().await, vec!["api.example.com"]);
    }

    #[tokio::test]
    async fn test_update_fallback_origin_forces_proxy_with_warning() {
        let (ctx, provider) = test_context();
        ctx.domains.save(&test_domain("d1", "example.com")).await.unwrap();
        provider
            .seed_remote(RemoteRecord {
                id: "r1".to_string(),
                name: "www.example.com".to_string(),
                record_type: RecordType::A,
                content: "1.1.1.1".to_string(),
                proxied: Some(true),
                fallback_origin: true,
            })
            .await;
        let mut row = test_record("rec1", "d1", "www", RecordType::A, "1.1.1.1");
        row.remote_id = Some("r1".to_string());
        row.proxied = true;
        ctx.records.save(&row).await.unwrap();

        let service = RecordService::new(ctx);
        let outcome = service
            .update_record(UpdateRecordCommand {
                record_id: "rec1".to_string(),
                subdomain: "www".to_string(),
                record_type: RecordType::A,
                content: "3.3.3.3".to_string(),
                proxied: false,
                remark: None,
                actor: Actor::admin("admin-1"),
            })
            .await
            .unwrap();

        assert!(outcome.record.proxied);
        assert!(outcome.warning.unwrap().contains("fallback origin"));
    }

    #[tokio::test]
    async fn test_delete_record_is_idempotent_on_remote_not_found() {
        let (ctx, provider) = test_context();
        ctx.domains.save(&test_domain("d1", "example.com")).await.unwrap();
        let mut row = test_record("rec1", "d1", "www", RecordType::A, "1.1.1.1");
        row.remote_id = Some("gone".to_string());
        ctx.records.save(&row).await.unwrap();
        provider.mark_not_found("gone").await;

        let service = RecordService::new(ctx.clone());
        service
            .delete_record("rec1", &Actor::admin("admin-1"))
            .await
            .unwrap();
        assert!(ctx.records.find_by_domain("d1").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_record_without_remote_id_skips_provider() {
        let (ctx, provider) = test_context();
        ctx.domains.save(&test_domain("d1", "example.com")).await.unwrap();
        ctx.records
            .save(&test_record("rec1", "d1", "www", RecordType::A, "1.1.1.1"))
            .await
            .unwrap();

        let service = RecordService::new(ctx.clone());
        service
            .delete_record("rec1", &Actor::admin("admin-1"))
            .await
            .unwrap();

        assert_eq!(provider.delete_calls().await, 0);
        assert!(ctx.records.find_by_domain("d1").await.unwrap().is_empty());
    }
}
