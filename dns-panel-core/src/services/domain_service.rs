//! 域名管理服务：导入与级联删除

use std::sync::Arc;

use chrono::Utc;
use futures::stream::{self, StreamExt};
use uuid::Uuid;

use crate::error::{CoreError, CoreResult};
use crate::services::{ServiceContext, MAX_CONCURRENT_PROVIDER_CALLS};
use crate::types::{Actor, Domain, DomainDeleteReport, ZoneImportReport, ZoneSummary};

/// 单条出站删除的分类结果
enum DeleteOutcome {
    Deleted,
    Skipped,
    Failed(String),
}

/// 单个区域的导入结果
enum ImportOutcome {
    Imported,
    Skipped,
    Failed(String),
}

/// 域名管理服务
pub struct DomainService {
    ctx: Arc<ServiceContext>,
}

impl DomainService {
    /// 创建域名服务实例
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// 列出镜像中的全部域名
    pub async fn list_domains(&self) -> CoreResult<Vec<Domain>> {
        self.ctx.domains.find_all().await
    }

    /// 级联删除域名
    ///
    /// 对上游的每条删除单独分类，远程失败只计入报告、绝不中止；
    /// 远程阶段结束后无条件在一个事务内清理本地记录行与域名行。
    /// 管理端必须始终能在面板里下线一个区域，哪怕上游完全不可达。
    pub async fn delete_domain(
        &self,
        domain_id: &str,
        actor: &Actor,
    ) -> CoreResult<DomainDeleteReport> {
        let domain = self.ctx.load_domain(domain_id).await?;
        let records = self.ctx.records.find_by_domain(domain_id).await?;

        let mut report = DomainDeleteReport {
            total: records.len(),
            ..DomainDeleteReport::default()
        };

        match self.ctx.adapter_for_domain(&domain) {
            Ok(adapter) => {
                let zone_ref = domain.zone_ref.clone();
                let outcomes = stream::iter(records)
                    .map(|record| {
                        let adapter = adapter.clone();
                        let zone_ref = zone_ref.clone();
                        let full_name = domain.full_name(&record.subdomain);
                        async move {
                            let Some(remote_id) = record.remote_id else {
                                return DeleteOutcome::Skipped;
                            };
                            match adapter.delete_record(&zone_ref, &remote_id).await {
                                Ok(()) => DeleteOutcome::Deleted,
                                // 远程已不存在：幂等成功
                                Err(e) if e.is_not_found() => DeleteOutcome::Deleted,
                                Err(e) => DeleteOutcome::Failed(format!(
                                    "{full_name} ({}): {e}",
                                    record.record_type.as_str()
                                )),
                            }
                        }
                    })
                    .buffer_unordered(MAX_CONCURRENT_PROVIDER_CALLS)
                    .collect::<Vec<_>>()
                    .await;

                for outcome in outcomes {
                    match outcome {
                        DeleteOutcome::Deleted => report.deleted += 1,
                        DeleteOutcome::Skipped => report.skipped += 1,
                        DeleteOutcome::Failed(msg) => {
                            report.failed += 1;
                            report.errors.push(msg);
                        }
                    }
                }
            }
            // 适配器整体不可用（凭证缺失等）：全部记远程失败，本地清理照常进行
            Err(e) => {
                for record in &records {
                    report.failed += 1;
                    report.errors.push(format!(
                        "{}: provider adapter unavailable: {e}",
                        domain.full_name(&record.subdomain)
                    ));
                }
            }
        }

        self.ctx.domains.delete_with_records(&domain.id).await?;

        self.ctx
            .log_action(
                actor,
                "domain.delete",
                &format!(
                    "{} total={} deleted={} skipped={} failed={}",
                    domain.domain_name, report.total, report.deleted, report.skipped, report.failed
                ),
            )
            .await;

        Ok(report)
    }

    /// 从渠道导入单个区域
    pub async fn import_zone(
        &self,
        channel_id: &str,
        zone_ref: &str,
        actor: &Actor,
    ) -> CoreResult<Domain> {
        let channel = self.ctx.load_channel(channel_id).await?;
        Self::ensure_active(&channel)?;
        let adapter = self.ctx.adapter_for_channel(&channel)?;

        let zones = adapter.list_zones().await?;
        let zone = zones
            .into_iter()
            .find(|z| z.id == zone_ref || z.name.eq_ignore_ascii_case(zone_ref))
            .ok_or_else(|| {
                CoreError::ValidationError(format!(
                    "zone {zone_ref} was not found at provider {}",
                    channel.provider_type
                ))
            })?;

        if self.ctx.domains.find_by_name(&zone.name).await?.is_some() {
            return Err(CoreError::ValidationError(format!(
                "domain {} is already imported",
                zone.name
            )));
        }

        let domain = self.build_domain(&channel.provider_type, &channel.credentials, &zone).await;
        self.ctx.domains.save(&domain).await?;

        self.ctx
            .log_action(actor, "domain.import", &domain.domain_name.clone())
            .await;

        Ok(domain)
    }

    /// 从渠道批量导入全部区域
    ///
    /// 已存在的域名跳过，单个区域失败不影响其余区域，结果聚合上报。
    pub async fn import_zones(
        &self,
        channel_id: &str,
        actor: &Actor,
    ) -> CoreResult<ZoneImportReport> {
        let channel = self.ctx.load_channel(channel_id).await?;
        Self::ensure_active(&channel)?;
        let adapter = self.ctx.adapter_for_channel(&channel)?;

        let zones = adapter.list_zones().await?;
        let mut report = ZoneImportReport {
            total: zones.len(),
            ..ZoneImportReport::default()
        };

        let outcomes = stream::iter(zones)
            .map(|zone| {
                let provider_type = channel.provider_type.clone();
                let credentials = channel.credentials.clone();
                async move {
                    match self.ctx.domains.find_by_name(&zone.name).await {
                        Ok(Some(_)) => ImportOutcome::Skipped,
                        Ok(None) => {
                            let domain =
                                self.build_domain(&provider_type, &credentials, &zone).await;
                            match self.ctx.domains.save(&domain).await {
                                Ok(()) => ImportOutcome::Imported,
                                Err(e) => ImportOutcome::Failed(format!("{}: {e}", zone.name)),
                            }
                        }
                        Err(e) => ImportOutcome::Failed(format!("{}: {e}", zone.name)),
                    }
                }
            })
            .buffer_unordered(MAX_CONCURRENT_PROVIDER_CALLS)
            .collect::<Vec<_>>()
            .await;

        for outcome in outcomes {
            match outcome {
                ImportOutcome::Imported => report.imported += 1,
                ImportOutcome::Skipped => report.skipped += 1,
                ImportOutcome::Failed(msg) => {
                    report.failed += 1;
                    report.errors.push(msg);
                }
            }
        }

        self.ctx
            .log_action(
                actor,
                "domain.import_batch",
                &format!(
                    "channel={} total={} imported={} skipped={} failed={}",
                    channel_id, report.total, report.imported, report.skipped, report.failed
                ),
            )
            .await;

        Ok(report)
    }

    /// 停用的渠道不能发起导入；已导入域名不受影响（凭证是快照）
    fn ensure_active(channel: &crate::types::Channel) -> CoreResult<()> {
        if channel.active {
            Ok(())
        } else {
            Err(CoreError::ValidationError(format!(
                "channel {} is disabled",
                channel.name
            )))
        }
    }

    /// 由区域摘要构造镜像域名行，凭证取当前渠道的快照
    async fn build_domain(
        &self,
        provider_type: &str,
        credentials: &std::collections::HashMap<String, String>,
        zone: &ZoneSummary,
    ) -> Domain {
        Domain {
            id: Uuid::new_v4().to_string(),
            domain_name: zone.name.clone(),
            provider_type: provider_type.to_string(),
            zone_ref: zone.id.clone(),
            credentials: credentials.clone(),
            proxied_default: false,
            expiration_time: self.ctx.expiration.lookup(&zone.name).await,
            created_at: Utc::now(),
        }
    }
}
