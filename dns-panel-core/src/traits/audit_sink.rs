//! 操作审计抽象 Trait

use async_trait::async_trait;

use crate::types::Actor;

/// 审计落地 Trait
///
/// 所有核心操作完成后以 fire-and-forget 方式上报一条审计事件。
/// 落地失败由实现方自行记录，绝不影响业务操作的结果。
#[async_trait]
pub trait AuditSink: Send + Sync {
    /// 记录一条操作事件
    ///
    /// # Arguments
    /// * `actor` - 操作发起者
    /// * `action` - 动作名（如 `dns_record.create`）
    /// * `detail` - 人类可读的细节描述
    async fn log_action(&self, actor: &Actor, action: &str, detail: &str);
}

/// 默认实现：写入结构化日志
pub struct LogAuditSink;

#[async_trait]
impl AuditSink for LogAuditSink {
    async fn log_action(&self, actor: &Actor, action: &str, detail: &str) {
        let actor_id = actor.id.as_deref().unwrap_or("-");
        log::info!("audit: [{}:{actor_id}] {action} {detail}", actor.kind);
    }
}
