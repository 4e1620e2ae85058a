//! 解析渠道管理服务

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use dns_panel_provider::{ProviderCredentials, ProviderType};

use crate::error::{CoreError, CoreResult};
use crate::services::ServiceContext;
use crate::types::{Actor, Channel, CreateChannelRequest, CredentialCheck, UpdateChannelRequest};

/// 渠道管理服务
pub struct ChannelService {
    ctx: Arc<ServiceContext>,
}

impl ChannelService {
    /// 创建渠道服务实例
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// 列出全部渠道
    pub async fn list_channels(&self) -> CoreResult<Vec<Channel>> {
        self.ctx.channels.find_all().await
    }

    /// 根据 ID 获取渠道
    pub async fn get_channel(&self, id: &str) -> CoreResult<Channel> {
        self.ctx.load_channel(id).await
    }

    /// 创建渠道
    ///
    /// 凭证在入库前做结构化校验，字段缺失或为空直接报错。
    pub async fn create_channel(
        &self,
        request: CreateChannelRequest,
        actor: &Actor,
    ) -> CoreResult<Channel> {
        Self::validate_credentials(&request.provider_type, &request.credentials)?;

        let channel = Channel {
            id: Uuid::new_v4().to_string(),
            name: request.name,
            provider_type: request.provider_type,
            credentials: request.credentials,
            active: true,
            created_at: Utc::now(),
        };
        self.ctx.channels.save(&channel).await?;

        self.ctx
            .log_action(
                actor,
                "channel.create",
                &format!("{} ({})", channel.name, channel.provider_type),
            )
            .await;

        Ok(channel)
    }

    /// 更新渠道
    ///
    /// 已导入域名持有的是凭证快照，改密不回写既有域名。
    pub async fn update_channel(
        &self,
        request: UpdateChannelRequest,
        actor: &Actor,
    ) -> CoreResult<Channel> {
        let mut channel = self.ctx.load_channel(&request.id).await?;

        if let Some(name) = request.name {
            channel.name = name;
        }
        if let Some(credentials) = request.credentials {
            Self::validate_credentials(&channel.provider_type, &credentials)?;
            channel.credentials = credentials;
        }
        if let Some(active) = request.active {
            channel.active = active;
        }
        self.ctx.channels.save(&channel).await?;

        self.ctx
            .log_action(actor, "channel.update", &channel.name.clone())
            .await;

        Ok(channel)
    }

    /// 删除渠道
    ///
    /// 不影响引用过该渠道的域名，它们持有的是凭证快照。
    pub async fn delete_channel(&self, id: &str, actor: &Actor) -> CoreResult<()> {
        let channel = self.ctx.load_channel(id).await?;
        self.ctx.channels.delete(id).await?;

        self.ctx
            .log_action(actor, "channel.delete", &channel.name)
            .await;

        Ok(())
    }

    /// 验证渠道凭证（best-effort 探测）
    pub async fn verify_channel(&self, id: &str) -> CoreResult<CredentialCheck> {
        let channel = self.ctx.load_channel(id).await?;
        let adapter = self.ctx.adapter_for_channel(&channel)?;
        Ok(adapter.verify_credentials().await?)
    }

    fn validate_credentials(
        provider_type: &str,
        credentials: &std::collections::HashMap<String, String>,
    ) -> CoreResult<()> {
        let parsed = ProviderType::parse(provider_type)
            .ok_or_else(|| CoreError::UnknownProvider(provider_type.to_string()))?;
        ProviderCredentials::from_map(parsed, credentials)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_context;
    use std::collections::HashMap;

    fn dnspod_credentials() -> HashMap<String, String> {
        let mut map = HashMap::new();
        map.insert("secretId".to_string(), "AKIDtest".to_string());
        map.insert("secretKey".to_string(), "secret".to_string());
        map
    }

    #[tokio::test]
    async fn test_create_channel_validates_credentials() {
        let (ctx, _provider) = test_context();
        let service = ChannelService::new(ctx);

        let err = service
            .create_channel(
                CreateChannelRequest {
                    name: "empty".to_string(),
                    provider_type: "dnspod".to_string(),
                    credentials: HashMap::new(),
                },
                &Actor::admin("admin-1"),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::CredentialError(_)));
    }

    #[tokio::test]
    async fn test_create_channel_rejects_unknown_provider() {
        let (ctx, _provider) = test_context();
        let service = ChannelService::new(ctx);

        let err = service
            .create_channel(
                CreateChannelRequest {
                    name: "bad".to_string(),
                    provider_type: "route53".to_string(),
                    credentials: HashMap::new(),
                },
                &Actor::admin("admin-1"),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::UnknownProvider(_)));
    }

    #[tokio::test]
    async fn test_create_and_update_channel_roundtrip() {
        let (ctx, _provider) = test_context();
        let service = ChannelService::new(ctx.clone());

        let channel = service
            .create_channel(
                CreateChannelRequest {
                    name: "main".to_string(),
                    provider_type: "dnspod".to_string(),
                    credentials: dnspod_credentials(),
                },
                &Actor::admin("admin-1"),
            )
            .await
            .unwrap();

        let updated = service
            .update_channel(
                UpdateChannelRequest {
                    id: channel.id.clone(),
                    name: Some("renamed".to_string()),
                    credentials: None,
                    active: None,
                },
                &Actor::admin("admin-1"),
            )
            .await
            .unwrap();

        assert_eq!(updated.name, "renamed");
        assert_eq!(updated.provider_type, "dnspod");
        let listed = service.list_channels().await.unwrap();
        assert_eq!(listed.len(), 1);
    }

    #[tokio::test]
    async fn test_delete_missing_channel_is_not_found() {
        let (ctx, _provider) = test_context();
        let service = ChannelService::new(ctx);
        let err = service
            .delete_channel("nope", &Actor::admin("admin-1"))
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::ChannelNotFound(_)));
    }
}
