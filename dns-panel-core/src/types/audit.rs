//! 操作审计相关类型

use serde::{Deserialize, Serialize};

/// 操作发起者类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActorKind {
    /// 管理后台操作
    Admin,
    /// 普通用户操作
    User,
    /// 系统内部任务（定时同步等）
    System,
}

impl std::fmt::Display for ActorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Admin => write!(f, "admin"),
            Self::User => write!(f, "user"),
            Self::System => write!(f, "system"),
        }
    }
}

/// 操作发起者
///
/// 核心层不持有任何会话状态，所有操作显式携带发起者身份。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Actor {
    /// 发起者类别
    pub kind: ActorKind,
    /// 发起者 ID（系统任务可为空）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl Actor {
    /// 管理员身份
    #[must_use]
    pub fn admin(id: impl Into<String>) -> Self {
        Self {
            kind: ActorKind::Admin,
            id: Some(id.into()),
        }
    }

    /// 普通用户身份
    #[must_use]
    pub fn user(id: impl Into<String>) -> Self {
        Self {
            kind: ActorKind::User,
            id: Some(id.into()),
        }
    }

    /// 系统身份
    #[must_use]
    pub fn system() -> Self {
        Self {
            kind: ActorKind::System,
            id: None,
        }
    }
}
