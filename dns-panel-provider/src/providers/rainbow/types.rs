//! RainbowDNS API 类型定义

use serde::Deserialize;

/// RainbowDNS 通用响应信封，`code == 0` 表示成功
#[derive(Debug, Deserialize)]
pub struct RainbowResponse<T> {
    pub code: i64,
    #[serde(default)]
    pub msg: String,
    pub data: Option<T>,
}

/// 面板侧的区域条目
#[derive(Debug, Deserialize)]
pub struct RainbowZone {
    /// thirdid，后续所有记录操作都用它做区域引用
    pub id: String,
    pub name: String,
    /// 面板状态: 1 = 正常, 0 = 暂停
    #[serde(default = "default_zone_status")]
    pub status: u8,
}

fn default_zone_status() -> u8 {
    1
}

/// 面板侧的记录条目
#[derive(Debug, Deserialize)]
pub struct RainbowRecord {
    pub id: String,
    /// 完整记录名
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub value: String,
}

/// 分页列表响应的 data 字段
#[derive(Debug, Deserialize)]
pub struct RainbowPage<T> {
    #[serde(default = "Vec::new")]
    pub rows: Vec<T>,
    #[serde(default)]
    pub total: u32,
}
