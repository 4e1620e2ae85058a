//! 聚合报告类型

use serde::Serialize;

/// 级联删除域名的聚合报告
///
/// `failed > 0` 由调用方渲染为警告，不作为整体失败。
/// 计数与错误列表不保证顺序。
#[derive(Debug, Clone, Default, Serialize)]
pub struct DomainDeleteReport {
    /// 本地镜像中该域名的记录总数
    pub total: usize,
    /// 远程删除成功（含远程已不存在）的记录数
    pub deleted: usize,
    /// 没有远程 ID、无需远程删除的记录数
    pub skipped: usize,
    /// 远程删除失败的记录数
    pub failed: usize,
    /// 人类可读的失败描述列表
    pub errors: Vec<String>,
}

/// 批量导入区域的聚合报告
#[derive(Debug, Clone, Default, Serialize)]
pub struct ZoneImportReport {
    /// 服务商侧返回的区域总数
    pub total: usize,
    /// 新导入的域名数
    pub imported: usize,
    /// 已存在于镜像、跳过的域名数
    pub skipped: usize,
    /// 导入失败的域名数
    pub failed: usize,
    /// 人类可读的失败描述列表
    pub errors: Vec<String>,
}
