// ==========================================
// 承运商分配队列 - 分配队列配置读取 Trait
// ==========================================
// 职责: 定义分配队列所需的配置读取接口（不包含实现）
// 红线: 不包含配置写入、不包含业务逻辑
// ==========================================

use crate::config::error::ConfigResult;
use async_trait::async_trait;

// ==========================================
// AwardQueueConfigReader Trait
// ==========================================
// 实现者: ConfigManager（从 config_kv 表读取）
#[async_trait]
pub trait AwardQueueConfigReader: Send + Sync {
    /// 获取最低绩效分 (MPS)
    ///
    /// BVS 低于该值的绩效记录不参与分档, 也不参与分配
    ///
    /// # 默认值
    /// - 10
    async fn get_minimum_performance_score(&self) -> ConfigResult<f64>;

    /// 获取各质量分档每轮分配数（下标 0 对应 1 档）
    ///
    /// 供默认排名策略按轮次加权使用: 档位越好, 每轮分得越多
    ///
    /// # 默认值
    /// - [5, 3, 2, 1]
    async fn get_awards_per_band(&self) -> ConfigResult<[u32; 4]>;
}
