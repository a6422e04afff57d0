// ==========================================
// 承运商分配队列 - 核心库
// ==========================================
// 系统定位: 批处理引擎（质量分档 + 运单分配）
// 技术栈: Rust + SQLite
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 数据仓储层 - 数据访问
pub mod repository;

// 引擎层 - 业务规则
pub mod engine;

// 配置层 - 系统配置
pub mod config;

// 数据库基础设施（连接初始化/PRAGMA 统一）
pub mod db;

// 日志系统
pub mod logging;

#[cfg(test)]
pub(crate) mod test_support;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域实体
pub use domain::{
    BlackoutDate, QualityBand, Shipment, ShipmentAward, TrafficDistributionList,
    TransportationServiceProvider, TspPerformance, TspPerformanceGroup,
};

// 引擎
pub use engine::{
    AwardLoopController, AwardQueue, AwardQueueError, AwardQueueErrorKind, AwardQueueResult,
    AwardQueueRepositories, BandAssigner, QueueLogger, RankingOracle, RunSummary,
    TracingQueueLogger,
};

// 配置
pub use config::{AwardQueueConfig, ConfigManager};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "承运商分配队列";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
