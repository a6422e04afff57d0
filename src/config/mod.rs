// ==========================================
// 承运商分配队列 - 配置层
// ==========================================
// 职责: 分配队列参数读取（MPS、分档权重）
// 存储: config_kv 表 (scope_id = 'global')
// ==========================================

pub mod award_queue_config;
pub mod award_queue_config_trait;
pub mod config_manager;
pub mod error;

// 重导出核心配置
pub use award_queue_config::{AwardQueueConfig, DEFAULT_AWARDS_PER_BAND, DEFAULT_MINIMUM_PERFORMANCE_SCORE};
pub use award_queue_config_trait::AwardQueueConfigReader;
pub use config_manager::{config_keys, ConfigManager};
pub use error::{ConfigError, ConfigResult};
