// ==========================================
// 承运商分配队列 - 分配队列运行参数
// ==========================================
// 用途: 一次批处理运行内不可变的参数快照
// ==========================================

use crate::config::award_queue_config_trait::AwardQueueConfigReader;
use crate::config::config_manager::config_keys;
use crate::config::error::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};

/// 默认最低绩效分
pub const DEFAULT_MINIMUM_PERFORMANCE_SCORE: f64 = 10.0;

/// 默认各档每轮分配数
pub const DEFAULT_AWARDS_PER_BAND: [u32; 4] = [5, 3, 2, 1];

// ==========================================
// AwardQueueConfig - 分配队列参数
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AwardQueueConfig {
    pub minimum_performance_score: f64, // MPS
    pub awards_per_band: [u32; 4],      // 1..4 档每轮分配数
}

impl Default for AwardQueueConfig {
    fn default() -> Self {
        Self {
            minimum_performance_score: DEFAULT_MINIMUM_PERFORMANCE_SCORE,
            awards_per_band: DEFAULT_AWARDS_PER_BAND,
        }
    }
}

impl AwardQueueConfig {
    /// 从配置读取器加载并校验参数
    pub async fn load<R>(reader: &R) -> ConfigResult<Self>
    where
        R: AwardQueueConfigReader + ?Sized,
    {
        let config = Self {
            minimum_performance_score: reader.get_minimum_performance_score().await?,
            awards_per_band: reader.get_awards_per_band().await?,
        };
        config.validate()?;
        Ok(config)
    }

    /// 参数校验
    ///
    /// - MPS 必须为有限数
    /// - 各档每轮分配数必须为正
    pub fn validate(&self) -> ConfigResult<()> {
        if !self.minimum_performance_score.is_finite() {
            return Err(ConfigError::InvalidValue {
                key: config_keys::MINIMUM_PERFORMANCE_SCORE.to_string(),
                value: self.minimum_performance_score.to_string(),
                reason: "MPS 必须为有限数".to_string(),
            });
        }

        if self.awards_per_band.iter().any(|&n| n == 0) {
            return Err(ConfigError::InvalidValue {
                key: config_keys::AWARDS_PER_BAND.to_string(),
                value: format!("{:?}", self.awards_per_band),
                reason: "各档每轮分配数必须大于 0".to_string(),
            });
        }

        Ok(())
    }
}
