// ==========================================
// Mock 配置实现 - 用于集成测试
// ==========================================

use async_trait::async_trait;
use tsp_award_queue::config::{
    AwardQueueConfigReader, ConfigResult, DEFAULT_AWARDS_PER_BAND,
    DEFAULT_MINIMUM_PERFORMANCE_SCORE,
};

/// Mock 配置结构
#[derive(Debug, Clone)]
pub struct MockConfig {
    pub minimum_performance_score: f64,
    pub awards_per_band: [u32; 4],
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            minimum_performance_score: DEFAULT_MINIMUM_PERFORMANCE_SCORE,
            awards_per_band: DEFAULT_AWARDS_PER_BAND,
        }
    }
}

impl MockConfig {
    pub fn with_mps(mut self, mps: f64) -> Self {
        self.minimum_performance_score = mps;
        self
    }

    pub fn with_awards_per_band(mut self, awards_per_band: [u32; 4]) -> Self {
        self.awards_per_band = awards_per_band;
        self
    }
}

#[async_trait]
impl AwardQueueConfigReader for MockConfig {
    async fn get_minimum_performance_score(&self) -> ConfigResult<f64> {
        Ok(self.minimum_performance_score)
    }

    async fn get_awards_per_band(&self) -> ConfigResult<[u32; 4]> {
        Ok(self.awards_per_band)
    }
}
