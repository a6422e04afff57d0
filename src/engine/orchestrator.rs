// ==========================================
// 承运商分配队列 - 引擎编排器
// ==========================================
// 用途: 一次批处理 = 质量分档 → 运单分配
// 红线: 分档失败即中止, 不进入分配阶段
// 红线: 运单池读取失败向调用方返回错误
// ==========================================

use crate::config::AwardQueueConfig;
use crate::engine::award_loop::{AwardLoopController, AwardSummary};
use crate::engine::band_assigner::{BandAssigner, BandAssignment};
use crate::engine::error::AwardQueueResult;
use crate::engine::ledger::AwardLedger;
use crate::engine::logger::QueueLogger;
use crate::engine::ranking::{BandRoundsOracle, RankingOracle};
use crate::engine::repositories::AwardQueueRepositories;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

// ==========================================
// RunSummary - 批处理结果
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// 本次完成分档的分档组
    pub band_assignments: Vec<BandAssignment>,
    /// 运单分配统计
    pub awards: AwardSummary,
}

// ==========================================
// AwardQueue - 分配队列入口
// ==========================================
pub struct AwardQueue {
    band_assigner: BandAssigner,
    award_loop: AwardLoopController,
    logger: Arc<dyn QueueLogger>,
}

impl AwardQueue {
    /// 使用默认排名策略（BandRoundsOracle）创建分配队列
    pub fn new(
        repos: &AwardQueueRepositories,
        config: &AwardQueueConfig,
        logger: Arc<dyn QueueLogger>,
    ) -> Self {
        let oracle = Arc::new(BandRoundsOracle::new(repos.performance_repo.clone(), config));
        Self::with_oracle(repos, config, oracle, logger)
    }

    /// 注入自定义排名策略
    pub fn with_oracle(
        repos: &AwardQueueRepositories,
        config: &AwardQueueConfig,
        oracle: Arc<dyn RankingOracle>,
        logger: Arc<dyn QueueLogger>,
    ) -> Self {
        let band_assigner = BandAssigner::new(
            repos.tdl_repo.clone(),
            repos.performance_repo.clone(),
            config.minimum_performance_score,
            logger.clone(),
        );
        let award_loop = AwardLoopController::new(
            repos.tdl_repo.clone(),
            repos.shipment_repo.clone(),
            oracle,
            AwardLedger::new(repos.conn.clone()),
            logger.clone(),
        );

        Self {
            band_assigner,
            award_loop,
            logger,
        }
    }

    /// 执行一次完整批处理
    ///
    /// # 返回
    /// - Ok(RunSummary): 分档报告与分配统计
    /// - Err(BandAssignment): 分档阶段失败, 未进行任何分配
    /// - Err(Persistence): 运单池读取失败
    pub fn run(&self) -> AwardQueueResult<RunSummary> {
        self.logger.run_started();

        let band_assignments = self.band_assigner.assign_performance_bands()?;
        let awards = self.award_loop.assign_unawarded_shipments()?;

        let summary = RunSummary {
            band_assignments,
            awards,
        };
        self.logger.run_finished(&summary);
        Ok(summary)
    }

    pub fn band_assigner(&self) -> &BandAssigner {
        &self.band_assigner
    }
}
