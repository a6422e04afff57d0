// ==========================================
// 承运商分配队列 - 质量分档引擎
// ==========================================
// 职责: 按 BVS 排名将分档组内待分档绩效记录划入 4 个质量分档
// 分档组: 同一 TDL、同一绩效周期、同一费率周期
// 红线: 只处理 quality_band 为空的记录, 已分档记录不得改写
// 红线: 各档人数之和 == 组内待分档、已登记且 BVS >= MPS 的记录数
// ==========================================

use crate::domain::tdl::TrafficDistributionList;
use crate::domain::tsp::TspPerformanceGroup;
use crate::domain::types::QualityBand;
use crate::engine::error::{AwardQueueError, AwardQueueResult};
use crate::engine::logger::QueueLogger;
use crate::repository::{TdlRepository, TspPerformanceRepository};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// 质量分档数
pub const QUALITY_BAND_COUNT: usize = 4;

/// 计算各档人数
///
/// 先平均分配, 余数从最好档开始逐档加 1。
///
/// # 示例
/// - 10 → [3, 3, 2, 2]
/// - 8 → [2, 2, 2, 2]
pub fn get_tsps_per_band(count: usize) -> [usize; QUALITY_BAND_COUNT] {
    let base = count / QUALITY_BAND_COUNT;
    let remainder = count % QUALITY_BAND_COUNT;

    let mut bands = [base; QUALITY_BAND_COUNT];
    for band in bands.iter_mut().take(remainder) {
        *band += 1;
    }
    bands
}

// ==========================================
// BandAssignment - 单个分档组的分档结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BandAssignment {
    #[serde(flatten)]
    pub group: TspPerformanceGroup,
    pub tsps_per_band: [usize; QUALITY_BAND_COUNT],
    pub banded: usize,
}

// ==========================================
// BandAssigner - 质量分档引擎
// ==========================================
pub struct BandAssigner {
    tdl_repo: Arc<TdlRepository>,
    performance_repo: Arc<TspPerformanceRepository>,
    minimum_performance_score: f64,
    logger: Arc<dyn QueueLogger>,
}

impl BandAssigner {
    pub fn new(
        tdl_repo: Arc<TdlRepository>,
        performance_repo: Arc<TspPerformanceRepository>,
        minimum_performance_score: f64,
        logger: Arc<dyn QueueLogger>,
    ) -> Self {
        Self {
            tdl_repo,
            performance_repo,
            minimum_performance_score,
            logger,
        }
    }

    /// 为所有存在未分档记录的 TDL 分档
    ///
    /// 任一 TDL 失败即返回 BandAssignment 错误; 已完成的 TDL 保持已提交状态。
    pub fn assign_performance_bands(&self) -> AwardQueueResult<Vec<BandAssignment>> {
        let tdls = self
            .tdl_repo
            .find_awaiting_band_assignment()
            .map_err(|source| AwardQueueError::BandAssignment {
                tdl_id: None,
                source,
            })?;

        let mut reports = Vec::with_capacity(tdls.len());
        for tdl in &tdls {
            reports.extend(self.assign_performance_bands_for_tdl(tdl)?);
        }
        Ok(reports)
    }

    /// 为单个 TDL 分档
    ///
    /// 1. 读取 TDL 下仍有未分档记录的分档组
    /// 2. 每组读取已登记、BVS >= MPS 且未分档的记录（BVS 降序, tsp_id 升序）
    /// 3. 按 get_tsps_per_band 切片, 依次写入 1..4 档
    /// 4. 该 TDL 所有组的写入在同一事务内提交
    ///
    /// # 返回
    /// - 每个分档组一份结果
    pub fn assign_performance_bands_for_tdl(
        &self,
        tdl: &TrafficDistributionList,
    ) -> AwardQueueResult<Vec<BandAssignment>> {
        let band_error = |source| AwardQueueError::BandAssignment {
            tdl_id: Some(tdl.tdl_id.clone()),
            source,
        };

        let groups = self
            .performance_repo
            .find_unbanded_groups(&tdl.tdl_id)
            .map_err(band_error)?;

        let mut reports = Vec::with_capacity(groups.len());
        let mut assignments = Vec::new();
        for group in groups {
            let performances = self
                .performance_repo
                .find_for_quality_band_assignment(&group, self.minimum_performance_score)
                .map_err(band_error)?;

            let tsps_per_band = get_tsps_per_band(performances.len());

            let mut ranked = performances.iter();
            for (band, size) in QualityBand::ALL.iter().zip(tsps_per_band.iter()) {
                for performance in ranked.by_ref().take(*size) {
                    assignments.push((performance.performance_id.clone(), *band));
                }
            }

            reports.push(BandAssignment {
                group,
                tsps_per_band,
                banded: performances.len(),
            });
        }

        if !assignments.is_empty() {
            self.performance_repo
                .assign_quality_bands(&assignments)
                .map_err(band_error)?;
        }

        for report in &reports {
            self.logger.band_assigned(report);
        }
        Ok(reports)
    }
}
