// ==========================================
// 承运商分配队列 - 排名策略
// ==========================================
// 职责: 给出 TDL 在某分配日期下的“下一个可分配”绩效记录
// 约定: 随 award_count 演进, 档位越好的承运商分得的比例越高
// 红线: 同一运单内, 全部可分配记录提供一遍之前不重复提供
// ==========================================

use crate::config::AwardQueueConfig;
use crate::domain::tsp::TspPerformance;
use crate::domain::types::QualityBand;
use crate::engine::error::{AwardQueueError, AwardQueueResult};
use crate::repository::TspPerformanceRepository;
use chrono::NaiveDate;
use std::sync::Arc;

// ==========================================
// RankingOracle Trait
// ==========================================

/// 排名策略端口
///
/// 具体加权公式属于外部策略; 引擎只依赖此契约。
pub trait RankingOracle: Send + Sync {
    /// 返回下一个候选绩效记录
    ///
    /// # 参数
    /// - award_date: 须落在候选的绩效周期内
    /// - pickup_date: 须落在候选的费率周期内
    /// - offered: 同一运单本轮已提供过的候选 (按提供顺序)
    ///
    /// # 约定
    /// - 仍有未提供的可分配记录时, 不得返回 offered 中的记录
    /// - 全部提供过后, 返回 offered 的第一条, 由调用方判定循环耗尽
    ///
    /// # 返回
    /// - Ok(TspPerformance): 候选
    /// - Err(NotFound): TDL 下无可分配的绩效记录
    fn next_eligible_tsp_performance(
        &self,
        tdl_id: &str,
        award_date: NaiveDate,
        pickup_date: NaiveDate,
        offered: &[String],
    ) -> AwardQueueResult<TspPerformance>;
}

// ==========================================
// BandRoundsOracle - 按分档轮次加权的默认策略
// ==========================================
// 每档候选: 该档内未提供过的记录中 award_count 最小者（同数按 BVS 降序、tsp_id 升序）
// 轮次: award_count / 该档每轮分配数
// 选择: 由好到差遍历各档, 首个轮次落后于前一档者胜出; 都不落后则取最好档
pub struct BandRoundsOracle {
    performance_repo: Arc<TspPerformanceRepository>,
    minimum_performance_score: f64,
    awards_per_band: [u32; 4],
}

impl BandRoundsOracle {
    pub fn new(performance_repo: Arc<TspPerformanceRepository>, config: &AwardQueueConfig) -> Self {
        Self {
            performance_repo,
            minimum_performance_score: config.minimum_performance_score,
            awards_per_band: config.awards_per_band,
        }
    }

    /// 在各档候选中选出下一个承运商
    ///
    /// # 参数
    /// - candidates: (分档, 该档候选), 按分档由好到差排列
    /// - awards_per_band: 各档每轮分配数
    pub fn select_next(
        candidates: &[(QualityBand, TspPerformance)],
        awards_per_band: &[u32; 4],
    ) -> Option<TspPerformance> {
        let rounds = |band: QualityBand, performance: &TspPerformance| {
            performance.award_count as f64 / f64::from(awards_per_band[band.index()].max(1))
        };

        let (first_band, first) = candidates.first()?;
        let mut previous_rounds = rounds(*first_band, first);

        for (band, performance) in candidates.iter().skip(1) {
            let current_rounds = rounds(*band, performance);
            if current_rounds < previous_rounds {
                return Some(performance.clone());
            }
            previous_rounds = current_rounds;
        }

        Some(first.clone())
    }
}

impl RankingOracle for BandRoundsOracle {
    fn next_eligible_tsp_performance(
        &self,
        tdl_id: &str,
        award_date: NaiveDate,
        pickup_date: NaiveDate,
        offered: &[String],
    ) -> AwardQueueResult<TspPerformance> {
        let mut candidates = Vec::with_capacity(QualityBand::ALL.len());
        let mut sentinel = None;

        for band in QualityBand::ALL {
            let eligible = self.performance_repo.find_eligible_in_band(
                tdl_id,
                band,
                award_date,
                pickup_date,
                self.minimum_performance_score,
            )?;

            if sentinel.is_none() {
                sentinel = offered
                    .first()
                    .and_then(|id| eligible.iter().find(|p| &p.performance_id == id).cloned());
            }

            if let Some(performance) = eligible
                .into_iter()
                .find(|p| !offered.contains(&p.performance_id))
            {
                candidates.push((band, performance));
            }
        }

        // 全部提供过则回到首个候选
        Self::select_next(&candidates, &self.awards_per_band)
            .or(sentinel)
            .ok_or_else(|| AwardQueueError::NotFound {
                entity: "eligible TspPerformance",
                id: format!(
                    "tdl={} award_date={} pickup_date={}",
                    tdl_id, award_date, pickup_date
                ),
            })
    }
}
