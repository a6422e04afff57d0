// ==========================================
// 承运商分配队列 - 运单分配循环
// ==========================================
// 职责: 逐个运单向排名策略请求候选, 跳过停运承运商, 直至产生一条正式分配
// 红线: 每个运单至多一条非行政性分配
// 红线: 候选回到首个候选即判定循环耗尽, 防止全部停运时无限循环
// 红线: 已提供过的候选随每次请求交给排名策略, 全部提供一遍后才会回到首个候选
// 红线: 单个运单失败只记录日志, 不中断批处理
// ==========================================

use crate::domain::shipment::{Shipment, ShipmentAward};
use crate::domain::tdl::TrafficDistributionList;
use crate::engine::error::{AwardQueueError, AwardQueueErrorKind, AwardQueueResult};
use crate::engine::ledger::AwardLedger;
use crate::engine::logger::QueueLogger;
use crate::engine::ranking::RankingOracle;
use crate::repository::{ShipmentRepository, TdlRepository};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

// ==========================================
// AwardSummary - 批量分配结果
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AwardSummary {
    pub attempted: usize,
    pub awarded: usize,
    pub administrative_awards: usize,
    pub failures: BTreeMap<AwardQueueErrorKind, usize>,
}

impl AwardSummary {
    /// 失败运单总数
    pub fn failed(&self) -> usize {
        self.failures.values().sum()
    }
}

// ==========================================
// AwardLoopController - 分配循环控制器
// ==========================================
pub struct AwardLoopController {
    tdl_repo: Arc<TdlRepository>,
    shipment_repo: Arc<ShipmentRepository>,
    oracle: Arc<dyn RankingOracle>,
    ledger: AwardLedger,
    logger: Arc<dyn QueueLogger>,
}

impl AwardLoopController {
    pub fn new(
        tdl_repo: Arc<TdlRepository>,
        shipment_repo: Arc<ShipmentRepository>,
        oracle: Arc<dyn RankingOracle>,
        ledger: AwardLedger,
        logger: Arc<dyn QueueLogger>,
    ) -> Self {
        Self {
            tdl_repo,
            shipment_repo,
            oracle,
            ledger,
            logger,
        }
    }

    /// 为单个运单分配承运商
    ///
    /// # 返回
    /// - Ok(ShipmentAward): 正式（非行政性）分配
    /// - Err(NotFound): TDL/TSP/候选缺失
    /// - Err(CycleExhausted): 所有候选均处于停运期
    /// - Err(Persistence): 事务失败（本次候选的写入已回滚）
    pub fn attempt_shipment_award(&self, shipment: &Shipment) -> AwardQueueResult<ShipmentAward> {
        let mut administrative_awards = 0;
        self.award_shipment(shipment, &mut administrative_awards)
    }

    /// 处理整个待分配运单池
    ///
    /// 运单池只读取一次; 单个运单失败记录后继续。
    /// 只有读取运单池失败时返回错误。
    pub fn assign_unawarded_shipments(&self) -> AwardQueueResult<AwardSummary> {
        let shipments = self.shipment_repo.find_unawarded()?;

        let mut summary = AwardSummary {
            attempted: shipments.len(),
            ..AwardSummary::default()
        };

        for shipment in &shipments {
            let mut administrative_awards = 0;
            let result = self.award_shipment(shipment, &mut administrative_awards);
            summary.administrative_awards += administrative_awards;

            match result {
                Ok(_) => summary.awarded += 1,
                Err(err) => {
                    self.logger.shipment_failed(shipment, &err);
                    *summary.failures.entry(err.kind()).or_insert(0) += 1;
                }
            }
        }

        Ok(summary)
    }

    fn award_shipment(
        &self,
        shipment: &Shipment,
        administrative_awards: &mut usize,
    ) -> AwardQueueResult<ShipmentAward> {
        let tdl = self.resolve_tdl(shipment)?;

        // 首个候选即第 0 轮, 同时作为循环哨兵
        let mut candidate = self.oracle.next_eligible_tsp_performance(
            &tdl.tdl_id,
            shipment.award_date,
            shipment.pickup_date,
            &[],
        )?;
        let first_id = candidate.performance_id.clone();
        let mut offered: Vec<String> = Vec::new();
        let mut loop_count = 0usize;

        loop {
            if loop_count != 0 && candidate.performance_id == first_id {
                return Err(AwardQueueError::CycleExhausted {
                    shipment_id: shipment.shipment_id.clone(),
                    tries: loop_count,
                });
            }
            loop_count += 1;

            let award = self.ledger.record_award(shipment, &candidate)?;
            self.logger.award_recorded(shipment, &award, loop_count);

            if !award.administrative_shipment {
                return Ok(award);
            }
            *administrative_awards += 1;
            offered.push(candidate.performance_id);

            candidate = self.oracle.next_eligible_tsp_performance(
                &tdl.tdl_id,
                shipment.award_date,
                shipment.pickup_date,
                &offered,
            )?;
        }
    }

    fn resolve_tdl(&self, shipment: &Shipment) -> AwardQueueResult<TrafficDistributionList> {
        let not_found = |id: String| AwardQueueError::NotFound {
            entity: "TrafficDistributionList",
            id,
        };

        let tdl_id = shipment
            .tdl_id
            .as_deref()
            .ok_or_else(|| not_found(format!("<none> (shipment={})", shipment.shipment_id)))?;

        self.tdl_repo
            .find_by_id(tdl_id)?
            .ok_or_else(|| not_found(format!("{} (shipment={})", tdl_id, shipment.shipment_id)))
    }
}
