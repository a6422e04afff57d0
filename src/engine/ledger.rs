// ==========================================
// 承运商分配队列 - 分配台账
// ==========================================
// 职责: 单个候选承运商的原子分配
// 红线: 读取 TSP → 停运判定 → 写分配记录 → award_count 自增 必须在同一事务内
// 红线: 行政性分配同样计入 award_count
// ==========================================

use crate::domain::shipment::{Shipment, ShipmentAward};
use crate::domain::tsp::TspPerformance;
use crate::engine::blackout::BlackoutEvaluator;
use crate::engine::error::{AwardQueueError, AwardQueueResult};
use crate::repository::{
    RepositoryError, ShipmentAwardRepository, TspPerformanceRepository, TspRepository,
};
use rusqlite::{Connection, TransactionBehavior};
use std::sync::{Arc, Mutex};

// ==========================================
// AwardLedger - 分配台账
// ==========================================
pub struct AwardLedger {
    conn: Arc<Mutex<Connection>>,
}

impl AwardLedger {
    /// 创建台账（连接须与各仓储共享）
    pub fn new(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    /// 为运单记录一次候选分配
    ///
    /// 事务内步骤:
    /// 1. 读取候选绩效对应的 TSP（缺失 → NotFound, 事务回滚）
    /// 2. 判定 TSP 在提货日期是否停运 → is_administrative
    /// 3. 写入 ShipmentAward(shipment, tsp, is_administrative)
    /// 4. 候选绩效 award_count + 1
    ///
    /// # 返回
    /// - Ok(ShipmentAward): 已提交的分配记录; administrative_shipment 表示是否为占位分配
    /// - Err: 任一步失败, 事务整体回滚
    pub fn record_award(
        &self,
        shipment: &Shipment,
        candidate: &TspPerformance,
    ) -> AwardQueueResult<ShipmentAward> {
        let mut conn = self
            .conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))?;
        // IMMEDIATE: 开始即取写锁, 多进程并发时等待 busy_timeout 而非中途失败
        let tx = conn
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .map_err(RepositoryError::from)?;

        let tsp = TspRepository::find_by_id_in(&tx, &candidate.tsp_id)?.ok_or_else(|| {
            AwardQueueError::NotFound {
                entity: "TransportationServiceProvider",
                id: candidate.tsp_id.clone(),
            }
        })?;

        let is_administrative =
            BlackoutEvaluator::is_blacked_out_in(&tx, &tsp.tsp_id, shipment.pickup_date)?;

        let award = ShipmentAwardRepository::create_in(
            &tx,
            &shipment.shipment_id,
            &tsp.tsp_id,
            is_administrative,
        )?;
        TspPerformanceRepository::increment_award_count_in(&tx, &candidate.performance_id)?;

        tx.commit().map_err(RepositoryError::from)?;
        Ok(award)
    }
}
