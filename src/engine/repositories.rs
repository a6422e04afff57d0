// ==========================================
// 承运商分配队列 - 引擎层仓储聚合
// ==========================================
// 职责: 聚合分配队列所需的所有 Repository
// 约束: 全部仓储共享同一个连接, AwardLedger 的事务才能覆盖跨表写入
// ==========================================

use std::sync::{Arc, Mutex};

use rusqlite::Connection;

use crate::repository::{
    BlackoutDateRepository, ShipmentAwardRepository, ShipmentRepository, TdlRepository,
    TspPerformanceRepository, TspRepository,
};

/// 分配队列仓储集合
///
/// # 包含的仓储
/// - `tdl_repo`: TDL 查询
/// - `tsp_repo`: 承运商查询
/// - `performance_repo`: 绩效记录（分档、候选、计数）
/// - `shipment_repo`: 待分配运单池
/// - `award_repo`: 分配记录查询
/// - `blackout_repo`: 停运区间
#[derive(Clone)]
pub struct AwardQueueRepositories {
    pub conn: Arc<Mutex<Connection>>,
    pub tdl_repo: Arc<TdlRepository>,
    pub tsp_repo: Arc<TspRepository>,
    pub performance_repo: Arc<TspPerformanceRepository>,
    pub shipment_repo: Arc<ShipmentRepository>,
    pub award_repo: Arc<ShipmentAwardRepository>,
    pub blackout_repo: Arc<BlackoutDateRepository>,
}

impl AwardQueueRepositories {
    /// 基于同一连接创建全部仓储
    pub fn new(conn: Arc<Mutex<Connection>>) -> Self {
        Self {
            tdl_repo: Arc::new(TdlRepository::new(conn.clone())),
            tsp_repo: Arc::new(TspRepository::new(conn.clone())),
            performance_repo: Arc::new(TspPerformanceRepository::new(conn.clone())),
            shipment_repo: Arc::new(ShipmentRepository::new(conn.clone())),
            award_repo: Arc::new(ShipmentAwardRepository::new(conn.clone())),
            blackout_repo: Arc::new(BlackoutDateRepository::new(conn.clone())),
            conn,
        }
    }
}
