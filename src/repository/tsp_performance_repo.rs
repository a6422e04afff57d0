// ==========================================
// 承运商分配队列 - 承运商绩效数据仓储
// ==========================================
// 红线: Repository 不含业务逻辑,只做数据映射
// 红线: quality_band 只允许从 NULL 写入一次
// 红线: award_count 只通过原子自增修改
// ==========================================

mod commands;
mod queries;


use crate::domain::tsp::TspPerformance;
use crate::domain::types::QualityBand;
use crate::repository::error::{RepositoryError, RepositoryResult};
use rusqlite::{Connection, Result as SqliteResult, Row};
use std::sync::{Arc, Mutex};

// ==========================================
// TspPerformanceRepository - 承运商绩效仓储
// ==========================================
pub struct TspPerformanceRepository {
    conn: Arc<Mutex<Connection>>,
}

/// 查询列清单（与 map_row 的下标一一对应）
const PERFORMANCE_COLUMNS: &str = r#"
    performance_id, tsp_id, tdl_id, best_value_score, quality_band,
    award_count, performance_period_start, performance_period_end,
    rate_cycle_start, rate_cycle_end
"#;

impl TspPerformanceRepository {
    /// 从已有连接创建仓储实例
    pub fn new(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    /// 获取数据库连接
    fn get_conn(&self) -> RepositoryResult<std::sync::MutexGuard<Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    fn map_row(row: &Row<'_>) -> SqliteResult<TspPerformance> {
        let quality_band = match row.get::<_, Option<i64>>(4)? {
            None => None,
            Some(n) => Some(
                QualityBand::from_number(n)
                    .ok_or(rusqlite::Error::IntegralValueOutOfRange(4, n))?,
            ),
        };

        Ok(TspPerformance {
            performance_id: row.get(0)?,
            tsp_id: row.get(1)?,
            tdl_id: row.get(2)?,
            best_value_score: row.get(3)?,
            quality_band,
            award_count: row.get(5)?,
            performance_period_start: row.get(6)?,
            performance_period_end: row.get(7)?,
            rate_cycle_start: row.get(8)?,
            rate_cycle_end: row.get(9)?,
        })
    }
}
