// ==========================================
// 承运商分配队列 - 停运判定
// ==========================================
// 职责: 判定承运商在指定提货日期是否处于停运期
// 红线: 只读, 无副作用
// ==========================================

use crate::domain::blackout::BlackoutDate;
use crate::engine::error::AwardQueueResult;
use crate::repository::BlackoutDateRepository;
use chrono::NaiveDate;
use rusqlite::Connection;
use std::sync::Arc;

// ==========================================
// BlackoutEvaluator - 停运判定器
// ==========================================
pub struct BlackoutEvaluator {
    blackout_repo: Arc<BlackoutDateRepository>,
}

impl BlackoutEvaluator {
    pub fn new(blackout_repo: Arc<BlackoutDateRepository>) -> Self {
        Self { blackout_repo }
    }

    /// 承运商在提货日期是否处于停运期
    ///
    /// # 返回
    /// - Ok(false): 无停运区间, 或提货日期不在任何区间内
    /// - Ok(true): 提货日期落在某个 [start, end] 区间内（含两端）
    pub fn is_blacked_out(&self, tsp_id: &str, pickup_date: NaiveDate) -> AwardQueueResult<bool> {
        let windows = self.blackout_repo.find_by_tsp(tsp_id)?;
        Ok(Self::covers_any(&windows, pickup_date))
    }

    /// 在调用方持有的事务内判定（供 AwardLedger 使用）
    pub fn is_blacked_out_in(
        conn: &Connection,
        tsp_id: &str,
        pickup_date: NaiveDate,
    ) -> AwardQueueResult<bool> {
        let windows = BlackoutDateRepository::find_by_tsp_in(conn, tsp_id)?;
        Ok(Self::covers_any(&windows, pickup_date))
    }

    /// 任一区间包含该日期
    pub fn covers_any(windows: &[BlackoutDate], date: NaiveDate) -> bool {
        windows.iter().any(|w| w.covers(date))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{date, seed_blackout, seed_tsp, setup_test_db};

    fn evaluator_with_window() -> BlackoutEvaluator {
        let conn = setup_test_db();
        seed_tsp(&conn, "TSP1");
        seed_tsp(&conn, "TSP2");
        seed_blackout(&conn, "B1", "TSP1", date(2018, 6, 10), date(2018, 6, 20));
        seed_blackout(&conn, "B2", "TSP1", date(2018, 8, 1), date(2018, 8, 1));
        BlackoutEvaluator::new(Arc::new(BlackoutDateRepository::new(conn)))
    }

    #[test]
    fn test_no_blackout_dates_never_blacked_out() {
        let evaluator = evaluator_with_window();
        for d in [date(2018, 6, 10), date(2018, 6, 15), date(2030, 1, 1)] {
            assert!(!evaluator.is_blacked_out("TSP2", d).unwrap());
        }
    }

    #[test]
    fn test_inside_and_on_boundaries() {
        let evaluator = evaluator_with_window();
        assert!(evaluator.is_blacked_out("TSP1", date(2018, 6, 10)).unwrap());
        assert!(evaluator.is_blacked_out("TSP1", date(2018, 6, 15)).unwrap());
        assert!(evaluator.is_blacked_out("TSP1", date(2018, 6, 20)).unwrap());
        assert!(evaluator.is_blacked_out("TSP1", date(2018, 8, 1)).unwrap());
    }

    #[test]
    fn test_outside_every_window() {
        let evaluator = evaluator_with_window();
        assert!(!evaluator.is_blacked_out("TSP1", date(2018, 6, 9)).unwrap());
        assert!(!evaluator.is_blacked_out("TSP1", date(2018, 6, 21)).unwrap());
        assert!(!evaluator.is_blacked_out("TSP1", date(2018, 7, 15)).unwrap());
    }
}
