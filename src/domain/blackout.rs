// ==========================================
// 承运商分配队列 - 停运日期领域模型
// ==========================================
// 红线: 停运区间两端均为闭区间
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// BlackoutDate - 承运商停运区间
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlackoutDate {
    pub blackout_id: String,
    pub tsp_id: String,
    pub start_blackout_date: NaiveDate,
    pub end_blackout_date: NaiveDate,
}

impl BlackoutDate {
    /// 区间 [start, end] 是否包含指定日期（两端包含）
    pub fn covers(&self, date: NaiveDate) -> bool {
        self.start_blackout_date <= date && date <= self.end_blackout_date
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window(start: (i32, u32, u32), end: (i32, u32, u32)) -> BlackoutDate {
        BlackoutDate {
            blackout_id: "B1".to_string(),
            tsp_id: "TSP1".to_string(),
            start_blackout_date: NaiveDate::from_ymd_opt(start.0, start.1, start.2).unwrap(),
            end_blackout_date: NaiveDate::from_ymd_opt(end.0, end.1, end.2).unwrap(),
        }
    }

    #[test]
    fn test_covers_is_inclusive() {
        let w = window((2018, 6, 1), (2018, 6, 10));
        assert!(w.covers(NaiveDate::from_ymd_opt(2018, 6, 1).unwrap()));
        assert!(w.covers(NaiveDate::from_ymd_opt(2018, 6, 5).unwrap()));
        assert!(w.covers(NaiveDate::from_ymd_opt(2018, 6, 10).unwrap()));
        assert!(!w.covers(NaiveDate::from_ymd_opt(2018, 5, 31).unwrap()));
        assert!(!w.covers(NaiveDate::from_ymd_opt(2018, 6, 11).unwrap()));
    }

    #[test]
    fn test_single_day_window() {
        let w = window((2018, 6, 1), (2018, 6, 1));
        assert!(w.covers(NaiveDate::from_ymd_opt(2018, 6, 1).unwrap()));
        assert!(!w.covers(NaiveDate::from_ymd_opt(2018, 6, 2).unwrap()));
    }
}
