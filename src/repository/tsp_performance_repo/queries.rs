use super::{TspPerformanceRepository, PERFORMANCE_COLUMNS};
use crate::domain::tsp::{TspPerformance, TspPerformanceGroup};
use crate::domain::types::QualityBand;
use crate::repository::error::RepositoryResult;
use chrono::NaiveDate;
use rusqlite::{params, OptionalExtension, Result as SqliteResult};

/// 仅保留已登记承运商的记录
const ENROLLED_TSP_FILTER: &str =
    "tsp_id IN (SELECT tsp_id FROM transportation_service_provider WHERE enrolled = 1)";

impl TspPerformanceRepository {
    // ==========================================
    // 查询操作
    // ==========================================

    /// 按 ID 查询绩效记录
    pub fn find_by_id(&self, performance_id: &str) -> RepositoryResult<Option<TspPerformance>> {
        let conn = self.get_conn()?;
        let sql = format!(
            "SELECT {} FROM tsp_performance WHERE performance_id = ?1",
            PERFORMANCE_COLUMNS
        );
        let performance = conn
            .query_row(&sql, params![performance_id], Self::map_row)
            .optional()?;
        Ok(performance)
    }

    /// 查询 TDL 下仍有未分档记录的分档组
    ///
    /// 排序: 绩效周期起始升序 → 费率周期起始升序
    pub fn find_unbanded_groups(&self, tdl_id: &str) -> RepositoryResult<Vec<TspPerformanceGroup>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT DISTINCT tdl_id, performance_period_start, performance_period_end,
                   rate_cycle_start, rate_cycle_end
            FROM tsp_performance
            WHERE tdl_id = ?1 AND quality_band IS NULL
            ORDER BY performance_period_start, rate_cycle_start,
                     performance_period_end, rate_cycle_end
            "#,
        )?;
        let groups = stmt
            .query_map(params![tdl_id], |row| {
                Ok(TspPerformanceGroup {
                    tdl_id: row.get(0)?,
                    performance_period_start: row.get(1)?,
                    performance_period_end: row.get(2)?,
                    rate_cycle_start: row.get(3)?,
                    rate_cycle_end: row.get(4)?,
                })
            })?
            .collect::<SqliteResult<Vec<TspPerformanceGroup>>>()?;
        Ok(groups)
    }

    /// 查询分档组内待分档的绩效记录
    ///
    /// 条件: 承运商已登记、BVS >= mps 且 quality_band 为空
    /// 排序: BVS 降序; 同分按 tsp_id 升序, 再按 performance_id 升序（保证可复现）
    pub fn find_for_quality_band_assignment(
        &self,
        group: &TspPerformanceGroup,
        mps: f64,
    ) -> RepositoryResult<Vec<TspPerformance>> {
        let conn = self.get_conn()?;
        let sql = format!(
            r#"
            SELECT {} FROM tsp_performance
            WHERE tdl_id = ?1
              AND performance_period_start = ?2
              AND performance_period_end = ?3
              AND rate_cycle_start = ?4
              AND rate_cycle_end = ?5
              AND best_value_score >= ?6
              AND quality_band IS NULL
              AND {}
            ORDER BY best_value_score DESC, tsp_id ASC, performance_id ASC
            "#,
            PERFORMANCE_COLUMNS, ENROLLED_TSP_FILTER
        );
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
            .query_map(
                params![
                    group.tdl_id,
                    group.performance_period_start,
                    group.performance_period_end,
                    group.rate_cycle_start,
                    group.rate_cycle_end,
                    mps
                ],
                Self::map_row,
            )?
            .collect::<SqliteResult<Vec<TspPerformance>>>()?;
        Ok(rows)
    }

    /// 查询某分档内全部可分配的绩效记录
    ///
    /// 条件: 同 TDL、同分档、承运商已登记、BVS >= mps、
    ///       绩效周期覆盖 award_date、费率周期覆盖 pickup_date
    /// 排序: award_count 升序 → BVS 降序 → tsp_id 升序（首条即该档下一个候选）
    pub fn find_eligible_in_band(
        &self,
        tdl_id: &str,
        band: QualityBand,
        award_date: NaiveDate,
        pickup_date: NaiveDate,
        mps: f64,
    ) -> RepositoryResult<Vec<TspPerformance>> {
        let conn = self.get_conn()?;
        let sql = format!(
            r#"
            SELECT {} FROM tsp_performance
            WHERE tdl_id = ?1
              AND quality_band = ?2
              AND best_value_score >= ?3
              AND performance_period_start <= ?4
              AND performance_period_end >= ?4
              AND rate_cycle_start <= ?5
              AND rate_cycle_end >= ?5
              AND {}
            ORDER BY award_count ASC, best_value_score DESC, tsp_id ASC, performance_id ASC
            "#,
            PERFORMANCE_COLUMNS, ENROLLED_TSP_FILTER
        );
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
            .query_map(
                params![tdl_id, band.number(), mps, award_date, pickup_date],
                Self::map_row,
            )?
            .collect::<SqliteResult<Vec<TspPerformance>>>()?;
        Ok(rows)
    }
}
