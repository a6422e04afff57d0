use super::TspPerformanceRepository;
use crate::domain::tsp::TspPerformance;
use crate::domain::types::QualityBand;
use crate::repository::error::{RepositoryError, RepositoryResult};
use rusqlite::{params, Connection};

impl TspPerformanceRepository {
    // ==========================================
    // 写入操作
    // ==========================================

    /// 插入绩效记录
    pub fn insert(&self, performance: &TspPerformance) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        conn.execute(
            r#"
            INSERT INTO tsp_performance (
                performance_id, tsp_id, tdl_id, best_value_score, quality_band,
                award_count, performance_period_start, performance_period_end,
                rate_cycle_start, rate_cycle_end
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
            "#,
            params![
                performance.performance_id,
                performance.tsp_id,
                performance.tdl_id,
                performance.best_value_score,
                performance.quality_band.map(|b| b.number()),
                performance.award_count,
                performance.performance_period_start,
                performance.performance_period_end,
                performance.rate_cycle_start,
                performance.rate_cycle_end,
            ],
        )?;
        Ok(())
    }

    /// 为单条绩效记录写入质量分档
    pub fn assign_quality_band(
        &self,
        band: QualityBand,
        performance_id: &str,
    ) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        Self::assign_quality_band_in(&conn, band, performance_id)
    }

    /// 批量写入质量分档（单事务：要么全部写入，要么全部回滚）
    ///
    /// # 返回
    /// - Ok(usize): 写入的记录数
    pub fn assign_quality_bands(
        &self,
        assignments: &[(String, QualityBand)],
    ) -> RepositoryResult<usize> {
        let mut conn = self.get_conn()?;
        let tx = conn.transaction()?;

        for (performance_id, band) in assignments {
            Self::assign_quality_band_in(&tx, *band, performance_id)?;
        }

        tx.commit()?;
        Ok(assignments.len())
    }

    /// 在调用方持有的连接/事务内写入质量分档
    ///
    /// 仅更新 quality_band 仍为空的记录；记录不存在或已分档均视为违规。
    pub fn assign_quality_band_in(
        conn: &Connection,
        band: QualityBand,
        performance_id: &str,
    ) -> RepositoryResult<()> {
        let affected = conn.execute(
            "UPDATE tsp_performance SET quality_band = ?1 WHERE performance_id = ?2 AND quality_band IS NULL",
            params![band.number(), performance_id],
        )?;

        if affected == 0 {
            return Err(RepositoryError::BusinessRuleViolation(format!(
                "绩效记录 {} 不存在或已分档, 无法写入 {}",
                performance_id, band
            )));
        }
        Ok(())
    }

    /// 在调用方持有的连接/事务内将 award_count 原子自增 1
    pub fn increment_award_count_in(conn: &Connection, performance_id: &str) -> RepositoryResult<()> {
        let affected = conn.execute(
            "UPDATE tsp_performance SET award_count = award_count + 1 WHERE performance_id = ?1",
            params![performance_id],
        )?;

        if affected == 0 {
            return Err(RepositoryError::NotFound {
                entity: "TspPerformance".to_string(),
                id: performance_id.to_string(),
            });
        }
        Ok(())
    }
}
