// ==========================================
// 承运商分配队列 - 运输分配清单数据仓储
// ==========================================
// 红线: Repository 不含业务逻辑
// ==========================================

use crate::domain::tdl::TrafficDistributionList;
use crate::repository::error::{RepositoryError, RepositoryResult};
use rusqlite::{params, Connection, OptionalExtension, Result as SqliteResult, Row};
use std::sync::{Arc, Mutex};

// ==========================================
// TdlRepository - TDL 仓储
// ==========================================
pub struct TdlRepository {
    conn: Arc<Mutex<Connection>>,
}

impl TdlRepository {
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

    fn map_row(row: &Row<'_>) -> SqliteResult<TrafficDistributionList> {
        Ok(TrafficDistributionList {
            tdl_id: row.get(0)?,
            source_rate_area: row.get(1)?,
            destination_region: row.get(2)?,
            code_of_service: row.get(3)?,
        })
    }

    /// 插入 TDL
    pub fn insert(&self, tdl: &TrafficDistributionList) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        conn.execute(
            r#"
            INSERT INTO traffic_distribution_list (
                tdl_id, source_rate_area, destination_region, code_of_service
            ) VALUES (?1, ?2, ?3, ?4)
            "#,
            params![
                tdl.tdl_id,
                tdl.source_rate_area,
                tdl.destination_region,
                tdl.code_of_service,
            ],
        )?;
        Ok(())
    }

    /// 按 ID 查询 TDL
    ///
    /// # 返回
    /// - Ok(Some(TrafficDistributionList)): 找到
    /// - Ok(None): 未找到
    pub fn find_by_id(&self, tdl_id: &str) -> RepositoryResult<Option<TrafficDistributionList>> {
        let conn = self.get_conn()?;
        let tdl = conn
            .query_row(
                r#"
                SELECT tdl_id, source_rate_area, destination_region, code_of_service
                FROM traffic_distribution_list
                WHERE tdl_id = ?1
                "#,
                params![tdl_id],
                Self::map_row,
            )
            .optional()?;
        Ok(tdl)
    }

    /// 查询存在未分档绩效记录的 TDL（按 tdl_id 升序）
    pub fn find_awaiting_band_assignment(&self) -> RepositoryResult<Vec<TrafficDistributionList>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT tdl_id, source_rate_area, destination_region, code_of_service
            FROM traffic_distribution_list t
            WHERE EXISTS (
                SELECT 1 FROM tsp_performance p
                WHERE p.tdl_id = t.tdl_id AND p.quality_band IS NULL
            )
            ORDER BY tdl_id
            "#,
        )?;

        let tdls = stmt
            .query_map([], Self::map_row)?
            .collect::<SqliteResult<Vec<TrafficDistributionList>>>()?;
        Ok(tdls)
    }
}
