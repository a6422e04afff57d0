// ==========================================
// 承运商分配队列 - 停运日期数据仓储
// ==========================================
// 红线: Repository 不含业务逻辑（是否停运由 BlackoutEvaluator 判定）
// ==========================================

use crate::domain::blackout::BlackoutDate;
use crate::repository::error::{RepositoryError, RepositoryResult};
use rusqlite::{params, Connection, Result as SqliteResult};
use std::sync::{Arc, Mutex};

// ==========================================
// BlackoutDateRepository - 停运日期仓储
// ==========================================
pub struct BlackoutDateRepository {
    conn: Arc<Mutex<Connection>>,
}

impl BlackoutDateRepository {
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

    /// 插入停运区间
    pub fn insert(&self, blackout: &BlackoutDate) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        conn.execute(
            r#"
            INSERT INTO blackout_date (
                blackout_id, tsp_id, start_blackout_date, end_blackout_date
            ) VALUES (?1, ?2, ?3, ?4)
            "#,
            params![
                blackout.blackout_id,
                blackout.tsp_id,
                blackout.start_blackout_date,
                blackout.end_blackout_date,
            ],
        )?;
        Ok(())
    }

    /// 查询承运商的全部停运区间
    pub fn find_by_tsp(&self, tsp_id: &str) -> RepositoryResult<Vec<BlackoutDate>> {
        let conn = self.get_conn()?;
        Self::find_by_tsp_in(&conn, tsp_id)
    }

    /// 在调用方持有的连接/事务内查询承运商的全部停运区间
    pub fn find_by_tsp_in(conn: &Connection, tsp_id: &str) -> RepositoryResult<Vec<BlackoutDate>> {
        let mut stmt = conn.prepare(
            r#"
            SELECT blackout_id, tsp_id, start_blackout_date, end_blackout_date
            FROM blackout_date
            WHERE tsp_id = ?1
            ORDER BY start_blackout_date
            "#,
        )?;

        let windows = stmt
            .query_map(params![tsp_id], |row| {
                Ok(BlackoutDate {
                    blackout_id: row.get(0)?,
                    tsp_id: row.get(1)?,
                    start_blackout_date: row.get(2)?,
                    end_blackout_date: row.get(3)?,
                })
            })?
            .collect::<SqliteResult<Vec<BlackoutDate>>>()?;
        Ok(windows)
    }
}
