// ==========================================
// 承运商分配队列 - 承运商数据仓储
// ==========================================
// 红线: Repository 不含业务逻辑
// ==========================================

use crate::domain::tsp::TransportationServiceProvider;
use crate::repository::error::{RepositoryError, RepositoryResult};
use rusqlite::{params, Connection, OptionalExtension};
use std::sync::{Arc, Mutex};

// ==========================================
// TspRepository - 承运商仓储
// ==========================================
pub struct TspRepository {
    conn: Arc<Mutex<Connection>>,
}

impl TspRepository {
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

    /// 插入承运商
    pub fn insert(&self, tsp: &TransportationServiceProvider) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        conn.execute(
            r#"
            INSERT INTO transportation_service_provider (
                tsp_id, standard_carrier_alpha_code, name, enrolled
            ) VALUES (?1, ?2, ?3, ?4)
            "#,
            params![tsp.tsp_id, tsp.standard_carrier_alpha_code, tsp.name, tsp.enrolled],
        )?;
        Ok(())
    }

    /// 按 ID 查询承运商
    pub fn find_by_id(&self, tsp_id: &str) -> RepositoryResult<Option<TransportationServiceProvider>> {
        let conn = self.get_conn()?;
        Self::find_by_id_in(&conn, tsp_id)
    }

    /// 在调用方持有的连接/事务内按 ID 查询承运商
    pub fn find_by_id_in(
        conn: &Connection,
        tsp_id: &str,
    ) -> RepositoryResult<Option<TransportationServiceProvider>> {
        let tsp = conn
            .query_row(
                r#"
                SELECT tsp_id, standard_carrier_alpha_code, name, enrolled
                FROM transportation_service_provider
                WHERE tsp_id = ?1
                "#,
                params![tsp_id],
                |row| {
                    Ok(TransportationServiceProvider {
                        tsp_id: row.get(0)?,
                        standard_carrier_alpha_code: row.get(1)?,
                        name: row.get(2)?,
                        enrolled: row.get(3)?,
                    })
                },
            )
            .optional()?;
        Ok(tsp)
    }
}
