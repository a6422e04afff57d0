// ==========================================
// 承运商分配队列 - 运单数据仓储
// ==========================================
// 红线: Repository 不含业务逻辑
// 说明: “待分配”指尚无非行政性分配记录的运单；
//       只有行政性占位分配的运单仍留在待分配池中
// ==========================================

use crate::domain::shipment::Shipment;
use crate::repository::error::{RepositoryError, RepositoryResult};
use rusqlite::{params, Connection, OptionalExtension, Result as SqliteResult, Row};
use std::sync::{Arc, Mutex};

// ==========================================
// ShipmentRepository - 运单仓储
// ==========================================
pub struct ShipmentRepository {
    conn: Arc<Mutex<Connection>>,
}

impl ShipmentRepository {
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

    fn map_row(row: &Row<'_>) -> SqliteResult<Shipment> {
        Ok(Shipment {
            shipment_id: row.get(0)?,
            tdl_id: row.get(1)?,
            pickup_date: row.get(2)?,
            award_date: row.get(3)?,
        })
    }

    /// 插入运单
    pub fn insert(&self, shipment: &Shipment) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        conn.execute(
            r#"
            INSERT INTO shipment (shipment_id, tdl_id, pickup_date, award_date)
            VALUES (?1, ?2, ?3, ?4)
            "#,
            params![
                shipment.shipment_id,
                shipment.tdl_id,
                shipment.pickup_date,
                shipment.award_date,
            ],
        )?;
        Ok(())
    }

    /// 按 ID 查询运单
    pub fn find_by_id(&self, shipment_id: &str) -> RepositoryResult<Option<Shipment>> {
        let conn = self.get_conn()?;
        let shipment = conn
            .query_row(
                "SELECT shipment_id, tdl_id, pickup_date, award_date FROM shipment WHERE shipment_id = ?1",
                params![shipment_id],
                Self::map_row,
            )
            .optional()?;
        Ok(shipment)
    }

    /// 查询待分配运单池
    ///
    /// 排序: award_date 升序 → pickup_date 升序 → shipment_id 升序
    pub fn find_unawarded(&self) -> RepositoryResult<Vec<Shipment>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT s.shipment_id, s.tdl_id, s.pickup_date, s.award_date
            FROM shipment s
            WHERE NOT EXISTS (
                SELECT 1 FROM shipment_award a
                WHERE a.shipment_id = s.shipment_id
                  AND a.administrative_shipment = 0
            )
            ORDER BY s.award_date, s.pickup_date, s.shipment_id
            "#,
        )?;

        let shipments = stmt
            .query_map([], Self::map_row)?
            .collect::<SqliteResult<Vec<Shipment>>>()?;
        Ok(shipments)
    }
}
