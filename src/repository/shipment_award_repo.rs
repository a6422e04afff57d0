// ==========================================
// 承运商分配队列 - 运单分配记录数据仓储
// ==========================================
// 红线: 分配记录只插入, 不更新, 不删除
// 红线: 每个运单至多一条非行政性分配（由唯一部分索引保证）
// ==========================================

use crate::domain::shipment::ShipmentAward;
use crate::repository::error::{RepositoryError, RepositoryResult};
use chrono::Utc;
use rusqlite::{params, Connection, Result as SqliteResult};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

// ==========================================
// ShipmentAwardRepository - 分配记录仓储
// ==========================================
pub struct ShipmentAwardRepository {
    conn: Arc<Mutex<Connection>>,
}

impl ShipmentAwardRepository {
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

    /// 在调用方持有的连接/事务内创建分配记录
    ///
    /// # 参数
    /// - shipment_id: 运单ID
    /// - tsp_id: 承运商ID
    /// - is_administrative: 是否为行政性占位分配
    ///
    /// # 返回
    /// - Ok(ShipmentAward): 新建的分配记录
    /// - Err(UniqueConstraintViolation): 该运单已有非行政性分配
    pub fn create_in(
        conn: &Connection,
        shipment_id: &str,
        tsp_id: &str,
        is_administrative: bool,
    ) -> RepositoryResult<ShipmentAward> {
        let award = ShipmentAward {
            award_id: Uuid::new_v4().to_string(),
            shipment_id: shipment_id.to_string(),
            tsp_id: tsp_id.to_string(),
            administrative_shipment: is_administrative,
            created_at: Utc::now().naive_utc(),
        };

        conn.execute(
            r#"
            INSERT INTO shipment_award (
                award_id, shipment_id, tsp_id, administrative_shipment, created_at
            ) VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
            params![
                award.award_id,
                award.shipment_id,
                award.tsp_id,
                award.administrative_shipment,
                award.created_at,
            ],
        )?;

        Ok(award)
    }

    /// 查询运单的全部分配记录（按创建时间升序）
    pub fn find_by_shipment(&self, shipment_id: &str) -> RepositoryResult<Vec<ShipmentAward>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT award_id, shipment_id, tsp_id, administrative_shipment, created_at
            FROM shipment_award
            WHERE shipment_id = ?1
            ORDER BY created_at, rowid
            "#,
        )?;

        let awards = stmt
            .query_map(params![shipment_id], |row| {
                Ok(ShipmentAward {
                    award_id: row.get(0)?,
                    shipment_id: row.get(1)?,
                    tsp_id: row.get(2)?,
                    administrative_shipment: row.get(3)?,
                    created_at: row.get(4)?,
                })
            })?
            .collect::<SqliteResult<Vec<ShipmentAward>>>()?;
        Ok(awards)
    }

    /// 统计分配记录数
    ///
    /// # 参数
    /// - administrative: true 统计行政性分配, false 统计正式分配
    pub fn count_awards(&self, administrative: bool) -> RepositoryResult<i64> {
        let conn = self.get_conn()?;
        let count = conn.query_row(
            "SELECT COUNT(*) FROM shipment_award WHERE administrative_shipment = ?1",
            params![administrative],
            |row| row.get(0),
        )?;
        Ok(count)
    }
}
