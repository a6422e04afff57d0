// ==========================================
// 承运商分配队列 - 配置管理器
// ==========================================
// 职责: 配置查询、覆写管理
// 存储: config_kv 表 (key-value + scope)
// ==========================================

use crate::config::award_queue_config::{DEFAULT_AWARDS_PER_BAND, DEFAULT_MINIMUM_PERFORMANCE_SCORE};
use crate::config::award_queue_config_trait::AwardQueueConfigReader;
use crate::config::error::{ConfigError, ConfigResult};
use crate::db::{configure_sqlite_connection, open_sqlite_connection};
use async_trait::async_trait;
use rusqlite::{params, Connection, OptionalExtension};
use std::sync::{Arc, Mutex};

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
pub struct ConfigManager {
    conn: Arc<Mutex<Connection>>,
}

impl ConfigManager {
    /// 创建新的 ConfigManager 实例
    ///
    /// # 参数
    /// - db_path: 数据库文件路径
    pub fn new(db_path: &str) -> ConfigResult<Self> {
        let conn = open_sqlite_connection(db_path)?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// 从已有连接创建 ConfigManager
    ///
    /// 说明：为保证连接行为一致，会对传入连接再次应用统一 PRAGMA（幂等）。
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> ConfigResult<Self> {
        {
            let conn_guard = conn
                .lock()
                .map_err(|e| ConfigError::LockError(e.to_string()))?;
            configure_sqlite_connection(&conn_guard)?;
        }

        Ok(Self { conn })
    }

    /// 从 config_kv 表读取配置值（scope_id='global'）
    ///
    /// # 返回
    /// - Some(String): 配置值
    /// - None: 配置不存在
    pub fn get_config_value(&self, key: &str) -> ConfigResult<Option<String>> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| ConfigError::LockError(e.to_string()))?;

        let value = conn
            .query_row(
                "SELECT value FROM config_kv WHERE scope_id = 'global' AND key = ?1",
                params![key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    /// 写入（覆写）global scope 的配置值
    pub fn set_config_value(&self, key: &str, value: &str) -> ConfigResult<()> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| ConfigError::LockError(e.to_string()))?;

        conn.execute(
            r#"
            INSERT INTO config_kv (scope_id, key, value, updated_at)
            VALUES ('global', ?1, ?2, datetime('now'))
            ON CONFLICT (scope_id, key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
            "#,
            params![key, value],
        )?;
        Ok(())
    }
}

#[async_trait]
impl AwardQueueConfigReader for ConfigManager {
    async fn get_minimum_performance_score(&self) -> ConfigResult<f64> {
        let Some(value) = self.get_config_value(config_keys::MINIMUM_PERFORMANCE_SCORE)? else {
            return Ok(DEFAULT_MINIMUM_PERFORMANCE_SCORE);
        };

        value
            .trim()
            .parse::<f64>()
            .map_err(|e| ConfigError::InvalidValue {
                key: config_keys::MINIMUM_PERFORMANCE_SCORE.to_string(),
                value: value.clone(),
                reason: e.to_string(),
            })
    }

    async fn get_awards_per_band(&self) -> ConfigResult<[u32; 4]> {
        let Some(value) = self.get_config_value(config_keys::AWARDS_PER_BAND)? else {
            return Ok(DEFAULT_AWARDS_PER_BAND);
        };

        // 存储格式: JSON 数组, 如 "[5,3,2,1]"
        serde_json::from_str::<[u32; 4]>(&value).map_err(|e| ConfigError::InvalidValue {
            key: config_keys::AWARDS_PER_BAND.to_string(),
            value: value.clone(),
            reason: e.to_string(),
        })
    }
}

// ==========================================
// 配置键常量
// ==========================================
pub mod config_keys {
    // 最低绩效分
    pub const MINIMUM_PERFORMANCE_SCORE: &str = "award_queue.mps";

    // 各档每轮分配数
    pub const AWARDS_PER_BAND: &str = "award_queue.awards_per_band";
}
