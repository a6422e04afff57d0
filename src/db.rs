// ==========================================
// 承运商分配队列 - SQLite 连接初始化与建表
// ==========================================
// 目标:
// - 统一所有 Connection::open 的 PRAGMA 行为（外键、busy_timeout）
// - 提供幂等建表，供批处理入口与测试共用
// ==========================================

use rusqlite::Connection;
use rusqlite::OptionalExtension;
use std::path::PathBuf;
use std::time::Duration;

/// 显式指定数据库路径的环境变量
pub const DB_PATH_ENV: &str = "TSP_AWARD_QUEUE_DB_PATH";

/// 默认 busy_timeout（毫秒）
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;

/// 当前代码所期望的 schema_version
pub const CURRENT_SCHEMA_VERSION: i64 = 1;

/// 建表语句（全部 IF NOT EXISTS，可重复执行）
///
/// 说明：
/// - shipment.tdl_id 允许为空，缺失 TDL 由引擎按单个运单失败处理
/// - ux_shipment_award_genuine 保证每个运单至多一条非行政性分配
/// - tsp_performance 以 (TDL, 绩效周期, 费率周期) 分组分档
const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS schema_version (
    version INTEGER NOT NULL,
    applied_at TEXT NOT NULL DEFAULT (datetime('now'))
);

CREATE TABLE IF NOT EXISTS config_kv (
    scope_id TEXT NOT NULL,
    key TEXT NOT NULL,
    value TEXT NOT NULL,
    updated_at TEXT NOT NULL DEFAULT (datetime('now')),
    PRIMARY KEY (scope_id, key)
);

CREATE TABLE IF NOT EXISTS traffic_distribution_list (
    tdl_id TEXT PRIMARY KEY,
    source_rate_area TEXT NOT NULL,
    destination_region TEXT NOT NULL,
    code_of_service TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS transportation_service_provider (
    tsp_id TEXT PRIMARY KEY,
    standard_carrier_alpha_code TEXT NOT NULL UNIQUE,
    name TEXT,
    enrolled INTEGER NOT NULL DEFAULT 1 CHECK (enrolled IN (0, 1))
);

CREATE TABLE IF NOT EXISTS tsp_performance (
    performance_id TEXT PRIMARY KEY,
    tsp_id TEXT NOT NULL REFERENCES transportation_service_provider(tsp_id),
    tdl_id TEXT NOT NULL REFERENCES traffic_distribution_list(tdl_id),
    best_value_score REAL NOT NULL,
    quality_band INTEGER CHECK (quality_band IS NULL OR quality_band BETWEEN 1 AND 4),
    award_count INTEGER NOT NULL DEFAULT 0 CHECK (award_count >= 0),
    performance_period_start TEXT NOT NULL,
    performance_period_end TEXT NOT NULL,
    rate_cycle_start TEXT NOT NULL,
    rate_cycle_end TEXT NOT NULL,
    UNIQUE (tsp_id, tdl_id, performance_period_start, rate_cycle_start)
);

CREATE INDEX IF NOT EXISTS idx_tsp_performance_tdl_band
    ON tsp_performance (tdl_id, quality_band);

CREATE TABLE IF NOT EXISTS shipment (
    shipment_id TEXT PRIMARY KEY,
    tdl_id TEXT REFERENCES traffic_distribution_list(tdl_id),
    pickup_date TEXT NOT NULL,
    award_date TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS shipment_award (
    award_id TEXT PRIMARY KEY,
    shipment_id TEXT NOT NULL REFERENCES shipment(shipment_id),
    tsp_id TEXT NOT NULL REFERENCES transportation_service_provider(tsp_id),
    administrative_shipment INTEGER NOT NULL CHECK (administrative_shipment IN (0, 1)),
    created_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_shipment_award_shipment
    ON shipment_award (shipment_id);

CREATE UNIQUE INDEX IF NOT EXISTS ux_shipment_award_genuine
    ON shipment_award (shipment_id) WHERE administrative_shipment = 0;

CREATE TABLE IF NOT EXISTS blackout_date (
    blackout_id TEXT PRIMARY KEY,
    tsp_id TEXT NOT NULL REFERENCES transportation_service_provider(tsp_id),
    start_blackout_date TEXT NOT NULL,
    end_blackout_date TEXT NOT NULL,
    CHECK (end_blackout_date >= start_blackout_date)
);

CREATE INDEX IF NOT EXISTS idx_blackout_date_tsp
    ON blackout_date (tsp_id);
"#;

/// 配置 SQLite 连接的统一 PRAGMA
///
/// 说明：
/// - foreign_keys 需要“每个连接”单独开启
/// - busy_timeout 需要“每个连接”单独配置
pub fn configure_sqlite_connection(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    conn.busy_timeout(Duration::from_millis(DEFAULT_BUSY_TIMEOUT_MS))?;
    Ok(())
}

/// 打开 SQLite 连接并应用统一配置
pub fn open_sqlite_connection(db_path: &str) -> rusqlite::Result<Connection> {
    let conn = Connection::open(db_path)?;
    configure_sqlite_connection(&conn)?;
    Ok(conn)
}

/// 幂等建表，并在首次建库时写入 schema_version
pub fn init_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(SCHEMA_SQL)?;

    if read_schema_version(conn)?.is_none() {
        conn.execute(
            "INSERT INTO schema_version (version) VALUES (?1)",
            [CURRENT_SCHEMA_VERSION],
        )?;
    }

    Ok(())
}

/// 读取 schema_version（若表不存在或为空则返回 None）
pub fn read_schema_version(conn: &Connection) -> rusqlite::Result<Option<i64>> {
    let has_table: bool = conn
        .query_row(
            "SELECT 1 FROM sqlite_master WHERE type='table' AND name='schema_version' LIMIT 1",
            [],
            |_row| Ok(true),
        )
        .optional()?
        .unwrap_or(false);

    if !has_table {
        return Ok(None);
    }

    let v: Option<i64> = conn.query_row("SELECT MAX(version) FROM schema_version", [], |row| row.get(0))?;
    Ok(v)
}

/// 解析数据库路径
///
/// 优先级: 命令行参数 > 环境变量 TSP_AWARD_QUEUE_DB_PATH > 用户数据目录
pub fn get_default_db_path(arg: Option<&str>) -> String {
    let explicit = arg
        .map(str::to_string)
        .or_else(|| std::env::var(DB_PATH_ENV).ok());
    if let Some(path) = explicit {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return trimmed.to_string();
        }
    }

    let mut path = PathBuf::from("./award_queue.db");
    if let Some(data_dir) = dirs::data_dir() {
        let dir = data_dir.join("tsp-award-queue");
        // 目录创建失败时由 open 报错
        std::fs::create_dir_all(&dir).ok();
        path = dir.join("award_queue.db");
    }

    path.to_string_lossy().to_string()
}
