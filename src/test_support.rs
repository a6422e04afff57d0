// ==========================================
// 承运商分配队列 - 单元测试共用夹具
// ==========================================
// 内存库 + 建表 + 常用种子数据
// ==========================================

use crate::db::{configure_sqlite_connection, init_schema};
use crate::domain::{
    BlackoutDate, QualityBand, Shipment, ShipmentAward, TrafficDistributionList,
    TransportationServiceProvider, TspPerformance,
};
use crate::engine::band_assigner::BandAssignment;
use crate::engine::error::AwardQueueError;
use crate::engine::logger::QueueLogger;
use crate::engine::orchestrator::RunSummary;
use crate::repository::{
    BlackoutDateRepository, ShipmentRepository, TdlRepository, TspPerformanceRepository,
    TspRepository,
};
use chrono::NaiveDate;
use rusqlite::{params, Connection};
use std::sync::{Arc, Mutex};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// 默认分配日期（落在默认绩效周期内）
pub fn award_date() -> NaiveDate {
    date(2018, 6, 1)
}

pub fn setup_test_db() -> Arc<Mutex<Connection>> {
    let conn = Connection::open_in_memory().unwrap();
    configure_sqlite_connection(&conn).unwrap();
    init_schema(&conn).unwrap();
    Arc::new(Mutex::new(conn))
}

pub fn seed_tdl(conn: &Arc<Mutex<Connection>>, tdl_id: &str) {
    TdlRepository::new(conn.clone())
        .insert(&TrafficDistributionList {
            tdl_id: tdl_id.to_string(),
            source_rate_area: "US53".to_string(),
            destination_region: "4".to_string(),
            code_of_service: "D".to_string(),
        })
        .unwrap();
}

pub fn seed_tsp(conn: &Arc<Mutex<Connection>>, tsp_id: &str) {
    insert_tsp(conn, tsp_id, true);
}

/// 未登记承运商
pub fn seed_unenrolled_tsp(conn: &Arc<Mutex<Connection>>, tsp_id: &str) {
    insert_tsp(conn, tsp_id, false);
}

fn insert_tsp(conn: &Arc<Mutex<Connection>>, tsp_id: &str, enrolled: bool) {
    TspRepository::new(conn.clone())
        .insert(&TransportationServiceProvider {
            tsp_id: tsp_id.to_string(),
            standard_carrier_alpha_code: format!("SCAC-{}", tsp_id),
            name: None,
            enrolled,
        })
        .unwrap();
}

/// 默认绩效记录: 绩效周期与费率周期均为 2018 全年
pub fn performance(
    performance_id: &str,
    tsp_id: &str,
    tdl_id: &str,
    best_value_score: f64,
    quality_band: Option<QualityBand>,
) -> TspPerformance {
    TspPerformance {
        performance_id: performance_id.to_string(),
        tsp_id: tsp_id.to_string(),
        tdl_id: tdl_id.to_string(),
        best_value_score,
        quality_band,
        award_count: 0,
        performance_period_start: date(2018, 1, 1),
        performance_period_end: date(2018, 12, 31),
        rate_cycle_start: date(2018, 1, 1),
        rate_cycle_end: date(2018, 12, 31),
    }
}

pub fn insert_performance(conn: &Arc<Mutex<Connection>>, performance: &TspPerformance) {
    TspPerformanceRepository::new(conn.clone())
        .insert(performance)
        .unwrap();
}

pub fn seed_performance(
    conn: &Arc<Mutex<Connection>>,
    performance_id: &str,
    tsp_id: &str,
    tdl_id: &str,
    best_value_score: f64,
    quality_band: Option<QualityBand>,
) {
    insert_performance(
        conn,
        &performance(performance_id, tsp_id, tdl_id, best_value_score, quality_band),
    );
}

pub fn seed_shipment(
    conn: &Arc<Mutex<Connection>>,
    shipment_id: &str,
    tdl_id: Option<&str>,
    pickup_date: NaiveDate,
) {
    ShipmentRepository::new(conn.clone())
        .insert(&Shipment {
            shipment_id: shipment_id.to_string(),
            tdl_id: tdl_id.map(str::to_string),
            pickup_date,
            award_date: award_date(),
        })
        .unwrap();
}

pub fn seed_blackout(
    conn: &Arc<Mutex<Connection>>,
    blackout_id: &str,
    tsp_id: &str,
    start: NaiveDate,
    end: NaiveDate,
) {
    BlackoutDateRepository::new(conn.clone())
        .insert(&BlackoutDate {
            blackout_id: blackout_id.to_string(),
            tsp_id: tsp_id.to_string(),
            start_blackout_date: start,
            end_blackout_date: end,
        })
        .unwrap();
}

pub fn award_count(conn: &Arc<Mutex<Connection>>, performance_id: &str) -> i64 {
    conn.lock()
        .unwrap()
        .query_row(
            "SELECT award_count FROM tsp_performance WHERE performance_id = ?1",
            params![performance_id],
            |row| row.get(0),
        )
        .unwrap()
}

pub fn count_awards(conn: &Arc<Mutex<Connection>>, shipment_id: &str, administrative: bool) -> i64 {
    conn.lock()
        .unwrap()
        .query_row(
            "SELECT COUNT(*) FROM shipment_award WHERE shipment_id = ?1 AND administrative_shipment = ?2",
            params![shipment_id, administrative],
            |row| row.get(0),
        )
        .unwrap()
}

// ==========================================
// RecordingQueueLogger - 记录事件的日志端口
// ==========================================
#[derive(Debug, Default)]
pub struct RecordingQueueLogger {
    events: Mutex<Vec<String>>,
}

impl RecordingQueueLogger {
    pub fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }

    /// 失败运单 ID（按发生顺序）
    pub fn failed_shipments(&self) -> Vec<String> {
        self.events()
            .iter()
            .filter_map(|e| e.strip_prefix("failed:"))
            .map(|rest| rest.split(':').next().unwrap_or_default().to_string())
            .collect()
    }

    fn push(&self, event: String) {
        self.events.lock().unwrap().push(event);
    }
}

impl QueueLogger for RecordingQueueLogger {
    fn run_started(&self) {
        self.push("run_started".to_string());
    }

    fn band_assigned(&self, report: &BandAssignment) {
        self.push(format!("banded:{}:{}", report.group.tdl_id, report.banded));
    }

    fn award_recorded(&self, shipment: &Shipment, award: &ShipmentAward, attempt: usize) {
        self.push(format!(
            "award:{}:{}:{}:{}",
            shipment.shipment_id, award.tsp_id, award.administrative_shipment, attempt
        ));
    }

    fn shipment_failed(&self, shipment: &Shipment, error: &AwardQueueError) {
        self.push(format!("failed:{}:{}", shipment.shipment_id, error.kind()));
    }

    fn run_finished(&self, summary: &RunSummary) {
        self.push(format!("run_finished:{}", summary.awards.awarded));
    }
}
