// ==========================================
// 测试数据构建器 - 用于集成测试
// ==========================================

use chrono::NaiveDate;
use tsp_award_queue::domain::{
    BlackoutDate, QualityBand, Shipment, TrafficDistributionList, TransportationServiceProvider,
    TspPerformance,
};
use tsp_award_queue::engine::AwardQueueRepositories;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// ==========================================
// TspPerformance 构建器
// ==========================================

pub struct PerformanceBuilder {
    performance_id: String,
    tsp_id: String,
    tdl_id: String,
    best_value_score: f64,
    quality_band: Option<QualityBand>,
    award_count: i64,
    period_start: NaiveDate,
    period_end: NaiveDate,
    rate_cycle_start: NaiveDate,
    rate_cycle_end: NaiveDate,
}

impl PerformanceBuilder {
    pub fn new(performance_id: &str, tsp_id: &str, tdl_id: &str) -> Self {
        Self {
            performance_id: performance_id.to_string(),
            tsp_id: tsp_id.to_string(),
            tdl_id: tdl_id.to_string(),
            best_value_score: 50.0,
            quality_band: None,
            award_count: 0,
            period_start: date(2018, 1, 1),
            period_end: date(2018, 12, 31),
            rate_cycle_start: date(2018, 1, 1),
            rate_cycle_end: date(2018, 12, 31),
        }
    }

    pub fn bvs(mut self, score: f64) -> Self {
        self.best_value_score = score;
        self
    }

    pub fn band(mut self, band: QualityBand) -> Self {
        self.quality_band = Some(band);
        self
    }

    pub fn award_count(mut self, count: i64) -> Self {
        self.award_count = count;
        self
    }

    pub fn period(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.period_start = start;
        self.period_end = end;
        self
    }

    pub fn rate_cycle(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.rate_cycle_start = start;
        self.rate_cycle_end = end;
        self
    }

    pub fn build(self) -> TspPerformance {
        TspPerformance {
            performance_id: self.performance_id,
            tsp_id: self.tsp_id,
            tdl_id: self.tdl_id,
            best_value_score: self.best_value_score,
            quality_band: self.quality_band,
            award_count: self.award_count,
            performance_period_start: self.period_start,
            performance_period_end: self.period_end,
            rate_cycle_start: self.rate_cycle_start,
            rate_cycle_end: self.rate_cycle_end,
        }
    }
}

// ==========================================
// Shipment 构建器
// ==========================================

pub struct ShipmentBuilder {
    shipment_id: String,
    tdl_id: Option<String>,
    pickup_date: NaiveDate,
    award_date: NaiveDate,
}

impl ShipmentBuilder {
    pub fn new(shipment_id: &str, tdl_id: &str) -> Self {
        Self {
            shipment_id: shipment_id.to_string(),
            tdl_id: Some(tdl_id.to_string()),
            pickup_date: date(2018, 6, 15),
            award_date: date(2018, 6, 1),
        }
    }

    pub fn without_tdl(mut self) -> Self {
        self.tdl_id = None;
        self
    }

    pub fn pickup(mut self, pickup_date: NaiveDate) -> Self {
        self.pickup_date = pickup_date;
        self
    }

    pub fn awarded_on(mut self, award_date: NaiveDate) -> Self {
        self.award_date = award_date;
        self
    }

    pub fn build(self) -> Shipment {
        Shipment {
            shipment_id: self.shipment_id,
            tdl_id: self.tdl_id,
            pickup_date: self.pickup_date,
            award_date: self.award_date,
        }
    }
}

// ==========================================
// 种子数据写入
// ==========================================

pub fn seed_tdl(repos: &AwardQueueRepositories, tdl_id: &str) {
    repos
        .tdl_repo
        .insert(&TrafficDistributionList {
            tdl_id: tdl_id.to_string(),
            source_rate_area: "US62".to_string(),
            destination_region: "11".to_string(),
            code_of_service: "2".to_string(),
        })
        .unwrap();
}

pub fn seed_tsp(repos: &AwardQueueRepositories, tsp_id: &str) {
    insert_tsp(repos, tsp_id, true);
}

pub fn seed_unenrolled_tsp(repos: &AwardQueueRepositories, tsp_id: &str) {
    insert_tsp(repos, tsp_id, false);
}

fn insert_tsp(repos: &AwardQueueRepositories, tsp_id: &str, enrolled: bool) {
    repos
        .tsp_repo
        .insert(&TransportationServiceProvider {
            tsp_id: tsp_id.to_string(),
            standard_carrier_alpha_code: format!("S{}", tsp_id),
            name: Some(format!("Carrier {}", tsp_id)),
            enrolled,
        })
        .unwrap();
}

pub fn seed_performance(repos: &AwardQueueRepositories, performance: PerformanceBuilder) {
    repos.performance_repo.insert(&performance.build()).unwrap();
}

pub fn seed_shipment(repos: &AwardQueueRepositories, shipment: ShipmentBuilder) {
    repos.shipment_repo.insert(&shipment.build()).unwrap();
}

pub fn seed_blackout(
    repos: &AwardQueueRepositories,
    blackout_id: &str,
    tsp_id: &str,
    start: NaiveDate,
    end: NaiveDate,
) {
    repos
        .blackout_repo
        .insert(&BlackoutDate {
            blackout_id: blackout_id.to_string(),
            tsp_id: tsp_id.to_string(),
            start_blackout_date: start,
            end_blackout_date: end,
        })
        .unwrap();
}
