// ==========================================
// 承运商分配队列 - 承运商与绩效领域模型
// ==========================================
// 红线: award_count 只增不减
// 红线: quality_band 只能从 None 变为 Some, 不得改写
// ==========================================

use crate::domain::types::QualityBand;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// TransportationServiceProvider - 承运商 (TSP)
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransportationServiceProvider {
    pub tsp_id: String,
    pub standard_carrier_alpha_code: String, // SCAC
    pub name: Option<String>,
    pub enrolled: bool, // 未登记的承运商不参与分档与分配
}

// ==========================================
// TspPerformance - 承运商在某 TDL 上的绩效
// ==========================================
// 每条记录唯一对应一个 (TSP, TDL, 绩效周期, 费率周期) 组合
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TspPerformance {
    pub performance_id: String,
    pub tsp_id: String,
    pub tdl_id: String,

    // ===== 排名依据 =====
    pub best_value_score: f64,             // BVS
    pub quality_band: Option<QualityBand>, // 未分档时为 None

    // ===== 分配计数 =====
    pub award_count: i64,

    // ===== 绩效周期 (闭区间) =====
    pub performance_period_start: NaiveDate,
    pub performance_period_end: NaiveDate,

    // ===== 费率周期 (闭区间, 约束提货日期) =====
    pub rate_cycle_start: NaiveDate,
    pub rate_cycle_end: NaiveDate,
}

// ==========================================
// TspPerformanceGroup - 分档组
// ==========================================
// 同一 TDL、同一绩效周期、同一费率周期的记录一起排名分档
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TspPerformanceGroup {
    pub tdl_id: String,
    pub performance_period_start: NaiveDate,
    pub performance_period_end: NaiveDate,
    pub rate_cycle_start: NaiveDate,
    pub rate_cycle_end: NaiveDate,
}

