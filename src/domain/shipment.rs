// ==========================================
// 承运商分配队列 - 运单与分配记录领域模型
// ==========================================
// 红线: ShipmentAward 创建后不可修改、不可删除
// 红线: 每个运单至多一条非行政性分配
// ==========================================

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

// ==========================================
// Shipment - 运单
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shipment {
    pub shipment_id: String,
    pub tdl_id: Option<String>, // 所属 TDL (外部维护, 可能缺失)
    pub pickup_date: NaiveDate, // 提货日期, 用于判定停运
    pub award_date: NaiveDate,  // 分配日期, 用于选择绩效周期
}

// ==========================================
// ShipmentAward - 运单分配记录
// ==========================================
// administrative_shipment = true 表示承运商处于停运期间的占位分配
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipmentAward {
    pub award_id: String,
    pub shipment_id: String,
    pub tsp_id: String,
    pub administrative_shipment: bool,
    pub created_at: NaiveDateTime,
}
