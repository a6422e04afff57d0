// ==========================================
// 承运商分配队列 - 运输分配清单领域模型
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// TrafficDistributionList - 运输分配清单 (TDL)
// ==========================================
// 用途: 将运单与有资格承运的 TSP 按线路/区域分组
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrafficDistributionList {
    pub tdl_id: String,             // 清单ID
    pub source_rate_area: String,   // 起运费率区
    pub destination_region: String, // 目的地区域
    pub code_of_service: String,    // 服务代码
}
