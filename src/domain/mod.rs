// ==========================================
// 承运商分配队列 - 领域模型层
// ==========================================
// 职责: 定义领域实体、类型
// 红线: 不含数据访问逻辑,不含引擎逻辑
// ==========================================

pub mod blackout;
pub mod shipment;
pub mod tdl;
pub mod tsp;
pub mod types;

// 重导出核心类型
pub use blackout::BlackoutDate;
pub use shipment::{Shipment, ShipmentAward};
pub use tdl::TrafficDistributionList;
pub use tsp::{TransportationServiceProvider, TspPerformance, TspPerformanceGroup};
pub use types::QualityBand;
