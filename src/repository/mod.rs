// ==========================================
// 承运商分配队列 - 数据仓储层
// ==========================================
// 红线: Repository 不含业务逻辑
// ==========================================
// 职责: 提供数据访问接口,屏蔽数据库细节
// 约束: 所有查询使用参数化,防止 SQL 注入
// 约定: `*_in(conn, ..)` 形式的函数在调用方持有的连接/事务内执行,
//       供需要跨表原子写入的引擎组件使用
// ==========================================

pub mod blackout_date_repo;
pub mod error;
pub mod shipment_award_repo;
pub mod shipment_repo;
pub mod tdl_repo;
pub mod tsp_performance_repo;
pub mod tsp_repo;

// 重导出核心仓储
pub use blackout_date_repo::BlackoutDateRepository;
pub use error::{RepositoryError, RepositoryResult};
pub use shipment_award_repo::ShipmentAwardRepository;
pub use shipment_repo::ShipmentRepository;
pub use tdl_repo::TdlRepository;
pub use tsp_performance_repo::TspPerformanceRepository;
pub use tsp_repo::TspRepository;
