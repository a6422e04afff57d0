// ==========================================
// 承运商分配队列 - 引擎层
// ==========================================
// 职责: 质量分档、候选排名、停运判定、运单分配
// 红线: Engine 不拼 SQL, 跨表写入经由 AwardLedger 事务
// ==========================================

pub mod award_loop;
pub mod band_assigner;
pub mod blackout;
pub mod error;
pub mod ledger;
pub mod logger;
pub mod orchestrator;
pub mod ranking;
pub mod repositories;

// 重导出核心引擎
pub use award_loop::{AwardLoopController, AwardSummary};
pub use band_assigner::{get_tsps_per_band, BandAssigner, BandAssignment, QUALITY_BAND_COUNT};
pub use blackout::BlackoutEvaluator;
pub use error::{AwardQueueError, AwardQueueErrorKind, AwardQueueResult};
pub use ledger::AwardLedger;
pub use logger::{NoOpQueueLogger, QueueLogger, TracingQueueLogger};
pub use orchestrator::{AwardQueue, RunSummary};
pub use ranking::{BandRoundsOracle, RankingOracle};
pub use repositories::AwardQueueRepositories;
