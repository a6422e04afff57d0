// ==========================================
// 承运商分配队列 - 日志端口
// ==========================================
// 职责: 定义引擎事件日志 trait，由构造方注入
// 说明: 引擎内部不直接写全局日志; 默认实现转发到 tracing
// ==========================================

use crate::domain::shipment::{Shipment, ShipmentAward};
use crate::engine::band_assigner::BandAssignment;
use crate::engine::error::{AwardQueueError, AwardQueueErrorKind};
use crate::engine::orchestrator::RunSummary;
use tracing::{debug, error, info, warn};

/// 分配队列日志端口
///
/// # 实现说明
/// - `TracingQueueLogger`: 结构化 tracing 事件（默认）
/// - `NoOpQueueLogger`: 丢弃全部事件
pub trait QueueLogger: Send + Sync {
    /// 运行开始
    fn run_started(&self);

    /// 一个 TDL 完成质量分档
    fn band_assigned(&self, report: &BandAssignment);

    /// 写入一条分配记录（attempt 从 1 开始计数）
    fn award_recorded(&self, shipment: &Shipment, award: &ShipmentAward, attempt: usize);

    /// 单个运单分配失败（批处理继续）
    fn shipment_failed(&self, shipment: &Shipment, error: &AwardQueueError);

    /// 运行结束
    fn run_finished(&self, summary: &RunSummary);
}

// ==========================================
// TracingQueueLogger - tracing 适配
// ==========================================
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingQueueLogger;

impl QueueLogger for TracingQueueLogger {
    fn run_started(&self) {
        info!("分配队列运行开始");
    }

    fn band_assigned(&self, report: &BandAssignment) {
        info!(
            tdl_id = %report.group.tdl_id,
            performance_period_start = %report.group.performance_period_start,
            rate_cycle_start = %report.group.rate_cycle_start,
            banded = report.banded,
            tsps_per_band = ?report.tsps_per_band,
            "分档组质量分档完成"
        );
    }

    fn award_recorded(&self, shipment: &Shipment, award: &ShipmentAward, attempt: usize) {
        if award.administrative_shipment {
            debug!(
                shipment_id = %shipment.shipment_id,
                tsp_id = %award.tsp_id,
                pickup_date = %shipment.pickup_date,
                attempt,
                "承运商处于停运期, 记录行政性分配"
            );
        } else {
            info!(
                shipment_id = %shipment.shipment_id,
                tsp_id = %award.tsp_id,
                award_id = %award.award_id,
                attempt,
                "运单分配完成"
            );
        }
    }

    fn shipment_failed(&self, shipment: &Shipment, err: &AwardQueueError) {
        match err.kind() {
            AwardQueueErrorKind::NotFound | AwardQueueErrorKind::CycleExhausted => warn!(
                shipment_id = %shipment.shipment_id,
                kind = %err.kind(),
                error = %err,
                "运单分配失败, 继续处理下一运单"
            ),
            AwardQueueErrorKind::Persistence | AwardQueueErrorKind::BandAssignment => error!(
                shipment_id = %shipment.shipment_id,
                kind = %err.kind(),
                error = %err,
                "运单分配失败, 继续处理下一运单"
            ),
        }
    }

    fn run_finished(&self, summary: &RunSummary) {
        info!(
            tdls_banded = summary.band_assignments.len(),
            attempted = summary.awards.attempted,
            awarded = summary.awards.awarded,
            administrative_awards = summary.awards.administrative_awards,
            failed = summary.awards.failed(),
            "分配队列运行结束"
        );
    }
}

// ==========================================
// NoOpQueueLogger - 空实现
// ==========================================
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOpQueueLogger;

impl QueueLogger for NoOpQueueLogger {
    fn run_started(&self) {}
    fn band_assigned(&self, _report: &BandAssignment) {}
    fn award_recorded(&self, _shipment: &Shipment, _award: &ShipmentAward, _attempt: usize) {}
    fn shipment_failed(&self, _shipment: &Shipment, _error: &AwardQueueError) {}
    fn run_finished(&self, _summary: &RunSummary) {}
}
