// ==========================================
// 承运商分配队列 - 引擎层错误类型
// ==========================================
// 红线: 调用方按 kind() 显式匹配, 不做具体类型探测
// ==========================================

use crate::repository::error::RepositoryError;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

// ==========================================
// AwardQueueErrorKind - 错误分类标签
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AwardQueueErrorKind {
    /// TDL / TSP / 可用绩效记录缺失; 仅影响单个运单
    NotFound,
    /// 所有可用承运商均处于停运期; 仅影响单个运单
    CycleExhausted,
    /// 持久化失败; 传递给调用方
    Persistence,
    /// 质量分档失败; 终止整次运行
    BandAssignment,
}

impl AwardQueueErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AwardQueueErrorKind::NotFound => "not_found",
            AwardQueueErrorKind::CycleExhausted => "cycle_exhausted",
            AwardQueueErrorKind::Persistence => "persistence",
            AwardQueueErrorKind::BandAssignment => "band_assignment",
        }
    }
}

impl fmt::Display for AwardQueueErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ==========================================
// AwardQueueError - 引擎层错误
// ==========================================
#[derive(Error, Debug)]
pub enum AwardQueueError {
    #[error("{entity} 未找到: {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("运单 {shipment_id}: 尝试 {tries} 次后仍未找到不在停运期的承运商")]
    CycleExhausted { shipment_id: String, tries: usize },

    #[error("持久化失败: {0}")]
    Persistence(#[from] RepositoryError),

    #[error("质量分档失败 (tdl={}): {source}", tdl_id.as_deref().unwrap_or("-"))]
    BandAssignment {
        tdl_id: Option<String>,
        #[source]
        source: RepositoryError,
    },
}

impl AwardQueueError {
    /// 错误分类标签
    pub fn kind(&self) -> AwardQueueErrorKind {
        match self {
            AwardQueueError::NotFound { .. } => AwardQueueErrorKind::NotFound,
            AwardQueueError::CycleExhausted { .. } => AwardQueueErrorKind::CycleExhausted,
            AwardQueueError::Persistence(_) => AwardQueueErrorKind::Persistence,
            AwardQueueError::BandAssignment { .. } => AwardQueueErrorKind::BandAssignment,
        }
    }
}

/// Result 类型别名
pub type AwardQueueResult<T> = Result<T, AwardQueueError>;
