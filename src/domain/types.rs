// ==========================================
// 承运商分配队列 - 领域类型定义
// ==========================================
// 红线: 质量分档一经分配不得改写
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 质量分档 (Quality Band)
// ==========================================
// 1 档最优, 4 档最差; 数据库中存储为 1..=4 的整数
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum QualityBand {
    Band1,
    Band2,
    Band3,
    Band4,
}

impl QualityBand {
    /// 全部分档，按优劣排列（最优在前）
    pub const ALL: [QualityBand; 4] = [
        QualityBand::Band1,
        QualityBand::Band2,
        QualityBand::Band3,
        QualityBand::Band4,
    ];

    /// 分档编号 (1..=4)
    pub fn number(&self) -> i64 {
        match self {
            QualityBand::Band1 => 1,
            QualityBand::Band2 => 2,
            QualityBand::Band3 => 3,
            QualityBand::Band4 => 4,
        }
    }

    /// 从 0 起始的数组下标
    pub fn index(&self) -> usize {
        (self.number() - 1) as usize
    }

    /// 从分档编号解析
    ///
    /// # 返回
    /// - Some(QualityBand): 编号在 1..=4 内
    /// - None: 编号越界
    pub fn from_number(number: i64) -> Option<Self> {
        match number {
            1 => Some(QualityBand::Band1),
            2 => Some(QualityBand::Band2),
            3 => Some(QualityBand::Band3),
            4 => Some(QualityBand::Band4),
            _ => None,
        }
    }
}

impl fmt::Display for QualityBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "QB{}", self.number())
    }
}
