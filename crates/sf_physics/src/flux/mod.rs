// crates/sf_physics/src/flux/mod.rs

//! 界面数值通量
//!
//! - [`convective`]: 对流（无粘）通量，特征空间内迎风重构
//! - [`diffusive`]: 扩散（粘性）通量，中心差分
//! - [`weno`]: WENO 重构核
//!
//! 通量向量是瞬态量：由重构器产出，立即被时间推进消费，从不存储。

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

pub mod convective;
pub mod diffusive;
mod weno;

/// 界面通量向量（与守恒向量同维）
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Flux(pub [f64; 5]);

impl Flux {
    /// 零通量
    pub const ZERO: Self = Self([0.0; 5]);
}

impl Index<usize> for Flux {
    type Output = f64;

    #[inline]
    fn index(&self, i: usize) -> &f64 {
        &self.0[i]
    }
}

impl IndexMut<usize> for Flux {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut f64 {
        &mut self.0[i]
    }
}

/// 对流通量重构格式
///
/// 可互换的重构策略：消费一段守恒状态模板与局部特征向量基，
/// 产出界面上的特征通量。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ReconstructionScheme {
    /// 三阶 WENO（四点模板）
    Weno3,
    /// 五阶 WENO-JS（六点模板）
    #[default]
    Weno5,
}

impl ReconstructionScheme {
    /// 格式要求的最小虚网格深度
    ///
    /// 内部区已对边界收缩一个节点，模板在此基础上仍需伸入的层数。
    #[inline]
    pub const fn required_ghost_depth(self) -> usize {
        match self {
            ReconstructionScheme::Weno3 => 1,
            ReconstructionScheme::Weno5 => 2,
        }
    }

    /// 格式名称
    pub const fn name(self) -> &'static str {
        match self {
            ReconstructionScheme::Weno3 => "WENO3",
            ReconstructionScheme::Weno5 => "WENO5",
        }
    }
}
