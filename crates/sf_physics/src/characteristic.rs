// crates/sf_physics/src/characteristic.rs

//! 通量雅可比矩阵的特征分解
//!
//! 沿某一轴的通量雅可比矩阵在界面状态处的特征值为
//! `{vn-c, vn, vn, vn, vn+c}`（vn 为该轴法向速度分量），左右
//! 特征向量矩阵互逆。把通量投影到特征空间后按波族迎风，再投影
//! 回守恒空间，是高阶激波捕捉格式的基础。
//!
//! 两条代数约定贯穿本模块，测试必须覆盖：
//! 1. `L · R = I`（浮点容差内），对任意有效界面状态、任意轴成立；
//! 2. 特征值分裂满足 `Λ⁺ + Λ⁻ = Λ`（精确），且 `Λ⁺ ≥ 0`、`Λ⁻ ≤ 0`。
//!
//! 三个轴的矩阵公式不同（法向/切向速度角色轮换），按轴在单个
//! `match` 中列表给出，一个 `{轴}` 组合一份实现。

use serde::{Deserialize, Serialize};
use sf_grid::Axis;

use crate::state::FaceState;

/// Steger-Warming 平滑分裂的光滑化参数
const STEGER_WARMING_EPSILON: f64 = 1.0e-3;

/// 沿 `axis` 的通量雅可比特征值 `{vn-c, vn, vn, vn, vn+c}`
#[inline]
pub fn eigenvalues(axis: Axis, face: &FaceState) -> [f64; 5] {
    let vn = match axis {
        Axis::X => face.u,
        Axis::Y => face.v,
        Axis::Z => face.w,
    };
    [vn - face.c, vn, vn, vn, vn + face.c]
}

/// 特征值分裂方法
///
/// 把每个特征值分解为非负（右行波）与非正（左行波）两部分，
/// 两部分之和精确等于原特征值，保证守恒的迎风通量分裂。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EigenSplitter {
    /// 局部 Lax-Friedrichs：全部特征值共用局部谱半径上界
    #[default]
    LaxFriedrichs,
    /// 平滑化 Steger-Warming：逐特征值光滑分裂，Λ≈0 附近无折点
    StegerWarming,
}

impl EigenSplitter {
    /// 分裂特征值向量，返回 (Λ⁺, Λ⁻)
    pub fn split(self, lambda: &[f64; 5]) -> ([f64; 5], [f64; 5]) {
        let mut plus = [0.0; 5];
        let mut minus = [0.0; 5];
        match self {
            EigenSplitter::LaxFriedrichs => {
                // 局部谱半径上界 |vn| + c
                let alpha = lambda[2].abs() + lambda[4] - lambda[2];
                for row in 0..5 {
                    plus[row] = 0.5 * (lambda[row] + alpha);
                    minus[row] = 0.5 * (lambda[row] - alpha);
                }
            }
            EigenSplitter::StegerWarming => {
                let eps2 = STEGER_WARMING_EPSILON * STEGER_WARMING_EPSILON;
                for row in 0..5 {
                    let root = (lambda[row] * lambda[row] + eps2).sqrt();
                    plus[row] = 0.5 * (lambda[row] + root);
                    minus[row] = 0.5 * (lambda[row] - root);
                }
            }
        }
        (plus, minus)
    }
}

/// 左特征向量矩阵（行向量构成 L，满足 L·R = I）
pub fn left_eigenvectors(axis: Axis, gamma: f64, face: &FaceState) -> [[f64; 5]; 5] {
    let (u, v, w, c) = (face.u, face.v, face.w, face.c);
    let q = face.kinetic();
    let b = (gamma - 1.0) / (2.0 * c * c);
    let d = 1.0 / (2.0 * c);
    match axis {
        Axis::X => [
            [b * q + d * u, -b * u - d, -b * v, -b * w, b],
            [-2.0 * b * q + 1.0, 2.0 * b * u, 2.0 * b * v, 2.0 * b * w, -2.0 * b],
            [-2.0 * b * q * v, 2.0 * b * v * u, 2.0 * b * v * v + 1.0, 2.0 * b * w * v, -2.0 * b * v],
            [-2.0 * b * q * w, 2.0 * b * w * u, 2.0 * b * w * v, 2.0 * b * w * w + 1.0, -2.0 * b * w],
            [b * q - d * u, -b * u + d, -b * v, -b * w, b],
        ],
        Axis::Y => [
            [b * q + d * v, -b * u, -b * v - d, -b * w, b],
            [-2.0 * b * q * u, 2.0 * b * u * u + 1.0, 2.0 * b * v * u, 2.0 * b * w * u, -2.0 * b * u],
            [-2.0 * b * q + 1.0, 2.0 * b * u, 2.0 * b * v, 2.0 * b * w, -2.0 * b],
            [-2.0 * b * q * w, 2.0 * b * w * u, 2.0 * b * w * v, 2.0 * b * w * w + 1.0, -2.0 * b * w],
            [b * q - d * v, -b * u, -b * v + d, -b * w, b],
        ],
        Axis::Z => [
            [b * q + d * w, -b * u, -b * v, -b * w - d, b],
            [-2.0 * b * q * u, 2.0 * b * u * u + 1.0, 2.0 * b * v * u, 2.0 * b * w * u, -2.0 * b * u],
            [-2.0 * b * q * v, 2.0 * b * v * u, 2.0 * b * v * v + 1.0, 2.0 * b * w * v, -2.0 * b * v],
            [-2.0 * b * q + 1.0, 2.0 * b * u, 2.0 * b * v, 2.0 * b * w, -2.0 * b],
            [b * q - d * w, -b * u, -b * v, -b * w + d, b],
        ],
    }
}

/// 右特征向量矩阵（列向量为波形，与 L 互逆）
pub fn right_eigenvectors(axis: Axis, face: &FaceState) -> [[f64; 5]; 5] {
    let (u, v, w, h_t, c) = (face.u, face.v, face.w, face.h_t, face.c);
    let q = face.kinetic();
    match axis {
        Axis::X => [
            [1.0, 1.0, 0.0, 0.0, 1.0],
            [u - c, u, 0.0, 0.0, u + c],
            [v, 0.0, 1.0, 0.0, v],
            [w, 0.0, 0.0, 1.0, w],
            [h_t - u * c, u * u - q, v, w, h_t + u * c],
        ],
        Axis::Y => [
            [1.0, 0.0, 1.0, 0.0, 1.0],
            [u, 1.0, 0.0, 0.0, u],
            [v - c, 0.0, v, 0.0, v + c],
            [w, 0.0, 0.0, 1.0, w],
            [h_t - v * c, u, v * v - q, w, h_t + v * c],
        ],
        Axis::Z => [
            [1.0, 0.0, 0.0, 1.0, 1.0],
            [u, 1.0, 0.0, 0.0, u],
            [v, 0.0, 1.0, 0.0, v],
            [w - c, 0.0, 0.0, w, w + c],
            [h_t - w * c, u, v, w * w - q, h_t + w * c],
        ],
    }
}

/// 5x5 矩阵与 5 维向量乘积
#[inline]
pub(crate) fn mat_vec(m: &[[f64; 5]; 5], v: &[f64; 5]) -> [f64; 5] {
    let mut out = [0.0; 5];
    for (row, m_row) in m.iter().enumerate() {
        out[row] = m_row[0] * v[0]
            + m_row[1] * v[1]
            + m_row[2] * v[2]
            + m_row[3] * v[3]
            + m_row[4] * v[4];
    }
    out
}
