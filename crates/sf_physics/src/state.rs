// crates/sf_physics/src/state.rs

//! 守恒量与原始量变换
//!
//! 守恒向量 U = (ρ, ρu, ρv, ρw, ρeT) 是有限体积法实际推进的量；
//! 原始量 (ρ, u, v, w, p, T) 只在通量求值时临时重建，从不独立
//! 存储。界面上的 Roe 线性化状态（速度、总焓、声速的加权混合）
//! 与原始量语义不同，因此单独成类型 [`FaceState`]。
//!
//! 密度为零或为负时除法产生非有限结果；这是数值失稳的表现，
//! 本模块不做钳制或恢复，调用方需要在上游监控正定性。

use serde::{Deserialize, Serialize};
use sf_grid::Conserved;

/// 界面对称平均方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AverageMode {
    /// 算术平均（权比 D = 1）
    Arithmetic,
    /// 密度平方根加权的 Roe 平均（D = sqrt(ρR/ρL)）
    #[default]
    Roe,
}

/// 原始状态向量
///
/// 由守恒状态重建，瞬态使用。压力与温度同时携带，
/// 二者经由理想气体关系互相一致。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Primitive {
    /// 密度
    pub rho: f64,
    /// x 向速度
    pub u: f64,
    /// y 向速度
    pub v: f64,
    /// z 向速度
    pub w: f64,
    /// 压力
    pub p: f64,
    /// 温度
    pub t: f64,
}

impl Primitive {
    /// 由守恒状态重建原始状态
    ///
    /// `p = (γ-1)(ρeT - ½ρ|v|²)`，`T = p/(ρR)`。
    pub fn from_conserved(gamma: f64, gas_r: f64, cons: &Conserved) -> Self {
        let rho = cons[0];
        let u = cons[1] / rho;
        let v = cons[2] / rho;
        let w = cons[3] / rho;
        let p = (cons[4] - 0.5 * (cons[1] * cons[1] + cons[2] * cons[2] + cons[3] * cons[3]) / rho)
            * (gamma - 1.0);
        let t = p / (rho * gas_r);
        Self { rho, u, v, w, p, t }
    }

    /// 逆变换：由原始状态构造守恒状态
    ///
    /// 在精确算术下是 [`Self::from_conserved`] 的精确逆。
    pub fn to_conserved(&self, gamma: f64) -> Conserved {
        Conserved([
            self.rho,
            self.rho * self.u,
            self.rho * self.v,
            self.rho * self.w,
            0.5 * self.rho * (self.u * self.u + self.v * self.v + self.w * self.w)
                + self.p / (gamma - 1.0),
        ])
    }

    /// 声速 `c = sqrt(γp/ρ)`
    #[inline]
    pub fn sound_speed(&self, gamma: f64) -> f64 {
        (gamma * self.p / self.rho).sqrt()
    }

    /// 是否表示物理流动状态（ρ > 0 且 p ≥ 0，各分量有限）
    #[inline]
    pub fn is_physical(&self) -> bool {
        self.rho > 0.0
            && self.p >= 0.0
            && self.rho.is_finite()
            && self.u.is_finite()
            && self.v.is_finite()
            && self.w.is_finite()
            && self.p.is_finite()
    }
}

/// 压力，直接由守恒量计算（热路径上避免整套原始量重建）
#[inline]
pub fn pressure(gamma: f64, cons: &Conserved) -> f64 {
    (cons[4] - 0.5 * (cons[1] * cons[1] + cons[2] * cons[2] + cons[3] * cons[3]) / cons[0])
        * (gamma - 1.0)
}

/// 温度，直接由守恒量计算
#[inline]
pub fn temperature(cv: f64, cons: &Conserved) -> f64 {
    (cons[4] - 0.5 * (cons[1] * cons[1] + cons[2] * cons[2] + cons[3] * cons[3]) / cons[0])
        / (cons[0] * cv)
}

/// 界面 Roe 线性化状态
///
/// 两侧守恒状态按权比 D 混合得到的单一线性化点：速度、总焓按
/// `(xL + D·xR)/(1+D)` 混合，声速由混合后的总焓与动能恢复。
/// 通量雅可比矩阵的特征结构在该状态处求值，从而在每个界面上
/// 构成局部常系数的黎曼问题。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceState {
    /// x 向速度
    pub u: f64,
    /// y 向速度
    pub v: f64,
    /// z 向速度
    pub w: f64,
    /// 单位质量总焓
    pub h_t: f64,
    /// 声速
    pub c: f64,
}

impl FaceState {
    /// 由左右守恒状态计算界面状态
    pub fn average(mode: AverageMode, gamma: f64, ul: &Conserved, ur: &Conserved) -> Self {
        let rho_l = ul[0];
        let u_l = ul[1] / rho_l;
        let v_l = ul[2] / rho_l;
        let w_l = ul[3] / rho_l;
        let h_t_l = (ul[4] / rho_l) * gamma
            - 0.5 * (u_l * u_l + v_l * v_l + w_l * w_l) * (gamma - 1.0);
        let rho_r = ur[0];
        let u_r = ur[1] / rho_r;
        let v_r = ur[2] / rho_r;
        let w_r = ur[3] / rho_r;
        let h_t_r = (ur[4] / rho_r) * gamma
            - 0.5 * (u_r * u_r + v_r * v_r + w_r * w_r) * (gamma - 1.0);

        let d = match mode {
            AverageMode::Arithmetic => 1.0,
            AverageMode::Roe => (rho_r / rho_l).sqrt(),
        };
        let u = (u_l + d * u_r) / (1.0 + d);
        let v = (v_l + d * v_r) / (1.0 + d);
        let w = (w_l + d * w_r) / (1.0 + d);
        let h_t = (h_t_l + d * h_t_r) / (1.0 + d);
        let c = ((gamma - 1.0) * (h_t - 0.5 * (u * u + v * v + w * w))).sqrt();
        Self { u, v, w, h_t, c }
    }

    /// 单位质量动能 `q = ½|v|²`
    #[inline]
    pub fn kinetic(&self) -> f64 {
        0.5 * (self.u * self.u + self.v * self.v + self.w * self.w)
    }
}
