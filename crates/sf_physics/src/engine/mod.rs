// crates/sf_physics/src/engine/mod.rs

//! 引擎核心：空间算子、时间推进与时间步控制
//!
//! - [`operator`]: 单轴单阶段的空间算子（通量散度 + 阶段线性组合）
//! - [`integrator`]: 维度分裂的三阶 SSP Runge-Kutta 推进
//! - [`timestep`]: 基于 CFL 条件的时间步控制

pub mod integrator;
pub(crate) mod operator;
pub mod timestep;

pub use integrator::TimeIntegrator;
pub use timestep::CflController;
