// crates/sf_physics/src/lib.rs

//! ShockFlow 物理求解层
//!
//! 在块结构网格上用有限体积法推进可压缩 Navier-Stokes 方程，包括：
//! - 守恒量/原始量变换与界面对称平均 (state)
//! - 通量雅可比矩阵的特征分解与特征值分裂 (characteristic)
//! - 对流通量的特征空间高阶重构与扩散通量的中心差分 (flux)
//! - 维度分裂的三阶 SSP Runge-Kutta 时间推进 (engine)
//! - 外部边界处理方接口与参考实现 (boundary)
//! - 流体模型配置 (model)
//!
//! 边界条件的具体施加、浸入体几何处理、初始条件与文件 IO
//! 均不属于本 crate，由外部协作方完成。

pub mod boundary;
pub mod characteristic;
pub mod engine;
pub mod flux;
pub mod model;
pub mod state;

// 重导出常用类型
pub use boundary::{BoundaryTreatment, ExtrapolationBoundary, PeriodicBoundary};
pub use characteristic::EigenSplitter;
pub use engine::{CflController, TimeIntegrator};
pub use flux::{Flux, ReconstructionScheme};
pub use model::{FlowModel, ModelValidationError};
pub use state::{AverageMode, FaceState, Primitive};
