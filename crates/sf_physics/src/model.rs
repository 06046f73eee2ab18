// crates/sf_physics/src/model.rs

//! 流体模型配置
//!
//! 状态方程常数、输运参考量与数值方法选择器集中在一个配置
//! 结构中，构造一次后显式传给积分器，不存在进程级可变状态。
//! 校验在构造/使用前进行一次，非法配置是致命错误。

use serde::{Deserialize, Serialize};

use crate::characteristic::EigenSplitter;
use crate::flux::ReconstructionScheme;
use crate::state::AverageMode;

/// 模型参数校验错误
#[derive(Debug, Clone, thiserror::Error)]
pub enum ModelValidationError {
    /// 数值超出允许范围
    #[error("参数{field}超出范围({constraint})")]
    OutOfRange {
        /// 字段名
        field: &'static str,
        /// 违反的约束
        constraint: &'static str,
    },
}

/// 流体模型与数值方法配置
///
/// 所有字段公开，支持结构体更新语法按需覆盖默认值。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlowModel {
    /// 比热比 γ
    pub gamma: f64,
    /// 气体常数 R [J/(kg·K)]
    pub gas_r: f64,
    /// 定容比热 cv = R/(γ-1)
    pub cv: f64,
    /// 参考动力粘性（零表示无粘模式）
    pub ref_mu: f64,
    /// 参考温度 [K]，Sutherland 公式在有量纲温度处求值
    pub ref_t: f64,
    /// Prandtl 数
    pub prandtl: f64,
    /// 界面对称平均方式
    pub averager: AverageMode,
    /// 特征值分裂方法
    pub splitter: EigenSplitter,
    /// 对流通量重构格式
    pub scheme: ReconstructionScheme,
}

impl Default for FlowModel {
    fn default() -> Self {
        Self::air()
    }
}

impl FlowModel {
    /// 标准空气（无粘）
    pub fn air() -> Self {
        let gamma = 1.4;
        let gas_r = 287.058;
        Self {
            gamma,
            gas_r,
            cv: gas_r / (gamma - 1.0),
            ref_mu: 0.0,
            ref_t: 288.15,
            prandtl: 0.71,
            averager: AverageMode::default(),
            splitter: EigenSplitter::default(),
            scheme: ReconstructionScheme::default(),
        }
    }

    /// 指定气体常数构造，cv 自动保持 cv = R/(γ-1)
    pub fn with_gas(gamma: f64, gas_r: f64) -> Self {
        Self {
            gamma,
            gas_r,
            cv: gas_r / (gamma - 1.0),
            ..Self::air()
        }
    }

    /// 是否启用粘性项
    #[inline]
    pub fn is_viscous(&self) -> bool {
        self.ref_mu > 0.0
    }

    /// 校验配置有效性
    pub fn validate(&self) -> Result<(), ModelValidationError> {
        if !(self.gamma > 1.0) {
            return Err(ModelValidationError::OutOfRange {
                field: "gamma",
                constraint: "gamma > 1",
            });
        }
        if !(self.gas_r > 0.0) {
            return Err(ModelValidationError::OutOfRange {
                field: "gas_r",
                constraint: "gas_r > 0",
            });
        }
        if !(self.cv > 0.0) {
            return Err(ModelValidationError::OutOfRange {
                field: "cv",
                constraint: "cv > 0",
            });
        }
        if self.ref_mu < 0.0 {
            return Err(ModelValidationError::OutOfRange {
                field: "ref_mu",
                constraint: "ref_mu >= 0",
            });
        }
        if !(self.ref_t > 0.0) {
            return Err(ModelValidationError::OutOfRange {
                field: "ref_t",
                constraint: "ref_t > 0",
            });
        }
        if !(self.prandtl > 0.0) {
            return Err(ModelValidationError::OutOfRange {
                field: "prandtl",
                constraint: "prandtl > 0",
            });
        }
        Ok(())
    }
}
