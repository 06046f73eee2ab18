// crates/sf_foundation/src/error.rs

//! 错误处理模块，定义统一错误类型
//!
//! 提供 `SfError` 枚举和 `SfResult` 类型别名，用于整个项目的错误处理。
//!
//! # 设计原则
//!
//! 1. **一次检测**: 配置类错误在构造阶段检测一次，对求解过程是致命的
//! 2. **无重试**: 求解核心内部不存在重试语义，出错即向上传播
//! 3. **易用性**: 提供便捷的构造方法与检查辅助
//!
//! # 示例
//!
//! ```
//! use sf_foundation::error::{SfError, SfResult};
//!
//! fn check_gamma(gamma: f64) -> SfResult<()> {
//!     if gamma <= 1.0 {
//!         return Err(SfError::config("比热比必须大于 1"));
//!     }
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// 统一结果类型
pub type SfResult<T> = Result<T, SfError>;

/// ShockFlow 错误类型
///
/// 核心错误类型，用于整个项目。配置错误一经检测即视为致命，
/// 调用方不应尝试恢复。
#[derive(Error, Debug)]
pub enum SfError {
    /// 配置错误（退化的计算域、非法的格式选择等）
    #[error("配置错误: {message}")]
    Config {
        /// 具体错误信息
        message: String,
    },

    /// 无效输入
    #[error("无效的输入数据: {message}")]
    InvalidInput {
        /// 说明无效原因
        message: String,
    },

    /// 数据超出范围
    #[error("数据超出范围: {field}={value}, 期望范围=[{min}, {max}]")]
    OutOfRange {
        /// 字段名
        field: &'static str,
        /// 实际值
        value: f64,
        /// 最小允许值
        min: f64,
        /// 最大允许值
        max: f64,
    },

    /// 数组大小不匹配
    #[error("数组大小不匹配: {name} 期望{expected}, 实际{actual}")]
    SizeMismatch {
        /// 数据名称
        name: &'static str,
        /// 期望大小
        expected: usize,
        /// 实际大小
        actual: usize,
    },

    /// 数值计算错误
    #[error("数值计算错误: {message}")]
    Numerical {
        /// 失败原因
        message: String,
    },

    /// 边界处理错误
    #[error("边界处理错误: {message}")]
    Boundary {
        /// 失败原因
        message: String,
    },
}

impl SfError {
    /// 配置错误
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// 无效输入
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// 数据超出范围
    pub fn out_of_range(field: &'static str, value: f64, min: f64, max: f64) -> Self {
        Self::OutOfRange {
            field,
            value,
            min,
            max,
        }
    }

    /// 数组大小不匹配
    pub fn size_mismatch(name: &'static str, expected: usize, actual: usize) -> Self {
        Self::SizeMismatch {
            name,
            expected,
            actual,
        }
    }

    /// 数值计算错误
    pub fn numerical(message: impl Into<String>) -> Self {
        Self::Numerical {
            message: message.into(),
        }
    }

    /// 边界处理错误
    pub fn boundary(message: impl Into<String>) -> Self {
        Self::Boundary {
            message: message.into(),
        }
    }
}

// ========================================================================
// 验证辅助方法
// ========================================================================

impl SfError {
    /// 检查值是否在范围内
    #[inline]
    pub fn check_range(field: &'static str, value: f64, min: f64, max: f64) -> SfResult<()> {
        if value < min || value > max {
            Err(Self::out_of_range(field, value, min, max))
        } else {
            Ok(())
        }
    }

    /// 检查数组大小是否匹配
    #[inline]
    pub fn check_size(name: &'static str, expected: usize, actual: usize) -> SfResult<()> {
        if expected != actual {
            Err(Self::size_mismatch(name, expected, actual))
        } else {
            Ok(())
        }
    }
}
