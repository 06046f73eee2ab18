// crates/sf_foundation/src/float.rs

//! 浮点比较与数值常量
//!
//! 浮点相等判断采用绝对容差与相对容差的混合策略：
//! 与零比较时相对容差无意义，需要绝对容差；与非零值比较时
//! 则应使用相对容差。两者取并集可以覆盖大多数场景。

use num_traits::Float;

/// 浮点相等性比较的默认相对容差
pub const DEFAULT_EPSILON: f64 = f64::EPSILON;

/// 接近零判断的绝对容差
pub const ZERO_THRESHOLD: f64 = 1e-30;

/// 混合容差的浮点相等比较
///
/// 差值小于绝对容差 `abs_tol` 直接判定相等（覆盖与零比较的场景），
/// 否则按两数中较大绝对值的 `rel_tol` 倍作相对比较。
#[inline]
pub fn approx_eq_with<T: Float>(x: T, y: T, rel_tol: T, abs_tol: T) -> bool {
    let diff = (x - y).abs();
    if diff <= abs_tol {
        return true;
    }
    let abs_max = x.abs().max(y.abs());
    diff <= rel_tol * abs_max
}

/// 使用默认容差的浮点相等比较
#[inline]
pub fn approx_eq(x: f64, y: f64) -> bool {
    approx_eq_with(x, y, DEFAULT_EPSILON, ZERO_THRESHOLD)
}
