// crates/sf_physics/src/flux/weno.rs

//! WENO 重构核
//!
//! 加权本质无振荡 (Weighted Essentially Non-Oscillatory) 插值：
//! 候选子模板按光滑度指标加权组合，在光滑区恢复最高阶精度，
//! 在间断附近自动压低跨间断子模板的权重。
//!
//! 输入序列一律按迎风方向排列（上游在前），左行波的重构由
//! 调用方先把模板倒序。

/// 光滑度指标正则化参数
const WENO_EPSILON: f64 = 1.0e-6;

/// 五阶 WENO-JS 重构
///
/// `g` 为按迎风序排列的五个节点值，`g[2]` 是界面上游紧邻节点，
/// 返回界面处的重构值。
#[inline]
pub fn weno5(g: &[f64; 5]) -> f64 {
    // 三个候选模板的光滑度指标 (Jiang-Shu)
    let beta0 = 13.0 / 12.0 * (g[0] - 2.0 * g[1] + g[2]).powi(2)
        + 0.25 * (g[0] - 4.0 * g[1] + 3.0 * g[2]).powi(2);
    let beta1 =
        13.0 / 12.0 * (g[1] - 2.0 * g[2] + g[3]).powi(2) + 0.25 * (g[1] - g[3]).powi(2);
    let beta2 = 13.0 / 12.0 * (g[2] - 2.0 * g[3] + g[4]).powi(2)
        + 0.25 * (3.0 * g[2] - 4.0 * g[3] + g[4]).powi(2);

    // 线性权 {1/10, 6/10, 3/10}
    let alpha0 = 0.1 / ((WENO_EPSILON + beta0) * (WENO_EPSILON + beta0));
    let alpha1 = 0.6 / ((WENO_EPSILON + beta1) * (WENO_EPSILON + beta1));
    let alpha2 = 0.3 / ((WENO_EPSILON + beta2) * (WENO_EPSILON + beta2));
    let sum = alpha0 + alpha1 + alpha2;

    // 候选模板上的三阶插值
    let q0 = (2.0 * g[0] - 7.0 * g[1] + 11.0 * g[2]) / 6.0;
    let q1 = (-g[1] + 5.0 * g[2] + 2.0 * g[3]) / 6.0;
    let q2 = (2.0 * g[2] + 5.0 * g[3] - g[4]) / 6.0;

    (alpha0 * q0 + alpha1 * q1 + alpha2 * q2) / sum
}

/// 三阶 WENO 重构
///
/// `g` 为按迎风序排列的三个节点值，`g[1]` 是界面上游紧邻节点。
#[inline]
pub fn weno3(g: &[f64; 3]) -> f64 {
    let beta0 = (g[1] - g[0]) * (g[1] - g[0]);
    let beta1 = (g[2] - g[1]) * (g[2] - g[1]);

    // 线性权 {1/3, 2/3}
    let alpha0 = (1.0 / 3.0) / ((WENO_EPSILON + beta0) * (WENO_EPSILON + beta0));
    let alpha1 = (2.0 / 3.0) / ((WENO_EPSILON + beta1) * (WENO_EPSILON + beta1));

    let q0 = 0.5 * (-g[0] + 3.0 * g[1]);
    let q1 = 0.5 * (g[1] + g[2]);

    (alpha0 * q0 + alpha1 * q1) / (alpha0 + alpha1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_weno5_constant_is_exact() {
        let g = [2.5; 5];
        assert_relative_eq!(weno5(&g), 2.5, max_relative = 1e-15);
    }

    #[test]
    fn test_weno3_constant_is_exact() {
        let g = [1.25; 3];
        assert_relative_eq!(weno3(&g), 1.25, max_relative = 1e-15);
    }

    #[test]
    fn test_weno5_linear_is_exact() {
        // 线性数据：所有光滑度指标同为零，组合权退化为线性权，
        // 界面值为节点间中点值
        let g = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_relative_eq!(weno5(&g), 3.5, max_relative = 1e-12);
    }

    #[test]
    fn test_weno3_linear_is_exact() {
        let g = [1.0, 2.0, 3.0];
        assert_relative_eq!(weno3(&g), 2.5, max_relative = 1e-12);
    }

    #[test]
    fn test_weno5_discontinuity_no_overshoot() {
        // 阶跃数据：重构值应靠近上游侧，不产生大幅过冲
        let g = [1.0, 1.0, 1.0, 0.0, 0.0];
        let r = weno5(&g);
        assert!(r > 0.9 && r < 1.1, "重构值 {} 偏离上游台阶", r);
    }
}
