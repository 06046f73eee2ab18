// crates/sf_physics/src/flux/convective.rs

//! 对流通量
//!
//! 界面数值对流通量的构造流程：
//!
//! 1. 用对称平均得到界面 Roe 线性化状态；
//! 2. 在该状态处求特征值、分裂特征值、左右特征向量矩阵；
//! 3. 把模板上每个节点的守恒状态投影到特征空间，并乘以分裂后
//!    的特征值得到左行/右行特征通量；
//! 4. 右行部分沿迎风方向 WENO 重构，左行部分先倒序再重构；
//! 5. 用右特征向量矩阵把重构结果投影回守恒空间。
//!
//! 模板索引越界属于调用方的契约违规（见分区的有效范围），
//! 此处不做检查。

use sf_grid::{Axis, Conserved};

use crate::characteristic::{eigenvalues, left_eigenvectors, mat_vec, right_eigenvectors};
use crate::flux::weno::{weno3, weno5};
use crate::flux::{Flux, ReconstructionScheme};
use crate::model::FlowModel;
use crate::state::{pressure, FaceState};

/// 沿 `axis` 的物理（未迎风）Euler 通量
pub fn convective_flux(axis: Axis, gamma: f64, cons: &Conserved) -> Flux {
    let rho = cons[0];
    let u = cons[1] / rho;
    let v = cons[2] / rho;
    let w = cons[3] / rho;
    let e_t = cons[4] / rho;
    let p = pressure(gamma, cons);
    let vn = match axis {
        Axis::X => u,
        Axis::Y => v,
        Axis::Z => w,
    };
    let mut f = Flux([
        rho * vn,
        rho * vn * u,
        rho * vn * v,
        rho * vn * w,
        (rho * e_t + p) * vn,
    ]);
    // 压力项出现在法向动量分量
    f[1 + axis.index()] += p;
    f
}

/// 节点 (k, j, i) 与其 +axis 邻居之间界面上的数值对流通量
///
/// `level` 为当前时间层的全场守恒状态，`n` 为含虚网格的各轴
/// 节点数。模板沿 `axis` 取 `[-2, +3]`（WENO5）或 `[-1, +2]`
/// （WENO3）范围的节点。
pub fn numerical_convective_flux(
    axis: Axis,
    k: usize,
    j: usize,
    i: usize,
    level: &[Conserved],
    n: [usize; 3],
    model: &FlowModel,
) -> Flux {
    let at = |m: i64| {
        let (dk, dj, di) = axis.offset();
        let kk = (k as i64 + m * dk) as usize;
        let jj = (j as i64 + m * dj) as usize;
        let ii = (i as i64 + m * di) as usize;
        level[(kk * n[1] + jj) * n[0] + ii]
    };

    // 界面线性化状态与特征系统
    let face = FaceState::average(model.averager, model.gamma, &at(0), &at(1));
    let lambda = eigenvalues(axis, &face);
    let (lambda_p, lambda_n) = model.splitter.split(&lambda);
    let l = left_eigenvectors(axis, model.gamma, &face);
    let r = right_eigenvectors(axis, &face);

    let mut ghat = [0.0; 5];
    match model.scheme {
        ReconstructionScheme::Weno5 => {
            // 模板特征状态 w_m = L·U_m，m ∈ [-2, 3]
            let mut w = [[0.0; 5]; 6];
            for (slot, m) in (-2..=3).enumerate() {
                w[slot] = mat_vec(&l, &at(m).0);
            }
            for row in 0..5 {
                let gp = [
                    lambda_p[row] * w[0][row],
                    lambda_p[row] * w[1][row],
                    lambda_p[row] * w[2][row],
                    lambda_p[row] * w[3][row],
                    lambda_p[row] * w[4][row],
                ];
                // 左行波迎风方向相反，模板倒序
                let gn = [
                    lambda_n[row] * w[5][row],
                    lambda_n[row] * w[4][row],
                    lambda_n[row] * w[3][row],
                    lambda_n[row] * w[2][row],
                    lambda_n[row] * w[1][row],
                ];
                ghat[row] = weno5(&gp) + weno5(&gn);
            }
        }
        ReconstructionScheme::Weno3 => {
            // 模板特征状态，m ∈ [-1, 2]
            let mut w = [[0.0; 5]; 4];
            for (slot, m) in (-1..=2).enumerate() {
                w[slot] = mat_vec(&l, &at(m).0);
            }
            for row in 0..5 {
                let gp = [
                    lambda_p[row] * w[0][row],
                    lambda_p[row] * w[1][row],
                    lambda_p[row] * w[2][row],
                ];
                let gn = [
                    lambda_n[row] * w[3][row],
                    lambda_n[row] * w[2][row],
                    lambda_n[row] * w[1][row],
                ];
                ghat[row] = weno3(&gp) + weno3(&gn);
            }
        }
    }

    Flux(mat_vec(&r, &ghat))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FlowModel;
    use approx::assert_relative_eq;

    const GAMMA: f64 = 1.4;

    #[test]
    fn test_convective_flux_axis_formulas() {
        let cons = Conserved([1.0, 0.5, -0.3, 0.2, 2.0]);
        let p = pressure(GAMMA, &cons);
        let (u, v, w) = (0.5, -0.3, 0.2);

        let fx = convective_flux(Axis::X, GAMMA, &cons);
        assert_relative_eq!(fx[0], u, max_relative = 1e-14);
        assert_relative_eq!(fx[1], u * u + p, max_relative = 1e-14);
        assert_relative_eq!(fx[2], u * v, max_relative = 1e-14);
        assert_relative_eq!(fx[3], u * w, max_relative = 1e-14);
        assert_relative_eq!(fx[4], (2.0 + p) * u, max_relative = 1e-14);

        let fy = convective_flux(Axis::Y, GAMMA, &cons);
        assert_relative_eq!(fy[0], v, max_relative = 1e-14);
        assert_relative_eq!(fy[1], v * u, max_relative = 1e-14);
        assert_relative_eq!(fy[2], v * v + p, max_relative = 1e-14);

        let fz = convective_flux(Axis::Z, GAMMA, &cons);
        assert_relative_eq!(fz[3], w * w + p, max_relative = 1e-14);
        assert_relative_eq!(fz[4], (2.0 + p) * w, max_relative = 1e-14);
    }

    #[test]
    fn test_numerical_flux_uniform_equals_physical() {
        // 均匀场上数值通量必须还原物理通量
        let cons = Conserved([1.0, 0.3, 0.1, -0.2, 2.0]);
        let n = [7, 7, 7];
        let level = vec![cons; n[0] * n[1] * n[2]];
        let model = FlowModel::default();
        let exact = convective_flux(Axis::X, model.gamma, &cons);
        let fhat =
            numerical_convective_flux(Axis::X, 3, 3, 3, &level, n, &model);
        for c in 0..5 {
            assert_relative_eq!(fhat[c], exact[c], epsilon = 1e-12, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_numerical_flux_translation_invariance() {
        // 同一模板数据在不同位置得到完全相同的通量
        let n = [9, 5, 5];
        let mut level = vec![Conserved([1.0, 0.0, 0.0, 0.0, 2.0]); n[0] * n[1] * n[2]];
        for i in 0..n[0] {
            let rho = 1.0 + 0.05 * (i % 3) as f64;
            for k in 0..n[2] {
                for j in 0..n[1] {
                    level[(k * n[1] + j) * n[0] + i] = Conserved([rho, 0.1, 0.0, 0.0, 2.0]);
                }
            }
        }
        let model = FlowModel::default();
        let f1 = numerical_convective_flux(Axis::X, 1, 2, 3, &level, n, &model);
        let f2 = numerical_convective_flux(Axis::X, 3, 2, 3, &level, n, &model);
        for c in 0..5 {
            assert_eq!(f1[c], f2[c]);
        }
    }
}
