// crates/sf_physics/src/flux/diffusive.rs

//! 扩散（粘性）通量
//!
//! 界面上的粘性应力张量与热通量，中心差分构造：沿界面法向用
//! 前向差分，切向导数用共享该界面的四个邻居节点的 4 点平均，
//! 在不加宽模板的情况下估计交叉导数。
//!
//! 粘性系数用 Sutherland 公式在有量纲的界面温度处求值，热导率
//! 由 Prandtl 数导出。参考粘性为零时整个扩散通量被跳过（无粘
//! 模式的配置开关，不是错误）。

use glam::DVec3;
use sf_grid::{Axis, Conserved};

use crate::flux::Flux;
use crate::model::FlowModel;
use crate::state::temperature;

/// Sutherland 粘性律（输入为有量纲温度）
#[inline]
pub fn sutherland_viscosity(t: f64) -> f64 {
    1.458e-6 * t.powf(1.5) / (t + 110.4)
}

/// 节点 (k, j, i) 与其 +axis 邻居之间界面上的数值扩散通量
///
/// `dd` 为各轴网格距倒数。调用方保证模板（法向 +1、切向 ±1）
/// 不越界。
pub fn numerical_diffusive_flux(
    axis: Axis,
    k: usize,
    j: usize,
    i: usize,
    level: &[Conserved],
    n: [usize; 3],
    dd: DVec3,
    model: &FlowModel,
) -> Flux {
    // 相对 (k, j, i) 的节点访问；offs 以 (dk, dj, di) 计
    let at = |offs: (i64, i64, i64)| {
        let kk = (k as i64 + offs.0) as usize;
        let jj = (j as i64 + offs.1) as usize;
        let ii = (i as i64 + offs.2) as usize;
        level[(kk * n[1] + jj) * n[0] + ii]
    };
    let vel = |c: Conserved, comp: usize| c.0[1 + comp] / c.0[0];
    let add = |a: (i64, i64, i64), b: (i64, i64, i64)| (a.0 + b.0, a.1 + b.1, a.2 + b.2);
    let neg = |a: (i64, i64, i64)| (-a.0, -a.1, -a.2);

    let e_s = axis.offset();
    let dd_s = axis.component(dd);
    let s = axis.index();

    let here = at((0, 0, 0));
    let ahead = at(e_s);
    let t_here = temperature(model.cv, &here);
    let t_ahead = temperature(model.cv, &ahead);

    // 法向前向差分: ∂v/∂s 与 ∂T/∂s
    let mut dv_ds = [0.0; 3];
    for (comp, d) in dv_ds.iter_mut().enumerate() {
        *d = (vel(ahead, comp) - vel(here, comp)) * dd_s;
    }
    let dt_ds = (t_ahead - t_here) * dd_s;

    // 切向 4 点平均差分: ∂v_s/∂t 与 ∂v_t/∂t（后者进入速度散度）
    let mut dvs_dt = [0.0; 3];
    let mut dvt_dt = [0.0; 3];
    for t_axis in axis.tangents() {
        let e_t = t_axis.offset();
        let dd_t = t_axis.component(dd);
        let t = t_axis.index();
        let four_point = |comp: usize| {
            0.25 * (vel(at(e_t), comp) + vel(at(add(e_t, e_s)), comp)
                - vel(at(neg(e_t)), comp)
                - vel(at(add(neg(e_t), e_s)), comp))
                * dd_t
        };
        dvs_dt[t] = four_point(s);
        dvt_dt[t] = four_point(t);
    }

    // 界面值
    let t_hat = 0.5 * (t_here + t_ahead);
    let mu = model.ref_mu * sutherland_viscosity(t_hat * model.ref_t);
    let heat_k = model.gamma * model.cv * mu / model.prandtl;
    let div_v = dv_ds[s] + dvt_dt.iter().sum::<f64>();

    // 应力张量沿 axis 的一列
    let mut fv = Flux::ZERO;
    for comp in 0..3 {
        fv[1 + comp] = if comp == s {
            mu * (2.0 * dv_ds[s] - (2.0 / 3.0) * div_v)
        } else {
            mu * (dv_ds[comp] + dvs_dt[comp])
        };
    }
    let v_hat = [
        0.5 * (vel(here, 0) + vel(ahead, 0)),
        0.5 * (vel(here, 1) + vel(ahead, 1)),
        0.5 * (vel(here, 2) + vel(ahead, 2)),
    ];
    fv[4] = heat_k * dt_ds + fv[1] * v_hat[0] + fv[2] * v_hat[1] + fv[3] * v_hat[2];
    fv
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FlowModel;
    use approx::assert_relative_eq;

    fn viscous_model() -> FlowModel {
        FlowModel {
            ref_mu: 1.0e-3,
            ref_t: 288.15,
            ..FlowModel::default()
        }
    }

    #[test]
    fn test_sutherland_reference_point() {
        // 288.15 K 下空气动力粘性约 1.79e-5 Pa·s
        let mu = sutherland_viscosity(288.15);
        assert_relative_eq!(mu, 1.79e-5, max_relative = 0.01);
        // 粘性随温度单调上升
        assert!(sutherland_viscosity(600.0) > mu);
    }

    #[test]
    fn test_uniform_field_has_zero_viscous_flux() {
        let n = [5, 5, 5];
        let cons = Conserved([1.0, 0.3, -0.1, 0.2, 2.0]);
        let level = vec![cons; n[0] * n[1] * n[2]];
        let model = viscous_model();
        let dd = DVec3::splat(10.0);
        for axis in Axis::ALL {
            let fv = numerical_diffusive_flux(axis, 2, 2, 2, &level, n, dd, &model);
            for c in 0..5 {
                assert_relative_eq!(fv[c], 0.0, epsilon = 1e-14);
            }
        }
    }

    #[test]
    fn test_pure_shear_stress() {
        // u 只随 y 线性变化：τ_xy = μ du/dy，法向 X 的通量第 2 分量
        // 与法向 Y 的通量第 1 分量都应等于 μ du/dy
        let n = [7, 7, 7];
        let mut level = vec![Conserved::ZERO; n[0] * n[1] * n[2]];
        let slope = 2.0;
        let dy = 0.1;
        for k in 0..n[2] {
            for j in 0..n[1] {
                for i in 0..n[0] {
                    let u = slope * dy * j as f64;
                    // 恒温场：总能配平动能
                    let e = 250000.0 + 0.5 * u * u;
                    level[(k * n[1] + j) * n[0] + i] = Conserved([1.0, u, 0.0, 0.0, e]);
                }
            }
        }
        let model = viscous_model();
        let dd = DVec3::splat(1.0 / dy);

        let t = temperature(model.cv, &level[(3 * n[1] + 3) * n[0] + 3]);
        let mu = model.ref_mu * sutherland_viscosity(t * model.ref_t);

        let fx = numerical_diffusive_flux(Axis::X, 3, 3, 3, &level, n, dd, &model);
        assert_relative_eq!(fx[2], mu * slope, max_relative = 1e-6);

        let fy = numerical_diffusive_flux(Axis::Y, 3, 3, 3, &level, n, dd, &model);
        assert_relative_eq!(fy[1], mu * slope, max_relative = 1e-6);
        // 纯剪切无膨胀：法向正应力为零
        assert_relative_eq!(fy[2], 0.0, epsilon = 1e-10);
    }
}
