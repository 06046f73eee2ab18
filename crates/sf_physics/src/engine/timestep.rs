// crates/sf_physics/src/engine/timestep.rs

//! 基于 CFL 条件的时间步控制
//!
//! 扫描内部区流体节点的最大特征速度，给出满足
//! `dt ≤ cfl / max((|v_a| + c)·dd_a)` 的时间步并钳制到配置区间。

use serde::{Deserialize, Serialize};
use sf_foundation::{SfError, SfResult};
use sf_grid::{Axis, FlowField, Partition, Region, TimeLevel};

use crate::model::FlowModel;
use crate::state::Primitive;

/// CFL 时间步控制器
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CflController {
    /// CFL 数，(0, 1]
    pub cfl: f64,
    /// 最小时间步
    pub dt_min: f64,
    /// 最大时间步
    pub dt_max: f64,
}

impl Default for CflController {
    fn default() -> Self {
        Self {
            cfl: 0.5,
            dt_min: 1e-12,
            dt_max: f64::MAX,
        }
    }
}

impl CflController {
    /// 指定 CFL 数创建控制器
    pub fn new(cfl: f64) -> Self {
        Self {
            cfl,
            ..Self::default()
        }
    }

    /// 校验配置
    pub fn validate(&self) -> SfResult<()> {
        SfError::check_range("cfl", self.cfl, f64::MIN_POSITIVE, 1.0)?;
        if !(self.dt_min > 0.0) || self.dt_min >= self.dt_max {
            return Err(SfError::config("要求 0 < dt_min < dt_max"));
        }
        Ok(())
    }

    /// 计算稳定时间步
    ///
    /// 场中没有流体节点或波速退化为零时返回 `dt_max`。
    pub fn compute_dt(
        &self,
        field: &FlowField,
        level: TimeLevel,
        part: &Partition,
        model: &FlowModel,
    ) -> f64 {
        let n = part.n();
        let dd = part.inv_spacing();
        let u = field.level(level);
        let tags = field.tags();

        let mut s_max = 0.0f64;
        for k in part.range(Region::Interior, Axis::Z).iter() {
            for j in part.range(Region::Interior, Axis::Y).iter() {
                for i in part.range(Region::Interior, Axis::X).iter() {
                    let idx = (k * n[1] + j) * n[0] + i;
                    if !tags[idx].is_fluid() {
                        continue;
                    }
                    let prim = Primitive::from_conserved(model.gamma, model.gas_r, &u[idx]);
                    let c = prim.sound_speed(model.gamma);
                    let vel = [prim.u, prim.v, prim.w];
                    for axis in Axis::ALL {
                        let s = (vel[axis.index()].abs() + c) * axis.component(dd);
                        s_max = s_max.max(s);
                    }
                }
            }
        }

        if s_max <= 0.0 || !s_max.is_finite() {
            log::warn!("最大特征速度退化 ({s_max}), 时间步取 dt_max");
            return self.dt_max;
        }
        let dt = self.cfl / s_max;
        let clamped = dt.clamp(self.dt_min, self.dt_max);
        if clamped != dt {
            log::warn!("CFL 时间步 {dt:.6e} 被钳制到 {clamped:.6e}");
        }
        clamped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;
    use sf_grid::Conserved;

    #[test]
    fn test_validate() {
        assert!(CflController::default().validate().is_ok());
        assert!(CflController::new(0.0).validate().is_err());
        assert!(CflController::new(1.5).validate().is_err());
    }

    #[test]
    fn test_compute_dt_static_gas() {
        // 静止气体：dt = cfl / (c·dd)
        let part = Partition::new(DVec3::ZERO, DVec3::ONE, [11, 11, 11], 2).unwrap();
        let mut field = FlowField::new(&part);
        let model = FlowModel::with_gas(1.4, 1.0);
        // ρ=1, p=1/γ → c=1
        field.fill_level(
            TimeLevel::Old,
            Conserved([1.0, 0.0, 0.0, 0.0, 1.0 / 1.4 / 0.4]),
        );
        let ctrl = CflController::new(0.5);
        let dt = ctrl.compute_dt(&field, TimeLevel::Old, &part, &model);
        let expected = 0.5 * 0.1; // cfl·Δx/c
        assert!((dt - expected).abs() < 1e-12, "dt = {dt}");
    }

    #[test]
    fn test_faster_flow_means_smaller_dt() {
        let part = Partition::new(DVec3::ZERO, DVec3::ONE, [11, 11, 11], 2).unwrap();
        let model = FlowModel::with_gas(1.4, 1.0);
        let ctrl = CflController::default();

        let mut still = FlowField::new(&part);
        still.fill_level(
            TimeLevel::Old,
            Conserved([1.0, 0.0, 0.0, 0.0, 1.0 / 1.4 / 0.4]),
        );
        let mut moving = FlowField::new(&part);
        moving.fill_level(
            TimeLevel::Old,
            Conserved([1.0, 2.0, 0.0, 0.0, 2.0 + 1.0 / 1.4 / 0.4]),
        );

        let dt_still = ctrl.compute_dt(&still, TimeLevel::Old, &part, &model);
        let dt_moving = ctrl.compute_dt(&moving, TimeLevel::Old, &part, &model);
        assert!(dt_moving < dt_still);
    }
}
