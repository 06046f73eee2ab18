// crates/sf_physics/src/engine/integrator.rs

//! 维度分裂的 SSP Runge-Kutta 时间推进
//!
//! 一个完整时间步是六次一维半步扫掠的算子分裂组合，扫掠顺序
//! 取回文序 `Z, Y, X, X, Y, Z` 以保持对称性。顺序与阶段系数是
//! 固定的手工对称化选择，改动会破坏逐位可复现的行为。
//!
//! 每次扫掠按 Shu-Osher 形式做三阶段强稳定保持更新：
//!
//! ```text
//! U⁽¹⁾   = Un + dt·L(Un)                       (系数 0, 1)
//! U⁽²⁾   = 3/4·Un + 1/4·(U⁽¹⁾ + dt·L(U⁽¹⁾))    (系数 3/4, 1/4)
//! Un+1   = 1/3·Un + 2/3·(U⁽²⁾ + dt·L(U⁽²⁾))    (系数 1/3, 2/3)
//! ```
//!
//! 每个阶段写入后立即移交外部边界处理方补齐虚网格与固体节点，
//! 下一阶段的模板求值依赖这份一致的场，该顺序是强制的。
//! 阶段写入槽只用 New/Mid，扫掠收尾以 O(1) 的 swap 把结果换回
//! Old 层，从而任何阶段的读写缓冲都不互为别名。
//!
//! 参考文献：Gottlieb, S., Shu, C.-W., & Tadmor, E. (2001).
//! Strong stability-preserving high-order time discretization
//! methods. SIAM Review, 43(1), 89-112.

use sf_foundation::{SfError, SfResult};
use sf_grid::{Axis, FlowField, Partition, TimeLevel};

use crate::boundary::BoundaryTreatment;
use crate::engine::operator::apply_stage;
use crate::model::FlowModel;

/// 回文扫掠顺序
const SWEEP_ORDER: [Axis; 6] = [Axis::Z, Axis::Y, Axis::X, Axis::X, Axis::Y, Axis::Z];

/// 三个阶段的 (coeA, coeB, 旧层, 当前层, 写入层)
const STAGES: [(f64, f64, TimeLevel, TimeLevel, TimeLevel); 3] = [
    (0.0, 1.0, TimeLevel::Old, TimeLevel::Old, TimeLevel::New),
    (0.75, 0.25, TimeLevel::Old, TimeLevel::New, TimeLevel::Mid),
    (
        1.0 / 3.0,
        2.0 / 3.0,
        TimeLevel::Old,
        TimeLevel::Mid,
        TimeLevel::New,
    ),
];

/// 维度分裂时间积分器
///
/// 无内部状态缓冲（时间层都在 [`FlowField`] 内），
/// 只持有并行阈值配置。
#[derive(Debug, Clone)]
pub struct TimeIntegrator {
    /// 低于该 k 平面数时退化为串行遍历
    min_parallel_planes: usize,
}

impl Default for TimeIntegrator {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeIntegrator {
    /// 默认并行阈值
    const DEFAULT_MIN_PARALLEL_PLANES: usize = 8;

    /// 创建积分器
    pub fn new() -> Self {
        Self {
            min_parallel_planes: Self::DEFAULT_MIN_PARALLEL_PLANES,
        }
    }

    /// 指定并行阈值创建积分器
    pub fn with_min_parallel_planes(min_parallel_planes: usize) -> Self {
        Self {
            min_parallel_planes,
        }
    }

    /// 将整个保留状态场原地推进一个完整时间步
    ///
    /// 成功时 `Old` 层持有推进后的状态。失败（配置不一致）是
    /// 致命的，场内容此时不保证一致。
    pub fn advance(
        &self,
        dt: f64,
        field: &mut FlowField,
        part: &Partition,
        model: &FlowModel,
        boundary: &mut dyn BoundaryTreatment,
    ) -> SfResult<()> {
        model
            .validate()
            .map_err(|e| SfError::config(e.to_string()))?;
        if part.ng() < model.scheme.required_ghost_depth() {
            return Err(SfError::config(format!(
                "{} 格式要求虚网格深度至少 {}, 分区只有 {}",
                model.scheme.name(),
                model.scheme.required_ghost_depth(),
                part.ng()
            )));
        }
        SfError::check_size("状态场节点数", part.total_nodes(), field.total_nodes())?;
        if !(dt > 0.0) {
            return Err(SfError::out_of_range("dt", dt, 0.0, f64::INFINITY));
        }

        for axis in SWEEP_ORDER {
            self.sweep(0.5 * dt, axis, field, part, model, boundary)?;
        }
        Ok(())
    }

    /// 单轴三阶段扫掠
    fn sweep(
        &self,
        dt: f64,
        axis: Axis,
        field: &mut FlowField,
        part: &Partition,
        model: &FlowModel,
        boundary: &mut dyn BoundaryTreatment,
    ) -> SfResult<()> {
        for (coe_a, coe_b, to, tn, tm) in STAGES {
            apply_stage(
                dt,
                coe_a,
                coe_b,
                axis,
                to,
                tn,
                tm,
                field,
                part,
                model,
                self.min_parallel_planes,
            );
            boundary.apply(tm, field, part, model)?;
        }
        field.swap_levels(TimeLevel::Old, TimeLevel::New);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boundary::ExtrapolationBoundary;
    use crate::flux::ReconstructionScheme;
    use glam::DVec3;
    use sf_grid::Conserved;

    #[test]
    fn test_ghost_depth_mismatch_is_config_error() {
        let part = Partition::new(DVec3::ZERO, DVec3::ONE, [8, 8, 8], 1).unwrap();
        let mut field = FlowField::new(&part);
        let model = FlowModel {
            scheme: ReconstructionScheme::Weno5,
            ..FlowModel::default()
        };
        let integrator = TimeIntegrator::new();
        let mut bc = ExtrapolationBoundary;
        let r = integrator.advance(1e-3, &mut field, &part, &model, &mut bc);
        assert!(matches!(r, Err(SfError::Config { .. })));
    }

    #[test]
    fn test_field_size_mismatch_rejected() {
        let part = Partition::new(DVec3::ZERO, DVec3::ONE, [8, 8, 8], 2).unwrap();
        let small = Partition::new(DVec3::ZERO, DVec3::ONE, [4, 4, 4], 2).unwrap();
        let mut field = FlowField::new(&small);
        let model = FlowModel::default();
        let integrator = TimeIntegrator::new();
        let mut bc = ExtrapolationBoundary;
        let r = integrator.advance(1e-3, &mut field, &part, &model, &mut bc);
        assert!(matches!(r, Err(SfError::SizeMismatch { .. })));
    }

    #[test]
    fn test_nonpositive_dt_rejected() {
        let part = Partition::new(DVec3::ZERO, DVec3::ONE, [8, 8, 8], 2).unwrap();
        let mut field = FlowField::new(&part);
        let model = FlowModel::default();
        let integrator = TimeIntegrator::new();
        let mut bc = ExtrapolationBoundary;
        assert!(integrator
            .advance(0.0, &mut field, &part, &model, &mut bc)
            .is_err());
    }

    #[test]
    fn test_boundary_called_after_every_stage() {
        // 每步 6 次扫掠 × 3 个阶段 = 18 次边界处理
        struct Counting(usize);
        impl BoundaryTreatment for Counting {
            fn apply(
                &mut self,
                _level: TimeLevel,
                field: &mut FlowField,
                part: &Partition,
                model: &FlowModel,
            ) -> SfResult<()> {
                self.0 += 1;
                ExtrapolationBoundary.apply(_level, field, part, model)
            }
        }
        let part = Partition::new(DVec3::ZERO, DVec3::ONE, [8, 8, 8], 2).unwrap();
        let mut field = FlowField::new(&part);
        field.fill_level(TimeLevel::Old, Conserved([1.0, 0.0, 0.0, 0.0, 2.0]));
        let model = FlowModel::default();
        let integrator = TimeIntegrator::new();
        let mut bc = Counting(0);
        integrator
            .advance(1e-4, &mut field, &part, &model, &mut bc)
            .unwrap();
        assert_eq!(bc.0, 18);
    }
}
