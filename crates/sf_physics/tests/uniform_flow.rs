//! 均匀流保持测试
//!
//! 均匀初始场（ρ=1, 速度为零, p=1/γ）在无粘模式下是精确定常解：
//! 任意步数推进后状态必须保持不变。该性质对重构格式与特征值
//! 分裂方法的每种组合都必须成立。

use glam::DVec3;
use sf_grid::{Axis, Conserved, FlowField, Partition, Region, TimeLevel};
use sf_physics::{
    CflController, EigenSplitter, ExtrapolationBoundary, FlowModel, ReconstructionScheme,
    TimeIntegrator,
};

/// ρ=1, u=v=w=0, p=1/γ 的守恒状态
fn uniform_state(gamma: f64) -> Conserved {
    Conserved([1.0, 0.0, 0.0, 0.0, 1.0 / gamma / (gamma - 1.0)])
}

fn run_uniform(scheme: ReconstructionScheme, splitter: EigenSplitter) {
    let part = Partition::new(DVec3::ZERO, DVec3::ONE, [10, 6, 6], 2).unwrap();
    let mut field = FlowField::new(&part);
    let model = FlowModel {
        scheme,
        splitter,
        ..FlowModel::with_gas(1.4, 1.0)
    };
    let init = uniform_state(model.gamma);
    field.fill_level(TimeLevel::Old, init);

    let integrator = TimeIntegrator::new();
    let ctrl = CflController::new(0.5);
    let mut bc = ExtrapolationBoundary;

    for _ in 0..5 {
        let dt = ctrl.compute_dt(&field, TimeLevel::Old, &part, &model);
        assert!(dt > 0.0);
        integrator
            .advance(dt, &mut field, &part, &model, &mut bc)
            .unwrap();
    }

    let u = field.level(TimeLevel::Old);
    for k in part.range(Region::Interior, Axis::Z).iter() {
        for j in part.range(Region::Interior, Axis::Y).iter() {
            for i in part.range(Region::Interior, Axis::X).iter() {
                let idx = part.node_offset(k, j, i);
                for c in 0..Conserved::DIM {
                    assert!(
                        (u[idx][c] - init[c]).abs() < 1e-12,
                        "{:?}/{:?} 节点 ({k},{j},{i}) 分量 {c}: {} ≠ {}",
                        scheme,
                        splitter,
                        u[idx][c],
                        init[c]
                    );
                }
            }
        }
    }
}

#[test]
fn test_uniform_flow_weno5_lax_friedrichs() {
    run_uniform(ReconstructionScheme::Weno5, EigenSplitter::LaxFriedrichs);
}

#[test]
fn test_uniform_flow_weno5_steger_warming() {
    run_uniform(ReconstructionScheme::Weno5, EigenSplitter::StegerWarming);
}

#[test]
fn test_uniform_flow_weno3_lax_friedrichs() {
    run_uniform(ReconstructionScheme::Weno3, EigenSplitter::LaxFriedrichs);
}

#[test]
fn test_uniform_moving_flow_is_translated_not_distorted() {
    // 带均匀速度的均匀场同样是平移不变的定常解
    let part = Partition::new(DVec3::ZERO, DVec3::ONE, [10, 6, 6], 2).unwrap();
    let mut field = FlowField::new(&part);
    let model = FlowModel::with_gas(1.4, 1.0);
    let e = 0.5 * 0.3 * 0.3 + 1.0 / 1.4 / 0.4;
    let init = Conserved([1.0, 0.3, 0.0, 0.0, e]);
    field.fill_level(TimeLevel::Old, init);

    let integrator = TimeIntegrator::new();
    let mut bc = ExtrapolationBoundary;
    for _ in 0..3 {
        integrator
            .advance(1e-3, &mut field, &part, &model, &mut bc)
            .unwrap();
    }
    let u = field.level(TimeLevel::Old);
    for k in part.range(Region::Interior, Axis::Z).iter() {
        for j in part.range(Region::Interior, Axis::Y).iter() {
            for i in part.range(Region::Interior, Axis::X).iter() {
                let idx = part.node_offset(k, j, i);
                for c in 0..Conserved::DIM {
                    assert!((u[idx][c] - init[c]).abs() < 1e-12);
                }
            }
        }
    }
}
