// crates/sf_physics/src/boundary.rs

//! 边界处理方接口
//!
//! 每个 Runge-Kutta 阶段写入后、下一阶段读取前，积分器把刚写入
//! 的时间层移交实现了 [`BoundaryTreatment`] 的外部协作方，由其
//! 补齐虚网格并维护固体/浸入体节点。完整的边界条件体系（壁面、
//! 入流出流、浸入体几何）不属于本 crate；这里提供两个让求解
//! 核心可以端到端运转的参考实现。
//!
//! 分区的十字形布局不给棱角块赋值。参考实现按固定面顺序在切向
//! 全宽范围上填充，使棱角节点获得最后处理面的外推/周期值。
//! 这是一种显式的替代策略，依赖棱角值的组件（如粘性梯度）
//! 获得的是确定而非精确的数据。

use sf_foundation::SfResult;
use sf_grid::{Axis, Face, FlowField, Partition, TimeLevel};

use crate::model::FlowModel;

/// 边界与几何处理协作方
///
/// 实现方必须保证返回后该时间层是虚网格齐备、固体节点一致的
/// 完整场，下一次空间算子求值直接依赖这一点。
pub trait BoundaryTreatment {
    /// 对刚写入的时间层施加边界条件与几何处理
    fn apply(
        &mut self,
        level: TimeLevel,
        field: &mut FlowField,
        part: &Partition,
        model: &FlowModel,
    ) -> SfResult<()>;
}

/// 以 (i, j, k) 坐标数组计算线性偏移
#[inline]
fn idx3(n: [usize; 3], coords: [usize; 3]) -> usize {
    (coords[2] * n[1] + coords[1]) * n[0] + coords[0]
}

/// 零梯度外推边界（透射出流）
///
/// 每个面的边界层与虚网格节点整体复制最近的内部节点值。
#[derive(Debug, Clone, Copy, Default)]
pub struct ExtrapolationBoundary;

impl BoundaryTreatment for ExtrapolationBoundary {
    fn apply(
        &mut self,
        level: TimeLevel,
        field: &mut FlowField,
        part: &Partition,
        _model: &FlowModel,
    ) -> SfResult<()> {
        let n = part.n();
        let ng = part.ng();
        let m = part.m();
        let buf = field.level_mut(level);

        for face in Face::ALL {
            let a = face.axis();
            let ai = a.index();
            // 源为内部区贴边节点，目标为边界层与虚网格
            let (src, targets) = if face.is_upper() {
                (m[ai] + ng - 2, (m[ai] + ng - 1)..n[ai])
            } else {
                (ng + 1, 0..(ng + 1))
            };
            let [t1, t2] = a.tangents();
            for p in 0..n[t1.index()] {
                for q in 0..n[t2.index()] {
                    let mut coords = [0usize; 3];
                    coords[t1.index()] = p;
                    coords[t2.index()] = q;
                    coords[ai] = src;
                    let value = buf[idx3(n, coords)];
                    for t in targets.clone() {
                        coords[ai] = t;
                        buf[idx3(n, coords)] = value;
                    }
                }
            }
        }
        Ok(())
    }
}

/// 周期边界
///
/// 以内部区为一个周期，把内部区之外的节点映射到对应的内部
/// 镜像。按 X、Y、Z 轴顺序逐轴处理，棱角节点经多轴映射后同样
/// 获得一致的周期值。
#[derive(Debug, Clone, Copy, Default)]
pub struct PeriodicBoundary;

impl BoundaryTreatment for PeriodicBoundary {
    fn apply(
        &mut self,
        level: TimeLevel,
        field: &mut FlowField,
        part: &Partition,
        _model: &FlowModel,
    ) -> SfResult<()> {
        let n = part.n();
        let ng = part.ng();
        let m = part.m();
        let buf = field.level_mut(level);

        for a in Axis::ALL {
            let ai = a.index();
            let lo = ng + 1;
            let period = (m[ai] - 2) as i64;
            let [t1, t2] = a.tangents();
            for x in 0..n[ai] {
                if x >= lo && x < lo + period as usize {
                    continue;
                }
                let src = ((x as i64 - lo as i64).rem_euclid(period) + lo as i64) as usize;
                for p in 0..n[t1.index()] {
                    for q in 0..n[t2.index()] {
                        let mut coords = [0usize; 3];
                        coords[t1.index()] = p;
                        coords[t2.index()] = q;
                        coords[ai] = src;
                        let value = buf[idx3(n, coords)];
                        coords[ai] = x;
                        buf[idx3(n, coords)] = value;
                    }
                }
            }
        }
        Ok(())
    }
}
