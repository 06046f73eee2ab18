// crates/sf_physics/src/engine/operator.rs

//! 单轴单阶段空间算子
//!
//! 对内部区每个流体节点求其沿扫掠轴左右两个界面的数值对流
//! （及粘性模式下的扩散）通量，并做守恒型更新
//!
//! ```text
//! Um = coeA·Uo + coeB·(Un - r·(FhatR - FhatL) + r·(FvhatR - FvhatL))
//! ```
//!
//! 其中 `r = dt/Δs`。同一阶段内节点之间没有顺序依赖：每个节点
//! 只读自身与邻居的 Uo/Un 层、只写自身的 Um 层，因此按 k 平面
//! 切分后可以安全并行，阶段之间的边界处理则是硬同步点。

use rayon::prelude::*;
use sf_grid::{Axis, Conserved, FlowField, Partition, Region, TimeLevel};

use crate::flux::convective::numerical_convective_flux;
use crate::flux::diffusive::numerical_diffusive_flux;
use crate::flux::Flux;
use crate::model::FlowModel;

/// 对 `field` 施加一个 Runge-Kutta 阶段
///
/// `to`/`tn` 为只读时间层（旧层与当前层），`tm` 为写入层。
/// 写入层与任一只读层相同属编程错误。
#[allow(clippy::too_many_arguments)]
pub(crate) fn apply_stage(
    dt: f64,
    coe_a: f64,
    coe_b: f64,
    axis: Axis,
    to: TimeLevel,
    tn: TimeLevel,
    tm: TimeLevel,
    field: &mut FlowField,
    part: &Partition,
    model: &FlowModel,
    min_parallel_planes: usize,
) {
    debug_assert!(tm != to && tm != tn, "写入层不得与只读层重叠");

    let n = part.n();
    let plane = n[0] * n[1];
    let r = dt * axis.component(part.inv_spacing());
    let dd = part.inv_spacing();
    let (dk, dj, di) = axis.offset();
    let ir_x = part.range(Region::Interior, Axis::X);
    let ir_y = part.range(Region::Interior, Axis::Y);
    let ir_z = part.range(Region::Interior, Axis::Z);
    let viscous = model.is_viscous();

    let mut um = field.take_level(tm);
    {
        let uo = field.level(to);
        let un = field.level(tn);
        let tags = field.tags();

        let update_plane = |k: usize, plane_out: &mut [Conserved]| {
            for j in ir_y.iter() {
                for i in ir_x.iter() {
                    let idx = (k * n[1] + j) * n[0] + i;
                    if !tags[idx].is_fluid() {
                        continue;
                    }
                    // 右界面在本节点，左界面在 -axis 邻居
                    let kl = (k as i64 - dk) as usize;
                    let jl = (j as i64 - dj) as usize;
                    let il = (i as i64 - di) as usize;
                    let fhat_r = numerical_convective_flux(axis, k, j, i, un, n, model);
                    let fhat_l = numerical_convective_flux(axis, kl, jl, il, un, n, model);
                    let (fv_r, fv_l) = if viscous {
                        (
                            numerical_diffusive_flux(axis, k, j, i, un, n, dd, model),
                            numerical_diffusive_flux(axis, kl, jl, il, un, n, dd, model),
                        )
                    } else {
                        (Flux::ZERO, Flux::ZERO)
                    };
                    let out = &mut plane_out[j * n[0] + i];
                    for c in 0..Conserved::DIM {
                        out[c] = coe_a * uo[idx][c]
                            + coe_b
                                * (un[idx][c] - r * (fhat_r[c] - fhat_l[c])
                                    + r * (fv_r[c] - fv_l[c]));
                    }
                }
            }
        };

        if ir_z.len() >= min_parallel_planes {
            // k 平面是写入缓冲上互不相交的连续切片
            um.par_chunks_mut(plane)
                .enumerate()
                .for_each(|(k, plane_out)| {
                    if ir_z.contains(k) {
                        update_plane(k, plane_out);
                    }
                });
        } else {
            for k in ir_z.iter() {
                let start = k * plane;
                update_plane(k, &mut um[start..start + plane]);
            }
        }
    }
    field.put_level(tm, um);
}
