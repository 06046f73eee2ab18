// crates/sf_grid/src/partition.rs

//! 计算域分区
//!
//! 把含虚网格层的节点空间划分为 13 个命名区域：内部区、
//! 六个边界层、六个外部虚网格层。每个区域在每个轴上用一个
//! 半开区间描述，构造后不可变，被所有组件只读共享。
//!
//! # 区域布局
//!
//! 设某轴域内节点数为 m，虚网格深度为 ng，则该轴：
//!
//! ```text
//! 全部节点:       [0, m + 2*ng)
//! 下部虚网格:     [0, ng)
//! 下边界层:       [ng, ng+1)
//! 内部区:         [ng+1, m+ng-1)
//! 上边界层:       [m+ng-1, m+ng)
//! 上部虚网格:     [m+ng, m+2*ng)
//! ```
//!
//! 内部区两侧各收缩一个节点，是因为对流/扩散通量在界面上
//! 求值时还需要额外一层邻居。
//!
//! 边界层与虚网格区只沿所属轴伸出，其余轴保持内部区范围，
//! 因而在空间上呈十字形、不覆盖棱角块。标准的十字形差分
//! 模板不需要棱角节点；若有组件（例如多轴梯度）需要它们，
//! 必须由外部边界处理方自行给出赋值策略。

use glam::DVec3;
use serde::{Deserialize, Serialize};
use sf_foundation::{SfError, SfResult};

use crate::axis::{Axis, Face};
use crate::index::{self, linear_offset};

/// 半开索引区间 `[min, max)`
///
/// min 总是可达值，max 总是不可达值，区间长度即 `max - min`。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct IndexRange {
    /// 下界（含）
    pub min: usize,
    /// 上界（不含）
    pub max: usize,
}

impl IndexRange {
    /// 创建区间
    #[inline]
    pub const fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    /// 区间长度
    #[inline]
    pub const fn len(&self) -> usize {
        self.max.saturating_sub(self.min)
    }

    /// 是否为空
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.max <= self.min
    }

    /// 是否包含索引
    #[inline]
    pub const fn contains(&self, n: usize) -> bool {
        self.min <= n && n < self.max
    }

    /// 转换为标准区间迭代器
    #[inline]
    pub fn iter(&self) -> std::ops::Range<usize> {
        self.min..self.max
    }
}

/// 分区区域
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    /// 内部计算区
    Interior,
    /// 域边界层（六个面）
    Boundary(Face),
    /// 外部虚网格层（六个面）
    Ghost(Face),
}

impl Region {
    /// 全部 13 个区域
    pub const ALL: [Region; 13] = [
        Region::Interior,
        Region::Boundary(Face::West),
        Region::Boundary(Face::East),
        Region::Boundary(Face::South),
        Region::Boundary(Face::North),
        Region::Boundary(Face::Front),
        Region::Boundary(Face::Back),
        Region::Ghost(Face::West),
        Region::Ghost(Face::East),
        Region::Ghost(Face::South),
        Region::Ghost(Face::North),
        Region::Ghost(Face::Front),
        Region::Ghost(Face::Back),
    ];

    /// 区域在范围表中的序号
    #[inline]
    const fn table_index(self) -> usize {
        match self {
            Region::Interior => 0,
            Region::Boundary(f) => 1 + f as usize,
            Region::Ghost(f) => 7 + f as usize,
        }
    }
}

/// 计算域分区
///
/// 构造一次后只读。持有每个区域的索引范围、轴向网格距及其
/// 倒数、域的物理范围。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Partition {
    /// 虚网格深度
    ng: usize,
    /// 各轴域内节点数
    m: [usize; 3],
    /// 各轴总节点数（含虚网格）
    n: [usize; 3],
    /// 各轴网格距
    d: DVec3,
    /// 各轴网格距倒数
    dd: DVec3,
    /// 域物理下界
    s_min: DVec3,
    /// 域物理上界
    s_max: DVec3,
    /// 各区域的轴向索引范围
    ns: [[IndexRange; 3]; 13],
}

impl Partition {
    /// 由域范围、各轴节点数与虚网格深度构造分区
    ///
    /// 退化输入（上界不大于下界、节点数不足以构成内部区、
    /// ng 为零）属于致命的配置错误。
    pub fn new(s_min: DVec3, s_max: DVec3, m: [usize; 3], ng: usize) -> SfResult<Self> {
        for axis in Axis::ALL {
            let lo = axis.component(s_min);
            let hi = axis.component(s_max);
            if !(hi > lo) {
                return Err(SfError::config(format!(
                    "{:?} 轴域范围退化: [{lo}, {hi}]",
                    axis
                )));
            }
            if m[axis.index()] < 3 {
                return Err(SfError::config(format!(
                    "{:?} 轴节点数 {} 不足以构成内部区（至少 3）",
                    axis,
                    m[axis.index()]
                )));
            }
        }
        if ng == 0 {
            return Err(SfError::config("虚网格深度必须大于零"));
        }

        let n = [m[0] + 2 * ng, m[1] + 2 * ng, m[2] + 2 * ng];
        let extent = s_max - s_min;
        let d = DVec3::new(
            extent.x / (m[0] - 1) as f64,
            extent.y / (m[1] - 1) as f64,
            extent.z / (m[2] - 1) as f64,
        );
        let dd = DVec3::new(1.0 / d.x, 1.0 / d.y, 1.0 / d.z);

        // 先给所有区域填内部范围，再沿所属轴覆写，自然得到十字形布局
        let interior = |a: usize| IndexRange::new(ng + 1, m[a] + ng - 1);
        let mut ns = [[IndexRange::default(); 3]; 13];
        for region in Region::ALL {
            for a in 0..3 {
                ns[region.table_index()][a] = interior(a);
            }
        }
        for face in Face::ALL {
            let a = face.axis().index();
            ns[Region::Boundary(face).table_index()][a] = if face.is_upper() {
                IndexRange::new(m[a] + ng - 1, m[a] + ng)
            } else {
                IndexRange::new(ng, ng + 1)
            };
            ns[Region::Ghost(face).table_index()][a] = if face.is_upper() {
                IndexRange::new(m[a] + ng, m[a] + 2 * ng)
            } else {
                IndexRange::new(0, ng)
            };
        }

        Ok(Self {
            ng,
            m,
            n,
            d,
            dd,
            s_min,
            s_max,
            ns,
        })
    }

    /// 虚网格深度
    #[inline]
    pub fn ng(&self) -> usize {
        self.ng
    }

    /// 各轴域内节点数
    #[inline]
    pub fn m(&self) -> [usize; 3] {
        self.m
    }

    /// 各轴总节点数（含虚网格）
    #[inline]
    pub fn n(&self) -> [usize; 3] {
        self.n
    }

    /// 总节点数
    #[inline]
    pub fn total_nodes(&self) -> usize {
        self.n[0] * self.n[1] * self.n[2]
    }

    /// 各轴网格距
    #[inline]
    pub fn spacing(&self) -> DVec3 {
        self.d
    }

    /// 各轴网格距倒数
    #[inline]
    pub fn inv_spacing(&self) -> DVec3 {
        self.dd
    }

    /// 域物理下界
    #[inline]
    pub fn domain_min(&self) -> DVec3 {
        self.s_min
    }

    /// 域物理上界
    #[inline]
    pub fn domain_max(&self) -> DVec3 {
        self.s_max
    }

    /// 区域在某轴上的索引范围
    #[inline]
    pub fn range(&self, region: Region, axis: Axis) -> IndexRange {
        self.ns[region.table_index()][axis.index()]
    }

    /// 节点 (k, j, i) 的线性偏移
    #[inline]
    pub fn node_offset(&self, k: usize, j: usize, i: usize) -> usize {
        linear_offset(k, j, i, self.n[1], self.n[0])
    }

    /// 节点是否落在区域内
    pub fn contains(&self, region: Region, k: usize, j: usize, i: usize) -> bool {
        self.range(region, Axis::Z).contains(k)
            && self.range(region, Axis::Y).contains(j)
            && self.range(region, Axis::X).contains(i)
    }

    /// 物理坐标映射到最近节点坐标（未钳制）
    #[inline]
    pub fn node_from_physical(&self, axis: Axis, s: f64) -> i64 {
        index::node_from_physical(
            s,
            axis.component(self.s_min),
            axis.component(self.dd),
            self.ng,
        )
    }

    /// 物理坐标映射到最近节点坐标，并钳制到域内节点范围
    #[inline]
    pub fn node_from_physical_clamped(&self, axis: Axis, s: f64) -> i64 {
        let n = self.node_from_physical(axis, s);
        let a = axis.index();
        index::clamp_to_range(n, self.ng as i64, (self.m[a] + self.ng) as i64)
    }

    /// 节点坐标映射回物理坐标
    #[inline]
    pub fn physical_from_node(&self, axis: Axis, n: i64) -> f64 {
        index::physical_from_node(n, axis.component(self.s_min), axis.component(self.d), self.ng)
    }
}
