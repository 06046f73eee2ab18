// crates/sf_grid/src/field.rs

//! 多时间层守恒量场
//!
//! 多级时间推进需要同时保留三个时间层：旧层、新层、中间层。
//! 每一层是独立的 `Vec<Conserved>`，写入层通过 [`FlowField::take_level`]
//! 整体取出，借用检查器因此可以证明单个阶段内读写缓冲绝不互为
//! 别名，取代了按约定区分多个裸指针的做法。
//!
//! 非流体节点（固体、浸入体）由外部边界/几何处理方独占维护，
//! 空间算子只凭 [`GeoTag`] 跳过它们。

use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

use crate::partition::Partition;

/// 守恒状态向量
///
/// 分量依次为：密度、x/y/z 动量、单位体积总能。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Conserved(pub [f64; 5]);

impl Conserved {
    /// 分量数
    pub const DIM: usize = 5;

    /// 零向量
    pub const ZERO: Self = Self([0.0; 5]);

    /// 密度
    #[inline]
    pub fn rho(&self) -> f64 {
        self.0[0]
    }

    /// 动量分量 (ρu, ρv, ρw)
    #[inline]
    pub fn momentum(&self) -> [f64; 3] {
        [self.0[1], self.0[2], self.0[3]]
    }

    /// 单位体积总能
    #[inline]
    pub fn energy(&self) -> f64 {
        self.0[4]
    }

    /// 所有分量是否有限
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.0.iter().all(|x| x.is_finite())
    }
}

impl Default for Conserved {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Index<usize> for Conserved {
    type Output = f64;

    #[inline]
    fn index(&self, i: usize) -> &f64 {
        &self.0[i]
    }
}

impl IndexMut<usize> for Conserved {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut f64 {
        &mut self.0[i]
    }
}

/// 时间层标识
///
/// 三个槽位按名字区分，杜绝同一阶段内输入输出槽位重叠。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeLevel {
    /// 旧层：进入当前扫掠时的状态，扫掠结束后持有推进结果
    Old = 0,
    /// 新层：阶段一与阶段三的写入目标
    New = 1,
    /// 中间层：阶段二的写入目标
    Mid = 2,
}

impl TimeLevel {
    /// 时间层数量
    pub const COUNT: usize = 3;

    /// 槽位序号
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// 节点几何分类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GeoTag {
    /// 流体节点，由空间算子更新
    #[default]
    Fluid,
    /// 固体节点，由几何处理方维护
    Solid,
    /// 浸入体界面节点，由几何处理方维护
    Immersed,
}

impl GeoTag {
    /// 是否为流体节点
    #[inline]
    pub const fn is_fluid(self) -> bool {
        matches!(self, GeoTag::Fluid)
    }
}

/// 多时间层守恒量场
///
/// 按分区尺寸持有三个时间层缓冲与节点几何标记。
/// 缓冲尺寸构造后固定。
#[derive(Debug, Clone)]
pub struct FlowField {
    /// 各轴总节点数（含虚网格）
    n: [usize; 3],
    /// 三个时间层缓冲，按 [`TimeLevel`] 序号索引
    levels: [Vec<Conserved>; 3],
    /// 节点几何分类
    tags: Vec<GeoTag>,
}

impl FlowField {
    /// 按分区尺寸创建场，所有节点初始为零状态、流体标记
    pub fn new(part: &Partition) -> Self {
        let total = part.total_nodes();
        Self {
            n: part.n(),
            levels: [
                vec![Conserved::ZERO; total],
                vec![Conserved::ZERO; total],
                vec![Conserved::ZERO; total],
            ],
            tags: vec![GeoTag::default(); total],
        }
    }

    /// 各轴总节点数
    #[inline]
    pub fn n(&self) -> [usize; 3] {
        self.n
    }

    /// 总节点数
    #[inline]
    pub fn total_nodes(&self) -> usize {
        self.tags.len()
    }

    /// 只读访问一个时间层
    #[inline]
    pub fn level(&self, l: TimeLevel) -> &[Conserved] {
        &self.levels[l.index()]
    }

    /// 可变访问一个时间层
    #[inline]
    pub fn level_mut(&mut self, l: TimeLevel) -> &mut [Conserved] {
        &mut self.levels[l.index()]
    }

    /// 取出一个时间层作为独立写入缓冲
    ///
    /// 取出后该层在场内为空，必须用 [`Self::put_level`] 放回。
    /// 取出期间对其余层的只读访问不受影响。
    #[inline]
    pub fn take_level(&mut self, l: TimeLevel) -> Vec<Conserved> {
        std::mem::take(&mut self.levels[l.index()])
    }

    /// 放回取出的时间层
    ///
    /// # Panics
    ///
    /// 缓冲长度与场尺寸不符时 panic（编程错误）。
    #[inline]
    pub fn put_level(&mut self, l: TimeLevel, buf: Vec<Conserved>) {
        assert_eq!(buf.len(), self.tags.len(), "时间层缓冲长度不匹配");
        self.levels[l.index()] = buf;
    }

    /// 交换两个时间层（O(1)，只交换缓冲头）
    #[inline]
    pub fn swap_levels(&mut self, a: TimeLevel, b: TimeLevel) {
        self.levels.swap(a.index(), b.index());
    }

    /// 将一个时间层整体填充为同一状态
    pub fn fill_level(&mut self, l: TimeLevel, value: Conserved) {
        self.levels[l.index()].fill(value);
    }

    /// 将 src 层内容复制到 dst 层
    pub fn copy_level(&mut self, dst: TimeLevel, src: TimeLevel) {
        if dst == src {
            return;
        }
        let (d, s) = (dst.index(), src.index());
        let src_buf = std::mem::take(&mut self.levels[s]);
        self.levels[d].copy_from_slice(&src_buf);
        self.levels[s] = src_buf;
    }

    /// 节点几何标记
    #[inline]
    pub fn tag(&self, idx: usize) -> GeoTag {
        self.tags[idx]
    }

    /// 全部几何标记
    #[inline]
    pub fn tags(&self) -> &[GeoTag] {
        &self.tags
    }

    /// 设置节点几何标记
    #[inline]
    pub fn set_tag(&mut self, idx: usize, tag: GeoTag) {
        self.tags[idx] = tag;
    }
}
