// crates/sf_grid/src/axis.rs

//! 坐标轴与域面枚举
//!
//! `Axis` 以封闭枚举的形式标识三个空间方向，取代按维度手写三份
//! 代码或函数指针表的做法：与方向相关的公式统一通过 `match`
//! 分发，每个 `{格式, 方向}` 组合只有一份实现。

use glam::{DVec3, IVec3};
use serde::{Deserialize, Serialize};

/// 空间坐标轴
///
/// 存储约定为行主序 `idx = (k*ny + j)*nx + i`，
/// 即 i 沿 X、j 沿 Y、k 沿 Z。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// X 方向（i 索引）
    X = 0,
    /// Y 方向（j 索引）
    Y = 1,
    /// Z 方向（k 索引）
    Z = 2,
}

impl Axis {
    /// 全部坐标轴
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// 轴编号（0..3）
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// 沿本轴前进一个节点对应的 (dk, dj, di) 增量
    #[inline]
    pub const fn offset(self) -> (i64, i64, i64) {
        match self {
            Axis::X => (0, 0, 1),
            Axis::Y => (0, 1, 0),
            Axis::Z => (1, 0, 0),
        }
    }

    /// 与本轴正交的另外两个轴
    #[inline]
    pub const fn tangents(self) -> [Axis; 2] {
        match self {
            Axis::X => [Axis::Y, Axis::Z],
            Axis::Y => [Axis::X, Axis::Z],
            Axis::Z => [Axis::X, Axis::Y],
        }
    }

    /// 取向量在本轴上的分量
    #[inline]
    pub fn component(self, v: DVec3) -> f64 {
        match self {
            Axis::X => v.x,
            Axis::Y => v.y,
            Axis::Z => v.z,
        }
    }
}

/// 计算域的六个面
///
/// 命名沿用气象学惯例：West/East 为 X 向下/上游，
/// South/North 为 Y 向，Front/Back 为 Z 向。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Face {
    /// X 下界
    West,
    /// X 上界
    East,
    /// Y 下界
    South,
    /// Y 上界
    North,
    /// Z 下界
    Front,
    /// Z 上界
    Back,
}

impl Face {
    /// 全部域面
    pub const ALL: [Face; 6] = [
        Face::West,
        Face::East,
        Face::South,
        Face::North,
        Face::Front,
        Face::Back,
    ];

    /// 面所垂直的轴
    #[inline]
    pub const fn axis(self) -> Axis {
        match self {
            Face::West | Face::East => Axis::X,
            Face::South | Face::North => Axis::Y,
            Face::Front | Face::Back => Axis::Z,
        }
    }

    /// 是否为该轴的上界面
    #[inline]
    pub const fn is_upper(self) -> bool {
        matches!(self, Face::East | Face::North | Face::Back)
    }

    /// 外法向单位向量
    ///
    /// 引入外法向后所有面可以统一处理：设 (nx, ny, nz) 为面上
    /// 某节点的外法向，则相邻节点 (ih, jh, kh) 满足
    /// `(ih-i)*nx + (jh-j)*ny + (kh-k)*nz < 0` 时更靠内。
    #[inline]
    pub const fn outward_normal(self) -> IVec3 {
        match self {
            Face::West => IVec3::new(-1, 0, 0),
            Face::East => IVec3::new(1, 0, 0),
            Face::South => IVec3::new(0, -1, 0),
            Face::North => IVec3::new(0, 1, 0),
            Face::Front => IVec3::new(0, 0, -1),
            Face::Back => IVec3::new(0, 0, 1),
        }
    }
}
