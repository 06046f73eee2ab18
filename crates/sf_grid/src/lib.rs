// crates/sf_grid/src/lib.rs

//! ShockFlow 结构网格层
//!
//! 提供块结构网格求解器所需的几何与存储设施：
//!
//! - [`axis`]: 坐标轴与域面枚举（含外法向）
//! - [`index`]: 纯索引运算（线性偏移、物理坐标与节点坐标互换）
//! - [`partition`]: 内部/边界/虚网格分区的索引范围布局
//! - [`field`]: 多时间层守恒量场与几何分类标记
//!
//! 索引约定：节点按行主序存储，`idx = (k*ny + j)*nx + i`，
//! 其中 i ⇔ X、j ⇔ Y、k ⇔ Z。所有组件必须遵循同一约定。

pub mod axis;
pub mod field;
pub mod index;
pub mod partition;

pub use axis::{Axis, Face};
pub use field::{Conserved, FlowField, GeoTag, TimeLevel};
pub use index::{clamp_to_range, linear_offset, node_from_physical, physical_from_node};
pub use partition::{IndexRange, Partition, Region};
