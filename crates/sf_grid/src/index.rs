// crates/sf_grid/src/index.rs

//! 纯索引运算
//!
//! 三维节点坐标与线性存储偏移、物理坐标与节点坐标之间的互换。
//! 这里不做任何越界检查：调用方必须保证索引落在
//! [`Partition`](crate::partition::Partition) 给出的范围内。

/// 行主序线性偏移
///
/// `offset = (k*j_extent + j)*i_extent + i`。
/// 所有遍历网格的组件必须使用同一偏移公式。
#[inline]
pub fn linear_offset(k: usize, j: usize, i: usize, j_extent: usize, i_extent: usize) -> usize {
    (k * j_extent + j) * i_extent + i
}

/// 物理坐标映射到最近的节点坐标
///
/// 截断取整向零偏置，因此先加半个网格距离再截断，
/// 才能得到最近节点。仅对 `s >= s_min` 的坐标有效。
#[inline]
pub fn node_from_physical(s: f64, s_min: f64, inv_spacing: f64, ng: usize) -> i64 {
    ((s - s_min) * inv_spacing + 0.5) as i64 + ng as i64
}

/// 将节点坐标钳制到半开区间 `[n_min, n_max)`
#[inline]
pub fn clamp_to_range(n: i64, n_min: i64, n_max: i64) -> i64 {
    (n_max - 1).min(n_min.max(n))
}

/// 节点坐标映射回物理坐标（精确逆映射，无舍入）
#[inline]
pub fn physical_from_node(n: i64, s_min: f64, spacing: f64, ng: usize) -> f64 {
    s_min + (n - ng as i64) as f64 * spacing
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_offset_row_major() {
        // 3x4x5 网格 (k,j,i)
        assert_eq!(linear_offset(0, 0, 0, 4, 5), 0);
        assert_eq!(linear_offset(0, 0, 1, 4, 5), 1);
        assert_eq!(linear_offset(0, 1, 0, 4, 5), 5);
        assert_eq!(linear_offset(1, 0, 0, 4, 5), 20);
        assert_eq!(linear_offset(2, 3, 4, 4, 5), (2 * 4 + 3) * 5 + 4);
    }

    #[test]
    fn test_node_from_physical_rounding_bias() {
        // 间距 0.1，ng=2：半格以内取最近节点
        let dds = 10.0;
        assert_eq!(node_from_physical(0.0, 0.0, dds, 2), 2);
        assert_eq!(node_from_physical(0.04, 0.0, dds, 2), 2);
        assert_eq!(node_from_physical(0.06, 0.0, dds, 2), 3);
        assert_eq!(node_from_physical(0.1, 0.0, dds, 2), 3);
    }

    #[test]
    fn test_clamp_to_range_half_open() {
        assert_eq!(clamp_to_range(5, 0, 10), 5);
        assert_eq!(clamp_to_range(-3, 0, 10), 0);
        assert_eq!(clamp_to_range(10, 0, 10), 9);
        assert_eq!(clamp_to_range(42, 0, 10), 9);
    }

    #[test]
    fn test_physical_from_node_exact_inverse() {
        // 舍入偏置只对 s >= s_min 成立，因此从 ng 开始
        let (s_min, ds, ng) = (-1.0, 0.25, 3);
        for n in ng as i64..20i64 {
            let s = physical_from_node(n, s_min, ds, ng);
            assert_eq!(node_from_physical(s, s_min, 1.0 / ds, ng), n);
        }
        assert_eq!(physical_from_node(3, s_min, ds, ng), -1.0);
    }
}
