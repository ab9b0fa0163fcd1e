//! # 石墨烯物理常数模型
//!
//! 最近邻紧束缚近似下石墨烯的物理参数。
//! 所有参数在构造时固定，作为只读值显式传入各计算模块，
//! 不使用全局可变状态。
//!
//! ## 依赖关系
//! - 被 `band/` 和 `commands/` 使用
//! - 无外部模块依赖

use std::f64::consts::PI;

/// 最近邻原子间的跃迁积分 t (eV)，按惯例取负值
pub const TRANSFER_INTEGRAL: f64 = -3.033;

/// 基本格矢 a 的大小 (Å)
pub const LATTICE_CONSTANT: f64 = 2.461;

/// 石墨烯紧束缚模型参数
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrapheneModel {
    /// 跃迁积分 t (eV)
    pub t: f64,
    /// 晶格常数 a (Å)
    pub a: f64,
}

impl GrapheneModel {
    /// 用给定参数创建模型
    pub fn new(t: f64, a: f64) -> Self {
        Self { t, a }
    }

    /// 倒格矢 b 的大小: b = 4π / (√3·a)
    pub fn b(&self) -> f64 {
        4.0 * PI / (3.0_f64.sqrt() * self.a)
    }

    /// 绘图半宽（覆盖整个第一布里渊区，取 b）
    pub fn width(&self) -> f64 {
        self.b()
    }
}

impl Default for GrapheneModel {
    fn default() -> Self {
        Self::new(TRANSFER_INTEGRAL, LATTICE_CONSTANT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reciprocal_magnitude() {
        let model = GrapheneModel::default();
        // b = 4π / (√3·2.461) ≈ 2.9485 Å⁻¹
        let expected = 4.0 * PI / (3.0_f64.sqrt() * 2.461);
        assert!((model.b() - expected).abs() < 1e-12);
        assert!((model.b() - 2.9485).abs() < 1e-3);
    }

    #[test]
    fn test_width_covers_first_zone() {
        let model = GrapheneModel::default();
        assert_eq!(model.width(), model.b());
    }
}
