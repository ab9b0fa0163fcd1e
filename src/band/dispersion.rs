//! # 色散引擎
//!
//! 实现最近邻紧束缚近似下石墨烯能带色散的核心计算。
//!
//! ## 算法概述
//! 1. 在 [-b, b]² 上构造 (n×n) 波矢网格（两端点均包含）
//! 2. 逐点计算结构因子 |f(k)|
//! 3. 对每个分支取 E±(k) = ±t·√|f(k)|
//!
//! 在狄拉克点处根号内的表达式趋于零，浮点舍入可能产生
//! 极小的负值，因此结构因子对结果取绝对值。
//!
//! ## 参考
//! - 物性物理学（中野） 石墨烯紧束缚模型
//!
//! ## 依赖关系
//! - 被 `commands/plot.rs` 和 `band/plot.rs` 调用
//! - 使用 `models/graphene.rs` 的 GrapheneModel
//! - 使用 `rayon` 进行逐行并行计算

use crate::error::{GraphbandError, Result};
use crate::models::GrapheneModel;

use rayon::prelude::*;

/// 能带分支
///
/// 用封闭枚举代替字符串选择子，使非法分支在类型层面不可表示。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Branch {
    /// 成键带: E = t·√|f|（t 为负，能量较低的一支）
    Upper,
    /// 反键带: E = -t·√|f|
    Lower,
}

impl Branch {
    /// 分支符号因子
    fn sign(self) -> f64 {
        match self {
            Branch::Upper => 1.0,
            Branch::Lower => -1.0,
        }
    }
}

impl std::fmt::Display for Branch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Branch::Upper => write!(f, "upper"),
            Branch::Lower => write!(f, "lower"),
        }
    }
}

/// 结构因子 |f(kx, ky)|
///
/// |1 + 4·cos(√3·kx·a/2)·cos(ky·a/2) + 4·cos²(ky·a/2)|
///
/// 对所有实数输入有定义，返回非负值。
pub fn structure_factor(model: &GrapheneModel, x: f64, y: f64) -> f64 {
    let cx = (3.0_f64.sqrt() * x * model.a / 2.0).cos();
    let cy = (y * model.a / 2.0).cos();
    (1.0 + 4.0 * cx * cy + 4.0 * cy * cy).abs()
}

/// 能带能量 E±(kx, ky) (eV)
///
/// 上分支为 t·√|f|，下分支取其相反数（粒子-空穴对称）。
pub fn band_energy(model: &GrapheneModel, x: f64, y: f64, branch: Branch) -> f64 {
    branch.sign() * model.t * structure_factor(model, x, y).sqrt()
}

/// 波矢网格
///
/// [-b, b]² 上的 (n×n) meshgrid：kx 沿列方向变化，ky 沿行方向变化，
/// 行主序平铺存储。
#[derive(Debug, Clone)]
pub struct KGrid {
    /// 每个方向的采样数
    n: usize,
    /// kx 轴采样值（长度 n）
    xs: Vec<f64>,
    /// ky 轴采样值（长度 n）
    ys: Vec<f64>,
    /// kx 分量 2D 数组 (n×n)
    kx: Vec<f64>,
    /// ky 分量 2D 数组 (n×n)
    ky: Vec<f64>,
}

impl KGrid {
    /// 构造覆盖 [-b, b]² 的网格
    ///
    /// n 是每个方向的采样数，必须 ≥ 2（两端点均包含）。
    pub fn new(model: &GrapheneModel, n: usize) -> Result<Self> {
        if n < 2 {
            return Err(GraphbandError::InvalidArgument(format!(
                "Grid resolution must be at least 2, got {}",
                n
            )));
        }

        let w = model.width();
        let xs = linspace(-w, w, n);
        let ys = linspace(-w, w, n);

        let mut kx = Vec::with_capacity(n * n);
        let mut ky = Vec::with_capacity(n * n);
        for &y in &ys {
            for &x in &xs {
                kx.push(x);
                ky.push(y);
            }
        }

        Ok(Self { n, xs, ys, kx, ky })
    }

    /// 每个方向的采样数
    pub fn n(&self) -> usize {
        self.n
    }

    /// kx 轴采样值
    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    /// ky 轴采样值
    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    /// 网格点 (i, j) 处的 kx（i 为行索引，j 为列索引）
    pub fn kx_at(&self, i: usize, j: usize) -> f64 {
        self.kx[i * self.n + j]
    }

    /// 网格点 (i, j) 处的 ky
    pub fn ky_at(&self, i: usize, j: usize) -> f64 {
        self.ky[i * self.n + j]
    }

    /// 网格点总数
    pub fn len(&self) -> usize {
        self.n * self.n
    }
}

/// 单个分支的能带曲面
///
/// (n×n) 能量数组，行主序存储，索引约定与 KGrid 一致。
#[derive(Debug, Clone)]
pub struct BandSurface {
    n: usize,
    values: Vec<f64>,
}

impl BandSurface {
    /// 网格点 (i, j) 处的能量 (eV)
    pub fn at(&self, i: usize, j: usize) -> f64 {
        self.values[i * self.n + j]
    }

    /// 曲面上的最小能量
    pub fn min(&self) -> f64 {
        self.values.iter().copied().fold(f64::INFINITY, f64::min)
    }

    /// 曲面上的最大能量
    pub fn max(&self) -> f64 {
        self.values
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max)
    }
}

/// 在整个网格上计算一个分支的能带曲面
///
/// 逐行并行；在调用方配置的 rayon 线程池内执行。
pub fn band_surface(model: &GrapheneModel, grid: &KGrid, branch: Branch) -> BandSurface {
    let n = grid.n();

    let rows: Vec<Vec<f64>> = (0..n)
        .into_par_iter()
        .map(|i| {
            let y = grid.ys()[i];
            grid.xs()
                .iter()
                .map(|&x| band_energy(model, x, y, branch))
                .collect()
        })
        .collect();

    BandSurface {
        n,
        values: rows.into_iter().flatten().collect(),
    }
}

/// 两端点均包含的等间距采样
fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    debug_assert!(n >= 2);
    let step = (end - start) / (n - 1) as f64;
    (0..n).map(|i| start + step * i as f64).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    const TOL: f64 = 1e-9;

    #[test]
    fn test_structure_factor_at_gamma() {
        // cos(0) = 1: 1 + 4·1·1 + 4·1 = 9
        let model = GrapheneModel::default();
        assert!((structure_factor(&model, 0.0, 0.0) - 9.0).abs() < TOL);
    }

    #[test]
    fn test_band_energy_at_gamma() {
        let model = GrapheneModel::default();
        // E+(Γ) = 3t ≈ -9.099 eV
        let upper = band_energy(&model, 0.0, 0.0, Branch::Upper);
        let lower = band_energy(&model, 0.0, 0.0, Branch::Lower);
        assert!((upper - 3.0 * model.t).abs() < TOL);
        assert!((upper + 9.099).abs() < 1e-12);
        assert!((lower - 9.099).abs() < 1e-12);
    }

    #[test]
    fn test_structure_factor_nonnegative() {
        let model = GrapheneModel::default();
        let w = model.width();
        let samples = linspace(-w, w, 41);
        for &x in &samples {
            for &y in &samples {
                assert!(
                    structure_factor(&model, x, y) >= 0.0,
                    "negative structure factor at ({}, {})",
                    x,
                    y
                );
            }
        }
    }

    #[test]
    fn test_particle_hole_symmetry() {
        let model = GrapheneModel::default();
        let w = model.width();
        let samples = linspace(-w, w, 17);
        for &x in &samples {
            for &y in &samples {
                let plus = band_energy(&model, x, y, Branch::Upper);
                let minus = band_energy(&model, x, y, Branch::Lower);
                assert!((plus + minus).abs() < TOL);
            }
        }
    }

    #[test]
    fn test_bands_touch_at_dirac_points() {
        let model = GrapheneModel::default();
        // K = (0, 4π/(3a)) 和 K' = (2π/(√3·a), 2π/(3a)) 是结构因子的零点
        let k = (0.0, 4.0 * PI / (3.0 * model.a));
        let k_prime = (2.0 * PI / (3.0_f64.sqrt() * model.a), 2.0 * PI / (3.0 * model.a));

        for (x, y) in [k, k_prime] {
            assert!(structure_factor(&model, x, y) < TOL);
            assert!(band_energy(&model, x, y, Branch::Upper).abs() < TOL);
            assert!(band_energy(&model, x, y, Branch::Lower).abs() < TOL);
        }
    }

    #[test]
    fn test_grid_minimal_resolution() {
        let model = GrapheneModel::default();
        let w = model.width();
        let grid = KGrid::new(&model, 2).unwrap();

        assert_eq!(grid.n(), 2);
        assert_eq!(grid.len(), 4);
        // 两个端点都被精确覆盖
        assert_eq!(grid.xs(), &[-w, w]);
        assert_eq!(grid.ys(), &[-w, w]);
        // meshgrid 约定: kx 沿列变化，ky 沿行变化
        assert_eq!(grid.kx_at(0, 0), -w);
        assert_eq!(grid.kx_at(0, 1), w);
        assert_eq!(grid.ky_at(0, 1), -w);
        assert_eq!(grid.ky_at(1, 0), w);
    }

    #[test]
    fn test_grid_rejects_degenerate_resolution() {
        let model = GrapheneModel::default();
        assert!(matches!(
            KGrid::new(&model, 0),
            Err(GraphbandError::InvalidArgument(_))
        ));
        assert!(matches!(
            KGrid::new(&model, 1),
            Err(GraphbandError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_surface_matches_scalar_evaluation() {
        let model = GrapheneModel::default();
        let grid = KGrid::new(&model, 25).unwrap();
        let surface = band_surface(&model, &grid, Branch::Upper);

        for &(i, j) in &[(0, 0), (0, 24), (12, 7), (24, 24)] {
            let expected = band_energy(&model, grid.kx_at(i, j), grid.ky_at(i, j), Branch::Upper);
            assert!((surface.at(i, j) - expected).abs() < TOL);
        }
    }

    #[test]
    fn test_surface_energy_range() {
        let model = GrapheneModel::default();
        let grid = KGrid::new(&model, 60).unwrap();
        let upper = band_surface(&model, &grid, Branch::Upper);

        // 上分支（成键带）能量落在 [3t, 0] 内
        assert!(upper.min() >= 3.0 * model.t - TOL);
        assert!(upper.max() <= TOL);
    }
}
