//! # 能带计算模块
//!
//! 提供石墨烯紧束缚能带结构的计算与绘图功能。
//!
//! ## 子模块
//! - `dispersion`: 色散引擎（结构因子、能带、k 网格）
//! - `geometry`: 布里渊区边界与高对称点
//! - `plot`: 3D 能带图生成
//!
//! ## 依赖关系
//! - 被 `commands/plot.rs` 使用
//! - 使用 `models/graphene.rs` 的物理常数

pub mod dispersion;
pub mod geometry;
pub mod plot;

pub use dispersion::{band_energy, band_surface, Branch, KGrid};
pub use geometry::{brillouin_zone_vertices, edge_segments, high_symmetry_points, KPoint};
