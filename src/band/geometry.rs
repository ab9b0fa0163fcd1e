//! # 布里渊区几何
//!
//! 由倒格矢大小 b 构造第一布里渊区的六边形边界，
//! 以及 Γ、M、K'、K 四个高对称点的坐标。
//!
//! 全部为物理常数的确定性纯函数，无错误路径。
//!
//! ## 依赖关系
//! - 被 `commands/plot.rs` 和 `band/plot.rs` 调用
//! - 使用 `models/graphene.rs` 的 GrapheneModel

use crate::models::GrapheneModel;

/// 倒空间中的一个波矢点 (Å⁻¹)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KPoint {
    pub kx: f64,
    pub ky: f64,
}

impl KPoint {
    /// 到原点 (Γ 点) 的欧氏距离
    pub fn distance_from_origin(&self) -> f64 {
        (self.kx * self.kx + self.ky * self.ky).sqrt()
    }
}

/// 带标签的高对称点
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HighSymmetryPoint {
    /// 标签（Γ、M、K'、K）
    pub label: &'static str,
    /// 波矢坐标
    pub point: KPoint,
}

/// 第一布里渊区边界的 6 个六边形顶点
///
/// 以原点为中心的正六边形，按逆时针顺序排列，首尾相接构成
/// 闭合多边形；两条边与 x 轴平行，顶点 x 坐标取 {b/2, 0, -b/2}。
pub fn brillouin_zone_vertices(model: &GrapheneModel) -> [KPoint; 6] {
    let b = model.b();
    let w = model.width();
    let y_half = w / (2.0 * 3.0_f64.sqrt());
    let y_full = w / 3.0_f64.sqrt();

    [
        KPoint { kx: b / 2.0, ky: y_half },
        KPoint { kx: 0.0, ky: y_full },
        KPoint { kx: -b / 2.0, ky: y_half },
        KPoint { kx: -b / 2.0, ky: -y_half },
        KPoint { kx: 0.0, ky: -y_full },
        KPoint { kx: b / 2.0, ky: -y_half },
    ]
}

/// 将一条六边形边细分为短直线段的采样点
///
/// 两端点均包含，用于渲染 z = 0 平面上的边界折线。
pub fn edge_segments(from: KPoint, to: KPoint, samples: usize) -> Vec<KPoint> {
    debug_assert!(samples >= 2);
    let step = 1.0 / (samples - 1) as f64;
    (0..samples)
        .map(|i| {
            let s = step * i as f64;
            KPoint {
                kx: from.kx + (to.kx - from.kx) * s,
                ky: from.ky + (to.ky - from.ky) * s,
            }
        })
        .collect()
}

/// 4 个高对称点：Γ（区中心）、M（边中点）、K' 和 K（区角）
pub fn high_symmetry_points(model: &GrapheneModel) -> [HighSymmetryPoint; 4] {
    let b = model.b();
    let w = model.width();
    let y_half = w / (2.0 * 3.0_f64.sqrt());
    let y_full = w / 3.0_f64.sqrt();

    [
        HighSymmetryPoint {
            label: "Γ",
            point: KPoint { kx: 0.0, ky: 0.0 },
        },
        HighSymmetryPoint {
            label: "M",
            point: KPoint { kx: b / 2.0, ky: 0.0 },
        },
        HighSymmetryPoint {
            label: "K'",
            point: KPoint { kx: b / 2.0, ky: y_half },
        },
        HighSymmetryPoint {
            label: "K",
            point: KPoint { kx: 0.0, ky: y_full },
        },
    ]
}
