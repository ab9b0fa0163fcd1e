//! # 能带图生成
//!
//! 使用 `plotters` 库生成 3D 双叶能带曲面图。
//!
//! ## 功能
//! - 双分支能带曲面（按能量着色）
//! - 第一布里渊区六边形边界（E = 0 平面）
//! - 高对称点标记与标签
//! - 支持 PNG 和 SVG 输出
//!
//! 本模块只消费已计算好的数组，不做任何物理计算。
//!
//! ## 依赖关系
//! - 被 `commands/plot.rs` 调用
//! - 使用 `band/dispersion.rs` 的 KGrid, BandSurface
//! - 使用 `band/geometry.rs` 的 KPoint, HighSymmetryPoint
//! - 使用 `plotters` 渲染图表

use crate::band::dispersion::{BandSurface, KGrid};
use crate::band::geometry::{HighSymmetryPoint, KPoint};
use crate::error::{GraphbandError, Result};
use crate::models::GrapheneModel;

use plotters::coord::ranged3d::Cartesian3d;
use plotters::coord::types::RangedCoordf64;
use plotters::prelude::*;
use plotters::style::colors::colormaps::ViridisRGB;
use std::path::Path;

/// 能量轴下限 (eV)，同时作为着色范围下限
const E_MIN: f64 = -10.0;
/// 能量轴上限 (eV)，同时作为着色范围上限
const E_MAX: f64 = 15.0;
/// 高对称点标签相对标记点的高度偏移 (eV)
const LABEL_OFFSET: f64 = 1.0;

/// 生成 3D 能带图
#[allow(clippy::too_many_arguments)]
pub fn generate_band_plot(
    model: &GrapheneModel,
    grid: &KGrid,
    surfaces: &[&BandSurface],
    boundary: &[Vec<KPoint>],
    points: &[(HighSymmetryPoint, f64)],
    output_path: &Path,
    title: &str,
    width: u32,
    height: u32,
    use_svg: bool,
) -> Result<()> {
    if use_svg {
        let root = SVGBackend::new(output_path, (width, height)).into_drawing_area();
        draw_band_chart(&root, model, grid, surfaces, boundary, points, title)?;
        root.present()
            .map_err(|e| GraphbandError::RenderError(e.to_string()))?;
    } else {
        let root = BitMapBackend::new(output_path, (width, height)).into_drawing_area();
        draw_band_chart(&root, model, grid, surfaces, boundary, points, title)?;
        root.present()
            .map_err(|e| GraphbandError::RenderError(e.to_string()))?;
    }
    Ok(())
}

/// 3D 图表上下文类型别名
type Chart3d<'a, DB> =
    ChartContext<'a, DB, Cartesian3d<RangedCoordf64, RangedCoordf64, RangedCoordf64>>;

/// 绘制能带图表的核心逻辑
#[allow(clippy::too_many_arguments)]
fn draw_band_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, plotters::coord::Shift>,
    model: &GrapheneModel,
    grid: &KGrid,
    surfaces: &[&BandSurface],
    boundary: &[Vec<KPoint>],
    points: &[(HighSymmetryPoint, f64)],
    title: &str,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)
        .map_err(|e| GraphbandError::RenderError(format!("{:?}", e)))?;

    let w = model.width();

    let mut chart = ChartBuilder::on(root)
        .caption(title, ("sans-serif", 28).into_font())
        .margin(30)
        .build_cartesian_3d(-w..w, E_MIN..E_MAX, -w..w)
        .map_err(|e| GraphbandError::RenderError(format!("{:?}", e)))?;

    // 视角接近 matplotlib 默认 (elev=30°, azim=-60°)
    chart.with_projection(|mut pb| {
        pb.pitch = 0.45;
        pb.yaw = 0.9;
        pb.scale = 0.8;
        pb.into_matrix()
    });

    // x/z 轴（kx, ky）5 个刻度，y 轴（能量）6 个刻度
    chart
        .configure_axes()
        .x_labels(5)
        .y_labels(6)
        .z_labels(5)
        .label_style(("sans-serif", 14))
        .draw()
        .map_err(|e| GraphbandError::RenderError(format!("{:?}", e)))?;

    // 先画下叶再画上叶，保证上叶覆盖在前
    for surface in surfaces {
        draw_surface(&mut chart, grid, surface)?;
    }

    // 布里渊区边界: E = 0 平面上的闭合折线
    for segment in boundary {
        chart
            .draw_series(LineSeries::new(
                segment.iter().map(|p| (p.kx, 0.0, p.ky)),
                BLACK.stroke_width(2),
            ))
            .map_err(|e| GraphbandError::RenderError(format!("{:?}", e)))?;
    }

    // 高对称点标记与标签
    for (hsp, energy) in points {
        chart
            .draw_series(std::iter::once(Circle::new(
                (hsp.point.kx, *energy, hsp.point.ky),
                4,
                BLACK.filled(),
            )))
            .map_err(|e| GraphbandError::RenderError(format!("{:?}", e)))?;

        chart
            .draw_series(std::iter::once(Text::new(
                hsp.label,
                (hsp.point.kx, *energy + LABEL_OFFSET, hsp.point.ky),
                ("sans-serif", 18).into_font().color(&BLACK),
            )))
            .map_err(|e| GraphbandError::RenderError(format!("{:?}", e)))?;
    }

    // 轴名称
    let axis_labels = [
        ("k_x", (0.0, E_MIN, 1.25 * w)),
        ("k_y", (1.25 * w, E_MIN, 0.0)),
        ("E [eV]", (-1.3 * w, 0.5 * (E_MIN + E_MAX), -1.3 * w)),
    ];
    for (label, pos) in axis_labels {
        chart
            .draw_series(std::iter::once(Text::new(
                label,
                pos,
                ("sans-serif", 16).into_font().color(&BLACK),
            )))
            .map_err(|e| GraphbandError::RenderError(format!("{:?}", e)))?;
    }

    Ok(())
}

/// 绘制单个能带曲面
///
/// 将每个网格单元画成按平均能量着色的四边形面片。
fn draw_surface<DB: DrawingBackend>(
    chart: &mut Chart3d<'_, DB>,
    grid: &KGrid,
    surface: &BandSurface,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    let n = grid.n();
    let xs = grid.xs();
    let ys = grid.ys();

    let mut cells = Vec::with_capacity((n - 1) * (n - 1));
    for i in 0..n - 1 {
        for j in 0..n - 1 {
            let quad = vec![
                (xs[j], surface.at(i, j), ys[i]),
                (xs[j + 1], surface.at(i, j + 1), ys[i]),
                (xs[j + 1], surface.at(i + 1, j + 1), ys[i + 1]),
                (xs[j], surface.at(i + 1, j), ys[i + 1]),
            ];
            let mean = quad.iter().map(|p| p.1).sum::<f64>() / 4.0;
            let color = ViridisRGB::get_color_normalized(mean, E_MIN, E_MAX);
            cells.push(Polygon::new(quad, color.mix(0.9).filled()));
        }
    }

    chart
        .draw_series(cells)
        .map_err(|e| GraphbandError::RenderError(format!("{:?}", e)))?;

    Ok(())
}
