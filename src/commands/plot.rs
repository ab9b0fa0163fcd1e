//! # plot 子命令实现
//!
//! 计算石墨烯紧束缚色散并渲染 3D 能带结构图。
//!
//! ## 流程
//! 1. 构造波矢网格（校验分辨率）
//! 2. 并行计算两个分支的能带曲面
//! 3. 构造布里渊区边界与高对称点
//! 4. 打印高对称点表格
//! 5. 渲染图像 (PNG/SVG)
//!
//! ## 依赖关系
//! - 使用 `cli/plot.rs` 定义的 PlotArgs
//! - 使用 `band/` 模块进行计算与绘图
//! - 使用 `utils/output.rs`, `utils/progress.rs`

use crate::band::{
    band_energy, band_surface, brillouin_zone_vertices, edge_segments, high_symmetry_points,
    plot as band_plot, Branch, KGrid, KPoint,
};
use crate::cli::plot::{PlotArgs, PlotOutputFormat};
use crate::error::{GraphbandError, Result};
use crate::models::GrapheneModel;
use crate::utils::{output, progress};

use std::path::Path;
use tabled::{Table, Tabled};

/// 每条六边形边细分的采样点数
const EDGE_SAMPLES: usize = 4;

/// 高对称点表格行
#[derive(Debug, Clone, Tabled)]
struct PointRow {
    #[tabled(rename = "Point")]
    label: String,
    #[tabled(rename = "kx (1/Å)")]
    kx: String,
    #[tabled(rename = "ky (1/Å)")]
    ky: String,
    #[tabled(rename = "E+ (eV)")]
    energy: String,
}

/// 执行能带图计算
pub fn execute(args: PlotArgs) -> Result<()> {
    output::print_header("Graphene Tight-Binding Band Structure");

    let model = GrapheneModel::default();
    output::print_info(&format!(
        "t = {} eV, a = {} Å, b = {:.4} Å⁻¹",
        model.t, model.a, model.b()
    ));

    // 构造网格（n < 2 在这里被拒绝）
    let grid = KGrid::new(&model, args.resolution)?;
    output::print_info(&format!(
        "Grid: {}×{} k-points over [-b, b]²",
        grid.n(),
        grid.n()
    ));

    // 配置 rayon 线程池
    let jobs = if args.jobs == 0 {
        num_cpus::get()
    } else {
        args.jobs
    };
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(jobs)
        .build()
        .map_err(|e| GraphbandError::Other(e.to_string()))?;

    // 计算两个分支的能带曲面
    let pb = progress::create_spinner(&format!(
        "Computing band surfaces ({} points × 2 bands, {} threads)...",
        grid.len(),
        jobs
    ));
    let (upper, lower) = pool.install(|| {
        (
            band_surface(&model, &grid, Branch::Upper),
            band_surface(&model, &grid, Branch::Lower),
        )
    });
    pb.finish_and_clear();
    output::print_info(&format!(
        "Energy range: [{:.3}, {:.3}] eV",
        upper.min(),
        lower.max()
    ));

    // 布里渊区边界（闭合六边形，每条边细分为短直线段）
    let vertices = brillouin_zone_vertices(&model);
    let boundary: Vec<Vec<KPoint>> = (0..vertices.len())
        .map(|i| {
            let from = vertices[(i + vertices.len() - 1) % vertices.len()];
            edge_segments(from, vertices[i], EDGE_SAMPLES)
        })
        .collect();

    // 高对称点及其上分支能量（用于标注）
    let points: Vec<_> = high_symmetry_points(&model)
        .into_iter()
        .map(|hsp| {
            let e = band_energy(&model, hsp.point.kx, hsp.point.ky, Branch::Upper);
            (hsp, e)
        })
        .collect();

    // 显示表格
    let table_rows: Vec<PointRow> = points
        .iter()
        .map(|(hsp, e)| PointRow {
            label: hsp.label.to_string(),
            kx: format!("{:.4}", hsp.point.kx),
            ky: format!("{:.4}", hsp.point.ky),
            energy: format!("{:.4}", e),
        })
        .collect();
    let table = Table::new(&table_rows);
    println!("{}", table);

    // 推断输出格式
    let format = args
        .format
        .map(Ok)
        .unwrap_or_else(|| detect_format(&args.output))?;

    // 渲染（先成键带后反键带）
    band_plot::generate_band_plot(
        &model,
        &grid,
        &[&upper, &lower],
        &boundary,
        &points,
        &args.output,
        &args.title,
        args.width,
        args.height,
        format == PlotOutputFormat::Svg,
    )?;

    output::print_success(&format!(
        "Band structure plot saved to '{}'",
        args.output.display()
    ));

    Ok(())
}

/// 根据扩展名推断输出格式（无法识别时默认 PNG）
fn detect_format(path: &Path) -> Result<PlotOutputFormat> {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("svg") => Ok(PlotOutputFormat::Svg),
        Some(ext) if ext.eq_ignore_ascii_case("png") => Ok(PlotOutputFormat::Png),
        Some(ext) => Err(GraphbandError::InvalidArgument(format!(
            "Unsupported output extension '.{}'. Use .png or .svg, or pass --format",
            ext
        ))),
        None => Ok(PlotOutputFormat::Png),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_detect_format() {
        assert_eq!(
            detect_format(&PathBuf::from("out.png")).unwrap(),
            PlotOutputFormat::Png
        );
        assert_eq!(
            detect_format(&PathBuf::from("out.SVG")).unwrap(),
            PlotOutputFormat::Svg
        );
        assert_eq!(
            detect_format(&PathBuf::from("out")).unwrap(),
            PlotOutputFormat::Png
        );
        assert!(detect_format(&PathBuf::from("out.pdf")).is_err());
    }
}
