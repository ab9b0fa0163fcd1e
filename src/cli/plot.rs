//! # plot 子命令 CLI 定义
//!
//! 能带图计算与渲染的参数。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/plot.rs`

use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// 图像输出格式
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum PlotOutputFormat {
    /// PNG image (publication quality)
    Png,
    /// SVG vector image
    Svg,
}

impl std::fmt::Display for PlotOutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlotOutputFormat::Png => write!(f, "png"),
            PlotOutputFormat::Svg => write!(f, "svg"),
        }
    }
}

/// plot 子命令参数
#[derive(Args, Debug)]
pub struct PlotArgs {
    /// Grid resolution along each k axis (samples across [-b, b], must be >= 2)
    #[arg(short = 'n', long, default_value_t = 200)]
    pub resolution: usize,

    /// Output image path
    #[arg(short, long, default_value = "band_structure.png")]
    pub output: PathBuf,

    /// Output format (auto-detected from extension if not specified)
    #[arg(short, long, value_enum)]
    pub format: Option<PlotOutputFormat>,

    /// Figure width in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 1200)]
    pub width: u32,

    /// Figure height in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 900)]
    pub height: u32,

    /// Number of parallel jobs for the surface evaluation (0 = auto)
    #[arg(short, long, default_value_t = 0)]
    pub jobs: usize,

    /// Title for the plot
    #[arg(long, default_value = "Graphene band structure (nearest-neighbor tight binding)")]
    pub title: String,
}
