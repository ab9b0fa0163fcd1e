//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `plot`: 计算并渲染 3D 能带结构图
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: plot

pub mod plot;

use clap::{Parser, Subcommand};

/// Graphband - 石墨烯紧束缚能带结构工具
#[derive(Parser)]
#[command(name = "graphband")]
#[command(version)]
#[command(about = "Graphene tight-binding band structure calculator and visualizer", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Compute the dispersion and render the 3D band structure plot
    Plot(plot::PlotArgs),
}
