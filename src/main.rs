//! # Graphband - 石墨烯紧束缚能带结构工具
//!
//! 在最近邻紧束缚近似下计算石墨烯的电子能带结构，
//! 并渲染带第一布里渊区边界和高对称点标注的 3D 能带曲面图。
//!
//! ## 子命令
//! - `plot` - 计算色散关系并渲染 3D 能带图
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── band/      (色散引擎、布里渊区几何、绘图)
//!   │     └── models/    (物理常数模型)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod band;
mod cli;
mod commands;
mod error;
mod models;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
