//! # 进度条工具
//!
//! 封装 `indicatif` 提供统一的进度显示样式。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `indicatif` crate

use indicatif::{ProgressBar, ProgressStyle};

/// 创建 spinner（用于不确定进度的任务）
pub fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.green} {elapsed_precise} {msg}")
            .unwrap()
            .tick_strings(&["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"]),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}
