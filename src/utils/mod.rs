//! # 工具模块
//!
//! 提供终端输出与进度显示的工具函数。
//!
//! ## 依赖关系
//! - 被 `main.rs` 和 `commands/` 使用
//! - 子模块: output, progress

pub mod output;
pub mod progress;
