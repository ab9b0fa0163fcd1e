//! # 统一错误处理模块
//!
//! 定义 Graphband 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// Graphband 统一错误类型
#[derive(Error, Debug)]
pub enum GraphbandError {
    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // ─────────────────────────────────────────────────────────────
    // 渲染错误
    // ─────────────────────────────────────────────────────────────
    #[error("Render failed: {0}")]
    RenderError(String),

    // ─────────────────────────────────────────────────────────────
    // 其他
    // ─────────────────────────────────────────────────────────────
    #[error("{0}")]
    Other(String),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, GraphbandError>;
