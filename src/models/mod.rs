//! # 数据模型模块
//!
//! 定义紧束缚模型的物理常数。
//!
//! ## 依赖关系
//! - 被 `band/` 和 `commands/` 使用
//! - 子模块: graphene

pub mod graphene;

pub use graphene::GrapheneModel;
