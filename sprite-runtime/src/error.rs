//! # Error 模块
//!
//! 定义 sprite-runtime 中使用的错误类型。
//!
//! 整个系统只有一种可识别的失败：挂载时找不到容器。
//! 动画器构造完成之后的所有操作都是全函数，不会失败。

use thiserror::Error;

/// 动画错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnimError {
    /// 容器未找到
    ///
    /// 挂载时宿主无法解析指定的容器，动画降级为不出现。
    #[error("容器 '{container}' 未找到，动画未挂载")]
    MissingContainer { container: String },
}

/// Result 类型别名
pub type AnimResult<T> = Result<T, AnimError>;
