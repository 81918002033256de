//! 全局错误类型定义

use thiserror::Error;
use serde_json::Error as SerdeJsonError;

#[derive(Error, Debug)]
pub enum RswappalyzerError {
    // C 字符串相关错误
    #[error("字符串包含内部 NUL 字节，位置：{0}")]
    InteriorNul(usize),
    #[error("C 分配器申请内存失败：{0} 字节")]
    AllocationFailed(usize),

    // 配置相关错误
    #[error("配置无效：{0}")]
    ConfigError(String),
    #[error("JSON解析失败：{0}")]
    JsonError(#[from] SerdeJsonError),

    // 基础错误
    #[error("FFI 边界捕获到 panic：{0}")]
    Panic(String),
}

// 全局Result类型
pub type RswResult<T> = Result<T, RswappalyzerError>;
