//! rswappalyzer-ffi - 以 C ABI 动态库导出 `wappalyzer` 检测函数
//!
//! C 侧声明：
//!
//! ```c
//! char* wappalyzer(const char* a, const char* b);
//! void  wappalyzer_free(char* p);
//! ```
//!
//! 返回的字符串由 `malloc` 分配，调用方用 `free` 释放；返回 `NULL` 表示没有检测结果。

// 导出全局错误类型
pub use self::error::{RswappalyzerError, RswResult};

// 导出配置模块
pub use self::config::{ConfigManager, CustomConfigBuilder, GlobalConfig, DEFAULT_LABEL};

// 导出检测模块核心接口
pub use self::detector::{DetectInput, TechDetector, global_detector};

// 导出工具模块核心接口
pub use self::utils::CStringConverter;

// 导出 C ABI 符号
pub use self::ffi::{wappalyzer, wappalyzer_free};

// 声明所有子模块
pub mod config;
pub mod error;
pub mod utils;
pub mod detector;
pub mod ffi;
