//! 检测模块：技术检测核心逻辑
pub mod global;
pub mod detector;

// 导出核心接口
pub use self::global::global_detector;
pub use self::detector::{DetectInput, TechDetector};
