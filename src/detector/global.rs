//! 全局默认检测器
//! 导出符号始终使用默认配置；实例在编译期构造，只读，无需初始化也无需加锁

use super::detector::TechDetector;
use crate::config::GlobalConfig;

/// 全局检测器实例（默认配置，标签借用静态字符串）
static GLOBAL_DETECTOR: TechDetector = TechDetector::from_valid_config(GlobalConfig::DEFAULT);

/// 获取全局检测器
pub fn global_detector() -> &'static TechDetector {
    &GLOBAL_DETECTOR
}
