//! 检测器核心：接收 FFI 输入，输出检测标签
use std::ffi::{CStr, c_char};
use std::ptr::NonNull;

use tracing::debug;

use crate::config::GlobalConfig;
use crate::error::RswResult;
use crate::utils::CStringConverter;

/// 检测输入：调用方传入的两个 C 字符串（仅在本次调用期间借用）
///
/// 两个参数的语义尚未约定，这里只按位置命名。
#[derive(Debug, Clone, Copy, Default)]
pub struct DetectInput<'a> {
    pub first: Option<&'a CStr>,
    pub second: Option<&'a CStr>,
}

impl<'a> DetectInput<'a> {
    pub fn new(first: Option<&'a CStr>, second: Option<&'a CStr>) -> Self {
        Self { first, second }
    }

    /// 从裸指针构造，空指针视为缺省
    ///
    /// # Safety
    /// 每个指针为空，或指向在 `'a` 内有效的 NUL 结尾字节序列。
    pub unsafe fn from_raw(first: *const c_char, second: *const c_char) -> Self {
        unsafe {
            Self {
                first: CStringConverter::borrow(first),
                second: CStringConverter::borrow(second),
            }
        }
    }
}

/// 技术检测器
#[derive(Debug, Clone)]
pub struct TechDetector {
    config: GlobalConfig,
}

impl TechDetector {
    /// 创建检测器（校验配置）
    pub fn new(config: GlobalConfig) -> RswResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// 编译期构造，仅用于已知合法的配置
    pub(crate) const fn from_valid_config(config: GlobalConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GlobalConfig {
        &self.config
    }

    /// 核心检测接口：当前实现不依据输入分类，固定返回配置的标签
    pub fn detect(&self, input: &DetectInput<'_>) -> &str {
        if self.config.verbose {
            debug!(
                first_len = ?input.first.map(|s| s.to_bytes().len()),
                second_len = ?input.second.map(|s| s.to_bytes().len()),
                label = %self.config.label,
                "wappalyzer detect called"
            );
        }
        &self.config.label
    }

    /// 检测并把结果复制到 C 分配器的缓冲区，调用方负责 `free`
    pub fn detect_to_c(&self, input: &DetectInput<'_>) -> RswResult<NonNull<c_char>> {
        CStringConverter::to_malloc(self.detect(input))
    }
}

impl Default for TechDetector {
    fn default() -> Self {
        Self::from_valid_config(GlobalConfig::DEFAULT)
    }
}
