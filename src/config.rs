//! 全局配置管理,存储所有可配置项

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::error::{RswResult, RswappalyzerError};

/// 默认检测标签
pub const DEFAULT_LABEL: &str = "cloudflare";

/// 全局配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalConfig {
    // 检测结果标签（默认借用静态字符串，构造时不分配）
    pub label: Cow<'static, str>,
    // 是否启用详细日志
    pub verbose: bool,
}

impl GlobalConfig {
    /// 默认配置常量，可用于 static 初始化
    pub const DEFAULT: GlobalConfig = GlobalConfig {
        label: Cow::Borrowed(DEFAULT_LABEL),
        verbose: false,
    };

    /// 从 JSON 字符串解析配置，缺失字段使用默认值
    pub fn from_json(json: &str) -> RswResult<Self> {
        let config: GlobalConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// 校验配置：标签必须非空且不含 NUL 字节
    pub fn validate(&self) -> RswResult<()> {
        if self.label.is_empty() {
            return Err(RswappalyzerError::ConfigError("label 不能为空".to_string()));
        }
        if self.label.as_bytes().contains(&0) {
            return Err(RswappalyzerError::ConfigError(format!(
                "label 包含 NUL 字节：{:?}",
                self.label
            )));
        }
        Ok(())
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// 配置管理器
pub struct ConfigManager;

impl ConfigManager {
    /// 获取默认配置
    pub fn get_default() -> GlobalConfig {
        GlobalConfig::default()
    }

    /// 自定义配置
    pub fn custom() -> CustomConfigBuilder {
        CustomConfigBuilder::new()
    }
}

/// 配置构建器（便于自定义配置）
#[derive(Debug, Clone, Default)]
pub struct CustomConfigBuilder {
    config: GlobalConfig,
}

impl CustomConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: GlobalConfig::default(),
        }
    }

    pub fn label(mut self, label: impl Into<Cow<'static, str>>) -> Self {
        self.config.label = label.into();
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.config.verbose = verbose;
        self
    }

    pub fn build(self) -> RswResult<GlobalConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
