//! 规则数据模型定义
//! 仅存储规则数据，无任何业务逻辑

use serde::{Deserialize, Serialize};

/// 重写指令（from/to 模式对）
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RewriteDirective {
    pub from: Option<String>,
    pub to: Option<String>,
}

impl RewriteDirective {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: Some(from.into()),
            to: Some(to.into()),
        }
    }
}

/// 规则集作用的目标域名
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Target {
    pub host: Option<String>,
}

impl Target {
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: Some(host.into()),
        }
    }
}

/// 单个规则文件解析后的规则集
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawRuleset {
    pub name: String,
    /// default_off 属性原值（存在且非空即视为默认关闭）
    pub default_off: Option<String>,
    pub platform: Option<String>,
    pub rules: Vec<RewriteDirective>,
    pub targets: Vec<Target>,
}

impl RawRuleset {
    /// 是否默认关闭
    pub fn is_default_off(&self) -> bool {
        self.default_off.as_deref().is_some_and(|v| !v.is_empty())
    }
}

/// 通过过滤后保留的规则集数据（域名保留原始顺序与重复项）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcceptedRule {
    pub name: String,
    pub domains: Vec<String>,
}
