//! 输出规则数据结构
//! 字段顺序即 JSON 输出顺序

use serde::{Deserialize, Serialize};

/// 规则动作类型：升级为 HTTPS
pub const MAKE_HTTPS: &str = "make-https";
/// 匹配全部 URL
pub const MATCH_ALL_URLS: &str = ".*";

/// 单条输出规则
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputRule {
    pub name: String,
    pub content: RuleContent,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleContent {
    pub action: RuleAction,
    pub trigger: RuleTrigger,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleAction {
    #[serde(rename = "type")]
    pub action_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleTrigger {
    #[serde(rename = "url-filter-is-case-sensitive")]
    pub url_filter_is_case_sensitive: bool,
    #[serde(rename = "url-filter")]
    pub url_filter: String,
    #[serde(rename = "if-domain")]
    pub if_domain: Vec<String>,
}

/// 规则包条目，序列化时包在单元素数组中
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulePackage {
    pub name: String,
    pub rules: Vec<OutputRule>,
}

impl RulePackage {
    pub fn new(name: impl Into<String>, rules: Vec<OutputRule>) -> Self {
        Self {
            name: name.into(),
            rules,
        }
    }

    /// 规则包文件内容：`[{ name, rules }]`
    pub fn as_document(&self) -> [&RulePackage; 1] {
        [self]
    }
}
