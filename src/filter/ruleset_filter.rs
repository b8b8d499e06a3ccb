//! 规则集过滤器
//! 仅保留“http -> https 直接升级”语义的规则集

use std::fmt;

use crate::rule::RawRuleset;
use crate::utils::Diagnostics;

/// 标准升级指令的 from 模式
pub const UPGRADE_FROM: &str = "^http:";
/// 标准升级指令的 to 模式
pub const UPGRADE_TO: &str = "https:";
/// 仅混合内容平台
pub const MIXED_CONTENT_PLATFORM: &str = "mixedcontent";

/// 规则集被跳过的原因
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// 含有除直接升级以外的重写指令
    HasRewrites,
    /// 默认关闭（携带 default_off 原值）
    DefaultOff(String),
    /// 仅作用于混合内容平台
    MixedContent,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HasRewrites => write!(f, "规则包含重写"),
            Self::DefaultOff(value) => write!(f, "默认关闭（default_off=\"{}\"）", value),
            Self::MixedContent => write!(f, "仅适用于 mixedcontent 平台"),
        }
    }
}

/// 规则集过滤器
pub struct RulesetFilter;

impl RulesetFilter {
    /// 是否纳入输出，被跳过时将原因写入诊断通道
    pub fn should_include(ruleset: &RawRuleset, diagnostics: &dyn Diagnostics) -> bool {
        match Self::skip_reason(ruleset) {
            Some(reason) => {
                diagnostics.skip(&format!("{}：{}", ruleset.name, reason));
                false
            }
            None => true,
        }
    }

    /// 判定跳过原因，None 表示保留
    pub fn skip_reason(ruleset: &RawRuleset) -> Option<SkipReason> {
        if Self::has_rewrites(ruleset) {
            return Some(SkipReason::HasRewrites);
        }

        if ruleset.is_default_off() {
            let value = ruleset.default_off.clone().unwrap_or_default();
            return Some(SkipReason::DefaultOff(value));
        }

        if ruleset.platform.as_deref() == Some(MIXED_CONTENT_PLATFORM) {
            return Some(SkipReason::MixedContent);
        }

        None
    }

    /// 逐条检查重写指令：from 或 to 任一不等于标准升级模式即视为重写
    /// 没有任何指令时不构成重写
    pub fn has_rewrites(ruleset: &RawRuleset) -> bool {
        ruleset.rules.iter().any(|rule| {
            rule.from.as_deref() != Some(UPGRADE_FROM) || rule.to.as_deref() != Some(UPGRADE_TO)
        })
    }
}
