//! 过滤模块：判定规则集是否纳入输出
pub mod ruleset_filter;

pub use self::ruleset_filter::{RulesetFilter, SkipReason};
