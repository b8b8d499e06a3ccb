//! 提取模块：从规则集中提取名称与目标域名
pub mod rule_extractor;

pub use self::rule_extractor::RuleExtractor;
