//! 构建模块：输出规则数据结构与构建器
pub mod output;
pub mod rule_builder;

// 导出核心接口
pub use self::output::{OutputRule, RuleAction, RuleContent, RulePackage, RuleTrigger};
pub use self::rule_builder::RuleBuilder;
