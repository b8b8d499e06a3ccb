//! 规则模块：负责规则文件的枚举、读取、解析与数据模型定义
pub mod model;
pub mod source;
pub mod parser;

// 导出核心接口
pub use self::model::{AcceptedRule, RawRuleset, RewriteDirective, Target};
pub use self::parser::{RuleParser, RulesetDocument};
pub use self::source::RuleSource;
