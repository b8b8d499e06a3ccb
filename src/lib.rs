//! hse-blockpkg - 将 HTTPS Everywhere 规则目录转换为 make-https 规则包

// 导出全局错误类型
pub use self::error::{BlockPkgError, BlockPkgResult};

// 导出配置模块
pub use self::config::{ConfigManager, CustomConfigBuilder, GlobalConfig};

// 导出规则模块核心接口
pub use self::rule::{AcceptedRule, RawRuleset, RewriteDirective, RuleParser, RuleSource, Target};

// 导出过滤、提取、构建模块核心接口
pub use self::filter::{RulesetFilter, SkipReason};
pub use self::extractor::RuleExtractor;
pub use self::builder::{OutputRule, RuleBuilder, RulePackage};

// 导出规则包写入与流水线接口
pub use self::package::PackageWriter;
pub use self::pipeline::{Orchestrator, RunSummary};

// 导出诊断输出接口
pub use self::utils::{CollectingDiagnostics, Diagnostics, SilentDiagnostics, TracingDiagnostics};

// 声明所有子模块
pub mod config;
pub mod error;
pub mod rule;
pub mod filter;
pub mod extractor;
pub mod builder;
pub mod package;
pub mod pipeline;
pub mod utils;
