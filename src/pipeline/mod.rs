//! 流水线模块：规则目录到规则包的完整转换流程
pub mod orchestrator;

pub use self::orchestrator::{FileOutcome, Orchestrator, PackageSet, RunSummary};
