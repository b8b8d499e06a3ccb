//! 工具模块
pub mod diagnostics;

pub use self::diagnostics::{
    CollectingDiagnostics, DiagnosticLevel, Diagnostics, SilentDiagnostics, TracingDiagnostics,
};
