//! 诊断输出通道
//! 过滤器与编排器通过该接口输出跳过原因、单文件失败等信息

use std::sync::Mutex;

use tracing::{debug, info, warn};

/// 诊断信息级别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticLevel {
    /// 规则集被跳过的原因（仅详细模式下可见）
    Skip,
    /// 单文件处理失败
    Failure,
    /// 汇总信息
    Summary,
}

/// 诊断输出接口
pub trait Diagnostics: Send + Sync {
    fn report(&self, level: DiagnosticLevel, message: &str);

    fn skip(&self, message: &str) {
        self.report(DiagnosticLevel::Skip, message);
    }

    fn failure(&self, message: &str) {
        self.report(DiagnosticLevel::Failure, message);
    }

    fn summary(&self, message: &str) {
        self.report(DiagnosticLevel::Summary, message);
    }
}

/// 转发到 tracing 的诊断输出
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics {
    verbose: bool,
}

impl TracingDiagnostics {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

impl Diagnostics for TracingDiagnostics {
    fn report(&self, level: DiagnosticLevel, message: &str) {
        match level {
            DiagnosticLevel::Skip if self.verbose => info!("{}", message),
            DiagnosticLevel::Skip => debug!("{}", message),
            DiagnosticLevel::Failure => warn!("{}", message),
            DiagnosticLevel::Summary => info!("{}", message),
        }
    }
}

/// 丢弃所有诊断信息
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentDiagnostics;

impl Diagnostics for SilentDiagnostics {
    fn report(&self, _level: DiagnosticLevel, _message: &str) {}
}

/// 在内存中收集诊断信息
#[derive(Debug, Default)]
pub struct CollectingDiagnostics {
    lines: Mutex<Vec<(DiagnosticLevel, String)>>,
}

impl CollectingDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// 已收集的全部诊断信息
    pub fn lines(&self) -> Vec<(DiagnosticLevel, String)> {
        match self.lines.lock() {
            Ok(lines) => lines.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// 指定级别的诊断信息
    pub fn messages(&self, level: DiagnosticLevel) -> Vec<String> {
        self.lines()
            .into_iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m)
            .collect()
    }
}

impl Diagnostics for CollectingDiagnostics {
    fn report(&self, level: DiagnosticLevel, message: &str) {
        let mut lines = match self.lines.lock() {
            Ok(lines) => lines,
            Err(poisoned) => poisoned.into_inner(),
        };
        lines.push((level, message.to_string()));
    }
}
