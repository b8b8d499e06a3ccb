//! 编排器：串联 列出文件 -> 并发解析/过滤/提取 -> 汇总 -> 写出两个规则包

use std::path::PathBuf;
use std::sync::Arc;

use tracing::debug;

use crate::builder::{RuleBuilder, RulePackage};
use crate::config::GlobalConfig;
use crate::error::{BlockPkgError, BlockPkgResult};
use crate::extractor::RuleExtractor;
use crate::filter::RulesetFilter;
use crate::package::PackageWriter;
use crate::rule::{AcceptedRule, RuleParser, RuleSource};
use crate::utils::{Diagnostics, TracingDiagnostics};

/// 单个文件的处理结果
#[derive(Debug)]
pub enum FileOutcome {
    /// 通过过滤
    Accepted(AcceptedRule),
    /// 被过滤器跳过
    Skipped,
}

/// 一次运行的统计
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub files_seen: usize,
    pub accepted: usize,
    pub skipped: usize,
    pub failed: usize,
    pub domains: usize,
}

/// 两个待写出的规则包
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageSet {
    /// 单条规则覆盖全部域名（已排序）
    pub aggregate: RulePackage,
    /// 每个规则集一条规则
    pub individual: RulePackage,
}

/// 流水线编排器
pub struct Orchestrator {
    config: GlobalConfig,
    diagnostics: Arc<dyn Diagnostics>,
}

impl Orchestrator {
    pub fn new(config: GlobalConfig, diagnostics: Arc<dyn Diagnostics>) -> Self {
        Self { config, diagnostics }
    }

    /// 使用 tracing 输出诊断信息
    pub fn with_tracing(config: GlobalConfig) -> Self {
        let diagnostics = Arc::new(TracingDiagnostics::new(config.verbose));
        Self::new(config, diagnostics)
    }

    /// 执行完整流水线
    pub async fn run(&self) -> BlockPkgResult<RunSummary> {
        let (accepted, mut summary) = self.collect().await?;
        let packages = Self::build_packages(&self.config.package_name, accepted);
        summary.domains = packages
            .aggregate
            .rules
            .first()
            .map(|rule| rule.content.trigger.if_domain.len())
            .unwrap_or_default();

        // 两个文件依次写出，任一失败即中止
        PackageWriter::write(&self.config.aggregate_output, &packages.aggregate, self.config.pretty_print).await?;
        PackageWriter::write(&self.config.individual_output, &packages.individual, self.config.pretty_print).await?;

        self.diagnostics.summary(&format!(
            "处理完成：文件 {}，保留 {}，跳过 {}，失败 {}，域名 {}",
            summary.files_seen, summary.accepted, summary.skipped, summary.failed, summary.domains
        ));
        Ok(summary)
    }

    /// 并发处理规则目录下全部文件，按列出顺序返回通过过滤的规则集
    pub async fn collect(&self) -> BlockPkgResult<(Vec<AcceptedRule>, RunSummary)> {
        let files = RuleSource::list_files(&self.config.rules_dir).await?;
        let mut summary = RunSummary {
            files_seen: files.len(),
            ..Default::default()
        };

        let handles: Vec<_> = files
            .into_iter()
            .map(|path| {
                let diagnostics = Arc::clone(&self.diagnostics);
                let task_path = path.clone();
                (path, tokio::spawn(Self::process_file(task_path, diagnostics)))
            })
            .collect();

        // 全部任务完成后再汇总，单个任务失败不影响其他任务
        let mut accepted = Vec::new();
        for (path, handle) in handles {
            let outcome = handle
                .await
                .unwrap_or_else(|e| Err(BlockPkgError::TaskJoin(e.to_string())));

            match outcome {
                Ok(FileOutcome::Accepted(rule)) => {
                    summary.accepted += 1;
                    accepted.push(rule);
                }
                Ok(FileOutcome::Skipped) => summary.skipped += 1,
                Err(e) => {
                    summary.failed += 1;
                    self.diagnostics
                        .failure(&format!("规则文件处理失败 {}：{}", path.display(), e));
                }
            }
        }

        debug!("规则文件汇总：{:?}", summary);
        Ok((accepted, summary))
    }

    /// 读取、解析、过滤、提取单个规则文件
    pub async fn process_file(path: PathBuf, diagnostics: Arc<dyn Diagnostics>) -> BlockPkgResult<FileOutcome> {
        let contents = RuleSource::read_file(&path).await?;
        let ruleset = RuleParser::parse(&path, &contents)?;

        if !RulesetFilter::should_include(&ruleset, diagnostics.as_ref()) {
            return Ok(FileOutcome::Skipped);
        }

        RuleExtractor::extract(&path, ruleset).map(FileOutcome::Accepted)
    }

    /// 由通过过滤的规则集构建两个规则包
    pub fn build_packages(package_name: &str, accepted: Vec<AcceptedRule>) -> PackageSet {
        let mut domains: Vec<String> = accepted
            .iter()
            .flat_map(|rule| rule.domains.iter().cloned())
            .collect();
        domains.sort();

        let individual_rules = accepted
            .into_iter()
            .map(|rule| RuleBuilder::build(rule.name, rule.domains))
            .collect();

        PackageSet {
            aggregate: RulePackage::new(package_name, vec![RuleBuilder::build(package_name, domains)]),
            individual: RulePackage::new(package_name, individual_rules),
        }
    }
}
