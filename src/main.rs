//! hse-blockpkg 命令行入口
//! 不带参数运行时：读取程序所在目录下的 https-everywhere/rules，
//! 在同一目录写出 https-everywhere.1blockpkg 与 https-everywhere-individual.1blockpkg

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use hse_blockpkg::{ConfigManager, GlobalConfig, Orchestrator};
use tracing_subscriber::EnvFilter;

/// 将 HTTPS Everywhere 规则目录转换为 make-https 规则包
#[derive(Parser, Debug)]
#[command(name = "hse-blockpkg", version, about)]
struct Cli {
    /// 基准目录（默认为程序所在目录）
    #[arg(long)]
    base_dir: Option<PathBuf>,

    /// 规则文件目录（默认 <base>/https-everywhere/rules）
    #[arg(long)]
    rules_dir: Option<PathBuf>,

    /// 聚合规则包输出路径
    #[arg(long)]
    aggregate_output: Option<PathBuf>,

    /// 逐规则集规则包输出路径
    #[arg(long)]
    individual_output: Option<PathBuf>,

    /// 输出紧凑 JSON（不缩进）
    #[arg(long)]
    compact: bool,

    /// 输出规则集被跳过的原因
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn into_config(self) -> anyhow::Result<GlobalConfig> {
        let base = match self.base_dir {
            Some(dir) => GlobalConfig::with_base_dir(dir),
            None => ConfigManager::from_program_location().context("无法解析默认配置")?,
        };

        let mut builder = ConfigManager::custom(base)
            .pretty_print(!self.compact)
            .verbose(self.verbose);
        if let Some(dir) = self.rules_dir {
            builder = builder.rules_dir(dir);
        }
        if let Some(path) = self.aggregate_output {
            builder = builder.aggregate_output(path);
        }
        if let Some(path) = self.individual_output {
            builder = builder.individual_output(path);
        }

        Ok(builder.build()?)
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = cli.into_config()?;
    let rules_dir = config.rules_dir.clone();

    Orchestrator::with_tracing(config)
        .run()
        .await
        .with_context(|| format!("转换规则目录失败：{}", rules_dir.display()))?;
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
