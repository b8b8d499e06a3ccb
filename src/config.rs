//! 全局配置管理,存储所有可配置项

use std::path::{Path, PathBuf};

use crate::error::{BlockPkgError, BlockPkgResult};

/// 规则目录（相对基准目录）
pub const RULES_SUBDIR: [&str; 2] = ["https-everywhere", "rules"];
/// 聚合规则包文件名
pub const AGGREGATE_PACKAGE_FILE: &str = "https-everywhere.1blockpkg";
/// 逐规则集规则包文件名
pub const INDIVIDUAL_PACKAGE_FILE: &str = "https-everywhere-individual.1blockpkg";
/// 规则包名称，同时作为聚合规则的名称
pub const PACKAGE_NAME: &str = "HTTPS Everywhere";

/// 全局配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlobalConfig {
    // 规则文件目录
    pub rules_dir: PathBuf,
    // 聚合规则包输出路径
    pub aggregate_output: PathBuf,
    // 逐规则集规则包输出路径
    pub individual_output: PathBuf,
    // 是否格式化输出（制表符缩进）
    pub pretty_print: bool,
    // 是否启用详细日志（输出规则集被跳过的原因）
    pub verbose: bool,
    // 规则包名称
    pub package_name: String,
}

impl GlobalConfig {
    /// 以指定目录为基准构建默认配置
    pub fn with_base_dir(base: impl AsRef<Path>) -> Self {
        let base = base.as_ref();
        let rules_dir = RULES_SUBDIR.iter().fold(base.to_path_buf(), |dir, part| dir.join(part));

        Self {
            rules_dir,
            aggregate_output: base.join(AGGREGATE_PACKAGE_FILE),
            individual_output: base.join(INDIVIDUAL_PACKAGE_FILE),
            pretty_print: true,
            verbose: false,
            package_name: PACKAGE_NAME.to_string(),
        }
    }
}

/// 配置管理器
pub struct ConfigManager;

impl ConfigManager {
    /// 以可执行文件所在目录为基准的默认配置
    pub fn from_program_location() -> BlockPkgResult<GlobalConfig> {
        let exe = std::env::current_exe()?;
        let base = exe.parent().ok_or_else(|| {
            BlockPkgError::InvalidConfig(format!("无法确定程序所在目录：{}", exe.display()))
        })?;
        Ok(GlobalConfig::with_base_dir(base))
    }

    /// 自定义配置
    pub fn custom(base: GlobalConfig) -> CustomConfigBuilder {
        CustomConfigBuilder::new(base)
    }
}

/// 配置构建器（便于自定义配置）
#[derive(Debug, Clone)]
pub struct CustomConfigBuilder {
    config: GlobalConfig,
}

impl CustomConfigBuilder {
    pub fn new(base: GlobalConfig) -> Self {
        Self { config: base }
    }

    pub fn rules_dir(mut self, path: PathBuf) -> Self {
        self.config.rules_dir = path;
        self
    }

    pub fn aggregate_output(mut self, path: PathBuf) -> Self {
        self.config.aggregate_output = path;
        self
    }

    pub fn individual_output(mut self, path: PathBuf) -> Self {
        self.config.individual_output = path;
        self
    }

    pub fn pretty_print(mut self, pretty: bool) -> Self {
        self.config.pretty_print = pretty;
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.config.verbose = verbose;
        self
    }

    pub fn package_name(mut self, name: impl Into<String>) -> Self {
        self.config.package_name = name.into();
        self
    }

    /// 构建配置（两个输出路径不可相同）
    pub fn build(self) -> BlockPkgResult<GlobalConfig> {
        if self.config.aggregate_output == self.config.individual_output {
            return Err(BlockPkgError::InvalidConfig(format!(
                "聚合规则包与逐规则集规则包不能写入同一文件：{}",
                self.config.aggregate_output.display()
            )));
        }
        Ok(self.config)
    }
}
