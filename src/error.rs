//! 全局错误类型定义

use std::io::Error as IoError;
use std::path::PathBuf;

use serde_json::Error as SerdeJsonError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BlockPkgError {
    // 单文件错误（编排器内部吸收，不中断整体流程）
    #[error("XML解析失败：{}：{message}", path.display())]
    XmlParse { path: PathBuf, message: String },
    #[error("规则文件为空或未解析出 ruleset：{}", path.display())]
    EmptyDocument { path: PathBuf },
    #[error("规则结构不完整：{}：{message}", path.display())]
    Structure { path: PathBuf, message: String },
    #[error("任务执行失败：{0}")]
    TaskJoin(String),

    // 全局错误（直接中止运行）
    #[error("读取规则目录失败：{}：{source}", path.display())]
    ListDirectory {
        path: PathBuf,
        #[source]
        source: IoError,
    },
    #[error("写入规则包失败：{}：{source}", path.display())]
    WritePackage {
        path: PathBuf,
        #[source]
        source: IoError,
    },

    // 基础错误
    #[error("JSON序列化失败：{0}")]
    Json(#[from] SerdeJsonError),
    #[error("IO操作失败：{0}")]
    Io(#[from] IoError),
    #[error("无效配置：{0}")]
    InvalidConfig(String),
}

// 全局Result类型
pub type BlockPkgResult<T> = Result<T, BlockPkgError>;
