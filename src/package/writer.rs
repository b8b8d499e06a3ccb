//! 规则包写入
//! 规则包序列化为 JSON（默认制表符缩进）并写入文件

use std::path::Path;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use tracing::debug;

use crate::builder::RulePackage;
use crate::error::{BlockPkgError, BlockPkgResult};

/// 格式化输出的缩进
const PRETTY_INDENT: &[u8] = b"\t";

/// 规则包写入器
pub struct PackageWriter;

impl PackageWriter {
    /// 序列化规则包
    pub fn render(package: &RulePackage, pretty_print: bool) -> BlockPkgResult<Vec<u8>> {
        let document = package.as_document();
        if !pretty_print {
            return Ok(serde_json::to_vec(&document)?);
        }

        let mut buf = Vec::new();
        let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(PRETTY_INDENT));
        document.serialize(&mut serializer)?;
        Ok(buf)
    }

    /// 序列化并写入文件，写入失败为致命错误
    pub async fn write(path: &Path, package: &RulePackage, pretty_print: bool) -> BlockPkgResult<()> {
        let data = Self::render(package, pretty_print)?;

        tokio::fs::write(path, &data)
            .await
            .map_err(|source| BlockPkgError::WritePackage {
                path: path.to_path_buf(),
                source,
            })?;

        debug!("规则包已写入 {}（{} 条规则，{} 字节）", path.display(), package.rules.len(), data.len());
        Ok(())
    }
}
