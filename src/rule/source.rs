//! 规则来源：枚举规则目录下的文件并读取原始内容

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{BlockPkgError, BlockPkgResult};

/// 规则文件来源
pub struct RuleSource;

impl RuleSource {
    /// 列出规则目录中的全部普通文件（不按扩展名过滤，按文件名排序）
    pub async fn list_files(rules_dir: &Path) -> BlockPkgResult<Vec<PathBuf>> {
        let list_err = |source| BlockPkgError::ListDirectory {
            path: rules_dir.to_path_buf(),
            source,
        };

        let mut entries = tokio::fs::read_dir(rules_dir).await.map_err(list_err)?;
        let mut files = Vec::new();

        while let Some(entry) = entries.next_entry().await.map_err(list_err)? {
            let path = entry.path();
            // file_type 不跟随符号链接，这里以 metadata 为准
            match tokio::fs::metadata(&path).await {
                Ok(meta) if meta.is_file() => files.push(path),
                Ok(_) => debug!("跳过非文件条目：{}", path.display()),
                // 失效链接等交给读取阶段按单文件错误处理
                Err(_) => files.push(path),
            }
        }

        files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        debug!("规则目录 {} 共 {} 个文件", rules_dir.display(), files.len());
        Ok(files)
    }

    /// 读取单个规则文件（非 UTF-8 字节按替换字符处理）
    pub async fn read_file(path: &Path) -> BlockPkgResult<String> {
        let bytes = tokio::fs::read(path).await?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_list_files_sorted_and_skips_dirs() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("b.xml"), "<ruleset/>").unwrap();
        std::fs::write(dir.path().join("a.xml"), "<ruleset/>").unwrap();
        std::fs::write(dir.path().join("README"), "not xml").unwrap();
        std::fs::create_dir(dir.path().join("nested")).unwrap();

        let files = RuleSource::list_files(dir.path()).await.unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();

        assert_eq!(names, vec!["README", "a.xml", "b.xml"]);
    }

    #[tokio::test]
    async fn test_list_missing_dir_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");

        let result = RuleSource::list_files(&missing).await;
        assert!(matches!(result, Err(BlockPkgError::ListDirectory { .. })));
    }

    #[tokio::test]
    async fn test_read_file_lossy() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.xml");
        std::fs::write(&path, [b'<', b'r', 0xff, b'>']).unwrap();

        let contents = RuleSource::read_file(&path).await.unwrap();
        assert_eq!(contents, "<r\u{fffd}>");
    }
}
