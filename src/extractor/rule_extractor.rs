//! 规则集数据提取器
//! 负责从规则集中提取名称与目标域名列表

use std::path::Path;

use crate::error::{BlockPkgError, BlockPkgResult};
use crate::rule::{AcceptedRule, RawRuleset};

/// 规则集数据提取器
pub struct RuleExtractor;

impl RuleExtractor {
    /// 提取名称与域名（保持原始顺序，不去重）
    pub fn extract(path: &Path, ruleset: RawRuleset) -> BlockPkgResult<AcceptedRule> {
        if ruleset.targets.is_empty() {
            return Err(BlockPkgError::Structure {
                path: path.to_path_buf(),
                message: format!("{} 没有任何 target", ruleset.name),
            });
        }

        let domains = ruleset
            .targets
            .into_iter()
            .enumerate()
            .map(|(idx, target)| {
                target.host.ok_or_else(|| BlockPkgError::Structure {
                    path: path.to_path_buf(),
                    message: format!("{} 的第 {} 个 target 缺少 host 属性", ruleset.name, idx + 1),
                })
            })
            .collect::<BlockPkgResult<Vec<_>>>()?;

        Ok(AcceptedRule {
            name: ruleset.name,
            domains,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::Target;

    fn path() -> &'static Path {
        Path::new("rules/Example.xml")
    }

    #[test]
    fn test_extract_preserves_order_and_duplicates() {
        let ruleset = RawRuleset {
            name: "Example".to_string(),
            targets: vec![Target::new("z.com"), Target::new("a.com"), Target::new("z.com")],
            ..Default::default()
        };

        let accepted = RuleExtractor::extract(path(), ruleset).unwrap();
        assert_eq!(accepted.name, "Example");
        assert_eq!(accepted.domains, vec!["z.com", "a.com", "z.com"]);
    }

    #[test]
    fn test_extract_keeps_casing_and_wildcards() {
        let ruleset = RawRuleset {
            name: "Wild".to_string(),
            targets: vec![Target::new("*.Example.COM"), Target::new("example.*")],
            ..Default::default()
        };

        let accepted = RuleExtractor::extract(path(), ruleset).unwrap();
        assert_eq!(accepted.domains, vec!["*.Example.COM", "example.*"]);
    }

    #[test]
    fn test_extract_missing_host() {
        let ruleset = RawRuleset {
            name: "Broken".to_string(),
            targets: vec![Target::new("a.com"), Target { host: None }],
            ..Default::default()
        };

        let result = RuleExtractor::extract(path(), ruleset);
        assert!(matches!(result, Err(BlockPkgError::Structure { .. })));
    }

    #[test]
    fn test_extract_without_targets() {
        let ruleset = RawRuleset {
            name: "Empty".to_string(),
            ..Default::default()
        };

        let result = RuleExtractor::extract(path(), ruleset);
        assert!(matches!(result, Err(BlockPkgError::Structure { .. })));
    }
}
