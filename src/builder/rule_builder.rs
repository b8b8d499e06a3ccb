//! 输出规则构建器

use super::output::{OutputRule, RuleAction, RuleContent, RuleTrigger, MAKE_HTTPS, MATCH_ALL_URLS};

/// 输出规则构建器
pub struct RuleBuilder;

impl RuleBuilder {
    /// 由名称与域名列表构建 make-https 规则，域名原样透传
    pub fn build(name: impl Into<String>, domains: Vec<String>) -> OutputRule {
        OutputRule {
            name: name.into(),
            content: RuleContent {
                action: RuleAction {
                    action_type: MAKE_HTTPS.to_string(),
                },
                trigger: RuleTrigger {
                    url_filter_is_case_sensitive: true,
                    url_filter: MATCH_ALL_URLS.to_string(),
                    if_domain: domains,
                },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_build_shape() {
        let rule = RuleBuilder::build("Example", vec!["z.com".to_string(), "a.com".to_string()]);
        let value = serde_json::to_value(&rule).unwrap();

        assert_eq!(
            value,
            json!({
                "name": "Example",
                "content": {
                    "action": { "type": "make-https" },
                    "trigger": {
                        "url-filter-is-case-sensitive": true,
                        "url-filter": ".*",
                        "if-domain": ["z.com", "a.com"]
                    }
                }
            })
        );
    }

    #[test]
    fn test_build_field_order() {
        let rule = RuleBuilder::build("Example", vec!["a.com".to_string()]);
        let text = serde_json::to_string(&rule).unwrap();

        assert_eq!(
            text,
            r#"{"name":"Example","content":{"action":{"type":"make-https"},"trigger":{"url-filter-is-case-sensitive":true,"url-filter":".*","if-domain":["a.com"]}}}"#
        );
    }

    #[test]
    fn test_build_passes_domains_through() {
        let domains = vec!["B.com".to_string(), "b.com".to_string(), "B.com".to_string()];
        let rule = RuleBuilder::build("Dup", domains.clone());
        assert_eq!(rule.content.trigger.if_domain, domains);
        assert_eq!(rule, RuleBuilder::build("Dup", domains));
    }

    #[test]
    fn test_build_empty_domains() {
        let rule = RuleBuilder::build("HTTPS Everywhere", Vec::new());
        assert!(rule.content.trigger.if_domain.is_empty());
    }
}
