//! 规则文件解析器
//! XML 文本 -> 宽松文档结构（RulesetDocument）-> 类型化规则集（RawRuleset）

use std::path::Path;

use quick_xml::events::Event;
use quick_xml::Reader;
use serde::Deserialize;

use super::model::{RawRuleset, RewriteDirective, Target};
use crate::error::{BlockPkgError, BlockPkgResult};

/// 规则文件根节点名称
pub const RULESET_TAG: &str = "ruleset";

/// XML 文档原始形态（所有字段均可缺失，由映射步骤校验）
#[derive(Debug, Default, Deserialize, PartialEq)]
pub struct RulesetDocument {
    #[serde(rename = "@name", default)]
    pub name: Option<String>,
    #[serde(rename = "@default_off", default)]
    pub default_off: Option<String>,
    #[serde(rename = "@platform", default)]
    pub platform: Option<String>,
    #[serde(rename = "rule", default)]
    pub rules: Vec<RuleElement>,
    #[serde(rename = "target", default)]
    pub targets: Vec<TargetElement>,
}

/// `<rule from=".." to=".."/>`
#[derive(Debug, Default, Deserialize, PartialEq)]
pub struct RuleElement {
    #[serde(rename = "@from", default)]
    pub from: Option<String>,
    #[serde(rename = "@to", default)]
    pub to: Option<String>,
}

/// `<target host=".."/>`
#[derive(Debug, Default, Deserialize, PartialEq)]
pub struct TargetElement {
    #[serde(rename = "@host", default)]
    pub host: Option<String>,
}

/// 规则文件解析器
pub struct RuleParser;

impl RuleParser {
    /// 解析单个规则文件内容（path 仅用于错误信息）
    pub fn parse(path: &Path, contents: &str) -> BlockPkgResult<RawRuleset> {
        let xml = contents.trim();
        if xml.is_empty() {
            return Err(BlockPkgError::EmptyDocument {
                path: path.to_path_buf(),
            });
        }

        let root = Self::root_tag(path, xml)?;
        if root != RULESET_TAG {
            return Err(BlockPkgError::Structure {
                path: path.to_path_buf(),
                message: format!("根节点为 <{}>，应为 <{}>", root, RULESET_TAG),
            });
        }

        let document: RulesetDocument =
            quick_xml::de::from_str(xml).map_err(|e| BlockPkgError::XmlParse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        Self::into_ruleset(path, document)
    }

    /// 读取根节点名称，并确认根节点之外只有注释、处理指令或空白
    fn root_tag(path: &Path, xml: &str) -> BlockPkgResult<String> {
        let xml_err = |message: String| BlockPkgError::XmlParse {
            path: path.to_path_buf(),
            message,
        };

        let mut reader = Reader::from_str(xml);
        let mut root = None;
        loop {
            match reader.read_event().map_err(|e| xml_err(e.to_string()))? {
                Event::Start(e) => {
                    if root.is_some() {
                        return Err(xml_err("根节点之后存在多余元素".to_string()));
                    }
                    reader.read_to_end(e.name()).map_err(|e| xml_err(e.to_string()))?;
                    root = Some(String::from_utf8_lossy(e.name().as_ref()).into_owned());
                }
                Event::Empty(e) => {
                    if root.is_some() {
                        return Err(xml_err("根节点之后存在多余元素".to_string()));
                    }
                    root = Some(String::from_utf8_lossy(e.name().as_ref()).into_owned());
                }
                Event::Text(t) if !t.iter().all(u8::is_ascii_whitespace) => {
                    return Err(xml_err("根节点之外存在文本内容".to_string()));
                }
                Event::CData(_) | Event::End(_) => {
                    return Err(xml_err("根节点之外存在非法内容".to_string()));
                }
                Event::Eof => break,
                _ => continue,
            }
        }

        root.ok_or_else(|| BlockPkgError::EmptyDocument {
            path: path.to_path_buf(),
        })
    }

    /// 宽松文档 -> 类型化规则集
    pub fn into_ruleset(path: &Path, document: RulesetDocument) -> BlockPkgResult<RawRuleset> {
        let name = document.name.ok_or_else(|| BlockPkgError::Structure {
            path: path.to_path_buf(),
            message: "ruleset 缺少 name 属性".to_string(),
        })?;

        Ok(RawRuleset {
            name,
            default_off: document.default_off,
            platform: document.platform,
            rules: document
                .rules
                .into_iter()
                .map(|r| RewriteDirective { from: r.from, to: r.to })
                .collect(),
            targets: document
                .targets
                .into_iter()
                .map(|t| Target { host: t.host })
                .collect(),
        })
    }
}
