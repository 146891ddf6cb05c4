//! # スキーマ
//!
//! データソースが受け付ける属性と、その型・必須 / 計算済みの区別を宣言する。

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

/// 属性の型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AttributeType {
    String,
    Bool,
}

impl AttributeType {
    /// 値がこの型として受け付けられるか
    pub fn accepts(self, value: &Value) -> bool {
        match self {
            Self::String => value.is_string(),
            Self::Bool => value.is_boolean(),
        }
    }
}

/// 属性の宣言
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attribute {
    #[serde(rename = "type")]
    pub attr_type:   AttributeType,
    /// 設定での指定が必須
    pub required:    bool,
    /// 読み取り時にプロバイダが値を埋める
    pub computed:    bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Attribute {
    pub fn required_string() -> Self {
        Self::new(AttributeType::String, true, false)
    }

    pub fn computed_string() -> Self {
        Self::new(AttributeType::String, false, true)
    }

    pub fn computed_bool() -> Self {
        Self::new(AttributeType::Bool, false, true)
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    fn new(attr_type: AttributeType, required: bool, computed: bool) -> Self {
        Self {
            attr_type,
            required,
            computed,
            description: None,
        }
    }
}

/// データソースのスキーマ
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Schema {
    pub attributes: BTreeMap<String, Attribute>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_attribute(mut self, name: impl Into<String>, attribute: Attribute) -> Self {
        self.attributes.insert(name.into(), attribute);
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.get(name)
    }

    /// 必須属性の名前
    pub fn required_attributes(&self) -> impl Iterator<Item = &str> {
        self.attributes
            .iter()
            .filter(|(_, attr)| attr.required)
            .map(|(name, _)| name.as_str())
    }
}
