//! # リソースデータ
//!
//! スキーマに束縛された設定値と観測状態。
//! 読み取り前は ID を持たず（未初期化）、読み取りに成功すると ID と
//! computed 属性が書き込まれる（取得済み）。

use std::collections::BTreeMap;

use serde_json::{Map, Value};
use thiserror::Error;

use crate::schema::{AttributeType, Schema};

/// リソースデータの操作エラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResourceDataError {
    /// 設定が JSON オブジェクトでない
    #[error("設定は JSON オブジェクトである必要があります")]
    NotAnObject,

    /// スキーマに存在しない属性
    #[error("未定義の属性です: {0}")]
    UnknownAttribute(String),

    /// 必須属性が設定されていない
    #[error("必須属性が設定されていません: {0}")]
    MissingRequired(String),

    /// computed 専用の属性を設定で指定した
    #[error("計算済み属性は設定できません: {0}")]
    ComputedOnly(String),

    /// 値の型がスキーマと一致しない
    #[error("属性 {name} の型が不正です（期待: {expected}）")]
    TypeMismatch {
        name:     String,
        expected: AttributeType,
    },
}

impl ResourceDataError {
    /// エラーの原因となった属性名
    pub fn attribute(&self) -> Option<&str> {
        match self {
            Self::NotAnObject => None,
            Self::UnknownAttribute(name)
            | Self::MissingRequired(name)
            | Self::ComputedOnly(name)
            | Self::TypeMismatch { name, .. } => Some(name),
        }
    }
}

/// スキーマに束縛された属性値の集合
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceData {
    schema: Schema,
    id:     Option<String>,
    values: BTreeMap<String, Value>,
}

impl ResourceData {
    /// 値を持たない未初期化のデータを作る
    pub fn new(schema: Schema) -> Self {
        Self {
            schema,
            id: None,
            values: BTreeMap::new(),
        }
    }

    /// 設定値から作る
    ///
    /// 必須属性の欠落、未定義の属性、computed 専用属性の指定、型の不一致を検出する。
    /// `null` の値は未指定として扱う。
    pub fn from_config(schema: Schema, config: &Value) -> Result<Self, ResourceDataError> {
        let object = config.as_object().ok_or(ResourceDataError::NotAnObject)?;

        let mut data = Self::new(schema);
        for (name, value) in object.iter().filter(|(_, v)| !v.is_null()) {
            let attribute = data
                .schema
                .attribute(name)
                .ok_or_else(|| ResourceDataError::UnknownAttribute(name.clone()))?;
            if attribute.computed && !attribute.required {
                return Err(ResourceDataError::ComputedOnly(name.clone()));
            }
            data.set(name, value.clone())?;
        }

        if let Some(missing) = data
            .schema
            .required_attributes()
            .find(|name| !data.values.contains_key(*name))
        {
            return Err(ResourceDataError::MissingRequired(missing.to_string()));
        }

        Ok(data)
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn set_id(&mut self, id: impl Into<String>) {
        self.id = Some(id.into());
    }

    /// 読み取りによって ID が書き込まれているか
    pub fn is_populated(&self) -> bool {
        self.id.is_some()
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn get_string(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Value::as_str)
    }

    pub fn get_bool(&self, name: &str) -> Option<bool> {
        self.get(name).and_then(Value::as_bool)
    }

    /// 属性値を書き込む（既存の値は上書きする）
    pub fn set(&mut self, name: &str, value: impl Into<Value>) -> Result<(), ResourceDataError> {
        let attribute = self
            .schema
            .attribute(name)
            .ok_or_else(|| ResourceDataError::UnknownAttribute(name.to_string()))?;

        let value = value.into();
        if !attribute.attr_type.accepts(&value) {
            return Err(ResourceDataError::TypeMismatch {
                name:     name.to_string(),
                expected: attribute.attr_type,
            });
        }

        self.values.insert(name.to_string(), value);
        Ok(())
    }

    /// 観測状態を JSON オブジェクトとして返す
    ///
    /// スキーマのすべての属性を含み、未設定の属性は `null` になる。
    pub fn to_state_json(&self) -> Value {
        let mut state = Map::new();
        state.insert(
            "id".to_string(),
            self.id.clone().map_or(Value::Null, Value::String),
        );
        for name in self.schema.attributes.keys() {
            let value = self.values.get(name).cloned().unwrap_or(Value::Null);
            state.insert(name.clone(), value);
        }
        Value::Object(state)
    }
}
