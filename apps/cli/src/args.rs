//! # コマンドライン引数
//!
//! `--attr name=value` 形式の属性指定を、データソースの設定 JSON に変換する。

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use serde_json::{Map, Value};
use split_provider::{AttributeType, Schema};

/// Split プロバイダのデータソースを読み取る
#[derive(Debug, Parser)]
#[command(name = "split-cli", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// 登録済みのデータソース名を出力する
    List,

    /// データソースのスキーマを JSON で出力する
    Schema {
        /// データソース名（例: split_user）
        name: String,
    },

    /// データソースを読み取り、観測状態を JSON で出力する
    DataSource {
        /// データソース名（例: split_user）
        name:       String,
        /// 属性値（例: --attr email=alice@example.com）
        #[arg(long = "attr", value_parser = parse_attribute)]
        attributes: Vec<(String, String)>,
    },
}

/// `name=value` を分割する
///
/// 値に `=` が含まれていてもよい。
pub fn parse_attribute(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name.to_string(), value.to_string())),
        _ => Err(format!("属性は name=value の形式で指定してください: {s}")),
    }
}

/// 属性指定を設定 JSON に変換する
///
/// スキーマで bool と宣言された属性は `true` / `false` として解釈する。
/// それ以外（未定義の属性を含む）は文字列のまま渡し、検証はプロバイダに任せる。
pub fn attributes_to_config(
    schema: &Schema,
    attributes: &[(String, String)],
) -> anyhow::Result<Value> {
    let mut config = Map::new();
    for (name, raw) in attributes {
        let value = match schema.attribute(name).map(|a| a.attr_type) {
            Some(AttributeType::Bool) => Value::Bool(
                raw.parse()
                    .with_context(|| format!("属性 {name} は true か false で指定してください"))?,
            ),
            _ => Value::String(raw.clone()),
        };
        config.insert(name.clone(), value);
    }
    Ok(Value::Object(config))
}
