//! # Split CLI
//!
//! Split プロバイダのデータソースをコマンドラインから読み取る。
//!
//! ## 環境変数
//!
//! `.env` ファイルがあれば読み込む。
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `SPLIT_API_KEY` | **Yes** | Admin API キー |
//! | `SPLIT_API_BASE_URL` | No | API のベース URL |
//! | `SPLIT_API_TIMEOUT_SECS` | No | リクエストタイムアウト秒数 |
//! | `LOG_FORMAT` | No | `json` または `pretty`（デフォルト） |
//! | `RUST_LOG` | No | ログレベル（デフォルト: `warn,split=info`） |
//!
//! ## 使用例
//!
//! ```bash
//! split-cli data-source split_user --attr email=alice@example.com
//! split-cli schema split_user
//! ```
//!
//! 観測状態とスキーマは stdout に、ログと診断は stderr に出力する。

mod args;

use anyhow::Context as _;
use args::{Cli, Command, attributes_to_config};
use clap::Parser;
use split_provider::{Provider, ProviderConfig};
use split_shared::observability::{TracingConfig, init_tracing};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    init_tracing(TracingConfig::from_env("split-cli"));
    let _tracing_guard = tracing::info_span!("app", service = "split-cli").entered();

    let config = ProviderConfig::from_env().context("設定の読み込みに失敗しました")?;
    tracing::info!(base_url = %config.base_url, "Split プロバイダを初期化します");
    let provider = Provider::from_config(&config)?;

    match cli.command {
        Command::List => {
            for name in provider.data_source_names() {
                println!("{name}");
            }
        }
        Command::Schema { name } => {
            let schema = provider
                .data_source_schema(&name)
                .with_context(|| format!("未定義のデータソースです: {name}"))?;
            println!("{}", serde_json::to_string_pretty(&schema)?);
        }
        Command::DataSource { name, attributes } => {
            let schema = provider
                .data_source_schema(&name)
                .with_context(|| format!("未定義のデータソースです: {name}"))?;
            let data_config = attributes_to_config(&schema, &attributes)?;

            let data = provider.read_data_source(&name, &data_config).await?;
            println!("{}", serde_json::to_string_pretty(&data.to_state_json())?);
        }
    }

    Ok(())
}
