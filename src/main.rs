use anyhow::{bail, Result};
use std::path::PathBuf;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

use fitscan::config::Config;
use fitscan::measure::MeasurePipeline;
use fitscan::provider::JsonFileProvider;

const CONFIG_PATH: &str = "config.toml";

/// 事前にエクスポートしたランドマークJSON 2枚からプロファイルを組み立てる
///
/// 使い方: fitscan <front.json> <side.json> <height_cm>
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() != 4 {
        eprintln!("fitscan {}", env!("GIT_VERSION"));
        eprintln!("使い方: {} <front.json> <side.json> <height_cm>", args[0]);
        bail!("invalid arguments");
    }

    let front = PathBuf::from(&args[1]);
    let side = PathBuf::from(&args[2]);
    let height_cm: f32 = args[3].parse()?;

    let config = Config::load_or_default(CONFIG_PATH);
    let mut pipeline = MeasurePipeline::new(JsonFileProvider, config.measure);
    let cancel = CancellationToken::new();

    match pipeline.run(&front, &side, height_cm, &cancel).await {
        Ok(profile) => {
            println!("{}", serde_json::to_string_pretty(&profile)?);
            Ok(())
        }
        Err(e) => {
            eprintln!("採寸失敗 [{}]: {}", e.reason_code(), e);
            if let Some(view) = e.view() {
                eprintln!("再撮影が必要なビュー: {}", view);
            }
            if let Some(landmark) = e.landmark() {
                eprintln!("欠落ランドマーク: {}", landmark);
            }
            Err(e.into())
        }
    }
}
