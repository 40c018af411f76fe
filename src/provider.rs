//! ランドマークプロバイダ境界
//!
//! 検出ライブラリ（MediaPipe Pose / MoveNet 等）はエンジン外の
//! コラボレータ。エンジンはこの trait の出力契約だけを消費する。

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::landmark::LandmarkFrame;

/// 静止画1枚から全身ランドマークを非同期に検出する
///
/// 検出呼び出しがパイプライン唯一のサスペンションポイント。
/// プロバイダは同時に1ジョブしか持たない前提で、呼び出しは
/// 必ず逐次になる。
pub trait LandmarkProvider {
    /// プロバイダ固有の画像ハンドル
    type Image;

    fn detect(
        &mut self,
        image: &Self::Image,
    ) -> impl std::future::Future<Output = Result<LandmarkFrame>> + Send;
}

/// 事前にエクスポートされたランドマークJSONを読むプロバイダ
///
/// 外部の検出器が書き出したフレームをオフラインで流し込む用途
/// （デモバイナリ・回帰テスト）。Image はJSONファイルパス。
pub struct JsonFileProvider;

impl LandmarkProvider for JsonFileProvider {
    type Image = PathBuf;

    async fn detect(&mut self, image: &PathBuf) -> Result<LandmarkFrame> {
        load_frame(image)
    }
}

/// ランドマークフレームをJSONから読み込む
pub fn load_frame<P: AsRef<Path>>(path: P) -> Result<LandmarkFrame> {
    let content = fs::read_to_string(path.as_ref())
        .with_context(|| format!("Failed to read landmark file: {}", path.as_ref().display()))?;
    let frame: LandmarkFrame =
        serde_json::from_str(&content).context("Failed to parse landmark JSON")?;
    Ok(frame)
}

/// ランドマークフレームをJSONへ保存
pub fn save_frame<P: AsRef<Path>>(path: P, frame: &LandmarkFrame) -> Result<()> {
    let json = serde_json::to_string_pretty(frame)?;
    fs::write(path.as_ref(), json)
        .with_context(|| format!("Failed to write landmark file: {}", path.as_ref().display()))?;
    Ok(())
}
