use anyhow::Result;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub measure: MeasureConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct MeasureConfig {
    /// ランドマーク採用の信頼度閾値
    #[serde(default = "default_confidence_threshold")]
    pub confidence_threshold: f32,
    /// 股下補正係数（ヒップランドマークが実際の股点より上にあるため）
    #[serde(default = "default_inseam_correction")]
    pub inseam_correction: f32,
    /// 受け付ける身長の下限（cm）
    #[serde(default = "default_min_height_cm")]
    pub min_height_cm: f32,
    /// 受け付ける身長の上限（cm）
    #[serde(default = "default_max_height_cm")]
    pub max_height_cm: f32,
}

fn default_confidence_threshold() -> f32 { 0.5 }
fn default_inseam_correction() -> f32 { 0.9 }
fn default_min_height_cm() -> f32 { 140.0 }
fn default_max_height_cm() -> f32 { 210.0 }

impl Default for MeasureConfig {
    fn default() -> Self {
        Self {
            confidence_threshold: default_confidence_threshold(),
            inseam_correction: default_inseam_correction(),
            min_height_cm: default_min_height_cm(),
            max_height_cm: default_max_height_cm(),
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// ファイルが無ければデフォルト設定で起動
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        Self::load(path).unwrap_or_default()
    }
}
