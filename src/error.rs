//! 計測エンジンの型付きエラー
//!
//! 失敗は必ず機械可読な reason code 付きで呼び出し側へ伝播する。
//! ステージの失敗をデフォルト値で埋めることはしない（偽の採寸値を
//! 下流に流さないため）。

use thiserror::Error;

use crate::calibration::ViewTag;
use crate::landmark::LandmarkIndex;

#[derive(Debug, Error)]
pub enum MeasureError {
    /// 必須ランドマークが欠落または低信頼度
    /// （該当ビューの再撮影で回復可能）
    #[error("missing landmark in {view} view: {landmark}")]
    MissingLandmark {
        view: ViewTag,
        landmark: LandmarkIndex,
    },

    /// キャリブレーション不能な姿勢
    /// （足首が鼻より上にある等、pixel_height <= 0 または非有限）
    #[error("degenerate pose in {view} view: pixel height {pixel_height}")]
    DegeneratePose { view: ViewTag, pixel_height: f32 },

    /// 楕円周長の半軸が非正
    #[error("invalid circumference axis: a={a}, b={b}")]
    InvalidAxis { a: f32, b: f32 },

    /// 組み立てた採寸値が非正または非有限
    #[error("invalid measurement: {field}={value}")]
    InvalidMeasurement { field: &'static str, value: f32 },

    /// 身長入力が許容範囲外
    #[error("height {height_cm}cm out of range {min_cm}-{max_cm}cm")]
    HeightOutOfRange {
        height_cm: f32,
        min_cm: f32,
        max_cm: f32,
    },

    /// 実行が呼び出し側によってキャンセルされた
    #[error("run cancelled")]
    Cancelled,

    /// ランドマークプロバイダの検出失敗
    #[error("landmark provider error: {0}")]
    Provider(#[from] anyhow::Error),
}

impl MeasureError {
    /// 機械可読な reason code
    ///
    /// 外部のキャプチャUIはこのコードを再撮影ガイダンスに対応付ける。
    pub fn reason_code(&self) -> &'static str {
        match self {
            Self::MissingLandmark { .. } => "MISSING_LANDMARK",
            Self::DegeneratePose { .. } => "DEGENERATE_POSE",
            Self::InvalidAxis { .. } => "INVALID_AXIS",
            Self::InvalidMeasurement { .. } => "INVALID_MEASUREMENT",
            Self::HeightOutOfRange { .. } => "HEIGHT_OUT_OF_RANGE",
            Self::Cancelled => "CANCELLED",
            Self::Provider(_) => "PROVIDER_FAILED",
        }
    }

    /// 欠落ランドマーク名（該当する場合のみ）
    pub fn landmark(&self) -> Option<LandmarkIndex> {
        match self {
            Self::MissingLandmark { landmark, .. } => Some(*landmark),
            _ => None,
        }
    }

    /// 失敗したビュー（該当する場合のみ）
    ///
    /// 再撮影ガイダンスはこれで正面/側面を特定する。
    pub fn view(&self) -> Option<ViewTag> {
        match self {
            Self::MissingLandmark { view, .. } => Some(*view),
            Self::DegeneratePose { view, .. } => Some(*view),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, MeasureError>;
