//! 身長基準のピクセルキャリブレーション
//!
//! フレーム内に物理的な基準物体が無いため、申告身長と全身の縦スパン
//! （鼻〜足首）だけが利用できる校正不変量になる。カメラ距離やズームは
//! 正面・側面の撮影間で同一とは限らないため、キャリブレーションは
//! 画像ごとに独立して再計算する。

use tracing::debug;

use crate::error::{MeasureError, Result};
use crate::landmark::{LandmarkFrame, LandmarkIndex};
use crate::validate;

/// どのビューのフレームか（正面 / 側面）
///
/// エラーにも載る。呼び出し側はこれで再撮影すべきビューを特定する。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewTag {
    Front,
    Side,
}

impl ViewTag {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Front => "front",
            Self::Side => "side",
        }
    }
}

impl std::fmt::Display for ViewTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// キャリブレーション結果
///
/// 不変量: `length_per_pixel > 0` かつ有限。非正・非有限は
/// クランプせずエラーとして扱う。
#[derive(Debug, Clone, Copy)]
pub struct Calibration {
    /// 1ピクセルあたりの実寸（cm）。校正画像の解像度基準。
    pub length_per_pixel: f32,
    /// 校正元のビュー
    pub view: ViewTag,
}

/// キャリブレーションに必須のランドマーク
pub const CALIBRATION_REQUIRED: [LandmarkIndex; 3] = [
    LandmarkIndex::Nose,
    LandmarkIndex::LeftAnkle,
    LandmarkIndex::RightAnkle,
];

/// 鼻〜足首の縦スパンと申告身長からスケールを導出
pub fn calibrate(
    frame: &LandmarkFrame,
    known_height_cm: f32,
    view: ViewTag,
    confidence_threshold: f32,
) -> Result<Calibration> {
    validate::require_landmarks(frame, &CALIBRATION_REQUIRED, confidence_threshold, view)?;

    let nose = frame.get(LandmarkIndex::Nose);
    let left_ankle = frame.get(LandmarkIndex::LeftAnkle);
    let right_ankle = frame.get(LandmarkIndex::RightAnkle);

    let avg_ankle_y = (left_ankle.y + right_ankle.y) / 2.0;
    let pixel_height = (avg_ankle_y - nose.y) * frame.height as f32;

    if !(pixel_height > 0.0) || !pixel_height.is_finite() {
        return Err(MeasureError::DegeneratePose { view, pixel_height });
    }

    let length_per_pixel = known_height_cm / pixel_height;
    if !(length_per_pixel > 0.0) || !length_per_pixel.is_finite() {
        return Err(MeasureError::DegeneratePose { view, pixel_height });
    }

    debug!(
        ?view,
        pixel_height,
        length_per_pixel,
        "calibrated frame"
    );

    Ok(Calibration { length_per_pixel, view })
}
