//! ランドマーク存在チェック
//!
//! 信頼度が閾値未満の点は「存在しない」扱い。(0,0)のデフォルト座標を
//! 黙って計算に流さないための関門で、キャリブレーションと各距離計算
//! グループの前に呼ぶ。失敗は欠落点の名前と対象ビューを持つので、
//! 呼び出し側は「側面ビューで人物を検出できませんでした」のような
//! 具体的な案内が出せる。

use crate::calibration::ViewTag;
use crate::error::{MeasureError, Result};
use crate::landmark::{LandmarkFrame, LandmarkIndex};

/// 正面ビューの計測に必要なランドマーク
pub const FRONT_REQUIRED: [LandmarkIndex; 9] = [
    LandmarkIndex::Nose,
    LandmarkIndex::LeftShoulder,
    LandmarkIndex::RightShoulder,
    LandmarkIndex::LeftElbow,
    LandmarkIndex::LeftWrist,
    LandmarkIndex::LeftHip,
    LandmarkIndex::RightHip,
    LandmarkIndex::LeftAnkle,
    LandmarkIndex::RightAnkle,
];

/// 側面ビューの計測に必要なランドマーク
pub const SIDE_REQUIRED: [LandmarkIndex; 7] = [
    LandmarkIndex::Nose,
    LandmarkIndex::LeftShoulder,
    LandmarkIndex::RightShoulder,
    LandmarkIndex::LeftHip,
    LandmarkIndex::RightHip,
    LandmarkIndex::LeftAnkle,
    LandmarkIndex::RightAnkle,
];

/// 必須ランドマークが全て閾値以上の信頼度で存在するか確認
///
/// 最初に見つかった欠落点でエラーを返す。
pub fn require_landmarks(
    frame: &LandmarkFrame,
    required: &[LandmarkIndex],
    confidence_threshold: f32,
    view: ViewTag,
) -> Result<()> {
    for &index in required {
        if !frame.get(index).is_valid(confidence_threshold) {
            return Err(MeasureError::MissingLandmark {
                view,
                landmark: index,
            });
        }
    }
    Ok(())
}
