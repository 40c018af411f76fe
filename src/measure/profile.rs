use serde::{Deserialize, Serialize};

use crate::error::{MeasureError, Result};

/// 6項目の採寸プロファイル（すべてcm）
///
/// パイプライン成功時に一度だけ生成される不変値。下流のプロファイル
/// 永続化・アバター描画がそのまま消費する。全フィールドは有限かつ
/// 正であることをコンストラクタで保証する。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementProfile {
    /// バスト/チェスト周囲（cm）
    pub bust_circumference: f32,
    /// ヒップ周囲（cm）
    pub hip_circumference: f32,
    /// 肩幅（cm）
    pub shoulder_width: f32,
    /// 袖丈（肩→肘→手首、cm）
    pub sleeve_length: f32,
    /// 胴長（肩中点→腰中点、cm）
    pub torso_length: f32,
    /// 股下（cm）
    pub inseam: f32,
}

impl MeasurementProfile {
    /// 全フィールドが有限かつ正であることを検証して生成
    pub fn new(
        bust_circumference: f32,
        hip_circumference: f32,
        shoulder_width: f32,
        sleeve_length: f32,
        torso_length: f32,
        inseam: f32,
    ) -> Result<Self> {
        let fields = [
            ("bust_circumference", bust_circumference),
            ("hip_circumference", hip_circumference),
            ("shoulder_width", shoulder_width),
            ("sleeve_length", sleeve_length),
            ("torso_length", torso_length),
            ("inseam", inseam),
        ];
        for (field, value) in fields {
            if !(value > 0.0) || !value.is_finite() {
                return Err(MeasureError::InvalidMeasurement { field, value });
            }
        }
        Ok(Self {
            bust_circumference,
            hip_circumference,
            shoulder_width,
            sleeve_length,
            torso_length,
            inseam,
        })
    }
}
