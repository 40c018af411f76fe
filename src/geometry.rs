//! 距離計算と周長近似
//!
//! 距離の定義域（ピクセル空間 / 3Dワールド空間）は1回の採寸で
//! 固定する。同一採寸内での混在は設計エラーであり、ランタイムで
//! フォールバックしない。`world_distance` は実寸ワールド座標を出す
//! プロバイダ専用で、ピクセルキャリブレーションとは組み合わせない。

use crate::error::{MeasureError, Result};
use crate::landmark::{Landmark, LandmarkFrame};

/// ピクセル空間のユークリッド距離
///
/// 正規化座標を画像解像度で実ピクセルに戻してから測る。
pub fn pixel_distance(a: &Landmark, b: &Landmark, frame: &LandmarkFrame) -> f32 {
    let dx = (a.x - b.x) * frame.width as f32;
    let dy = (a.y - b.y) * frame.height as f32;
    (dx * dx + dy * dy).sqrt()
}

/// 3Dワールド座標のユークリッド距離（実寸単位のプロバイダ専用）
pub fn world_distance(a: &Landmark, b: &Landmark) -> f32 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    let dz = a.z - b.z;
    (dx * dx + dy * dy + dz * dz).sqrt()
}

/// Ramanujan 第2近似による楕円周長
///
/// C ≈ π(3(a+b) − sqrt((3a+b)(a+3b)))
///
/// 体の断面は真円ではないため、正面幅と側面奥行きを半軸とする
/// 楕円でモデル化する。半軸が非正なら上流のキャリブレーションか
/// ランドマークが壊れている。
pub fn ellipse_circumference(half_width_cm: f32, half_depth_cm: f32) -> Result<f32> {
    let a = half_width_cm;
    let b = half_depth_cm;
    if !(a > 0.0) || !(b > 0.0) || !a.is_finite() || !b.is_finite() {
        return Err(MeasureError::InvalidAxis { a, b });
    }
    let c = std::f32::consts::PI * (3.0 * (a + b) - ((3.0 * a + b) * (a + 3.0 * b)).sqrt());
    Ok(c)
}
