//! 正面・側面フレームからの採寸組み立て
//!
//! 純粋関数: 同じフレームと身長を与えれば常に同じプロファイルを返す。
//! いずれかのステップが失敗したら全体が失敗し、部分プロファイルは
//! 作らない。

use tracing::debug;

use crate::calibration::{self, Calibration, ViewTag};
use crate::config::MeasureConfig;
use crate::error::Result;
use crate::geometry;
use crate::landmark::{LandmarkFrame, LandmarkIndex};
use crate::measure::profile::MeasurementProfile;
use crate::validate;

/// 2ビューの採寸を組み立てる
///
/// 1. 両フレームを独立にキャリブレーション
/// 2. 正面ビューから幅系・長さ系の計測
/// 3. 側面ビューから奥行き系の計測
/// 4. 幅と奥行きを半軸として楕円周長でバスト・ヒップを近似
pub fn assemble(
    front: &LandmarkFrame,
    side: &LandmarkFrame,
    known_height_cm: f32,
    config: &MeasureConfig,
) -> Result<MeasurementProfile> {
    let threshold = config.confidence_threshold;

    validate::require_landmarks(front, &validate::FRONT_REQUIRED, threshold, ViewTag::Front)?;
    let cal_front = calibration::calibrate(front, known_height_cm, ViewTag::Front, threshold)?;

    validate::require_landmarks(side, &validate::SIDE_REQUIRED, threshold, ViewTag::Side)?;
    let cal_side = calibration::calibrate(side, known_height_cm, ViewTag::Side, threshold)?;

    let shoulder_width = span_cm(front, &cal_front, LandmarkIndex::LeftShoulder, LandmarkIndex::RightShoulder);
    let sleeve_length = sleeve_length_cm(front, &cal_front);
    let torso_length = torso_length_cm(front, &cal_front);
    let inseam = inseam_cm(front, &cal_front, config.inseam_correction);

    // ヒップ: 正面幅 × 側面奥行き → 楕円半軸
    let hip_width = span_cm(front, &cal_front, LandmarkIndex::LeftHip, LandmarkIndex::RightHip);
    let hip_depth = span_cm(side, &cal_side, LandmarkIndex::LeftHip, LandmarkIndex::RightHip);
    let hip_circumference = geometry::ellipse_circumference(hip_width / 2.0, hip_depth / 2.0)?;

    // バスト: 肩幅 × 側面の肩奥行き
    let shoulder_depth =
        span_cm(side, &cal_side, LandmarkIndex::LeftShoulder, LandmarkIndex::RightShoulder);
    let bust_circumference =
        geometry::ellipse_circumference(shoulder_width / 2.0, shoulder_depth / 2.0)?;

    debug!(
        shoulder_width,
        sleeve_length,
        torso_length,
        inseam,
        hip_circumference,
        bust_circumference,
        "assembled measurements"
    );

    MeasurementProfile::new(
        bust_circumference,
        hip_circumference,
        shoulder_width,
        sleeve_length,
        torso_length,
        inseam,
    )
}

/// 2点間のキャリブレーション済み実寸距離（cm）
fn span_cm(
    frame: &LandmarkFrame,
    cal: &Calibration,
    a: LandmarkIndex,
    b: LandmarkIndex,
) -> f32 {
    geometry::pixel_distance(frame.get(a), frame.get(b), frame) * cal.length_per_pixel
}

/// 袖丈 = 肩→肘 + 肘→手首（左腕）
fn sleeve_length_cm(frame: &LandmarkFrame, cal: &Calibration) -> f32 {
    let upper = geometry::pixel_distance(
        frame.get(LandmarkIndex::LeftShoulder),
        frame.get(LandmarkIndex::LeftElbow),
        frame,
    );
    let lower = geometry::pixel_distance(
        frame.get(LandmarkIndex::LeftElbow),
        frame.get(LandmarkIndex::LeftWrist),
        frame,
    );
    (upper + lower) * cal.length_per_pixel
}

/// 胴長 = 肩中点と腰中点の縦スパン
fn torso_length_cm(frame: &LandmarkFrame, cal: &Calibration) -> f32 {
    let shoulder_mid_y = (frame.get(LandmarkIndex::LeftShoulder).y
        + frame.get(LandmarkIndex::RightShoulder).y)
        / 2.0;
    let hip_mid_y =
        (frame.get(LandmarkIndex::LeftHip).y + frame.get(LandmarkIndex::RightHip).y) / 2.0;
    (shoulder_mid_y - hip_mid_y).abs() * frame.height as f32 * cal.length_per_pixel
}

/// 股下 = 腰→足首の縦スパン × 補正係数
///
/// ヒップランドマークは実際の股点より上に出るため補正係数で縮める。
fn inseam_cm(frame: &LandmarkFrame, cal: &Calibration, correction: f32) -> f32 {
    let span = (frame.get(LandmarkIndex::LeftAnkle).y - frame.get(LandmarkIndex::LeftHip).y).abs();
    span * frame.height as f32 * cal.length_per_pixel * correction
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MeasureError;
    use crate::landmark::Landmark;

    /// 全身が写った正面相当のフレーム
    /// 鼻 y=0.10, 足首 y=0.95 (高さ1000px, 身長170cm → 0.2 cm/px)
    fn make_front_frame() -> LandmarkFrame {
        let mut lm = [Landmark::default(); LandmarkIndex::COUNT];
        lm[LandmarkIndex::Nose as usize] = Landmark::new(0.50, 0.10, 0.9);
        lm[LandmarkIndex::LeftShoulder as usize] = Landmark::new(0.30, 0.25, 0.9);
        lm[LandmarkIndex::RightShoulder as usize] = Landmark::new(0.70, 0.25, 0.9);
        lm[LandmarkIndex::LeftElbow as usize] = Landmark::new(0.25, 0.40, 0.9);
        lm[LandmarkIndex::LeftWrist as usize] = Landmark::new(0.24, 0.52, 0.9);
        lm[LandmarkIndex::LeftHip as usize] = Landmark::new(0.40, 0.50, 0.9);
        lm[LandmarkIndex::RightHip as usize] = Landmark::new(0.60, 0.50, 0.9);
        lm[LandmarkIndex::LeftAnkle as usize] = Landmark::new(0.42, 0.95, 0.9);
        lm[LandmarkIndex::RightAnkle as usize] = Landmark::new(0.58, 0.95, 0.9);
        LandmarkFrame::new(lm, 800, 1000)
    }

    /// 側面相当のフレーム（幅方向のスパンが奥行きを表す）
    fn make_side_frame() -> LandmarkFrame {
        let mut lm = [Landmark::default(); LandmarkIndex::COUNT];
        lm[LandmarkIndex::Nose as usize] = Landmark::new(0.50, 0.10, 0.9);
        lm[LandmarkIndex::LeftShoulder as usize] = Landmark::new(0.45, 0.25, 0.9);
        lm[LandmarkIndex::RightShoulder as usize] = Landmark::new(0.58, 0.25, 0.9);
        lm[LandmarkIndex::LeftHip as usize] = Landmark::new(0.44, 0.50, 0.9);
        lm[LandmarkIndex::RightHip as usize] = Landmark::new(0.56, 0.50, 0.9);
        lm[LandmarkIndex::LeftAnkle as usize] = Landmark::new(0.50, 0.95, 0.9);
        lm[LandmarkIndex::RightAnkle as usize] = Landmark::new(0.52, 0.95, 0.9);
        LandmarkFrame::new(lm, 800, 1000)
    }

    #[test]
    fn test_shoulder_width_reference_scenario() {
        // 肩 x=0.30/0.70, 幅800px, 0.2cm/px → 64.0cm
        let profile = assemble(
            &make_front_frame(),
            &make_side_frame(),
            170.0,
            &MeasureConfig::default(),
        )
        .unwrap();
        assert!((profile.shoulder_width - 64.0).abs() < 0.1);
    }

    #[test]
    fn test_inseam_uses_correction_factor() {
        let config = MeasureConfig::default();
        let profile =
            assemble(&make_front_frame(), &make_side_frame(), 170.0, &config).unwrap();
        // |0.95-0.50| * 1000px * 0.2cm/px * 0.9 = 81.0
        assert!((profile.inseam - 81.0).abs() < 0.1);

        let no_correction = MeasureConfig { inseam_correction: 1.0, ..config };
        let raw = assemble(&make_front_frame(), &make_side_frame(), 170.0, &no_correction).unwrap();
        assert!((raw.inseam - 90.0).abs() < 0.1);
    }

    #[test]
    fn test_torso_length() {
        let profile = assemble(
            &make_front_frame(),
            &make_side_frame(),
            170.0,
            &MeasureConfig::default(),
        )
        .unwrap();
        // |0.25-0.50| * 1000px * 0.2cm/px = 50.0
        assert!((profile.torso_length - 50.0).abs() < 0.1);
    }

    #[test]
    fn test_circumferences_bounded_by_axes() {
        let profile = assemble(
            &make_front_frame(),
            &make_side_frame(),
            170.0,
            &MeasureConfig::default(),
        )
        .unwrap();
        // ヒップ: 幅 0.2*800*0.2=32cm, 奥行き 0.12*800*0.2=19.2cm
        let tau = 2.0 * std::f32::consts::PI;
        assert!(profile.hip_circumference > tau * (19.2 / 2.0) * 0.99);
        assert!(profile.hip_circumference < tau * (32.0 / 2.0) * 1.01);
    }

    #[test]
    fn test_idempotent() {
        let config = MeasureConfig::default();
        let p1 = assemble(&make_front_frame(), &make_side_frame(), 170.0, &config).unwrap();
        let p2 = assemble(&make_front_frame(), &make_side_frame(), 170.0, &config).unwrap();
        assert_eq!(p1, p2);
    }

    #[test]
    fn test_missing_landmark_no_partial_profile() {
        let mut front = make_front_frame();
        front.landmarks[LandmarkIndex::LeftAnkle as usize].confidence = 0.1;

        let err = assemble(&front, &make_side_frame(), 170.0, &MeasureConfig::default())
            .unwrap_err();
        assert_eq!(err.reason_code(), "MISSING_LANDMARK");
        assert_eq!(err.landmark(), Some(LandmarkIndex::LeftAnkle));
        assert_eq!(err.view(), Some(ViewTag::Front));
    }

    #[test]
    fn test_failing_view_distinguishes_front_from_side() {
        // 同じ退化のさせ方（足首を鼻より上へ）でも、どちらのビューが
        // 失敗したかがエラーから判別できる
        fn invert_ankles(frame: &mut LandmarkFrame) {
            frame.landmarks[LandmarkIndex::LeftAnkle as usize].y = 0.05;
            frame.landmarks[LandmarkIndex::RightAnkle as usize].y = 0.05;
        }
        let config = MeasureConfig::default();

        let mut front = make_front_frame();
        invert_ankles(&mut front);
        let front_fail = assemble(&front, &make_side_frame(), 170.0, &config).unwrap_err();

        let mut side = make_side_frame();
        invert_ankles(&mut side);
        let side_fail = assemble(&make_front_frame(), &side, 170.0, &config).unwrap_err();

        assert_eq!(front_fail.view(), Some(ViewTag::Front));
        assert_eq!(side_fail.view(), Some(ViewTag::Side));
        assert_ne!(front_fail.to_string(), side_fail.to_string());
    }

    #[test]
    fn test_degenerate_side_frame_propagates() {
        let mut side = make_side_frame();
        // 側面の足首を鼻より上へ → 側面キャリブレーション失敗
        side.landmarks[LandmarkIndex::LeftAnkle as usize].y = 0.05;
        side.landmarks[LandmarkIndex::RightAnkle as usize].y = 0.05;

        let err = assemble(&make_front_frame(), &side, 170.0, &MeasureConfig::default())
            .unwrap_err();
        assert!(matches!(err, MeasureError::DegeneratePose { .. }));
        assert_eq!(err.view(), Some(ViewTag::Side));
    }

    #[test]
    fn test_coincident_hips_rejected_as_axis_error() {
        let mut side = make_side_frame();
        // 側面の左右ヒップが一致 → 奥行き0 → 楕円軸エラー
        side.landmarks[LandmarkIndex::LeftHip as usize] = Landmark::new(0.5, 0.5, 0.9);
        side.landmarks[LandmarkIndex::RightHip as usize] = Landmark::new(0.5, 0.5, 0.9);

        let err = assemble(&make_front_frame(), &side, 170.0, &MeasureConfig::default())
            .unwrap_err();
        assert_eq!(err.reason_code(), "INVALID_AXIS");
    }
}
