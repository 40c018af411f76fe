//! 2枚撮影パイプラインの状態機械
//!
//! Idle → AwaitingFrontLandmarks → FrontValidated →
//! AwaitingSideLandmarks → SideValidated → Assembled、
//! 失敗はどの状態からでも終端の Failed へ。状態の再入は無く、
//! 失敗した実行は新しい撮影で Idle からやり直す。

use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::calibration::ViewTag;
use crate::config::MeasureConfig;
use crate::error::{MeasureError, Result};
use crate::measure::assembler;
use crate::measure::profile::MeasurementProfile;
use crate::provider::LandmarkProvider;
use crate::validate;

/// 実行の進行状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Idle,
    AwaitingFrontLandmarks,
    FrontValidated,
    AwaitingSideLandmarks,
    SideValidated,
    Assembled,
    Failed,
}

/// 採寸パイプライン
///
/// 検出呼び出しは正面→側面の厳密な逐次。プロバイダは同時1ジョブの
/// 前提なので並行検出は行わない。キャンセルトークンが発火したら
/// 保留中の検出 future ごと実行を破棄するため、古い検出結果が後続の
/// 実行に漏れることはない。
pub struct MeasurePipeline<P: LandmarkProvider> {
    provider: P,
    config: MeasureConfig,
    state: RunState,
}

impl<P: LandmarkProvider> MeasurePipeline<P> {
    pub fn new(provider: P, config: MeasureConfig) -> Self {
        Self {
            provider,
            config,
            state: RunState::Idle,
        }
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    /// 1回の採寸実行
    ///
    /// 正面画像・側面画像・申告身長からプロファイルを組み立てる。
    /// どのステージの失敗も即座に全体を打ち切る。
    pub async fn run(
        &mut self,
        front_image: &P::Image,
        side_image: &P::Image,
        known_height_cm: f32,
        cancel: &CancellationToken,
    ) -> Result<MeasurementProfile> {
        self.state = RunState::Idle;
        let result = self
            .run_inner(front_image, side_image, known_height_cm, cancel)
            .await;

        match &result {
            Ok(_) => {
                self.state = RunState::Assembled;
                info!("measurement run assembled");
            }
            Err(e) => {
                self.state = RunState::Failed;
                warn!(reason = e.reason_code(), "measurement run failed");
            }
        }
        result
    }

    async fn run_inner(
        &mut self,
        front_image: &P::Image,
        side_image: &P::Image,
        known_height_cm: f32,
        cancel: &CancellationToken,
    ) -> Result<MeasurementProfile> {
        // 身長レンジは呼び出し側が検証済みの想定だが、ここでも
        // 受け付けない（範囲外の値でキャリブレーションしないため）
        if !(known_height_cm >= self.config.min_height_cm
            && known_height_cm <= self.config.max_height_cm)
        {
            return Err(MeasureError::HeightOutOfRange {
                height_cm: known_height_cm,
                min_cm: self.config.min_height_cm,
                max_cm: self.config.max_height_cm,
            });
        }

        self.state = RunState::AwaitingFrontLandmarks;
        debug!("requesting front landmarks");
        let front = tokio::select! {
            _ = cancel.cancelled() => return Err(MeasureError::Cancelled),
            result = self.provider.detect(front_image) => result?,
        };
        validate::require_landmarks(
            &front,
            &validate::FRONT_REQUIRED,
            self.config.confidence_threshold,
            ViewTag::Front,
        )?;
        self.state = RunState::FrontValidated;

        self.state = RunState::AwaitingSideLandmarks;
        debug!("requesting side landmarks");
        let side = tokio::select! {
            _ = cancel.cancelled() => return Err(MeasureError::Cancelled),
            result = self.provider.detect(side_image) => result?,
        };
        validate::require_landmarks(
            &side,
            &validate::SIDE_REQUIRED,
            self.config.confidence_threshold,
            ViewTag::Side,
        )?;
        self.state = RunState::SideValidated;

        assembler::assemble(&front, &side, known_height_cm, &self.config)
    }
}
