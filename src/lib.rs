pub mod calibration;
pub mod config;
pub mod error;
pub mod geometry;
pub mod landmark;
pub mod measure;
pub mod provider;
pub mod validate;

pub use calibration::{calibrate, Calibration, ViewTag};
pub use error::{MeasureError, Result};
pub use landmark::{Landmark, LandmarkFrame, LandmarkIndex};
pub use measure::{assemble, MeasurePipeline, MeasurementProfile, RunState};
pub use provider::LandmarkProvider;
