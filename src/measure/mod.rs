pub mod assembler;
pub mod pipeline;
pub mod profile;

pub use assembler::assemble;
pub use pipeline::{MeasurePipeline, RunState};
pub use profile::MeasurementProfile;
