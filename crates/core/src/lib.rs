//! Core library for the Sort Visualiser application.
//!
//! The crate turns a sorting run into a replayable sequence of animation frames.
//! Each algorithm engine runs to completion ahead of time and records one frame
//! per comparison, swap and pass boundary; a [`Playback`] cursor then walks the
//! materialised sequence at a configurable rate. Rendering is left to the
//! consumer.

pub mod algorithms;
pub mod array;
pub mod config;
pub mod error;
pub mod export;
pub mod frame;
pub mod playback;
pub mod session;

pub use algorithms::{Algorithm, AlgorithmInfo};
pub use array::{generate, generate_with, ValueRange};
pub use config::{AppConfig, ArrayConfig, PlaybackConfig};
pub use error::{Result, SortVizError};
pub use export::RunRecord;
pub use frame::{Frame, FrameRecorder, Stats};
pub use playback::Playback;
pub use session::Session;
