//! Technical-analysis pipeline: indicators, classification, prediction.

pub mod analysis;
pub mod indicators;
pub mod predictor;

pub use predictor::{generate_signal, predict, HISTORY_LEN};
