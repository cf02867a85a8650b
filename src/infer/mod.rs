pub mod sample;

pub use sample::{accuracy, predict_example, sample_predictions, Prediction};
