pub mod config;
pub mod data;
pub mod error;
pub mod grad;
pub mod infer;
pub mod loss;
pub mod model;
pub mod optim;
pub mod train;
pub mod viz;

// Convenience re-exports
pub use config::RunConfig;
pub use data::{select_classes, BinaryDataset, DatasetSplit, ImageSet, ImageShape};
pub use error::{NeuronError, Result};
pub use grad::{AnalyticGradient, FiniteDifference, GradientKind, GradientProvider, Gradients};
pub use infer::{accuracy, sample_predictions, Prediction};
pub use loss::BceLoss;
pub use model::Neuron;
pub use optim::Sgd;
pub use train::{train, train_loop, EpochStats, LossHistory, TrainConfig, TrainingReport};
