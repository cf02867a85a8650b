pub mod epoch_stats;
pub mod history;
pub mod loop_fn;
pub mod report;
pub mod train_config;

pub use epoch_stats::EpochStats;
pub use history::LossHistory;
pub use loop_fn::{eval_loss, train, train_loop};
pub use report::TrainingReport;
pub use train_config::TrainConfig;
