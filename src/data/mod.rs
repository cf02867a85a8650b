pub mod cifar;
pub mod dataset;
pub mod filter;
pub mod images;

pub use dataset::{BinaryDataset, DatasetSplit};
pub use filter::select_classes;
pub use images::{ImageSet, ImageShape};
