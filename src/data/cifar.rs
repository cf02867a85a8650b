//! Readers for the CIFAR-10 binary distribution (`cifar-10-batches-bin`).
//!
//! # Record layout
//! ```text
//! byte   0:        class index in [0, 10)
//! bytes  1..1025:  red channel,   32×32, row-major
//! bytes  1025..:   green channel, 32×32, row-major
//! bytes  2049..:   blue channel,  32×32, row-major
//! ```
//! Each batch file is a plain concatenation of 3073-byte records with no
//! header. Parsed images are converted to the channel-interleaved layout
//! (`R,G,B,R,G,B,...`) used everywhere else in the crate.

use std::path::Path;

use log::{debug, info};

use crate::data::images::{ImageSet, ImageShape};
use crate::error::{NeuronError, Result};

/// The fixed class vocabulary, indexed by the label byte.
pub const CLASS_NAMES: [&str; 10] = [
    "airplane",
    "automobile",
    "bird",
    "cat",
    "deer",
    "dog",
    "frog",
    "horse",
    "ship",
    "truck",
];

pub const IMAGE_SHAPE: ImageShape = ImageShape { height: 32, width: 32, channels: 3 };

const RECORD_LEN: usize = 1 + 32 * 32 * 3;

/// Default training batch file names.
pub const TRAIN_BATCHES: [&str; 5] = [
    "data_batch_1.bin",
    "data_batch_2.bin",
    "data_batch_3.bin",
    "data_batch_4.bin",
    "data_batch_5.bin",
];

/// Default held-out batch file name.
pub const TEST_BATCH: &str = "test_batch.bin";

/// Returns the vocabulary index of `name`, if any.
pub fn class_index(name: &str) -> Option<usize> {
    CLASS_NAMES.iter().position(|&c| c == name)
}

/// Parses one in-memory batch file.
pub fn parse_batch(bytes: &[u8]) -> Result<ImageSet> {
    parse_records(bytes, IMAGE_SHAPE)
}

/// Parses records of `1 + shape.len()` bytes with planar channels.
pub(crate) fn parse_records(bytes: &[u8], shape: ImageShape) -> Result<ImageSet> {
    let record_len = 1 + shape.len();

    if bytes.is_empty() {
        return Err(NeuronError::Format("batch file is empty".to_owned()));
    }
    if bytes.len() % record_len != 0 {
        return Err(NeuronError::Format(format!(
            "batch length {} is not a multiple of the {}-byte record size",
            bytes.len(),
            record_len
        )));
    }

    let n_records = bytes.len() / record_len;
    let plane = shape.height * shape.width;
    let mut labels = Vec::with_capacity(n_records);
    let mut pixels = Vec::with_capacity(n_records * shape.len());

    for (i, record) in bytes.chunks_exact(record_len).enumerate() {
        let label = record[0];
        if label as usize >= CLASS_NAMES.len() {
            return Err(NeuronError::Format(format!(
                "record {}: class index {} is out of range for {} classes",
                i,
                label,
                CLASS_NAMES.len()
            )));
        }
        labels.push(label);

        let data = &record[1..];
        for p in 0..plane {
            for c in 0..shape.channels {
                pixels.push(data[c * plane + p]);
            }
        }
    }

    debug!("parsed {} records", n_records);
    ImageSet::new(shape, pixels, labels)
}

/// Reads one batch file from disk.
pub fn load_batch(path: &Path) -> Result<ImageSet> {
    let bytes = std::fs::read(path)?;
    parse_batch(&bytes)
}

/// Reads and concatenates `files` (names relative to `dir`).
pub fn load_batches<S: AsRef<str>>(dir: &Path, files: &[S]) -> Result<ImageSet> {
    let mut all = ImageSet::empty(IMAGE_SHAPE);
    for file in files {
        let path = dir.join(file.as_ref());
        let batch = load_batch(&path)?;
        info!("loaded {} images from {}", batch.len(), path.display());
        all.extend(batch)?;
    }
    Ok(all)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_vocabulary_lookup() {
        assert_eq!(class_index("airplane"), Some(0));
        assert_eq!(class_index("truck"), Some(9));
        assert_eq!(class_index("unicorn"), None);
    }

    #[test]
    fn planar_records_become_interleaved() {
        // Two 1×2 RGB images.
        let shape = ImageShape::new(1, 2, 3);
        let bytes = [
            3, 10, 11, 20, 21, 30, 31, // label 3: R=[10,11] G=[20,21] B=[30,31]
            5, 1, 2, 3, 4, 5, 6,
        ];
        let set = parse_records(&bytes, shape).unwrap();
        assert_eq!(set.labels(), &[3, 5]);
        assert_eq!(set.image(0), &[10, 20, 30, 11, 21, 31]);
        assert_eq!(set.image(1), &[1, 3, 5, 2, 4, 6]);
    }

    #[test]
    fn full_size_record_parses() {
        let mut bytes = vec![0u8; RECORD_LEN];
        bytes[0] = 9;
        bytes[1] = 255; // first red pixel
        bytes[1 + 1024] = 128; // first green pixel
        let set = parse_batch(&bytes).unwrap();
        assert_eq!(set.len(), 1);
        assert_eq!(set.shape(), IMAGE_SHAPE);
        assert_eq!(&set.image(0)[..3], &[255, 128, 0]);
    }

    #[test]
    fn truncated_batch_is_rejected() {
        let bytes = vec![0u8; RECORD_LEN + 5];
        assert!(matches!(parse_batch(&bytes), Err(NeuronError::Format(_))));
        assert!(matches!(parse_batch(&[]), Err(NeuronError::Format(_))));
    }

    #[test]
    fn out_of_range_label_is_rejected() {
        let shape = ImageShape::new(1, 1, 1);
        assert!(matches!(parse_records(&[10, 0], shape), Err(NeuronError::Format(_))));
    }
}
