use log::{info, warn};

use crate::data::cifar::{class_index, CLASS_NAMES};
use crate::data::dataset::{BinaryDataset, DatasetSplit};
use crate::data::images::ImageSet;
use crate::error::{NeuronError, Result};

/// Selects two classes from `train` and `validation`, flattens and normalizes
/// the images, and relabels them into {0, 1}.
///
/// Label 0 is the class with the lower vocabulary index. Both splits are
/// divided by the largest pixel value of the *filtered training split*, so
/// validation features may exceed 1.0.
///
/// # Errors
/// `InvalidArgument` if fewer than two names are given, a name is not in
/// [`CLASS_NAMES`], a name repeats, more than two names are given, the
/// two sets have different image shapes, or no training image belongs to
/// either class.
pub fn select_classes<S: AsRef<str>>(
    train: &ImageSet,
    validation: &ImageSet,
    class_names: &[S],
) -> Result<DatasetSplit> {
    let [low, high] = resolve_classes(class_names)?;

    if train.shape() != validation.shape() {
        return Err(NeuronError::InvalidArgument(format!(
            "training images are {:?} but validation images are {:?}",
            train.shape(),
            validation.shape()
        )));
    }

    let train_kept = keep(train, low, high);
    let validation_kept = keep(validation, low, high);

    if train_kept.is_empty() {
        return Err(NeuronError::InvalidArgument(format!(
            "no training images of class {} or {} among {} loaded",
            CLASS_NAMES[low],
            CLASS_NAMES[high],
            train.len()
        )));
    }
    if validation_kept.is_empty() {
        warn!(
            "no validation images of class {} or {}; validation is skipped",
            CLASS_NAMES[low], CLASS_NAMES[high]
        );
    }

    let max_pixel = train_kept
        .iter()
        .flat_map(|(px, _)| px.iter().copied())
        .max()
        .unwrap_or(0);
    let scale = if max_pixel == 0 {
        warn!("training pixels are all zero; features are left unscaled");
        1.0
    } else {
        f64::from(max_pixel)
    };

    let train_ds = to_binary(&train_kept, high, scale)?;
    let validation_ds = to_binary(&validation_kept, high, scale)?;

    info!(
        "selected {} vs {}: {} training / {} validation examples, scale {}",
        CLASS_NAMES[low],
        CLASS_NAMES[high],
        train_ds.len(),
        validation_ds.len(),
        scale
    );

    Ok(DatasetSplit {
        train: train_ds,
        validation: validation_ds,
        class_names: [CLASS_NAMES[low].to_owned(), CLASS_NAMES[high].to_owned()],
        shape: train.shape(),
        scale,
    })
}

/// Validates the requested names and returns their vocabulary indices in
/// ascending order.
fn resolve_classes<S: AsRef<str>>(class_names: &[S]) -> Result<[usize; 2]> {
    if class_names.len() < 2 {
        return Err(NeuronError::InvalidArgument(format!(
            "at least two class names are required, got {}",
            class_names.len()
        )));
    }

    let mut indices = Vec::with_capacity(class_names.len());
    for name in class_names {
        let name = name.as_ref();
        let idx = class_index(name).ok_or_else(|| {
            NeuronError::InvalidArgument(format!(
                "unknown class name '{}'; expected one of {}",
                name,
                CLASS_NAMES.join(", ")
            ))
        })?;
        if indices.contains(&idx) {
            return Err(NeuronError::InvalidArgument(format!(
                "class name '{}' is listed more than once",
                name
            )));
        }
        indices.push(idx);
    }

    if indices.len() > 2 {
        return Err(NeuronError::InvalidArgument(format!(
            "a single neuron separates exactly two classes, got {}",
            indices.len()
        )));
    }

    indices.sort_unstable();
    Ok([indices[0], indices[1]])
}

fn keep(set: &ImageSet, low: usize, high: usize) -> Vec<(&[u8], u8)> {
    set.iter()
        .filter(|&(_, label)| {
            let label = usize::from(label);
            label == low || label == high
        })
        .collect()
}

fn to_binary(kept: &[(&[u8], u8)], high: usize, scale: f64) -> Result<BinaryDataset> {
    let features = kept
        .iter()
        .map(|(px, _)| px.iter().map(|&p| f64::from(p) / scale).collect())
        .collect();
    let labels = kept
        .iter()
        .map(|&(_, label)| if usize::from(label) == high { 1.0 } else { 0.0 })
        .collect();
    BinaryDataset::new(features, labels)
}
