use serde::{Deserialize, Serialize};

use crate::error::{NeuronError, Result};

/// Height, width and channel count of every image in a set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageShape {
    pub height: usize,
    pub width: usize,
    pub channels: usize,
}

impl ImageShape {
    pub fn new(height: usize, width: usize, channels: usize) -> ImageShape {
        ImageShape { height, width, channels }
    }

    /// Length of one flattened image (`height * width * channels`).
    pub fn len(&self) -> usize {
        self.height * self.width * self.channels
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Raw labeled images, stored flat and channel-interleaved
/// (`R,G,B,R,G,B,...` row-major) with one class index per image.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageSet {
    shape: ImageShape,
    pixels: Vec<u8>,
    labels: Vec<u8>,
}

impl ImageSet {
    /// Builds a set, checking that `pixels` holds exactly one image per label.
    pub fn new(shape: ImageShape, pixels: Vec<u8>, labels: Vec<u8>) -> Result<ImageSet> {
        if shape.is_empty() {
            return Err(NeuronError::InvalidArgument(format!(
                "image shape {}x{}x{} has no pixels",
                shape.height, shape.width, shape.channels
            )));
        }
        if pixels.len() != labels.len() * shape.len() {
            return Err(NeuronError::InvalidArgument(format!(
                "{} labels need {} pixel bytes, got {}",
                labels.len(),
                labels.len() * shape.len(),
                pixels.len()
            )));
        }
        Ok(ImageSet { shape, pixels, labels })
    }

    pub fn empty(shape: ImageShape) -> ImageSet {
        ImageSet { shape, pixels: Vec::new(), labels: Vec::new() }
    }

    pub fn shape(&self) -> ImageShape {
        self.shape
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn labels(&self) -> &[u8] {
        &self.labels
    }

    /// Pixels of image `index`.
    pub fn image(&self, index: usize) -> &[u8] {
        let n = self.shape.len();
        &self.pixels[index * n..(index + 1) * n]
    }

    /// Iterates `(pixels, label)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&[u8], u8)> + '_ {
        self.pixels
            .chunks_exact(self.shape.len())
            .zip(self.labels.iter().copied())
    }

    /// Appends all images of `other`; shapes must agree.
    pub fn extend(&mut self, other: ImageSet) -> Result<()> {
        if other.shape != self.shape {
            return Err(NeuronError::InvalidArgument(format!(
                "cannot merge {:?} images into a set of {:?} images",
                other.shape, self.shape
            )));
        }
        self.pixels.extend(other.pixels);
        self.labels.extend(other.labels);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_pixel_count_mismatch() {
        let shape = ImageShape::new(2, 2, 1);
        let err = ImageSet::new(shape, vec![0; 7], vec![0, 1]).unwrap_err();
        assert!(matches!(err, NeuronError::InvalidArgument(_)));
    }

    #[test]
    fn image_slices_follow_label_order() {
        let shape = ImageShape::new(1, 2, 1);
        let set = ImageSet::new(shape, vec![1, 2, 3, 4, 5, 6], vec![7, 8, 9]).unwrap();
        assert_eq!(set.len(), 3);
        assert_eq!(set.image(1), &[3, 4]);
        let pairs: Vec<_> = set.iter().map(|(px, l)| (px.to_vec(), l)).collect();
        assert_eq!(pairs[2], (vec![5, 6], 9));
    }

    #[test]
    fn extend_requires_matching_shape() {
        let mut a = ImageSet::new(ImageShape::new(1, 1, 1), vec![1], vec![0]).unwrap();
        let b = ImageSet::new(ImageShape::new(1, 1, 1), vec![2], vec![1]).unwrap();
        a.extend(b).unwrap();
        assert_eq!(a.labels(), &[0, 1]);

        let c = ImageSet::new(ImageShape::new(1, 1, 3), vec![1, 2, 3], vec![0]).unwrap();
        assert!(a.extend(c).is_err());
    }
}
