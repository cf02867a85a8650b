use std::path::Path;

use image::imageops::{self, FilterType};
use image::{Rgb, RgbImage};

use crate::data::images::ImageShape;
use crate::error::{NeuronError, Result};
use crate::model::neuron::Neuron;

/// Lays the weight vector out as an image of `shape`, min-max scaled to
/// 0..=255 and upscaled `scale` times with nearest-neighbour sampling.
///
/// Single-channel weights are replicated to gray; three channels map to RGB.
/// A constant weight vector renders as mid-gray.
pub fn render_weights(neuron: &Neuron, shape: ImageShape, scale: u32) -> Result<RgbImage> {
    if neuron.input_size() != shape.len() {
        return Err(NeuronError::InvalidArgument(format!(
            "{} weights cannot fill a {}x{}x{} image",
            neuron.input_size(),
            shape.height,
            shape.width,
            shape.channels
        )));
    }
    if shape.channels != 1 && shape.channels != 3 {
        return Err(NeuronError::InvalidArgument(format!(
            "weight images need 1 or 3 channels, got {}",
            shape.channels
        )));
    }
    if scale == 0 {
        return Err(NeuronError::InvalidArgument("image scale must be at least 1".to_owned()));
    }

    let (min, max) = neuron
        .weights
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &w| (lo.min(w), hi.max(w)));
    let range = max - min;
    let to_byte = |w: f64| -> u8 {
        if range > 0.0 && range.is_finite() {
            ((w - min) / range * 255.0).round().clamp(0.0, 255.0) as u8
        } else {
            128
        }
    };

    let width = shape.width as u32;
    let height = shape.height as u32;
    let img = RgbImage::from_fn(width, height, |x, y| {
        let base = (y as usize * shape.width + x as usize) * shape.channels;
        let px = &neuron.weights[base..base + shape.channels];
        match *px {
            [g] => Rgb([to_byte(g); 3]),
            [r, g, b] => Rgb([to_byte(r), to_byte(g), to_byte(b)]),
            _ => unreachable!("channel count checked above"),
        }
    });

    if scale == 1 {
        return Ok(img);
    }
    Ok(imageops::resize(&img, width * scale, height * scale, FilterType::Nearest))
}

/// Renders the weights and writes them to `path` (format chosen by extension).
pub fn save_weights_png(neuron: &Neuron, shape: ImageShape, scale: u32, path: &Path) -> Result<()> {
    render_weights(neuron, shape, scale)?.save(path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_weights_keep_channel_order() {
        // 1×2 RGB: first pixel holds the minimum red and maximum blue.
        let neuron = Neuron::from_parameters(vec![-1.0, 0.0, 1.0, 0.0, 0.0, 0.0], 0.0);
        let img = render_weights(&neuron, ImageShape::new(1, 2, 3), 1).unwrap();
        assert_eq!(img.dimensions(), (2, 1));
        assert_eq!(img.get_pixel(0, 0), &Rgb([0, 128, 255]));
        assert_eq!(img.get_pixel(1, 0), &Rgb([128, 128, 128]));
    }

    #[test]
    fn grayscale_is_replicated_and_upscaled() {
        let neuron = Neuron::from_parameters(vec![0.0, 1.0, 2.0, 3.0], 0.0);
        let img = render_weights(&neuron, ImageShape::new(2, 2, 1), 4).unwrap();
        assert_eq!(img.dimensions(), (8, 8));
        assert_eq!(img.get_pixel(0, 0), &Rgb([0, 0, 0]));
        assert_eq!(img.get_pixel(7, 7), &Rgb([255, 255, 255]));
    }

    #[test]
    fn constant_weights_render_mid_gray() {
        let img = render_weights(&Neuron::zeros(4), ImageShape::new(2, 2, 1), 1).unwrap();
        assert!(img.pixels().all(|p| *p == Rgb([128, 128, 128])));
    }

    #[test]
    fn rejects_bad_shapes() {
        let neuron = Neuron::zeros(8);
        assert!(render_weights(&neuron, ImageShape::new(2, 2, 1), 1).is_err());
        assert!(render_weights(&neuron, ImageShape::new(1, 4, 2), 1).is_err());
        assert!(render_weights(&neuron, ImageShape::new(2, 4, 1), 0).is_err());
    }
}
