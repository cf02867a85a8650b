use std::path::Path;

use image::{Rgb, RgbImage};

use crate::error::{NeuronError, Result};
use crate::train::history::LossHistory;

pub const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);
pub const AXIS_COLOR: Rgb<u8> = Rgb([0, 0, 0]);
pub const TRAIN_COLOR: Rgb<u8> = Rgb([31, 119, 180]);
pub const VALIDATION_COLOR: Rgb<u8> = Rgb([255, 127, 14]);

/// Blank border around the plot area, in pixels.
pub const MARGIN: u32 = 16;

/// Draws training and validation loss against epoch.
///
/// The y axis runs from 0 to the largest finite loss in `history`; the x axis
/// spans the longer of the two series.
pub fn render_loss_curve(history: &LossHistory, width: u32, height: u32) -> Result<RgbImage> {
    if width < 2 * MARGIN + 2 || height < 2 * MARGIN + 2 {
        return Err(NeuronError::InvalidArgument(format!(
            "loss curve needs at least {0}x{0} pixels, got {1}x{2}",
            2 * MARGIN + 2,
            width,
            height
        )));
    }

    let mut img = RgbImage::from_pixel(width, height, BACKGROUND);

    let left = MARGIN as i64;
    let right = (width - MARGIN) as i64;
    let top = MARGIN as i64;
    let bottom = (height - MARGIN) as i64;

    draw_line(&mut img, (left, top), (left, bottom), AXIS_COLOR);
    draw_line(&mut img, (left, bottom), (right, bottom), AXIS_COLOR);

    let y_max = match history.max_loss() {
        Some(m) if m > 0.0 => m,
        _ => 1.0,
    };
    let n = history.train.len().max(history.validation.len());

    let to_point = |i: usize, v: f64| -> (i64, i64) {
        let x = if n > 1 {
            left + (i as i64) * (right - left) / (n as i64 - 1)
        } else {
            left
        };
        let v = if v.is_finite() { v.clamp(0.0, y_max) } else { y_max };
        let y = bottom - ((v / y_max) * (bottom - top) as f64).round() as i64;
        (x, y)
    };

    for (series, color) in [(&history.train, TRAIN_COLOR), (&history.validation, VALIDATION_COLOR)] {
        let points: Vec<(i64, i64)> = series.iter().enumerate().map(|(i, &v)| to_point(i, v)).collect();
        match points.as_slice() {
            [] => {}
            [only] => put(&mut img, only.0, only.1, color),
            _ => {
                for pair in points.windows(2) {
                    draw_line(&mut img, pair[0], pair[1], color);
                }
            }
        }
    }

    Ok(img)
}

/// Renders the curves and writes them to `path`.
pub fn save_loss_curve_png(history: &LossHistory, width: u32, height: u32, path: &Path) -> Result<()> {
    render_loss_curve(history, width, height)?.save(path)?;
    Ok(())
}

fn put(img: &mut RgbImage, x: i64, y: i64, color: Rgb<u8>) {
    if x >= 0 && y >= 0 && (x as u32) < img.width() && (y as u32) < img.height() {
        img.put_pixel(x as u32, y as u32, color);
    }
}

/// Bresenham line between two inclusive end points.
fn draw_line(img: &mut RgbImage, from: (i64, i64), to: (i64, i64), color: Rgb<u8>) {
    let (mut x, mut y) = from;
    let dx = (to.0 - x).abs();
    let dy = -(to.1 - y).abs();
    let sx = if x < to.0 { 1 } else { -1 };
    let sy = if y < to.1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        put(img, x, y, color);
        if x == to.0 && y == to.1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draws_axes_and_both_series() {
        let history = LossHistory {
            train: vec![1.0, 0.5, 0.25],
            validation: vec![0.9, 0.8, 0.7],
        };
        let img = render_loss_curve(&history, 200, 100).unwrap();

        assert_eq!(img.dimensions(), (200, 100));
        assert_eq!(img.get_pixel(0, 0), &BACKGROUND);
        assert_eq!(img.get_pixel(MARGIN, 100 - MARGIN), &AXIS_COLOR);
        assert!(img.pixels().any(|p| *p == TRAIN_COLOR));
        assert!(img.pixels().any(|p| *p == VALIDATION_COLOR));
        // Highest loss sits on the top edge of the plot area.
        assert_eq!(img.get_pixel(MARGIN, MARGIN), &TRAIN_COLOR);
        // Final training point: x = right edge, y = bottom - 0.25 * plot height.
        assert_eq!(img.get_pixel(200 - MARGIN, 100 - MARGIN - 17), &TRAIN_COLOR);
    }

    #[test]
    fn empty_history_draws_only_axes() {
        let img = render_loss_curve(&LossHistory::default(), 64, 64).unwrap();
        assert!(img.pixels().all(|p| *p == BACKGROUND || *p == AXIS_COLOR));
    }

    #[test]
    fn too_small_canvas_is_rejected() {
        assert!(render_loss_curve(&LossHistory::default(), 10, 100).is_err());
    }
}
