//! PNG artifacts: the learned weight template and the loss curves.

pub mod loss_curve;
pub mod weights;

pub use loss_curve::{render_loss_curve, save_loss_curve_png};
pub use weights::{render_weights, save_weights_png};
