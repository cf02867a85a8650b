pub mod activation;
pub mod neuron;

pub use activation::sigmoid;
pub use neuron::{Neuron, PROB_EPS};
