use crate::grad::Gradients;
use crate::model::neuron::Neuron;

/// Plain gradient descent with a fixed learning rate.
#[derive(Debug, Clone, Copy)]
pub struct Sgd {
    pub learning_rate: f64,
}

impl Sgd {
    pub fn new(learning_rate: f64) -> Sgd {
        Sgd { learning_rate }
    }

    /// Applies one update to `neuron` given its pre-computed gradients.
    pub fn step(&self, neuron: &mut Neuron, gradients: &Gradients) {
        neuron.apply_gradients(&gradients.weights, gradients.bias, self.learning_rate);
    }
}
