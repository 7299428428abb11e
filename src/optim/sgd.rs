/// Plain gradient descent. Holds the learning rate and applies an
/// immediate scalar update as the backward pass walks each parameter.
pub struct Sgd {
    pub learning_rate: f64,
}

impl Sgd {
    /// # Panics
    /// Panics if `learning_rate` is not positive.
    pub fn new(learning_rate: f64) -> Sgd {
        assert!(learning_rate > 0.0, "learning rate must be positive");
        Sgd { learning_rate }
    }

    /// One descent step on a single parameter.
    pub fn step(&self, param: &mut f64, gradient: f64) {
        *param -= self.learning_rate * gradient;
    }
}
