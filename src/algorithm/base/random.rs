use rand::Rng;

/// The single draw site of the colony: a uniform number in `[0, 1)`.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

impl<R: Rng> RandomSource for R {
    fn next_unit(&mut self) -> f64 {
        self.gen_range(0.0..1.0)
    }
}


/// Replays a fixed sequence of draws, cycling when exhausted.
#[cfg(test)]
pub struct Scripted {
    draws: Vec<f64>,
    cursor: usize,
}

#[cfg(test)]
impl Scripted {
    pub fn new(draws: Vec<f64>) -> Self {
        assert!(!draws.is_empty());
        Scripted { draws, cursor: 0 }
    }
}

#[cfg(test)]
impl RandomSource for Scripted {
    fn next_unit(&mut self) -> f64 {
        let draw = self.draws[self.cursor % self.draws.len()];
        self.cursor += 1;
        draw
    }
}
