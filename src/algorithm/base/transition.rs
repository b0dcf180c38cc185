use hashbrown::HashSet;
use crate::network::Graph;
use crate::utils::error::Result;
use super::pheromone::{PheromoneTable, Visibility};
use super::random::RandomSource;


/// Categorical distribution over the unvisited neighbors of a node.
#[derive(Clone, Debug, PartialEq)]
pub struct Transition {
    pub candidates: Vec<usize>,
    pub probabilities: Vec<f64>,
}

impl Transition {
    /// Draws one candidate; falls back to the last one if rounding leaves
    /// the cumulative sum a hair below the draw.
    pub fn sample<R>(&self, rng: &mut R) -> usize
    where R: RandomSource + ?Sized {
        debug_assert!(!self.candidates.is_empty());
        let rand_f = rng.next_unit();
        let mut accumulation = 0.0;
        for (&candidate, &probability) in self.candidates.iter().zip(&self.probabilities) {
            accumulation += probability;
            if accumulation > rand_f {
                return candidate;
            }
        }
        self.candidates[self.candidates.len() - 1]
    }
}

/// Weighs a step by `pheromone^alpha * visibility^beta`.
#[derive(Clone, Copy, Debug)]
pub struct TransitionRule {
    pub alpha: f64,
    pub beta: f64,
}

impl TransitionRule {
    pub fn new(alpha: f64, beta: f64) -> Self {
        TransitionRule { alpha, beta }
    }
    /// Returns `None` on a dead end: every neighbor is visited, or the
    /// weights collapse to zero (underflowed pheromone) and cannot be
    /// normalized.
    ///
    /// Weights are taken in log space and scaled by the largest one, so
    /// costs whose `beta` power overflows `f64` still normalize.
    pub fn probabilities(
        &self,
        graph: &Graph,
        pheromone: &PheromoneTable,
        visibility: &Visibility,
        current: usize,
        visited: &HashSet<usize>,
    ) -> Result<Option<Transition>> {
        let candidates: Vec<usize> = graph.neighbors(current)
            .filter(|node| !visited.contains(node))
            .collect();
        if candidates.is_empty() {
            return Ok(None);
        }
        let mut log_weights = Vec::with_capacity(candidates.len());
        for &next in candidates.iter() {
            let tau = pheromone.intensity(current, next)?;
            let eta = visibility.of(current, next)?;
            log_weights.push(log_pow(tau, self.alpha) + log_pow(eta, self.beta));
        }
        let max = log_weights.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        // -inf: every weight is zero
        if !max.is_finite() {
            return Ok(None);
        }
        let weights: Vec<f64> = log_weights.into_iter()
            .map(|log_weight| (log_weight - max).exp())
            .collect();
        let sum: f64 = weights.iter().sum();
        let probabilities = weights.into_iter()
            .map(|weight| weight / sum)
            .collect();
        Ok(Some(Transition { candidates, probabilities }))
    }
}

/// `ln(base^exponent)`, with `0^0 = 1`.
fn log_pow(base: f64, exponent: f64) -> f64 {
    if exponent == 0.0 { 0.0 } else { exponent * base.ln() }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::base::random::Scripted;

    fn slides() -> Graph {
        Graph::from_edges(vec![
            (1, 2, 3.0), (2, 4, 5.0), (1, 3, 1.0), (3, 4, 2.0),
        ]).unwrap()
    }
    fn visited(nodes: &[usize]) -> HashSet<usize> {
        nodes.iter().cloned().collect()
    }

    #[test]
    fn it_normalizes_weights() {
        let graph = slides();
        let pheromone = PheromoneTable::new(&graph, 0.01);
        let visibility = Visibility::new(&graph);
        let rule = TransitionRule::new(1.0, 8.0);
        let transition = rule
            .probabilities(&graph, &pheromone, &visibility, 1, &visited(&[1]))
            .unwrap()
            .unwrap();
        assert_eq!(transition.candidates, vec![2, 3]);
        assert_eq!(transition.probabilities.len(), 2);
        let sum: f64 = transition.probabilities.iter().sum();
        assert!((sum - 1.0).abs() < 1e-12);
        // 3^8 : 1^8
        let expected = 6561.0 / 6562.0;
        assert!((transition.probabilities[0] - expected).abs() < 1e-12);
    }
    #[test]
    fn it_skips_visited_neighbors() {
        let graph = slides();
        let pheromone = PheromoneTable::new(&graph, 0.01);
        let visibility = Visibility::new(&graph);
        let rule = TransitionRule::new(1.0, 8.0);
        let transition = rule
            .probabilities(&graph, &pheromone, &visibility, 2, &visited(&[1, 2]))
            .unwrap()
            .unwrap();
        assert_eq!(transition.candidates, vec![4]);
        assert_eq!(transition.probabilities, vec![1.0]);
    }
    #[test]
    fn it_reports_dead_end() {
        let graph = slides();
        let pheromone = PheromoneTable::new(&graph, 0.01);
        let visibility = Visibility::new(&graph);
        let rule = TransitionRule::new(1.0, 8.0);
        let transition = rule
            .probabilities(&graph, &pheromone, &visibility, 2, &visited(&[1, 2, 4]))
            .unwrap();
        assert!(transition.is_none());
    }
    #[test]
    fn it_treats_zero_weights_as_dead_end() {
        let graph = slides();
        let pheromone = PheromoneTable::new(&graph, 0.0);
        let visibility = Visibility::new(&graph);
        let rule = TransitionRule::new(1.0, 8.0);
        let transition = rule
            .probabilities(&graph, &pheromone, &visibility, 1, &visited(&[1]))
            .unwrap();
        assert!(transition.is_none());
    }
    #[test]
    fn it_normalizes_weights_beyond_f64_range() {
        let graph = Graph::from_edges(vec![(1, 2, 1e40), (1, 3, 2e40)]).unwrap();
        let pheromone = PheromoneTable::new(&graph, 0.01);
        let visibility = Visibility::new(&graph);
        let rule = TransitionRule::new(1.0, 8.0);
        let transition = rule
            .probabilities(&graph, &pheromone, &visibility, 1, &visited(&[1]))
            .unwrap()
            .unwrap();
        assert_eq!(transition.candidates, vec![2, 3]);
        let sum: f64 = transition.probabilities.iter().sum();
        assert!((sum - 1.0).abs() < 1e-12);
        // 1 : 2^8
        let expected = 1.0 / 257.0;
        assert!((transition.probabilities[0] - expected).abs() < 1e-12);
    }
    #[test]
    fn it_samples_by_cumulative_probability() {
        let transition = Transition {
            candidates: vec![7, 8, 9],
            probabilities: vec![0.2, 0.5, 0.3],
        };
        let mut source = Scripted::new(vec![0.0, 0.19, 0.2, 0.69, 0.75, 0.999_999]);
        let picks: Vec<usize> = (0..6).map(|_| transition.sample(&mut source)).collect();
        assert_eq!(picks, vec![7, 7, 8, 8, 9, 9]);
    }
}
