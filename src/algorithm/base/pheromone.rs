use hashbrown::HashMap;
use itertools::Itertools;
use crate::network::{EdgeKey, Graph};
use crate::utils::error::{Error, Result};


/// Pheromone intensity for every edge of a graph.
#[derive(Clone, Debug)]
pub struct PheromoneTable {
    trails: HashMap<EdgeKey, f64>,
}

impl PheromoneTable {
    pub fn new(graph: &Graph, tao0: f64) -> Self {
        debug_assert!(tao0 >= 0.0);
        let trails = graph.edges()
            .map(|(key, _)| (key, tao0))
            .collect();
        PheromoneTable { trails }
    }
    pub fn len(&self) -> usize {
        self.trails.len()
    }
    pub fn is_empty(&self) -> bool {
        self.trails.is_empty()
    }
    pub fn intensity(&self, a: usize, b: usize) -> Result<f64> {
        self.trails.get(&EdgeKey::new(a, b))
            .cloned()
            .ok_or(Error::EdgeNotFound(a, b))
    }
    pub fn iter(&self) -> impl Iterator<Item=(EdgeKey, f64)> + '_ {
        self.trails.iter().map(|(&key, &value)| (key, value))
    }
    /// Decays every trail by `rho`, used or not.
    pub fn evaporate(&mut self, rho: f64) {
        debug_assert!((0.0..=1.0).contains(&rho));
        for pheromone in self.trails.values_mut() {
            *pheromone *= 1.0 - rho;
        }
    }
    /// Adds `cost` onto every edge walked by `path`.
    pub fn deposit(&mut self, path: &[usize], cost: f64) -> Result<()> {
        debug_assert!(cost.is_sign_positive());
        for (&a, &b) in path.iter().tuple_windows() {
            let pheromone = self.trails.get_mut(&EdgeKey::new(a, b))
                .ok_or(Error::EdgeNotFound(a, b))?;
            *pheromone += cost;
        }
        Ok(())
    }
    /// Offline update after a whole batch: one evaporation, then one
    /// deposit per contributing path.
    pub fn update<'a, I>(&mut self, rho: f64, batch: I) -> Result<()>
    where I: IntoIterator<Item=(&'a [usize], f64)> {
        self.evaporate(rho);
        for (path, cost) in batch {
            self.deposit(path, cost)?;
        }
        Ok(())
    }
}


/// Static desirability of each edge. Equal to the edge cost, so that
/// costlier edges attract more ants.
#[derive(Clone, Debug)]
pub struct Visibility {
    desirability: HashMap<EdgeKey, f64>,
}

impl Visibility {
    pub fn new(graph: &Graph) -> Self {
        let desirability = graph.edges().collect();
        Visibility { desirability }
    }
    pub fn of(&self, a: usize, b: usize) -> Result<f64> {
        self.desirability.get(&EdgeKey::new(a, b))
            .cloned()
            .ok_or(Error::EdgeNotFound(a, b))
    }
}
