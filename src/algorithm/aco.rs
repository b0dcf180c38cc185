use rand::SeedableRng;
use rand_chacha::ChaChaRng;
use tracing::{debug, info, warn};
use crate::network::{Graph, Path};
use crate::utils::config::Parameters;
use crate::utils::error::{Error, Result};
use super::ants::Ant;
use super::base::pheromone::{PheromoneTable, Visibility};
use super::base::random::RandomSource;
use super::base::transition::TransitionRule;


/// Costliest path seen so far.
#[derive(Clone, Debug, PartialEq)]
pub struct BestPath {
    pub path: Path,
    pub cost: f64,
}

#[derive(Clone, Debug)]
pub struct ColonyOutcome {
    /// `None` if no ant ever reached the destination.
    pub best: Option<BestPath>,
    /// Mean cost of the arriving ants, per iteration.
    pub mean_costs: Vec<Option<f64>>,
    pub pheromone: PheromoneTable,
}

pub struct ACO {
    params: Parameters,
    rule: TransitionRule,
}

impl ACO {
    pub fn new(params: Parameters) -> Result<Self> {
        params.validate()?;
        let rule = TransitionRule::new(params.alpha, params.beta);
        Ok(ACO { params, rule })
    }
    pub fn parameters(&self) -> &Parameters {
        &self.params
    }
    pub fn run_seeded(&self, graph: &Graph, seed: u64) -> Result<ColonyOutcome> {
        let mut rng = ChaChaRng::seed_from_u64(seed);
        self.run(graph, &mut rng)
    }
    /// Searches the maximum-cost path from the origin to the destination.
    pub fn run<R>(&self, graph: &Graph, rng: &mut R) -> Result<ColonyOutcome>
    where R: RandomSource + ?Sized {
        let (origin, destination) = self.ends(graph)?;
        let params = &self.params;
        let visibility = Visibility::new(graph);
        let mut pheromone = PheromoneTable::new(graph, params.initial_pheromone);
        let mut best: Option<BestPath> = None;
        let mut mean_costs = Vec::with_capacity(params.iterations);
        info!(origin, destination, iterations = params.iterations, ants = params.ants,
              "start ant colony");

        for epoch in 0..params.iterations {
            let batch = {
                let ant = Ant::new(graph, &pheromone, &visibility, self.rule);
                self.single_epoch(&ant, graph, origin, destination, rng)?
            };

            pheromone.update(params.evaporation,
                             batch.iter().map(|(path, cost)| (path.as_slice(), *cost)))?;

            // strict comparison keeps the first one found among equals
            for (path, cost) in batch.iter() {
                if best.as_ref().map_or(true, |best| *cost > best.cost) {
                    best = Some(BestPath { path: path.clone(), cost: *cost });
                }
            }

            let mean = mean_cost(&batch);
            match mean {
                Some(mean) => debug!(epoch, mean, arrived = batch.len(), "epoch done"),
                None => warn!(epoch, "no ant reached the destination"),
            }
            mean_costs.push(mean);
        }

        match &best {
            Some(best) => info!(cost = best.cost, hops = best.path.len() - 1, "colony done"),
            None => info!("colony done, no path found"),
        }
        Ok(ColonyOutcome { best, mean_costs, pheromone })
    }
    /// Sends out one batch of ants and keeps the paths that arrived,
    /// with their costs.
    fn single_epoch<R>(&self, ant: &Ant, graph: &Graph, origin: usize, destination: usize,
                       rng: &mut R) -> Result<Vec<(Path, f64)>>
    where R: RandomSource + ?Sized {
        let mut batch = Vec::with_capacity(self.params.ants);
        for _ in 0..self.params.ants {
            let walk = ant.build_path(origin, destination, rng)?;
            if let Some(path) = walk.contributing() {
                let cost = graph.path_cost(&path)?;
                batch.push((path, cost));
            }
        }
        Ok(batch)
    }
    fn ends(&self, graph: &Graph) -> Result<(usize, usize)> {
        let origin = self.params.origin;
        let destination = match self.params.destination {
            Some(destination) => destination,
            None => graph.nodes().max().ok_or(Error::NodeNotFound(origin))?,
        };
        for &node in [origin, destination].iter() {
            if !graph.contains(node) {
                return Err(Error::NodeNotFound(node));
            }
        }
        Ok((origin, destination))
    }
}

fn mean_cost(batch: &[(Path, f64)]) -> Option<f64> {
    if batch.is_empty() {
        return None;
    }
    let sum: f64 = batch.iter().map(|(_, cost)| cost).sum();
    Some(sum / batch.len() as f64)
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
    fn params(iterations: usize, ants: usize, destination: usize) -> Parameters {
        Parameters {
            iterations,
            ants,
            destination: Some(destination),
            ..Parameters::default()
        }
    }

    #[test]
    fn it_finds_maximum_cost_path() {
        let aco = ACO::new(params(30, 10, 4)).unwrap();
        let outcome = aco.run_seeded(&slides(), 1).unwrap();
        let best = outcome.best.unwrap();
        assert_eq!(best.path, vec![1, 2, 4]);
        assert_eq!(best.cost, 8.0);
        assert_eq!(outcome.mean_costs.len(), 30);
    }
    #[test]
    fn it_tracks_best_across_scripted_walks() {
        // draws alternate between the low-cost and the high-cost branch
        let aco = ACO::new(params(2, 2, 4)).unwrap();
        let mut source = Scripted::new(vec![0.999_999_999, 0.5, 0.0, 0.5]);
        let outcome = aco.run(&slides(), &mut source).unwrap();
        let best = outcome.best.unwrap();
        assert_eq!(best.path, vec![1, 2, 4]);
        assert_eq!(best.cost, 8.0);
        assert_eq!(outcome.mean_costs, vec![Some(5.5), Some(5.5)]);
    }
    #[test]
    fn it_is_deterministic_under_seed() {
        let aco = ACO::new(params(20, 8, 4)).unwrap();
        let graph = slides();
        let first = aco.run_seeded(&graph, 99).unwrap();
        let second = aco.run_seeded(&graph, 99).unwrap();
        assert_eq!(first.best, second.best);
        assert_eq!(first.mean_costs, second.mean_costs);
    }
    #[test]
    fn it_reports_no_path_when_disconnected() {
        let graph = Graph::from_edges(vec![(1, 2, 3.0), (3, 4, 5.0)]).unwrap();
        let aco = ACO::new(params(5, 4, 4)).unwrap();
        let outcome = aco.run_seeded(&graph, 0).unwrap();
        assert!(outcome.best.is_none());
        assert!(outcome.mean_costs.iter().all(Option::is_none));
    }
    #[test]
    fn it_finds_path_over_huge_costs() {
        let graph = Graph::from_edges(vec![(1, 2, 1e40), (2, 3, 1e40)]).unwrap();
        let aco = ACO::new(params(3, 3, 3)).unwrap();
        let outcome = aco.run_seeded(&graph, 0).unwrap();
        let best = outcome.best.unwrap();
        assert_eq!(best.path, vec![1, 2, 3]);
        assert_eq!(best.cost, 2e40);
        assert!(outcome.mean_costs.iter().all(Option::is_some));
    }
    #[test]
    fn it_only_evaporates_without_arrivals() {
        let graph = Graph::from_edges(vec![(1, 2, 3.0), (3, 4, 5.0)]).unwrap();
        let mut parameters = params(6, 3, 4);
        parameters.evaporation = 0.2;
        let aco = ACO::new(parameters).unwrap();
        let outcome = aco.run_seeded(&graph, 0).unwrap();
        let expected = 0.01 * 0.8f64.powi(6);
        for (_, value) in outcome.pheromone.iter() {
            assert!((value - expected).abs() < 1e-15);
        }
    }
    #[test]
    fn it_defaults_destination_to_largest_node() {
        let mut parameters = params(5, 5, 0);
        parameters.destination = None;
        let aco = ACO::new(parameters).unwrap();
        let outcome = aco.run_seeded(&slides(), 3).unwrap();
        assert_eq!(*outcome.best.unwrap().path.last().unwrap(), 4);
    }
    #[test]
    fn it_rejects_unknown_ends() {
        let aco = ACO::new(params(5, 5, 42)).unwrap();
        assert!(matches!(aco.run_seeded(&slides(), 0), Err(Error::NodeNotFound(42))));
        let mut parameters = params(5, 5, 4);
        parameters.origin = 0;
        let aco = ACO::new(parameters).unwrap();
        assert!(matches!(aco.run_seeded(&slides(), 0), Err(Error::NodeNotFound(0))));
    }
    #[test]
    fn it_rejects_invalid_parameters() {
        let mut parameters = params(5, 5, 4);
        parameters.evaporation = -0.1;
        assert!(ACO::new(parameters).is_err());
    }
}
