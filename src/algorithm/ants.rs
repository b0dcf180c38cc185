use hashbrown::HashSet;
use crate::network::{Graph, Path};
use crate::utils::error::Result;
use super::base::pheromone::{PheromoneTable, Visibility};
use super::base::random::RandomSource;
use super::base::transition::TransitionRule;


/// Where a single ant stopped.
#[derive(Clone, Debug, PartialEq)]
pub enum Walk {
    Arrived(Path),
    DeadEnd(Path),
}

impl Walk {
    /// The path if it reached the destination with at least one edge.
    pub fn contributing(self) -> Option<Path> {
        match self {
            Walk::Arrived(path) if path.len() >= 2 => Some(path),
            _ => None,
        }
    }
}

/// Read-only view of the colony an ant walks through. Every ant of one
/// iteration shares the same pheromone snapshot.
pub struct Ant<'a> {
    graph: &'a Graph,
    pheromone: &'a PheromoneTable,
    visibility: &'a Visibility,
    rule: TransitionRule,
}

impl<'a> Ant<'a> {
    pub fn new(graph: &'a Graph, pheromone: &'a PheromoneTable,
               visibility: &'a Visibility, rule: TransitionRule) -> Self {
        Ant { graph, pheromone, visibility, rule }
    }
    /// Walks from `origin` until `destination` is reached or no unvisited
    /// neighbor is left. Terminates within the node count of the graph.
    pub fn build_path<R>(&self, origin: usize, destination: usize, rng: &mut R) -> Result<Walk>
    where R: RandomSource + ?Sized {
        let mut path = vec![origin];
        let mut visited = HashSet::with_capacity(self.graph.node_count());
        visited.insert(origin);
        let mut current = origin;
        while current != destination {
            let transition = self.rule.probabilities(
                self.graph, self.pheromone, self.visibility, current, &visited)?;
            let transition = match transition {
                Some(transition) => transition,
                None => return Ok(Walk::DeadEnd(path)),
            };
            current = transition.sample(rng);
            visited.insert(current);
            path.push(current);
        }
        Ok(Walk::Arrived(path))
    }
}
