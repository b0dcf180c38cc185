mod base;
mod aco;
mod ants;

pub use aco::{ACO, BestPath, ColonyOutcome};
pub use ants::{Ant, Walk};
pub use base::pheromone::{PheromoneTable, Visibility};
pub use base::random::RandomSource;
pub use base::transition::{Transition, TransitionRule};
