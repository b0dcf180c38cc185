pub mod pheromone;
pub mod random;
pub mod transition;
