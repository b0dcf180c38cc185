pub mod algorithm;
pub mod network;
pub mod utils;

pub use algorithm::{ACO, BestPath, ColonyOutcome};
pub use network::{EdgeKey, Graph, Path};
pub use utils::config::{Config, Parameters};
pub use utils::error::{Error, Result};
pub use utils::table::load_graph;
