use serde::Deserialize;
use crate::utils::error::{Error, Result};


pub const USAGE: &str = "
Search the maximum-cost path of a weighted graph with an ant colony.

Usage:
  colony-path run <graph> [options]
  colony-path generate <output> [--nodes=<n>] [--arcs=<n>] [--seed=<n>]
  colony-path (-h | --help)

Options:
  -h --help             Show this screen.
  -c --config=<file>    Path to configuration file.
  -o --origin=<n>       Override the origin node.
  -d --dest=<n>         Override the destination node.
  -i --iterations=<n>   Override the number of iterations.
  -a --ants=<n>         Override the number of ants per iteration.
  -e --evaporation=<r>  Override the evaporation rate.
  -s --seed=<n>         Override the random seed.
  --series=<file>       Write the per-iteration mean cost as CSV.
  --nodes=<n>           Node count of a generated graph [default: 10].
  --arcs=<n>            Arc count of a generated graph [default: 30].
";

/// Command-line arguments, deserialized by docopt from `USAGE`.
#[derive(Deserialize, Debug)]
pub struct Arguments {
    pub cmd_run: bool,
    pub cmd_generate: bool,
    pub arg_graph: Option<String>,
    pub arg_output: Option<String>,
    pub flag_config: Option<String>,
    pub flag_origin: Option<usize>,
    pub flag_dest: Option<usize>,
    pub flag_iterations: Option<usize>,
    pub flag_ants: Option<usize>,
    pub flag_evaporation: Option<f64>,
    pub flag_seed: Option<u64>,
    pub flag_series: Option<String>,
    pub flag_nodes: usize,
    pub flag_arcs: usize,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    Run,
    Generate,
}

impl Arguments {
    pub fn command(&self) -> Option<Command> {
        if self.cmd_run {
            Some(Command::Run)
        } else if self.cmd_generate {
            Some(Command::Generate)
        } else {
            None
        }
    }
}

#[derive(Deserialize, Clone, Debug)]
#[serde(default)]
pub struct Config {
    pub name: String,
    pub seed: u64,
    pub parameters: Parameters,
}

#[derive(Deserialize, Clone, Debug)]
#[serde(default)]
pub struct Parameters {
    pub initial_pheromone: f64,
    pub evaporation: f64,
    pub iterations: usize,
    pub ants: usize,
    pub alpha: f64,
    pub beta: f64,
    pub origin: usize,
    /// Falls back to the largest node id of the graph.
    pub destination: Option<usize>,
    /// Moving-average window for the convergence series.
    pub window: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            name: String::from("default"),
            seed: 0,
            parameters: Parameters::default(),
        }
    }
}

impl Default for Parameters {
    fn default() -> Self {
        Parameters {
            initial_pheromone: 0.01,
            evaporation: 0.07,
            iterations: 500,
            ants: 40,
            alpha: 1.0,
            beta: 8.0,
            origin: 1,
            destination: None,
            window: 10,
        }
    }
}

impl Config {
    pub fn override_from_args(&mut self, args: &Arguments) {
        let parameters = &mut self.parameters;
        if let Some(origin) = args.flag_origin {
            parameters.origin = origin;
        }
        if let Some(destination) = args.flag_dest {
            parameters.destination = Some(destination);
        }
        if let Some(iterations) = args.flag_iterations {
            parameters.iterations = iterations;
        }
        if let Some(ants) = args.flag_ants {
            parameters.ants = ants;
        }
        if let Some(evaporation) = args.flag_evaporation {
            parameters.evaporation = num::clamp(evaporation, 0.0, 1.0);
        }
        if let Some(seed) = args.flag_seed {
            self.seed = seed;
        }
    }
}

impl Parameters {
    pub fn validate(&self) -> Result<()> {
        if !self.initial_pheromone.is_finite() || self.initial_pheromone < 0.0 {
            return Err(invalid(format!("initial pheromone {} must be finite and non-negative",
                                       self.initial_pheromone)));
        }
        if !(0.0..=1.0).contains(&self.evaporation) {
            return Err(invalid(format!("evaporation rate {} must lie in [0, 1]", self.evaporation)));
        }
        if self.iterations == 0 || self.ants == 0 {
            return Err(invalid("iterations and ants must both be positive"));
        }
        if !self.alpha.is_finite() || !self.beta.is_finite() {
            return Err(invalid("alpha and beta must be finite"));
        }
        Ok(())
    }
}

fn invalid(reason: impl Into<String>) -> Error {
    Error::InvalidParameter(reason.into())
}
