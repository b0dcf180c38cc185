use colony_path::utils::config::{Arguments, Command, Config, USAGE};
use colony_path::utils::{generator, series, table, yaml};
use colony_path::{load_graph, Result, ACO};
use docopt::Docopt;
use itertools::Itertools;
use rand::SeedableRng;
use rand_chacha::ChaChaRng;
use std::fs::File;
use std::process;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

fn main() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args: Arguments = Docopt::new(USAGE)
        .and_then(|d| d.deserialize())
        .unwrap_or_else(|e| e.exit());

    let result = match args.command() {
        Some(Command::Run) => run(&args),
        Some(Command::Generate) => generate(&args),
        None => Ok(()),
    };
    if let Err(err) = result {
        eprintln!("error: {}", err);
        process::exit(1);
    }
}

fn run(args: &Arguments) -> Result<()> {
    let mut config = match &args.flag_config {
        Some(path) => yaml::load_config(path)?,
        None => Config::default(),
    };
    config.override_from_args(args);

    let graph_path = args.arg_graph.as_deref().unwrap_or_default();
    let graph = load_graph(graph_path)?;
    let aco = ACO::new(config.parameters.clone())?;

    let start = Instant::now();
    let outcome = aco.run_seeded(&graph, config.seed)?;
    let elapsed = start.elapsed().as_micros();

    println!("configuration: {}", config.name);
    match &outcome.best {
        Some(best) => {
            println!("worst path found: {}", best.path.iter().join(" -> "));
            println!("cost of the worst path: {:.2}", best.cost);
        }
        None => println!("no path found"),
    }
    println!("--- computing time: {} μs ---", elapsed);

    if let Some(path) = &args.flag_series {
        let file = File::create(path)?;
        series::write_series(file, &outcome.mean_costs, config.parameters.window)?;
    }
    Ok(())
}

fn generate(args: &Arguments) -> Result<()> {
    let mut rng = ChaChaRng::seed_from_u64(args.flag_seed.unwrap_or(0));
    let edges = generator::generate(args.flag_nodes, args.flag_arcs, &mut rng)?;
    let output = args.arg_output.as_deref().unwrap_or_default();
    table::write_graph(File::create(output)?, &edges)?;
    println!("{} edges over {} nodes written to {}", edges.len(), args.flag_nodes, output);
    Ok(())
}
