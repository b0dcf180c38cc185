use hashbrown::HashSet;
use rand::Rng;
use crate::network::EdgeKey;
use super::error::{Error, Result};


const MIN_DEGREE: usize = 2;

/// Random simple graph on nodes `1..=nodes` with `arcs` edges, topped up so
/// that every node ends with at least two edges. Costs are drawn uniform in
/// `[1, 10)` and rounded to two decimals, so they land in `[1, 10]`.
pub fn generate<R: Rng>(nodes: usize, arcs: usize, rng: &mut R) -> Result<Vec<(usize, usize, f64)>> {
    if nodes < 3 {
        return Err(Error::InvalidParameter(format!("a graph needs at least 3 nodes, got {}", nodes)));
    }
    let max_connections = nodes.checked_mul(nodes - 1)
        .map(|pairs| pairs / 2)
        .ok_or_else(|| Error::InvalidParameter(format!("{} nodes are too many", nodes)))?;
    if arcs > max_connections {
        return Err(Error::InvalidParameter(format!(
            "{} arcs do not fit in a simple graph of {} nodes", arcs, nodes)));
    }
    let mut connections = HashSet::with_capacity(arcs);
    let mut degree = vec![0usize; nodes + 1];
    let mut edges = Vec::with_capacity(arcs);

    for _ in 0..arcs {
        let (origem, destino) = loop {
            let origem = rng.gen_range(1..=nodes);
            let destino = rng.gen_range(1..=nodes);
            if origem != destino && !connections.contains(&EdgeKey::new(origem, destino)) {
                break (origem, destino);
            }
        };
        connect(&mut connections, &mut degree, &mut edges, origem, destino, rng);
    }
    for node in 1..=nodes {
        while degree[node] < MIN_DEGREE {
            let destino = rng.gen_range(1..=nodes);
            if node != destino && !connections.contains(&EdgeKey::new(node, destino)) {
                connect(&mut connections, &mut degree, &mut edges, node, destino, rng);
            }
        }
    }
    Ok(edges)
}

fn connect<R: Rng>(connections: &mut HashSet<EdgeKey>, degree: &mut [usize],
                   edges: &mut Vec<(usize, usize, f64)>, origem: usize, destino: usize,
                   rng: &mut R) {
    let custo = (rng.gen_range(1.0f64..10.0) * 100.0).round() / 100.0;
    connections.insert(EdgeKey::new(origem, destino));
    degree[origem] += 1;
    degree[destino] += 1;
    edges.push((origem, destino, custo));
}
