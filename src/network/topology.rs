use std::fmt;
use hashbrown::HashMap;
use itertools::Itertools;
use crate::utils::error::{Error, Result};


/// Unordered node pair, stored as (min, max).
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub struct EdgeKey(usize, usize);

impl EdgeKey {
    pub fn new(a: usize, b: usize) -> Self {
        if a <= b { EdgeKey(a, b) } else { EdgeKey(b, a) }
    }
    pub fn ends(self) -> (usize, usize) {
        (self.0, self.1)
    }
}

impl From<(usize, usize)> for EdgeKey {
    fn from(ends: (usize, usize)) -> Self {
        EdgeKey::new(ends.0, ends.1)
    }
}

impl fmt::Display for EdgeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.0, self.1)
    }
}

#[derive(Clone, Debug)]
pub struct Node {
    id: usize,
    neighbors: Vec<usize>,
}

impl Node {
    pub fn new(id: usize) -> Self {
        Self { id, neighbors: vec![] }
    }
    pub fn id(&self) -> usize {
        self.id
    }
}

/// Undirected weighted graph. Immutable once built.
#[derive(Clone, Debug, Default)]
pub struct Graph {
    nodes: Vec<Node>,
    index: HashMap<usize, usize>,
    edges: Vec<EdgeKey>,
    costs: HashMap<EdgeKey, f64>,
}

impl Graph {
    /// Builds the graph from `(origin, destination, cost)` triples.
    ///
    /// Costs must be finite and strictly positive, and self-loops are
    /// rejected. A pair listed twice keeps the cost of its last listing.
    pub fn from_edges<I>(edges: I) -> Result<Self>
    where I: IntoIterator<Item=(usize, usize, f64)> {
        let mut graph = Graph::default();
        for (nth, (end0, end1, cost)) in edges.into_iter().enumerate() {
            let record = nth + 1;
            if end0 == end1 {
                return Err(Error::malformed(record, format!("self-loop on node {}", end0)));
            }
            if !cost.is_finite() || cost <= 0.0 {
                return Err(Error::malformed(record, format!("cost {} is not positive", cost)));
            }
            graph.add_edge(end0, end1, cost);
        }
        if graph.edges.is_empty() {
            return Err(Error::malformed(0, "edge list is empty"));
        }
        Ok(graph)
    }
    fn add_node(&mut self, id: usize) -> usize {
        let nodes = &mut self.nodes;
        *self.index.entry(id).or_insert_with(|| {
            nodes.push(Node::new(id));
            nodes.len() - 1
        })
    }
    fn add_edge(&mut self, end0: usize, end1: usize, cost: f64) {
        let key = EdgeKey::new(end0, end1);
        if self.costs.insert(key, cost).is_some() {
            return;
        }
        self.edges.push(key);
        let ix0 = self.add_node(end0);
        let ix1 = self.add_node(end1);
        self.nodes[ix0].neighbors.push(end1);
        self.nodes[ix1].neighbors.push(end0);
    }
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
    pub fn contains(&self, node: usize) -> bool {
        self.index.contains_key(&node)
    }
    pub fn nodes(&self) -> impl Iterator<Item=usize> + '_ {
        self.nodes.iter().map(Node::id)
    }
    /// Adjacent node ids in insertion order; empty for an unknown node.
    pub fn neighbors(&self, node: usize) -> impl Iterator<Item=usize> + '_ {
        self.index.get(&node)
            .into_iter()
            .flat_map(move |&ix| self.nodes[ix].neighbors.iter().cloned())
    }
    pub fn edge_cost(&self, a: usize, b: usize) -> Result<f64> {
        self.costs.get(&EdgeKey::new(a, b))
            .cloned()
            .ok_or(Error::EdgeNotFound(a, b))
    }
    /// Edges with their costs, in the order they were first listed.
    pub fn edges(&self) -> impl Iterator<Item=(EdgeKey, f64)> + '_ {
        self.edges.iter().map(move |key| (*key, self.costs[key]))
    }
    /// Sum of edge costs along consecutive nodes. Only meaningful for
    /// paths of two or more nodes.
    pub fn path_cost(&self, path: &[usize]) -> Result<f64> {
        debug_assert!(path.len() >= 2);
        path.iter()
            .tuple_windows()
            .map(|(&a, &b)| self.edge_cost(a, b))
            .sum()
    }
}
