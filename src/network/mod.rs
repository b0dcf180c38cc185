mod topology;

pub use topology::{EdgeKey, Graph, Node};

/// Ordered node ids, starting at the origin.
pub type Path = Vec<usize>;
