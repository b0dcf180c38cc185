use std::fs;
use std::io;
use csv::{ReaderBuilder, Trim, WriterBuilder};
use serde::{Deserialize, Serialize};
use tracing::info;
use crate::network::Graph;
use super::error::{Error, Result};


#[derive(Serialize, Deserialize)]
struct EdgeRecord {
    #[serde(alias = "origin")]
    origem: usize,
    #[serde(alias = "destination")]
    destino: usize,
    #[serde(alias = "cost")]
    custo: f64,
}

pub fn load_graph(path: &str) -> Result<Graph> {
    let text = fs::read_to_string(path)?;
    let header = text.lines().next().unwrap_or("");
    let graph = read_graph(text.as_bytes(), detect_delimiter(header))?;
    info!(path, nodes = graph.node_count(), edges = graph.edge_count(), "graph loaded");
    Ok(graph)
}

/// Tab if the header holds one, comma otherwise.
pub fn detect_delimiter(header: &str) -> u8 {
    if header.contains('\t') { b'\t' } else { b',' }
}

pub fn read_graph<R: io::Read>(reader: R, delimiter: u8) -> Result<Graph> {
    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .trim(Trim::All)
        .from_reader(reader);
    let mut edges = vec![];
    for (nth, record) in reader.deserialize::<EdgeRecord>().enumerate() {
        let record = match record {
            Ok(record) => record,
            Err(err) if err.is_io_error() => return Err(err.into()),
            Err(err) => return Err(Error::malformed(nth + 1, err.to_string())),
        };
        edges.push((record.origem, record.destino, record.custo));
    }
    Graph::from_edges(edges)
}

pub fn write_graph<W: io::Write>(writer: W, edges: &[(usize, usize, f64)]) -> Result<()> {
    let mut writer = WriterBuilder::new().from_writer(writer);
    for &(origem, destino, custo) in edges {
        writer.serialize(EdgeRecord { origem, destino, custo })?;
    }
    writer.flush()?;
    Ok(())
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_reads_tab_separated_edges() {
        let data = "origem\tdestino\tcusto \n1\t2\t3\n2\t4\t5\n1\t3\t1\n3\t4\t2\n";
        let graph = read_graph(data.as_bytes(), detect_delimiter(data)).unwrap();
        assert_eq!(graph.edge_count(), 4);
        assert_eq!(graph.edge_cost(2, 1).unwrap(), 3.0);
    }
    #[test]
    fn it_accepts_english_headers_with_commas() {
        let data = "origin, destination, cost\n1, 2, 2.5\n";
        assert_eq!(detect_delimiter(data), b',');
        let graph = read_graph(data.as_bytes(), b',').unwrap();
        assert_eq!(graph.edge_cost(1, 2).unwrap(), 2.5);
    }
    #[test]
    fn it_rejects_missing_column() {
        let data = "origem,destino\n1,2\n";
        let result = read_graph(data.as_bytes(), b',');
        assert!(matches!(result, Err(Error::MalformedInput { record: 1, .. })));
    }
    #[test]
    fn it_rejects_unparsable_cost() {
        let data = "origem,destino,custo\n1,2,3\n2,3,heavy\n";
        let result = read_graph(data.as_bytes(), b',');
        assert!(matches!(result, Err(Error::MalformedInput { record: 2, .. })));
    }
    #[test]
    fn it_rejects_non_positive_cost() {
        let data = "origem,destino,custo\n1,2,0\n";
        let result = read_graph(data.as_bytes(), b',');
        assert!(matches!(result, Err(Error::MalformedInput { record: 1, .. })));
    }
    #[test]
    fn it_writes_readable_edges() {
        let edges = vec![(1, 2, 3.25), (2, 3, 7.0)];
        let mut buffer = vec![];
        write_graph(&mut buffer, &edges).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.starts_with("origem,destino,custo\n"));
        let graph = read_graph(text.as_bytes(), b',').unwrap();
        assert_eq!(graph.edge_cost(3, 2).unwrap(), 7.0);
    }
}
