//! Writing explored graphs out for other tools.
//!
//! Two formats:
//! - text: one line per node, then one line per edge, for reading by eye
//! - JSON: `{"nodes": [...], "links": [...]}`, the shape force-directed
//!   layout libraries such as d3 consume. Ids are hex strings because 54-bit
//!   values do not survive a trip through a JavaScript number.

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::error::Result;
use crate::explorer::Graph;

#[derive(Serialize)]
struct JsonGraph {
    nodes: Vec<JsonNode>,
    links: Vec<JsonLink>,
}

#[derive(Serialize)]
struct JsonNode {
    id: String,
    mirrored: bool,
}

#[derive(Serialize)]
struct JsonLink {
    source: String,
    target: String,
    label: char,
}

impl From<&Graph> for JsonGraph {
    fn from(graph: &Graph) -> Self {
        Self {
            nodes: graph
                .nodes
                .iter()
                .map(|node| JsonNode {
                    id: node.id.to_string(),
                    mirrored: node.is_mirrored(),
                })
                .collect(),
            links: graph
                .edges
                .iter()
                .map(|edge| JsonLink {
                    source: edge.source.to_string(),
                    target: edge.target.to_string(),
                    label: edge.face.label(),
                })
                .collect(),
        }
    }
}

/// Formats a graph as human-readable text.
pub fn format_graph(graph: &Graph) -> String {
    let header = format!("{} nodes, {} edges", graph.nodes.len(), graph.edges.len());
    let nodes = graph.nodes.iter().map(|node| {
        let suffix = if node.is_mirrored() { " (mirrored)" } else { "" };
        format!("node {}{suffix}", node.id)
    });
    let edges = graph.edges.iter().map(|edge| {
        format!(
            "{} --{}--> {}",
            edge.source,
            edge.face.label().to_ascii_uppercase(),
            edge.target
        )
    });

    std::iter::once(header)
        .chain(nodes)
        .chain(edges)
        .map(|line| line + "\n")
        .collect()
}

/// Encodes a graph as pretty-printed JSON.
pub fn to_json(graph: &Graph) -> Result<String> {
    Ok(serde_json::to_string_pretty(&JsonGraph::from(graph))?)
}

/// Saves a graph to `path`: JSON for a `.json` extension, text otherwise.
pub fn save(graph: &Graph, path: &Path) -> Result<()> {
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let contents = if is_json {
        to_json(graph)?
    } else {
        format_graph(graph)
    };
    fs::write(path, contents)?;
    Ok(())
}
