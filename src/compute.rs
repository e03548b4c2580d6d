use crate::graph::{Node, PotionGraph};
use graphviz_rust::cmd::{CommandArg, Format};
use petgraph::visit::{EdgeRef, IntoEdgeReferences, IntoNodeReferences, NodeIndexable, NodeRef};
use std::{collections::HashMap, fmt::Write, path::Path};

static INDENT: &str = "    ";

pub fn render(graph: &PotionGraph) -> Result<String, Box<dyn std::error::Error>> {
    let g = &graph.graph;
    let mut f = String::new();
    writeln!(f, "digraph {{")?;
    for node in g.node_references() {
        writeln!(
            f,
            "{INDENT}{} [label = \"{}\"]",
            g.to_index(node.id()),
            node.weight()
        )?;
    }
    for edge in g.edge_references() {
        writeln!(
            f,
            "{INDENT}{} -> {} [label = \"{}\"]",
            g.to_index(edge.source()),
            g.to_index(edge.target()),
            edge.weight()
        )?;
    }
    writeln!(f, "}}")?;
    Ok(f)
}

pub fn render_svg(graph: &PotionGraph, out: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let dot = render(graph)?;
    graphviz_rust::exec_dot(
        dot,
        vec![
            Format::Svg.into(),
            CommandArg::Output(out.display().to_string()),
        ],
    )?;
    Ok(())
}

pub fn total(graph: &PotionGraph) -> HashMap<&'static str, u32> {
    let mut total = HashMap::new();
    for node in graph.graph.node_weights() {
        if let Node::Requirement(requirement) = node {
            *total.entry(requirement.kind.label()).or_insert(0) += requirement.quantity;
        }
    }
    total
}
