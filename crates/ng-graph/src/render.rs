//! Diagnostic rendering: node-index legend plus adjacency matrix.

use std::fmt;

use crate::directed::DirectedGraph;
use crate::topology::NodeKey;
use crate::undirected::Graph;

impl<T: NodeKey + fmt::Display> fmt::Display for DirectedGraph<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let nodes: Vec<&T> = self.adjacency.keys().collect();
        let width = self.num_nodes().to_string().len();

        write!(f, "symbols:")?;
        for (i, node) in nodes.iter().enumerate() {
            write!(f, " {i}={node}")?;
        }
        writeln!(f)?;

        write!(f, "{:width$}", "")?;
        for i in 0..nodes.len() {
            write!(f, " {i:^width$}")?;
        }
        writeln!(f)?;

        for (i, source) in nodes.iter().enumerate() {
            write!(f, "{i:^width$}")?;
            for (j, target) in nodes.iter().enumerate() {
                let cell = if i == j {
                    "N"
                } else if self.adjacency[*source].contains(*target) {
                    "1"
                } else {
                    "0"
                };
                write!(f, " {cell:^width$}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<T: NodeKey + fmt::Display> fmt::Display for Graph<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.directed.fmt(f)
    }
}
