//! Graph model: node identifiers, adjacency, positions and labels.
//!
//! Adjacency and labels are fixed once built; only positions change, and only
//! through `set_position` after a drag. Edges are undirected.

use super::error::{GraphError, GraphResult};
use super::NodeKey;
use crate::types::Point;
use std::collections::{HashMap, HashSet};

/// An undirected edge between two nodes, stored as given.
pub type EdgeKey = (NodeKey, NodeKey);

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GraphModel {
    nodes: Vec<NodeKey>,
    edges: Vec<EdgeKey>,
    positions: HashMap<NodeKey, Point>,
    node_labels: HashMap<NodeKey, String>,
    edge_labels: Vec<(EdgeKey, String)>,
}

impl GraphModel {
    /// Build from an edge list and a position per node.
    ///
    /// Node order is the order positions are given in, followed by any edge
    /// endpoint that has no position (which `validate` will reject). A pair
    /// repeated in either direction is kept once, as first given.
    pub fn from_edges<E, A, B, P, K>(edges: E, positions: P) -> Self
    where
        E: IntoIterator<Item = (A, B)>,
        A: Into<NodeKey>,
        B: Into<NodeKey>,
        P: IntoIterator<Item = (K, Point)>,
        K: Into<NodeKey>,
    {
        let mut model = Self::default();
        for (node, position) in positions {
            let node = node.into();
            model.add_node(node.clone());
            model.positions.insert(node, position);
        }
        let mut seen = HashSet::new();
        for (a, b) in edges {
            let (a, b): (NodeKey, NodeKey) = (a.into(), b.into());
            model.add_node(a.clone());
            model.add_node(b.clone());
            let key = if a <= b { (a.clone(), b.clone()) } else { (b.clone(), a.clone()) };
            if seen.insert(key) {
                model.edges.push((a, b));
            }
        }
        model
    }

    /// Build from a square adjacency matrix over `nodes`. Any non-zero
    /// weight is an edge; a symmetric pair yields one edge. Weights must be
    /// finite.
    pub fn from_adjacency_matrix<P, K>(
        nodes: &[NodeKey],
        matrix: &[Vec<f64>],
        positions: P,
    ) -> GraphResult<Self>
    where
        P: IntoIterator<Item = (K, Point)>,
        K: Into<NodeKey>,
    {
        if matrix.len() != nodes.len() {
            return Err(GraphError::MatrixRows {
                rows: matrix.len(),
                expected: nodes.len(),
            });
        }

        let mut edges = Vec::new();
        for (i, row) in matrix.iter().enumerate() {
            if row.len() != nodes.len() {
                return Err(GraphError::MatrixShape {
                    row: i,
                    len: row.len(),
                    expected: nodes.len(),
                });
            }
            for (j, &weight) in row.iter().enumerate() {
                if !weight.is_finite() {
                    return Err(GraphError::NonFiniteWeight { row: i, col: j });
                }
                if weight != 0.0 {
                    edges.push((nodes[i].clone(), nodes[j].clone()));
                }
            }
        }

        let mut model = Self::from_edges(edges, positions);
        for node in nodes {
            model.add_node(node.clone());
        }
        Ok(model)
    }

    pub fn with_node_labels<I, K, L>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = (K, L)>,
        K: Into<NodeKey>,
        L: Into<String>,
    {
        for (node, label) in labels {
            let node = node.into();
            self.add_node(node.clone());
            self.node_labels.insert(node, label.into());
        }
        self
    }

    pub fn with_edge_labels<I, A, B, L>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = ((A, B), L)>,
        A: Into<NodeKey>,
        B: Into<NodeKey>,
        L: Into<String>,
    {
        for ((a, b), label) in labels {
            self.edge_labels.push(((a.into(), b.into()), label.into()));
        }
        self
    }

    fn add_node(&mut self, node: NodeKey) {
        if !self.nodes.contains(&node) {
            self.nodes.push(node);
        }
    }

    /// Check that every node has a finite position and every edge label
    /// names an existing edge.
    pub fn validate(&self) -> GraphResult<()> {
        for node in &self.nodes {
            let position = self
                .positions
                .get(node)
                .ok_or_else(|| GraphError::MissingPosition { node: node.clone() })?;
            if !position.is_finite() {
                return Err(GraphError::NonFinitePosition {
                    node: node.clone(),
                    position: *position,
                });
            }
        }
        for ((a, b), _) in &self.edge_labels {
            if !self.has_edge(a, b) {
                return Err(GraphError::UnknownEdge {
                    from: a.clone(),
                    to: b.clone(),
                });
            }
        }
        Ok(())
    }

    /// Node identifiers in stable order.
    pub fn nodes(&self) -> &[NodeKey] {
        &self.nodes
    }

    pub fn edges(&self) -> &[EdgeKey] {
        &self.edges
    }

    pub fn has_edge(&self, a: &str, b: &str) -> bool {
        self.edges
            .iter()
            .any(|(x, y)| (x == a && y == b) || (x == b && y == a))
    }

    pub fn position(&self, node: &str) -> Option<Point> {
        self.positions.get(node).copied()
    }

    pub fn set_position(&mut self, node: &str, position: Point) -> GraphResult<()> {
        match self.positions.get_mut(node) {
            Some(slot) => {
                *slot = position;
                Ok(())
            }
            None => Err(GraphError::UnknownNode(node.to_string())),
        }
    }

    /// Node labels in node order.
    pub fn node_labels(&self) -> impl Iterator<Item = (&NodeKey, &str)> + '_ {
        self.nodes
            .iter()
            .filter_map(|node| self.node_labels.get(node).map(|label| (node, label.as_str())))
    }

    /// Edge labels in the order they were given.
    pub fn edge_labels(&self) -> impl Iterator<Item = (&EdgeKey, &str)> + '_ {
        self.edge_labels.iter().map(|(edge, label)| (edge, label.as_str()))
    }
}
