//! Node extents, hit testing and edge clipping in canvas coordinates.

use obdd_core::{Node, NodeId, ObddGraph, Position};

/// Radius of a decision node circle.
pub const DECISION_RADIUS: f32 = 25.0;

/// Half the side of a terminal square.
pub const TERMINAL_HALF_SIZE: f32 = 20.0;

/// Vertical distance between a selected node and a node added above it.
pub const NEW_NODE_SPACING: f32 = 80.0;

/// Gap between the root node's top edge and its indicator.
pub const ROOT_INDICATOR_GAP: f32 = 12.0;

/// Whether a point lies inside the drawn extent of a node.
pub fn contains(node: &Node, point: Position) -> bool {
    let center = node.position;
    if node.is_terminal() {
        (point.x - center.x).abs() <= TERMINAL_HALF_SIZE
            && (point.y - center.y).abs() <= TERMINAL_HALF_SIZE
    } else {
        center.distance(point) <= DECISION_RADIUS
    }
}

/// Topmost node under a point. Nodes are drawn in id order, so the last hit wins.
pub fn node_at(graph: &ObddGraph, point: Position) -> Option<NodeId> {
    graph
        .nodes()
        .filter(|node| contains(node, point))
        .last()
        .map(Node::id)
}

/// Point on the node outline in the direction of `toward`.
pub fn border_point(node: &Node, toward: Position) -> Position {
    let center = node.position;
    let (dx, dy) = (toward.x - center.x, toward.y - center.y);
    let length = (dx * dx + dy * dy).sqrt();
    if length <= f32::EPSILON {
        return center;
    }
    let (ux, uy) = (dx / length, dy / length);

    let reach = if node.is_terminal() {
        TERMINAL_HALF_SIZE / ux.abs().max(uy.abs())
    } else {
        DECISION_RADIUS
    };
    center.offset(ux * reach, uy * reach)
}

/// Clipped endpoints for an edge, or `None` when the nodes overlap.
///
/// A self loop leaves from the right of the node and re-enters at the top.
pub fn edge_endpoints(from: &Node, to: &Node) -> Option<(Position, Position)> {
    if from.id() == to.id() {
        let center = from.position;
        let start = border_point(from, center.offset(1.0, 0.0));
        let end = border_point(from, center.offset(0.0, -1.0));
        return Some((start, end));
    }

    if from.position.distance(to.position) <= extent(from) + extent(to) {
        return None;
    }
    Some((
        border_point(from, to.position),
        border_point(to, from.position),
    ))
}

/// Where the root marker is drawn.
pub fn root_anchor(node: &Node) -> Position {
    node.position.offset(0.0, -(extent(node) + ROOT_INDICATOR_GAP))
}

fn extent(node: &Node) -> f32 {
    if node.is_terminal() {
        TERMINAL_HALF_SIZE
    } else {
        DECISION_RADIUS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use obdd_core::DEFAULT_DECISION_POSITION;

    #[test]
    fn test_hit_circle_and_square() {
        let mut graph = ObddGraph::new();
        let p = graph.add_decision_node();
        let zero = graph.terminal(false);

        assert_eq!(node_at(&graph, DEFAULT_DECISION_POSITION.offset(24.0, 0.0)), Some(p));
        assert_eq!(node_at(&graph, DEFAULT_DECISION_POSITION.offset(20.0, 20.0)), None);

        let corner = graph.node(zero).unwrap().position.offset(19.0, -19.0);
        assert_eq!(node_at(&graph, corner), Some(zero));
        assert_eq!(node_at(&graph, Position::new(5.0, 5.0)), None);
    }

    #[test]
    fn test_topmost_node_wins() {
        let mut graph = ObddGraph::new();
        let _below = graph.add_decision_node();
        let above = graph.add_decision_node();
        assert_eq!(node_at(&graph, DEFAULT_DECISION_POSITION), Some(above));
    }

    #[test]
    fn test_border_points() {
        let mut graph = ObddGraph::new();
        let p = graph.add_decision_node_at(Position::new(100.0, 100.0));
        let node = graph.node(p).unwrap();
        assert_eq!(border_point(node, Position::new(200.0, 100.0)), Position::new(125.0, 100.0));

        let one = graph.node(graph.terminal(true)).unwrap();
        let up = border_point(one, one.position.offset(0.0, -100.0));
        assert_eq!(up, one.position.offset(0.0, -TERMINAL_HALF_SIZE));
    }

    #[test]
    fn test_overlapping_nodes_have_no_edge_segment() {
        let mut graph = ObddGraph::new();
        let p = graph.add_decision_node();
        let q = graph.add_decision_node_at(DEFAULT_DECISION_POSITION.offset(10.0, 0.0));
        let (p, q) = (graph.node(p).unwrap(), graph.node(q).unwrap());
        assert!(edge_endpoints(p, q).is_none());
    }
}
