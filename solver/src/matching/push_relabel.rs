// © 2023-2024 ETH Zurich
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// any later version.
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

use std::collections::HashMap;
use std::time;

use rs_graph::maxflow::pushrelabel;
use rs_graph::traits::Directed;
use rs_graph::Buildable;
use rs_graph::Builder;
use rs_graph::IndexGraph;
use rs_graph::LinkedListGraph;
use tracing::debug;

use super::{BipartiteGraph, Matching, MatchingSolver};
use crate::err::SolverFailure;

/// Maximum matching via a maximum flow computation:
/// source -> every left node, every right node -> sink, left -> right for every edge of the
/// bipartite graph, all with capacity 1. The flow is computed by push-relabel; a flow
/// carrying left -> right edge is a matching edge.
pub struct PushRelabelMatcher;

impl MatchingSolver for PushRelabelMatcher {
    fn maximum_matching(&self, graph: &BipartiteGraph) -> Result<Matching, SolverFailure> {
        if graph.edges().is_empty() {
            return Ok(Matching::empty());
        }
        let start_time = time::Instant::now();

        let mut builder = LinkedListGraph::<u32>::new_builder();

        let source = builder.add_node();
        let sink = builder.add_node();

        let mut left_node_to_idx = HashMap::new();
        let mut right_nodes = Vec::with_capacity(graph.right_count());

        let left_nodes: Vec<_> = (0..graph.left_count())
            .map(|l| {
                let left_node = builder.add_node();
                left_node_to_idx.insert(left_node, l);
                builder.add_edge(source, left_node);
                left_node
            })
            .collect();
        for _ in 0..graph.right_count() {
            let right_node = builder.add_node();
            builder.add_edge(right_node, sink);
            right_nodes.push(right_node);
        }
        for &(l, r) in graph.edges() {
            builder.add_edge(left_nodes[l], right_nodes[r]);
        }

        let flow_graph = builder.into_graph();

        let (value, flow, _) = pushrelabel(&flow_graph, source, sink, |_| 1);

        let mut pairs = Vec::new();
        for (r, &right_node) in right_nodes.iter().enumerate() {
            let pred_left_node = flow_graph.inedges(right_node).find_map(|(edge, node)| {
                if flow[flow_graph.edge_id(edge)].1 == 1 {
                    Some(node)
                } else {
                    None
                }
            });
            if let Some(left_node) = pred_left_node {
                let l = left_node_to_idx.get(&left_node).copied().ok_or_else(|| {
                    SolverFailure::Aborted(String::from("flow enters a right node from outside"))
                })?;
                pairs.push((l, r));
            }
        }

        debug!(
            "push-relabel: flow value {}, {} matching edges (elapsed time: {:0.2}sec)",
            value,
            pairs.len(),
            start_time.elapsed().as_secs_f32()
        );

        Ok(Matching::new(pairs))
    }
}
