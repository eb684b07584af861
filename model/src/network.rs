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

use std::fmt;
use std::iter::Iterator;

use tracing::debug;

use crate::base_types::NodeIdx;
use crate::compatibility::CompatibilityGraph;
use crate::trips::TripSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeKind {
    /// depot -> trip, a vehicle enters service.
    PullOut,
    /// trip -> depot, a vehicle leaves service.
    PullIn,
    /// trip -> trip of the opposite direction.
    Connection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NetworkEdge {
    kind: EdgeKind,
    from: NodeIdx,
    to: NodeIdx,
}

impl NetworkEdge {
    pub fn kind(&self) -> EdgeKind {
        self.kind
    }

    pub fn from(&self) -> NodeIdx {
        self.from
    }

    pub fn to(&self) -> NodeIdx {
        self.to
    }
}

impl fmt::Display for NetworkEdge {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.kind {
            EdgeKind::Connection => write!(f, "{} --> {}", self.from, self.to),
            _ => write!(f, "{} -.- {}", self.from, self.to),
        }
    }
}

/// The time-space network: a single depot, all trips, pull-out and pull-in edges for every
/// trip and the compatibility edges between trips.
///
/// Every trip is connected to the depot in both ways, regardless of its compatibility
/// edges, so that each trip can always be covered by a vehicle of its own.
pub struct TimeSpaceNetwork {
    trips: TripSet,
    compatibility: CompatibilityGraph,
    edges: Vec<NetworkEdge>,
}

// static functions
impl TimeSpaceNetwork {
    pub fn new(trips: TripSet) -> TimeSpaceNetwork {
        let compatibility = CompatibilityGraph::build(&trips);

        let pull_outs = trips.all_trips().map(|trip| NetworkEdge {
            kind: EdgeKind::PullOut,
            from: NodeIdx::Depot,
            to: NodeIdx::Trip(trip.idx()),
        });
        let pull_ins = trips.all_trips().map(|trip| NetworkEdge {
            kind: EdgeKind::PullIn,
            from: NodeIdx::Trip(trip.idx()),
            to: NodeIdx::Depot,
        });
        let connections = compatibility.edges().iter().map(|edge| NetworkEdge {
            kind: EdgeKind::Connection,
            from: NodeIdx::Trip(edge.from()),
            to: NodeIdx::Trip(edge.to()),
        });
        let edges: Vec<NetworkEdge> = pull_outs.chain(pull_ins).chain(connections).collect();

        debug!(
            "time-space network built: {} trips, {} nodes, {} edges ({} connections)",
            trips.len(),
            trips.len() + 1,
            edges.len(),
            compatibility.number_of_edges()
        );

        TimeSpaceNetwork {
            trips,
            compatibility,
            edges,
        }
    }
}

// methods
impl TimeSpaceNetwork {
    pub fn trips(&self) -> &TripSet {
        &self.trips
    }

    pub fn compatibility(&self) -> &CompatibilityGraph {
        &self.compatibility
    }

    /// the depot first, then all trips (outbound before inbound).
    pub fn nodes(&self) -> impl Iterator<Item = NodeIdx> + '_ {
        std::iter::once(NodeIdx::Depot).chain(self.trips.all_trips().map(|t| NodeIdx::Trip(t.idx())))
    }

    /// pull-out edges, then pull-in edges, then connections.
    pub fn edges(&self) -> &[NetworkEdge] {
        &self.edges
    }

    pub fn number_of_nodes(&self) -> usize {
        self.trips.len() + 1
    }

    pub fn number_of_trips(&self) -> usize {
        self.trips.len()
    }

    /// true iff the network contains an edge from node1 to node2.
    pub fn can_reach(&self, node1: NodeIdx, node2: NodeIdx) -> bool {
        match (node1, node2) {
            (NodeIdx::Depot, NodeIdx::Depot) => false,
            (NodeIdx::Depot, NodeIdx::Trip(trip)) | (NodeIdx::Trip(trip), NodeIdx::Depot) => {
                self.trips.contains(trip)
            }
            (NodeIdx::Trip(from), NodeIdx::Trip(to)) => self.compatibility.contains(from, to),
        }
    }
}
