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
use std::fmt;

use rayon::prelude::*;

use crate::base_types::{Direction, TripIdx};
use crate::trips::{Trip, TripSet};

/// returns true iff a vehicle finishing `from` can still depart on `to`.
/// Only trips of opposite directions can be chained and simultaneous times do not suffice.
pub fn is_compatible(from: &Trip, to: &Trip) -> bool {
    from.direction() != to.direction() && from.arrival() < to.embark()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CompatibilityEdge {
    from: TripIdx,
    to: TripIdx,
}

impl CompatibilityEdge {
    pub fn new(from: TripIdx, to: TripIdx) -> CompatibilityEdge {
        CompatibilityEdge { from, to }
    }

    pub fn from(&self) -> TripIdx {
        self.from
    }

    pub fn to(&self) -> TripIdx {
        self.to
    }
}

impl fmt::Display for CompatibilityEdge {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} --> {}", self.from, self.to)
    }
}

/// All compatibility edges of a trip set. As arrival never lies before embark and the
/// comparison is strict, the graph is acyclic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompatibilityGraph {
    edges: Vec<CompatibilityEdge>,
    successors: HashMap<TripIdx, Vec<TripIdx>>,
    predecessors: HashMap<TripIdx, Vec<TripIdx>>,
}

// static functions
impl CompatibilityGraph {
    /// Compares every trip with every trip of the opposite direction. The edges are ordered
    /// by predecessor (outbound first) and then by successor.
    pub fn build(trips: &TripSet) -> CompatibilityGraph {
        let edges: Vec<CompatibilityEdge> = Direction::ALL
            .iter()
            .flat_map(|&direction| {
                let candidates = trips.trips_of(direction.opposite());
                trips
                    .trips_of(direction)
                    .par_iter()
                    .flat_map_iter(move |from| {
                        candidates
                            .iter()
                            .filter(move |to| is_compatible(from, to))
                            .map(move |to| CompatibilityEdge::new(from.idx(), to.idx()))
                    })
                    .collect::<Vec<_>>()
            })
            .collect();
        CompatibilityGraph::from_edges(edges)
    }

    fn from_edges(edges: Vec<CompatibilityEdge>) -> CompatibilityGraph {
        let mut successors: HashMap<TripIdx, Vec<TripIdx>> = HashMap::new();
        let mut predecessors: HashMap<TripIdx, Vec<TripIdx>> = HashMap::new();
        for edge in edges.iter() {
            successors.entry(edge.from).or_default().push(edge.to);
            predecessors.entry(edge.to).or_default().push(edge.from);
        }
        CompatibilityGraph {
            edges,
            successors,
            predecessors,
        }
    }
}

// methods
impl CompatibilityGraph {
    pub fn edges(&self) -> &[CompatibilityEdge] {
        &self.edges
    }

    pub fn number_of_edges(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn successors(&self, trip: TripIdx) -> impl Iterator<Item = TripIdx> + '_ {
        self.successors.get(&trip).into_iter().flatten().copied()
    }

    pub fn predecessors(&self, trip: TripIdx) -> impl Iterator<Item = TripIdx> + '_ {
        self.predecessors.get(&trip).into_iter().flatten().copied()
    }

    pub fn contains(&self, from: TripIdx, to: TripIdx) -> bool {
        self.successors(from).any(|succ| succ == to)
    }
}

#[cfg(test)]
mod tests;
