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


use std::sync::Arc;
use std::time;

use model::base_types::VehicleCount;
use model::network::TimeSpaceNetwork;
use solution::{FleetAssignment, VehicleChain, VehicleId};
use tracing::{debug, info};

use crate::err::SolverFailure;
use crate::matching::{BipartiteGraph, MatchingSolver};

/// Minimum fleet size as a minimum path cover of the compatibility graph.
///
/// For each trip we create two nodes, one on the left ("trip as predecessor") and one on
/// the right ("trip as successor"). If trip A can be followed by trip B, we add an edge from
/// the left node of A to the right node of B.
///
/// A matching edge means that the two trips are served in succession by the same vehicle.
/// As each matching edge saves one vehicle, a maximum matching corresponds to a schedule
/// with a minimum number of vehicles: number of trips - size of the matching.
pub struct FleetSizingModel {
    network: Arc<TimeSpaceNetwork>,
}

impl FleetSizingModel {
    pub fn new(network: Arc<TimeSpaceNetwork>) -> Self {
        Self { network }
    }

    pub fn network(&self) -> &TimeSpaceNetwork {
        &self.network
    }

    /// Trips are numbered by their position in `TripSet::all_trips()`, on both sides.
    pub fn bipartite_graph(&self) -> BipartiteGraph {
        let trips = self.network.trips();
        let edges = self
            .network
            .compatibility()
            .edges()
            .iter()
            .filter_map(|edge| Some((trips.position_of(edge.from())?, trips.position_of(edge.to())?)))
            .collect();
        BipartiteGraph::new(trips.len(), trips.len(), edges)
    }

    pub fn solve(&self, solver: &dyn MatchingSolver) -> Result<FleetAssignment, SolverFailure> {
        let start_time = time::Instant::now();
        let trips = self.network.trips();
        let trip_count = trips.len();

        let graph = self.bipartite_graph();
        debug!(
            "matching graph built: {} trips, {} edges (elapsed time: {:0.2}sec)",
            trip_count,
            graph.edges().len(),
            start_time.elapsed().as_secs_f32()
        );

        let matching = solver.maximum_matching(&graph)?;
        graph.verify(&matching)?;
        debug!(
            "maximum matching of size {} computed (elapsed time: {:0.2}sec)",
            matching.size(),
            start_time.elapsed().as_secs_f32()
        );

        let mut successor_of: Vec<Option<usize>> = vec![None; trip_count];
        let mut has_predecessor = vec![false; trip_count];
        for &(pred, succ) in matching.pairs() {
            successor_of[pred] = Some(succ);
            has_predecessor[succ] = true;
        }

        // each trip without a matched predecessor starts a new vehicle
        let mut chains = Vec::new();
        let mut covered = 0;
        for start in (0..trip_count).filter(|&position| !has_predecessor[position]) {
            let mut chain = Vec::new();
            let mut current = Some(start);
            while let Some(position) = current {
                let trip = trips.trip_at(position).ok_or_else(|| {
                    SolverFailure::InvalidMatching(format!("unknown trip position {}", position))
                })?;
                chain.push(trip.idx());
                current = successor_of[position];
            }
            covered += chain.len();
            chains.extend(VehicleChain::new(VehicleId::from(chains.len()), chain));
        }
        if covered != trip_count {
            // only possible if the matched links form a cycle
            return Err(SolverFailure::InvalidMatching(format!(
                "chains cover {} of {} trips",
                covered, trip_count
            )));
        }

        let assignment = FleetAssignment::new(chains, matching.size(), trips)
            .map_err(SolverFailure::InvalidMatching)?;

        info!(
            "minimum fleet size: {} vehicles for {} trips (matching size {}, elapsed time: {:0.2}sec)",
            assignment.minimum_fleet_size(),
            trip_count,
            assignment.matching_size(),
            start_time.elapsed().as_secs_f32()
        );
        Ok(assignment)
    }
}

/// number of trips minus the size of a maximum matching of the given graph.
pub fn minimum_fleet_size(
    trip_count: usize,
    graph: &BipartiteGraph,
    solver: &dyn MatchingSolver,
) -> Result<VehicleCount, SolverFailure> {
    let matching = solver.maximum_matching(graph)?;
    graph.verify(&matching)?;
    trip_count.checked_sub(matching.size()).ok_or_else(|| {
        SolverFailure::InvalidMatching(format!(
            "matching of size {} for {} trips",
            matching.size(),
            trip_count
        ))
    })
}
