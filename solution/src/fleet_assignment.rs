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

#[cfg(test)]
mod tests;

use std::collections::HashMap;
use std::fmt;

use itertools::Itertools;
use model::base_types::{TripIdx, VehicleCount};
use model::compatibility::is_compatible;
use model::trips::TripSet;
use tracing::info;

use crate::vehicle_chain::{VehicleChain, VehicleId};

/// Partition of all trips into vehicle chains. One chain is one vehicle.
#[derive(Debug, Clone, PartialEq)]
pub struct FleetAssignment {
    chains: Vec<VehicleChain>,
    chain_of: HashMap<TripIdx, VehicleId>,
    matching_size: usize,
}

// static functions
impl FleetAssignment {
    /// Creates the assignment and asserts that:
    /// every chain only contains trips of the trip set,
    /// every trip appears in exactly one chain,
    /// consecutive trips of a chain are compatible,
    /// the vehicle ids are distinct.
    pub fn new(
        chains: Vec<VehicleChain>,
        matching_size: usize,
        trips: &TripSet,
    ) -> Result<FleetAssignment, String> {
        let mut chain_of: HashMap<TripIdx, VehicleId> = HashMap::new();
        for chain in chains.iter() {
            for (a, b) in chain.trips().iter().tuple_windows() {
                let (Some(from), Some(to)) = (trips.trip(*a), trips.trip(*b)) else {
                    return Err(format!("Not a valid chain: {} or {} is unknown.", a, b));
                };
                if !is_compatible(from, to) {
                    return Err(format!("Not a valid chain: {} cannot reach {}.", a, b));
                }
            }
            for &trip in chain.trips() {
                if !trips.contains(trip) {
                    return Err(format!("Trip {} is not part of the timetable.", trip));
                }
                if let Some(other) = chain_of.insert(trip, chain.vehicle()) {
                    return Err(format!(
                        "Trip {} is covered by {} and {}.",
                        trip,
                        other,
                        chain.vehicle()
                    ));
                }
            }
        }
        if let Some(uncovered) = trips.all_trips().find(|t| !chain_of.contains_key(&t.idx())) {
            return Err(format!("Trip {} is not covered.", uncovered.idx()));
        }
        if !chains.iter().map(|c| c.vehicle()).all_unique() {
            return Err(String::from("Vehicle ids are not unique."));
        }
        Ok(FleetAssignment::new_trusted(chains, matching_size))
    }

    /// Creates the assignment but does NOT check it against the trip set.
    pub fn new_trusted(chains: Vec<VehicleChain>, matching_size: usize) -> FleetAssignment {
        let chain_of = chains
            .iter()
            .flat_map(|chain| chain.trips().iter().map(move |&trip| (trip, chain.vehicle())))
            .collect();
        FleetAssignment {
            chains,
            chain_of,
            matching_size,
        }
    }
}

// methods
impl FleetAssignment {
    pub fn chains(&self) -> &[VehicleChain] {
        &self.chains
    }

    pub fn minimum_fleet_size(&self) -> VehicleCount {
        self.chains.len()
    }

    /// number of trip-to-trip links, i.e. the size of the maximum matching.
    pub fn matching_size(&self) -> usize {
        self.matching_size
    }

    pub fn number_of_trips(&self) -> usize {
        self.chain_of.len()
    }

    pub fn vehicle_of(&self, trip: TripIdx) -> Option<VehicleId> {
        self.chain_of.get(&trip).copied()
    }

    pub fn chain_of(&self, trip: TripIdx) -> Option<&VehicleChain> {
        let vehicle = self.vehicle_of(trip)?;
        self.chains.iter().find(|chain| chain.vehicle() == vehicle)
    }

    pub fn print_chains(&self) {
        info!(
            "fleet assignment with {} vehicles for {} trips:",
            self.minimum_fleet_size(),
            self.number_of_trips()
        );
        for chain in self.chains.iter() {
            info!("     {}", chain);
        }
    }
}

impl fmt::Display for FleetAssignment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for chain in self.chains.iter() {
            writeln!(f, "{}", chain)?;
        }
        Ok(())
    }
}
