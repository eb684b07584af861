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

use derive_more::{Display, From};
use model::base_types::{NodeIdx, TripIdx};
use std::fmt;
use std::iter::{self, Iterator};

#[derive(Display, From, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[display(fmt = "veh{}", _0)]
pub struct VehicleId(usize);

impl VehicleId {
    pub fn idx(&self) -> usize {
        self.0
    }
}

/// The trips served by a single vehicle, in the order it serves them.
///
/// The vehicle pulls out of the depot before the first trip and pulls in after the last one,
/// so the depot is implicit at both ends. A chain always has at least one trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VehicleChain {
    vehicle: VehicleId,
    trips: Vec<TripIdx>,
}

// static functions
impl VehicleChain {
    /// If trips is empty, None is returned.
    pub fn new(vehicle: VehicleId, trips: Vec<TripIdx>) -> Option<VehicleChain> {
        if trips.is_empty() {
            None
        } else {
            Some(VehicleChain { vehicle, trips })
        }
    }
}

// methods
impl VehicleChain {
    pub fn vehicle(&self) -> VehicleId {
        self.vehicle
    }

    pub fn trips(&self) -> &[TripIdx] {
        &self.trips
    }

    pub fn first(&self) -> TripIdx {
        self.trips[0]
    }

    pub fn last(&self) -> TripIdx {
        self.trips[self.trips.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }

    /// depot, trips, depot
    pub fn nodes(&self) -> impl Iterator<Item = NodeIdx> + '_ {
        iter::once(NodeIdx::Depot)
            .chain(self.trips.iter().map(|&trip| NodeIdx::Trip(trip)))
            .chain(iter::once(NodeIdx::Depot))
    }
}

impl fmt::Display for VehicleChain {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:", self.vehicle)?;
        let mut nodes = self.nodes();
        if let Some(first) = nodes.next() {
            write!(f, " {}", first)?;
        }
        for node in nodes {
            write!(f, " - {}", node)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_chain_is_refused() {
        assert!(VehicleChain::new(VehicleId::from(0), vec![]).is_none());
    }

    #[test]
    fn chain_is_framed_by_the_depot() {
        let chain =
            VehicleChain::new(VehicleId::from(2), vec![TripIdx::outbound(0), TripIdx::inbound(1)])
                .unwrap();
        assert_eq!(chain.first(), TripIdx::outbound(0));
        assert_eq!(chain.last(), TripIdx::inbound(1));
        assert_eq!(
            chain.to_string(),
            "veh2: depot - outbound::0 - inbound::1 - depot"
        );
    }
}
