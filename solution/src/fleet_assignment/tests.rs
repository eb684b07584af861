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

use itertools::assert_equal;

use crate::{
    test_utilities::{init_test_data, TestData},
    FleetAssignment, VehicleChain, VehicleId,
};

fn chain(vehicle: usize, trips: Vec<model::base_types::TripIdx>) -> VehicleChain {
    VehicleChain::new(VehicleId::from(vehicle), trips).unwrap()
}

fn default_chains(d: &TestData) -> Vec<VehicleChain> {
    vec![
        chain(0, vec![d.o0, d.i0, d.o2, d.i2]),
        chain(1, vec![d.o1, d.i1]),
    ]
}

#[test]
fn basic_methods_test() {
    // ARRANGE
    let d = init_test_data();

    // ACT
    let assignment = FleetAssignment::new(default_chains(&d), 4, d.network.trips()).unwrap();

    // ASSERT
    assert_eq!(assignment.minimum_fleet_size(), 2);
    assert_eq!(assignment.matching_size(), 4);
    assert_eq!(assignment.number_of_trips(), 6);
    assert_eq!(assignment.vehicle_of(d.o2), Some(VehicleId::from(0)));
    assert_eq!(assignment.vehicle_of(d.i1), Some(VehicleId::from(1)));
    assert_equal(
        assignment.chain_of(d.o1).unwrap().trips().iter().copied(),
        [d.o1, d.i1],
    );
    assert_eq!(
        assignment.to_string(),
        "veh0: depot - outbound::0 - inbound::0 - outbound::2 - inbound::2 - depot\n\
         veh1: depot - outbound::1 - inbound::1 - depot\n"
    );
}

#[test]
fn one_vehicle_per_trip_is_valid() {
    let d = init_test_data();
    let chains = [d.o0, d.o1, d.o2, d.i0, d.i1, d.i2]
        .iter()
        .enumerate()
        .map(|(k, &trip)| chain(k, vec![trip]))
        .collect();
    let assignment = FleetAssignment::new(chains, 0, d.network.trips()).unwrap();
    assert_eq!(assignment.minimum_fleet_size(), 6);
}

#[test]
fn incompatible_successor_is_rejected() {
    let d = init_test_data();
    // inbound::0 arrives at 25, outbound::1 departs at 20.
    let chains = vec![
        chain(0, vec![d.o0, d.i0, d.o1]),
        chain(1, vec![d.o2, d.i2]),
        chain(2, vec![d.i1]),
    ];
    assert!(FleetAssignment::new(chains, 3, d.network.trips()).is_err());
}

#[test]
fn same_direction_successor_is_rejected() {
    let d = init_test_data();
    let chains = vec![
        chain(0, vec![d.o0, d.o1]),
        chain(1, vec![d.o2]),
        chain(2, vec![d.i0]),
        chain(3, vec![d.i1]),
        chain(4, vec![d.i2]),
    ];
    assert!(FleetAssignment::new(chains, 1, d.network.trips()).is_err());
}

#[test]
fn uncovered_trip_is_rejected() {
    let d = init_test_data();
    let chains = vec![chain(0, vec![d.o0, d.i0, d.o2, d.i2])];
    let result = FleetAssignment::new(chains, 3, d.network.trips());
    assert_eq!(result.unwrap_err(), "Trip outbound::1 is not covered.");
}

#[test]
fn doubly_covered_trip_is_rejected() {
    let d = init_test_data();
    let mut chains = default_chains(&d);
    chains.push(chain(2, vec![d.i2]));
    assert!(FleetAssignment::new(chains, 4, d.network.trips()).is_err());
}

#[test]
fn duplicate_vehicle_is_rejected() {
    let d = init_test_data();
    let chains = vec![
        chain(0, vec![d.o0, d.i0, d.o2, d.i2]),
        chain(0, vec![d.o1, d.i1]),
    ];
    assert!(FleetAssignment::new(chains, 4, d.network.trips()).is_err());
}
