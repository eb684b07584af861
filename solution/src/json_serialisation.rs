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

use model::trips::TripSet;

use crate::FleetAssignment;

pub fn fleet_assignment_to_json(assignment: &FleetAssignment, trips: &TripSet) -> serde_json::Value {
    let vehicles: Vec<serde_json::Value> = assignment
        .chains()
        .iter()
        .map(|chain| {
            let tour: Vec<serde_json::Value> = chain
                .trips()
                .iter()
                .filter_map(|&idx| trips.trip(idx))
                .map(|trip| {
                    serde_json::json!({
                        "trip": trip.idx().to_string(),
                        "direction": trip.direction().to_string(),
                        "embark": trip.embark(),
                        "arrival": trip.arrival(),
                    })
                })
                .collect();
            serde_json::json!({
                "id": chain.vehicle().to_string(),
                "tour": tour,
            })
        })
        .collect();

    serde_json::json!({
        "minimumFleetSize": assignment.minimum_fleet_size(),
        "matchingSize": assignment.matching_size(),
        "vehicles": vehicles,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utilities::init_test_data;
    use crate::{VehicleChain, VehicleId};

    #[test]
    fn assignment_to_json() {
        // ARRANGE
        let d = init_test_data();
        let chains = vec![
            VehicleChain::new(VehicleId::from(0), vec![d.o0, d.i0, d.o2, d.i2]).unwrap(),
            VehicleChain::new(VehicleId::from(1), vec![d.o1, d.i1]).unwrap(),
        ];
        let assignment = FleetAssignment::new(chains, 4, d.network.trips()).unwrap();

        // ACT
        let json = fleet_assignment_to_json(&assignment, d.network.trips());

        // ASSERT
        assert_eq!(json["minimumFleetSize"], 2);
        assert_eq!(json["matchingSize"], 4);
        assert_eq!(json["vehicles"][1]["id"], "veh1");
        assert_eq!(json["vehicles"][1]["tour"][1]["trip"], "inbound::1");
        assert_eq!(json["vehicles"][1]["tour"][1]["embark"], 35.0);
        assert_eq!(json["vehicles"][0]["tour"].as_array().unwrap().len(), 4);
    }
}
