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

use model::{base_types::TripIdx, network::TimeSpaceNetwork, trips::TripSet};

/// Shuttle with three trips per direction and no delay correction:
/// outbound (0,10) (20,30) (40,50), inbound (15,25) (35,45) (55,65).
pub struct TestData {
    pub network: Arc<TimeSpaceNetwork>,
    pub o0: TripIdx,
    pub o1: TripIdx,
    pub o2: TripIdx,
    pub i0: TripIdx,
    pub i1: TripIdx,
    pub i2: TripIdx,
}

pub fn shuttle_trip_set() -> TripSet {
    TripSet::new(
        &[(0.0, 10.0), (20.0, 30.0), (40.0, 50.0)],
        &[(15.0, 25.0), (35.0, 45.0), (55.0, 65.0)],
    )
    .unwrap()
}

pub fn init_test_data() -> TestData {
    TestData {
        network: Arc::new(TimeSpaceNetwork::new(shuttle_trip_set())),
        o0: TripIdx::outbound(0),
        o1: TripIdx::outbound(1),
        o2: TripIdx::outbound(2),
        i0: TripIdx::inbound(0),
        i1: TripIdx::inbound(1),
        i2: TripIdx::inbound(2),
    }
}

/// `count` trips per direction with a fixed headway; each trip takes `duration` minutes.
/// Used for larger instances in benchmarks and property tests.
pub fn synthetic_shuttle_trip_set(count: usize, headway: f64, duration: f64) -> TripSet {
    let outbound: Vec<(f64, f64)> = (0..count)
        .map(|k| {
            let embark = k as f64 * headway;
            (embark, embark + duration)
        })
        .collect();
    let inbound: Vec<(f64, f64)> = (0..count)
        .map(|k| {
            let embark = k as f64 * headway + headway / 2.0;
            (embark, embark + duration)
        })
        .collect();
    TripSet::new(&outbound, &inbound).unwrap()
}
