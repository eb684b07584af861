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

use super::*;
use crate::trips::TripSet;

fn o(index: usize) -> TripIdx {
    TripIdx::outbound(index)
}

fn i(index: usize) -> TripIdx {
    TripIdx::inbound(index)
}

fn shuttle_trips() -> TripSet {
    TripSet::new(
        &[(0.0, 10.0), (20.0, 30.0), (40.0, 50.0)],
        &[(15.0, 25.0), (35.0, 45.0), (55.0, 65.0)],
    )
    .unwrap()
}

#[test]
fn shuttle_edges() {
    // ACT
    let graph = CompatibilityGraph::build(&shuttle_trips());

    // ASSERT
    assert_equal(
        graph.edges().iter().map(|e| (e.from(), e.to())),
        [
            (o(0), i(0)),
            (o(0), i(1)),
            (o(0), i(2)),
            (o(1), i(1)),
            (o(1), i(2)),
            (o(2), i(2)),
            (i(0), o(2)),
        ],
    );
    assert_equal(graph.successors(o(1)), [i(1), i(2)]);
    assert_equal(graph.predecessors(i(2)), [o(0), o(1), o(2)]);
    assert_eq!(graph.predecessors(o(0)).count(), 0);
    assert!(graph.contains(i(0), o(2)));
    assert!(!graph.contains(i(0), o(1)));
}

#[test]
fn edge_iff_arrival_strictly_before_embark() {
    // ARRANGE
    let trips = TripSet::new(
        &[(0.0, 10.0), (7.0, 9.0), (30.0, 30.0)],
        &[(10.0, 20.0), (9.5, 12.0), (30.0, 31.0), (20.0, 30.0)],
    )
    .unwrap();

    // ACT
    let graph = CompatibilityGraph::build(&trips);

    // ASSERT
    for from in trips.all_trips() {
        for to in trips.all_trips() {
            let expected =
                from.direction() != to.direction() && from.arrival() < to.embark();
            assert_eq!(
                graph.contains(from.idx(), to.idx()),
                expected,
                "{} -> {}",
                from,
                to
            );
        }
    }
    // boundary: outbound::0 arrives at 10 and inbound::0 departs at 10.
    assert!(!graph.contains(o(0), i(0)));
    // inbound::3 arrives at 30 and the zero-duration outbound::2 departs at 30.
    assert!(!graph.contains(i(3), o(2)));
    // the zero-duration trip is chained like any other trip.
    assert!(graph.contains(i(1), o(2)));
    assert!(graph.contains(o(1), i(1)));
}

#[test]
fn no_edges_within_a_direction() {
    let trips = TripSet::new(&[(0.0, 1.0), (5.0, 6.0), (10.0, 11.0)], &[]).unwrap();
    let graph = CompatibilityGraph::build(&trips);
    assert!(graph.is_empty());
}

#[test]
fn empty_trip_set_gives_empty_graph() {
    let graph = CompatibilityGraph::build(&TripSet::empty());
    assert_eq!(graph.number_of_edges(), 0);
    assert_eq!(graph.successors(o(0)).count(), 0);
}

#[test]
fn rebuilding_yields_identical_edges() {
    let trips = shuttle_trips();
    assert_eq!(
        CompatibilityGraph::build(&trips),
        CompatibilityGraph::build(&trips)
    );
}

#[test]
fn graph_is_acyclic() {
    let trips = shuttle_trips();
    let graph = CompatibilityGraph::build(&trips);
    for edge in graph.edges() {
        let from = trips.trip(edge.from()).unwrap();
        let to = trips.trip(edge.to()).unwrap();
        assert!(from.embark() < to.embark());
    }
}
