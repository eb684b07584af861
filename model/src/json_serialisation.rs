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
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::base_types::{Direction, Minutes, NodeIdx};
use crate::config::{Config, ConfigReporting, ConfigRoutes, ConfigSolver, MatchingAlgorithm};
use crate::err::InstanceLoadError;
use crate::network::{EdgeKind, TimeSpaceNetwork};
use crate::offsets::{DelayObservation, OffsetTable, OffsetTables};
use crate::trips::{RawTripRow, TripSet};

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct JsonInput {
    #[serde(default)]
    routes: Option<JsonRoutes>,
    trips: Vec<JsonTripRow>,
    #[serde(default)]
    delay_observations: JsonDelayObservations,
    #[serde(default)]
    parameters: JsonParameters,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct JsonRoutes {
    outbound: String,
    inbound: String,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct JsonTripRow {
    route: Option<String>,
    embark: Option<Minutes>,
    arrival: Option<Minutes>,
}

#[derive(Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
struct JsonDelayObservations {
    #[serde(default)]
    outbound: Vec<JsonDelayObservation>,
    #[serde(default)]
    inbound: Vec<JsonDelayObservation>,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct JsonDelayObservation {
    till: Option<Minutes>,
    delay_a: Option<Minutes>,
    delay_b: Option<Minutes>,
}

#[derive(Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
struct JsonParameters {
    draw_limit: Option<usize>,
    solver_time_limit_in_seconds: Option<f64>,
    matching_algorithm: Option<JsonMatchingAlgorithm>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy)]
#[serde(rename_all = "camelCase")]
enum JsonMatchingAlgorithm {
    PushRelabel,
    AugmentingPath,
}

/// Loads the timetable, corrects it with the delay observations and builds the time-space
/// network. Rows and observations with missing cells are skipped.
pub fn load_fleet_instance_from_json(
    input_data: serde_json::Value,
) -> Result<(Arc<TimeSpaceNetwork>, Arc<Config>), InstanceLoadError> {
    let json_input: JsonInput = serde_json::from_value(input_data)?;
    let config = create_config(&json_input);
    let offsets = create_offset_tables(&json_input);
    let trips = create_trip_set(&json_input, &config.routes, &offsets)?;
    debug!(
        "instance loaded: {} outbound and {} inbound trips",
        trips.number_of_trips(Direction::Outbound),
        trips.number_of_trips(Direction::Inbound)
    );
    let network = TimeSpaceNetwork::new(trips);
    Ok((Arc::new(network), Arc::new(config)))
}

fn create_config(json_input: &JsonInput) -> Config {
    let routes = json_input
        .routes
        .as_ref()
        .map(|routes| ConfigRoutes {
            outbound: routes.outbound.clone(),
            inbound: routes.inbound.clone(),
        })
        .unwrap_or_default();

    let parameters = &json_input.parameters;
    let time_limit = parameters.solver_time_limit_in_seconds.and_then(|seconds| {
        let time_limit = Duration::try_from_secs_f64(seconds).ok();
        if time_limit.is_none() {
            warn!("ignoring invalid solver time limit of {} seconds", seconds);
        }
        time_limit
    });
    let algorithm = match parameters.matching_algorithm {
        Some(JsonMatchingAlgorithm::AugmentingPath) => MatchingAlgorithm::AugmentingPath,
        Some(JsonMatchingAlgorithm::PushRelabel) | None => MatchingAlgorithm::PushRelabel,
    };

    Config {
        routes,
        reporting: ConfigReporting {
            draw_limit: parameters.draw_limit,
        },
        solver: ConfigSolver {
            time_limit,
            algorithm,
        },
    }
}

fn create_offset_tables(json_input: &JsonInput) -> OffsetTables {
    let table_for = |direction: Direction, observations: &[JsonDelayObservation]| {
        OffsetTable::from_observations(observations.iter().enumerate().filter_map(
            |(row, obs)| match (obs.till, obs.delay_a, obs.delay_b) {
                (Some(threshold), Some(delay_a), Some(delay_b)) => Some(DelayObservation {
                    threshold,
                    delay_a,
                    delay_b,
                }),
                _ => {
                    warn!("skipping incomplete {} delay observation {}", direction, row);
                    None
                }
            },
        ))
    };
    OffsetTables::new(
        table_for(
            Direction::Outbound,
            &json_input.delay_observations.outbound,
        ),
        table_for(Direction::Inbound, &json_input.delay_observations.inbound),
    )
}

fn create_trip_set(
    json_input: &JsonInput,
    routes: &ConfigRoutes,
    offsets: &OffsetTables,
) -> Result<TripSet, InstanceLoadError> {
    let rows = json_input
        .trips
        .iter()
        .enumerate()
        .filter_map(|(row, trip)| match (&trip.route, trip.embark, trip.arrival) {
            (Some(route), Some(embark), Some(arrival)) => Some(RawTripRow {
                direction: routes.direction_of(route),
                embark,
                arrival,
            }),
            _ => {
                warn!("skipping incomplete timetable row {}", row);
                None
            }
        });
    Ok(TripSet::from_raw_rows(rows, offsets)?)
}

/// Plain listing of the network's nodes and edges. With a draw limit `k` only trips with an
/// index up to `k` (and the edges between them) are listed; the model is not affected.
pub fn network_to_json(network: &TimeSpaceNetwork, draw_limit: Option<usize>) -> serde_json::Value {
    let is_drawn = |node: NodeIdx| match node {
        NodeIdx::Depot => true,
        NodeIdx::Trip(trip) => draw_limit.map_or(true, |limit| trip.index() <= limit),
    };

    let nodes: Vec<serde_json::Value> = network
        .nodes()
        .filter(|&node| is_drawn(node))
        .map(|node| match node.as_trip().and_then(|t| network.trips().trip(t)) {
            Some(trip) => serde_json::json!({
                "id": node.to_string(),
                "direction": trip.direction().to_string(),
                "embark": trip.embark(),
                "arrival": trip.arrival(),
            }),
            None => serde_json::json!({ "id": node.to_string() }),
        })
        .collect();

    let edges: Vec<serde_json::Value> = network
        .edges()
        .iter()
        .filter(|edge| is_drawn(edge.from()) && is_drawn(edge.to()))
        .map(|edge| {
            let kind = match edge.kind() {
                EdgeKind::PullOut => "pullOut",
                EdgeKind::PullIn => "pullIn",
                EdgeKind::Connection => "connection",
            };
            serde_json::json!({
                "kind": kind,
                "from": edge.from().to_string(),
                "to": edge.to().to_string(),
            })
        })
        .collect();

    serde_json::json!({
        "nodes": nodes,
        "edges": edges,
    })
}
