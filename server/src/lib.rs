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

pub mod logger;

use model::config::Config;
use model::err::InstanceLoadError;
use model::json_serialisation::{load_fleet_instance_from_json, network_to_json};
use model::network::TimeSpaceNetwork;
use solution::json_serialisation::fleet_assignment_to_json;
use solution::FleetAssignment;
use solver::{matcher_for, FleetSizingModel, SolverFailure};

use derive_more::{Display, From};
use gethostname::gethostname;
use std::time as stdtime;
use tracing::info;

#[derive(Display, From, Debug, Clone, PartialEq)]
pub enum SolveError {
    #[display(fmt = "instance could not be loaded: {}", _0)]
    Instance(InstanceLoadError),
    #[display(fmt = "no fleet assignment: {}", _0)]
    Solver(SolverFailure),
}

impl std::error::Error for SolveError {}

pub fn solve_instance(input_data: serde_json::Value) -> Result<serde_json::Value, SolveError> {
    let start_time = stdtime::Instant::now();
    let (network, config) = load_fleet_instance_from_json(input_data)?;
    info!(
        "*** Instance with {} trips and {} compatibility edges loaded (elapsed time: {:0.2}sec) ***",
        network.number_of_trips(),
        network.compatibility().number_of_edges(),
        start_time.elapsed().as_secs_f32()
    );

    let matcher = matcher_for(&config.solver);
    let fleet_sizing_model = FleetSizingModel::new(network.clone());
    let assignment = fleet_sizing_model.solve(matcher.as_ref())?;

    let runtime_duration = start_time.elapsed();
    info!("*** Solved ***");
    assignment.print_chains();
    info!("running time: {:0.2}sec", runtime_duration.as_secs_f32());

    Ok(create_output_json(
        &assignment,
        &network,
        &config,
        runtime_duration,
    ))
}

pub fn create_output_json(
    assignment: &FleetAssignment,
    network: &TimeSpaceNetwork,
    config: &Config,
    runtime_duration: stdtime::Duration,
) -> serde_json::Value {
    let timestamp = stdtime::SystemTime::now()
        .duration_since(stdtime::UNIX_EPOCH)
        .map(|since_epoch| since_epoch.as_secs())
        .unwrap_or_default();
    let mut output = serde_json::json!({
        "info": {
            "runningTime": format!("{:0.2}sec", runtime_duration.as_secs_f32()),
            "numberOfThreads": rayon::current_num_threads(),
            "timestamp(UnixSeconds)": timestamp,
            "hostname": gethostname().into_string().unwrap_or("unknown".to_string()),
        },
    });
    if let (Some(fields), serde_json::Value::Object(assignment_json)) = (
        output.as_object_mut(),
        fleet_assignment_to_json(assignment, network.trips()),
    ) {
        fields.extend(assignment_json);
        fields.insert(
            String::from("network"),
            network_to_json(network, config.reporting.draw_limit),
        );
    }
    output
}
