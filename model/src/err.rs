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

use derive_more::Display;

use crate::base_types::{Minutes, TripIdx};

/// A trip whose times are not finite or that arrives before it embarks.
#[derive(Display, Debug, Clone, PartialEq)]
#[display(
    fmt = "malformed trip {}: embark {} and arrival {} do not form a time interval",
    trip,
    embark,
    arrival
)]
pub struct MalformedTripError {
    trip: TripIdx,
    embark: Minutes,
    arrival: Minutes,
}

impl MalformedTripError {
    pub fn new(trip: TripIdx, embark: Minutes, arrival: Minutes) -> Self {
        Self {
            trip,
            embark,
            arrival,
        }
    }

    pub fn trip(&self) -> TripIdx {
        self.trip
    }
}

impl std::error::Error for MalformedTripError {}

#[derive(Display, Debug, Clone, PartialEq)]
pub enum InstanceLoadError {
    #[display(fmt = "invalid instance: {}", _0)]
    Json(String),
    #[display(fmt = "{}", _0)]
    MalformedTrip(MalformedTripError),
}

impl std::error::Error for InstanceLoadError {}

impl From<serde_json::Error> for InstanceLoadError {
    fn from(err: serde_json::Error) -> Self {
        InstanceLoadError::Json(err.to_string())
    }
}

impl From<MalformedTripError> for InstanceLoadError {
    fn from(err: MalformedTripError) -> Self {
        InstanceLoadError::MalformedTrip(err)
    }
}
