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

use std::time::Duration;

use derive_more::Display;

/// The matching solver did not deliver a proven maximum matching. There is no fallback:
/// without a maximum matching the fleet size is unknown.
#[derive(Display, Debug, Clone, PartialEq, Eq)]
pub enum SolverFailure {
    #[display(fmt = "matching solver exceeded its time limit of {:?}", _0)]
    TimeLimitExceeded(Duration),
    #[display(fmt = "matching solver aborted: {}", _0)]
    Aborted(String),
    #[display(fmt = "matching solver returned an invalid matching: {}", _0)]
    InvalidMatching(String),
}

impl std::error::Error for SolverFailure {}
