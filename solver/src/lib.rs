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

pub mod err;
pub mod fleet_sizing_model;
pub mod matching;

pub use err::SolverFailure;
pub use fleet_sizing_model::{minimum_fleet_size, FleetSizingModel};
pub use matching::{matcher_for, BipartiteGraph, Matching, MatchingSolver};
