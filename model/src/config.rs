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

use crate::base_types::Direction;

pub const DEFAULT_OUTBOUND_ROUTE: &str = "Vá.1->Vá.2";
pub const DEFAULT_INBOUND_ROUTE: &str = "Vá.2->Vá.1";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    pub routes: ConfigRoutes,
    pub reporting: ConfigReporting,
    pub solver: ConfigSolver,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConfigRoutes {
    pub outbound: String,
    pub inbound: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigReporting {
    /// only trips with an index up to this limit are listed in the network output.
    /// Has no influence on the model.
    pub draw_limit: Option<usize>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigSolver {
    pub time_limit: Option<Duration>,
    pub algorithm: MatchingAlgorithm,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MatchingAlgorithm {
    #[default]
    PushRelabel,
    AugmentingPath,
}

impl Default for ConfigRoutes {
    fn default() -> Self {
        ConfigRoutes {
            outbound: String::from(DEFAULT_OUTBOUND_ROUTE),
            inbound: String::from(DEFAULT_INBOUND_ROUTE),
        }
    }
}

impl ConfigRoutes {
    /// rows of the outbound route are outbound, everything else runs inbound.
    pub fn direction_of(&self, route: &str) -> Direction {
        if route == self.outbound {
            Direction::Outbound
        } else {
            Direction::Inbound
        }
    }

    pub fn name_of(&self, direction: Direction) -> &str {
        match direction {
            Direction::Outbound => &self.outbound,
            Direction::Inbound => &self.inbound,
        }
    }
}
