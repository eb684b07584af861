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

/// minutes relative to the shared reference instant of the timetable.
pub type Minutes = f64;
pub type VehicleCount = usize;

#[derive(Display, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Direction {
    #[display(fmt = "outbound")]
    Outbound,
    #[display(fmt = "inbound")]
    Inbound,
}

impl Direction {
    pub const ALL: [Direction; 2] = [Direction::Outbound, Direction::Inbound];

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Outbound => Direction::Inbound,
            Direction::Inbound => Direction::Outbound,
        }
    }
}

/// Identity of a trip: its direction and its position within that direction.
#[derive(Display, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[display(fmt = "{}::{}", direction, index)]
pub struct TripIdx {
    direction: Direction,
    index: usize,
}

impl TripIdx {
    pub fn new(direction: Direction, index: usize) -> TripIdx {
        TripIdx { direction, index }
    }

    pub fn outbound(index: usize) -> TripIdx {
        TripIdx::new(Direction::Outbound, index)
    }

    pub fn inbound(index: usize) -> TripIdx {
        TripIdx::new(Direction::Inbound, index)
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn index(&self) -> usize {
        self.index
    }
}

/// Nodes of the time-space network. The depot is shared by all trips and serves as
/// source (pull-out) and sink (pull-in) at the same time.
#[derive(Display, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NodeIdx {
    #[display(fmt = "depot")]
    Depot,
    #[display(fmt = "{}", _0)]
    Trip(TripIdx),
}

impl NodeIdx {
    pub fn is_depot(&self) -> bool {
        matches!(self, NodeIdx::Depot)
    }

    pub fn as_trip(&self) -> Option<TripIdx> {
        match self {
            NodeIdx::Depot => None,
            NodeIdx::Trip(trip) => Some(*trip),
        }
    }
}

impl From<TripIdx> for NodeIdx {
    fn from(trip: TripIdx) -> Self {
        NodeIdx::Trip(trip)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_of_ids() {
        assert_eq!(TripIdx::outbound(3).to_string(), "outbound::3");
        assert_eq!(NodeIdx::from(TripIdx::inbound(0)).to_string(), "inbound::0");
        assert_eq!(NodeIdx::Depot.to_string(), "depot");
    }

    #[test]
    fn opposite_direction() {
        assert_eq!(Direction::Outbound.opposite(), Direction::Inbound);
        assert_eq!(Direction::Inbound.opposite(), Direction::Outbound);
    }
}
