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

use crate::base_types::{Direction, Minutes};

/// A single delay observation: from `threshold` (minutes of the day) on, trips were late by
/// `delay_a + delay_b` minutes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DelayObservation {
    pub threshold: Minutes,
    pub delay_a: Minutes,
    pub delay_b: Minutes,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OffsetEntry {
    threshold: Minutes,
    offset: Minutes,
}

impl OffsetEntry {
    pub fn new(threshold: Minutes, offset: Minutes) -> OffsetEntry {
        OffsetEntry { threshold, offset }
    }

    pub fn threshold(&self) -> Minutes {
        self.threshold
    }

    pub fn offset(&self) -> Minutes {
        self.offset
    }
}

/// Offsets of one direction, sorted descending by threshold.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OffsetTable {
    entries: Vec<OffsetEntry>,
}

// static functions
impl OffsetTable {
    /// keeps the given order as the stored order.
    pub fn new(entries: Vec<OffsetEntry>) -> OffsetTable {
        OffsetTable { entries }
    }

    pub fn empty() -> OffsetTable {
        OffsetTable::default()
    }

    /// Observations usually come in ascending order of their threshold. They are reversed
    /// and then stably sorted descending, so equal thresholds keep the reversed order.
    pub fn from_observations(
        observations: impl IntoIterator<Item = DelayObservation>,
    ) -> OffsetTable {
        let mut entries: Vec<OffsetEntry> = observations
            .into_iter()
            .map(|obs| OffsetEntry::new(obs.threshold, obs.delay_a + obs.delay_b))
            .collect();
        entries.reverse();
        entries.sort_by(|a, b| b.threshold.total_cmp(&a.threshold));
        OffsetTable { entries }
    }
}

// methods
impl OffsetTable {
    /// offset of the first entry (in stored order) with a threshold strictly below
    /// `raw_embark`, zero if there is none.
    pub fn correction_for(&self, raw_embark: Minutes) -> Minutes {
        self.entries
            .iter()
            .find(|entry| entry.threshold < raw_embark)
            .map_or(0.0, |entry| entry.offset)
    }

    pub fn entries(&self) -> &[OffsetEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OffsetTables {
    outbound: OffsetTable,
    inbound: OffsetTable,
}

impl OffsetTables {
    pub fn new(outbound: OffsetTable, inbound: OffsetTable) -> OffsetTables {
        OffsetTables { outbound, inbound }
    }

    pub fn table_of(&self, direction: Direction) -> &OffsetTable {
        match direction {
            Direction::Outbound => &self.outbound,
            Direction::Inbound => &self.inbound,
        }
    }

    pub fn correction_for(&self, direction: Direction, raw_embark: Minutes) -> Minutes {
        self.table_of(direction).correction_for(raw_embark)
    }
}
