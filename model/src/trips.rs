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

use std::fmt;

use crate::base_types::{Direction, Minutes, TripIdx};
use crate::err::MalformedTripError;
use crate::offsets::OffsetTables;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trip {
    idx: TripIdx,
    embark: Minutes,
    arrival: Minutes,
}

impl Trip {
    /// rejects non-finite times and trips that arrive before they embark.
    /// Zero-duration trips are fine.
    pub fn new(idx: TripIdx, embark: Minutes, arrival: Minutes) -> Result<Trip, MalformedTripError> {
        if !embark.is_finite() || !arrival.is_finite() || arrival < embark {
            return Err(MalformedTripError::new(idx, embark, arrival));
        }
        Ok(Trip {
            idx,
            embark,
            arrival,
        })
    }

    pub fn idx(&self) -> TripIdx {
        self.idx
    }

    pub fn direction(&self) -> Direction {
        self.idx.direction()
    }

    pub fn index(&self) -> usize {
        self.idx.index()
    }

    pub fn embark(&self) -> Minutes {
        self.embark
    }

    pub fn arrival(&self) -> Minutes {
        self.arrival
    }

    pub fn duration(&self) -> Minutes {
        self.arrival - self.embark
    }
}

impl fmt::Display for Trip {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ({:.1} - {:.1})", self.idx, self.embark, self.arrival)
    }
}

/// A timetable row as delivered by ingestion, before any delay correction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawTripRow {
    pub direction: Direction,
    pub embark: Minutes,
    pub arrival: Minutes,
}

/// The corrected trips of both directions. Within a direction the trips keep the order of
/// the timetable and trip `k` has index `k`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TripSet {
    outbound: Vec<Trip>,
    inbound: Vec<Trip>,
}

// static functions
impl TripSet {
    pub fn empty() -> TripSet {
        TripSet::default()
    }

    /// builds the trip set from already corrected (embark, arrival) pairs.
    pub fn new(
        outbound: &[(Minutes, Minutes)],
        inbound: &[(Minutes, Minutes)],
    ) -> Result<TripSet, MalformedTripError> {
        Ok(TripSet {
            outbound: TripSet::trips_from_pairs(Direction::Outbound, outbound)?,
            inbound: TripSet::trips_from_pairs(Direction::Inbound, inbound)?,
        })
    }

    /// Applies the delay correction of the row's direction to both ends of the trip. The
    /// correction is looked up with the raw embark time.
    pub fn from_raw_rows(
        rows: impl IntoIterator<Item = RawTripRow>,
        offsets: &OffsetTables,
    ) -> Result<TripSet, MalformedTripError> {
        let mut trip_set = TripSet::empty();
        for row in rows {
            let correction = offsets.correction_for(row.direction, row.embark);
            let trips = trip_set.trips_of_mut(row.direction);
            let idx = TripIdx::new(row.direction, trips.len());
            trips.push(Trip::new(
                idx,
                row.embark + correction,
                row.arrival + correction,
            )?);
        }
        Ok(trip_set)
    }

    fn trips_from_pairs(
        direction: Direction,
        pairs: &[(Minutes, Minutes)],
    ) -> Result<Vec<Trip>, MalformedTripError> {
        pairs
            .iter()
            .enumerate()
            .map(|(index, &(embark, arrival))| {
                Trip::new(TripIdx::new(direction, index), embark, arrival)
            })
            .collect()
    }
}

// methods
impl TripSet {
    pub fn trips_of(&self, direction: Direction) -> &[Trip] {
        match direction {
            Direction::Outbound => &self.outbound,
            Direction::Inbound => &self.inbound,
        }
    }

    fn trips_of_mut(&mut self, direction: Direction) -> &mut Vec<Trip> {
        match direction {
            Direction::Outbound => &mut self.outbound,
            Direction::Inbound => &mut self.inbound,
        }
    }

    /// outbound trips first, then inbound trips.
    pub fn all_trips(&self) -> impl Iterator<Item = &Trip> + '_ {
        self.outbound.iter().chain(self.inbound.iter())
    }

    pub fn trip(&self, idx: TripIdx) -> Option<&Trip> {
        self.trips_of(idx.direction()).get(idx.index())
    }

    pub fn contains(&self, idx: TripIdx) -> bool {
        self.trip(idx).is_some()
    }

    /// position of the trip within `all_trips()`.
    pub fn position_of(&self, idx: TripIdx) -> Option<usize> {
        if !self.contains(idx) {
            return None;
        }
        match idx.direction() {
            Direction::Outbound => Some(idx.index()),
            Direction::Inbound => Some(self.outbound.len() + idx.index()),
        }
    }

    pub fn trip_at(&self, position: usize) -> Option<&Trip> {
        if position < self.outbound.len() {
            self.outbound.get(position)
        } else {
            self.inbound.get(position - self.outbound.len())
        }
    }

    pub fn number_of_trips(&self, direction: Direction) -> usize {
        self.trips_of(direction).len()
    }

    pub fn len(&self) -> usize {
        self.outbound.len() + self.inbound.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
