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

use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use tracing::warn;

use super::{BipartiteGraph, Matching, MatchingSolver};
use crate::err::SolverFailure;

/// Runs the inner solver on a worker thread and gives up after `time_limit`.
/// A late result is discarded; the worker is not interrupted.
pub struct TimeLimitedMatcher {
    inner: Arc<dyn MatchingSolver>,
    time_limit: Duration,
}

impl TimeLimitedMatcher {
    pub fn new(inner: Arc<dyn MatchingSolver>, time_limit: Duration) -> Self {
        TimeLimitedMatcher { inner, time_limit }
    }

    pub fn time_limit(&self) -> Duration {
        self.time_limit
    }
}

impl MatchingSolver for TimeLimitedMatcher {
    fn maximum_matching(&self, graph: &BipartiteGraph) -> Result<Matching, SolverFailure> {
        let (sender, receiver) = mpsc::channel();
        let inner = self.inner.clone();
        let graph = graph.clone();
        thread::Builder::new()
            .name(String::from("matching-solver"))
            .spawn(move || {
                // the receiver is gone if the time limit has already expired
                let _ = sender.send(inner.maximum_matching(&graph));
            })
            .map_err(|err| SolverFailure::Aborted(err.to_string()))?;

        match receiver.recv_timeout(self.time_limit) {
            Ok(result) => result,
            Err(RecvTimeoutError::Timeout) => {
                warn!("matching solver did not finish within {:?}", self.time_limit);
                Err(SolverFailure::TimeLimitExceeded(self.time_limit))
            }
            Err(RecvTimeoutError::Disconnected) => Err(SolverFailure::Aborted(String::from(
                "solver thread terminated without a result",
            ))),
        }
    }
}
