// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Errors used by [`Ship`][crate::Ship] and the [`Field`][super::Field].

use std::fmt::{self, Debug};

use thiserror::Error;

use crate::Coordinate;

/// Error returned when a ship's ends share neither a row nor a column, so the ship would
/// not be horizontal or vertical.
#[derive(Error, Copy, Clone, Eq, PartialEq)]
#[error("cannot place ship from {start} to {end}: ships must be placed horizontally or vertically")]
pub struct InvalidPlacement {
    /// First end of the rejected ship.
    start: Coordinate,
    /// Second end of the rejected ship.
    end: Coordinate,
}

impl InvalidPlacement {
    /// Create an [`InvalidPlacement`] for the ship with the given ends.
    pub(crate) fn new(start: Coordinate, end: Coordinate) -> Self {
        Self { start, end }
    }

    /// The first end of the ship that was rejected.
    pub fn start(&self) -> Coordinate {
        self.start
    }

    /// The second end of the ship that was rejected.
    pub fn end(&self) -> Coordinate {
        self.end
    }

    /// Extract the ends of the rejected ship.
    pub fn into_inner(self) -> (Coordinate, Coordinate) {
        (self.start, self.end)
    }
}

impl From<InvalidPlacement> for (Coordinate, Coordinate) {
    /// Allows retrieving the ends of the rejected ship with into.
    fn from(err: InvalidPlacement) -> Self {
        err.into_inner()
    }
}

impl Debug for InvalidPlacement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_names_both_ends() {
        let err = InvalidPlacement::new(Coordinate::new(0, 0), Coordinate::new(1, 2));
        assert_eq!(
            err.to_string(),
            "cannot place ship from (0, 0) to (1, 2): ships must be placed horizontally or vertically"
        );
        assert_eq!(format!("{:?}", err), err.to_string());
        let (start, end) = err.into();
        assert_eq!((start, end), (Coordinate::new(0, 0), Coordinate::new(1, 2)));
    }
}
