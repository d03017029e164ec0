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
use crate::Coordinate;

/// A single cell occupied by a [`Ship`][crate::Ship]. Tracks whether that cell has been
/// hit. Decks are created by their ship and only change state when their ship is fired
/// upon.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Deck {
    coord: Coordinate,
    alive: bool,
}

impl Deck {
    /// Create a live deck at the given coordinate.
    pub(super) fn new(coord: Coordinate) -> Self {
        Self { coord, alive: true }
    }

    /// Row of this deck.
    pub fn row(&self) -> i32 {
        self.coord.row
    }

    /// Column of this deck.
    pub fn column(&self) -> i32 {
        self.coord.column
    }

    /// Coordinate of this deck.
    pub fn coord(&self) -> Coordinate {
        self.coord
    }

    /// Whether this deck has not yet been hit.
    pub fn alive(&self) -> bool {
        self.alive
    }

    /// Mark this deck as hit. Hitting a dead deck again has no further effect.
    pub(super) fn hit(&mut self) {
        self.alive = false;
    }

    pub(super) fn is_at(&self, row: i32, column: i32) -> bool {
        self.coord.row == row && self.coord.column == column
    }
}
