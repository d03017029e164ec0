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
//! Implements building a [`Field`] one ship at a time.
use std::collections::HashMap;

use log::debug;

use crate::{field::Field, Coordinate, InvalidPlacement, Ship};

/// Builder for a [`Field`]. Ships are added in order; each is validated as it is added
/// and its decks are indexed immediately.
///
/// Ships are not checked for overlap. If a later ship covers a cell that an earlier ship
/// already covers, the cell is indexed to the later ship. The earlier ship keeps its deck
/// there, but shots at that cell will no longer reach it.
#[derive(Debug, Default)]
pub struct FieldSetup {
    /// Ships in the order they were added.
    ships: Vec<Ship>,

    /// Maps every occupied cell to the index of its ship in `ships`.
    index: HashMap<Coordinate, usize>,
}

impl FieldSetup {
    /// Begin setup of an empty field.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the ship spanning `start` to `end` and add it to the field. If the ship is
    /// not horizontal or vertical, returns [`InvalidPlacement`] and leaves the setup
    /// unchanged.
    pub fn add_ship<C: Into<Coordinate>>(
        &mut self,
        start: C,
        end: C,
    ) -> Result<&mut Self, InvalidPlacement> {
        let (start, end) = (start.into(), end.into());
        let ship = Ship::new(start, end)?;
        let id = self.ships.len();
        for deck in ship.decks() {
            if let Some(previous) = self.index.insert(deck.coord(), id) {
                debug!(
                    "cell {} reassigned from ship {} to ship {}",
                    deck.coord(),
                    previous,
                    id
                );
            }
        }
        debug!(
            "placed ship {} from {} to {} with {} decks",
            id,
            start,
            end,
            ship.len()
        );
        self.ships.push(ship);
        Ok(self)
    }

    /// Number of ships added so far.
    pub fn len(&self) -> usize {
        self.ships.len()
    }

    /// Whether no ships have been added yet.
    pub fn is_empty(&self) -> bool {
        self.ships.is_empty()
    }

    /// Finish setup, returning a [`Field`] ready to be fired upon.
    pub fn finish(self) -> Field {
        Field {
            ships: self.ships,
            index: self.index,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_ship_leaves_setup_usable() {
        let mut setup = FieldSetup::new();
        assert!(setup.is_empty());
        setup.add_ship((0, 0), (0, 1)).unwrap();
        assert!(setup.add_ship((1, 1), (2, 2)).is_err());
        assert_eq!(setup.len(), 1);
        setup
            .add_ship((3, 0), (5, 0))
            .unwrap()
            .add_ship((7, 7), (7, 7))
            .unwrap();
        assert_eq!(setup.len(), 3);

        let field = setup.finish();
        assert_eq!(field.len(), 3);
        assert!(field.ship_at(Coordinate::new(1, 1)).is_none());
        assert!(field.ship_at(Coordinate::new(4, 0)).is_some());
    }

    #[test]
    fn every_deck_is_indexed_to_its_ship() {
        let mut setup = FieldSetup::new();
        setup.add_ship((0, 0), (0, 3)).unwrap();
        setup.add_ship((2, 1), (4, 1)).unwrap();
        for (coord, &id) in setup.index.iter() {
            assert!(setup.ships[id].contains(*coord));
        }
        let decks: usize = setup.ships.iter().map(Ship::len).sum();
        assert_eq!(setup.index.len(), decks);
    }

    #[test]
    fn overlap_is_last_write_wins() {
        let mut setup = FieldSetup::new();
        setup.add_ship((0, 0), (0, 2)).unwrap();
        setup.add_ship((0, 1), (2, 1)).unwrap();
        assert_eq!(setup.index[&Coordinate::new(0, 0)], 0);
        assert_eq!(setup.index[&Coordinate::new(0, 1)], 1);
        assert_eq!(setup.index[&Coordinate::new(0, 2)], 0);
        // Both ships keep their own deck at the shared cell.
        assert!(setup.ships[0].contains(Coordinate::new(0, 1)));
        assert!(setup.ships[1].contains(Coordinate::new(0, 1)));
    }
}
