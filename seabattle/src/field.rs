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
//! The field of ships and shot resolution.
use std::{collections::HashMap, fmt};

use log::trace;

use crate::{Coordinate, Ship};

pub use self::{errors::InvalidPlacement, setup::FieldSetup};

mod errors;
mod setup;

/// Result of a single shot.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShotOutcome {
    /// The shot did not hit any deck.
    Miss,
    /// The shot hit a deck of a ship that still has live decks.
    Hit,
    /// The shot hit a deck of a ship whose decks are now all hit.
    Sunk,
}

impl fmt::Display for ShotOutcome {
    /// Displays as `Miss!`, `Hit!`, or `Sunk!`.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(match self {
            ShotOutcome::Miss => "Miss!",
            ShotOutcome::Hit => "Hit!",
            ShotOutcome::Sunk => "Sunk!",
        })
    }
}

/// All ships in play, indexed by the cells they occupy.
#[derive(Debug)]
pub struct Field {
    /// Ships in the order they were placed.
    ships: Vec<Ship>,

    /// Maps every occupied cell to the index of its ship in `ships`. Many cells share the
    /// same ship.
    index: HashMap<Coordinate, usize>,
}

impl Field {
    /// Build a field from `(start, end)` pairs, one per ship, in order. Aborts on the
    /// first ship that is not horizontal or vertical. See [`FieldSetup`] for how
    /// overlapping ships are handled.
    pub fn new<I, C>(ships: I) -> Result<Self, InvalidPlacement>
    where
        I: IntoIterator<Item = (C, C)>,
        C: Into<Coordinate>,
    {
        let mut setup = FieldSetup::new();
        for (start, end) in ships {
            setup.add_ship(start, end)?;
        }
        Ok(setup.finish())
    }

    /// Fire a shot at the given cell. Cells no ship occupies are a
    /// [`ShotOutcome::Miss`]; otherwise the shot goes to the ship there. Never fails.
    pub fn fire<C: Into<Coordinate>>(&mut self, location: C) -> ShotOutcome {
        let coord = location.into();
        let outcome = match self.index.get(&coord) {
            None => ShotOutcome::Miss,
            Some(&id) => self.ships[id].fire(coord.row, coord.column),
        };
        trace!("shot at {}: {}", coord, outcome);
        outcome
    }

    /// Get the ship the given cell is indexed to, if any.
    pub fn ship_at(&self, coord: Coordinate) -> Option<&Ship> {
        self.index.get(&coord).map(|&id| &self.ships[id])
    }

    /// Get an iterator over all ships in the order they were placed.
    pub fn ships(&self) -> impl Iterator<Item = &Ship> {
        self.ships.iter()
    }

    /// Number of ships on this field.
    pub fn len(&self) -> usize {
        self.ships.len()
    }

    /// Whether this field has no ships.
    pub fn is_empty(&self) -> bool {
        self.ships.is_empty()
    }

    /// Returns true if every ship has been sunk. True for an empty field.
    pub fn all_sunk(&self) -> bool {
        self.ships.iter().all(Ship::sunk)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_strings() {
        assert_eq!(ShotOutcome::Miss.to_string(), "Miss!");
        assert_eq!(ShotOutcome::Hit.to_string(), "Hit!");
        assert_eq!(ShotOutcome::Sunk.to_string(), "Sunk!");
    }

    #[test]
    fn horizontal_scenario() {
        let mut field = Field::new(vec![((0, 0), (0, 2))]).unwrap();
        assert_eq!(field.fire((1, 1)), ShotOutcome::Miss);
        assert_eq!(field.fire((0, 0)), ShotOutcome::Hit);
        assert_eq!(field.fire((0, 1)), ShotOutcome::Hit);
        assert_eq!(field.fire((0, 2)), ShotOutcome::Sunk);
        assert_eq!(field.fire((0, 0)), ShotOutcome::Sunk);
        assert!(field.all_sunk());
    }

    #[test]
    fn vertical_scenario() {
        let mut field = Field::new(vec![((2, 3), (4, 3))]).unwrap();
        assert_eq!(field.fire((3, 3)), ShotOutcome::Hit);
        assert_eq!(field.fire((2, 3)), ShotOutcome::Hit);
        assert_eq!(field.fire((4, 3)), ShotOutcome::Sunk);
    }

    #[test]
    fn single_deck_scenario() {
        let mut field = Field::new(vec![((5, 5), (5, 5))]).unwrap();
        assert_eq!(field.ship_at(Coordinate::new(5, 5)).map(Ship::len), Some(1));
        assert_eq!(field.fire((5, 5)), ShotOutcome::Sunk);
    }

    #[test]
    fn any_invalid_ship_aborts_construction() {
        let err = Field::new(vec![((0, 0), (0, 2)), ((1, 1), (3, 4)), ((5, 5), (5, 6))])
            .unwrap_err();
        assert_eq!(err.start(), Coordinate::new(1, 1));
        assert_eq!(err.end(), Coordinate::new(3, 4));
    }

    #[test]
    fn shots_reach_the_same_ship_from_every_cell() {
        let mut field = Field::new(vec![((0, 0), (0, 1)), ((3, 0), (3, 1))]).unwrap();
        assert_eq!(field.fire((0, 0)), ShotOutcome::Hit);
        assert_eq!(field.ship_at(Coordinate::new(0, 1)).unwrap().hits(), 1);
        assert_eq!(field.fire((0, 1)), ShotOutcome::Sunk);
        assert!(field.ship_at(Coordinate::new(0, 0)).unwrap().sunk());
        assert!(!field.all_sunk());
        assert_eq!(field.fire((3, 1)), ShotOutcome::Hit);
        assert_eq!(field.fire((3, 0)), ShotOutcome::Sunk);
        assert!(field.all_sunk());
    }

    #[test]
    fn negative_and_far_cells_miss() {
        let mut field = Field::new(vec![((0, 0), (0, 2))]).unwrap();
        assert_eq!(field.fire((-1, 0)), ShotOutcome::Miss);
        assert_eq!(field.fire((0, i32::MAX)), ShotOutcome::Miss);
        assert!(field.ships().all(|ship| ship.hits() == 0));
    }

    #[test]
    fn overlapped_cell_goes_to_later_ship() {
        let mut field = Field::new(vec![((0, 0), (0, 2)), ((0, 1), (1, 1))]).unwrap();
        assert_eq!(field.fire((0, 1)), ShotOutcome::Hit);
        assert_eq!(field.fire((1, 1)), ShotOutcome::Sunk);
        let first = field.ships().next().unwrap();
        assert_eq!(first.hits(), 0);
        assert!(first.get_deck(0, 1).unwrap().alive());
        // The first ship's deck under the overlap is unreachable, so it can never sink.
        assert_eq!(field.fire((0, 0)), ShotOutcome::Hit);
        assert_eq!(field.fire((0, 2)), ShotOutcome::Hit);
        assert!(!field.all_sunk());
    }

    #[test]
    fn empty_field() {
        let mut field = FieldSetup::new().finish();
        assert!(field.is_empty());
        assert!(field.all_sunk());
        assert_eq!(field.fire((0, 0)), ShotOutcome::Miss);
    }
}
