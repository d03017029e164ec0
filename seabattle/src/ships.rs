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
//! Ships and the decks they are made of.
use enumflags2::BitFlags;

use crate::{field::ShotOutcome, Coordinate, InvalidPlacement};

pub use self::deck::Deck;

mod deck;
mod linear;

/// Axis a ship lies along.
#[derive(BitFlags, Debug, Copy, Clone, Eq, PartialEq)]
#[repr(u8)]
pub enum Axis {
    /// All decks share a row; the ship is horizontal.
    Row = 0b01,
    /// All decks share a column; the ship is vertical.
    Column = 0b10,
}

/// A straight horizontal or vertical run of one or more [`Deck`]s.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Ship {
    /// Decks in order of increasing column (horizontal) or row (vertical).
    decks: Vec<Deck>,
}

impl Ship {
    /// Build the ship spanning the cells from `start` to `end`, inclusive. The ends may
    /// be given in either order and may be the same cell, giving a one-deck ship.
    /// Returns [`InvalidPlacement`] if the ends share neither a row nor a column.
    pub fn new<C: Into<Coordinate>>(start: C, end: C) -> Result<Self, InvalidPlacement> {
        let (start, end) = (start.into(), end.into());
        match linear::span(start, end) {
            Some(cells) => Ok(Self {
                decks: cells.into_iter().map(Deck::new).collect(),
            }),
            None => Err(InvalidPlacement::new(start, end)),
        }
    }

    /// Get an iterator over the decks of this ship.
    pub fn decks(&self) -> impl Iterator<Item = &Deck> {
        self.decks.iter()
    }

    /// Number of decks in this ship. Never zero.
    pub fn len(&self) -> usize {
        self.decks.len()
    }

    /// Number of decks that have been hit.
    pub fn hits(&self) -> usize {
        self.decks.iter().filter(|deck| !deck.alive()).count()
    }

    /// Check if this ship has been sunk.
    pub fn sunk(&self) -> bool {
        self.decks.iter().all(|deck| !deck.alive())
    }

    /// Whether one of this ship's decks is at the given coordinate.
    pub fn contains(&self, coord: Coordinate) -> bool {
        self.get_deck(coord.row, coord.column).is_some()
    }

    /// Axes this ship lies along. A one-deck ship lies along both.
    pub fn orientation(&self) -> BitFlags<Axis> {
        match self.decks.as_slice() {
            [first, .., last] if first.row() == last.row() => Axis::Row.into(),
            [_, .., _] => Axis::Column.into(),
            _ => Axis::Row | Axis::Column,
        }
    }

    /// Get the deck at the given cell, if this ship has one there.
    pub fn get_deck(&self, row: i32, column: i32) -> Option<&Deck> {
        self.decks.iter().find(|deck| deck.is_at(row, column))
    }

    /// Fire at the given cell of this ship. If there is no deck there, the shot misses
    /// and nothing changes. Otherwise the deck is marked hit and the result is
    /// [`ShotOutcome::Sunk`] if every deck is now hit, or [`ShotOutcome::Hit`] if not.
    /// The result only depends on the state after the shot, so firing at a deck that was
    /// already hit reports the same thing again.
    pub fn fire(&mut self, row: i32, column: i32) -> ShotOutcome {
        match self.decks.iter_mut().find(|deck| deck.is_at(row, column)) {
            None => ShotOutcome::Miss,
            Some(deck) => {
                deck.hit();
                if self.sunk() {
                    ShotOutcome::Sunk
                } else {
                    ShotOutcome::Hit
                }
            }
        }
    }
}

#[cfg(feature = "rng_gen")]
mod rng_gen {
    use rand::{
        distributions::{Distribution, Standard},
        Rng,
    };

    use super::Axis;

    impl Distribution<Axis> for Standard {
        fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Axis {
            if rng.gen() {
                Axis::Row
            } else {
                Axis::Column
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(ship: &Ship) -> Vec<(i32, i32)> {
        ship.decks().map(|deck| deck.coord().into()).collect()
    }

    #[test]
    fn horizontal_ship() {
        let ship = Ship::new((0, 2), (0, 0)).unwrap();
        assert_eq!(cells(&ship), vec![(0, 0), (0, 1), (0, 2)]);
        assert_eq!(ship.len(), 3);
        assert_eq!(ship.orientation(), BitFlags::from(Axis::Row));
        assert!(ship.decks().all(Deck::alive));
    }

    #[test]
    fn vertical_ship() {
        let ship = Ship::new((2, 3), (4, 3)).unwrap();
        assert_eq!(cells(&ship), vec![(2, 3), (3, 3), (4, 3)]);
        assert_eq!(ship.orientation(), BitFlags::from(Axis::Column));
    }

    #[test]
    fn single_deck_ship() {
        let ship = Ship::new((5, 5), (5, 5)).unwrap();
        assert_eq!(cells(&ship), vec![(5, 5)]);
        assert_eq!(ship.orientation(), Axis::Row | Axis::Column);
    }

    #[test]
    fn diagonal_ship_is_rejected() {
        let err = Ship::new((0, 0), (2, 2)).unwrap_err();
        assert_eq!(err.start(), Coordinate::new(0, 0));
        assert_eq!(err.end(), Coordinate::new(2, 2));
    }

    #[test]
    fn get_deck() {
        let ship = Ship::new((1, 1), (1, 3)).unwrap();
        let deck = ship.get_deck(1, 2).unwrap();
        assert_eq!((deck.row(), deck.column()), (1, 2));
        assert!(ship.get_deck(2, 2).is_none());
        assert!(ship.contains(Coordinate::new(1, 3)));
        assert!(!ship.contains(Coordinate::new(1, 4)));
    }

    #[test]
    fn fire_off_ship_misses_without_change() {
        let mut ship = Ship::new((0, 0), (0, 1)).unwrap();
        assert_eq!(ship.fire(3, 3), ShotOutcome::Miss);
        assert_eq!(ship.hits(), 0);
    }

    #[test]
    fn fire_until_sunk() {
        let mut ship = Ship::new((2, 3), (4, 3)).unwrap();
        assert_eq!(ship.fire(3, 3), ShotOutcome::Hit);
        assert!(!ship.get_deck(3, 3).unwrap().alive());
        assert_eq!(ship.fire(2, 3), ShotOutcome::Hit);
        assert!(!ship.sunk());
        assert_eq!(ship.fire(4, 3), ShotOutcome::Sunk);
        assert!(ship.sunk());
        assert_eq!(ship.hits(), 3);
    }

    #[test]
    fn refire_reports_current_state() {
        let mut ship = Ship::new((0, 0), (0, 1)).unwrap();
        assert_eq!(ship.fire(0, 0), ShotOutcome::Hit);
        assert_eq!(ship.fire(0, 0), ShotOutcome::Hit);
        assert_eq!(ship.hits(), 1);
        assert_eq!(ship.fire(0, 1), ShotOutcome::Sunk);
        assert_eq!(ship.fire(0, 0), ShotOutcome::Sunk);
    }

    #[cfg(feature = "rng_gen")]
    #[test]
    fn random_axis_produces_both() {
        use rand::{rngs::StdRng, Rng, SeedableRng};

        let mut rng = StdRng::seed_from_u64(11);
        let axes: Vec<Axis> = (0..64).map(|_| rng.gen()).collect();
        assert!(axes.contains(&Axis::Row));
        assert!(axes.contains(&Axis::Column));
    }
}
