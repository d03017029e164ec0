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
//! Rule engine for a single-player game of Battleship.
//!
//! Ships are placed by giving the two end cells of a horizontal or vertical line. A
//! [`Field`] indexes every cell occupied by a ship and resolves shots at those cells into
//! a [`ShotOutcome`].
//!
//! ```
//! use seabattle::{Field, ShotOutcome};
//!
//! let mut field = Field::new(vec![((0, 0), (0, 2))]).unwrap();
//! assert_eq!(field.fire((1, 1)), ShotOutcome::Miss);
//! assert_eq!(field.fire((0, 0)), ShotOutcome::Hit);
//! assert_eq!(field.fire((0, 1)), ShotOutcome::Hit);
//! assert_eq!(field.fire((0, 2)), ShotOutcome::Sunk);
//! assert_eq!(field.fire((0, 2)).to_string(), "Sunk!");
//! ```
//!
//! The engine imposes no board size and does not check ships for overlap. Both are left
//! to the caller.

pub use self::{
    coordinate::Coordinate,
    field::{Field, FieldSetup, InvalidPlacement, ShotOutcome},
    ships::{Axis, Deck, Ship},
};

#[cfg(feature = "rng_gen")]
pub use self::coordinate::UniformCoordinate;

mod coordinate;
pub mod field;
pub mod ships;
