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
use std::fmt;

/// The coordinates of a single cell. Cells are addressed by `row` and `column`; there is
/// no board size, so any pair of integers, including negative ones, is a valid
/// coordinate.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Coordinate {
    /// Row of the cell.
    pub row: i32,
    /// Column of the cell.
    pub column: i32,
}

impl Coordinate {
    /// Construct a [`Coordinate`] from the given `row` and `column`.
    pub fn new(row: i32, column: i32) -> Self {
        Self { row, column }
    }
}

impl From<(i32, i32)> for Coordinate {
    /// Construct a [`Coordinate`] from the given `(row, column)` pair.
    fn from((row, column): (i32, i32)) -> Self {
        Self::new(row, column)
    }
}

impl From<Coordinate> for (i32, i32) {
    /// Convert the [`Coordinate`] into a `(row, column)` pair.
    fn from(coord: Coordinate) -> Self {
        (coord.row, coord.column)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

#[cfg(feature = "rng_gen")]
pub use self::rng_gen::UniformCoordinate;

#[cfg(feature = "rng_gen")]
mod rng_gen {
    use rand::{
        distributions::{
            uniform::{SampleBorrow, SampleUniform, Uniform, UniformSampler},
            Distribution,
        },
        Rng,
    };

    use super::Coordinate;

    /// Samples coordinates uniformly from a rectangle. Each axis is sampled
    /// independently, so `Uniform::new((0, 0).into(), (10, 10).into())` covers the 100
    /// cells of a 10x10 grid. Panics on construction if the rectangle is empty.
    #[derive(Debug, Copy, Clone)]
    pub struct UniformCoordinate {
        row: Uniform<i32>,
        column: Uniform<i32>,
    }

    impl UniformSampler for UniformCoordinate {
        type X = Coordinate;

        fn new<B1, B2>(low: B1, high: B2) -> Self
        where
            B1: SampleBorrow<Self::X> + Sized,
            B2: SampleBorrow<Self::X> + Sized,
        {
            let (low, high) = (low.borrow(), high.borrow());
            Self {
                row: Uniform::new(low.row, high.row),
                column: Uniform::new(low.column, high.column),
            }
        }

        fn new_inclusive<B1, B2>(low: B1, high: B2) -> Self
        where
            B1: SampleBorrow<Self::X> + Sized,
            B2: SampleBorrow<Self::X> + Sized,
        {
            let (low, high) = (low.borrow(), high.borrow());
            Self {
                row: Uniform::new_inclusive(low.row, high.row),
                column: Uniform::new_inclusive(low.column, high.column),
            }
        }

        fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Coordinate {
            Coordinate::new(self.row.sample(rng), self.column.sample(rng))
        }
    }

    impl SampleUniform for Coordinate {
        type Sampler = UniformCoordinate;
    }
}
