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

/// Compute the cells of the straight line between two end cells, inclusive of both ends.
///
/// A line along a row is ordered by increasing column, a line along a column by
/// increasing row. If both ends are the same cell, the line is that single cell. Returns
/// `None` if the ends share neither a row nor a column.
pub(super) fn span(start: Coordinate, end: Coordinate) -> Option<Vec<Coordinate>> {
    if start.row == end.row {
        let (low, high) = ordered(start.column, end.column);
        Some(
            (low..=high)
                .map(|column| Coordinate::new(start.row, column))
                .collect(),
        )
    } else if start.column == end.column {
        let (low, high) = ordered(start.row, end.row);
        Some(
            (low..=high)
                .map(|row| Coordinate::new(row, start.column))
                .collect(),
        )
    } else {
        None
    }
}

fn ordered(a: i32, b: i32) -> (i32, i32) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
