// Copyright 2021 System76 <info@system76.com>
// SPDX-License-Identifier: MPL-2.0

use crate::geom::{Point, Size};
use std::fmt::{self, Display};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The positioning and dimensions of a rectangular object.
///
/// Any combination of the four fields is valid, including zero or negative
/// extents. Edges are derived from the origin and extents rather than stored.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, Default, Hash, PartialEq, Eq)]
pub struct Rectangle {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rectangle {
    /// The rectangle with every field set to zero.
    pub const EMPTY: Rectangle = Rectangle::new(0, 0, 0, 0);

    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Places a rectangle of `size` with its origin at `point`.
    pub const fn from_point_size(point: Point, size: Size) -> Self {
        Self::new(point.x, point.y, size.width, size.height)
    }

    pub const fn location(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub const fn top(&self) -> i32 {
        self.y
    }

    pub const fn left(&self) -> i32 {
        self.x
    }

    /// `x + width`, wrapping on overflow.
    pub const fn right(&self) -> i32 {
        self.x.wrapping_add(self.width)
    }

    /// `y + height`, wrapping on overflow.
    pub const fn bottom(&self) -> i32 {
        self.y.wrapping_add(self.height)
    }

    /// True only when all four fields are zero.
    ///
    /// A zero-area rectangle away from the origin, or one with a single
    /// non-zero extent, is not empty.
    pub const fn is_empty(&self) -> bool {
        self.x == 0 && self.y == 0 && self.width == 0 && self.height == 0
    }

    /// A hash of the four fields that is stable across processes and builds.
    pub const fn hash_code(&self) -> i32 {
        let mut hash = self.x;
        hash = hash.wrapping_mul(397) ^ self.y;
        hash = hash.wrapping_mul(397) ^ self.width;
        hash.wrapping_mul(397) ^ self.height
    }
}

impl From<(Point, Size)> for Rectangle {
    fn from((point, size): (Point, Size)) -> Self {
        Self::from_point_size(point, size)
    }
}

impl Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{{X={},Y={},Width={},Height={}}}",
            self.x, self.y, self.width, self.height
        )
    }
}
