// Copyright 2021 System76 <info@system76.com>
// SPDX-License-Identifier: MPL-2.0

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A position on an integer grid.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, Default, From, Into, Hash, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Extents of a rectangular object. Negative values are permitted.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, Default, From, Into, Hash, PartialEq, Eq)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_from_tuple() {
        let point = Point::from((3, -4));
        assert_eq!(point, Point::new(3, -4));

        let (x, y): (i32, i32) = point.into();
        assert_eq!((x, y), (3, -4));
    }

    #[test]
    fn size_keeps_negative_extents() {
        let size = Size::from((-10, 0));
        assert_eq!(size.width, -10);
        assert_eq!(size.height, 0);
        assert_eq!(<(i32, i32)>::from(size), (-10, 0));
    }

    #[test]
    fn defaults_are_zero() {
        assert_eq!(Point::default(), Point::new(0, 0));
        assert_eq!(Size::default(), Size::new(0, 0));
    }
}
