// Copyright 2021 System76 <info@system76.com>
// SPDX-License-Identifier: MPL-2.0

//! An axis-aligned integer rectangle, stored as an origin and extents.

#[macro_use]
extern crate derive_more;

mod geom;
mod rect;

pub use self::geom::{Point, Size};
pub use self::rect::Rectangle;
