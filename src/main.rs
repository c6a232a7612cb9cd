// Copyright 2021 System76 <info@system76.com>
// SPDX-License-Identifier: MPL-2.0

use pop_rect::*;

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let rects = [
        Rectangle::new(1, 1, 2560, 1440),
        Rectangle::from_point_size(Point::new(2560, 0), Size::new(1920, 1080)),
        // A reversed rectangle; negative extents are kept as-is.
        Rectangle::new(100, 100, -50, -25),
        Rectangle::new(0, 0, 5, 0),
        Rectangle::EMPTY,
    ];

    for rect in &rects {
        tracing::debug!(
            left = rect.left(),
            top = rect.top(),
            right = rect.right(),
            bottom = rect.bottom(),
            "edges"
        );

        tracing::info!(
            empty = rect.is_empty(),
            hash = rect.hash_code(),
            "rectangle {}",
            rect
        );

        println!("{}", rect);
    }
}
