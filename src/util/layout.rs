// Copyright (c) 2025, ImageMuse contributors
// SPDX-License-Identifier: BSD-3-Clause

//! Initial radial bubble layout.
//!
//! Bubbles are distributed uniformly on a circle around the container
//! center, with a small random angular jitter so that a full catalog does
//! not render as a perfectly regular ring.

use rand::Rng;
use std::f32::consts::TAU;

/// Fraction of the half-extent used as the placement radius. Places bubbles
/// near the image edge without overflowing the visible container.
pub const RADIUS_FRACTION: f32 = 0.815;

/// Maximum angular jitter, in radians, applied to each bubble's base angle.
pub const ANGLE_JITTER: f32 = 0.1;

/// Compute center-point positions for `count` bubbles inside a container of
/// the given size. Positions are in container-local pixels.
pub fn radial_positions(
    count: usize,
    width: f32,
    height: f32,
    rng: &mut impl Rng,
) -> Vec<(f32, f32)> {
    let center_x = width / 2.0;
    let center_y = height / 2.0;
    let radius = center_x.min(center_y) * RADIUS_FRACTION;

    (0..count)
        .map(|i| {
            let base = (i as f32 / count as f32) * TAU;
            let angle = base + rng.gen_range(-ANGLE_JITTER..=ANGLE_JITTER);
            (
                center_x + radius * angle.cos(),
                center_y + radius * angle.sin(),
            )
        })
        .collect()
}
