// Copyright (c) 2025, ImageMuse contributors
// SPDX-License-Identifier: BSD-3-Clause

//! Data model for the ImageMuse application.

pub mod bubble;
pub mod questions;
