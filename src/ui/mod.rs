// Copyright (c) 2025, ImageMuse contributors
// SPDX-License-Identifier: BSD-3-Clause

//! UI components for the ImageMuse application.

pub mod ask_bar;
pub mod canvas;
pub mod dropzone;
