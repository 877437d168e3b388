// Copyright (c) 2025, ImageMuse contributors
// SPDX-License-Identifier: BSD-3-Clause

//! I/O operations for image ingestion.

pub mod media;
