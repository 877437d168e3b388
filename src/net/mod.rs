// Copyright (c) 2025, ImageMuse contributors
// SPDX-License-Identifier: BSD-3-Clause

//! HTTP boundary: the submission client and the mock ask endpoint.

pub mod client;
pub mod server;
