// Copyright (c) 2025, ImageMuse contributors
// SPDX-License-Identifier: BSD-3-Clause

//! ImageMuse - drop an image, ask questions about it.
//!
//! A desktop tool that loads an image, scatters draggable question bubbles
//! around it, and submits the image together with a free-text question to a
//! backend endpoint that answers with a description. The `imagemuse` binary
//! is the GUI; `imagemuse-ask-server` is the bundled mock backend.

pub mod app;
pub mod io;
pub mod models;
pub mod net;
pub mod ui;
pub mod util;
