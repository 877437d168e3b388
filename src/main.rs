// Copyright (c) 2025, ImageMuse contributors
// SPDX-License-Identifier: BSD-3-Clause

//! ImageMuse - drop an image, ask questions about it.
//!
//! Desktop app that annotates a loaded image with draggable question
//! bubbles and submits image+question to an ask endpoint for a description.

use anyhow::Result;
use imagemuse::app::MuseApp;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    // Configure egui options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 720.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("ImageMuse"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "ImageMuse",
        options,
        Box::new(|_cc| Ok(Box::new(MuseApp::new()))),
    )
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
