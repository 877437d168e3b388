// Copyright (c) 2025, ImageMuse contributors
// SPDX-License-Identifier: BSD-3-Clause

//! Standalone mock backend for ImageMuse.
//!
//! Serves `POST /api/ask` on `IMAGEMUSE_BIND` (default `0.0.0.0:3000`).

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let bind = std::env::var("IMAGEMUSE_BIND").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let listener = tokio::net::TcpListener::bind(&bind).await?;
    log::info!("Ask stub listening on http://{bind}");

    axum::serve(listener, imagemuse::net::server::router()).await?;
    Ok(())
}
