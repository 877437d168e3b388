// Copyright (c) 2025, ImageMuse contributors
// SPDX-License-Identifier: BSD-3-Clause

//! Empty-state drop target.
//!
//! Shown while no image is loaded: a dashed square that accepts a dropped
//! file or opens the native picker on click. Highlights while files hover
//! over the window.

/// Result of drop zone interaction.
pub enum DropzoneAction {
    None,
    /// The user clicked the zone; open the file picker.
    PickFile,
}

const ZONE_SIDE: f32 = 256.0;
const DASH_LEN: f32 = 10.0;
const GAP_LEN: f32 = 6.0;

/// Display the drop target and report clicks.
pub fn show(ui: &mut egui::Ui, hovering_files: bool) -> DropzoneAction {
    let mut action = DropzoneAction::None;

    let available = ui.available_size();
    let (outer_rect, _) = ui.allocate_exact_size(available, egui::Sense::hover());
    let zone = egui::Rect::from_center_size(
        outer_rect.center(),
        egui::vec2(ZONE_SIDE, ZONE_SIDE),
    );

    let response = ui.interact(zone, ui.id().with("dropzone"), egui::Sense::click());
    if response.clicked() {
        action = DropzoneAction::PickFile;
    }

    let border = if hovering_files || response.hovered() {
        egui::Color32::from_rgb(80, 140, 255)
    } else {
        egui::Color32::from_gray(120)
    };

    let painter = ui.painter();
    if hovering_files {
        painter.rect_filled(zone, 8.0, egui::Color32::from_rgba_unmultiplied(80, 140, 255, 30));
    }

    // Dashed border, one edge at a time.
    let stroke = egui::Stroke::new(3.0, border);
    let corners = [
        zone.left_top(),
        zone.right_top(),
        zone.right_bottom(),
        zone.left_bottom(),
    ];
    for i in 0..4 {
        painter.extend(egui::Shape::dashed_line(
            &[corners[i], corners[(i + 1) % 4]],
            stroke,
            DASH_LEN,
            GAP_LEN,
        ));
    }

    painter.text(
        zone.center() - egui::vec2(0.0, 24.0),
        egui::Align2::CENTER_CENTER,
        "\u{2193}",
        egui::FontId::proportional(48.0),
        border,
    );
    painter.text(
        zone.center() + egui::vec2(0.0, 28.0),
        egui::Align2::CENTER_CENTER,
        "Drop any image here or click to upload",
        egui::FontId::proportional(14.0),
        egui::Color32::from_gray(160),
    );

    action
}
