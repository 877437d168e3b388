// Copyright (c) 2025, ImageMuse contributors
// SPDX-License-Identifier: BSD-3-Clause

//! Annotated-image canvas.
//!
//! Displays the loaded image letterboxed in the available space and floats
//! the question bubbles above it. Bubbles are dragged one at a time, scoped
//! to the pointer gesture that grabbed them, and edited through an overlay
//! opened by double-click.

use crate::models::bubble::{BubbleId, BubbleSet};

/// In-progress text edit for one bubble.
pub struct BubbleEdit {
    pub id: BubbleId,
    pub text: String,
}

/// Result of canvas interaction.
pub enum CanvasAction {
    None,
    /// The container has been laid out; positions can now be computed.
    ContainerMeasured { width: f32, height: f32 },
    /// One bubble moved by the pointer delta of the active drag.
    DragBubble { id: BubbleId, dx: f32, dy: f32 },
    /// Double-click on a bubble; open the edit overlay.
    BeginEdit { id: BubbleId },
    /// The edit overlay lost focus; apply the new text.
    CommitEdit { id: BubbleId, text: String },
    /// Remove the image and every bubble with it.
    DismissImage,
}

const BUBBLE_SIZE: egui::Vec2 = egui::vec2(200.0, 100.0);
const BUBBLE_PADDING: f32 = 8.0;

/// Display the image with its bubbles and handle pointer interactions.
pub fn show(
    ui: &mut egui::Ui,
    texture: &egui::TextureHandle,
    image_size: (u32, u32),
    bubbles: &BubbleSet,
    needs_layout: bool,
    edit: &mut Option<BubbleEdit>,
) -> CanvasAction {
    let mut action = CanvasAction::None;

    let (response, painter) = ui.allocate_painter(ui.available_size(), egui::Sense::hover());
    let canvas_rect = response.rect;

    painter.rect_filled(canvas_rect, 0.0, egui::Color32::from_gray(40));
    draw_image(&painter, canvas_rect, texture, image_size);

    // The initial layout needs the rendered container size; report it once
    // and let the caller seed the bubbles for the next frame.
    if needs_layout {
        return CanvasAction::ContainerMeasured {
            width: canvas_rect.width(),
            height: canvas_rect.height(),
        };
    }

    for bubble in bubbles.iter() {
        let being_edited = edit.as_ref().is_some_and(|e| e.id == bubble.id);
        if being_edited {
            continue;
        }

        let center = canvas_rect.min + egui::vec2(bubble.x, bubble.y);
        let rect = egui::Rect::from_center_size(center, BUBBLE_SIZE);

        let response = ui
            .interact(
                rect,
                ui.id().with(&bubble.id),
                egui::Sense::click_and_drag(),
            )
            .on_hover_cursor(egui::CursorIcon::Grab);

        draw_bubble(&painter, rect, &bubble.question, response.hovered());

        if response.double_clicked() {
            action = CanvasAction::BeginEdit {
                id: bubble.id.clone(),
            };
        } else if response.dragged() {
            let delta = response.drag_delta();
            if delta != egui::Vec2::ZERO {
                action = CanvasAction::DragBubble {
                    id: bubble.id.clone(),
                    dx: delta.x,
                    dy: delta.y,
                };
            }
        }
    }

    if let Some(edit_action) = show_edit_overlay(ui, canvas_rect, bubbles, edit) {
        action = edit_action;
    }

    // Dismiss button, top-right corner.
    let dismiss_pos = canvas_rect.right_top() + egui::vec2(-40.0, 12.0);
    egui::Area::new(ui.id().with("dismiss"))
        .fixed_pos(dismiss_pos)
        .order(egui::Order::Foreground)
        .show(ui.ctx(), |ui| {
            if ui
                .button(egui::RichText::new("\u{2715}").size(18.0))
                .on_hover_text("Remove image")
                .clicked()
            {
                action = CanvasAction::DismissImage;
            }
        });

    action
}

/// Letterbox the image into the canvas, centered.
fn draw_image(
    painter: &egui::Painter,
    canvas_rect: egui::Rect,
    texture: &egui::TextureHandle,
    (img_width, img_height): (u32, u32),
) {
    let available = canvas_rect.size();
    let img_aspect = img_width as f32 / img_height as f32;
    let available_aspect = available.x / available.y;

    let (display_width, display_height) = if img_aspect > available_aspect {
        (available.x, available.x / img_aspect)
    } else {
        (available.y * img_aspect, available.y)
    };

    let offset = (available - egui::vec2(display_width, display_height)) / 2.0;
    let image_rect = egui::Rect::from_min_size(
        canvas_rect.min + offset,
        egui::vec2(display_width, display_height),
    );

    painter.image(
        texture.id(),
        image_rect,
        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
        egui::Color32::WHITE,
    );
}

fn draw_bubble(painter: &egui::Painter, rect: egui::Rect, question: &str, hovered: bool) {
    let fill = if hovered {
        egui::Color32::WHITE
    } else {
        egui::Color32::from_gray(245)
    };
    painter.rect_filled(rect, 8.0, fill);
    painter.rect_stroke(
        rect,
        8.0,
        egui::Stroke::new(1.0, egui::Color32::from_gray(200)),
    );

    let text_rect = rect.shrink(BUBBLE_PADDING);
    let galley = painter.layout(
        question.to_string(),
        egui::FontId::proportional(13.0),
        egui::Color32::from_gray(60),
        text_rect.width(),
    );
    painter
        .with_clip_rect(text_rect)
        .galley(text_rect.min, galley, egui::Color32::from_gray(60));
}

/// Text edit overlay for the bubble currently being edited. Keystrokes land
/// in the edit buffer; the commit happens on focus loss and never touches
/// the bubble's position.
fn show_edit_overlay(
    ui: &mut egui::Ui,
    canvas_rect: egui::Rect,
    bubbles: &BubbleSet,
    edit: &mut Option<BubbleEdit>,
) -> Option<CanvasAction> {
    let edit = edit.as_mut()?;
    let bubble = bubbles.get(&edit.id)?;

    let center = canvas_rect.min + egui::vec2(bubble.x, bubble.y);
    let rect = egui::Rect::from_center_size(center, BUBBLE_SIZE);

    let mut action = None;

    egui::Area::new(ui.id().with("bubble_edit"))
        .fixed_pos(rect.min)
        .order(egui::Order::Foreground)
        .show(ui.ctx(), |ui| {
            ui.set_max_width(BUBBLE_SIZE.x);
            let response = ui.add(
                egui::TextEdit::multiline(&mut edit.text)
                    .desired_width(BUBBLE_SIZE.x)
                    .desired_rows(4),
            );
            if response.lost_focus() {
                action = Some(CanvasAction::CommitEdit {
                    id: edit.id.clone(),
                    text: edit.text.clone(),
                });
            } else {
                response.request_focus();
            }
        });

    action
}
