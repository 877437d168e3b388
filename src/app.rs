// Copyright (c) 2025, ImageMuse contributors
// SPDX-License-Identifier: BSD-3-Clause

//! Main application state and egui App implementation.
//!
//! Two states: Empty (no image, the drop zone shows) and Annotated (image
//! plus question bubbles). Loading an image moves Empty to Annotated;
//! dismissing the image clears the image and every bubble together. All
//! state lives on the UI thread; background work (image ingestion, query
//! submission) reports back over mpsc channels polled each frame.

use crate::io::media::{self, LoadedImage};
use crate::models::bubble::BubbleSet;
use crate::models::questions::QUESTION_CATALOG;
use crate::net::client::{self, AskClient};
use crate::ui::canvas::{self, BubbleEdit, CanvasAction};
use crate::ui::{ask_bar, dropzone};
use crate::util::layout;
use std::sync::mpsc::{channel, Receiver};

/// Main application state.
pub struct MuseApp {
    /// Currently loaded image (display dimensions plus upload blob)
    image: Option<LoadedImage>,

    /// Texture for the loaded image
    image_texture: Option<egui::TextureHandle>,

    /// Question bubbles for the current image session
    bubbles: BubbleSet,

    /// Set when a fresh image is waiting for its first layout pass
    needs_layout: bool,

    /// Bubble currently being edited, if any
    edit: Option<BubbleEdit>,

    /// Free-text question in the ask bar
    question: String,

    /// Most recent description returned by the ask endpoint
    description: Option<String>,

    /// Blocking notice shown to the user (precondition or load failure)
    notice: Option<String>,

    /// Receiver for background image ingestion
    image_loader: Option<Receiver<Result<LoadedImage, String>>>,

    /// Receiver for the in-flight submission; doubles as the loading flag
    ask_in_flight: Option<Receiver<String>>,
}

impl Default for MuseApp {
    fn default() -> Self {
        Self::new()
    }
}

impl MuseApp {
    pub fn new() -> Self {
        Self {
            image: None,
            image_texture: None,
            bubbles: BubbleSet::default(),
            needs_layout: false,
            edit: None,
            question: String::new(),
            description: None,
            notice: None,
            image_loader: None,
            ask_in_flight: None,
        }
    }

    /// Ingest an image file in the background.
    fn start_image_load(&mut self, path: std::path::PathBuf) {
        let (sender, receiver) = channel();
        self.image_loader = Some(receiver);

        std::thread::spawn(move || {
            let result = media::ingest_file(&path).map_err(|e| format!("{e:#}"));
            let _ = sender.send(result);
        });
    }

    /// Open the native picker and load the chosen file.
    fn pick_image_file(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Images", &["jpg", "jpeg", "png", "bmp", "gif", "webp"])
            .pick_file()
        {
            self.start_image_load(path);
        }
    }

    /// Install a freshly ingested image and queue the bubble layout.
    fn install_image(&mut self, mut loaded: LoadedImage, ctx: &egui::Context) {
        let size = [loaded.width as usize, loaded.height as usize];
        let pixels = std::mem::take(&mut loaded.pixels);
        let color_image = egui::ColorImage::from_rgba_unmultiplied(size, &pixels);
        self.image_texture = Some(ctx.load_texture(
            "loaded_image",
            color_image,
            egui::TextureOptions::LINEAR,
        ));

        log::info!(
            "Loaded image {} ({}x{})",
            loaded.file_name,
            loaded.width,
            loaded.height
        );

        self.image = Some(loaded);
        self.bubbles.clear();
        self.edit = None;
        self.needs_layout = true;
    }

    /// Drop the image and its bubbles in one transition.
    fn dismiss_image(&mut self) {
        self.image = None;
        self.image_texture = None;
        self.bubbles.clear();
        self.edit = None;
        self.needs_layout = false;
        log::info!("Image dismissed, bubbles cleared");
    }

    /// Seed the bubble set once the rendered container size is known.
    fn seed_bubbles(&mut self, width: f32, height: f32) {
        let positions = layout::radial_positions(
            QUESTION_CATALOG.len(),
            width,
            height,
            &mut rand::thread_rng(),
        );
        self.bubbles = BubbleSet::seed(QUESTION_CATALOG.iter().copied(), &positions);
        self.needs_layout = false;
        log::info!("Placed {} question bubbles", self.bubbles.len());
    }

    /// Submit the current image and question; at most one in flight.
    fn submit(&mut self) {
        if let Some(notice) = client::precondition_notice(self.image.is_some(), &self.question) {
            self.notice = Some(notice.to_string());
            return;
        }
        if self.ask_in_flight.is_some() {
            return;
        }
        let Some(image) = &self.image else {
            return;
        };

        let encoded = image.encoded.clone();
        let file_name = image.file_name.clone();
        let mime = image.mime.clone();
        let question = self.question.clone();

        let (sender, receiver) = channel();
        self.ask_in_flight = Some(receiver);

        std::thread::spawn(move || {
            let client = AskClient::from_env();
            let _ = sender.send(client.ask_or_fallback(encoded, file_name, &mime, &question));
        });
    }

    fn handle_canvas_action(&mut self, action: CanvasAction) {
        match action {
            CanvasAction::ContainerMeasured { width, height } => {
                self.seed_bubbles(width, height);
            }
            CanvasAction::DragBubble { id, dx, dy } => {
                self.bubbles.move_by(&id, dx, dy);
            }
            CanvasAction::BeginEdit { id } => {
                if let Some(bubble) = self.bubbles.get(&id) {
                    self.edit = Some(BubbleEdit {
                        id: id.clone(),
                        text: bubble.question.clone(),
                    });
                }
            }
            CanvasAction::CommitEdit { id, text } => {
                self.bubbles.set_question(&id, text);
                self.edit = None;
            }
            CanvasAction::DismissImage => {
                self.dismiss_image();
            }
            CanvasAction::None => {}
        }
    }
}


impl eframe::App for MuseApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Check for completed image ingestion
        if let Some(ref receiver) = self.image_loader {
            if let Ok(result) = receiver.try_recv() {
                self.image_loader = None;
                match result {
                    Ok(loaded) => self.install_image(loaded, ctx),
                    Err(e) => {
                        log::error!("Failed to load image: {e}");
                        self.notice = Some(e);
                    }
                }
            }
        }

        // Check for a finished submission
        if let Some(ref receiver) = self.ask_in_flight {
            if let Ok(description) = receiver.try_recv() {
                self.ask_in_flight = None;
                self.description = Some(description);
            }
        }

        // Keep polling while background work is outstanding
        if self.image_loader.is_some() || self.ask_in_flight.is_some() {
            ctx.request_repaint();
        }

        // Dropped files load a new image only from the empty state, matching
        // the drop zone the user sees.
        let hovering_files = ctx.input(|i| !i.raw.hovered_files.is_empty());
        if self.image.is_none() && self.image_loader.is_none() {
            let dropped = ctx.input(|i| i.raw.dropped_files.clone());
            if let Some(path) = dropped.into_iter().find_map(|f| f.path) {
                self.start_image_load(path);
            }
        }

        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Open Image...").clicked() {
                        self.pick_image_file();
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
            });
        });

        // Blocking notice (precondition violations, load failures)
        if let Some(notice) = self.notice.clone() {
            egui::Window::new("Notice")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
                .show(ctx, |ui| {
                    ui.label(&notice);
                    ui.add_space(8.0);
                    if ui.button("OK").clicked() {
                        self.notice = None;
                    }
                });
        }

        // Ask bar, only while an image is loaded
        if self.image.is_some() {
            let mut submit = false;
            egui::TopBottomPanel::bottom("ask_bar").show(ctx, |ui| {
                ui.add_space(4.0);
                if let ask_bar::AskBarAction::Submit =
                    ask_bar::show(ui, &mut self.question, self.ask_in_flight.is_some())
                {
                    submit = true;
                }
                ui.add_space(4.0);
            });
            if submit {
                self.submit();
            }
        }

        // Description readout; survives image dismissal like the rest of the
        // submission state.
        if let Some(description) = self.description.clone() {
            egui::TopBottomPanel::bottom("description").show(ctx, |ui| {
                ui.add_space(4.0);
                ask_bar::description_panel(ui, &description);
                ui.add_space(4.0);
            });
        }

        // Main canvas (center)
        let canvas_action = egui::CentralPanel::default()
            .show(ctx, |ui| {
                if self.image_loader.is_some() {
                    ui.centered_and_justified(|ui| {
                        ui.spinner();
                    });
                    CanvasAction::None
                } else if let (Some(texture), Some(image)) = (&self.image_texture, &self.image) {
                    canvas::show(
                        ui,
                        texture,
                        (image.width, image.height),
                        &self.bubbles,
                        self.needs_layout,
                        &mut self.edit,
                    )
                } else {
                    if let dropzone::DropzoneAction::PickFile = dropzone::show(ui, hovering_files)
                    {
                        self.pick_image_file();
                    }
                    CanvasAction::None
                }
            })
            .inner;

        self.handle_canvas_action(canvas_action);
    }
}
