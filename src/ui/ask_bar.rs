// Copyright (c) 2025, ImageMuse contributors
// SPDX-License-Identifier: BSD-3-Clause

//! Question input and submission controls, plus the description readout.

/// Result of ask bar interaction.
pub enum AskBarAction {
    None,
    /// Submit the current image and question.
    Submit,
}

/// Display the question input and submit button.
///
/// The button is disabled while a submission is in flight; pressing Enter in
/// the input submits as well.
pub fn show(ui: &mut egui::Ui, question: &mut String, is_loading: bool) -> AskBarAction {
    let mut action = AskBarAction::None;

    ui.horizontal(|ui| {
        let input = ui.add(
            egui::TextEdit::singleline(question)
                .hint_text("Ask a question about the photo...")
                .desired_width(ui.available_width() - 110.0),
        );
        if input.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) && !is_loading {
            action = AskBarAction::Submit;
        }

        let label = if is_loading { "Processing..." } else { "Submit" };
        if ui
            .add_enabled(!is_loading, egui::Button::new(label))
            .clicked()
        {
            action = AskBarAction::Submit;
        }
    });

    action
}

/// Display the most recent description returned by the ask endpoint.
pub fn description_panel(ui: &mut egui::Ui, description: &str) {
    ui.heading("Description:");
    ui.label(description);
}
