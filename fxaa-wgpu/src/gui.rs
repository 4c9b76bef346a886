//! Parameter-editing surface (egui).

use crate::settings::FxaaSettings;

/// Id scope that keeps these widgets apart from sibling passes' controls.
pub const GUI_ID: &str = "GUI_FXAA";

impl FxaaSettings {
    /// Draw the FXAA controls. Returns true if any field changed this frame.
    /// Values are written through unvalidated.
    pub fn ui(&mut self, ui: &mut egui::Ui) -> bool {
        let changed = ui
            .push_id(GUI_ID, |ui| {
                let mut changed = ui.checkbox(&mut self.enabled, "Enabled").changed();
                changed |= float_input(
                    ui,
                    "AbsoluteLumaThreshold",
                    &mut self.params.absolute_luma_threshold,
                );
                changed |= float_input(
                    ui,
                    "RelativeLumaThreshold",
                    &mut self.params.relative_luma_threshold,
                );
                changed |= float_input(ui, "ConsoleSharpness", &mut self.params.console_sharpness);
                changed |= ui.checkbox(&mut self.params.debug_mode, "Debug Mode").changed();
                changed
            })
            .inner;

        if changed {
            log::debug!("FXAA settings edited: {:?}", self);
        }
        changed
    }
}

fn float_input(ui: &mut egui::Ui, label: &str, value: &mut f32) -> bool {
    ui.horizontal(|ui| {
        let response = ui.add(egui::DragValue::new(value).speed(0.01).max_decimals(4));
        ui.label(label);
        response.changed()
    })
    .inner
}
