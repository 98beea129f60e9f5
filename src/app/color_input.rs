use eframe::egui::{Color32, Sense, TextEdit, Ui, Vec2};
use crate::constants::*;
use crate::reactive::{Property, ReadOnlyProperty};
use crate::types::Rgba;

/// Name field plus color button. Edits go through `Property::set` so
/// everything bound to them updates before the next widget is drawn.
pub fn color_input(ui: &mut Ui, label: &str, name: &Property<String>, color: &Property<Rgba>) {
    ui.horizontal(|ui| {
        ui.label(label);

        let mut text = name.get();
        if ui.add(TextEdit::singleline(&mut text)
            .hint_text("color name")
            .desired_width(GUI_NAME_INPUT_WIDTH))
            .changed()
        {
            name.set(text);
        }

        let mut rgba = color.get();
        if ui.color_edit_button_srgba_unmultiplied(&mut rgba.0).changed() {
            color.set(rgba);
        }
    });
}

/// Read-only label and filled rectangle.
pub fn color_display(ui: &mut Ui, label: &ReadOnlyProperty<String>, swatch: &ReadOnlyProperty<Rgba>) {
    ui.horizontal(|ui| {
        let (rect, _) = ui.allocate_exact_size(Vec2::splat(GUI_SWATCH_SIZE), Sense::hover());
        ui.painter().rect_filled(rect, 2.0, Color32::from(swatch.get()));
        label.with(|text| ui.label(text.as_str()));
    });
}
