//! The color selector: two named colors and a validity flag.

use crate::constants::DEFAULT_COLOR;
use crate::reactive::{derive2, Property, ReadOnlyProperty};
use crate::sink::OutputSink;
use crate::state::SelectionState;
use crate::types::Rgba;

pub struct ColorSelection {
    top_name: Property<String>,
    bottom_name: Property<String>,
    top_color: Property<Rgba>,
    bottom_color: Property<Rgba>,
    has_valid_values: ReadOnlyProperty<bool>,
}

impl Default for ColorSelection {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorSelection {
    pub fn new() -> Self {
        let top_name = Property::new(String::new());
        let bottom_name = Property::new(String::new());
        let has_valid_values = derive2(&top_name, &bottom_name, |top, bottom| {
            !top.is_empty() && !bottom.is_empty()
        });

        Self {
            top_name,
            bottom_name,
            top_color: Property::new(DEFAULT_COLOR),
            bottom_color: Property::new(DEFAULT_COLOR),
            has_valid_values,
        }
    }

    pub fn top_name(&self) -> &Property<String> {
        &self.top_name
    }

    pub fn bottom_name(&self) -> &Property<String> {
        &self.bottom_name
    }

    pub fn top_color(&self) -> &Property<Rgba> {
        &self.top_color
    }

    pub fn bottom_color(&self) -> &Property<Rgba> {
        &self.bottom_color
    }

    /// True iff both names are non-empty.
    pub fn has_valid_values(&self) -> &ReadOnlyProperty<bool> {
        &self.has_valid_values
    }

    pub fn is_print_disabled(&self) -> bool {
        !self.has_valid_values.get()
    }

    /// Writes `"<name>: <color>"` for the top slot, then the bottom slot.
    pub fn write_values(&self, sink: &mut dyn OutputSink) {
        for (name, color) in [
            (&self.top_name, &self.top_color),
            (&self.bottom_name, &self.bottom_color),
        ] {
            sink.write_line(&format!("{}: {}", name.get(), color.get()));
        }
    }

    /// The Print button. Ignored while the button is disabled.
    pub fn press_print(&self, sink: &mut dyn OutputSink) -> bool {
        if self.is_print_disabled() {
            log::debug!("Print pressed while disabled, ignoring");
            return false;
        }
        self.write_values(sink);
        true
    }

    pub fn snapshot(&self) -> SelectionState {
        SelectionState {
            top_name: self.top_name.get(),
            top_color: self.top_color.get(),
            bottom_name: self.bottom_name.get(),
            bottom_color: self.bottom_color.get(),
        }
    }

    pub fn apply(&self, state: &SelectionState) {
        self.top_name.set(state.top_name.clone());
        self.top_color.set(state.top_color);
        self.bottom_name.set(state.bottom_name.clone());
        self.bottom_color.set(state.bottom_color);
    }
}
