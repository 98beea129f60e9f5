use std::path::Path;

use eframe::egui::{Button, CentralPanel, Context, Grid, TopBottomPanel, Ui, Visuals};
use eframe::{App as EguiApp, Frame};
use crate::app::color_input::*;
use crate::error::StateError;
use crate::frame::{FrameView, PrintTrigger, Slot};
use crate::selector::ColorSelection;
use crate::sink::{OutputSink, StdoutSink};
use crate::state::FrameState;

/// Which window to show: the lone selector or the finished frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum Layout {
    Selector,
    Frame,
}

enum Content {
    Selector(ColorSelection),
    Frame(FrameView),
}

pub struct App {
    content: Content,
    sink: StdoutSink,
    theme: Theme,
}

impl App {
    /// Builds the window contents, applying `initial_state` if given.
    /// A state file that cannot be loaded aborts construction.
    pub fn new(layout: Layout, initial_state: Option<&Path>) -> Result<Self, StateError> {
        let state = match initial_state {
            Some(path) => {
                let state = FrameState::load(path)?;
                log::info!("Loaded initial state from {}", path.display());
                Some(state)
            }
            None => None,
        };

        let content = match layout {
            Layout::Selector => {
                let selection = ColorSelection::new();
                if let Some(state) = &state {
                    selection.apply(&state.left);
                }
                Content::Selector(selection)
            }
            Layout::Frame => {
                let frame = FrameView::new(ColorSelection::new(), ColorSelection::new());
                if let Some(state) = &state {
                    frame.apply(state);
                }
                Content::Frame(frame)
            }
        };

        Ok(Self {
            content,
            sink: StdoutSink,
            theme: Theme::Light,
        })
    }
}

impl EguiApp for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        match &self.content {
            Content::Selector(selection) => {
                CentralPanel::default().show(ctx, |ui| {
                    selector_content(ui, selection, &mut self.sink);
                });
            }
            Content::Frame(frame) => {
                TopBottomPanel::top("menu_panel").show(ctx, |ui| {
                    menu_content(ui, frame, &mut self.theme);
                });
                TopBottomPanel::bottom("print_panel").show(ctx, |ui| {
                    print_buttons(ui, frame, &mut self.sink);
                });
                CentralPanel::default().show(ctx, |ui| {
                    frame_content(ui, frame, &mut self.sink);
                });
            }
        }

        ctx.set_visuals(self.theme.visuals());
    }
}

fn selector_content(ui: &mut Ui, selection: &ColorSelection, sink: &mut dyn OutputSink) {
    color_input(ui, "Top", selection.top_name(), selection.top_color());
    color_input(ui, "Bottom", selection.bottom_name(), selection.bottom_color());

    let enabled = selection.has_valid_values().get();
    if ui.add_enabled(enabled, Button::new("Print")).clicked() {
        selection.press_print(sink);
    }
}

fn menu_content(ui: &mut Ui, frame: &FrameView, theme: &mut Theme) {
    ui.horizontal(|ui| {
        if ui.button("Save").clicked() {
            if let Some(path) = rfd::FileDialog::new().add_filter("JSON", &["json"]).save_file() {
                match frame.snapshot().save(&path) {
                    Ok(()) => log::info!("Saved state to {}", path.display()),
                    Err(e) => log::error!("Failed to save state: {}", e),
                }
            }
        }
        if ui.button("Load").clicked() {
            if let Some(path) = rfd::FileDialog::new().add_filter("JSON", &["json"]).pick_file() {
                match FrameState::load(&path) {
                    Ok(state) => {
                        frame.apply(&state);
                        log::info!("Loaded state from {}", path.display());
                    }
                    Err(e) => log::error!("Failed to load state: {}", e),
                }
            }
        }

        ui.separator();
        ui.radio_value(theme, Theme::Light, "Light");
        ui.radio_value(theme, Theme::Dark, "Dark");
    });
}

fn frame_content(ui: &mut Ui, frame: &FrameView, sink: &mut dyn OutputSink) {
    ui.columns(2, |columns| {
        columns[0].push_id("left_selector", |ui| {
            ui.heading("Left");
            selector_content(ui, frame.left(), sink);
        });
        columns[1].push_id("right_selector", |ui| {
            ui.heading("Right");
            selector_content(ui, frame.right(), sink);
        });
    });

    ui.separator();

    Grid::new("mirrors").num_columns(2).show(ui, |ui| {
        for pair in Slot::ALL.chunks(2) {
            for &slot in pair {
                color_display(ui, &frame.label(slot), &frame.swatch(slot));
            }
            ui.end_row();
        }
    });
}

fn print_buttons(ui: &mut Ui, frame: &FrameView, sink: &mut dyn OutputSink) {
    ui.horizontal(|ui| {
        for (trigger, text) in [
            (PrintTrigger::Left, "Print Left"),
            (PrintTrigger::Both, "Print Both"),
            (PrintTrigger::Right, "Print Right"),
        ] {
            if ui.add_enabled(frame.is_enabled(trigger), Button::new(text)).clicked() {
                frame.press(trigger, sink);
            }
        }
    });
}

#[derive(PartialEq)]
enum Theme {
    Light,
    Dark,
}

impl Theme {
    fn visuals(&self) -> Visuals {
        match self {
            Theme::Light => Visuals::light(),
            Theme::Dark => Visuals::dark(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::SelectionState;
    use crate::types::Rgba;

    #[test]
    fn missing_initial_state_fails_construction() {
        let dir = tempfile::tempdir().unwrap();
        let result = App::new(Layout::Frame, Some(dir.path().join("nope.json").as_path()));
        assert!(matches!(result, Err(StateError::Io(_))));
    }

    #[test]
    fn initial_state_is_applied_to_the_frame() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        let state = FrameState {
            left: SelectionState {
                top_name: "Red".into(),
                top_color: Rgba::rgb(255, 0, 0),
                bottom_name: "Blue".into(),
                bottom_color: Rgba::rgb(0, 0, 255),
            },
            right: SelectionState::default(),
        };
        state.save(&path).unwrap();

        let app = App::new(Layout::Frame, Some(path.as_path())).unwrap();
        match app.content {
            Content::Frame(frame) => {
                assert_eq!(frame.snapshot(), state);
                assert!(frame.is_enabled(PrintTrigger::Left));
                assert!(!frame.is_enabled(PrintTrigger::Both));
            }
            Content::Selector(_) => panic!("expected the frame layout"),
        }
    }

    #[test]
    fn selector_layout_takes_the_left_state() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        let mut state = FrameState::default();
        state.left.top_name = "Red".into();
        state.save(&path).unwrap();

        let app = App::new(Layout::Selector, Some(path.as_path())).unwrap();
        match app.content {
            Content::Selector(selection) => assert_eq!(selection.top_name().get(), "Red"),
            Content::Frame(_) => panic!("expected the selector layout"),
        }
    }
}
