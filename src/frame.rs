//! Two selectors side by side, their mirrored values and the print triggers.

use crate::constants::DEFAULT_COLOR;
use crate::reactive::{derive2_ro, Property, ReadOnlyProperty};
use crate::selector::ColorSelection;
use crate::sink::OutputSink;
use crate::state::FrameState;
use crate::types::Rgba;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PrintTrigger {
    Left,
    Right,
    Both,
}

/// Display position: first/second mirror the left selector's top/bottom,
/// third/fourth the right selector's.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Slot {
    First,
    Second,
    Third,
    Fourth,
}

impl Slot {
    pub const ALL: [Slot; 4] = [Slot::First, Slot::Second, Slot::Third, Slot::Fourth];

    fn index(self) -> usize {
        self as usize
    }
}

struct Mirror {
    label: Property<String>,
    swatch: Property<Rgba>,
}

impl Mirror {
    fn bound_to(name: &Property<String>, color: &Property<Rgba>) -> Self {
        let mirror = Self {
            label: Property::new(String::new()),
            swatch: Property::new(DEFAULT_COLOR),
        };
        name.bind(&mirror.label);
        color.bind(&mirror.swatch);
        mirror
    }
}

pub struct FrameView {
    left: ColorSelection,
    right: ColorSelection,
    mirrors: [Mirror; 4],
    print_left_enabled: ReadOnlyProperty<bool>,
    print_right_enabled: ReadOnlyProperty<bool>,
    print_both_enabled: ReadOnlyProperty<bool>,
}

impl FrameView {
    pub fn new(left: ColorSelection, right: ColorSelection) -> Self {
        let mirrors = [
            Mirror::bound_to(left.top_name(), left.top_color()),
            Mirror::bound_to(left.bottom_name(), left.bottom_color()),
            Mirror::bound_to(right.top_name(), right.top_color()),
            Mirror::bound_to(right.bottom_name(), right.bottom_color()),
        ];

        let print_left_enabled = left.has_valid_values().clone();
        let print_right_enabled = right.has_valid_values().clone();
        let print_both_enabled = derive2_ro(
            left.has_valid_values(),
            right.has_valid_values(),
            |left, right| *left && *right,
        );

        for (trigger, flag) in [
            (PrintTrigger::Left, &print_left_enabled),
            (PrintTrigger::Right, &print_right_enabled),
            (PrintTrigger::Both, &print_both_enabled),
        ] {
            flag.subscribe(move |enabled| {
                log::debug!("{:?} print trigger enabled: {}", trigger, enabled);
            });
        }

        Self {
            left,
            right,
            mirrors,
            print_left_enabled,
            print_right_enabled,
            print_both_enabled,
        }
    }

    pub fn left(&self) -> &ColorSelection {
        &self.left
    }

    pub fn right(&self) -> &ColorSelection {
        &self.right
    }

    pub fn label(&self, slot: Slot) -> ReadOnlyProperty<String> {
        self.mirrors[slot.index()].label.read_only()
    }

    pub fn swatch(&self, slot: Slot) -> ReadOnlyProperty<Rgba> {
        self.mirrors[slot.index()].swatch.read_only()
    }

    pub fn enabled(&self, trigger: PrintTrigger) -> &ReadOnlyProperty<bool> {
        match trigger {
            PrintTrigger::Left => &self.print_left_enabled,
            PrintTrigger::Right => &self.print_right_enabled,
            PrintTrigger::Both => &self.print_both_enabled,
        }
    }

    pub fn is_enabled(&self, trigger: PrintTrigger) -> bool {
        self.enabled(trigger).get()
    }

    /// Writes two lines per selector involved, left before right.
    pub fn write_values(&self, trigger: PrintTrigger, sink: &mut dyn OutputSink) {
        match trigger {
            PrintTrigger::Left => self.left.write_values(sink),
            PrintTrigger::Right => self.right.write_values(sink),
            PrintTrigger::Both => {
                self.left.write_values(sink);
                self.right.write_values(sink);
            }
        }
    }

    /// Press one of the three print buttons. Ignored while it is disabled.
    pub fn press(&self, trigger: PrintTrigger, sink: &mut dyn OutputSink) -> bool {
        if !self.is_enabled(trigger) {
            log::debug!("{:?} print pressed while disabled, ignoring", trigger);
            return false;
        }
        self.write_values(trigger, sink);
        true
    }

    pub fn snapshot(&self) -> FrameState {
        FrameState {
            left: self.left.snapshot(),
            right: self.right.snapshot(),
        }
    }

    pub fn apply(&self, state: &FrameState) {
        self.left.apply(&state.left);
        self.right.apply(&state.right);
    }
}

impl Default for FrameView {
    fn default() -> Self {
        Self::new(ColorSelection::new(), ColorSelection::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::SelectionState;

    const TRIGGERS: [PrintTrigger; 3] = [PrintTrigger::Left, PrintTrigger::Right, PrintTrigger::Both];

    fn set_names(selection: &ColorSelection, top: &str, bottom: &str) {
        selection.top_name().set(top.to_string());
        selection.bottom_name().set(bottom.to_string());
    }

    fn enabled(frame: &FrameView) -> [bool; 3] {
        TRIGGERS.map(|t| frame.is_enabled(t))
    }

    #[test]
    fn all_triggers_start_disabled() {
        let frame = FrameView::default();
        assert_eq!(enabled(&frame), [false, false, false]);
    }

    #[test]
    fn triggers_follow_validity_flags() {
        let names = [("", ""), ("Red", ""), ("", "Blue"), ("Red", "Blue")];
        for (lt, lb) in names {
            for (rt, rb) in names {
                let frame = FrameView::default();
                set_names(frame.left(), lt, lb);
                set_names(frame.right(), rt, rb);

                let left = frame.left().has_valid_values().get();
                let right = frame.right().has_valid_values().get();
                assert_eq!(enabled(&frame), [left, right, left && right]);
            }
        }
    }

    #[test]
    fn left_valid_right_invalid() {
        let frame = FrameView::default();
        set_names(frame.left(), "Red", "Blue");
        set_names(frame.right(), "Green", "");

        assert_eq!(enabled(&frame), [true, false, false]);
        let mut out: Vec<String> = Vec::new();
        assert!(!frame.press(PrintTrigger::Both, &mut out));
        assert!(!frame.press(PrintTrigger::Right, &mut out));
        assert!(out.is_empty());
    }

    #[test]
    fn both_trigger_prints_four_lines_in_order() {
        let frame = FrameView::default();
        frame.apply(&FrameState {
            left: SelectionState {
                top_name: "Red".into(),
                top_color: Rgba::rgb(255, 0, 0),
                bottom_name: "Blue".into(),
                bottom_color: Rgba::rgb(0, 0, 255),
            },
            right: SelectionState {
                top_name: "Green".into(),
                top_color: Rgba::rgb(0, 255, 0),
                bottom_name: "Black".into(),
                bottom_color: Rgba::rgb(0, 0, 0),
            },
        });
        assert_eq!(enabled(&frame), [true, true, true]);

        let mut out: Vec<String> = Vec::new();
        assert!(frame.press(PrintTrigger::Both, &mut out));
        assert_eq!(
            out,
            vec![
                "Red: 0xff0000ff",
                "Blue: 0x0000ffff",
                "Green: 0x00ff00ff",
                "Black: 0x000000ff",
            ]
        );

        out.clear();
        assert!(frame.press(PrintTrigger::Right, &mut out));
        assert_eq!(out, vec!["Green: 0x00ff00ff", "Black: 0x000000ff"]);
    }

    #[test]
    fn mirrors_track_upstream_fields_immediately() {
        let frame = FrameView::default();
        let fields = [
            (frame.left().top_name(), frame.left().top_color()),
            (frame.left().bottom_name(), frame.left().bottom_color()),
            (frame.right().top_name(), frame.right().top_color()),
            (frame.right().bottom_name(), frame.right().bottom_color()),
        ];

        for (i, (slot, (name, color))) in Slot::ALL.into_iter().zip(fields).enumerate() {
            let value = i as u8 * 40;
            name.set(format!("name {i}"));
            color.set(Rgba::rgb(value, value, value));

            assert_eq!(frame.label(slot).get(), name.get());
            assert_eq!(frame.swatch(slot).get(), color.get());
        }

        frame.right().bottom_name().set(String::new());
        assert_eq!(frame.label(Slot::Fourth).get(), "");
        assert_eq!(frame.label(Slot::First).get(), "name 0");
    }

    #[test]
    fn apply_updates_mirrors_and_flags() {
        let frame = FrameView::default();
        let mut state = FrameState::default();
        state.left.top_name = "Red".into();
        state.left.bottom_name = "Blue".into();
        state.left.top_color = Rgba::rgb(255, 0, 0);
        frame.apply(&state);

        assert_eq!(frame.label(Slot::First).get(), "Red");
        assert_eq!(frame.swatch(Slot::First).get(), Rgba::rgb(255, 0, 0));
        assert_eq!(enabled(&frame), [true, false, false]);
        assert_eq!(frame.snapshot(), state);
    }
}
