mod app;
mod constants;
mod error;
mod frame;
mod reactive;
mod selector;
mod sink;
mod state;
mod types;

use std::path::PathBuf;

use clap::Parser;
use constants::*;
use eframe::{NativeOptions, Result, run_native};
use eframe::egui::{Vec2, ViewportBuilder};
use app::{App, Layout};

#[derive(Parser)]
#[command(version, about = "Two color selectors with mirrored values and gated print buttons")]
struct Cli {
    /// Window to show
    #[arg(long, value_enum, default_value_t = Layout::Frame)]
    layout: Layout,

    /// JSON state file applied at startup
    #[arg(long)]
    state: Option<PathBuf>,
}

fn main() -> Result {
    env_logger::init();
    let cli = Cli::parse();

    let (width, height) = match cli.layout {
        Layout::Selector => (GUI_SELECTOR_WIDTH, GUI_SELECTOR_HEIGHT),
        Layout::Frame => (GUI_FRAME_WIDTH, GUI_FRAME_HEIGHT),
    };

    let options = NativeOptions {
        viewport: ViewportBuilder {
            inner_size: Some(Vec2::new(width + GUI_PADDING * 2.0, height + GUI_PADDING * 2.0)),
            resizable: Some(false),
            maximize_button: Some(false),
            ..Default::default()
        },
        ..Default::default()
    };

    log::info!("Starting with {:?} layout", cli.layout);

    run_native(
        GUI_WINDOW_TITLE,
        options,
        Box::new(move |_cc| Ok(Box::new(App::new(cli.layout, cli.state.as_deref())?))),
    )
}
