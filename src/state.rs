use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::StateError;
use crate::types::Rgba;

/// Plain snapshot of one selector's four fields.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SelectionState {
    pub top_name: String,
    pub top_color: Rgba,
    pub bottom_name: String,
    pub bottom_color: Rgba,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameState {
    pub left: SelectionState,
    pub right: SelectionState,
}

impl FrameState {
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), StateError> {
        let file = File::create(path)?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, StateError> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }
}
