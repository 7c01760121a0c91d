//! Per-file conversion: classify the input, select a core, assemble the
//! output file.
//!
//! Output layout is core image bytes followed by the verbatim input bytes.
//! The derived output name is the input path truncated after its first '.'
//! plus `gba`.

use std::fs::File;
use std::io::{self, Write};

use thiserror::Error;

use crate::paths;
use crate::rom::{EmulatorKind, RomCategory};

/// Error raised while converting a single ROM file.
///
/// Every variant is local to its job: the batch driver reports it and moves
/// on to the next argument. A failed write leaves the partial output file in
/// place; nothing is rolled back.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Use a .gb, .gbc or .sgb file")]
    UnsupportedFileType,

    #[error("Input path has no '.': {path}")]
    InvalidInputPath { path: String },

    #[error("Could not open {path}: {source}")]
    InputOpen { path: String, source: io::Error },

    #[error("Could not create output file {path}: {source}")]
    OutputCreate { path: String, source: io::Error },

    #[error("Could not write emulator data: {source}")]
    EmulatorWrite { source: io::Error },

    #[error("Could not write rom data: {source}")]
    RomWrite { source: io::Error },
}

/// Summary of one successful conversion.
#[derive(Debug, Clone)]
pub struct Conversion {
    pub output_path: String,
    pub bytes_written: u64,
}

/// One command-line argument's conversion attempt.
///
/// Staging derives everything the report lines need without touching the
/// filesystem; [`Job::run`] performs the conversion.
#[derive(Debug, Clone, Copy)]
pub struct Job<'a> {
    pub input: &'a str,
    pub file_name: &'a str,
    pub category: RomCategory,
    pub emulator: EmulatorKind,
}

impl<'a> Job<'a> {
    /// Classify the input path and stage a conversion.
    pub fn stage(input: &'a str) -> Self {
        let file_name = paths::file_name(input);
        let category = RomCategory::from_file_name(file_name);
        let emulator = EmulatorKind::for_category(category);
        Job {
            input,
            file_name,
            category,
            emulator,
        }
    }

    /// Run the conversion end to end.
    ///
    /// An unsupported input fails before any filesystem access. Both file
    /// handles are scope-owned and released on every exit path.
    pub fn run(&self) -> Result<Conversion, ConvertError> {
        let Some(core) = self.emulator.core_image() else {
            return Err(ConvertError::UnsupportedFileType);
        };

        let mut input = File::open(self.input).map_err(|source| ConvertError::InputOpen {
            path: self.input.to_string(),
            source,
        })?;

        let output_path = paths::output_path(self.input)?;
        let mut output =
            File::create(&output_path).map_err(|source| ConvertError::OutputCreate {
                path: output_path.clone(),
                source,
            })?;

        output
            .write_all(core)
            .map_err(|source| ConvertError::EmulatorWrite { source })?;

        // A fresh handle reads from the start; io::copy moves the bytes in
        // bounded chunks.
        let rom_bytes = io::copy(&mut input, &mut output)
            .map_err(|source| ConvertError::RomWrite { source })?;

        tracing::debug!(
            input = self.input,
            output = output_path.as_str(),
            core_bytes = core.len(),
            rom_bytes,
            "conversion complete"
        );

        Ok(Conversion {
            output_path,
            bytes_written: core.len() as u64 + rom_bytes,
        })
    }
}

/// Convert one ROM file in a single call.
pub fn convert(input_path: &str) -> Result<Conversion, ConvertError> {
    Job::stage(input_path).run()
}
