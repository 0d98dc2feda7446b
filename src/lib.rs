//  Copyright 2019 Twitter, Inc
//
//  Licensed under the Apache License, Version 2.0 (the "License");
//  you may not use this file except in compliance with the License.
//  You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.

//! Loads integer signal samples from text files and renders them as PNG line
//! charts. The library calls share no state; concurrent calls writing the
//! same output path are a race (last write wins).

mod config;
mod load;
mod render;

pub mod logger;

pub use crate::config::{default_jobs, ChartJob};
pub use crate::load::load_samples;
pub use crate::render::render_chart;

use log::warn;
use thiserror::Error;

use std::path::PathBuf;

#[derive(Error, Debug)]
pub enum Error {
    #[error("file '{}' not found", .0.display())]
    FileNotFound(PathBuf),
    #[error("malformed value '{value}' on line {line} of '{}'", .path.display())]
    MalformedValue {
        path: PathBuf,
        line: usize,
        value: String,
    },
    #[error("failed to read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write chart '{}': {reason}", .path.display())]
    Render { path: PathBuf, reason: String },
}

/// Produces each chart in order. A job whose source file is missing is
/// skipped with a warning; any other failure aborts the whole run.
pub fn run(jobs: &[ChartJob]) -> Result<(), Error> {
    for job in jobs {
        if !job.source.exists() {
            warn!(
                "'{}' not found, chart not generated",
                job.source.display()
            );
            continue;
        }
        let samples = load_samples(&job.source)?;
        render_chart(&samples, &job.title, &job.output)?;
    }
    Ok(())
}
