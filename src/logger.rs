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

use chrono::Local;
use log::{Level, Log, Metadata, Record, SetLoggerError};

/// Timestamped stdout logger behind the `log` facade.
///
/// ```no_run
/// use signalgraph::logger::Logger;
///
/// Logger::new()
///     .label("signalgraph")
///     .level(log::Level::Info)
///     .init()
///     .expect("Failed to initialize logger");
/// ```
pub struct Logger {
    label: Option<String>,
    level: Level,
}

impl Logger {
    pub fn new() -> Self {
        Self {
            label: None,
            level: Level::Info,
        }
    }

    /// Label to display instead of the module path.
    pub fn label(mut self, label: &str) -> Self {
        self.label = Some(label.to_owned());
        self
    }

    pub fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    pub fn init(self) -> Result<(), SetLoggerError> {
        let filter = self.level.to_level_filter();
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(filter);
        Ok(())
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let label = self.label.as_deref().unwrap_or_else(|| record.target());
        println!(
            "{} {:<5} [{}] {}",
            Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
            record.level(),
            label,
            record.args()
        );
    }

    fn flush(&self) {}
}
