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

use std::path::PathBuf;

/// One chart to produce: the sample file to read, the caption for the chart,
/// and the image path to write.
#[derive(Clone, Debug)]
pub struct ChartJob {
    pub source: PathBuf,
    pub title: String,
    pub output: PathBuf,
}

impl ChartJob {
    pub fn new(
        source: impl Into<PathBuf>,
        title: impl Into<String>,
        output: impl Into<PathBuf>,
    ) -> Self {
        Self {
            source: source.into(),
            title: title.into(),
            output: output.into(),
        }
    }
}

/// The conventional file pairs, resolved against the working directory. The
/// filtered results file is produced by a separate tool and may be absent.
pub fn default_jobs() -> Vec<ChartJob> {
    vec![
        ChartJob::new(
            "input_vectors.txt",
            "input signal (input_vectors)",
            "input.png",
        ),
        ChartJob::new(
            "output_results.txt",
            "filtered output signal (output_results)",
            "output.png",
        ),
    ]
}
