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

use crate::Error;

use std::fs;
use std::path::Path;

/// Reads one decimal integer per line from `path` and returns them in file
/// order. Lines that trim to empty are skipped; any other line that does not
/// parse as a base-10 integer fails the whole load.
pub fn load_samples<P: AsRef<Path>>(path: P) -> Result<Vec<i64>, Error> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(Error::FileNotFound(path.to_path_buf()));
    }

    let contents = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut samples = Vec::new();
    for (index, line) in contents.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let value = line.parse().map_err(|_| Error::MalformedValue {
            path: path.to_path_buf(),
            line: index + 1,
            value: line.to_owned(),
        })?;
        samples.push(value);
    }

    Ok(samples)
}
