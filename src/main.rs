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

use log::{error, Level};

use signalgraph::logger::Logger;
use signalgraph::{default_jobs, run};

use std::process;

fn main() {
    Logger::new()
        .label("signalgraph")
        .level(Level::Info)
        .init()
        .expect("Failed to initialize logger");

    if let Err(e) = run(&default_jobs()) {
        error!("{}", e);
        process::exit(1);
    }
}
