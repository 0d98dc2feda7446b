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

use log::info;
use plotters::prelude::*;

use std::fmt::Display;
use std::path::Path;

// 10:4 figure rasterized at a 300 DPI equivalent.
const WIDTH: u32 = 3000;
const HEIGHT: u32 = 1200;

const LINE: RGBColor = RGBColor(0x00, 0x00, 0xaa);

/// Plots `samples` against their zero-based index and writes the chart as a
/// PNG at `output`, replacing any existing file. An empty sequence produces a
/// valid chart with no plotted line.
pub fn render_chart<P: AsRef<Path>>(
    samples: &[i64],
    title: &str,
    output: P,
) -> Result<(), Error> {
    let output = output.as_ref();

    let x_max = samples.len().max(1) as i64;
    let (y_min, y_max) = y_range(samples);

    let root = BitMapBackend::new(output, (WIDTH, HEIGHT)).into_drawing_area();
    root.fill(&WHITE).map_err(|e| render_error(output, e))?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 60))
        .margin(40)
        .set_label_area_size(LabelAreaPosition::Left, 120)
        .set_label_area_size(LabelAreaPosition::Bottom, 80)
        .build_cartesian_2d(0..x_max, y_min..y_max)
        .map_err(|e| render_error(output, e))?;

    chart
        .configure_mesh()
        .x_desc("sample index")
        .y_desc("amplitude")
        .light_line_style(&BLACK.mix(0.15))
        .axis_desc_style(("sans-serif", 40))
        .label_style(("sans-serif", 30))
        .draw()
        .map_err(|e| render_error(output, e))?;

    chart
        .draw_series(LineSeries::new(
            samples.iter().enumerate().map(|(i, &v)| (i as i64, v as f64)),
            LINE.stroke_width(2),
        ))
        .map_err(|e| render_error(output, e))?;

    // flushes the bitmap to disk; the backend is dropped on return
    root.present().map_err(|e| render_error(output, e))?;

    info!("saved chart to '{}'", output.display());
    Ok(())
}

// Keeps a visible band around flat or empty signals so the axes stay
// well-formed. The band is computed in f64: the span of samples at the i64
// bounds does not fit in i64.
fn y_range(samples: &[i64]) -> (f64, f64) {
    let min = samples.iter().copied().min().unwrap_or(0) as f64;
    let max = samples.iter().copied().max().unwrap_or(0) as f64;
    let pad = ((max - min) / 20.0).max(1.0);
    (min - pad, max + pad)
}

fn render_error(path: &Path, err: impl Display) -> Error {
    Error::Render {
        path: path.to_path_buf(),
        reason: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fs;

    const PNG_MAGIC: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

    #[test]
    fn renders_samples_to_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chart.png");
        render_chart(&[0, 100, -100, 0], "test signal", &path).unwrap();
        let bytes = fs::read(&path).unwrap();
        assert_eq!(&bytes[..8], &PNG_MAGIC);
    }

    #[test]
    fn empty_sequence_still_produces_a_chart() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.png");
        render_chart(&[], "no samples", &path).unwrap();
        let bytes = fs::read(&path).unwrap();
        assert_eq!(&bytes[..8], &PNG_MAGIC);
    }

    #[test]
    fn rerender_overwrites_existing_output() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chart.png");
        render_chart(&[1, 1, 1, 1], "first", &path).unwrap();
        let first = fs::read(&path).unwrap();
        render_chart(&[500, -500, 500, -500], "second", &path).unwrap();
        let second = fs::read(&path).unwrap();
        assert_eq!(&second[..8], &PNG_MAGIC);
        assert_ne!(first, second);
    }

    #[test]
    fn unwritable_destination_is_a_render_error() {
        let err = render_chart(&[1, 2], "test", "/no/such/dir/chart.png").unwrap_err();
        assert!(matches!(err, Error::Render { .. }));
    }

    #[test]
    fn flat_signal_keeps_a_nonempty_y_range() {
        let (min, max) = y_range(&[7, 7, 7]);
        assert!(min < 7.0 && max > 7.0);
    }

    #[test]
    fn extreme_samples_render_without_panicking() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("extreme.png");
        render_chart(&[i64::MIN, i64::MAX, 0], "full range", &path).unwrap();
        let bytes = fs::read(&path).unwrap();
        assert_eq!(&bytes[..8], &PNG_MAGIC);
    }

    #[test]
    fn extreme_samples_keep_a_finite_y_range() {
        let (min, max) = y_range(&[i64::MIN, i64::MAX]);
        assert!(min.is_finite() && max.is_finite());
        assert!(min < max);
    }
}
