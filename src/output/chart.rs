//! Pie chart rendering
//!
//! Renders the two-panel visualisation: found-vs-not-found proportions on
//! the left, per-path hit distribution on the right. Zero-valued slices
//! are passed to the chart call as-is.

use super::stats::RunStats;
use crate::{OutputError, OutputResult};
use chrono::NaiveDate;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

const FIGURE_SIZE: (u32, u32) = (1000, 560);
const PIE_RADIUS: f64 = 165.0;

/// Returns the dated chart file name, `<YYYY-MM-DD>_visualisation.png`
pub fn chart_file_name(date: NaiveDate) -> String {
    format!("{}_visualisation.png", date.format("%Y-%m-%d"))
}

/// Renders the visualisation to `<directory>/<date>_visualisation.png`
///
/// Creates the directory if absent. A rerun on the same date overwrites
/// the previous file.
///
/// # Arguments
///
/// * `stats` - Final run statistics
/// * `date` - Date stamp for the file name
/// * `directory` - Output directory
///
/// # Returns
///
/// * `Ok(PathBuf)` - Path of the written image
/// * `Err(OutputError)` - Directory creation or rendering failure
pub fn render_charts(
    stats: &RunStats,
    date: NaiveDate,
    directory: &Path,
) -> OutputResult<PathBuf> {
    fs::create_dir_all(directory).map_err(|source| OutputError::CreateDir {
        path: directory.display().to_string(),
        source,
    })?;

    let file_path = directory.join(chart_file_name(date));
    {
        let root = BitMapBackend::new(&file_path, FIGURE_SIZE).into_drawing_area();
        root.fill(&WHITE).map_err(to_chart_error)?;

        let caption = format!(
            "Number of domains checked without errors: {}",
            stats.checked_without_errors()
        );
        let root = root
            .titled(&caption, ("sans-serif", 22))
            .map_err(to_chart_error)?;

        let panels = root.split_evenly((1, 2));

        let domain_sizes = vec![stats.found as f64, stats.not_found as f64];
        let domain_labels = vec![
            format!("Found: {}", stats.found),
            format!("Not found: {}", stats.not_found),
        ];
        draw_pie(
            &panels[0],
            "Domains with a security.txt",
            &domain_sizes,
            &domain_labels,
        )?;

        let path_sizes: Vec<f64> = stats
            .path_tally
            .counts()
            .iter()
            .map(|&count| count as f64)
            .collect();
        let path_labels: Vec<String> = stats
            .path_tally
            .iter()
            .map(|(path, count)| format!("Found {} at {}", count, path))
            .collect();
        draw_pie(
            &panels[1],
            "Paths with security.txt",
            &path_sizes,
            &path_labels,
        )?;

        root.present().map_err(to_chart_error)?;
    }

    Ok(file_path)
}

/// Draws one titled pie into a panel
fn draw_pie(
    panel: &DrawingArea<BitMapBackend<'_>, Shift>,
    title: &str,
    sizes: &[f64],
    labels: &[String],
) -> OutputResult<()> {
    let panel = panel
        .titled(title, ("sans-serif", 18))
        .map_err(to_chart_error)?;

    let (width, height) = panel.dim_in_pixel();
    let center = (width as i32 / 2, height as i32 / 2);
    let colors = slice_colors(sizes.len());

    let mut pie = Pie::new(&center, &PIE_RADIUS, sizes, &colors, labels);
    pie.start_angle(-90.0);
    pie.label_style(("sans-serif", 16).into_font().color(&BLACK));
    pie.percentages(("sans-serif", 14).into_font().color(&BLACK));

    panel.draw(&pie).map_err(to_chart_error)?;
    Ok(())
}

/// Cycles a small palette to cover the slice count
fn slice_colors(count: usize) -> Vec<RGBColor> {
    const PALETTE: [RGBColor; 4] = [
        RGBColor(87, 144, 252),
        RGBColor(248, 156, 32),
        RGBColor(122, 193, 66),
        RGBColor(228, 37, 54),
    ];
    (0..count).map(|i| PALETTE[i % PALETTE.len()]).collect()
}

fn to_chart_error<E: std::fmt::Display>(e: E) -> OutputError {
    OutputError::Chart(e.to_string())
}
