use crate::error::{LentilError, Result};
use crate::pca_engine::PcaResult;

use log::info;
use matrix_util::common_io::mkdir;
use plotters::prelude::*;
use std::ops::Range;

/// Width and height of the whole figure in pixels
pub const FIGURE_SIZE: (u32, u32) = (1600, 2400);

const AXIS_NAMES: [&str; 3] = [
    "First Principal Component",
    "Second Principal Component",
    "Third Principal Component",
];

fn plot_err<E: std::fmt::Display>(e: E) -> LentilError {
    LentilError::Plot(e.to_string())
}

/// Data range padded by 10% on both sides, or by one unit if
/// all values coincide
pub fn padded_range(values: &[f64]) -> Range<f64> {
    let lb = values.iter().copied().fold(f64::INFINITY, f64::min);
    let ub = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    if !lb.is_finite() || !ub.is_finite() {
        return -1.0..1.0;
    }

    let pad = if ub > lb { 0.1 * (ub - lb) } else { 1.0 };
    (lb - pad)..(ub + pad)
}

///
/// Two stacked scatter plots of the sample scores, PC1 vs PC2 on
/// top and PC1 vs PC3 below, each point labelled by its sample.
///
/// * `result` - fitted components (at least three)
/// * `png_file` - output image
///
pub fn draw_score_panels(result: &PcaResult, png_file: &str) -> Result<()> {
    if result.num_components() < 3 {
        return Err(LentilError::Config(
            "plotting needs three principal components".into(),
        ));
    }

    mkdir(png_file).map_err(|e| LentilError::io(png_file, e))?;

    let root = BitMapBackend::new(png_file, FIGURE_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(plot_err)?;

    let panels = root.split_evenly((2, 1));
    let xx: Vec<f64> = result.scores.column(0).iter().copied().collect();

    for (panel, k) in panels.iter().zip([1_usize, 2]) {
        let yy: Vec<f64> = result.scores.column(k).iter().copied().collect();

        let mut chart = ChartBuilder::on(panel)
            .caption(
                format!("PCA of contact matrices: PC1 vs PC{}", k + 1),
                ("sans-serif", 36),
            )
            .margin(30)
            .x_label_area_size(70)
            .y_label_area_size(90)
            .build_cartesian_2d(padded_range(&xx), padded_range(&yy))
            .map_err(plot_err)?;

        chart
            .configure_mesh()
            .x_desc(AXIS_NAMES[0])
            .y_desc(AXIS_NAMES[k])
            .axis_desc_style(("sans-serif", 24))
            .draw()
            .map_err(plot_err)?;

        chart
            .draw_series(
                xx.iter()
                    .zip(yy.iter())
                    .zip(result.samples.iter())
                    .map(|((&x, &y), name)| {
                        EmptyElement::at((x, y))
                            + Circle::new((0, 0), 6, BLUE.filled())
                            + Text::new(name.to_string(), (8, -8), ("sans-serif", 20).into_font())
                    }),
            )
            .map_err(plot_err)?;
    }

    root.present().map_err(plot_err)?;
    info!("wrote plots: {}", png_file);
    Ok(())
}
