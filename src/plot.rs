//! Rendering of a [`Waveform`] over the integer lattice it lives on.
//! Only compiled with the `plot` feature; nothing else in the crate depends on it.
use std::error::Error;
use std::path::Path;

use log::debug;
use plotters::prelude::*;

use super::*;

/// Width and height of the rendered image in pixels
pub const PLOT_SIZE: (u32, u32) = (800, 800);

/// Draw every lattice point in [0, 250]² as a black pixel and overlay the
/// waveform as a line, written as a bitmap to `path`.
pub fn render_waveform<P: AsRef<Path>>(waveform: &Waveform, path: P) -> Result<(), Box<dyn Error>> {
    let root = BitMapBackend::new(path.as_ref(), PLOT_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(waveform.to_string(), ("sans-serif", 21).into_font())
        .margin(5)
        .x_label_area_size(30)
        .y_label_area_size(30)
        .build_cartesian_2d(-1i64..GRID_MAX + 1, -1i64..GRID_MAX + 1)?;

    chart.configure_mesh().disable_mesh().draw()?;

    // the lattice
    chart.draw_series(
        (0..=GRID_MAX)
            .flat_map(|x| (0..=GRID_MAX).map(move |y| (x, y)))
            .map(|coord| Pixel::new(coord, BLACK)),
    )?;

    // the waveform
    chart
        .draw_series(LineSeries::new(
            waveform.points().iter().map(|p| (p.x, p.y)),
            &BLUE,
        ))?
        .label(format!("performance {:.6}", waveform.performance()))
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    debug!("rendered {} to {}", waveform, path.as_ref().display());
    Ok(())
}

impl Waveform {
    /// Render this waveform over the lattice, see [`render_waveform`].
    pub fn plot_waveform<P: AsRef<Path>>(&self, path: P) -> Result<(), Box<dyn Error>> {
        render_waveform(self, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_square_to_png() {
        let path = std::env::temp_dir().join(format!(
            "lattice_wave_renders_square_{}.png",
            std::process::id()
        ));
        let wf = Waveform::new(250, 250, 0.5).unwrap();
        wf.plot_waveform(&path).unwrap();
        assert!(std::fs::metadata(&path).unwrap().len() > 0);
        let _ = std::fs::remove_file(&path);
    }
}
