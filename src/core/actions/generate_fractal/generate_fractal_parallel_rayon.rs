use rayon::prelude::*;

use crate::core::actions::cancellation::{
    CANCEL_CHECK_INTERVAL_PIXELS, CancelToken, Cancelled, NeverCancel,
};
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;

/// Evaluates every pixel in parallel using rayon's work-stealing scheduler.
///
/// Output is row-major and identical to
/// [`generate_fractal_serial`](crate::core::actions::generate_fractal::generate_fractal_serial::generate_fractal_serial).
/// For cancel-aware generation, use [`generate_fractal_parallel_rayon_cancelable`].
pub fn generate_fractal_parallel_rayon<Alg>(viewport: Viewport, algorithm: &Alg) -> Vec<Alg::Success>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Success: Send,
{
    match generate_fractal_parallel_rayon_cancelable(viewport, algorithm, &NeverCancel) {
        Ok(results) => results,
        Err(Cancelled) => unreachable!("NeverCancel token should never signal cancellation"),
    }
}

/// Like [`generate_fractal_parallel_rayon`], but polls `cancel` at the start of
/// each row and every [`CANCEL_CHECK_INTERVAL_PIXELS`] pixels within a row.
///
/// Cancellation is expected control flow for superseded frames, not an error
/// to display.
pub fn generate_fractal_parallel_rayon_cancelable<Alg, C>(
    viewport: Viewport,
    algorithm: &Alg,
    cancel: &C,
) -> Result<Vec<Alg::Success>, Cancelled>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Success: Send,
    C: CancelToken,
{
    if viewport.is_empty() {
        return Ok(Vec::new());
    }

    let width = viewport.width();

    let rows: Vec<Vec<Alg::Success>> = (0..viewport.height())
        .into_par_iter()
        .map(|y| {
            let mut row = Vec::with_capacity(width as usize);

            for x in 0..width {
                if x as usize % CANCEL_CHECK_INTERVAL_PIXELS == 0 && cancel.is_cancelled() {
                    return Err(Cancelled);
                }

                row.push(algorithm.compute(Point { x, y }));
            }

            Ok(row)
        })
        .collect::<Result<_, Cancelled>>()?;

    Ok(rows.into_iter().flatten().collect())
}
