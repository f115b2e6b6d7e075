/// Scale a `src_width x src_height` extent uniformly to a requested width and/or height.
///
/// With only one target the other side follows the source aspect ratio. With both, a single
/// axis is matched and the other follows: `fill` matches the source's longer axis, otherwise
/// its shorter axis (width for portrait and square sources). Without targets the source extent
/// is returned. Empty sources give `(0, 0)`.
pub fn fit_extent(
    src_width: u32,
    src_height: u32,
    width: Option<u32>,
    height: Option<u32>,
    fill: bool,
) -> (u32, u32) {
    let (width, height) = match (width, height) {
        (Some(w), Some(h)) => {
            let by_width = (fill && src_width > src_height) || (!fill && src_width <= src_height);
            if by_width {
                (Some(w), None)
            } else {
                (None, Some(h))
            }
        }
        other => other,
    };

    if src_width == 0 || src_height == 0 {
        return (0, 0);
    }

    let aspect = f64::from(src_height) / f64::from(src_width);
    match (width, height) {
        (Some(w), _) => (w, scale(w, aspect)),
        (None, Some(h)) => (scale(h, aspect.recip()), h),
        (None, None) => (src_width, src_height),
    }
}

fn scale(v: u32, factor: f64) -> u32 {
    // Saturating float-to-int cast.
    (f64::from(v) * factor).round() as u32
}

#[cfg(test)]
#[path = "../../tests/unit/layout/fit.rs"]
mod tests;
