//! Shared numeric helpers for sampling and unit conversion.

/// Typographic points per inch.
pub const POINTS_PER_INCH: f64 = 72.0;

/// Returns `count` evenly spaced samples over `[start, end]`, endpoint included.
///
/// `count == 0` yields an empty vector and `count == 1` yields `[start]`.
pub fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (count - 1) as f64;
            (0..count)
                .map(|i| {
                    if i == count - 1 {
                        end
                    } else {
                        start + step * i as f64
                    }
                })
                .collect()
        }
    }
}

/// Converts a font size in points to pixels at the given resolution.
pub fn points_to_pixels(points: f64, dpi: u32) -> f64 {
    points * f64::from(dpi) / POINTS_PER_INCH
}

/// Converts a length in inches to a whole number of pixels (at least one).
pub fn inches_to_pixels(inches: f64, dpi: u32) -> u32 {
    let px = (inches * f64::from(dpi)).round();
    if px < 1.0 {
        1
    } else {
        px as u32
    }
}
