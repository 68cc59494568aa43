use crate::foundation::core::Domain;

/// Project a domain value onto a pixel span.
///
/// Pure linear map: `span_px / domain.span() * (value - domain.min)`. The
/// offset is relative to the span's start; callers add gutter offsets and
/// flip the y direction themselves. Values outside the domain extrapolate
/// rather than clamp, and a zero-span domain divides by zero, so callers
/// widen degenerate domains first via
/// [`Domain::for_projection`](crate::Domain::for_projection).
pub fn to_pixel(domain: Domain, span_px: f64, value: f64) -> f64 {
    let px_per_unit = span_px / domain.span();
    px_per_unit * (value - domain.min)
}

#[cfg(test)]
#[path = "../../tests/unit/axis/projector.rs"]
mod tests;
