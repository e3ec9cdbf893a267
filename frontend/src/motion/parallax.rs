/// Maximum travel is half of this in each direction.
pub const PARALLAX_STRENGTH: f64 = 20.0;
pub const PARALLAX_FOLLOW_MS: f64 = 600.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl From<web_sys::DomRect> for Bounds {
    fn from(rect: web_sys::DomRect) -> Self {
        Self {
            left: rect.left(),
            top: rect.top(),
            width: rect.width(),
            height: rect.height(),
        }
    }
}

/// Offset for a pointer at (`client_x`, `client_y`): the pointer's distance
/// from the box centre as a fraction of the box size, times `strength`.
pub fn parallax_offset(bounds: Bounds, client_x: f64, client_y: f64, strength: f64) -> (f64, f64) {
    let axis = |client: f64, start: f64, size: f64| {
        if size <= 0.0 {
            0.0
        } else {
            (client - start - size / 2.0) / size * strength
        }
    };
    (
        axis(client_x, bounds.left, bounds.width),
        axis(client_y, bounds.top, bounds.height),
    )
}
