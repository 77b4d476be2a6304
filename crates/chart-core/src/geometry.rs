// File: crates/chart-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math.

use crate::types::Insets;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RectI32 {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl RectI32 {
    /// Plot area left after removing `insets` from a `width` x `height` surface.
    /// Never inverted: a surface smaller than its insets yields an empty rect.
    pub fn plot_area(width: i32, height: i32, insets: &Insets) -> Self {
        let left = insets.left as i32;
        let top = insets.top as i32;
        let right = (width - insets.right as i32).max(left);
        let bottom = (height - insets.bottom as i32).max(top);
        Self { left, top, right, bottom }
    }
    pub const fn width(&self) -> i32 { self.right - self.left }
    pub const fn height(&self) -> i32 { self.bottom - self.top }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_plot_area() {
        let r = RectI32::plot_area(800, 400, &Insets::default());
        assert_eq!(r, RectI32 { left: 70, top: 50, right: 770, bottom: 340 });
        assert_eq!((r.width(), r.height()), (700, 290));
    }

    #[test]
    fn tiny_surface_does_not_invert() {
        let r = RectI32::plot_area(50, 50, &Insets::default());
        assert_eq!(r.width(), 0);
        assert_eq!(r.height(), 0);
    }
}
