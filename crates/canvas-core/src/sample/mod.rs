//! The sampling capability shared by every drawable source.

use std::rc::Rc;
use std::sync::Arc;

use crate::color::Color;

/// Anything that can report a color at a normalized coordinate.
///
/// The nominal domain is the unit square `[0, 1] x [0, 1]`, with `(0, 0)` at
/// the top-left corner. Implementations must accept any `f64` input and
/// return [`Color::TRANSPARENT`] outside the unit square (including NaN);
/// callers never pre-clip coordinates. Sampling has no side effects and
/// cannot fail.
///
/// # Example
///
/// ```
/// use canvas_core::{Color, Sampleable};
///
/// /// Horizontal black-to-white ramp.
/// struct Ramp;
///
/// impl Sampleable for Ramp {
///     fn color_at(&self, x: f64, y: f64) -> Color {
///         if !canvas_core::in_unit_square(x, y) {
///             return Color::TRANSPARENT;
///         }
///         Color::opaque(x)
///     }
/// }
///
/// assert_eq!(Ramp.color_at(0.25, 0.5), Color::opaque(0.25));
/// assert_eq!(Ramp.color_at(1.5, 0.5), Color::TRANSPARENT);
/// ```
pub trait Sampleable {
    /// Color at normalized coordinate `(x, y)`.
    fn color_at(&self, x: f64, y: f64) -> Color;
}

/// True when `(x, y)` lies inside the closed unit square. NaN is outside.
#[inline]
pub fn in_unit_square(x: f64, y: f64) -> bool {
    (0.0..=1.0).contains(&x) && (0.0..=1.0).contains(&y)
}

impl<S: Sampleable + ?Sized> Sampleable for &S {
    #[inline]
    fn color_at(&self, x: f64, y: f64) -> Color {
        (**self).color_at(x, y)
    }
}

impl<S: Sampleable + ?Sized> Sampleable for Box<S> {
    #[inline]
    fn color_at(&self, x: f64, y: f64) -> Color {
        (**self).color_at(x, y)
    }
}

impl<S: Sampleable + ?Sized> Sampleable for Rc<S> {
    #[inline]
    fn color_at(&self, x: f64, y: f64) -> Color {
        (**self).color_at(x, y)
    }
}

impl<S: Sampleable + ?Sized> Sampleable for Arc<S> {
    #[inline]
    fn color_at(&self, x: f64, y: f64) -> Color {
        (**self).color_at(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Solid(Color);

    impl Sampleable for Solid {
        fn color_at(&self, x: f64, y: f64) -> Color {
            if in_unit_square(x, y) {
                self.0
            } else {
                Color::TRANSPARENT
            }
        }
    }

    #[test]
    fn test_in_unit_square_bounds() {
        assert!(in_unit_square(0.0, 0.0));
        assert!(in_unit_square(1.0, 1.0));
        assert!(in_unit_square(0.5, 0.999));
        assert!(!in_unit_square(-0.0001, 0.5));
        assert!(!in_unit_square(0.5, 1.0001));
        assert!(!in_unit_square(f64::NAN, 0.5));
        assert!(!in_unit_square(0.5, f64::INFINITY));
    }

    #[test]
    fn test_dyn_dispatch_through_smart_pointers() {
        let solid = Solid(Color::opaque(0.75));
        let boxed: Box<dyn Sampleable> = Box::new(Solid(Color::opaque(0.75)));
        let shared: Rc<dyn Sampleable> = Rc::new(Solid(Color::opaque(0.75)));

        let sources: [&dyn Sampleable; 3] = [&solid, &boxed, &shared];
        for source in sources {
            assert_eq!(source.color_at(0.5, 0.5), Color::opaque(0.75));
            assert_eq!(source.color_at(2.0, 0.5), Color::TRANSPARENT);
        }
    }
}
