//! Pure touch geometry. No gesture history, no platform types.

use crate::host::Element;
use crate::points::{Dims, Origin, Rect, TouchPoint};

/// Euclidean distance between the first two touch points.
///
/// # Panics
///
/// Panics if fewer than two points are given. Callers check arity first.
pub fn pinch_length(touches: &[TouchPoint]) -> f64 {
    let (a, b) = (&touches[0], &touches[1]);
    (a.client_x - b.client_x).hypot(a.client_y - b.client_y)
}

/// Midpoint of the first two touch points, in client coordinates.
///
/// # Panics
///
/// Panics if fewer than two points are given.
pub fn pinch_center(touches: &[TouchPoint]) -> Origin {
    let (a, b) = (&touches[0], &touches[1]);
    Origin::new(
        (a.client_x + b.client_x) / 2.0,
        (a.client_y + b.client_y) / 2.0,
    )
}

/// Express a client-space point relative to the top-left of `rect`.
pub fn relative_coords(point: Origin, rect: &Rect) -> Origin {
    point.sub(&rect.origin())
}

/// Rendered size of an element, read fresh every call.
pub fn element_dimensions<E: Element + ?Sized>(element: &E) -> Dims {
    element.dimensions()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(ax: f64, ay: f64, bx: f64, by: f64) -> [TouchPoint; 2] {
        [TouchPoint::new(0, ax, ay), TouchPoint::new(1, bx, by)]
    }

    #[test]
    fn pinch_length_is_euclidean() {
        let touches = pair(0.0, 0.0, 30.0, 40.0);
        assert_eq!(pinch_length(&touches), 50.0);
    }

    #[test]
    fn pinch_length_is_symmetric_and_non_negative() {
        let samples = [
            (0.0, 0.0, 30.0, 40.0),
            (-12.0, 7.5, 3.25, -100.0),
            (5.0, 5.0, 5.0, 5.0),
        ];
        for (ax, ay, bx, by) in samples {
            let forward = pinch_length(&pair(ax, ay, bx, by));
            let backward = pinch_length(&pair(bx, by, ax, ay));
            assert_eq!(forward, backward);
            assert!(forward >= 0.0);
        }
    }

    #[test]
    fn pinch_length_ignores_extra_touches() {
        let touches = [
            TouchPoint::new(0, 0.0, 0.0),
            TouchPoint::new(1, 0.0, 10.0),
            TouchPoint::new(2, 500.0, 500.0),
        ];
        assert_eq!(pinch_length(&touches), 10.0);
    }

    #[test]
    fn pinch_center_is_order_independent_average() {
        let forward = pinch_center(&pair(10.0, 20.0, 30.0, 60.0));
        let backward = pinch_center(&pair(30.0, 60.0, 10.0, 20.0));

        assert_eq!(forward, Origin::new(20.0, 40.0));
        assert_eq!(forward, backward);
    }

    #[test]
    fn relative_coords_subtract_rect_origin() {
        let rect = Rect::new(100.0, 50.0, 400.0, 300.0);
        let relative = relative_coords(Origin::new(150.0, 80.0), &rect);

        assert_eq!(relative, Origin::new(50.0, 30.0));
    }

    #[test]
    fn relative_coords_can_be_negative_outside_rect() {
        let rect = Rect::new(100.0, 50.0, 400.0, 300.0);
        let relative = relative_coords(Origin::new(90.0, 40.0), &rect);

        assert_eq!(relative, Origin::new(-10.0, -10.0));
    }
}
