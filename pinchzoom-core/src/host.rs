//! Seams to the host platform.
//!
//! The engine never touches platform types directly. The event source hands it
//! [`TouchInput`] samples and the layout collaborator measures [`Element`]s into
//! a [`Layout`] snapshot.

use crate::geometry::element_dimensions;
use crate::points::{Dims, Origin, Rect, TouchPoint};

/// A single touch-start/move/end sample from the event source.
pub trait TouchInput {
    /// Active touch points in delivery order.
    fn touches(&self) -> Vec<TouchPoint>;

    /// Whether the platform allows the default action to be suppressed.
    fn cancelable(&self) -> bool;

    /// Suppress the platform default (page zoom, pull-to-refresh).
    fn prevent_default(&self);

    /// Event time in milliseconds. Only differences between samples matter.
    fn time_stamp(&self) -> f64;
}

/// Something with a rendered size and an on-screen bounding box.
pub trait Element {
    /// Rendered width and height, ignoring any CSS transform.
    fn dimensions(&self) -> Dims;

    /// Bounding box in client coordinates.
    fn bounding_rect(&self) -> Rect;
}

/// Suppress the default action only when the event declares itself cancelable.
pub fn prevent_default_if_cancelable<E: TouchInput + ?Sized>(event: &E) {
    if event.cancelable() {
        event.prevent_default();
    }
}

/// Read-only snapshot of the container and content geometry.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Layout {
    /// Container bounding box in client coordinates
    pub container_rect: Rect,
    /// Container size used for bounds and fit computations
    pub container: Dims,
    /// Unscaled content size
    pub content: Dims,
}

impl Layout {
    pub fn new(container_rect: Rect, container: Dims, content: Dims) -> Self {
        Self {
            container_rect,
            container,
            content,
        }
    }

    /// Layout for a container whose top-left sits at the client origin.
    pub fn at_origin(container: Dims, content: Dims) -> Self {
        Self {
            container_rect: Rect::new(0.0, 0.0, container.width, container.height),
            container,
            content,
        }
    }

    /// Measure both elements fresh.
    pub fn measure<C: Element + ?Sized, I: Element + ?Sized>(container: &C, content: &I) -> Self {
        Self {
            container_rect: container.bounding_rect(),
            container: element_dimensions(container),
            content: element_dimensions(content),
        }
    }

    /// Top-left of the container in client coordinates.
    pub fn container_origin(&self) -> Origin {
        self.container_rect.origin()
    }
}
