//! Gallery navigation: category filter, lightbox selection, zoom.
//!
//! A [`GalleryNavigator`] borrows the catalog and owns one session's view
//! state. Every operation is a total function: calls made outside their
//! precondition (navigating with the lightbox closed, moving the zoom focus
//! while not zoomed, opening an id the catalog does not have) are ignored and
//! report `false`, never an error.
//!
//! ## Lightbox States
//!
//! ```text
//!            open(id)              toggle_zoom
//!   Closed ───────────▶ Open ◀──────────────────▶ Zoomed ──┐
//!     ▲                 │  ▲                         │     │ update_pointer
//!     └──── close ──────┘  └── next / previous ──────┘ ◀───┘
//!     └─────────────────── close ────────────────────┘
//! ```
//!
//! The zoom focus only exists inside [`Lightbox::Zoomed`], so a closed
//! lightbox cannot carry a stale zoom flag or pointer position. Navigation
//! always lands in `Open`: moving to another artwork resets zoom.
//!
//! ## Navigation Over a Changed Filter
//!
//! Changing the category leaves the selection alone. The next `next()` or
//! `previous()` walks the newly filtered list. If the selected artwork is no
//! longer visible, its index is taken as 0 before stepping, so `next()` lands
//! on the second visible artwork and `previous()` on the last one.

use crate::catalog::{Artwork, Catalog, CategoryFilter};
use serde::Serialize;

/// Zoom focal point as a fraction of the image box, each axis in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PointerFraction {
    x: f64,
    y: f64,
}

impl PointerFraction {
    pub const CENTER: PointerFraction = PointerFraction { x: 0.5, y: 0.5 };

    /// Build a fraction, clamping each axis into `[0, 1]`. NaN becomes the centre.
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x: clamp_unit(x),
            y: clamp_unit(y),
        }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    /// CSS `transform-origin` value, e.g. `"25.0% 80.0%"`.
    pub fn to_css_origin(&self) -> String {
        format!("{:.1}% {:.1}%", self.x * 100.0, self.y * 100.0)
    }
}

impl Default for PointerFraction {
    fn default() -> Self {
        Self::CENTER
    }
}

fn clamp_unit(v: f64) -> f64 {
    if v.is_nan() { 0.5 } else { v.clamp(0.0, 1.0) }
}

/// Bounding box of the displayed image, in the same units as pointer events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Lightbox state. Zoom and focus exist only while an artwork is selected.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Lightbox {
    #[default]
    Closed,
    Open {
        selected_id: u32,
    },
    Zoomed {
        selected_id: u32,
        focus: PointerFraction,
    },
}

impl Lightbox {
    pub fn selected_id(&self) -> Option<u32> {
        match *self {
            Lightbox::Closed => None,
            Lightbox::Open { selected_id } | Lightbox::Zoomed { selected_id, .. } => {
                Some(selected_id)
            }
        }
    }
}

/// Keys the lightbox listens to while open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    ArrowRight,
    ArrowLeft,
    Other,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` name. Anything unrecognized is `Other`.
    pub fn parse(name: &str) -> Self {
        match name.trim() {
            "Escape" | "Esc" => Key::Escape,
            "ArrowRight" | "Right" => Key::ArrowRight,
            "ArrowLeft" | "Left" => Key::ArrowLeft,
            _ => Key::Other,
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Step {
    Forward,
    Backward,
}

/// Snapshot handed to the presentation layer after each change.
#[derive(Debug, Clone, Serialize)]
pub struct GalleryView<'a> {
    pub active_category: CategoryFilter,
    pub visible_list: Vec<&'a Artwork>,
    pub selection: Option<&'a Artwork>,
    pub is_zoomed: bool,
    pub pointer_fraction: Option<PointerFraction>,
    pub category_counts: Vec<(CategoryFilter, usize)>,
}

#[derive(Debug, Clone)]
pub struct GalleryNavigator<'a> {
    catalog: &'a Catalog,
    active_category: CategoryFilter,
    lightbox: Lightbox,
}

impl<'a> GalleryNavigator<'a> {
    /// A fresh session: showing everything, lightbox closed.
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            active_category: CategoryFilter::All,
            lightbox: Lightbox::Closed,
        }
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    pub fn active_category(&self) -> &CategoryFilter {
        &self.active_category
    }

    pub fn lightbox(&self) -> Lightbox {
        self.lightbox
    }

    pub fn set_category(&mut self, filter: CategoryFilter) {
        tracing::debug!(from = %self.active_category, to = %filter, "set category");
        self.active_category = filter;
    }

    /// Artworks under the active filter, in catalog order.
    pub fn visible_list(&self) -> Vec<&'a Artwork> {
        self.catalog.filtered(&self.active_category)
    }

    pub fn selection(&self) -> Option<&'a Artwork> {
        self.lightbox
            .selected_id()
            .and_then(|id| self.catalog.get(id))
    }

    pub fn is_zoomed(&self) -> bool {
        matches!(self.lightbox, Lightbox::Zoomed { .. })
    }

    /// Current zoom focus; `None` unless zoomed.
    pub fn pointer(&self) -> Option<PointerFraction> {
        match self.lightbox {
            Lightbox::Zoomed { focus, .. } => Some(focus),
            _ => None,
        }
    }

    /// Open the lightbox on `id`. Ids missing from the catalog are ignored.
    pub fn open(&mut self, id: u32) -> bool {
        if !self.catalog.contains(id) {
            tracing::debug!(id, "open ignored: id not in catalog");
            return false;
        }
        self.transition(Lightbox::Open { selected_id: id }, "open")
    }

    pub fn close(&mut self) -> bool {
        self.transition(Lightbox::Closed, "close")
    }

    pub fn next(&mut self) -> bool {
        self.step(Step::Forward)
    }

    pub fn previous(&mut self) -> bool {
        self.step(Step::Backward)
    }

    fn step(&mut self, step: Step) -> bool {
        let Some(current) = self.lightbox.selected_id() else {
            return false;
        };
        let visible = self.visible_list();
        let len = visible.len();
        if len == 0 {
            return false;
        }
        // A selection filtered out of view counts as index 0.
        let index = visible.iter().position(|a| a.id == current).unwrap_or(0);
        let target = match step {
            Step::Forward => (index + 1) % len,
            Step::Backward => (index + len - 1) % len,
        };
        let selected_id = visible[target].id;
        self.transition(Lightbox::Open { selected_id }, "step")
    }

    pub fn toggle_zoom(&mut self) -> bool {
        let next = match self.lightbox {
            Lightbox::Closed => return false,
            Lightbox::Open { selected_id } => Lightbox::Zoomed {
                selected_id,
                focus: PointerFraction::CENTER,
            },
            Lightbox::Zoomed { selected_id, .. } => Lightbox::Open { selected_id },
        };
        self.transition(next, "toggle zoom")
    }

    /// Move the zoom focus. Ignored unless zoomed; values are clamped.
    pub fn update_pointer(&mut self, fraction: PointerFraction) -> bool {
        match &mut self.lightbox {
            Lightbox::Zoomed { focus, .. } => {
                let changed = *focus != fraction;
                *focus = fraction;
                changed
            }
            _ => false,
        }
    }

    /// Move the zoom focus from a pointer position over the image box.
    ///
    /// A zero-sized or negative box is ignored.
    pub fn update_pointer_from_rect(&mut self, client_x: f64, client_y: f64, rect: Rect) -> bool {
        if !(rect.width > 0.0 && rect.height > 0.0) {
            return false;
        }
        let fraction = PointerFraction::new(
            (client_x - rect.left) / rect.width,
            (client_y - rect.top) / rect.height,
        );
        self.update_pointer(fraction)
    }

    /// Keyboard contract, active only while the lightbox is open.
    ///
    /// Escape leaves zoom first, then closes. Arrows navigate.
    pub fn handle_key(&mut self, key: Key) -> bool {
        match (key, self.lightbox) {
            (_, Lightbox::Closed) => false,
            (Key::Escape, Lightbox::Zoomed { .. }) => self.toggle_zoom(),
            (Key::Escape, Lightbox::Open { .. }) => self.close(),
            (Key::ArrowRight, _) => self.next(),
            (Key::ArrowLeft, _) => self.previous(),
            (Key::Other, _) => false,
        }
    }

    pub fn view(&self) -> GalleryView<'a> {
        GalleryView {
            active_category: self.active_category.clone(),
            visible_list: self.visible_list(),
            selection: self.selection(),
            is_zoomed: self.is_zoomed(),
            pointer_fraction: self.pointer(),
            category_counts: self.catalog.category_counts(),
        }
    }

    fn transition(&mut self, next: Lightbox, op: &str) -> bool {
        if self.lightbox == next {
            return false;
        }
        tracing::debug!(op, from = ?self.lightbox, to = ?next, "lightbox transition");
        self.lightbox = next;
        true
    }
}
