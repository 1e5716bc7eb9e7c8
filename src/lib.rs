//! # Atelier
//!
//! A static site generator for a visual artist's single-page portfolio:
//! hero, filterable gallery with a lightbox viewer, about, contact, footer.
//! The artwork catalog is a TOML file, loaded once and never mutated.
//!
//! # Architecture
//!
//! ```text
//! content/catalog.toml  →  Catalog            (static data, validated once)
//! Catalog               →  GalleryNavigator   (filter → select → navigate → zoom)
//! Catalog + config      →  dist/              (index.html + lightbox pages)
//! ```
//!
//! The only real logic is the [`navigator::GalleryNavigator`], a synchronous
//! state machine. Everything that needs "what comes after this artwork under
//! this filter" drives a navigator instead of recomputing it: the generator
//! uses one to link lightbox pages, the `browse` command feeds it keys and
//! commands from a terminal.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`catalog`] | `Artwork`, `Category`, `CategoryFilter` and `catalog.toml` loading |
//! | [`navigator`] | The gallery view state machine and its keyboard contract |
//! | [`config`] | `config.toml` loading, validation, merging, and CSS generation |
//! | [`generate`] | Renders the HTML site with Maud |
//! | [`session`] | Line-driven browse loop over a navigator |
//! | [`naming`] | Slugs for filter directories and page filenames |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Lightbox State as an Enum
//!
//! The lightbox is `Closed`, `Open { selected_id }` or
//! `Zoomed { selected_id, focus }`. Zoom without a selection, or a focus
//! point without zoom, cannot be represented.
//!
//! ## One Page per Filter and Artwork
//!
//! Every lightbox is also a static page, so the gallery works with
//! JavaScript disabled and every artwork has a shareable URL. Prev/next
//! links depend on the active filter, hence `works/{filter}/{id}-{slug}.html`.
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/): malformed markup
//! is a build error, interpolation is escaped, and there is no template
//! directory to ship.

pub mod catalog;
pub mod config;
pub mod generate;
pub mod naming;
pub mod navigator;
pub mod output;
pub mod session;

#[cfg(test)]
pub(crate) mod test_helpers;
