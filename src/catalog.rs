//! The artwork catalog: a fixed, ordered list of artworks loaded once.
//!
//! ## Catalog File
//!
//! The catalog lives in `catalog.toml` at the content root, one `[[artwork]]`
//! table per piece. File order is display order:
//!
//! ```toml
//! [[artwork]]
//! id = 1
//! title = "Olhar Profundo"
//! category = "portrait"
//! year = "2023"
//! image_url = "artes/olhar-profundo.jpg"
//! ```
//!
//! `category` accepts a variant name (`StillLife`), its slug (`still-life`) or
//! its stock label (`Still Life`), case-insensitively. `image_url` is never
//! interpreted: local paths and remote URLs pass through to the page as-is.
//!
//! ## Validation
//!
//! - Every id must be a positive integer.
//! - Ids must be unique across the catalog.
//! - Titles must not be blank.
//!
//! Unknown keys are rejected to catch typos early.

use crate::naming::slugify;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

pub const CATALOG_FILE: &str = "catalog.toml";

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("No catalog.toml found in {0}")]
    Missing(PathBuf),
    #[error("Artwork '{0}' has id 0; ids must be positive")]
    ZeroId(String),
    #[error("Duplicate artwork id {0}")]
    DuplicateId(u32),
    #[error("Artwork {0} has an empty title")]
    EmptyTitle(u32),
}

/// The closed set of artwork categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Category {
    Portrait,
    StillLife,
    Landscape,
    Study,
}

impl Category {
    /// All categories in gallery tab order.
    pub const ALL: [Category; 4] = [
        Category::Portrait,
        Category::StillLife,
        Category::Landscape,
        Category::Study,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            Category::Portrait => "portrait",
            Category::StillLife => "still-life",
            Category::Landscape => "landscape",
            Category::Study => "study",
        }
    }

    /// Stock English label. Sites override labels through `[labels]` in config.
    pub fn default_label(self) -> &'static str {
        match self {
            Category::Portrait => "Portrait",
            Category::StillLife => "Still Life",
            Category::Landscape => "Landscape",
            Category::Study => "Study",
        }
    }

    fn variant_name(self) -> &'static str {
        match self {
            Category::Portrait => "Portrait",
            Category::StillLife => "StillLife",
            Category::Landscape => "Landscape",
            Category::Study => "Study",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.default_label())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| {
                [c.variant_name(), c.slug(), c.default_label()]
                    .iter()
                    .any(|name| name.eq_ignore_ascii_case(needle))
            })
            .ok_or_else(|| {
                let known: Vec<&str> = Category::ALL.iter().map(|c| c.slug()).collect();
                format!("unknown category '{s}' (expected one of: {})", known.join(", "))
            })
    }
}

impl TryFrom<String> for Category {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Category> for String {
    fn from(c: Category) -> Self {
        c.slug().to_string()
    }
}

/// Which slice of the catalog the gallery shows.
///
/// `Unknown` keeps a filter name that matched no category. It is a valid
/// filter that simply matches nothing, so the visible list is empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
    Unknown(String),
}

impl CategoryFilter {
    /// Parse a filter name. Never fails: unrecognized names become `Unknown`.
    pub fn parse(name: &str) -> Self {
        let trimmed = name.trim();
        if trimmed.eq_ignore_ascii_case("all") {
            return CategoryFilter::All;
        }
        match trimmed.parse::<Category>() {
            Ok(category) => CategoryFilter::Only(category),
            Err(_) => CategoryFilter::Unknown(trimmed.to_string()),
        }
    }

    pub fn matches(&self, artwork: &Artwork) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => artwork.category == *category,
            CategoryFilter::Unknown(_) => false,
        }
    }

    pub fn slug(&self) -> String {
        match self {
            CategoryFilter::All => "all".to_string(),
            CategoryFilter::Only(category) => category.slug().to_string(),
            CategoryFilter::Unknown(name) => slugify(name),
        }
    }

    /// Every selectable filter in tab order: `All`, then each category.
    pub fn tabs() -> impl Iterator<Item = CategoryFilter> {
        std::iter::once(CategoryFilter::All)
            .chain(Category::ALL.into_iter().map(CategoryFilter::Only))
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str("All"),
            CategoryFilter::Only(category) => write!(f, "{category}"),
            CategoryFilter::Unknown(name) => f.write_str(name),
        }
    }
}

impl Serialize for CategoryFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.slug())
    }
}

/// A single piece in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Artwork {
    pub id: u32,
    pub title: String,
    pub category: Category,
    pub year: String,
    pub image_url: String,
}

impl Artwork {
    /// Filename stem of this artwork's lightbox page, e.g. `3-expressao-silenciosa`.
    pub fn page_stem(&self) -> String {
        let slug = slugify(&self.title);
        if slug.is_empty() {
            self.id.to_string()
        } else {
            format!("{}-{}", self.id, slug)
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct CatalogFile {
    artwork: Vec<Artwork>,
}

/// The validated, immutable artwork sequence.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Catalog {
    artworks: Vec<Artwork>,
}

impl Catalog {
    pub fn new(artworks: Vec<Artwork>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(artworks.len());
        for artwork in &artworks {
            if artwork.id == 0 {
                return Err(CatalogError::ZeroId(artwork.title.clone()));
            }
            if !seen.insert(artwork.id) {
                return Err(CatalogError::DuplicateId(artwork.id));
            }
            if artwork.title.trim().is_empty() {
                return Err(CatalogError::EmptyTitle(artwork.id));
            }
        }
        Ok(Self { artworks })
    }

    pub fn from_toml_str(content: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(content)?;
        Self::new(file.artwork)
    }

    /// Load `catalog.toml` from the given content directory.
    pub fn load(dir: &Path) -> Result<Self, CatalogError> {
        let path = dir.join(CATALOG_FILE);
        if !path.exists() {
            return Err(CatalogError::Missing(dir.to_path_buf()));
        }
        let content = fs::read_to_string(&path)?;
        let catalog = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), artworks = catalog.len(), "loaded catalog");
        Ok(catalog)
    }

    pub fn get(&self, id: u32) -> Option<&Artwork> {
        self.artworks.iter().find(|a| a.id == id)
    }

    pub fn contains(&self, id: u32) -> bool {
        self.get(id).is_some()
    }

    pub fn position(&self, id: u32) -> Option<usize> {
        self.artworks.iter().position(|a| a.id == id)
    }

    pub fn len(&self) -> usize {
        self.artworks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artworks.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Artwork> {
        self.artworks.iter()
    }

    pub fn as_slice(&self) -> &[Artwork] {
        &self.artworks
    }

    /// Artworks matching `filter`, in catalog order.
    pub fn filtered(&self, filter: &CategoryFilter) -> Vec<&Artwork> {
        self.artworks.iter().filter(|a| filter.matches(a)).collect()
    }

    /// Count per gallery tab: `All` first, then every category (zeros included).
    pub fn category_counts(&self) -> Vec<(CategoryFilter, usize)> {
        CategoryFilter::tabs()
            .map(|filter| {
                let count = self.artworks.iter().filter(|a| filter.matches(a)).count();
                (filter, count)
            })
            .collect()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Artwork;
    type IntoIter = std::slice::Iter<'a, Artwork>;

    fn into_iter(self) -> Self::IntoIter {
        self.artworks.iter()
    }
}

/// Returns a documented sample `catalog.toml`.
///
/// Used by the `gen-catalog` CLI command.
pub fn stock_catalog_toml() -> &'static str {
    r##"# Atelier Catalog
# ===============
# One [[artwork]] table per piece. File order is gallery order.
#
# Fields:
#   id         unique positive integer
#   title      display title
#   category   portrait | still-life | landscape | study
#   year       free-form display string ("2024", "c. 1998", ...)
#   image_url  path relative to the site root (e.g. "artes/piece.jpg" for
#              assets/artes/piece.jpg) or a full URL ("https://...");
#              local paths are rebased for pages in subdirectories
#
# To add a piece: put the image in assets/artes/ and append a table below
# with a new id.

[[artwork]]
id = 1
title = "Olhar Profundo"
category = "portrait"
year = "2023"
image_url = "https://picsum.photos/seed/portrait1/800/1000?grayscale"

[[artwork]]
id = 2
title = "Texturas do Tempo"
category = "still-life"
year = "2024"
image_url = "https://picsum.photos/seed/still/800/800?grayscale"

[[artwork]]
id = 3
title = "Expressão Silenciosa"
category = "portrait"
year = "2023"
image_url = "https://picsum.photos/seed/portrait2/800/1100?grayscale"

[[artwork]]
id = 4
title = "O Velho Pescador"
category = "portrait"
year = "2024"
image_url = "https://picsum.photos/seed/oldman/800/900?grayscale"

[[artwork]]
id = 5
title = "Luz e Sombra"
category = "study"
year = "2022"
image_url = "https://picsum.photos/seed/study1/800/800?grayscale"

[[artwork]]
id = 6
title = "Arquitetura Clássica"
category = "landscape"
year = "2023"
image_url = "https://picsum.photos/seed/arch/1000/800?grayscale"
"##
}
