//! Shared test utilities for the atelier test suite.
//!
//! Provides small in-memory catalogs, an on-disk content fixture, and id
//! extractors for asserting on visible lists.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let catalog = abc_catalog();
//! let mut nav = GalleryNavigator::new(&catalog);
//! nav.set_category(CategoryFilter::Only(Category::Portrait));
//! assert_eq!(ids(&nav.visible_list()), vec![1, 3]);
//! ```

use std::path::Path;
use tempfile::TempDir;

use crate::catalog::{Artwork, Catalog, Category};

// =========================================================================
// In-memory catalogs
// =========================================================================

/// Build an artwork with a placeholder year and image URL.
pub fn artwork(id: u32, title: &str, category: Category) -> Artwork {
    Artwork {
        id,
        title: title.to_string(),
        category,
        year: "2024".to_string(),
        image_url: format!("/artes/{id}.jpg"),
    }
}

/// Three artworks: A(1, Portrait), B(2, Study), C(3, Portrait).
pub fn abc_catalog() -> Catalog {
    Catalog::new(vec![
        artwork(1, "A", Category::Portrait),
        artwork(2, "B", Category::Study),
        artwork(3, "C", Category::Portrait),
    ])
    .unwrap()
}

/// A catalog touching every category, with portraits interleaved.
pub fn sample_catalog() -> Catalog {
    Catalog::new(vec![
        artwork(1, "Olhar Profundo", Category::Portrait),
        artwork(2, "Texturas do Tempo", Category::StillLife),
        artwork(3, "Expressão Silenciosa", Category::Portrait),
        artwork(4, "O Velho Pescador", Category::Portrait),
        artwork(5, "Luz e Sombra", Category::Study),
        artwork(6, "Arquitetura Clássica", Category::Landscape),
        artwork(7, "Mulher com Cão", Category::Portrait),
    ])
    .unwrap()
}

/// Ids of a list of artworks, in order.
pub fn ids(artworks: &[&Artwork]) -> Vec<u32> {
    artworks.iter().map(|a| a.id).collect()
}

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/content/` to a temp directory and return it.
///
/// Tests get an isolated copy they can mutate without affecting other tests
/// or the source fixtures.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/content");
    copy_dir_recursive(&fixtures, tmp.path()).unwrap();
    tmp
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            std::fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

/// Read a generated file relative to an output directory. Panics with the path on miss.
pub fn read_output(output: &Path, relative: &str) -> String {
    let path = output.join(relative);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("could not read {}: {e}", path.display()))
}
