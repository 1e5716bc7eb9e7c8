//! CLI output formatting.
//!
//! # Information-First Display
//!
//! Output leads with what a visitor would see (titles, categories, positions)
//! and shows paths and URLs as indented context lines. Positional indices are
//! 1-based and zero-padded so columns line up.
//!
//! # Output Format
//!
//! ## Check
//!
//! ```text
//! Catalog (6 works)
//! Portrait (3)
//!     001 Olhar Profundo (2023)
//!         Image: artes/olhar-profundo.jpg
//! Landscape (0)
//! ```
//!
//! ## Generate
//!
//! ```text
//! Home → index.html
//! All (6 pages)
//!     001 Olhar Profundo → works/all/1-olhar-profundo.html
//!
//! Generated index.html, 10 lightbox pages, 1 asset
//! ```
//!
//! ## Browse
//!
//! ```text
//! Filter: Portrait (2 of 6)
//!     001 Olhar Profundo
//!   ▸ 002 Expressão Silenciosa
//! Lightbox: zoomed on #3 Expressão Silenciosa (focus 25.0% 80.0%)
//! ```
//!
//! # Architecture
//!
//! Each report has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure: no I/O, no side effects.

use crate::catalog::{Catalog, CategoryFilter};
use crate::config::LabelsConfig;
use crate::generate::GenerateReport;
use crate::navigator::GalleryView;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn plural(n: usize, one: &str, many: &str) -> String {
    if n == 1 {
        format!("{n} {one}")
    } else {
        format!("{n} {many}")
    }
}

// ============================================================================
// Check
// ============================================================================

/// Format the catalog grouped by category, every category listed.
pub fn format_catalog_output(catalog: &Catalog, labels: &LabelsConfig) -> Vec<String> {
    let mut lines = vec![format!("Catalog ({})", plural(catalog.len(), "work", "works"))];

    for (filter, count) in catalog.category_counts() {
        if filter == CategoryFilter::All {
            continue;
        }
        lines.push(format!("{} ({})", labels.filter(&filter), count));
        for (i, artwork) in catalog.filtered(&filter).into_iter().enumerate() {
            lines.push(format!(
                "{}{} {} ({})",
                indent(1),
                format_index(i + 1),
                artwork.title,
                artwork.year
            ));
            lines.push(format!("{}Image: {}", indent(2), artwork.image_url));
        }
    }
    lines
}

pub fn print_catalog_output(catalog: &Catalog, labels: &LabelsConfig) {
    for line in format_catalog_output(catalog, labels) {
        println!("{}", line);
    }
}

// ============================================================================
// Generate
// ============================================================================

/// Format the pages a build wrote, grouped by filter.
pub fn format_generate_output(report: &GenerateReport, labels: &LabelsConfig) -> Vec<String> {
    let mut lines = vec!["Home → index.html".to_string()];

    let mut current: Option<&CategoryFilter> = None;
    for page in &report.pages {
        if current != Some(&page.filter) {
            current = Some(&page.filter);
            lines.push(format!(
                "{} ({})",
                labels.filter(&page.filter),
                plural(page.total, "page", "pages")
            ));
        }
        lines.push(format!(
            "{}{} {} → {}",
            indent(1),
            format_index(page.position),
            page.title,
            page.path
        ));
    }

    lines.push(String::new());
    lines.push(format!(
        "Generated index.html, {}, {}",
        plural(report.pages.len(), "lightbox page", "lightbox pages"),
        plural(report.assets_copied, "asset", "assets")
    ));
    lines
}

pub fn print_generate_output(report: &GenerateReport, labels: &LabelsConfig) {
    for line in format_generate_output(report, labels) {
        println!("{}", line);
    }
}

// ============================================================================
// Browse
// ============================================================================

/// Format a navigator snapshot: active filter, visible list, lightbox state.
pub fn format_view(view: &GalleryView, labels: &LabelsConfig) -> Vec<String> {
    let total = view
        .category_counts
        .iter()
        .find(|(filter, _)| *filter == CategoryFilter::All)
        .map(|(_, count)| *count)
        .unwrap_or(0);

    let mut lines = vec![format!(
        "Filter: {} ({} of {})",
        labels.filter(&view.active_category),
        view.visible_list.len(),
        total
    )];

    let selected_id = view.selection.map(|a| a.id);
    if view.visible_list.is_empty() {
        lines.push(format!("{}(nothing to show)", indent(1)));
    }
    for (i, artwork) in view.visible_list.iter().enumerate() {
        let marker = if Some(artwork.id) == selected_id {
            "  ▸ "
        } else {
            "    "
        };
        lines.push(format!("{}{} {}", marker, format_index(i + 1), artwork.title));
    }

    let lightbox = match (view.selection, view.pointer_fraction) {
        (None, _) => "Lightbox: closed".to_string(),
        (Some(a), Some(focus)) if view.is_zoomed => format!(
            "Lightbox: zoomed on #{} {} (focus {})",
            a.id,
            a.title,
            focus.to_css_origin()
        ),
        (Some(a), _) => format!("Lightbox: open on #{} {}", a.id, a.title),
    };
    lines.push(lightbox);

    if let Some(a) = view.selection {
        if !view.visible_list.iter().any(|v| v.id == a.id) {
            lines.push(format!("{}(selection is outside the current filter)", indent(1)));
        }
    }
    lines
}
