//! HTML site generation.
//!
//! Reads `config.toml`, `catalog.toml` and the about markdown from the content
//! directory and writes the finished site.
//!
//! ## Generated Pages
//!
//! - **Index page** (`/index.html`): navbar, hero, gallery with category tabs,
//!   about, contact and footer, all on one page.
//! - **Lightbox pages** (`/works/{filter}/{id}-{title}.html`): one full-screen
//!   viewer per artwork per non-empty filter. Previous/next links walk the
//!   filtered list with wraparound, exactly as [`GalleryNavigator`] does, so a
//!   visitor who picked "Portrait" keeps cycling through portraits.
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html
//! ├── works/
//! │   ├── all/
//! │   │   ├── 1-olhar-profundo.html
//! │   │   └── ...
//! │   └── portrait/
//! │       ├── 1-olhar-profundo.html
//! │       └── ...
//! └── artes/                   # copied from content/assets/
//!     └── ...
//! ```
//!
//! ## CSS and JavaScript
//!
//! Static assets are embedded at compile time and inlined into every page:
//! - `static/style.css`: base styles (colors and grid variables injected from config)
//! - `static/gallery.js`: category tabs, keyboard navigation, zoom focus
//!
//! Everything works without JavaScript except tab filtering and zoom.

use crate::catalog::{Artwork, Catalog, CatalogError, CategoryFilter};
use crate::config::{self, ConfigError, LabelsConfig, SiteConfig};
use crate::navigator::{GalleryNavigator, PointerFraction};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use pulldown_cmark::{Parser, html as md_html};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),
    #[error("Asset copy error: {0}")]
    WalkDir(#[from] walkdir::Error),
}

const CSS_STATIC: &str = include_str!("../static/style.css");
const JS: &str = include_str!("../static/gallery.js");

/// Path from a lightbox page (`works/{filter}/`) back to the site root.
const LIGHTBOX_ROOT: &str = "../../";

/// One lightbox page: an artwork seen through a filter.
#[derive(Debug, Clone, PartialEq)]
pub struct LightboxPage {
    pub filter: CategoryFilter,
    pub artwork_id: u32,
    pub title: String,
    /// 1-based position within the filtered list.
    pub position: usize,
    pub total: usize,
    /// Output path relative to the site root.
    pub path: String,
    pub prev_id: u32,
    pub next_id: u32,
    /// Sibling filenames (same directory).
    pub prev_href: String,
    pub next_href: String,
}

/// What a build wrote, for the CLI report.
#[derive(Debug)]
pub struct GenerateReport {
    pub output_dir: PathBuf,
    pub artist: String,
    /// Labels the site was built with, so the report speaks the site's language.
    pub labels: LabelsConfig,
    pub artworks: usize,
    pub has_about: bool,
    pub pages: Vec<LightboxPage>,
    pub assets_copied: usize,
}

/// Build the whole site from `source` into `output`.
pub fn generate(source: &Path, output: &Path) -> Result<GenerateReport, GenerateError> {
    let config = config::load_config(source)?;
    let catalog = Catalog::load(source)?;
    let about_html = load_about(source, &config)?;

    let css = format!(
        "{}\n\n{}\n\n{}",
        config::generate_color_css(&config.colors),
        config::generate_theme_css(&config.gallery),
        CSS_STATIC
    );

    fs::create_dir_all(output)?;
    let assets_copied = copy_assets(&source.join("assets"), output)?;

    let index = render_index(&config, &catalog, about_html.as_deref(), &css);
    fs::write(output.join("index.html"), index.into_string())?;
    tracing::info!("generated index.html");

    let mut pages = Vec::new();
    for filter in CategoryFilter::tabs() {
        let planned = plan_lightbox_pages(&catalog, &filter);
        if planned.is_empty() {
            continue;
        }
        let dir = output.join("works").join(filter.slug());
        fs::create_dir_all(&dir)?;
        for page in planned {
            let Some(artwork) = catalog.get(page.artwork_id) else {
                continue;
            };
            let html = render_lightbox_page(&config, artwork, &page, &css);
            fs::write(output.join(&page.path), html.into_string())?;
            tracing::debug!(path = %page.path, "generated lightbox page");
            pages.push(page);
        }
    }
    tracing::info!(pages = pages.len(), "generated lightbox pages");

    Ok(GenerateReport {
        output_dir: output.to_path_buf(),
        artist: config.site.artist.clone(),
        labels: config.labels.clone(),
        artworks: catalog.len(),
        has_about: about_html.is_some(),
        pages,
        assets_copied,
    })
}

/// Read and render the about markdown. A missing file means no about section.
fn load_about(source: &Path, config: &SiteConfig) -> Result<Option<String>, GenerateError> {
    let path = source.join(&config.about.file);
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no about file, skipping section");
        return Ok(None);
    }
    let markdown = fs::read_to_string(&path)?;
    Ok(Some(markdown_to_html(&markdown)))
}

fn markdown_to_html(markdown: &str) -> String {
    let parser = Parser::new(markdown);
    let mut body = String::new();
    md_html::push_html(&mut body, parser);
    body
}

/// Copy everything under `assets/` into the output root. Returns files copied.
fn copy_assets(assets: &Path, output: &Path) -> Result<usize, GenerateError> {
    if !assets.is_dir() {
        return Ok(0);
    }
    let mut copied = 0;
    for entry in WalkDir::new(assets).min_depth(1) {
        let entry = entry?;
        let Ok(relative) = entry.path().strip_prefix(assets) else {
            continue;
        };
        let target = output.join(relative);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(entry.path(), &target)?;
            copied += 1;
        }
    }
    tracing::debug!(copied, "copied assets");
    Ok(copied)
}

/// Plan the lightbox pages for one filter by driving a navigator over it.
///
/// Each visible artwork gets a page whose previous/next targets are whatever
/// the navigator selects after `previous()` / `next()` from that artwork.
pub fn plan_lightbox_pages(catalog: &Catalog, filter: &CategoryFilter) -> Vec<LightboxPage> {
    let mut nav = GalleryNavigator::new(catalog);
    nav.set_category(filter.clone());
    let visible = nav.visible_list();
    let total = visible.len();
    let dir = format!("works/{}", filter.slug());

    visible
        .into_iter()
        .enumerate()
        .map(|(idx, artwork)| {
            let prev = neighbour(&mut nav, artwork, GalleryNavigator::previous);
            let next = neighbour(&mut nav, artwork, GalleryNavigator::next);
            LightboxPage {
                filter: filter.clone(),
                artwork_id: artwork.id,
                title: artwork.title.clone(),
                position: idx + 1,
                total,
                path: format!("{dir}/{}.html", artwork.page_stem()),
                prev_id: prev.id,
                next_id: next.id,
                prev_href: format!("{}.html", prev.page_stem()),
                next_href: format!("{}.html", next.page_stem()),
            }
        })
        .collect()
}

fn neighbour<'a>(
    nav: &mut GalleryNavigator<'a>,
    from: &'a Artwork,
    step: fn(&mut GalleryNavigator<'a>) -> bool,
) -> &'a Artwork {
    nav.open(from.id);
    step(nav);
    nav.selection().unwrap_or(from)
}

// ============================================================================
// HTML Components
// ============================================================================

/// Renders the base HTML document structure
fn base_document(
    lang: &str,
    title: &str,
    css: &str,
    body_class: Option<&str>,
    content: Markup,
) -> Markup {
    html! {
        (DOCTYPE)
        html lang=(lang) {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(css)) }
            }
            body class=[body_class] {
                (content)
                script { (PreEscaped(JS)) }
            }
        }
    }
}

/// Renders the fixed navbar with anchor links to each section
fn render_navbar(config: &SiteConfig, has_about: bool) -> Markup {
    html! {
        header.navbar {
            div.container {
                a.brand href="#home" { (config.site.artist) }
                input.nav-toggle type="checkbox" id="nav-toggle";
                label.nav-hamburger for="nav-toggle" aria-label=(config.labels.menu) { "☰" }
                ul.nav-links {
                    li { a href="#home" { (config.labels.home) } }
                    li { a href="#gallery" { (config.gallery.heading) } }
                    @if has_about {
                        li { a href="#about" { (config.about.heading) } }
                    }
                    li { a href="#contact" { (config.contact.heading) } }
                }
            }
        }
    }
}

fn render_hero(config: &SiteConfig) -> Markup {
    html! {
        section.hero id="home" {
            div.container {
                h1 { (config.hero.headline) }
                p { (config.hero.tagline) }
                div.hero-actions {
                    a.button.primary href="#gallery" { (config.hero.cta_gallery) }
                    a.button href="#contact" { (config.hero.cta_contact) }
                }
            }
        }
    }
}

/// Renders the gallery: header with filter tabs, then the artwork grid.
///
/// Cards link to the `all` lightbox pages; the tab script rewrites them to
/// the selected filter's pages.
fn render_gallery(config: &SiteConfig, catalog: &Catalog) -> Markup {
    html! {
        section.gallery id="gallery" {
            div.container {
                div.gallery-header {
                    div {
                        h2 { (config.gallery.heading) }
                        p { (config.gallery.subtitle) }
                    }
                    div.filter-tabs role="group" {
                        @for (filter, count) in catalog.category_counts() {
                            @let active = filter == CategoryFilter::All;
                            button.filter-tab.active[active] type="button"
                                data-filter=(filter.slug())
                                aria-pressed=(if active { "true" } else { "false" }) {
                                span { (config.labels.filter(&filter)) }
                                span.filter-count { (count) }
                            }
                        }
                    }
                }
                div.gallery-grid {
                    @for artwork in catalog {
                        (render_card(config, artwork))
                    }
                }
                p.gallery-empty hidden[!catalog.is_empty()] { (config.gallery.empty) }
            }
        }
    }
}

fn render_card(config: &SiteConfig, artwork: &Artwork) -> Markup {
    let stem = artwork.page_stem();
    html! {
        a.card href={ "works/all/" (stem) ".html" }
            data-category=(artwork.category.slug())
            data-stem=(stem) {
            div.card-image {
                img src=(image_src(&artwork.image_url, "")) alt=(artwork.title) loading="lazy";
            }
            h3 { (artwork.title) }
            p.card-meta {
                (config.labels.category(artwork.category)) " · " (artwork.year)
            }
        }
    }
}

fn render_about(config: &SiteConfig, body_html: &str) -> Markup {
    html! {
        section.about id="about" {
            div.container {
                h2 { (config.about.heading) }
                article.about-content {
                    (PreEscaped(body_html))
                }
            }
        }
    }
}

fn render_contact(config: &SiteConfig) -> Markup {
    let contact = &config.contact;
    html! {
        section.contact id="contact" {
            div.container {
                h2 { (contact.heading) }
                p { (contact.intro) }
                div.contact-cards {
                    @if let Some(email) = &contact.email {
                        a.contact-card href={ "mailto:" (email) } {
                            span { (config.labels.email) }
                            (email)
                        }
                    }
                    @if let Some(url) = contact.whatsapp_url() {
                        a.contact-card href=(url) target="_blank" rel="noopener noreferrer" {
                            span { "WhatsApp" }
                            @if let Some(number) = &contact.whatsapp { (number) }
                        }
                    }
                    @if let Some(url) = &contact.instagram {
                        a.contact-card href=(url) target="_blank" rel="noopener noreferrer" {
                            span { "Instagram" }
                            (instagram_handle(url))
                        }
                    }
                }
            }
        }
    }
}

/// `https://www.instagram.com/gelci.desenhos/` → `@gelci.desenhos`.
///
/// The handle is the first path segment after the host; a bare host falls
/// back to the URL.
fn instagram_handle(url: &str) -> String {
    let rest = url.split_once("://").map_or(url, |(_, rest)| rest);
    let path = rest.split(['?', '#']).next().unwrap_or(rest);
    let mut segments = path.split('/').filter(|segment| !segment.is_empty());
    let _host = segments.next();
    match segments.next() {
        Some(handle) => format!("@{handle}"),
        None => url.to_string(),
    }
}

/// Image `src` for a page `root` levels below the site root (`""` for the
/// index, [`LIGHTBOX_ROOT`] for lightbox pages).
///
/// URLs with a scheme (`https:`, `data:`) or protocol-relative `//` pass
/// through. Local paths, with or without a leading `/`, are rewritten
/// relative to the page, so the site also works from `file://` or a subpath.
fn image_src(url: &str, root: &str) -> String {
    if url.starts_with("//") || has_scheme(url) {
        return url.to_string();
    }
    format!("{root}{}", url.trim_start_matches('/'))
}

fn has_scheme(url: &str) -> bool {
    let Some((scheme, _)) = url.split_once(':') else {
        return false;
    };
    let mut chars = scheme.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

fn render_footer(config: &SiteConfig) -> Markup {
    html! {
        footer.site-footer {
            div.container {
                span { "© " (config.site.artist) }
                @if let Some(url) = &config.contact.instagram {
                    a href=(url) target="_blank" rel="noopener noreferrer" { "Instagram" }
                }
            }
        }
    }
}

// ============================================================================
// Page Renderers
// ============================================================================

/// Renders the single-page index
fn render_index(
    config: &SiteConfig,
    catalog: &Catalog,
    about_html: Option<&str>,
    css: &str,
) -> Markup {
    let content = html! {
        (render_navbar(config, about_html.is_some()))
        main {
            (render_hero(config))
            (render_gallery(config, catalog))
            @if let Some(body) = about_html {
                (render_about(config, body))
            }
            (render_contact(config))
        }
        (render_footer(config))
    };

    base_document(&config.site.lang, &config.site.title, css, None, content)
}

/// Renders a lightbox viewer page
fn render_lightbox_page(
    config: &SiteConfig,
    artwork: &Artwork,
    page: &LightboxPage,
    css: &str,
) -> Markup {
    let labels = &config.labels;
    let close_url = format!("{LIGHTBOX_ROOT}index.html#gallery");
    let filter_label = config.labels.filter(&page.filter);
    let origin = format!("--zoom-origin: {};", PointerFraction::CENTER.to_css_origin());
    let page_title = format!("{} — {}", artwork.title, config.site.artist);

    let content = html! {
        main.lightbox data-prev=(page.prev_href) data-next=(page.next_href) data-close=(close_url) {
            div.lightbox-bar {
                span.lightbox-counter { (filter_label) " · " (page.position) " / " (page.total) }
                a.lightbox-close href=(close_url) aria-label=(labels.close) { "×" }
            }
            div.lightbox-stage {
                a.lightbox-step.prev href=(page.prev_href) aria-label=(labels.previous) { "‹" }
                figure.lightbox-frame style=(origin) {
                    img src=(image_src(&artwork.image_url, LIGHTBOX_ROOT)) alt=(artwork.title);
                    button.zoom-toggle type="button" aria-pressed="false" { (labels.zoom) }
                }
                a.lightbox-step.next href=(page.next_href) aria-label=(labels.next) { "›" }
            }
            div.lightbox-caption {
                span.artwork-number { (format!("#{:03}", artwork.id)) }
                h1 { (artwork.title) }
                p.card-meta {
                    (labels.category(artwork.category)) " · " (artwork.year)
                }
            }
        }
    };

    base_document(
        &config.site.lang,
        &page_title,
        css,
        Some("lightbox-view"),
        content,
    )
}

// ============================================================================
// Tests
// ============================================================================
