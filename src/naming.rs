//! URL-safe slugs for category filters and artwork pages.
//!
//! Every generated lightbox page lives at `works/{filter}/{id}-{title}.html`,
//! and both path segments come from [`slugify`]. Titles in an artist's
//! catalog are often not English, so common Latin accents are folded to
//! ASCII before anything else is stripped:
//!
//! - `"Natureza Morta"` → `"natureza-morta"`
//! - `"Expressão Silenciosa"` → `"expressao-silenciosa"`
//! - `"Arquitetura  Clássica!"` → `"arquitetura-classica"`

/// Fold a single accented Latin character to its ASCII base letter.
fn fold_accent(c: char) -> Option<char> {
    let folded = match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => 'a',
        'ç' => 'c',
        'è' | 'é' | 'ê' | 'ë' => 'e',
        'ì' | 'í' | 'î' | 'ï' => 'i',
        'ñ' => 'n',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' => 'o',
        'ù' | 'ú' | 'û' | 'ü' => 'u',
        'ý' | 'ÿ' => 'y',
        _ => return None,
    };
    Some(folded)
}

/// Convert a display string into a lowercase, dash-separated slug.
///
/// Runs of anything that is not an ASCII letter or digit collapse into a
/// single dash; leading and trailing dashes are dropped. Characters that
/// cannot be folded to ASCII are treated as separators, so the result may be
/// empty for an all-symbol input.
pub fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut pending_dash = false;

    for c in input.chars().flat_map(char::to_lowercase) {
        let c = fold_accent(c).unwrap_or(c);
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c);
        } else {
            pending_dash = true;
        }
    }
    slug
}
