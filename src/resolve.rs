//! Name resolution: player name to an ordered list of candidate page slugs.

#[cfg(test)]
mod tests;

/// Lower-case the name, collapse runs of whitespace/underscore/hyphen into a
/// single hyphen, and strip everything else, trimming leading/trailing
/// hyphens. Punctuation inside a name disappears rather than splitting it:
/// the site slugs `De'Von` as `devon`, not `de-von`.
pub fn slugify(raw_name: &str) -> String {
    let mut slug = String::with_capacity(raw_name.len());
    let mut pending_hyphen = false;
    for ch in raw_name.trim().chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(ch.to_ascii_lowercase());
        } else if ch.is_whitespace() || ch == '_' || ch == '-' {
            pending_hyphen = true;
        }
    }
    slug
}

/// Ordered candidate slugs for a player name. Never empty, and stable for a
/// given input.
///
/// The site disambiguates same-named players with a numeric suffix, so a
/// slug that already ends in `-<digits>` is tried verbatim first; after that
/// (or for a plain slug) the `-1` and `-2` forms of the base name are tried
/// in order. Duplicates are removed, keeping the earlier position.
pub fn candidates(raw_name: &str) -> Vec<String> {
    let slug = slugify(raw_name);
    let base = strip_numeric_suffix(&slug);

    let mut out = Vec::with_capacity(3);
    if base != slug {
        out.push(slug.clone());
    }
    for n in 1..=2 {
        let candidate = format!("{base}-{n}");
        if !out.contains(&candidate) {
            out.push(candidate);
        }
    }
    out
}

/// `jane-doe-3` -> `jane-doe`; slugs without a `-<digits>` tail are returned
/// unchanged.
fn strip_numeric_suffix(slug: &str) -> &str {
    match slug.rsplit_once('-') {
        Some((base, tail)) if !tail.is_empty() && tail.chars().all(|c| c.is_ascii_digit()) => base,
        _ => slug,
    }
}
