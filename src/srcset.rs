//! Responsive-image `srcset` parsing and candidate selection.

use crate::url_utils::BaseUrl;

/// One `url [descriptor]` entry of a srcset.
#[derive(Debug, Clone, PartialEq)]
pub struct SrcsetCandidate {
    /// Resolved URL.
    pub url: String,
    /// `<int>w` descriptor.
    pub width: Option<u32>,
    /// `<float>x` descriptor.
    pub density: Option<f32>,
}

impl SrcsetCandidate {
    fn effective_density(&self) -> f32 {
        self.density.unwrap_or(1.0)
    }
}

/// Parses a srcset attribute into resolved candidates.
///
/// URLs may contain commas (common with image CDNs); an entry ends at the
/// first comma after its descriptor, or at a comma that terminates the URL.
/// Unknown descriptors (such as `h`) are ignored.
#[must_use]
pub fn parse_srcset(srcset: &str, base: &BaseUrl) -> Vec<SrcsetCandidate> {
    let mut candidates = Vec::new();
    let mut rest = srcset;

    loop {
        rest = rest.trim_start_matches(|c: char| c.is_whitespace() || c == ',');
        if rest.is_empty() {
            break;
        }

        let url_end = rest.find(char::is_whitespace).unwrap_or(rest.len());
        let raw_url = &rest[..url_end];
        rest = &rest[url_end..];

        let (url, descriptor) = if raw_url.ends_with(',') {
            (raw_url.trim_end_matches(','), "")
        } else {
            let descriptor_end = rest.find(',').unwrap_or(rest.len());
            let descriptor = &rest[..descriptor_end];
            rest = &rest[descriptor_end..];
            (raw_url, descriptor)
        };

        if url.is_empty() {
            continue;
        }

        let mut candidate = SrcsetCandidate {
            url: base.resolve(url),
            width: None,
            density: None,
        };

        for token in descriptor.split_whitespace() {
            if let Some(w) = token.strip_suffix('w').or_else(|| token.strip_suffix('W')) {
                candidate.width = w.parse().ok().or(candidate.width);
            } else if let Some(x) = token.strip_suffix('x').or_else(|| token.strip_suffix('X')) {
                candidate.density = x.parse::<f32>().ok().filter(|d| d.is_finite()).or(candidate.density);
            }
        }

        candidates.push(candidate);
    }

    candidates
}

/// Picks the candidate to download.
///
/// With width descriptors: the widest candidate not exceeding `max_width`,
/// or the widest overall when all exceed it. Without any: the highest
/// density (1.0 when unspecified). Ties go to the earlier candidate.
#[must_use]
pub fn select_best(candidates: &[SrcsetCandidate], max_width: u32) -> Option<&SrcsetCandidate> {
    let widths: Vec<(u32, &SrcsetCandidate)> = candidates
        .iter()
        .filter_map(|c| c.width.map(|w| (w, c)))
        .collect();

    if !widths.is_empty() {
        return widest(widths.iter().copied().filter(|(w, _)| *w <= max_width))
            .or_else(|| widest(widths.iter().copied()));
    }

    candidates.iter().fold(None, |best: Option<&SrcsetCandidate>, c| match best {
        Some(b) if b.effective_density() >= c.effective_density() => best,
        _ => Some(c),
    })
}

fn widest<'a>(
    iter: impl Iterator<Item = (u32, &'a SrcsetCandidate)>,
) -> Option<&'a SrcsetCandidate> {
    iter.fold(None, |best: Option<(u32, &'a SrcsetCandidate)>, (w, c)| match best {
        Some((bw, _)) if bw >= w => best,
        _ => Some((w, c)),
    })
    .map(|(_, c)| c)
}

/// Parses `srcset` and returns the selected candidate.
#[must_use]
pub fn best_candidate(srcset: &str, base: &BaseUrl, max_width: u32) -> Option<SrcsetCandidate> {
    let candidates = parse_srcset(srcset, base);
    select_best(&candidates, max_width).cloned()
}
