//! Declared-language normalization and statistical language detection.

use whatlang::Lang;

/// Normalizes a declared language to its lowercase primary subtag.
///
/// `en-US` → `en`, `de_DE` → `de`. Values that do not look like a language
/// tag yield `None`.
#[must_use]
pub fn normalize_language(value: &str) -> Option<String> {
    let primary = value
        .trim()
        .split(|c: char| c == '-' || c == '_' || c == ',' || c.is_whitespace())
        .next()?
        .to_ascii_lowercase();

    let valid = (2..=3).contains(&primary.len()) && primary.chars().all(|c| c.is_ascii_alphabetic());
    valid.then_some(primary)
}

/// Best-guess language of `text`, as an ISO 639-1 code where one exists
/// (ISO 639-3 otherwise).
#[must_use]
pub fn detect_language(text: &str) -> Option<String> {
    if text.trim().is_empty() {
        return None;
    }

    let info = whatlang::detect(text)?;
    tracing::trace!(lang = ?info.lang(), confidence = info.confidence(), "statistical language guess");
    Some(iso_639_1(info.lang()).map_or_else(|| info.lang().code().to_string(), ToString::to_string))
}

fn iso_639_1(lang: Lang) -> Option<&'static str> {
    let code = match lang {
        Lang::Eng => "en",
        Lang::Deu => "de",
        Lang::Fra => "fr",
        Lang::Spa => "es",
        Lang::Ita => "it",
        Lang::Por => "pt",
        Lang::Nld => "nl",
        Lang::Rus => "ru",
        Lang::Ukr => "uk",
        Lang::Pol => "pl",
        Lang::Ces => "cs",
        Lang::Slk => "sk",
        Lang::Hun => "hu",
        Lang::Ron => "ro",
        Lang::Swe => "sv",
        Lang::Dan => "da",
        Lang::Nob => "nb",
        Lang::Fin => "fi",
        Lang::Tur => "tr",
        Lang::Ell => "el",
        Lang::Jpn => "ja",
        Lang::Kor => "ko",
        Lang::Cmn => "zh",
        Lang::Ara => "ar",
        Lang::Heb => "he",
        Lang::Hin => "hi",
        _ => return None,
    };
    Some(code)
}
