//! Language detection from environment.

/// Detect language from environment variables.
///
/// Checks in order: PAGEKIT_LANG, LANG, LC_ALL.
/// Falls back to "en" if none found.
pub fn detect_language() -> String {
    for var in ["PAGEKIT_LANG", "LANG", "LC_ALL"] {
        if let Ok(lang) = std::env::var(var)
            && !lang.is_empty()
        {
            return normalize_lang(&lang);
        }
    }

    "en".to_string()
}

/// Normalize language string (e.g., "de_DE.UTF-8" -> "de", "pt-BR" -> "pt").
///
/// The POSIX "C" locale maps to English.
pub fn normalize_lang(lang: &str) -> String {
    let normalized = lang
        .split(['_', '-', '.', '@'])
        .next()
        .unwrap_or("en")
        .to_lowercase();

    if normalized.is_empty() || normalized == "c" || normalized == "posix" {
        "en".to_string()
    } else {
        normalized
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_lang() {
        assert_eq!(normalize_lang("de_DE.UTF-8"), "de");
        assert_eq!(normalize_lang("en_US"), "en");
        assert_eq!(normalize_lang("pt-BR"), "pt");
        assert_eq!(normalize_lang("fr"), "fr");
        assert_eq!(normalize_lang("C.UTF-8"), "en");
        assert_eq!(normalize_lang(""), "en");
    }
}
