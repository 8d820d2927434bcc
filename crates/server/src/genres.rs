//! Static genre-name to TMDB category id table.

/// TMDB movie genre ids, keyed by lowercase English genre name.
const GENRE_CODES: &[(&str, i64)] = &[
    ("action", 28),
    ("adventure", 12),
    ("animation", 16),
    ("comedy", 35),
    ("crime", 80),
    ("documentary", 99),
    ("drama", 18),
    ("family", 10751),
    ("fantasy", 14),
    ("history", 36),
    ("horror", 27),
    ("music", 10402),
    ("mystery", 9648),
    ("romance", 10749),
    ("science fiction", 878),
    ("tv movie", 10770),
    ("thriller", 53),
    ("war", 10752),
    ("western", 37),
];

/// Look up the TMDB category id for a genre name.
///
/// Matching trims whitespace and ignores case. Unknown names return
/// `None`; callers degrade to an unfiltered search instead of failing.
pub fn genre_code(name: &str) -> Option<i64> {
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    let name = name.to_lowercase();
    GENRE_CODES
        .iter()
        .find(|(genre, _)| *genre == name)
        .map(|(_, code)| *code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_genre_code_known() {
        assert_eq!(genre_code("comedy"), Some(35));
        assert_eq!(genre_code("science fiction"), Some(878));
        assert_eq!(genre_code("western"), Some(37));
    }

    #[test]
    fn test_genre_code_case_insensitive() {
        assert_eq!(genre_code("Comedy"), Some(35));
        assert_eq!(genre_code("COMEDY"), Some(35));
        assert_eq!(genre_code("  Horror  "), Some(27));
    }

    #[test]
    fn test_genre_code_unknown() {
        assert_eq!(genre_code("blorp"), None);
        assert_eq!(genre_code(""), None);
        assert_eq!(genre_code("   "), None);
    }
}
