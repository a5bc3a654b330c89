// Built-in suffix tables for Kannada
//
// Two tables with different granularity. They are tuned independently
// (priority order and length guards interact with the suffix lists) and
// must not be merged.

/// Suffix table entry: category id and its suffixes in priority order.
pub type TableEntry = (u16, &'static [&'static str]);

/// Four-category paradigm table used for interactive spell checking.
pub const PARADIGM_TABLE: &[TableEntry] = &[
    // Present tense verb endings.
    (1, &["ತ್ತಿದ್ದಳು", "ತ್ತಿದ್ದನು", "ತ್ತಿದ್ದಾರೆ", "ತ್ತೀಯ", "ತ್ತಾರೆ"]),
    // Plural endings.
    (2, &["ಗಳನ್ನು", "ಗಳಲ್ಲಿ", "ಗಳ"]),
    // Past tense verb endings.
    (3, &["ದ್ದನು", "ದ್ದಳು", "ದ್ದರು"]),
    // Case endings.
    (4, &["ದ", "ದಲ್ಲಿ", "ದಿಂದ"]),
];

/// Category of very short generic endings, tried as a last resort.
pub const STEMMER_FALLBACK: u16 = 71;

/// Category whose suffix keeps its leading character.
pub const STEMMER_RETAIN: u16 = 72;

/// Category whose suffix keeps its leading character and gains the vowel sign U.
pub const STEMMER_REWRITE: u16 = 73;

/// Linguistic table used by the stemmer, grouped by tense, person and case.
///
/// Strip categories are scanned in the order declared here.
pub const STEMMER_TABLE: &[TableEntry] = &[
    // Simple past tense 1st person singular
    (1, &["ಳಿದ್ದೆ", "ಳಲಿಲ್ಲ", "ಳಿದ್ದೆನ", "ಳಿದೆನ"]),
    // Simple past tense 1st person plural
    (2, &["ದಿದೆವು", "ದಲಿಲ್ಲ", "ದಿದೆವ"]),
    // Simple past tense 2nd person
    (3, &["ಯಲಿಲ್ಲ"]),
    // Simple past tense 3rd person plural
    (
        4,
        &[
            "ಯಾಗಿದ್ದರು",
            "ವಾಗಿದ್ದರು",
            "ತಾಗಿದ್ದರು",
            "ದಾಗಿದ್ದರು",
            "ದಿದ್ದರು",
            "ಲಿಲ್ಲ",
            "ದ್ದರಾ",
        ],
    ),
    // Simple past tense 3rd person singular
    (5, &["ಯಲಿಲ್ಲ", "ಲಿಲ್ಲ", "ದನ", "ದನಾ"]),
    // Past perfect tense 1st person singular
    (6, &["ದಿದ್ದೆ", "ಡಿದ್ದೆ", "ರಲಿಲ್ಲ", "ದ್ದೆನ", "ದ್ದೆನಾ"]),
    // Past perfect tense 1st person plural
    (7, &["ದಿದ್ವಿ", "ರಲಿಲ್ಲ", "ದಿದ್ವಾ"]),
    // Past perfect 2nd
    (
        8,
        &[
            "ದಿದ್ದೆ",
            "ಯುತ್ತಿದ್ದೆ",
            "ತ್ತಿದ್ದವರು",
            "ತ್ತಿದ್ದೆ",
            "ತಿದ್ದೆ",
            "ಯುತ್ತದೆ",
            "ತ್ತದೆ",
            "ಯುತ್ತಿರಲಿಲ್ಲ",
            "ತ್ತಿರಲಿಲ್ಲ",
            "ತಿರಲಿಲ್ಲ",
            "ದಿರಲಿಲ್ಲ",
            "ದ್ದಿದ್ದಾ",
            "ಯುತ್ತಿದ್ದಾ",
            "ತ್ತಿದ್ದಾ",
        ],
    ),
    // Past perfect 3rd plural
    (9, &["ದಿದ್ದರು"]),
    // Past perfect 3rd singular
    (10, &["ದಿದ್ದ", "ದಿದ್ದನು", "ದಿದ್ದಳು"]),
    // Past continuous 1st singular
    (11, &["ತ್ತಿದ್ದೆನೆ"]),
    // Past continuous 1st plural
    (12, &["ಯುತ್ತಿದ್ದೆವು", "ತ್ತಿದ್ದೆವು", "ಯುತ್ತಿದ್ದೆವ", "ತ್ತಿದ್ದೆವ"]),
    // Past continuous 2nd
    (13, &["ತ್ತಿದ್ದೆ", "ತಿರಲಿಲ್ಲ", "ತ್ತಿದ್ದ", "ತ್ತಿದ್ದಾ"]),
    // Past continuous 3rd plural
    (14, &["ತ್ತಿದ್ದರು", "ತ್ತಿರಲಿಲ್ಲ", "ತ್ತಿದ್ದರ", "ತ್ತಿದ್ದಾರಾ"]),
    // Past continuous 3rd singular
    (
        15,
        &[
            "ಯುತ್ತಿದ್ದನ",
            "ಯುತ್ತಿದ್ದನಾ",
            "ಯುತ್ತಿದ್ದಳು",
            "ಯುತ್ತಿದ್ದನು",
            "ಯುತ್ತಿದ್ದಳ",
            "ಯುತ್ತಿದ್ದನ",
            "ಯುತ್ತಿದ್ದಳೆ",
            "ಯುತ್ತಿದ್ದನೆ",
            "ತ್ತಿದ್ದನ",
            "ತ್ತಿದ್ದನಾ",
            "ತ್ತಿದ್ದಳು",
            "ತ್ತಿದ್ದನು",
            "ತ್ತಿದ್ದಳ",
            "ತ್ತಿದ್ದನ",
            "ತ್ತಿದ್ದಳೆ",
            "ತ್ತಿದ್ದನೆ",
        ],
    ),
    // Past perfect continuous 1st singular
    (16, &["ತ್ತಿದ್ದೆ", "ತ್ತಿರಲಿಲ್ಲ", "ತ್ತಿದ್ದೆನ", "ತ್ತಿದ್ದೆನಾ"]),
    // Past perfect continuous 1st plural
    (17, &["ಯುತ್ತಿದ್ದೆವೆ", "ತ್ತಿದ್ದೆವೆ", "ಯುತ್ತಿದ್ದೆವು", "ತ್ತಿದ್ದೆವು"]),
    // Past perfect continuous 2nd
    (18, &["ತ್ತಿದ್ದೆ", "ತ್ತಿದ್ದೆವು", "ತ್ತಿರಲಿಲ್ಲ", "ತ್ತಿದ್ದಾ"]),
    // Past perfect continuous 3rd plural
    (19, &["ತ್ತಿದ್ದರು", "ತ್ತಿದ್ದರು"]),
    // Past perfect continuous 3rd singular
    (
        20,
        &["ತ್ತಿಲ್ಲ", "ತ್ತಿದ್ದಳ", "ತ್ತಿದ್ದಳು", "ತ್ತಿದ್ದನ", "ತ್ತಿದ್ದನು", "ತ್ತಿದ್ದಾರೆ"],
    ),
    // Simple present 1st singular
    (21, &["ರುತ್ತೆನೆ", "ತ್ತೆನೆ", "ದಿಲ್ಲ", "ಯಲ್ವಾ"]),
    // Simple present 1st plural
    (
        22,
        &[
            "ರುತ್ತೆವೆ",
            "ರುತ್ತೇವೆ",
            "ರುವುದಿಲ್ಲ",
            "ರುತ್ತೇವ",
            "ರುತ್ತೆವ",
            "ತ್ತೆವೆ",
            "ತ್ತೇವೆ",
            "ವುದಿಲ್ಲ",
            "ತ್ತೇವ",
            "ತ್ತೆವ",
        ],
    ),
    // Simple present 2nd
    (23, &["ತ್ತೀಯ", "ವುದಿಲ್ಲ", "ತ್ತಿಯ"]),
    // Simple present 3rd plural
    (24, &["ತ್ತಾರೆ", "ತ್ತಾರ"]),
    // Simple present 3rd singular
    (25, &["ತ್ತಾನೆ", "ತ್ತಾಳೆ", "ವುದಿಲ್ಲ"]),
    // Present perfect 1st singular
    (26, &["ದ್ದಿನಿ", "ದ್ದೆನೆ", "ದಿಲ್ಲ", "ತ್ತಿದ್ದೆ", "ಲ್ಲವ", "ದೆನ"]),
    // Present perfect 1st plural
    (27, &["ದ್ದೆವೆ", "ದ್ದೆವ"]),
    // Present perfect 2nd
    (28, &["ಡಿದ್ದೀಯ"]),
    // Present perfect 3rd plural
    (29, &["ತ್ತಿದ್ದಾರ", "ತ್ತಿದ್ದಾರೆ"]),
    // Present perfect 3rd singular
    (30, &["ಯಾಗಿದೆ", "ಯಾಗಿಲ್ಲ"]),
    // Present continuous 1st singular
    (31, &["ತ್ತಿದ್ದೆನೆ", "ತ್ತೆನೆ", "ತ್ತೇನೆ", "ತ್ತಿದ್ದೇನೆ", "ತ್ತಿಲ್ಲ", "ತ್ತಿದ್ದೆನ"]),
    // Present continuous 1st plural
    (32, &["ತ್ತಿದ್ದೇವೆ", "ತ್ತೇವೆ", "ತ್ತಿಲ್ಲ", "ತ್ತಿದ್ದೇವೆ", "ತ್ತಿದ್ದೇವ"]),
    // Present continuous 2nd
    (
        33,
        &["ಯುತ್ತಿದ್ದೀಯ", "ಯುತ್ತೀಯ", "ಯುತ್ತಿರುವೆ", "ಯುತ್ತಿಲ್ಲ", "ಯುವುದಿಲ್ಲ", "ತ್ತಿದಿಯ"],
    ),
    // Present continuous 3rd plural
    (34, &["ತಿದರೆ", "ತ್ತಿದ್ದಾರೆ", "ತ್ತಿಲ್ಲ", "ತ್ತಿದ್ದಾರ", "ತಿರುವರ"]),
    // Present continuous 3rd singular
    (
        35,
        &[
            "ತ್ತಿದ್ದಾನೆ",
            "ತ್ತಿದ್ದಾಳೆ",
            "ತ್ತಾನೆ",
            "ತ್ತಾಳೆ",
            "ತ್ತಿದ್ದಾನ",
            "ತ್ತಿದ್ದಾಳ",
            "ತ್ತಿಲ್ಲ",
        ],
    ),
    // Present perfect continuous 1st singular
    (
        36,
        &["ತ್ತಿದ್ದೀನಿ", "ತ್ತಿರುವೆ", "ತ್ತಿಲ್ಲ", "ತ್ತಿದ್ದೀನಿ", "ತ್ತಿಲ್ಲವೆ", "ತ್ತಿದ್ದೇನೆ"],
    ),
    // Present perfect continuous 1st plural
    (
        37,
        &[
            "ತ್ತಿದ್ದೇವೆ",
            "ತ್ತಿರುವ",
            "ತ್ತಿರುವೆವು",
            "ತ್ತಿರುವೆವ",
            "ತ್ತಿದ್ದೇವ",
            "ತ್ತಿದೇವ",
            "ತ್ತಿಲ್ಲವ",
            "ತ್ತಿಲ್ಲವಾ",
        ],
    ),
    // Present perfect continuous 2nd
    (38, &["ತ್ತಿದೀಯ", "ತ್ತಿಲ್ಲ", "ತ್ತಿರುವೆಯ", "ತ್ತಿದ್ದೆಯ", "ತ್ತಿಲ್ಲವ"]),
    // Present perfect continuous 3rd plural
    (39, &["ದಲ್ಲಿದೆ", "ಯಲ್ಲಿದೆ", "ರಲ್ಲಿದೆ"]),
    // Present perfect continuous 3rd singular
    (40, &["ತ್ತಿದ್ದಾನೆ", "ತ್ತಿದ್ದಾಳೆ", "ತ್ತಿದ್ದಾಳ", "ತ್ತಿದ್ದಾನೆ"]),
    (41, &["ಯಾದರೆ", "ಗಾದರೆ", "ವುದಾದರೆ", "ದಾದರೆ"]),
    (42, &["ಯಾಗಿಯೇ", "ಗಾಗಿಯೇ", "ದಾಗಿಯೇ", "ವಾಗಿಯೇ"]),
    (
        43,
        &[
            "ವಾದರು",
            "ಗಾದರು",
            "ತಾದರು",
            "ದಾದರು",
            "ಯಾದರು",
            "ರಾದರು",
            "ಲಾದರು",
            "ಳಾದರು",
            "ವಾದರೂ",
            "ಗಾದರೂ",
            "ತಾದರೂ",
            "ದಾದರೂ",
            "ಯಾದರೂ",
            "ರಾದರೂ",
            "ಲಾದರರೂ",
            "ಳಾದರೂ",
        ],
    ),
    (44, &["ತ್ತಿದ್ದರಂತೆ", "ದೊಂದಿಗೆ", "ಯೊಂದಿಗೆ", "ರೊಂದಿಗೆ"]),
    (
        45,
        &[
            "ಗಿದ್ದನು",
            "ಗಿದ್ದಳು",
            "ಗಿದ್ದರು",
            "ಗಿದ್ದರೂ",
            "ತಾದ್ದನು",
            "ತಾದ್ದಳು",
            "ತಾದ್ದರು",
            "ತಾದ್ದರೂ",
            "ದಾದ್ದನು",
            "ದಾದ್ದಳು",
            "ದಾದ್ದರು",
            "ದಾದ್ದರೂ",
        ],
    ),
    (
        46,
        &["ಯೊಂದೆ", "ವೊಂದೆ", "ರೊಂದೆ", "ವೊಂದ", "ಯೊಂದ", "ರೊಂದ", "ವುದೇ"],
    ),
    (47, &["ಯುವವರ", "ರುವವರ", "ಸುವವರ"]),
    (
        48,
        &[
            "ದಲ್ಲೇ",
            "ನಲ್ಲೇ",
            "ನಲ್ಲಿ",
            "ವಲ್ಲಿ",
            "ದಲ್ಲಿ",
            "ದಲ್ಲೂ",
            "ಯಲ್ಲಿ",
            "ರಲ್ಲಿ",
            "ಗಳಲ್ಲಿ",
            "ಳಲ್ಲಿ",
            "ಯಲ್ಲಿನ",
        ],
    ),
    (
        49,
        &[
            "ವವರು",
            "ಯವರು",
            "ನವರು",
            "ರವರು",
            "ದವರು",
            "ವವ",
            "ಯವ",
            "ನವ",
            "ರವ",
            "ದವ",
        ],
    ),
    (
        50,
        &[
            "ಗಾಗಿ",
            "ದಾಗಿ",
            "ವಾಗಿ",
            "ರಾಗಿ",
            "ಯಾಗಿ",
            "ತಾಗಿ",
            "ದಲ್ಲಿ",
            "ವಾಗಿದ್ದು",
            "ವಾಗಿದ್ದ",
            "ಗಾಗಿದ್ದು",
            "ಗಾಗಿದ್ದ",
            "ರಾಗಿದ್ದು",
            "ರಾಗಿದ್ದ",
            "ದಾಗಿದ್ದು",
            "ದಾಗಿದ್ದ",
            "ತಾಗಿದ್ದು",
            "ತಾಗಿದ್ದ",
        ],
    ),
    (51, &["ರನ್ನ", "ನನ್ನ", "ಯನ್ನ"]),
    (
        52,
        &["ರನ್ನು", "ವನ್ನು", "ಯನ್ನು", "ಗಳನ್ನೇ", "ಗಳನ್ನು", "ಳನ್ನು", "ದನ್ನು"],
    ),
    (53, &["ವಿರುವ", "ರುವ", "ದ್ದರೆ", "ದ್ದಾರೆ"]),
    (
        54,
        &[
            "ತ್ತಾರಂತೆ",
            "ತ್ತಾಳಂತೆ",
            "ತ್ತಾನಂತೆ",
            "ಗಂತೆ",
            "ದ್ದಂತೆ",
            "ದಂತೆ",
            "ನಂತೆ",
            "ರಂತೆ",
            "ಯಂತೆ",
            "ಗಳಂತೆ",
            "ಳಂತೆ",
            "ವಂತೆ",
        ],
    ),
    (
        55,
        &[
            "ಗಳೆಂದು",
            "ಗಂ",
            "ದ್ದಂ",
            "ದಂ",
            "ಯಂ",
            "ರಂ",
            "ವಂ",
            "ಗಿಂದ",
            "ದಲ್ಲೂ",
            "ಯಿಂದ",
            "ರಿಂದ",
            "ನಿಂದ",
        ],
    ),
    (56, &["ನಿಗೆ", "ರಿಗೆ", "ಯಿಗೆ", "ಕೆಗೆ"]),
    (57, &["ದ್ದೇನೆ", "ದ್ದಾನೆ", "ದ್ದಾಳೆ", "ದ್ದಾರೆ", "ದಾಗ"]),
    (58, &["ವಿದೆ", "ದಿದೆ", "ತಿದೆ", "ಗಿದೆ"]),
    (59, &["ತ್ತಿರು", "ವೆಂದು"]),
    (60, &["ನನ್ನೂ", "ಳನ್ನೂ", "ರನ್ನೂ"]),
    (61, &["ಯಾಯಿತು", "ಗಾಯಿತು", "ದಾಯಿತು"]),
    (
        62,
        &[
            "ದ್ದನು",
            "ದ್ದಳು",
            "ಯಿದ್ದರು",
            "ದ್ದರು",
            "ದ್ದರೂ",
            "ಗಳೇ",
            "ಗಳು",
            "ಗಳ",
            "ಗಳಿ",
            "ದಳು",
            "ದಳ",
            "ವೆನು",
            "ವನು",
            "ವೆವು",
            "ವಳು",
            "ವಳ",
            "ವುದು",
            "ಲಾಗು",
            "ಗಳಾದ",
            "ಗಳಿಗೆ",
        ],
    ),
    (63, &["ವುದಕ್ಕೆ", "ಕ್ಕೆ", "ಗ್ಗಿ", "ದ್ದಿ", "ಲ್ಲಿ", "ನ್ನು", "ತ್ತು"]),
    (64, &["ವಾಯಿತು", "ಗಾಯಿತು", "ದಾಯಿತು", "ತಾಯಿತು", "ಲಾಯಿತು", "ನಾಯಿತು"]),
    (65, &["ವಿದ್ದು", "ವೆಂದಾಗ"]),
    (66, &["ವನ್ನೇ", "ವೇಕೆ"]),
    (67, &["ರಾದ", "ವಾದ", "ಗಾದ", "ಯಾದ", "ರಾಗುವ"]),
    (68, &["ವಾದುದು", "ರಾದುದು", "ಗಾದುದು", "ಯಾದುದು", "ದಾದುದು"]),
    (69, &["ಯಾರು", "ದಾರು", "ಗಾರು", "ರಾರು"]),
    (70, &["ಗಳಿಸಿ", "ಗಳಿಸು", "ಗಳಿವೆ", "ಗಳಿವ", "ಗಳಿವು"]),
    (
        71,
        &[
            "ಯು",
            "ದ",
            "ವಿಕೆ",
            "ದೇ",
            "ರು",
            "ಳ",
            "ಳೆ",
            "ಲಿದೆ",
            "ದೆ",
            "ರೆ",
            "ಗೆ",
            "ವೆ",
            "ತೆ",
            "ಗೂ",
        ],
    ),
    (72, &["ರದ", "ಮದ", "ನದ"]),
    (
        73,
        &[
            "ಡಲು",
            "ಲಾಗುತ್ತದೆ",
            "ಸಲು",
            "ಸಿದ್ದಾಳೆ",
            "ಸಿದಾಗ",
            "ಸಲು",
            "ಸಿದರು",
            "ಸಿದನು",
            "ಸಿದಳು",
            "ಸಿದ್ದೇ",
            "ಕಿದೀನಿ",
        ],
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stemmer_ids_are_sequential() {
        let ids: Vec<u16> = STEMMER_TABLE.iter().map(|&(id, _)| id).collect();
        assert_eq!(ids, (1..=73).collect::<Vec<u16>>());
    }

    #[test]
    fn no_empty_suffixes() {
        for &(id, suffixes) in PARADIGM_TABLE.iter().chain(STEMMER_TABLE) {
            assert!(!suffixes.is_empty(), "category {id} is empty");
            assert!(suffixes.iter().all(|s| !s.is_empty()), "category {id}");
        }
    }

    #[test]
    fn rewrite_suffixes_keep_a_stem_consonant() {
        let &(_, rewrite) = STEMMER_TABLE
            .iter()
            .find(|&&(id, _)| id == STEMMER_REWRITE)
            .unwrap();
        assert!(rewrite.contains(&"ಡಲು"));
        assert!(rewrite.iter().all(|s| s.chars().count() >= 2));
    }
}
