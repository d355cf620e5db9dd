use unicode_segmentation::UnicodeSegmentation;

/// Split `text` into trimmed sentences.
///
/// Line breaks always end a passage; inside a passage sentences follow
/// Unicode (UAX #29) sentence boundaries.
pub fn split_sentences(text: &str) -> Vec<String> {
    text.split('\n')
        .flat_map(|passage| passage.unicode_sentences())
        .map(str::trim)
        .filter(|sentence| !sentence.is_empty())
        .map(str::to_string)
        .collect()
}
