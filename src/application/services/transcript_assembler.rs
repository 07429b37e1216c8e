/// Joins per-segment transcripts into one document.
///
/// Pieces are trimmed and joined with a single space, in segment order.
/// Empty contributions (failed segments) are dropped without a placeholder.
pub fn assemble_transcript<S: AsRef<str>>(chunk_texts: &[S]) -> String {
    chunk_texts
        .iter()
        .map(|t| t.as_ref().trim())
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
