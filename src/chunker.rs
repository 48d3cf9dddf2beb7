/*!
 * Fixed-size positional chunking of the codebase context
 *
 * Chunks are measured in characters, not tokens, so a boundary may fall in
 * the middle of a line or a token. It never falls inside a UTF-8 sequence.
 */

/// Iterator over consecutive slices of at most `max_chars` characters
#[derive(Debug, Clone)]
pub struct Chunks<'a> {
    rest: &'a str,
    max_chars: usize,
}

impl<'a> Chunks<'a> {
    /// Split `text` into chunks of `max_chars` characters
    ///
    /// A `max_chars` of zero yields nothing.
    pub fn new(text: &'a str, max_chars: usize) -> Self {
        Self {
            rest: if max_chars == 0 { "" } else { text },
            max_chars,
        }
    }
}

impl<'a> Iterator for Chunks<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }

        let end = self
            .rest
            .char_indices()
            .nth(self.max_chars)
            .map_or(self.rest.len(), |(idx, _)| idx);

        let (chunk, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(chunk)
    }
}

/// Split `text` into chunks of at most `max_chars` characters
pub fn chunk_text(text: &str, max_chars: usize) -> Chunks<'_> {
    Chunks::new(text, max_chars)
}

/// Number of chunks `text` splits into
pub fn chunk_count(text: &str, max_chars: usize) -> usize {
    if max_chars == 0 {
        return 0;
    }
    text.chars().count().div_ceil(max_chars)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_into_full_chunks_and_remainder() {
        let text = "x".repeat(5000);
        let chunks: Vec<&str> = chunk_text(&text, 4096).collect();

        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].len(), 4096);
        assert_eq!(chunks[1].len(), 904);
        assert_eq!(chunk_count(&text, 4096), 2);
    }

    #[test]
    fn test_chunking_is_lossless() {
        let text: String = (0..1000)
            .map(|i| format!("line {} ünïcødé ✓\n", i))
            .collect();

        for max in [1usize, 7, 64, 4096, 100_000] {
            let chunks: Vec<&str> = chunk_text(&text, max).collect();
            assert_eq!(chunks.concat(), text);
            assert_eq!(chunks.len(), chunk_count(&text, max));

            let (last, full) = chunks.split_last().unwrap();
            assert!(full.iter().all(|c| c.chars().count() == max));
            assert!(last.chars().count() <= max);
            assert!(!last.is_empty());
        }
    }

    #[test]
    fn test_exact_multiple() {
        let text = "ab".repeat(8);
        let chunks: Vec<&str> = chunk_text(&text, 4).collect();
        assert_eq!(chunks, vec!["abab"; 4]);
    }

    #[test]
    fn test_multibyte_boundaries() {
        let chunks: Vec<&str> = chunk_text("éé€€", 3).collect();
        assert_eq!(chunks, vec!["éé€", "€"]);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(chunk_text("", 4096).count(), 0);
        assert_eq!(chunk_count("", 4096), 0);
    }

    #[test]
    fn test_zero_size_yields_nothing() {
        assert_eq!(chunk_text("abc", 0).count(), 0);
        assert_eq!(chunk_count("abc", 0), 0);
    }
}
