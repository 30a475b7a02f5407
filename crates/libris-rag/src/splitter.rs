//! Character-window text splitting with overlap.

use libris_core::{Error, Result};

/// Splits text into overlapping character windows.
///
/// Windows are at most `chunk_size` characters. When a window would cut a
/// word, the break moves back to the last whitespace inside the window so
/// chunks end on word boundaries where possible. Consecutive chunks share
/// `chunk_overlap` characters of context.
#[derive(Debug, Clone)]
pub struct TextSplitter {
    chunk_size: usize,
    chunk_overlap: usize,
}

impl TextSplitter {
    /// Create a splitter.
    ///
    /// # Errors
    ///
    /// `Error::Config` when `chunk_size` is zero or the overlap is not
    /// smaller than the chunk size.
    pub fn new(chunk_size: usize, chunk_overlap: usize) -> Result<Self> {
        if chunk_size == 0 {
            return Err(Error::config("chunk_size must be positive"));
        }
        if chunk_overlap >= chunk_size {
            return Err(Error::config(
                "chunk_overlap must be smaller than chunk_size",
            ));
        }
        Ok(Self {
            chunk_size,
            chunk_overlap,
        })
    }

    /// The configured window size.
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// The configured overlap.
    pub fn chunk_overlap(&self) -> usize {
        self.chunk_overlap
    }

    /// Split `text` into chunks. Whitespace-only chunks are dropped, so
    /// blank input yields no chunks.
    pub fn split(&self, text: &str) -> Vec<String> {
        let chars: Vec<char> = text.chars().collect();
        let mut chunks = Vec::new();
        let mut start = 0;

        while start < chars.len() {
            let hard_end = usize::min(start + self.chunk_size, chars.len());
            let mut end = hard_end;

            // Prefer breaking at the last whitespace inside the window
            if hard_end < chars.len() {
                if let Some(offset) = chars[start..hard_end]
                    .iter()
                    .rposition(|c| c.is_whitespace())
                {
                    if offset > 0 {
                        end = start + offset;
                    }
                }
            }

            let chunk: String = chars[start..end].iter().collect();
            let trimmed = chunk.trim();
            if !trimmed.is_empty() {
                chunks.push(trimmed.to_string());
            }

            if end >= chars.len() {
                break;
            }

            // Step forward, keeping overlap; always make progress
            let next = end.saturating_sub(self.chunk_overlap);
            start = if next > start { next } else { end };
        }

        chunks
    }
}

// ============================================================================
// Tests
// ============================================================================
