/// A maximal run of identifier characters (letters, digits, underscore, dot)
/// containing or adjacent to the caret. `start <= caret <= end` and
/// `text == buffer[start..end]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenSpan {
    pub start: usize,
    pub end: usize,
    pub text: String,
}

impl TokenSpan {
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

fn is_token_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_' || byte == b'.'
}

/// Finds the token under `caret` by scanning left, then right, while the
/// neighboring byte is an identifier character. A caret at the buffer edge
/// with no adjacent identifier yields an empty span at that offset.
/// Qualification splitting happens in the classifier, not here: `orders.amo`
/// is one token.
pub fn token_at(buffer: &str, caret: usize) -> TokenSpan {
    let bytes = buffer.as_bytes();
    let caret = caret.min(bytes.len());

    let mut start = caret;
    while start > 0 && is_token_byte(bytes[start - 1]) {
        start -= 1;
    }
    let mut end = caret;
    while end < bytes.len() && is_token_byte(bytes[end]) {
        end += 1;
    }

    let text = buffer.get(start..end).unwrap_or_default().to_string();
    TokenSpan { start, end, text }
}
