use indexmap::IndexMap;

/// Parsed GTF attribute column.
///
/// Keys keep the position of their first occurrence; values are those of
/// the last occurrence.
pub type Attributes = IndexMap<String, String>;

/// Parse a `key "value"; key "value";` attribute string.
///
/// Every non-whitespace token immediately followed by a single space and a
/// non-empty double-quoted value becomes an entry. Anything else (unquoted
/// values, empty quotes, an unterminated quote) is ignored.
#[must_use]
pub fn parse_attributes(text: &str) -> Attributes {
    let mut attributes = Attributes::new();
    for (key, value) in AttributeScanner::new(text) {
        attributes.insert(key.to_string(), value.to_string());
    }
    attributes
}

/// Single forward pass over an attribute string yielding `(key, value)` pairs.
///
/// Never backtracks past the current token, so a full scan is linear in the
/// length of the input.
#[derive(Debug, Clone)]
pub struct AttributeScanner<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> AttributeScanner<'a> {
    #[must_use]
    pub fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }
}

impl<'a> Iterator for AttributeScanner<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        let text = self.text;

        while self.pos < text.len() {
            let Some(offset) = text[self.pos..].find(|c: char| !c.is_whitespace()) else {
                break;
            };
            let key_start = self.pos + offset;
            let key_end = text[key_start..]
                .find(char::is_whitespace)
                .map_or(text.len(), |i| key_start + i);
            self.pos = key_end;

            if !text[key_end..].starts_with(" \"") {
                continue;
            }

            let value_start = key_end + 2;
            match text[value_start..].find('"') {
                // No closing quote anywhere: nothing further can match
                None => break,
                // Empty value
                Some(0) => continue,
                Some(len) => {
                    let value_end = value_start + len;
                    self.pos = value_end + 1;
                    return Some((&text[key_start..key_end], &text[value_start..value_end]));
                }
            }
        }

        self.pos = text.len();
        None
    }
}
