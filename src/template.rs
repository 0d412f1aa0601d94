//! `{placeholder}` interpolation shared by the name and lore composers.
//!
//! Placeholders are identifiers (ASCII letters, digits, `_`) wrapped in
//! braces. Anything else between braces, or an unmatched brace, is copied
//! through literally.

/// Iterate over the placeholder keys of `template`, in order of appearance.
pub fn placeholders(template: &str) -> impl Iterator<Item = &str> {
    Segments { rest: template }.filter_map(|segment| match segment {
        Segment::Placeholder(key) => Some(key),
        Segment::Literal(_) => None,
    })
}

/// Whether `template` references `key`.
pub fn references(template: &str, key: &str) -> bool {
    placeholders(template).any(|k| k == key)
}

/// Substitute every placeholder for which `lookup` returns a value.
///
/// Placeholders `lookup` does not know are left as written.
pub fn render<F, S>(template: &str, mut lookup: F) -> String
where
    F: FnMut(&str) -> Option<S>,
    S: AsRef<str>,
{
    let mut out = String::with_capacity(template.len() + 32);
    for segment in (Segments { rest: template }) {
        match segment {
            Segment::Literal(text) => out.push_str(text),
            Segment::Placeholder(key) => match lookup(key) {
                Some(value) => out.push_str(value.as_ref()),
                None => {
                    out.push('{');
                    out.push_str(key);
                    out.push('}');
                }
            },
        }
    }
    out
}

/// Upper-case the first character and lower-case the rest.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

enum Segment<'a> {
    Literal(&'a str),
    Placeholder(&'a str),
}

struct Segments<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }

        let Some(open) = self.rest.find('{') else {
            let literal = self.rest;
            self.rest = "";
            return Some(Segment::Literal(literal));
        };

        if open > 0 {
            let literal = &self.rest[..open];
            self.rest = &self.rest[open..];
            return Some(Segment::Literal(literal));
        }

        // `rest` starts with '{'
        match self.rest[1..].find('}') {
            Some(close) if is_identifier(&self.rest[1..=close]) => {
                let key = &self.rest[1..=close];
                self.rest = &self.rest[close + 2..];
                Some(Segment::Placeholder(key))
            }
            _ => {
                let literal = &self.rest[..1];
                self.rest = &self.rest[1..];
                Some(Segment::Literal(literal))
            }
        }
    }
}

fn is_identifier(key: &str) -> bool {
    !key.is_empty() && key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}
