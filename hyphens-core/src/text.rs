//! Word segmentation for running text

use unicode_normalization::char::is_combining_mark;

/// Unicode soft hyphen, the conventional separator for typeset output
pub const SOFT_HYPHEN: char = '\u{00AD}';

/// Characters that extend a word once it has started, so that runs like
/// `example.com/page.html` are hyphenated as one unit
const CONTINUATION_CHARS: [char; 2] = ['/', '.'];

/// A piece of text as seen by the hyphenator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// A run starting with a letter, to be hyphenated
    Word(&'a str),
    /// A single character outside any word, copied verbatim
    Other(&'a str),
}

impl<'a> Segment<'a> {
    /// The underlying slice of the input
    pub fn as_str(&self) -> &'a str {
        match self {
            Segment::Word(s) | Segment::Other(s) => s,
        }
    }
}

/// Iterator over the words and non-word characters of a text
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    text: &'a str,
    pos: usize,
}

/// Split `text` into [`Segment`]s.
///
/// A word starts at a letter and continues over letters, `/` and `.`. Everything else is yielded one character at a
/// time. Concatenating all segments reproduces `text`.
pub fn segments(text: &str) -> Segments<'_> {
    Segments { text, pos: 0 }
}

/// Letters are the `L*` general categories.
///
/// `char::is_alphabetic` also accepts combining vowel signs and letter-like
/// numerals such as `Ⅻ`; neither may start or extend a word. Other
/// alphabetic symbols (circled letters) are still treated as letters.
fn is_letter(ch: char) -> bool {
    ch.is_alphabetic() && !ch.is_numeric() && !is_combining_mark(ch)
}

fn is_word_char(ch: char) -> bool {
    is_letter(ch) || CONTINUATION_CHARS.contains(&ch)
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = &self.text[self.pos..];
        let mut chars = rest.char_indices();
        let (_, first) = chars.next()?;

        if !is_letter(first) {
            let len = first.len_utf8();
            self.pos += len;
            return Some(Segment::Other(&rest[..len]));
        }

        let end = chars
            .find(|&(_, ch)| !is_word_char(ch))
            .map_or(rest.len(), |(idx, _)| idx);
        self.pos += end;
        Some(Segment::Word(&rest[..end]))
    }
}
