/// The searched string, decoded once. Matching works on char indices into
/// `chars`; `offsets` maps them back to byte offsets in `text`.
pub(crate) struct Haystack<'h> {
    text: &'h str,
    chars: Vec<char>,
    offsets: Vec<usize>,
}

impl<'h> Haystack<'h> {
    pub fn new(text: &'h str) -> Self {
        let (offsets, chars): (Vec<usize>, Vec<char>) = text.char_indices().unzip();
        let mut offsets = offsets;
        offsets.push(text.len());

        Haystack {
            text,
            chars,
            offsets,
        }
    }

    /// Length in chars.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn chars(&self, start: usize, end: usize) -> &[char] {
        &self.chars[start..end]
    }

    pub fn char_at(&self, index: usize) -> char {
        self.chars[index]
    }

    pub fn byte_offset(&self, index: usize) -> usize {
        self.offsets[index]
    }

    pub fn slice(&self, start: usize, end: usize) -> &'h str {
        &self.text[self.offsets[start]..self.offsets[end]]
    }

    pub fn text(&self) -> &'h str {
        self.text
    }
}
