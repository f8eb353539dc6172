//! Character sources that drive a [`crate::Session`].

/// Pull-based key stream. Keyboard frontends and scripted strings both implement this.
pub trait InputSource {
    fn has_next(&self) -> bool;
    fn next_key(&mut self) -> Option<char>;
}

/// Replays a fixed string one character at a time.
#[derive(Clone, Debug, Default)]
pub struct StringInput {
    keys: Vec<char>,
    cursor: usize,
}

impl StringInput {
    pub fn new(text: &str) -> Self {
        Self { keys: text.chars().collect(), cursor: 0 }
    }

    pub fn remaining(&self) -> usize {
        self.keys.len() - self.cursor
    }
}

impl InputSource for StringInput {
    fn has_next(&self) -> bool {
        self.cursor < self.keys.len()
    }

    fn next_key(&mut self) -> Option<char> {
        let key = self.keys.get(self.cursor).copied()?;
        self.cursor += 1;
        Some(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yields_characters_in_order_then_stops() {
        let mut input = StringInput::new("n1:");
        assert!(input.has_next());
        assert_eq!(input.remaining(), 3);
        assert_eq!(input.next_key(), Some('n'));
        assert_eq!(input.next_key(), Some('1'));
        assert_eq!(input.next_key(), Some(':'));
        assert!(!input.has_next());
        assert_eq!(input.next_key(), None);
        assert_eq!(input.remaining(), 0);
    }

    #[test]
    fn empty_input_has_nothing() {
        let mut input = StringInput::new("");
        assert!(!input.has_next());
        assert_eq!(input.next_key(), None);
    }
}
