/// The closed 33-letter Cyrillic alphabet, letter normalization and the
/// Е=Ё comparator shared by every letter check in the game.
///
/// The alphabet is indexed 0..=32: А..Я map onto 0..=31 and Ё takes the
/// final slot, which keeps `LetterSet` a single `u64` bitset.
pub const ALPHABET_LEN: usize = 33;

pub const YE: char = 'Е';
pub const YO: char = 'Ё';

const YO_INDEX: usize = 32;

/// Rows of the on-screen keyboard, standard ЙЦУКЕН order with Ё at the end.
pub const KEYBOARD_ROWS: [&str; 3] = ["ЙЦУКЕНГШЩЗХЪ", "ФЫВАПРОЛДЖЭ", "ЯЧСМИТЬБЮЁ"];

/// Index of an uppercase alphabet letter, `None` for anything else.
pub fn letter_index(ch: char) -> Option<usize> {
    match ch {
        'А'..='Я' => Some(ch as usize - 'А' as usize),
        YO => Some(YO_INDEX),
        _ => None,
    }
}

/// Letter at a given alphabet index.
pub fn letter_at(index: usize) -> Option<char> {
    match index {
        YO_INDEX => Some(YO),
        0..=31 => char::from_u32('А' as u32 + index as u32),
        _ => None,
    }
}

/// Uppercase a raw key press and keep it only if it belongs to the alphabet.
pub fn normalize_letter(raw: char) -> Option<char> {
    let up = raw.to_uppercase().next().unwrap_or(raw);
    letter_index(up).map(|_| up)
}

/// The one cross-cutting comparator: exact match, or the Е/Ё pair when the
/// equivalence rule is on. Guess matching, the completion check, letter
/// visibility and wrong-letter classification all go through here.
pub fn letters_equal(a: char, b: char, eyo: bool) -> bool {
    a == b || (eyo && matches!((a, b), (YE, YO) | (YO, YE)))
}

/// Fixed-size set over the closed alphabet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LetterSet(u64);

impl LetterSet {
    pub const EMPTY: LetterSet = LetterSet(0);

    /// Insert a letter; letters outside the alphabet are ignored.
    pub fn insert(&mut self, ch: char) {
        if let Some(i) = letter_index(ch) {
            self.0 |= 1 << i;
        }
    }

    pub fn contains(&self, ch: char) -> bool {
        letter_index(ch).is_some_and(|i| self.0 & (1 << i) != 0)
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Letters in alphabet order.
    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        let bits = self.0;
        (0..ALPHABET_LEN)
            .filter(move |i| bits & (1 << i) != 0)
            .filter_map(letter_at)
    }
}

impl FromIterator<char> for LetterSet {
    fn from_iter<T: IntoIterator<Item = char>>(iter: T) -> Self {
        let mut set = LetterSet::EMPTY;
        for ch in iter {
            set.insert(ch);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_cover_whole_alphabet() {
        for i in 0..ALPHABET_LEN {
            let ch = letter_at(i).unwrap();
            assert_eq!(letter_index(ch), Some(i));
        }
        assert_eq!(letter_at(ALPHABET_LEN), None);
    }

    #[test]
    fn normalize_uppercases_and_filters() {
        assert_eq!(normalize_letter('ж'), Some('Ж'));
        assert_eq!(normalize_letter('ё'), Some('Ё'));
        assert_eq!(normalize_letter('А'), Some('А'));
        assert_eq!(normalize_letter('q'), None);
        assert_eq!(normalize_letter('7'), None);
        assert_eq!(normalize_letter(' '), None);
    }

    #[test]
    fn equivalence_is_symmetric_and_gated() {
        assert!(letters_equal(YE, YO, true));
        assert!(letters_equal(YO, YE, true));
        assert!(!letters_equal(YE, YO, false));
        assert!(!letters_equal(YO, YE, false));
        assert!(letters_equal('К', 'К', false));
        assert!(!letters_equal('К', 'Т', true));
    }

    #[test]
    fn letter_set_basics() {
        let mut set = LetterSet::EMPTY;
        assert!(set.is_empty());
        set.insert('Б');
        set.insert('Ё');
        set.insert('Б');
        assert_eq!(set.len(), 2);
        assert!(set.contains('Б'));
        assert!(set.contains('Ё'));
        assert!(!set.contains('А'));
        assert_eq!(set.iter().collect::<Vec<_>>(), vec!['Б', 'Ё']);
    }

    #[test]
    fn letter_set_ignores_foreign_chars() {
        let mut set = LetterSet::EMPTY;
        set.insert('x');
        set.insert('!');
        assert!(set.is_empty());
        assert!(!set.contains('x'));
    }

    #[test]
    fn keyboard_rows_cover_alphabet_exactly_once() {
        let all: Vec<char> = KEYBOARD_ROWS.iter().flat_map(|r| r.chars()).collect();
        assert_eq!(all.len(), ALPHABET_LEN);
        let set: LetterSet = all.iter().copied().collect();
        assert_eq!(set.len(), ALPHABET_LEN);
    }
}
