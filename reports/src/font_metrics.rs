//! Advance widths of the builtin Helvetica faces, taken from the Adobe core font metrics.

/// Widths of the printable ASCII range (`' '..='~'`) in thousandths of the font size.
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556, // '0'..'?'
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, // '@'..'O'
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556, // 'P'..'_'
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, // '`'..'o'
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584, // 'p'..'~'
];

const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611, // '0'..'?'
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778, // '@'..'O'
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556, // 'P'..'_'
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611, // '`'..'o'
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584, // 'p'..'~'
];

/// Width used for glyphs outside the table, never narrower than the real glyph.
const FALLBACK_WIDTH: u16 = 1000;

pub const PT_TO_MM: f32 = 0.352_778;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Face {
    Regular,
    Bold,
}

impl Face {
    /// Advance width of `c` in thousandths of the font size.
    pub fn advance(self, c: char) -> u16 {
        let table = match self {
            Face::Regular => &HELVETICA,
            Face::Bold => &HELVETICA_BOLD,
        };

        match c {
            ' '..='~' => table[c as usize - ' ' as usize],
            '\u{a0}' => table[0],
            // Dotless base, wider than 'i'.
            'ì'..='ï' => 278,
            'ß' => 611,
            '°' => 400,
            'ª' => 370,
            'º' => 365,
            '«' | '»' => 556,
            '·' => 278,
            _ => match base_letter(c) {
                Some(base) => table[base as usize - ' ' as usize],
                None => FALLBACK_WIDTH,
            },
        }
    }

    /// Width of `c` in millimeters at `font_size` points.
    pub fn char_width(self, c: char, font_size: f32) -> f32 {
        f32::from(self.advance(c)) / 1000.0 * font_size * PT_TO_MM
    }

    /// Width of `text` in millimeters at `font_size` points.
    pub fn text_width(self, text: &str, font_size: f32) -> f32 {
        text.chars().map(|c| self.char_width(c, font_size)).sum()
    }
}

/// Accented Latin-1 letters share the advance width of their base letter.
fn base_letter(c: char) -> Option<char> {
    Some(match c {
        'À'..='Å' => 'A',
        'Ç' => 'C',
        'È'..='Ë' => 'E',
        'Ì'..='Ï' => 'I',
        'Ñ' => 'N',
        'Ò'..='Ö' | 'Ø' => 'O',
        'Ù'..='Ü' => 'U',
        'Ý' => 'Y',
        'à'..='å' => 'a',
        'ç' => 'c',
        'è'..='ë' => 'e',
        'ñ' => 'n',
        'ò'..='ö' | 'ø' => 'o',
        'ù'..='ü' => 'u',
        'ý' | 'ÿ' => 'y',
        _ => return None,
    })
}
