use crate::maze::ColorId;

/// number of colors available
pub const NB_COLORS:usize = 13;

/// letters used to print colors (PALETTE[c]: letter of color c)
pub const PALETTE:[char; NB_COLORS] = ['A','C','D','E','H','I','J','K','M','O','R','S','T'];

/// letter of a color
pub fn color_to_char(c:ColorId) -> char { PALETTE[c] }

/// color of a letter (None if the letter is not part of the palette)
pub fn char_to_color(letter:char) -> Option<ColorId> {
    PALETTE.iter().position(|l| *l == letter)
}

/** writes a coloring as a string (one letter per node) */
pub fn coloring_to_string(colors:&[ColorId]) -> String {
    colors.iter().map(|c| color_to_char(*c)).collect()
}

/** reads a coloring from a string. Returns None if a letter is not part of the palette */
pub fn string_to_coloring(s:&str) -> Option<Vec<ColorId>> {
    s.chars().map(char_to_color).collect()
}
