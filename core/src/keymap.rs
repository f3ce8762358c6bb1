/// # Keymap
/// Chip-8 input is generated with a hexadecimal keypad.
///
/// Hosts hand over the symbol printed on the key they saw pressed; the digits and
/// the letters a-f map straight onto the logical key of the same hex value.
/// ```text
/// |1|2|3|C|      |1|2|3|c|
/// |4|5|6|D|  ->  |4|5|6|d|
/// |7|8|9|E|  ->  |7|8|9|e|
/// |A|0|B|F|      |a|0|b|f|
/// ```
pub fn from_symbol(symbol: char) -> Option<u8> {
    symbol.to_digit(16).map(|digit| digit as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_and_letters() {
        assert_eq!(from_symbol('0'), Some(0x0));
        assert_eq!(from_symbol('9'), Some(0x9));
        assert_eq!(from_symbol('a'), Some(0xA));
        assert_eq!(from_symbol('F'), Some(0xF));
    }

    #[test]
    fn test_unmapped() {
        assert_eq!(from_symbol('g'), None);
        assert_eq!(from_symbol(' '), None);
        assert_eq!(from_symbol('\u{1b}'), None);
    }
}
