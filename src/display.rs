//! Display formatting for key and chord names.
//!
//! Names are stored with ASCII accidentals ("Bb", "F#m7b5"). Only the
//! accidental attached to the root letter is rendered as a flat sign; a `b`
//! anywhere else (the `b5` of a half-diminished chord) is left alone.

const FLAT_SIGN: char = '\u{266d}';

fn substitute_root_flat(name: &str) -> String {
    let mut chars = name.chars();
    match (chars.next(), chars.next()) {
        (Some(root), Some('b')) => {
            let mut out = String::with_capacity(name.len() + 2);
            out.push(root);
            out.push(FLAT_SIGN);
            out.push_str(chars.as_str());
            out
        }
        _ => name.to_string(),
    }
}

/// Format a key name for display: `"Db"` becomes `"D♭"`.
pub fn format_key_display(key: &str) -> String {
    substitute_root_flat(key)
}

/// Format a chord name for display: `"Bbm7b5"` becomes `"B♭m7b5"`.
pub fn format_chord_display(chord: &str) -> String {
    substitute_root_flat(chord)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_root_is_substituted() {
        assert_eq!(format_chord_display("Bbm7b5"), "B♭m7b5");
        assert_eq!(format_chord_display("Ebmaj7"), "E♭maj7");
        assert_eq!(format_key_display("Db"), "D♭");
    }

    #[test]
    fn test_names_without_root_flat_pass_through() {
        assert_eq!(format_chord_display("C"), "C");
        assert_eq!(format_chord_display("F#m7b5"), "F#m7b5");
        assert_eq!(format_chord_display("Em7b5"), "Em7b5");
        assert_eq!(format_key_display("B"), "B");
        assert_eq!(format_chord_display(""), "");
    }
}
