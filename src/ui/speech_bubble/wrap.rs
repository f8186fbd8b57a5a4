//! Greedy character-count line wrapping for bubble text.
use super::errors::PresentError;

/// Splits `message` into lines of at most `max_chars` characters.
///
/// Words (separated by single spaces, never reordered) are packed greedily: a
/// word joins the current line only while the combined character count stays
/// strictly under `max_chars`. A single word longer than the limit is
/// hard-split exactly once into a `max_chars` prefix and a remainder line;
/// the remainder is left alone even if it still exceeds the limit.
///
/// An empty message wraps to one empty line. `max_chars == 0` is an error.
pub fn wrap_message(message: &str, max_chars: usize) -> Result<Vec<String>, PresentError> {
    if max_chars == 0 {
        return Err(PresentError::invalid_wrap_width(max_chars));
    }

    let mut words = message.split(' ');
    let mut packed = Vec::new();
    let mut current = words.next().unwrap_or_default().to_string();

    for word in words {
        if char_count(&current) + char_count(word) < max_chars {
            current.push(' ');
            current.push_str(word);
        } else {
            packed.push(std::mem::replace(&mut current, word.to_string()));
        }
    }
    packed.push(current);

    // Overlong lines are necessarily single words; break each one once.
    let mut lines = Vec::with_capacity(packed.len());
    for line in packed {
        if char_count(&line) > max_chars {
            let break_index = line
                .char_indices()
                .nth(max_chars)
                .map(|(index, _)| index)
                .unwrap_or(line.len());
            lines.push(line[..break_index].to_string());
            lines.push(line[break_index..].to_string());
        } else {
            lines.push(line);
        }
    }

    Ok(lines)
}

fn char_count(text: &str) -> usize {
    text.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packs_words_greedily() {
        let lines = wrap_message("the quick brown fox", 10).unwrap();
        assert_eq!(lines, vec!["the quick", "brown fox"]);
    }

    #[test]
    fn hard_splits_a_long_word_exactly_once() {
        let lines = wrap_message("supercalifragilisticexpialidocious", 10).unwrap();
        assert_eq!(lines, vec!["supercalif", "ragilisticexpialidocious"]);
    }

    #[test]
    fn boundary_is_strictly_less_than_the_limit() {
        // 5 + 3 == 8: equality forces a break...
        assert_eq!(wrap_message("abcde fgh", 8).unwrap(), vec!["abcde", "fgh"]);
        // ...while one more column lets the pair share a line.
        assert_eq!(wrap_message("abcde fgh", 9).unwrap(), vec!["abcde fgh"]);
    }

    #[test]
    fn word_exactly_at_the_limit_is_not_split() {
        assert_eq!(wrap_message("abcdefghij", 10).unwrap(), vec!["abcdefghij"]);
    }

    #[test]
    fn empty_message_wraps_to_one_empty_line() {
        assert_eq!(wrap_message("", 50).unwrap(), vec![""]);
    }

    #[test]
    fn zero_width_is_rejected() {
        assert_eq!(
            wrap_message("anything", 0),
            Err(PresentError::invalid_wrap_width(0))
        );
    }

    #[test]
    fn consecutive_spaces_survive_wrapping() {
        assert_eq!(wrap_message("a  b", 10).unwrap(), vec!["a  b"]);
    }

    #[test]
    fn rewrapping_joined_output_keeps_the_line_count() {
        let first = wrap_message("aaaa bbbb cccc", 10).unwrap();
        assert_eq!(first.len(), 2);

        let rejoined = first.join("\n");
        let second = wrap_message(&rejoined, 10).unwrap();
        assert_eq!(second.len(), first.len());
    }

    #[test]
    fn split_respects_multibyte_characters() {
        let word = "é".repeat(13);
        let lines = wrap_message(&word, 10).unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].chars().count(), 10);
        assert_eq!(lines[1].chars().count(), 3);
    }
}
