use crate::core::ParseError;

pub const PREFIX_LANGUAGE: &str = "l/";
pub const PREFIX_ENGLISH: &str = "e/";
pub const PREFIX_FOREIGN: &str = "f/";
pub const PREFIX_RANGE: &str = "r/";

/// The argument remainder of a command line, split into the preamble (text
/// before the first prefix) and one value per prefix occurrence, in input
/// order. A prefix only counts when it starts the remainder or follows
/// whitespace, so slashes inside phrases survive untouched.
pub struct ArgumentMap {
    preamble: String,
    values: Vec<(&'static str, String)>,
}

pub fn tokenize(args: &str, prefixes: &[&'static str]) -> ArgumentMap {
    let mut marks: Vec<(usize, &'static str)> = Vec::new();
    for &prefix in prefixes {
        for (pos, _) in args.match_indices(prefix) {
            if pos == 0 || args[..pos].ends_with(char::is_whitespace) {
                marks.push((pos, prefix));
            }
        }
    }
    marks.sort_unstable_by_key(|&(pos, _)| pos);

    let preamble_end = marks.first().map_or(args.len(), |&(pos, _)| pos);
    let preamble = args[..preamble_end].trim().to_string();

    let mut values = Vec::with_capacity(marks.len());
    for (i, &(pos, prefix)) in marks.iter().enumerate() {
        let value_end = marks.get(i + 1).map_or(args.len(), |&(next, _)| next);
        let value = args[pos + prefix.len()..value_end].trim().to_string();
        values.push((prefix, value));
    }

    ArgumentMap { preamble, values }
}

impl ArgumentMap {
    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    /// First value given for `prefix`, if any.
    pub fn value(&self, prefix: &str) -> Option<&str> {
        self.values.iter().find(|(p, _)| *p == prefix).map(|(_, v)| v.as_str())
    }

    /// Every value given for `prefix`, in input order.
    pub fn values(&self, prefix: &str) -> Vec<&str> {
        self.values.iter().filter(|(p, _)| *p == prefix).map(|(_, v)| v.as_str()).collect()
    }

    pub fn count(&self, prefix: &str) -> usize {
        self.values.iter().filter(|(p, _)| *p == prefix).count()
    }
}

/// Parses a one-based flashcard index: digits only, no sign, non-zero.
pub fn parse_index(input: &str) -> Result<usize, ParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return Err(ParseError::InvalidIndex);
    }
    match trimmed.parse::<usize>() {
        Ok(index) if index > 0 => Ok(index),
        _ => Err(ParseError::InvalidIndex),
    }
}

/// Parses an inclusive one-based index range: exactly two indices with the
/// second no smaller than the first.
pub fn parse_index_range(input: &str) -> Result<(usize, usize), ParseError> {
    let tokens: Vec<&str> = input.split_whitespace().collect();
    if tokens.len() != 2 {
        return Err(ParseError::InvalidIndexRange);
    }
    let first = parse_index(tokens[0])?;
    let second = parse_index(tokens[1])?;
    if second < first {
        return Err(ParseError::InvalidIndexRange);
    }
    Ok((first, second))
}

/// Parses the optional `n` of `list n`. Any integer is accepted here;
/// out-of-range values fall back to a plain listing at execution time.
pub fn parse_sample_size(input: &str) -> Result<i64, ParseError> {
    input.trim().parse::<i64>().map_err(|_| ParseError::InvalidN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_splits_preamble_and_prefixed_values() {
        let map = tokenize(" 1 l/Chinese f/早安 e/Good morning", &[
            PREFIX_LANGUAGE,
            PREFIX_ENGLISH,
            PREFIX_FOREIGN,
        ]);
        assert_eq!(map.preamble(), "1");
        assert_eq!(map.value(PREFIX_LANGUAGE), Some("Chinese"));
        assert_eq!(map.value(PREFIX_FOREIGN), Some("早安"));
        assert_eq!(map.value(PREFIX_ENGLISH), Some("Good morning"));
    }

    #[test]
    fn tokenize_ignores_prefixes_inside_words() {
        // "nice/naughty" contains "e/" but not at a token boundary
        let map = tokenize(" e/nice/naughty f/好", &[PREFIX_ENGLISH, PREFIX_FOREIGN]);
        assert_eq!(map.value(PREFIX_ENGLISH), Some("nice/naughty"));
        assert_eq!(map.value(PREFIX_FOREIGN), Some("好"));
    }

    #[test]
    fn tokenize_keeps_repeated_prefixes_in_order() {
        let map = tokenize(" e/hello e/bye f/你好", &[PREFIX_ENGLISH, PREFIX_FOREIGN]);
        assert_eq!(map.values(PREFIX_ENGLISH), vec!["hello", "bye"]);
        assert_eq!(map.count(PREFIX_ENGLISH), 2);
        assert_eq!(map.count(PREFIX_RANGE), 0);
    }

    #[test]
    fn tokenize_without_prefixes_is_all_preamble() {
        let map = tokenize("  dictionary.csv  ", &[PREFIX_ENGLISH]);
        assert_eq!(map.preamble(), "dictionary.csv");
        assert!(map.value(PREFIX_ENGLISH).is_none());
    }

    #[test]
    fn index_must_be_a_non_zero_unsigned_integer() {
        assert_eq!(parse_index("1"), Ok(1));
        assert_eq!(parse_index(" 42 "), Ok(42));

        for bad in ["0", "-1", "+1", "abc", "1.5", "", "  "] {
            assert_eq!(parse_index(bad), Err(ParseError::InvalidIndex), "input: {bad:?}");
        }
    }

    #[test]
    fn index_range_requires_two_ordered_indices() {
        assert_eq!(parse_index_range("1 3"), Ok((1, 3)));
        assert_eq!(parse_index_range("2 2"), Ok((2, 2)));

        assert_eq!(parse_index_range("3 1"), Err(ParseError::InvalidIndexRange));
        assert_eq!(parse_index_range("1"), Err(ParseError::InvalidIndexRange));
        assert_eq!(parse_index_range("1 2 3"), Err(ParseError::InvalidIndexRange));
        assert_eq!(parse_index_range("a 2"), Err(ParseError::InvalidIndex));
    }

    #[test]
    fn sample_size_accepts_any_integer() {
        assert_eq!(parse_sample_size("4"), Ok(4));
        assert_eq!(parse_sample_size("-2"), Ok(-2));
        assert_eq!(parse_sample_size("four"), Err(ParseError::InvalidN));
    }
}
