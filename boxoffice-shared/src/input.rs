/// Parses raw menu input as a strictly positive integer. The interactive
/// front end validates user entries with this before calling the engine.
pub fn parse_positive_int(input: &str) -> Option<u32> {
    input.parse::<u32>().ok().filter(|n| *n > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_positive_integers() {
        assert_eq!(parse_positive_int("12"), Some(12));
    }

    #[test]
    fn accepts_zero_padded_integers() {
        assert_eq!(parse_positive_int("003"), Some(3));
    }

    #[test]
    fn rejects_negative_integers() {
        assert_eq!(parse_positive_int("-3"), None);
    }

    #[test]
    fn rejects_zero() {
        assert_eq!(parse_positive_int("0"), None);
    }

    #[test]
    fn rejects_non_numeric_strings() {
        assert_eq!(parse_positive_int("abcs"), None);
        assert_eq!(parse_positive_int(""), None);
        assert_eq!(parse_positive_int("3.5"), None);
    }
}
