/// Canonicalize raw message text for classification: lower-case, replace
/// every character that is neither alphanumeric nor whitespace with a
/// space, collapse whitespace runs to single spaces, trim the ends.
///
/// Total over any input; an empty string produces an empty string. A
/// currency symbol adjacent to a digit becomes a separator here, which is
/// why amount extraction runs on the raw text instead.
pub fn normalize(text: &str) -> String {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();

    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_strips_punctuation() {
        assert_eq!(
            normalize("Rs. 200 SPENT on Swiggy!!"),
            "rs 200 spent on swiggy"
        );
    }

    #[test]
    fn test_collapses_whitespace_and_trims() {
        assert_eq!(normalize("  hello \t world \n "), "hello world");
    }

    #[test]
    fn test_currency_symbol_splits_digit_run() {
        assert_eq!(normalize("₹1,500.50 debited"), "1 500 50 debited");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
        assert_eq!(normalize("!!!"), "");
    }

    #[test]
    fn test_idempotent() {
        let inputs = [
            "Rs 200 spent on Swiggy order",
            "₹1,500.50 debited for groceries",
            "  MIXED case,  punctuation; everywhere!  ",
            "",
        ];
        for input in inputs {
            let once = normalize(input);
            assert_eq!(normalize(&once), once, "not idempotent for {input:?}");
        }
    }

    #[test]
    fn test_output_alphabet() {
        let output = normalize("A!b@C#1$2%3^ _d ");
        assert!(!output.starts_with(' ') && !output.ends_with(' '));
        assert!(!output.contains("  "));
        for c in output.chars() {
            assert!(
                (c.is_alphanumeric() && !c.is_uppercase()) || c == ' ',
                "unexpected char {c:?} in {output:?}"
            );
        }
    }
}
