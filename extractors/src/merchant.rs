use shared_types::UNKNOWN_MERCHANT;

/// Known merchant names, lower-cased. Order is significant: entries are
/// checked by substring containment and the first hit wins, so list
/// position is the tie-break if one name ever contains another.
const MERCHANTS: &[&str] = &[
    "swiggy",
    "zomato",
    "amazon",
    "flipkart",
    "netflix",
    "uber",
    "ola",
    "pizza hut",
    "dominos",
    "mcdonald",
    "starbucks",
    "big bazaar",
    "dmart",
];

/// Finds a known merchant name via substring matching against a fixed
/// vocabulary
pub struct MerchantExtractor {
    vocabulary: &'static [&'static str],
}

impl MerchantExtractor {
    pub fn new() -> Self {
        Self {
            vocabulary: MERCHANTS,
        }
    }

    /// Title-cased form of the first vocabulary entry contained in the
    /// lower-cased raw text; [`UNKNOWN_MERCHANT`] when nothing matches
    pub fn extract(&self, text: &str) -> String {
        let lowered = text.to_lowercase();

        for merchant in self.vocabulary {
            if lowered.contains(merchant) {
                return title_case(merchant);
            }
        }

        UNKNOWN_MERCHANT.to_string()
    }
}

impl Default for MerchantExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Upper-case the first letter of each whitespace-separated word
fn title_case(name: &str) -> String {
    name.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_merchant() {
        let extractor = MerchantExtractor::new();
        assert_eq!(extractor.extract("Rs 200 spent on Swiggy order"), "Swiggy");
        assert_eq!(extractor.extract("Netflix subscription renewed"), "Netflix");
    }

    #[test]
    fn test_case_insensitive() {
        let extractor = MerchantExtractor::new();
        assert_eq!(extractor.extract("SWIGGY order"), "Swiggy");
        assert_eq!(extractor.extract("swiggy order"), "Swiggy");
    }

    #[test]
    fn test_multi_word_title_case() {
        let extractor = MerchantExtractor::new();
        assert_eq!(extractor.extract("shopping at big bazaar today"), "Big Bazaar");
        assert_eq!(extractor.extract("Pizza Hut delivery"), "Pizza Hut");
    }

    #[test]
    fn test_vocabulary_order_breaks_ties() {
        // Both names appear; swiggy is listed before zomato and wins.
        let extractor = MerchantExtractor::new();
        assert_eq!(extractor.extract("zomato vs swiggy? ordered swiggy"), "Swiggy");
    }

    #[test]
    fn test_unknown_merchant_sentinel() {
        let extractor = MerchantExtractor::new();
        assert_eq!(extractor.extract("Rs 50 paid for bus fare"), UNKNOWN_MERCHANT);
        assert_eq!(extractor.extract(""), UNKNOWN_MERCHANT);
    }
}
