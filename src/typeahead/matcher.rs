use super::types::Row;

pub trait CandidateMatcher: Send + Sync {
    fn matches(&self, query: &str, candidate: &str) -> bool;
}

/// Case-sensitive contiguous substring test, with no trimming or folding.
#[derive(Debug, Default, Clone, Copy)]
pub struct SubstringMatcher;

impl CandidateMatcher for SubstringMatcher {
    fn matches(&self, query: &str, candidate: &str) -> bool {
        candidate.contains(query)
    }
}

/// Rows for every candidate accepted by `matcher`, in candidate order.
///
/// An empty query never produces rows.
pub fn filter_rows(
    query: &str,
    candidates: &[String],
    matcher: &dyn CandidateMatcher,
) -> Vec<Row> {
    if query.is_empty() {
        return Vec::new();
    }
    candidates
        .iter()
        .filter(|candidate| matcher.matches(query, candidate))
        .map(|candidate| Row::new(candidate.as_str()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{SubstringMatcher, filter_rows};

    fn candidates(items: &[&str]) -> Vec<String> {
        items.iter().map(|item| item.to_string()).collect()
    }

    fn texts(query: &str, all: &[String]) -> Vec<String> {
        filter_rows(query, all, &SubstringMatcher)
            .into_iter()
            .map(|row| row.text)
            .collect()
    }

    #[test]
    fn keeps_candidate_order_for_substring_hits() {
        let all = candidates(&[
            "caturday", "puppies", "koala", "otter", "rabbits", "cute cat", "cute dog",
        ]);
        assert_eq!(texts("cut", &all), vec!["cute cat", "cute dog"]);
        assert_eq!(texts("at", &all), vec!["caturday", "cute cat"]);
    }

    #[test]
    fn matching_is_case_sensitive_and_untrimmed() {
        let all = candidates(&["#LoveIsLove", "koala"]);
        assert_eq!(texts("Love", &all), vec!["#LoveIsLove"]);
        assert!(texts("love", &all).is_empty());
        assert!(texts(" koala", &all).is_empty());
    }

    #[test]
    fn empty_query_yields_no_rows() {
        let all = candidates(&["koala"]);
        assert!(texts("", &all).is_empty());
    }

    #[test]
    fn duplicates_are_kept() {
        let all = candidates(&["otter", "otter"]);
        assert_eq!(texts("ott", &all), vec!["otter", "otter"]);
    }
}
