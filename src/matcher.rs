use strsim::jaro_winkler;

const CUTOFF: f64 = 0.75;

/// Indices of the choices scoring at least `cutoff` against `word`, best
/// first. Ties keep choice order.
fn rank_choices(word: &str, choices: &[String], cutoff: f64) -> Vec<usize> {
    let mut scored: Vec<(usize, f64)> = choices
        .iter()
        .enumerate()
        .map(|(index, choice)| (index, jaro_winkler(word, &choice.to_lowercase())))
        .filter(|&(_, score)| score >= cutoff)
        .collect();

    scored.sort_by(|a, b| b.1.total_cmp(&a.1));
    scored.into_iter().map(|(index, _)| index).collect()
}

#[derive(Debug, PartialEq, Eq)]
pub enum Match {
    Exact(usize),
    Close(usize),
    Ambiguous(Vec<String>),
    NotFound,
}

/// Resolves one answer token against `choices`, either as a 1-based number
/// or as a (possibly misspelled) choice name.
pub fn get_match(query: &str, choices: &[String]) -> Match {
    let query = query.trim().to_lowercase();

    if let Ok(number) = query.parse::<usize>() {
        return match number {
            n if n >= 1 && n <= choices.len() => Match::Exact(n - 1),
            _ => Match::NotFound,
        };
    }

    if let Some(index) = choices.iter().position(|c| c.to_lowercase() == query) {
        return Match::Exact(index);
    }

    match rank_choices(&query, choices, CUTOFF).as_slice() {
        [] => Match::NotFound,
        [index] => Match::Close(*index),
        ranked => Match::Ambiguous(ranked.iter().map(|&i| choices[i].clone()).collect()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn choices() -> Vec<String> {
        ["abstracts", "base", "components", "layout", "pages", "themes", "vendors"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn test_exact_name_is_case_insensitive() {
        assert_eq!(get_match("Layout", &choices()), Match::Exact(3));
        assert_eq!(get_match(" base ", &choices()), Match::Exact(1));
    }

    #[test]
    fn test_number() {
        assert_eq!(get_match("1", &choices()), Match::Exact(0));
        assert_eq!(get_match("7", &choices()), Match::Exact(6));
        assert_eq!(get_match("0", &choices()), Match::NotFound);
        assert_eq!(get_match("8", &choices()), Match::NotFound);
    }

    #[test]
    fn test_misspelling() {
        assert_eq!(get_match("componets", &choices()), Match::Close(2));
        assert_eq!(get_match("vendor", &choices()), Match::Close(6));
    }

    #[test]
    fn test_no_match() {
        assert_eq!(get_match("xyz", &choices()), Match::NotFound);
    }

    #[test]
    fn test_rank_best_first() {
        let possibilities = vec!["page".to_string(), "pages".to_string()];
        assert_eq!(rank_choices("pages", &possibilities, CUTOFF), vec![1, 0]);
    }

    #[test]
    fn test_ambiguous_lists_candidates() {
        let possibilities = vec!["theme".to_string(), "themes".to_string()];
        assert_eq!(
            get_match("themex", &possibilities),
            Match::Ambiguous(vec!["theme".to_string(), "themes".to_string()])
        );
    }
}
