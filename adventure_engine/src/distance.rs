//! Edit distance helpers.
//!
//! Used to turn a mistyped verb into a "Did you mean ...?" suggestion. Distances are
//! Levenshtein distances (unit cost insert / delete / substitute) from `strsim`, which
//! counts `char`s, so multi-byte input is measured by characters rather than bytes.

/// Returns the minimum number of single-character edits needed to turn `a` into `b`.
pub fn edit_distance(a: &str, b: &str) -> usize {
    strsim::levenshtein(a, b)
}

/// Find the candidate closest to `input` by edit distance.
///
/// Ties go to the earliest candidate: a later candidate only replaces the current best
/// if it is strictly closer. Returns `None` only when `candidates` is empty.
pub fn closest_match<'a, I>(input: &str, candidates: I) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut best: Option<(&'a str, usize)> = None;
    for candidate in candidates {
        let distance = edit_distance(input, candidate);
        if best.is_none_or(|(_, best_distance)| distance < best_distance) {
            best = Some((candidate, distance));
        }
    }
    best.map(|(candidate, _)| candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_strings_have_zero_distance() {
        for word in ["", "a", "lookaround", "skeletonknight"] {
            assert_eq!(edit_distance(word, word), 0);
        }
    }

    #[test]
    fn distance_to_empty_is_length() {
        assert_eq!(edit_distance("", "attack"), 6);
        assert_eq!(edit_distance("attack", ""), 6);
    }

    #[test]
    fn distance_is_symmetric() {
        let pairs = [("kitten", "sitting"), ("goto", "got"), ("equip", "unequip"), ("", "x")];
        for (a, b) in pairs {
            assert_eq!(edit_distance(a, b), edit_distance(b, a), "{a} vs {b}");
        }
    }

    #[test]
    fn classic_examples() {
        assert_eq!(edit_distance("kitten", "sitting"), 3);
        assert_eq!(edit_distance("flaw", "lawn"), 2);
        assert_eq!(edit_distance("equip", "unequip"), 2);
    }

    #[test]
    fn typos_of_verbs_are_one_edit_away() {
        let pairs = [("lokaround", "lookaround"), ("equp", "equip"), ("atack", "attack"), ("exi", "exit")];
        for (typo, verb) in pairs {
            assert_eq!(edit_distance(typo, verb), 1, "{typo} vs {verb}");
        }
    }

    #[test]
    fn counts_characters_not_bytes() {
        assert_eq!(edit_distance("café", "cafe"), 1);
    }

    #[test]
    fn closest_match_prefers_smallest_distance() {
        let verbs = ["help", "inventory", "attack"];
        assert_eq!(closest_match("atack", verbs), Some("attack"));
        assert_eq!(closest_match("hlep", verbs), Some("help"));
    }

    #[test]
    fn closest_match_keeps_first_on_ties() {
        // "ab" is one edit away from both candidates
        assert_eq!(closest_match("ab", ["a", "b"]), Some("a"));
        assert_eq!(closest_match("ab", ["b", "a"]), Some("b"));
    }

    #[test]
    fn closest_match_of_nothing_is_none() {
        assert_eq!(closest_match("anything", std::iter::empty()), None);
    }
}
