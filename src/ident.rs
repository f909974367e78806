//! DOM Identifiers
//!
//! Short element ids for side-list entries.

use crate::models::Beer;

/// Characters of the name kept in front of the numeric id
const NAME_PREFIX_LEN: usize = 4;

/// Derive the element id for a beer: the first four characters of its name
/// with all whitespace and colons removed, followed by its id.
///
/// Two beers can only collide if they share both the name prefix and the id.
pub fn dom_id(beer: &Beer) -> String {
    let mut id: String = beer
        .name
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ':')
        .take(NAME_PREFIX_LEN)
        .collect();
    id.push_str(&beer.id.to_string());
    id
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn make_beer(id: u32, name: &str) -> Beer {
        Beer {
            id,
            name: name.to_string(),
            image_url: String::new(),
            description: String::new(),
            reviews: Vec::new(),
        }
    }

    #[test]
    fn test_short_and_long_names() {
        assert_eq!(dom_id(&make_beer(1, "IPA")), "IPA1");
        assert_eq!(dom_id(&make_beer(2, "Stout")), "Stou2");
    }

    #[test]
    fn test_strips_whitespace_and_colons() {
        assert_eq!(dom_id(&make_beer(7, "A: B\tC D")), "ABCD7");
        assert_eq!(dom_id(&make_beer(12, " :: Pale Ale")), "Pale12");
    }

    #[test]
    fn test_multibyte_names_keep_whole_chars() {
        assert_eq!(dom_id(&make_beer(3, "Bière Blonde")), "Bièr3");
    }

    #[test]
    fn test_stable_across_calls() {
        let beer = make_beer(5, "Brewdog: Punk IPA");
        assert_eq!(dom_id(&beer), dom_id(&beer));
    }

    #[test]
    fn test_distinct_prefix_id_pairs_are_unique() {
        let beers = vec![
            make_beer(1, "Punk IPA"),
            make_beer(2, "Punk IPA"),
            make_beer(1, "Pale Ale"),
            make_beer(10, "Pun"),
        ];
        let ids: HashSet<String> = beers.iter().map(dom_id).collect();
        assert_eq!(ids.len(), beers.len());
    }
}
