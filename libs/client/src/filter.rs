//! Pure, synchronous filtering over an already-fetched item list.
//!
//! The browse screen keeps every item in memory and re-derives the visible
//! list from the status tab and the search term. Nothing here talks to the
//! network, which is what makes it trivially testable.

use domain_items::{Item, ItemStatus};

/// How many entries the suggestion dropdown shows at most.
pub const MAX_SUGGESTIONS: usize = 6;

/// Status tab selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Lost,
    Found,
}

impl StatusFilter {
    fn matches(self, status: ItemStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Lost => status == ItemStatus::Lost,
            StatusFilter::Found => status == ItemStatus::Found,
        }
    }
}

/// Apply the status tab and the search term.
///
/// The term matches case-insensitively as a substring of the name,
/// description or category. An empty term matches everything.
pub fn filter_items<'a>(
    items: &'a [Item],
    status: StatusFilter,
    term: &str,
) -> Vec<&'a Item> {
    let term = term.to_lowercase();
    items
        .iter()
        .filter(|item| status.matches(item.status))
        .filter(|item| {
            item.name.to_lowercase().contains(&term)
                || item.description.to_lowercase().contains(&term)
                || item.category.to_lowercase().contains(&term)
        })
        .collect()
}

/// Dropdown suggestions for a partial search term.
///
/// Narrower than [`filter_items`]: only the name and category are searched,
/// and the result is capped at [`MAX_SUGGESTIONS`] entries.
pub fn suggestions<'a>(items: &'a [Item], term: &str) -> Vec<&'a Item> {
    let term = term.to_lowercase();
    items
        .iter()
        .filter(|item| {
            item.name.to_lowercase().contains(&term)
                || item.category.to_lowercase().contains(&term)
        })
        .take(MAX_SUGGESTIONS)
        .collect()
}

/// A run of text that either matched the search term or did not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub highlighted: bool,
}

/// Split `text` into spans so a renderer can emphasize the matched parts.
///
/// Matching is case-insensitive; the spans preserve the original casing and
/// concatenate back to `text` exactly. An empty term yields one plain span.
/// A match ending partway through a character's lowercase expansion
/// highlights the whole character.
pub fn highlight_spans(text: &str, term: &str) -> Vec<Span> {
    if term.is_empty() || text.is_empty() {
        return vec![Span {
            text: text.to_string(),
            highlighted: false,
        }];
    }

    let needle = term.to_lowercase();

    // Lowercasing can change byte lengths outside ASCII, so byte offsets
    // into the haystack are not offsets into `text`. Record which source
    // character produced each haystack byte and slice along those.
    let mut haystack = String::new();
    let mut owner = Vec::new();
    for (at, ch) in text.char_indices() {
        for low in ch.to_lowercase() {
            for _ in 0..low.len_utf8() {
                owner.push(at);
            }
            haystack.push(low);
        }
    }

    let char_end = |at: usize| at + text[at..].chars().next().map_or(0, char::len_utf8);

    let mut spans = Vec::new();
    let mut from = 0;
    let mut emitted = 0;

    while let Some(offset) = haystack[from..].find(&needle) {
        let hit = from + offset;
        let start = owner[hit];
        let end = char_end(owner[hit + needle.len() - 1]);
        if start > emitted {
            spans.push(Span {
                text: text[emitted..start].to_string(),
                highlighted: false,
            });
        }
        spans.push(Span {
            text: text[start..end].to_string(),
            highlighted: true,
        });
        emitted = end;
        // Step past every haystack byte the emitted characters produced, so
        // the next search cannot land inside a character already spanned.
        from = hit + needle.len();
        while from < haystack.len() && owner[from] < end {
            from += 1;
        }
    }

    if emitted < text.len() {
        spans.push(Span {
            text: text[emitted..].to_string(),
            highlighted: false,
        });
    }

    spans
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn item(name: &str, description: &str, status: ItemStatus, category: &str) -> Item {
        Item {
            id: Uuid::now_v7(),
            name: name.to_string(),
            description: description.to_string(),
            status,
            category: category.to_string(),
            location: None,
            image_url: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn sample_items() -> Vec<Item> {
        vec![
            item("Black Backpack", "Left in the library", ItemStatus::Lost, "Accessories"),
            item("AirPods Pro", "Found at the gym", ItemStatus::Found, "Electronics"),
            item("Water Bottle", "Blue Hydro Flask", ItemStatus::Lost, "Other"),
            item("Student ID", "Name: Jordan", ItemStatus::Found, "ID/Cards"),
        ]
    }

    #[test]
    fn all_filter_with_empty_term_keeps_everything() {
        let items = sample_items();
        assert_eq!(filter_items(&items, StatusFilter::All, "").len(), 4);
    }

    #[test]
    fn status_filter_narrows_by_tab() {
        let items = sample_items();
        let lost = filter_items(&items, StatusFilter::Lost, "");
        assert_eq!(lost.len(), 2);
        assert!(lost.iter().all(|i| i.status == ItemStatus::Lost));
    }

    #[test]
    fn term_matches_any_of_name_description_category() {
        let items = sample_items();
        // name
        assert_eq!(filter_items(&items, StatusFilter::All, "backpack").len(), 1);
        // description
        assert_eq!(filter_items(&items, StatusFilter::All, "gym").len(), 1);
        // category
        assert_eq!(filter_items(&items, StatusFilter::All, "electronics").len(), 1);
    }

    #[test]
    fn term_is_case_insensitive() {
        let items = sample_items();
        let upper = filter_items(&items, StatusFilter::All, "BACKPACK");
        let lower = filter_items(&items, StatusFilter::All, "backpack");
        assert_eq!(upper.len(), lower.len());
    }

    #[test]
    fn status_and_term_compose() {
        let items = sample_items();
        // "o" matches several names but only one of them is Found + Electronics
        let found = filter_items(&items, StatusFilter::Found, "airpods");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "AirPods Pro");

        let none = filter_items(&items, StatusFilter::Lost, "airpods");
        assert!(none.is_empty());
    }

    #[test]
    fn suggestions_ignore_description_and_cap_at_six() {
        let mut items = sample_items();
        // "gym" only appears in a description
        assert!(suggestions(&items, "gym").is_empty());

        for n in 0..10 {
            items.push(item(&format!("Umbrella {n}"), "", ItemStatus::Lost, "Other"));
        }
        assert_eq!(suggestions(&items, "umbrella").len(), MAX_SUGGESTIONS);
    }

    #[test]
    fn highlight_preserves_original_casing() {
        let spans = highlight_spans("Black Backpack", "back");
        assert_eq!(
            spans,
            vec![
                Span { text: "Black ".into(), highlighted: false },
                Span { text: "Back".into(), highlighted: true },
                Span { text: "pack".into(), highlighted: false },
            ]
        );
        let rebuilt: String = spans.into_iter().map(|s| s.text).collect();
        assert_eq!(rebuilt, "Black Backpack");
    }

    #[test]
    fn highlight_survives_case_mappings_that_resize_characters() {
        // Lowercasing shifts byte offsets here: 'İ' grows 2 -> 3 bytes while
        // 'ẞ' shrinks 3 -> 2, so the source and lowercased strings have the
        // same total length but disagree on every boundary after 'İ'.
        let spans = highlight_spans("İẞ", "ß");
        assert_eq!(
            spans,
            vec![
                Span { text: "İ".into(), highlighted: false },
                Span { text: "ẞ".into(), highlighted: true },
            ]
        );

        // A term matching inside a character's lowercase expansion still
        // yields spans that rebuild the original exactly.
        let spans = highlight_spans("İẞ", "i");
        let rebuilt: String = spans.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(rebuilt, "İẞ");
        assert!(spans[0].highlighted);
        assert_eq!(spans[0].text, "İ");
    }

    #[test]
    fn highlight_matches_non_ascii_terms() {
        let spans = highlight_spans("Café au lait", "CAFÉ");
        assert_eq!(
            spans,
            vec![
                Span { text: "Café".into(), highlighted: true },
                Span { text: " au lait".into(), highlighted: false },
            ]
        );
    }

    #[test]
    fn highlight_with_empty_term_is_one_plain_span() {
        let spans = highlight_spans("Keys", "");
        assert_eq!(spans.len(), 1);
        assert!(!spans[0].highlighted);
    }
}
