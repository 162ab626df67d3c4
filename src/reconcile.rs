// Copyright 2026 Artlink Contributors
// SPDX-License-Identifier: Apache-2.0

//! Reconciler: fuzzy-matches catalog titles against harvested items.
//!
//! Scores are normalized Levenshtein similarity scaled to [0, 100]; a
//! candidate must score strictly above the threshold to be attached.

use crate::harvest::HarvestedItem;
use strsim::normalized_levenshtein;
use tracing::debug;

/// Similarity between two titles on the [0, 100] scale the threshold uses.
fn similarity(a: &str, b: &str) -> f64 {
    normalized_levenshtein(a, b) * 100.0
}

/// Best candidate strictly above the threshold, if any.
///
/// Candidates are scanned in harvested order and a strict comparison keeps
/// the first-encountered candidate on exact score ties, so for duplicated
/// titles the attached URL is the first item bearing that title.
pub fn best_match<'a>(
    title: &str,
    candidates: &'a [HarvestedItem],
    threshold: f64,
) -> Option<&'a HarvestedItem> {
    let mut best: Option<(&HarvestedItem, f64)> = None;
    for item in candidates {
        let score = similarity(title, &item.title);
        if best.map_or(true, |(_, s)| score > s) {
            best = Some((item, score));
        }
    }

    match best {
        Some((item, score)) if score > threshold => {
            debug!("matched {title:?} -> {:?} (score {score:.1})", item.title);
            Some(item)
        }
        Some((_, score)) => {
            debug!("no match for {title:?} (best score {score:.1} <= {threshold})");
            None
        }
        None => None,
    }
}

/// One result per record title, in input order.
///
/// Absent or empty titles resolve to `None` without any comparison, and an
/// empty candidate pool short-circuits to all-`None` while still producing
/// one entry per record.
pub fn reconcile(
    titles: &[Option<String>],
    candidates: &[HarvestedItem],
    threshold: f64,
) -> Vec<Option<String>> {
    if candidates.is_empty() {
        return vec![None; titles.len()];
    }

    titles
        .iter()
        .map(|title| match title.as_deref() {
            None => None,
            Some(t) if t.is_empty() => None,
            Some(t) => best_match(t, candidates, threshold).map(|item| item.url.clone()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(title: &str, url: &str) -> HarvestedItem {
        HarvestedItem {
            title: title.to_string(),
            url: url.to_string(),
        }
    }

    #[test]
    fn exact_title_scores_100_and_matches() {
        let pool = vec![item("Portrait of a Lady", "U1")];
        assert_eq!(similarity("Portrait of a Lady", "Portrait of a Lady"), 100.0);

        let urls = reconcile(
            &[Some("Portrait of a Lady".to_string())],
            &pool,
            75.0,
        );
        assert_eq!(urls, vec![Some("U1".to_string())]);
    }

    #[test]
    fn absent_and_empty_titles_resolve_to_none() {
        let pool = vec![item("Anything", "U1")];
        let urls = reconcile(&[None, Some(String::new())], &pool, 75.0);
        assert_eq!(urls, vec![None, None]);
    }

    #[test]
    fn empty_pool_short_circuits_to_all_none() {
        let titles = vec![
            Some("Portrait of a Lady".to_string()),
            None,
            Some("Vase".to_string()),
        ];
        assert_eq!(reconcile(&titles, &[], 75.0), vec![None, None, None]);
        // Zero records against an empty pool is still well-formed.
        assert!(reconcile(&[], &[], 75.0).is_empty());
    }

    #[test]
    fn threshold_is_exclusive() {
        // One substitution over four chars: similarity exactly 75.
        let pool = vec![item("abcz", "U1")];
        assert_eq!(similarity("abcd", "abcz"), 75.0);
        assert_eq!(reconcile(&[Some("abcd".to_string())], &pool, 75.0), vec![None]);

        // Six substitutions over twenty-five chars: similarity 76.
        let record = "abcdefghijklmnopqrstuvwxy";
        let candidate = "abcdefghijklmnopqrs012345";
        let pool = vec![item(candidate, "U2")];
        assert!(similarity(record, candidate) > 75.0);
        assert_eq!(
            reconcile(&[Some(record.to_string())], &pool, 75.0),
            vec![Some("U2".to_string())]
        );
    }

    #[test]
    fn best_scoring_candidate_wins() {
        let pool = vec![
            item("Portrait of a Man", "U1"),
            item("Portrait of a Lady", "U2"),
            item("Landscape with Cattle", "U3"),
        ];
        let urls = reconcile(&[Some("Portrait of a Lady".to_string())], &pool, 75.0);
        assert_eq!(urls, vec![Some("U2".to_string())]);
    }

    #[test]
    fn duplicate_titles_attach_the_first_url() {
        let pool = vec![item("Vase", "U1"), item("Vase", "U2")];
        let urls = reconcile(&[Some("Vase".to_string())], &pool, 75.0);
        assert_eq!(urls, vec![Some("U1".to_string())]);
    }

    #[test]
    fn unrelated_title_resolves_to_none() {
        let pool = vec![item("Portrait of a Lady", "U1")];
        let urls = reconcile(
            &[Some("Totally Unrelated Artifact Name".to_string())],
            &pool,
            75.0,
        );
        assert_eq!(urls, vec![None]);
    }

    #[test]
    fn reconcile_is_deterministic() {
        let pool = vec![
            item("Portrait of a Lady", "U1"),
            item("Portrait of a Lad", "U2"),
        ];
        let titles = vec![Some("Portrait of a Lady".to_string()), Some("Vase".to_string())];
        let first = reconcile(&titles, &pool, 75.0);
        let second = reconcile(&titles, &pool, 75.0);
        assert_eq!(first, second);
    }
}
