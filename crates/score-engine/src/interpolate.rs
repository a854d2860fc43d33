//! Score Interpolation
//!
//! One forward pass over the ranked sequence. The entry at position 0 and
//! every pinned entry are anchors; every unpinned entry strictly between
//! two consecutive anchors gets an evenly spaced score between the
//! anchors' scores, rounded to the nearest 0.5. Entries below the last
//! pinned anchor are left as they are, so users must pin the last entry
//! they care about.

use super::entity::{DomainError, DomainResult};
use super::entry::Entry;

/// Last anchor seen while walking the sequence
struct Anchor {
    position: usize,
    score: f64,
}

/// Round to the nearest 0.5 increment, halves rounding up
pub fn round_to_half(value: f64) -> f64 {
    (value * 2.0).round() / 2.0
}

/// Compute scores for all unpinned entries between consecutive anchors.
///
/// Returns a new sequence of the same length and order; anchor entries are
/// read but never rewritten. Fails with `InvalidInput` when there is
/// nothing to anchor on: an empty sequence, an unscored entry at position
/// 0, or an unscored pinned entry.
pub fn interpolate(entries: &[Entry]) -> DomainResult<Vec<Entry>> {
    let first = entries
        .first()
        .ok_or_else(|| DomainError::InvalidInput("nothing to generate: the list is empty".into()))?;
    let ceiling = first.score.ok_or_else(|| {
        DomainError::InvalidInput(format!("top entry \"{}\" has no score to anchor on", first.title))
    })?;

    let mut out = entries.to_vec();
    let mut anchor = Anchor { position: 0, score: ceiling };

    for (position, entry) in entries.iter().enumerate().skip(1) {
        if !entry.pinned {
            continue;
        }
        let floor = entry.score.ok_or_else(|| {
            DomainError::InvalidInput(format!("pinned entry \"{}\" has no score", entry.title))
        })?;

        // Positions strictly between the two anchors get evenly spaced
        // scores; adjacent anchors have none, and the span also guards the
        // step division.
        let span = position - anchor.position;
        if span > 1 {
            let step = (anchor.score - floor) / span as f64;
            for j in 1..span {
                out[anchor.position + j].score =
                    Some(round_to_half(anchor.score - step * j as f64));
            }
        }

        anchor = Anchor { position, score: floor };
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scored(id: u32, score: f64) -> Entry {
        Entry::with_score(id, format!("Entry {}", id), score)
    }

    fn pinned(id: u32, score: f64) -> Entry {
        scored(id, score).pin()
    }

    fn unscored(id: u32) -> Entry {
        Entry::new(id, format!("Entry {}", id))
    }

    fn scores(entries: &[Entry]) -> Vec<Option<f64>> {
        entries.iter().map(|e| e.score).collect()
    }

    #[test]
    fn test_even_spread_between_two_pins() {
        // [9.0*, _, _, 6.0*] -> interiors 8.0, 7.0
        let input = vec![pinned(1, 9.0), unscored(2), unscored(3), pinned(4, 6.0)];
        let out = interpolate(&input).unwrap();

        assert_eq!(
            scores(&out),
            vec![Some(9.0), Some(8.0), Some(7.0), Some(6.0)]
        );
    }

    #[test]
    fn test_unpinned_top_entry_is_the_ceiling() {
        // [9.0, _, 7.0*] with an unpinned top -> interior 8.0
        let input = vec![scored(1, 9.0), unscored(2), pinned(3, 7.0)];
        let out = interpolate(&input).unwrap();

        assert_eq!(scores(&out), vec![Some(9.0), Some(8.0), Some(7.0)]);
        assert!(!out[0].pinned);
    }

    #[test]
    fn test_adjacent_pins_change_nothing() {
        let input = vec![pinned(1, 9.0), pinned(2, 8.0)];
        let out = interpolate(&input).unwrap();

        assert_eq!(out, input);
    }

    #[test]
    fn test_tail_below_last_pin_is_untouched() {
        // [9.0*, _, _, _, 5.0*, F] -> interiors 8.0, 7.0, 6.0; F keeps its score
        let input = vec![
            pinned(1, 9.0),
            unscored(2),
            unscored(3),
            unscored(4),
            pinned(5, 5.0),
            scored(6, 3.5),
        ];
        let out = interpolate(&input).unwrap();

        assert_eq!(
            scores(&out),
            vec![
                Some(9.0),
                Some(8.0),
                Some(7.0),
                Some(6.0),
                Some(5.0),
                Some(3.5)
            ]
        );

        // An unscored trailing entry stays unscored too
        let input = vec![pinned(1, 9.0), pinned(2, 8.0), unscored(3)];
        let out = interpolate(&input).unwrap();
        assert_eq!(out[2].score, None);
    }

    #[test]
    fn test_no_pins_beyond_top_is_a_noop() {
        let input = vec![scored(1, 9.0), scored(2, 4.0), unscored(3)];
        let out = interpolate(&input).unwrap();

        assert_eq!(out, input);
    }

    #[test]
    fn test_anchor_scores_are_never_rewritten() {
        // A pin whose score is not a 0.5 multiple must come through exactly
        let input = vec![pinned(1, 9.0), unscored(2), pinned(3, 8.7)];
        let out = interpolate(&input).unwrap();

        assert_eq!(out[0].score, Some(9.0));
        assert_eq!(out[2].score, Some(8.7));
    }

    #[test]
    fn test_interior_values_round_to_nearest_half() {
        // ceiling 9.0, floor 8.7, 3 slots: raw interior 8.85 rounds up to 9.0
        let input = vec![pinned(1, 9.0), unscored(2), pinned(3, 8.7)];
        let out = interpolate(&input).unwrap();

        assert_eq!(out[1].score, Some(9.0));

        // Every generated score is a 0.5 multiple
        let input = vec![pinned(1, 9.5), unscored(2), unscored(3), pinned(4, 7.2)];
        let out = interpolate(&input).unwrap();
        for entry in &out[1..3] {
            let doubled = entry.score.unwrap() * 2.0;
            assert_eq!(doubled, doubled.round());
        }
    }

    #[test]
    fn test_scores_descend_between_anchors() {
        let input = vec![
            pinned(1, 10.0),
            unscored(2),
            unscored(3),
            unscored(4),
            unscored(5),
            pinned(6, 4.0),
        ];
        let out = interpolate(&input).unwrap();

        for pair in out.windows(2) {
            assert!(pair[0].score.unwrap() >= pair[1].score.unwrap());
        }
    }

    #[test]
    fn test_multiple_segments() {
        // Two pinned segments back to back, each spread independently
        let input = vec![
            pinned(1, 10.0),
            unscored(2),
            pinned(3, 8.0),
            unscored(4),
            unscored(5),
            unscored(6),
            pinned(7, 6.0),
        ];
        let out = interpolate(&input).unwrap();

        assert_eq!(
            scores(&out),
            vec![
                Some(10.0),
                Some(9.0),
                Some(8.0),
                Some(7.5),
                Some(7.0),
                Some(6.5),
                Some(6.0)
            ]
        );
    }

    #[test]
    fn test_rerun_is_stable() {
        let input = vec![
            scored(1, 9.0),
            unscored(2),
            pinned(3, 7.0),
            scored(4, 6.5),
            pinned(5, 5.0),
        ];
        let once = interpolate(&input).unwrap();
        let twice = interpolate(&once).unwrap();

        assert_eq!(once, twice);
    }

    #[test]
    fn test_empty_list_is_rejected() {
        let err = interpolate(&[]).unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));
    }

    #[test]
    fn test_unscored_top_entry_is_rejected() {
        let input = vec![unscored(1), pinned(2, 8.0)];
        let err = interpolate(&input).unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));
    }

    #[test]
    fn test_unscored_pinned_entry_is_rejected() {
        let input = vec![scored(1, 9.0), unscored(2).pin()];
        let err = interpolate(&input).unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));
    }

    #[test]
    fn test_round_to_half() {
        assert_eq!(round_to_half(8.85), 9.0);
        assert_eq!(round_to_half(8.7), 8.5);
        assert_eq!(round_to_half(8.75), 9.0);
        assert_eq!(round_to_half(7.0), 7.0);
        assert_eq!(round_to_half(0.2), 0.0);
    }
}
