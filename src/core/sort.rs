//! Stable merge sort for segments
//!
//! The greedy builder picks the first segment among equal-distance candidates,
//! so the tour it produces depends on ties keeping their input order. The merge
//! below only takes from the right run when the left head is strictly greater.

use crate::core::segment::Segment;

/// Return a copy of `segments` sorted ascending by distance, ties in input order
pub fn sort_segments(segments: &[Segment]) -> Vec<Segment> {
    merge_sort_by(segments, |left, right| left.distance > right.distance)
}

/// Stable top-down merge sort.
///
/// `is_greater(a, b)` must return true only when `a` belongs strictly after `b`.
pub fn merge_sort_by<T, F>(items: &[T], is_greater: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T, &T) -> bool,
{
    let mut out = items.to_vec();
    if out.len() < 2 {
        return out;
    }

    let mut scratch = out.clone();
    sort_range(&mut scratch, &mut out, &is_greater);
    out
}

/// Sort `src` into `dst`; both hold the same elements on entry and `src` is
/// used as workspace.
fn sort_range<T, F>(src: &mut [T], dst: &mut [T], is_greater: &F)
where
    T: Clone,
    F: Fn(&T, &T) -> bool,
{
    let n = src.len();
    if n < 2 {
        return;
    }

    let mid = n / 2;
    {
        let (src_left, src_right) = src.split_at_mut(mid);
        let (dst_left, dst_right) = dst.split_at_mut(mid);
        // Children are sorted into `src`, using `dst` as their workspace
        sort_range(dst_left, src_left, is_greater);
        sort_range(dst_right, src_right, is_greater);
    }

    let (left, right) = src.split_at(mid);
    merge(left, right, dst, is_greater);
}

fn merge<T, F>(left: &[T], right: &[T], out: &mut [T], is_greater: &F)
where
    T: Clone,
    F: Fn(&T, &T) -> bool,
{
    let (mut i, mut j) = (0, 0);
    for slot in out.iter_mut() {
        let take_left = j >= right.len() || (i < left.len() && !is_greater(&left[i], &right[j]));
        if take_left {
            *slot = left[i].clone();
            i += 1;
        } else {
            *slot = right[j].clone();
            j += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(from: usize, to: usize, distance: f64) -> Segment {
        Segment::new(from, to, distance).unwrap()
    }

    fn pairs(segments: &[Segment]) -> Vec<(usize, usize)> {
        segments.iter().map(|s| (s.from, s.to)).collect()
    }

    #[test]
    fn test_empty_and_single() {
        assert!(sort_segments(&[]).is_empty());

        let one = [seg(0, 1, 4.0)];
        assert_eq!(sort_segments(&one), one.to_vec());
    }

    #[test]
    fn test_sorts_ascending() {
        let input = [
            seg(0, 1, 5.0),
            seg(0, 2, 1.0),
            seg(1, 2, 3.0),
            seg(0, 3, 0.5),
            seg(2, 3, 9.0),
        ];
        let sorted = sort_segments(&input);

        assert_eq!(pairs(&sorted), vec![(0, 3), (0, 2), (1, 2), (0, 1), (2, 3)]);
        assert!(sorted.windows(2).all(|w| w[0].distance <= w[1].distance));
    }

    #[test]
    fn test_ties_keep_input_order() {
        let input = [
            seg(2, 3, 1.0),
            seg(0, 1, 2.0),
            seg(0, 2, 1.0),
            seg(1, 3, 2.0),
            seg(0, 3, 1.0),
            seg(1, 2, 0.0),
        ];
        let sorted = sort_segments(&input);

        assert_eq!(
            pairs(&sorted),
            vec![(1, 2), (2, 3), (0, 2), (0, 3), (0, 1), (1, 3)]
        );
    }

    #[test]
    fn test_matches_std_stable_sort() {
        // Many ties across every merge level
        let input: Vec<(usize, u32)> = (0..97).map(|i| (i, (i * 7 % 5) as u32)).collect();
        let ours = merge_sort_by(&input, |a, b| a.1 > b.1);

        let mut expected = input.clone();
        expected.sort_by_key(|&(_, key)| key);
        assert_eq!(ours, expected);
    }

    #[test]
    fn test_input_untouched() {
        let input = [seg(0, 1, 3.0), seg(0, 2, 1.0)];
        let _ = sort_segments(&input);
        assert_eq!(input[0].distance, 3.0);
    }
}
