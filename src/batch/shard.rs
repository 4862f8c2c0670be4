use std::ops::Range;

/// Contiguous index ranges covering `[0, total)` across `shard_count`
/// shards.
///
/// Shard size is `ceil(total / shard_count)`, so when the division is uneven
/// the last populated shard comes up short and any shards after it are
/// empty. Every index is covered exactly once.
pub fn shard_ranges(total: usize, shard_count: usize) -> Vec<Range<usize>> {
    debug_assert!(shard_count > 0);
    let shard_size = total.div_ceil(shard_count);
    (0..shard_count)
        .map(|shard| {
            let start = (shard * shard_size).min(total);
            let end = ((shard + 1) * shard_size).min(total);
            start..end
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::shard_ranges;

    #[test]
    fn uneven_division_shortens_the_tail() {
        let ranges = shard_ranges(23, 10);
        let sizes: Vec<usize> = ranges.iter().map(|r| r.len()).collect();
        assert_eq!(sizes, vec![3, 3, 3, 3, 3, 3, 3, 2, 0, 0]);
        assert_eq!(ranges[0], 0..3);
        assert_eq!(ranges[7], 21..23);
    }

    #[test]
    fn even_division_fills_every_shard() {
        let ranges = shard_ranges(20, 10);
        assert!(ranges.iter().all(|r| r.len() == 2));
        assert_eq!(ranges[9], 18..20);
    }

    #[test]
    fn fewer_rows_than_shards_leaves_trailing_shards_empty() {
        let ranges = shard_ranges(3, 10);
        let sizes: Vec<usize> = ranges.iter().map(|r| r.len()).collect();
        assert_eq!(sizes, vec![1, 1, 1, 0, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn empty_dataset_yields_only_empty_shards() {
        assert!(shard_ranges(0, 10).iter().all(|r| r.is_empty()));
    }

    #[test]
    fn every_row_is_covered_exactly_once() {
        for total in 0..48 {
            for shard_count in 1..12 {
                let ranges = shard_ranges(total, shard_count);
                assert_eq!(ranges.len(), shard_count);
                let covered: Vec<usize> = ranges.iter().flat_map(|r| r.clone()).collect();
                let expected: Vec<usize> = (0..total).collect();
                assert_eq!(covered, expected, "total={total} shard_count={shard_count}");
            }
        }
    }
}
