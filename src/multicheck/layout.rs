//! Column distribution for the multicheck component.
//!
//! The widget shows a "Select All" checkbox followed by one checkbox per
//! option, read top to bottom and then left to right. [`layout`] decides
//! which options land in which column. It only partitions the options, but
//! sizes column 0 as if its first slot were already taken by Select All.
//!
//! With `N` options and `C` columns there are `N + 1` slots. Every column
//! holds either `ceil((N + 1) / C)` slots (a full column) or one less, full
//! columns come first, and options are sliced strictly in order:
//!
//! ```text
//! N = 4, C = 2          N = 6, C = 3          N = 1, C = 4
//! [all]  opt 3          [all]  opt 3  opt 5   [all]  opt 1  -  -
//! opt 1  opt 4          opt 1  opt 4  opt 6
//! opt 2                 opt 2
//! ```

/// Number of slots each column holds, Select All included.
///
/// Returns exactly `max(columns, 1)` entries, non-increasing and differing
/// by at most one.
pub fn column_slots(options: usize, columns: usize) -> Vec<usize> {
    let columns = columns.max(1);
    let slots = options + 1;
    let per_full = slots.div_ceil(columns);
    let full_columns = match slots % columns {
        0 => columns,
        rem => rem,
    };

    (0..columns)
        .map(|i| if i < full_columns { per_full } else { per_full - 1 })
        .collect()
}

/// Splits `options` into balanced columns, preserving order.
///
/// A `columns` value of 0 is treated as 1. The result always has
/// `max(columns, 1)` entries; when there are more columns than slots the
/// trailing ones are empty. Concatenating the result yields `options`.
///
/// ```rust
/// use bubbletea_multicheck::multicheck::layout;
///
/// let options = ["1", "2", "3", "4"];
/// let cols = layout(&options, 2);
/// assert_eq!(cols, vec![&["1", "2"][..], &["3", "4"][..]]);
///
/// // Select All takes the first slot of column 0.
/// let cols = layout(&options, 4);
/// assert_eq!(cols, vec![&["1"][..], &["2"][..], &["3"][..], &["4"][..]]);
/// ```
pub fn layout<T>(options: &[T], columns: usize) -> Vec<&[T]> {
    let slots = column_slots(options.len(), columns);
    log::trace!(
        "multicheck: laying out {} options into {} columns: {:?}",
        options.len(),
        slots.len(),
        slots
    );

    let mut rest = options;
    slots
        .iter()
        .enumerate()
        .map(|(i, &size)| {
            // Column 0 gives its first slot to Select All.
            let take = (if i == 0 { size - 1 } else { size }).min(rest.len());
            let (column, tail) = rest.split_at(take);
            rest = tail;
            column
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(n: usize) -> Vec<usize> {
        (0..n).collect()
    }

    #[test]
    fn test_zero_columns_is_one() {
        let opts = items(4);
        assert_eq!(layout(&opts, 0), layout(&opts, 1));
        assert_eq!(layout(&opts, 0), vec![&opts[..]]);
    }

    #[test]
    fn test_two_columns_of_four() {
        let opts = items(4);
        let cols = layout(&opts, 2);
        assert_eq!(cols, vec![&[0usize, 1][..], &[2usize, 3][..]]);
        assert_eq!(column_slots(4, 2), vec![3, 2]);
    }

    #[test]
    fn test_earlier_columns_take_remainder() {
        // 8 slots over 3 columns: 3, 3, 2
        let opts = items(7);
        assert_eq!(column_slots(7, 3), vec![3, 3, 2]);
        let cols = layout(&opts, 3);
        assert_eq!(cols, vec![&[0usize, 1][..], &[2usize, 3, 4][..], &[5usize, 6][..]]);
    }

    #[test]
    fn test_more_columns_than_slots() {
        let opts = items(2);
        let cols = layout(&opts, 5);
        assert_eq!(cols.len(), 5);
        assert!(cols[0].is_empty());
        assert_eq!(cols[1], &[0usize][..]);
        assert_eq!(cols[2], &[1usize][..]);
        assert!(cols[3].is_empty());
        assert!(cols[4].is_empty());
    }

    #[test]
    fn test_empty_options() {
        let opts: Vec<usize> = Vec::new();
        let cols = layout(&opts, 3);
        assert_eq!(cols.len(), 3);
        assert!(cols.iter().all(|c| c.is_empty()));
        assert_eq!(column_slots(0, 3), vec![1, 0, 0]);
    }

    #[test]
    fn test_order_preserved() {
        for n in 0..=40 {
            let opts = items(n);
            for c in 0..=12 {
                let flat: Vec<usize> = layout(&opts, c).concat();
                assert_eq!(flat, opts, "n={n} c={c}");
            }
        }
    }

    #[test]
    fn test_balanced_and_non_increasing() {
        for n in 0..=40 {
            let opts = items(n);
            for c in 0..=12 {
                let cols = layout(&opts, c);
                assert_eq!(cols.len(), c.max(1));

                let sizes: Vec<usize> = cols
                    .iter()
                    .enumerate()
                    .map(|(i, col)| if i == 0 { col.len() + 1 } else { col.len() })
                    .collect();
                assert_eq!(sizes, column_slots(n, c), "n={n} c={c}");

                let non_empty: Vec<usize> = sizes.iter().copied().filter(|&s| s > 0).collect();
                let max = non_empty.iter().max().copied().unwrap_or(0);
                let min = non_empty.iter().min().copied().unwrap_or(0);
                assert!(max - min <= 1, "n={n} c={c} sizes={sizes:?}");
                assert!(sizes.windows(2).all(|w| w[0] >= w[1]), "n={n} c={c}");
            }
        }
    }

    #[test]
    fn test_large_column_counts() {
        let opts = items(100);
        let cols = layout(&opts, 17);
        assert_eq!(cols.len(), 17);
        assert_eq!(cols.concat(), opts);
        // 101 slots over 17 columns: 16 columns of 6, one of 5
        assert_eq!(column_slots(100, 17).iter().filter(|&&s| s == 6).count(), 16);
    }
}
