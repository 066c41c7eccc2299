//! Index arithmetic over pressure readings
//!
//! All ranges are inclusive on both ends. Ties resolve to the first
//! occurrence, so callers that prefer the later zone must check the right
//! neighbour themselves.

/// Index of the largest value in `values[start..=end]`
///
/// Returns `None` when the range is empty or reaches past the slice.
pub fn index_of_maximum(values: &[u32], start: usize, end: usize) -> Option<usize> {
    if start > end || end >= values.len() {
        return None;
    }

    let mut best = start;
    for i in start + 1..=end {
        if values[i] > values[best] {
            best = i;
        }
    }
    Some(best)
}

/// Index of the smallest value in `values[start..=end]`
pub fn index_of_minimum(values: &[u32], start: usize, end: usize) -> Option<usize> {
    if start > end || end >= values.len() {
        return None;
    }

    let mut best = start;
    for i in start + 1..=end {
        if values[i] < values[best] {
            best = i;
        }
    }
    Some(best)
}

/// True if `|a - b| <= range`
pub fn is_in_range(a: u32, b: u32, range: u32) -> bool {
    a.abs_diff(b) <= range
}

/// True if `value` occurs at most once
pub fn is_value_distinct(value: u32, values: &[u32]) -> bool {
    values.iter().filter(|&&v| v == value).count() <= 1
}

/// True if the element left of `index` exists and equals `values[index]`
pub fn is_left_side_equal(index: usize, values: &[u32]) -> bool {
    index > 0 && index < values.len() && values[index - 1] == values[index]
}

/// True if the element right of `index` exists and equals `values[index]`
pub fn is_right_side_equal(index: usize, values: &[u32]) -> bool {
    index + 1 < values.len() && values[index + 1] == values[index]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_of_maximum_first_occurrence() {
        assert_eq!(index_of_maximum(&[7, 11, 11, 6], 0, 3), Some(1));
        assert_eq!(index_of_maximum(&[3, 3, 3, 3], 0, 3), Some(0));
        assert_eq!(index_of_maximum(&[1, 2, 9, 4, 20], 0, 3), Some(2));
    }

    #[test]
    fn test_index_of_maximum_sub_range() {
        let values = [20, 1, 5, 5, 2];
        assert_eq!(index_of_maximum(&values, 1, 4), Some(2));
        assert_eq!(index_of_maximum(&values, 4, 4), Some(4));
    }

    #[test]
    fn test_index_of_minimum() {
        assert_eq!(index_of_minimum(&[9, 4, 4, 8], 0, 3), Some(1));
        assert_eq!(index_of_minimum(&[9, 4, 2, 8, 1], 0, 3), Some(2));
    }

    #[test]
    fn test_out_of_bounds_ranges() {
        assert_eq!(index_of_maximum(&[1, 2, 3], 0, 3), None);
        assert_eq!(index_of_minimum(&[1, 2, 3], 2, 1), None);
        assert_eq!(index_of_maximum(&[], 0, 0), None);
    }

    #[test]
    fn test_is_in_range_inclusive() {
        assert!(is_in_range(10, 12, 2));
        assert!(is_in_range(12, 10, 2));
        assert!(!is_in_range(10, 13, 2));
        assert!(is_in_range(5, 5, 0));
    }

    #[test]
    fn test_is_value_distinct() {
        assert!(is_value_distinct(4, &[1, 4, 6]));
        assert!(is_value_distinct(9, &[1, 4, 6]));
        assert!(!is_value_distinct(4, &[4, 1, 4]));
    }

    #[test]
    fn test_neighbour_equality() {
        let values = [5, 5, 7, 8, 8];
        assert!(!is_left_side_equal(0, &values));
        assert!(is_left_side_equal(1, &values));
        assert!(is_right_side_equal(0, &values));
        assert!(!is_right_side_equal(1, &values));
        assert!(is_right_side_equal(3, &values));
        assert!(!is_right_side_equal(4, &values));
        assert!(!is_left_side_equal(9, &values));
    }
}
