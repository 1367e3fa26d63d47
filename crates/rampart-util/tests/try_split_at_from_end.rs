// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

#[cfg(test)]
mod try_split_at_from_end_tests {
    use rampart_util::try_split_at_from_end;

    #[test]
    fn test_split_suffix() {
        let data = [1u8, 2, 3, 4, 5];
        let (left, right) = try_split_at_from_end(&data, 2).expect("Failed to split");
        assert_eq!(left, &[1, 2, 3]);
        assert_eq!(right, &[4, 5]);
    }

    #[test]
    fn test_split_whole_slice() {
        let data = [1u8, 2, 3];
        let (left, right) = try_split_at_from_end(&data, 3).expect("Failed to split");
        assert!(left.is_empty());
        assert_eq!(right, &[1, 2, 3]);
    }

    #[test]
    fn test_split_zero_suffix() {
        let data = [1u8, 2, 3];
        let (left, right) = try_split_at_from_end(&data, 0).expect("Failed to split");
        assert_eq!(left, &[1, 2, 3]);
        assert!(right.is_empty());
    }

    #[test]
    fn test_split_out_of_bounds() {
        let data = [1u8, 2, 3];
        assert!(try_split_at_from_end(&data, 4).is_none());
    }
}
