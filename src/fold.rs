//! Case folding shared by the hash index and the sort comparators.
//!
//! Hashing, equality and ordering must agree on what "the same label"
//! means, so all three live here.

use std::cmp::Ordering;

/// djb2 over the lowercased bytes of `name`, masked to 31 bits.
pub fn hash(name: &str) -> u32 {
    let mut hash: u32 = 5381;
    for byte in name.bytes() {
        // hash * 33 + c
        hash = hash
            .wrapping_mul(33)
            .wrapping_add(u32::from(byte.to_ascii_lowercase()));
    }
    hash & 0x7FFF_FFFF
}

pub fn eq(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
}

/// Byte-wise ordering on lowercased names.
pub fn cmp(a: &str, b: &str) -> Ordering {
    a.bytes()
        .map(|byte| byte.to_ascii_lowercase())
        .cmp(b.bytes().map(|byte| byte.to_ascii_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_folds_case() {
        assert_eq!(hash("LOOP"), hash("loop"));
        assert_eq!(hash("Start"), hash("sTaRt"));
        assert_ne!(hash("LOOP"), hash("LOOP2"));
    }

    #[test]
    fn hash_matches_djb2() {
        // 5381 * 33 + 'a'
        assert_eq!(hash(""), 5381);
        assert_eq!(hash("a"), 5381 * 33 + 97);
        assert_eq!(hash("A"), 5381 * 33 + 97);
    }

    #[test]
    fn hash_stays_non_negative() {
        // Long input overflows 31 bits without the mask
        assert!(hash(&"z".repeat(64)) <= 0x7FFF_FFFF);
    }

    #[test]
    fn ordering_folds_case() {
        assert_eq!(cmp("alpha", "Beta"), Ordering::Less);
        assert_eq!(cmp("Beta", "alpha"), Ordering::Greater);
        assert_eq!(cmp("Loop", "LOOP"), Ordering::Equal);
        assert_eq!(cmp("ab", "abc"), Ordering::Less);
        assert!(eq("Loop", "LOOP"));
        assert!(!eq("Loop", "Loop2"));
    }
}
