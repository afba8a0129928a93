use crate::entities::{Bin, BinStyle};
use itertools::Itertools;
use serde::Serialize;

/// Fingerprint of an empty bin collection.
pub const EMPTY_FINGERPRINT: &str = "empty";

/// The fields of a bin that affect generated plates.
#[derive(Serialize)]
struct IdentityFields<'a> {
    id: &'a str,
    style: BinStyle,
    width: usize,
    depth: usize,
    height: usize,
    x: usize,
    y: usize,
}

impl<'a> From<&'a Bin> for IdentityFields<'a> {
    fn from(bin: &'a Bin) -> Self {
        IdentityFields {
            id: &bin.id,
            style: bin.style,
            width: bin.width,
            depth: bin.depth,
            height: bin.height,
            x: bin.x,
            y: bin.y,
        }
    }
}

/// Order-independent digest of a bin collection, used to detect whether plates are out of date.
///
/// Bins are sorted by id and their identity fields serialized before hashing, so a permutation of the
/// same bins yields the same fingerprint. Labels and rotation flags are not part of it.
/// The hash is a 32-bit rolling hash: cheap and stable, not collision resistant.
pub fn fingerprint(bins: &[Bin]) -> String {
    if bins.is_empty() {
        return EMPTY_FINGERPRINT.to_string();
    }
    let identity = bins
        .iter()
        .sorted_by(|a, b| a.id.cmp(&b.id))
        .map(IdentityFields::from)
        .collect_vec();
    let serialized = serde_json::to_string(&identity).unwrap_or_default();

    rolling_hash(&serialized).to_string()
}

/// `h = h * 31 + c` over the UTF-16 code units of `s`, wrapping at 32 bits.
fn rolling_hash(s: &str) -> i32 {
    s.encode_utf16()
        .fold(0i32, |h, c| h.wrapping_mul(31).wrapping_add(c as i32))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::prelude::SmallRng;
    use rand::seq::SliceRandom;

    fn bins() -> Vec<Bin> {
        vec![
            Bin::new("1", 2, 1, 3),
            Bin::new("2", 1, 1, 6).at(2, 0),
            Bin::new("3", 3, 2, 3).at(0, 1).with_style(BinStyle::Solid),
            Bin::new("10", 1, 3, 2).at(4, 0),
        ]
    }

    #[test]
    fn empty_collection() {
        assert_eq!(fingerprint(&[]), EMPTY_FINGERPRINT);
        assert_ne!(fingerprint(&bins()), EMPTY_FINGERPRINT);
    }

    #[test]
    fn stable_under_permutation() {
        let mut rng = SmallRng::seed_from_u64(0);
        let reference = fingerprint(&bins());
        for _ in 0..20 {
            let mut shuffled = bins();
            shuffled.shuffle(&mut rng);
            assert_eq!(fingerprint(&shuffled), reference);
        }
    }

    #[test]
    fn sensitive_to_identity_fields() {
        let reference = fingerprint(&bins());
        let edits: [fn(&mut Bin); 6] = [
            |b| b.width += 1,
            |b| b.depth += 1,
            |b| b.height += 1,
            |b| b.x += 1,
            |b| b.y += 1,
            |b| b.style = BinStyle::Solid,
        ];
        for edit in edits {
            let mut edited = bins();
            edit(&mut edited[0]);
            assert_ne!(fingerprint(&edited), reference);
        }
    }

    #[test]
    fn labels_do_not_matter() {
        let mut relabelled = bins();
        relabelled[1].label = Some("Bits".into());
        assert_eq!(fingerprint(&relabelled), fingerprint(&bins()));
    }

    #[test]
    fn rolling_hash_matches_reference_values() {
        assert_eq!(rolling_hash(""), 0);
        assert_eq!(rolling_hash("a"), 97);
        assert_eq!(rolling_hash("ab"), 97 * 31 + 98);
        //wraps instead of overflowing
        assert_eq!(rolling_hash("hello world"), 1794106052);
        assert_eq!(rolling_hash(&"z".repeat(64)), 1582229504);
    }
}
