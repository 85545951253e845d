//! Content fingerprints for cache-busting asset URLs.
//!
//! ```ignore
//! let v = hash::fingerprint(SITE_CSS); // -> "a1b2c3d4"
//! ```

use rustc_hash::FxHasher;
use std::hash::Hasher;

/// Compute 64-bit hash from byte data.
#[inline]
pub fn compute<T: AsRef<[u8]> + ?Sized>(data: &T) -> u64 {
    let mut hasher = FxHasher::default();
    hasher.write(data.as_ref());
    hasher.finish()
}

/// Compute hash and return as 8-char hex fingerprint.
#[inline]
pub fn fingerprint<T: AsRef<[u8]> + ?Sized>(value: &T) -> String {
    format!("{:016x}", compute(value))[..8].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fingerprint_stable() {
        assert_eq!(fingerprint("body{}"), fingerprint("body{}"));
        assert_ne!(fingerprint("body{}"), fingerprint("main{}"));
        assert_eq!(fingerprint("x").len(), 8);
    }
}
