//! Ordering and hashing over validated addresses.
//!
//! Index structures built on this type rely on exact agreement between
//! the comparator and hash-adjacent equality: two addresses equal under
//! [`compare`] must hash identically. To keep the derived comparison
//! family (`<`, `<=`, `==`, `>=`, `>`, `!=`) mutually consistent, all
//! of them flow through the single three-way function here via the
//! `Ord` impl on [`Address`]; none is reimplemented independently.

use std::cmp::Ordering;

use crate::address::Address;

/// Three-way comparison: domain-major, local-minor, byte-wise.
///
/// This ordering is the one to register with any external index
/// structure ranking addresses.
pub fn compare(a: &Address, b: &Address) -> Ordering {
    a.domain()
        .cmp(b.domain())
        .then_with(|| a.local().cmp(b.local()))
}

/// Whether two addresses share a domain, byte-for-byte.
pub fn same_domain(a: &Address, b: &Address) -> bool {
    a.domain() == b.domain()
}

/// Position-weighted 32-bit hash of a validated address.
///
/// Runs the PJW accumulator independently over the local and domain
/// parts, then combines them with the domain sub-hash weighted by two,
/// mirroring the domain-major ordering. A pure function of the
/// normalized fields only, never of the raw input, so addresses equal
/// under [`compare`] hash identically.
pub fn hash_code(a: &Address) -> u32 {
    hash_field(a.domain())
        .wrapping_mul(2)
        .wrapping_add(hash_field(a.local()))
}

/// PJW/ELF rolling hash over one field.
///
/// Shift the accumulator left by four bits (an eighth of the width),
/// add the next byte, and fold any bits that reach the top nibble back
/// down via XOR.
fn hash_field(s: &str) -> u32 {
    let mut h: u32 = 0;
    for &b in s.as_bytes() {
        h = (h << 4).wrapping_add(u32::from(b));
        let g = h & 0xf000_0000;
        if g != 0 {
            h ^= g >> 24;
            h &= !g;
        }
    }
    h
}
