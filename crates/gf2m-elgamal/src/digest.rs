//! Message digests used as signing exponents.

use sha2::{Digest, Sha256};

/// Maps a message to an integer exponent.
///
/// Implementations must be deterministic and total. The signer reduces the
/// output modulo `p - 1`, so any `u64` is acceptable.
pub trait MessageDigest {
    /// Digests `message`.
    fn digest(&self, message: &[u8]) -> u64;
}

impl<D: MessageDigest + ?Sized> MessageDigest for Box<D> {
    fn digest(&self, message: &[u8]) -> u64 {
        (**self).digest(message)
    }
}

/// Leading 64 bits of SHA-256, big-endian.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Sha256Digest;

impl MessageDigest for Sha256Digest {
    fn digest(&self, message: &[u8]) -> u64 {
        let hash = Sha256::digest(message);
        let mut head = [0u8; 8];
        head.copy_from_slice(&hash[..8]);
        u64::from_be_bytes(head)
    }
}

/// Sixteen-bit checksum over alternating bytes.
///
/// Bytes at even and odd offsets are summed separately; the sums are then
/// cross-multiplied (`s0 *= s1`, then `s1 *= s0`) modulo 256 and packed as
/// `256 * s1 + s0`. Collisions are trivial to find, so this only exists to
/// reproduce legacy signatures.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PairSumDigest;

impl MessageDigest for PairSumDigest {
    fn digest(&self, message: &[u8]) -> u64 {
        let mut sums = [0u8; 2];
        for (i, byte) in message.iter().enumerate() {
            sums[i % 2] = sums[i % 2].wrapping_add(*byte);
        }
        let [mut even, mut odd] = sums;
        even = even.wrapping_mul(odd);
        odd = odd.wrapping_mul(even);
        256 * u64::from(odd) + u64::from(even)
    }
}
