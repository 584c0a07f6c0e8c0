/// Rolling CRC-32 accumulator.
///
/// Thin wrapper over `crc32fast` with zlib chaining semantics: updating in
/// several calls yields the same value as one call over the concatenated
/// bytes, so per-layer and per-row spans can be folded in independently.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Crc32(u32);

impl Crc32 {
    pub fn new() -> Self {
        Self(0)
    }

    /// Fold `bytes` into the running checksum.
    pub fn update(&mut self, bytes: &[u8]) {
        let mut hasher = crc32fast::Hasher::new_with_initial(self.0);
        hasher.update(bytes);
        self.0 = hasher.finalize();
    }

    /// Current checksum value.
    pub fn value(self) -> u32 {
        self.0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/inspect/checksum.rs"]
mod tests;
