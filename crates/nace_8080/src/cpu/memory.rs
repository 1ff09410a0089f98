use std::ops::Range;

use anyhow::{ensure, Result};

/// Total addressable memory size (64 KiB).
pub const MEMORY_SIZE: usize = 0x10000;

/// The flat 8080 address space.
///
/// Every `u16` is a valid address, so accesses never fail. Word accesses are
/// little-endian and wrap at the top of the address space.
#[derive(Clone)]
pub struct Memory {
    bytes: Box<[u8]>,
}

impl Default for Memory {
    fn default() -> Self {
        Self {
            bytes: vec![0; MEMORY_SIZE].into_boxed_slice(),
        }
    }
}

impl std::fmt::Debug for Memory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Memory")
            .field("len", &self.bytes.len())
            .finish()
    }
}

impl Memory {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn read(&self, addr: u16) -> u8 {
        self.bytes[addr as usize]
    }

    #[inline]
    pub fn write(&mut self, addr: u16, value: u8) {
        self.bytes[addr as usize] = value;
    }

    #[inline]
    pub fn read_word(&self, addr: u16) -> u16 {
        u16::from_le_bytes([self.read(addr), self.read(addr.wrapping_add(1))])
    }

    #[inline]
    pub fn write_word(&mut self, addr: u16, value: u16) {
        let [lo, hi] = value.to_le_bytes();
        self.write(addr, lo);
        self.write(addr.wrapping_add(1), hi);
    }

    /// Read-only view of a byte range, e.g. the video RAM window.
    ///
    /// Panics if `range` reaches past the end of the address space.
    pub fn slice(&self, range: Range<usize>) -> &[u8] {
        &self.bytes[range]
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }

    /// Copy a program image into memory starting at `offset`.
    ///
    /// An image that does not fit is rejected before anything is written.
    pub fn load_image(&mut self, offset: u16, image: &[u8]) -> Result<()> {
        let start = offset as usize;
        let available = MEMORY_SIZE - start;
        ensure!(
            image.len() <= available,
            "program image of {} bytes does not fit at 0x{:04x} ({} bytes available)",
            image.len(),
            offset,
            available
        );
        self.bytes[start..start + image.len()].copy_from_slice(image);
        Ok(())
    }
}
