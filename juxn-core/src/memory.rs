/// 64 KiB flat address space with wrapping byte/short accessors.
///
/// `Memory` borrows its backing array rather than owning it, so an embedder
/// chooses the allocation strategy (heap box, static buffer, arena slot);
/// see [`crate::UxnRam`] for the common heap-allocated case.
pub struct Memory<'a> {
    data: &'a mut [u8; 65536],
}

impl<'a> Memory<'a> {
    #[inline]
    pub fn new(data: &'a mut [u8; 65536]) -> Self {
        Self { data }
    }

    /// Reads a byte, or a big-endian short straddling `addr`/`addr+1`.
    ///
    /// Address arithmetic wraps modulo 65536, so a short read at `0xFFFF`
    /// takes its low byte from `0x0000`.
    #[inline]
    #[must_use]
    pub fn read(&self, addr: u16, short: bool) -> u16 {
        if short {
            let hi = self.data[usize::from(addr)];
            let lo = self.data[usize::from(addr.wrapping_add(1))];
            u16::from_be_bytes([hi, lo])
        } else {
            u16::from(self.data[usize::from(addr)])
        }
    }

    /// Writes a byte, or a big-endian short straddling `addr`/`addr+1`.
    #[inline]
    pub fn write(&mut self, addr: u16, val: u16, short: bool) {
        if short {
            let [hi, lo] = val.to_be_bytes();
            self.data[usize::from(addr)] = hi;
            self.data[usize::from(addr.wrapping_add(1))] = lo;
        } else {
            self.data[usize::from(addr)] = val as u8;
        }
    }

    #[inline]
    #[must_use]
    pub fn read_byte(&self, addr: u16) -> u8 {
        self.data[usize::from(addr)]
    }

    #[inline]
    pub fn write_byte(&mut self, addr: u16, v: u8) {
        self.data[usize::from(addr)] = v;
    }

    /// Zeroes all of memory, then copies `rom` starting at `0x100`.
    ///
    /// Returns the portion of `rom` that didn't fit (the caller should have
    /// already rejected ROMs too large to load in full; this is a defensive
    /// fallback, not the primary size check).
    #[must_use]
    pub fn reset<'b>(&mut self, rom: &'b [u8]) -> &'b [u8] {
        self.data.fill(0);
        let n = (self.data.len() - 0x100).min(rom.len());
        self.data[0x100..][..n].copy_from_slice(&rom[..n]);
        &rom[n..]
    }
}

#[cfg(feature = "alloc")]
mod ram {
    extern crate alloc;
    use alloc::boxed::Box;
    use alloc::vec;

    /// Heap-allocated, zero-initialized 64 KiB buffer for [`crate::Uxn`]'s
    /// memory. Only available with the `alloc` feature.
    pub struct UxnRam(Box<[u8; 65536]>);

    impl UxnRam {
        #[must_use]
        pub fn new() -> Self {
            UxnRam(vec![0u8; 65536].into_boxed_slice().try_into().unwrap())
        }
    }

    impl Default for UxnRam {
        fn default() -> Self {
            Self::new()
        }
    }

    impl core::ops::Deref for UxnRam {
        type Target = [u8; 65536];
        fn deref(&self) -> &Self::Target {
            &self.0
        }
    }

    impl core::ops::DerefMut for UxnRam {
        fn deref_mut(&mut self) -> &mut Self::Target {
            &mut self.0
        }
    }
}

#[cfg(feature = "alloc")]
pub use ram::UxnRam;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn byte_round_trip() {
        let mut buf = [0u8; 65536];
        let mut mem = Memory::new(&mut buf);
        mem.write(0x1234, 0x42, false);
        assert_eq!(mem.read(0x1234, false), 0x42);
    }

    #[test]
    fn short_round_trip_is_big_endian() {
        let mut buf = [0u8; 65536];
        let mut mem = Memory::new(&mut buf);
        mem.write(0x1234, 0xabcd, true);
        assert_eq!(mem.read(0x1234, true), 0xabcd);
        assert_eq!(mem.read_byte(0x1234), 0xab);
        assert_eq!(mem.read_byte(0x1235), 0xcd);
    }

    #[test]
    fn address_arithmetic_wraps() {
        let mut buf = [0u8; 65536];
        let mut mem = Memory::new(&mut buf);
        mem.write(0xffff, 0xabcd, true);
        assert_eq!(mem.read_byte(0xffff), 0xab);
        assert_eq!(mem.read_byte(0x0000), 0xcd);
    }
}
