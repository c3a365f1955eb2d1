#![no_std]

/// Microsecond delays between status polls and after DDC clock enable.
pub use embedded_hal::delay::DelayNs;

/// 32-bit register access to one transmitter instance.
///
/// Addresses are byte offsets from the instance base (the wrapper block).
/// Implementations perform exactly one bus access per call; the driver does
/// its own read-modify-write.
pub trait RegisterBus {
    type Error: core::fmt::Debug;

    /// Read a 32-bit register.
    fn read_register(&mut self, addr: u32) -> Result<u32, Self::Error>;

    /// Write a 32-bit register.
    fn write_register(&mut self, addr: u32, data: u32) -> Result<(), Self::Error>;
}

impl<B: RegisterBus + ?Sized> RegisterBus for &mut B {
    type Error = B::Error;

    fn read_register(&mut self, addr: u32) -> Result<u32, Self::Error> {
        (**self).read_register(addr)
    }

    fn write_register(&mut self, addr: u32, data: u32) -> Result<(), Self::Error> {
        (**self).write_register(addr, data)
    }
}

/// Memory-mapped register window.
pub struct MmioBus {
    base: *mut u32,
    len: usize,
}

/// Returned when an access falls outside the mapped window or is unaligned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutOfWindow(pub u32);

impl MmioBus {
    /// # Safety
    /// `base` must point to `len` bytes of device memory that stay mapped and
    /// are not accessed through any other handle for the lifetime of the bus.
    pub const unsafe fn from_ptr(base: *mut u32, len: usize) -> Self {
        Self { base, len }
    }

    pub fn as_ptr(&self) -> *mut u32 {
        self.base
    }

    fn word(&self, addr: u32) -> Result<*mut u32, OutOfWindow> {
        let offset = addr as usize;
        if offset % 4 != 0 || offset + 4 > self.len {
            return Err(OutOfWindow(addr));
        }
        Ok(self.base.wrapping_byte_add(offset))
    }
}

impl RegisterBus for MmioBus {
    type Error = OutOfWindow;

    fn read_register(&mut self, addr: u32) -> Result<u32, Self::Error> {
        let ptr = self.word(addr)?;
        // SAFETY: in bounds and aligned per `word`, mapped per `from_ptr`.
        Ok(unsafe { ptr.read_volatile() })
    }

    fn write_register(&mut self, addr: u32, data: u32) -> Result<(), Self::Error> {
        let ptr = self.word(addr)?;
        // SAFETY: in bounds and aligned per `word`, mapped per `from_ptr`.
        unsafe { ptr.write_volatile(data) };
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mmio_window() {
        let mut mem = [0u32; 4];
        let mut bus = unsafe { MmioBus::from_ptr(mem.as_mut_ptr(), 16) };
        bus.write_register(0x8, 0xDEAD_BEEF).unwrap();
        assert_eq!(bus.read_register(0x8), Ok(0xDEAD_BEEF));
        assert_eq!(bus.read_register(0x10), Err(OutOfWindow(0x10)));
        assert_eq!(bus.write_register(0x2, 1), Err(OutOfWindow(0x2)));
        drop(bus);
        assert_eq!(mem[2], 0xDEAD_BEEF);
    }
}
