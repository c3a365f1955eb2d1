//! Typed register access over a [`RegisterBus`].

use hdmi_registers::reg::{Block, Field, Register, RegisterArray};
use hdmi_registers::encode::FieldOverflow;
use hdmi_tx_hal::RegisterBus;

use crate::config::BlockLayout;
use crate::error::HdmiError;

/// Offset-based accessor for the five register blocks of one instance.
///
/// Field writes are read-modify-write except for full-word fields.
pub struct RegisterPort<R: RegisterBus> {
    bus: R,
    layout: BlockLayout,
}

impl<R: RegisterBus> RegisterPort<R> {
    pub fn new(bus: R, layout: BlockLayout) -> Self {
        Self { bus, layout }
    }

    pub fn layout(&self) -> &BlockLayout {
        &self.layout
    }

    /// Bus address of `offset` inside `block`.
    pub fn address(&self, block: Block, offset: u16) -> u32 {
        self.layout.base(block) + u32::from(offset)
    }

    pub fn read_raw(&mut self, block: Block, offset: u16) -> Result<u32, HdmiError<R::Error>> {
        let addr = self.address(block, offset);
        self.bus.read_register(addr).map_err(HdmiError::Bus)
    }

    pub fn write_raw(
        &mut self,
        block: Block,
        offset: u16,
        data: u32,
    ) -> Result<(), HdmiError<R::Error>> {
        let addr = self.address(block, offset);
        self.bus.write_register(addr, data).map_err(HdmiError::Bus)
    }

    pub fn read<T: Register>(&mut self) -> Result<T, HdmiError<R::Error>> {
        self.read_raw(T::BLOCK, T::ADDRESS).map(T::from_raw)
    }

    pub fn write<T: Register>(&mut self, reg: T) -> Result<(), HdmiError<R::Error>> {
        self.write_raw(T::BLOCK, T::ADDRESS, reg.to_raw())
    }

    /// Read-modify-write with an infallible update.
    pub fn modify<T: Register>(
        &mut self,
        f: impl FnOnce(&mut T),
    ) -> Result<T, HdmiError<R::Error>> {
        let mut reg = self.read::<T>()?;
        f(&mut reg);
        self.write(reg)?;
        Ok(reg)
    }

    /// Read-modify-write with a range-checked update. Nothing is written if
    /// the update fails.
    pub fn try_modify<T: Register>(
        &mut self,
        f: impl FnOnce(&mut T) -> Result<(), FieldOverflow>,
    ) -> Result<T, HdmiError<R::Error>> {
        let mut reg = self.read::<T>()?;
        f(&mut reg)?;
        self.write(reg)?;
        Ok(reg)
    }

    pub fn read_field(&mut self, field: Field) -> Result<u32, HdmiError<R::Error>> {
        let word = self.read_raw(field.block, field.address)?;
        Ok(field.extract(word))
    }

    pub fn write_field(&mut self, field: Field, value: u32) -> Result<(), HdmiError<R::Error>> {
        if field.is_full_word() {
            return self.write_raw(field.block, field.address, value);
        }
        let word = self.read_raw(field.block, field.address)?;
        let word = field.insert(word, value)?;
        self.write_raw(field.block, field.address, word)
    }

    /// Write element `index` of a register array.
    pub fn write_indexed<T: RegisterArray>(
        &mut self,
        index: usize,
        reg: T,
    ) -> Result<(), HdmiError<R::Error>> {
        let offset = T::address_of(index).ok_or(HdmiError::IndexOutOfRange {
            register: T::NAME,
            index,
        })?;
        self.write_raw(T::BLOCK, offset, reg.to_raw())
    }

    pub fn bus(&self) -> &R {
        &self.bus
    }

    pub fn bus_mut(&mut self) -> &mut R {
        &mut self.bus
    }

    pub fn into_inner(self) -> R {
        self.bus
    }
}
