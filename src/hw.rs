//! Memory-mapped register access for targets

use core::ptr::{read_volatile, write_volatile};

use crate::port::{PORT_COUNT, Quadrant, StarPorts};
use crate::show::Watchdog;

/// `CLR_WDT` bit of the STC15 `WDT_CONTR` register
pub const CLEAR_WATCHDOG_BIT: u8 = 1 << 4;

/// Quadrant ports backed by memory-mapped output registers
#[derive(Debug)]
pub struct MmioPorts {
    registers: [*mut u8; PORT_COUNT],
}

impl MmioPorts {
    /// Create ports from register addresses
    ///
    /// # Safety
    ///
    /// Every pointer must address a valid 8-bit output register, readable
    /// and writable, and nothing else may access those registers while the
    /// returned value is alive.
    pub const unsafe fn new(
        upper_left: *mut u8,
        lower_left: *mut u8,
        upper_right: *mut u8,
        lower_right: *mut u8,
    ) -> Self {
        Self {
            registers: [upper_left, lower_left, upper_right, lower_right],
        }
    }
}

impl StarPorts for MmioPorts {
    fn write(&mut self, quadrant: Quadrant, value: u8) {
        // SAFETY: guaranteed by the contract of `MmioPorts::new`
        unsafe { write_volatile(self.registers[quadrant.index()], value) }
    }

    fn read(&self, quadrant: Quadrant) -> u8 {
        // SAFETY: guaranteed by the contract of `MmioPorts::new`
        unsafe { read_volatile(self.registers[quadrant.index()]) }
    }
}

/// Watchdog acknowledged by setting a bit in a control register
#[derive(Debug)]
pub struct WatchdogControl {
    register: *mut u8,
    clear_mask: u8,
}

impl WatchdogControl {
    /// Create a watchdog using [`CLEAR_WATCHDOG_BIT`]
    ///
    /// # Safety
    ///
    /// `register` must address the watchdog control register, valid for
    /// volatile reads and writes, and exclusively owned by the returned value.
    pub const unsafe fn new(register: *mut u8) -> Self {
        // SAFETY: forwarded to the caller
        unsafe { Self::with_clear_mask(register, CLEAR_WATCHDOG_BIT) }
    }

    /// Create a watchdog with a custom clear mask
    ///
    /// # Safety
    ///
    /// Same contract as [`WatchdogControl::new`].
    pub const unsafe fn with_clear_mask(register: *mut u8, clear_mask: u8) -> Self {
        Self {
            register,
            clear_mask,
        }
    }
}

impl Watchdog for WatchdogControl {
    fn feed(&mut self) {
        // SAFETY: guaranteed by the contract of `WatchdogControl::new`
        unsafe {
            let value = read_volatile(self.register);
            write_volatile(self.register, value | self.clear_mask);
        }
    }
}
