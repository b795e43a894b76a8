use log::trace;

use juxn_core::device::Device;

/// The system device (slot `0x0`): the minimal peripheral every Uxn
/// program's reset vector touches. This crate's system device defines no
/// behavior beyond satisfying the slot-dispatch contract and reporting
/// activity to the log, at `trace` level, for diagnostics — no reset
/// vector, no palette, no expansion-memory opcodes; those belong to a
/// fuller peripheral set this crate doesn't implement.
pub struct System {
    ports: [u8; 16],
}

impl Default for System {
    fn default() -> Self {
        Self::new()
    }
}

impl System {
    /// A fresh system device with every port reading back as zero.
    #[must_use]
    pub fn new() -> Self {
        Self { ports: [0u8; 16] }
    }
}

impl Device for System {
    fn input(&mut self, port: u8) -> u8 {
        let row_port = port & 0x0f;
        trace!("system: DEI port {row_port:#04x}");
        self.ports[usize::from(row_port)]
    }

    fn output(&mut self, port: u8, value: u8) {
        let row_port = port & 0x0f;
        trace!("system: DEO port {row_port:#04x} = {value:#04x}");
        self.ports[usize::from(row_port)] = value;
    }
}
