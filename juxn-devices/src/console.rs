use std::io::Write;

use juxn_core::device::Device;

/// Port offsets within the console's device row (§4.5, §6).
const WRITE: u8 = 0x08;
const ERROR: u8 = 0x09;

/// The console device (slot `0x1`): `DEO` to port `0x18` emits one byte to
/// standard output, `0x19` to standard error. Every other port in the row
/// is absorbed into a local 16-byte buffer that mirrors the VM's shadow
/// page, so a read-back of an unused port behaves like inert memory
/// rather than always reading zero.
pub struct Console {
    ports: [u8; 16],
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

impl Console {
    /// A fresh console with every port reading back as zero.
    #[must_use]
    pub fn new() -> Self {
        Self { ports: [0u8; 16] }
    }
}

impl Device for Console {
    fn input(&mut self, port: u8) -> u8 {
        self.ports[usize::from(port & 0x0f)]
    }

    fn output(&mut self, port: u8, value: u8) {
        let row_port = port & 0x0f;
        self.ports[usize::from(row_port)] = value;
        match row_port {
            WRITE => {
                let _ = std::io::stdout().write_all(&[value]);
                let _ = std::io::stdout().flush();
            }
            ERROR => {
                let _ = std::io::stderr().write_all(&[value]);
                let _ = std::io::stderr().flush();
            }
            _ => (),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unused_ports_echo_the_last_value_written() {
        let mut c = Console::new();
        c.output(0x12, 0x42);
        assert_eq!(c.input(0x12), 0x42);
    }

    #[test]
    fn write_and_error_ports_do_not_disturb_other_ports() {
        let mut c = Console::new();
        c.output(WRITE, b'A');
        c.output(ERROR, b'!');
        assert_eq!(c.input(WRITE), b'A');
        assert_eq!(c.input(ERROR), b'!');
        assert_eq!(c.input(0x00), 0);
    }
}
