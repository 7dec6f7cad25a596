/// DRV8301 register map. Addresses occupy bits 14:11 of a command word.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[allow(unused)]
pub enum Reg {
    /// fault status: FET over-currents, over-temperature, under-voltage
    Status1 = 0x0,
    /// GVDD over-voltage flag and the 4-bit device ID
    Status2 = 0x1,
    /// gate drive current, gate reset, PWM mode, OCP mode, OC trim
    Control1 = 0x2,
    /// OCTW reporting, shunt amplifier gains, OC_TOFF
    Control2 = 0x3,
}

impl Reg {
    pub fn addr(self) -> u16 {
        self as u16
    }
}

/// Read/write flag, bit 15 of a command word; set for reads.
pub const READ_FLAG: u16 = 0x8000;

/// Payload mask: register data rides in the low 11 bits of a frame.
pub const DATA_MASK: u16 = 0x07ff;

/// Dummy word clocked out to fetch the response to a preceding read command.
pub const DUMMY_WORD: u16 = 0xffff;

// CONTROL1 fields
pub const GATE_RESET: u16 = 1 << 2;
pub const PWM_MODE_SHIFT: u16 = 3;
pub const PWM_MODE_MASK: u16 = 1 << PWM_MODE_SHIFT;
pub const OCP_MODE_SHIFT: u16 = 4;

/// OC_ADJ_SET occupies CONTROL1 bits 10:6; 32 trim steps.
pub fn oc_adj_set(step: u16) -> u16 {
    (step & 0x1f) << 6
}

// STATUS2 fields
pub const DEVICE_ID_MASK: u16 = 0x000f;
