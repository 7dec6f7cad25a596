/// CONTROL1 PWM_MODE field: how many PWM inputs drive the three half
/// bridges. Exactly one mode is active at a time.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum PwmMode {
    /// independent high- and low-side inputs, chip reset default
    #[default]
    SixInputs = 0,
    /// one input per phase, complementary low side generated on chip
    ThreeInputs = 1,
}

/// CONTROL1 OCP_MODE field: what the chip does when a FET exceeds the
/// OC_ADJ_SET threshold.
#[allow(unused)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum OcpMode {
    /// cycle-by-cycle current limiting, chip reset default
    #[default]
    CurrentLimit = 0,
    /// latch the affected outputs off until a gate reset
    LatchShutdown = 1,
    /// report on nFAULT/nOCTW only, keep switching
    ReportOnly = 2,
    Disabled = 3,
}

/// OC_ADJ_SET trim step written during initialization (V_DS threshold table
/// in the datasheet; step 27 ~ 1.043 V, effectively out of the way while
/// OCP is disabled anyway).
pub const OC_ADJ_DEFAULT: u16 = 27;
