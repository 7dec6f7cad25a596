mod registers;
pub use registers::Reg;
use registers::*;

mod configuration;
pub use configuration::*;

use log::debug;

use crate::driver::Drv8301Driver;

/// High-level view of one DRV8301, borrowing the link exclusively.
///
/// Nothing is cached locally: every operation goes to the silicon, and the
/// chip's registers are the only state. Operations are blocking and must be
/// serialized by the single `&mut` owner; the chip offers no bus
/// arbitration.
pub struct Drv8301<'a, D: Drv8301Driver> {
    pub driver: &'a mut D,
}

impl<'a, D: Drv8301Driver> Drv8301<'a, D> {
    pub fn new(driver: &'a mut D) -> Self {
        Self { driver }
    }

    /// Reads a register with the chip's two-frame protocol: the read
    /// command first, whose echo is stale and discarded, then a dummy
    /// all-ones frame that clocks the addressed register out. Collapsing
    /// this into one frame yields garbage; the pipeline is in the silicon.
    pub fn read_register(&mut self, reg: Reg) -> u16 {
        self.driver
            .framed_transfer(READ_FLAG | (reg.addr() & 0x000f) << 11);
        self.driver.framed_transfer(DUMMY_WORD)
    }

    /// Writes the low 11 bits of `value` to a register in one frame.
    pub fn write_register(&mut self, reg: Reg, value: u16) {
        self.driver
            .framed_transfer((reg.addr() & 0x000f) << 11 | (value & DATA_MASK));
    }

    /// Read-modify-write of CONTROL1. Not atomic with respect to the chip;
    /// acceptable with a single bus master.
    fn modify_control1(&mut self, f: impl FnOnce(u16) -> u16) {
        let value = self.read_register(Reg::Control1) & DATA_MASK;
        self.write_register(Reg::Control1, f(value));
    }

    /// Powers the chip up and brings it to a known configuration: pin
    /// sequencing and regulator start-up via the driver, one throwaway
    /// STATUS1 read to shake out the power-on fault latch, then CONTROL1
    /// with over-current protection disabled at the fixed trim step.
    ///
    /// Call once, before anything else; re-initialization is not guarded.
    pub fn init(&mut self) {
        self.driver.power_up();
        self.read_register(Reg::Status1);
        self.write_register(
            Reg::Control1,
            (OcpMode::Disabled as u16) << OCP_MODE_SHIFT | oc_adj_set(OC_ADJ_DEFAULT),
        );
        debug!("drv8301: initialized");
    }

    /// Clears the chip's latched faults by pulsing GATE_RESET in CONTROL1,
    /// leaving every other configured bit as it was.
    pub fn reset_all_faults(&mut self) {
        self.modify_control1(|reg| reg | GATE_RESET);
        debug!("drv8301: fault latch reset");
    }

    /// Selects the PWM_MODE field, leaving the rest of CONTROL1 untouched.
    pub fn set_pwm_mode(&mut self, mode: PwmMode) {
        self.modify_control1(|reg| reg & !PWM_MODE_MASK | (mode as u16) << PWM_MODE_SHIFT);
        debug!("drv8301: pwm mode {:?}", mode);
    }

    /// One PWM input per phase.
    pub fn set_3pwm_input(&mut self) {
        self.set_pwm_mode(PwmMode::ThreeInputs);
    }

    /// Independent high- and low-side PWM inputs.
    pub fn set_6pwm_input(&mut self) {
        self.set_pwm_mode(PwmMode::SixInputs);
    }

    /// Instantaneous fault poll, true while the chip holds nFAULT low.
    /// Meant for a control loop; clearing is the caller's decision via
    /// [`reset_all_faults`](Self::reset_all_faults).
    pub fn is_fault(&mut self) -> bool {
        self.driver.is_fault()
    }

    /// The chip's 4-bit hardware ID from STATUS2.
    pub fn get_id(&mut self) -> u8 {
        (self.read_register(Reg::Status2) & DEVICE_ID_MASK) as u8
    }
}
