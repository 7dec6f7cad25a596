pub mod bitbang;

/// Hardware access needed to talk to a DRV8301.
///
/// The chip layer is generic over this trait so the register protocol and
/// the configuration sequences can be exercised against a simulated chip.
pub trait Drv8301Driver {
    /// Performs one chip-select framed 16-bit transfer: SCS low, shift the
    /// word out MSB first while shifting the chip's response in, SCS high.
    ///
    /// There is no error path. The link carries no framing, parity or
    /// acknowledgment, so a stuck line or absent chip yields an arbitrary
    /// word instead of a failure.
    fn framed_transfer(&mut self, word: u16) -> u16;

    /// Brings the chip out of reset: drives the bus lines to their idle
    /// levels, waits for the supply to settle, raises EN_GATE and waits for
    /// the internal regulators to start up (datasheet t_reg, worst case well
    /// under 20 ms).
    fn power_up(&mut self);

    /// Instantaneous level of the nFAULT line, inverted for the caller:
    /// `true` while the chip has a fault latched. Never memoized.
    fn is_fault(&mut self) -> bool;
}
