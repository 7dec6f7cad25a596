use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};
use log::debug;

use super::Drv8301Driver;

/// Spin iterations per half clock period, tuned against the DRV8301's
/// minimum SCLK period on a 168 MHz Cortex-M4 class core. A host with a
/// different clock speed needs this recalibrated.
const CLOCK_DELAY_SPINS: u32 = 22;

/// Half-period busy wait for the soft SPI clock.
///
/// The protocol timing depends on the wall-clock duration of this call, not
/// on it computing anything, so it must stay out of line where the
/// optimizer cannot fold the loop into a no-op.
#[inline(never)]
fn clock_delay() {
    for _ in 0..CLOCK_DELAY_SPINS {
        core::hint::spin_loop();
    }
}

/// Software SPI link to a DRV8301.
///
/// Owns all six chip lines plus a delay provider:
/// * `mosi` (chip SDI), `sclk`, `scs`, `en_gate` — push-pull outputs
/// * `miso` (chip SDO) — floating input
/// * `fault` (chip nFAULT, open drain) — input with pull-up enabled
///
/// Pin modes are fixed by the caller when constructing the pins; this type
/// only drives levels. Exclusive ownership of the lines is the concurrency
/// model: there is no locking, the borrow checker enforces one master.
pub struct BitBangDriver<MOSI, MISO, SCLK, SCS, EN, FAULT, DELAY> {
    mosi: MOSI,
    miso: MISO,
    sclk: SCLK,
    scs: SCS,
    en_gate: EN,
    fault: FAULT,
    delay: DELAY,
}

impl<MOSI, MISO, SCLK, SCS, EN, FAULT, DELAY>
    BitBangDriver<MOSI, MISO, SCLK, SCS, EN, FAULT, DELAY>
where
    MOSI: OutputPin,
    MISO: InputPin,
    SCLK: OutputPin,
    SCS: OutputPin,
    EN: OutputPin,
    FAULT: InputPin,
    DELAY: DelayNs,
{
    /// Records the pins without touching them; lines first move in
    /// [`power_up`](Drv8301Driver::power_up).
    pub fn new(
        mosi: MOSI,
        miso: MISO,
        sclk: SCLK,
        scs: SCS,
        en_gate: EN,
        fault: FAULT,
        delay: DELAY,
    ) -> Self {
        Self {
            mosi,
            miso,
            sclk,
            scs,
            en_gate,
            fault,
            delay,
        }
    }

    /// One raw 16-bit shift transfer, MSB first, without chip-select
    /// framing. Per bit: drive SDI, raise SCLK, wait half a period, sample
    /// SDO, lower SCLK, wait the other half. 32 delay intervals per word.
    ///
    /// Pin errors are ignored; the link has no way to report a fault and a
    /// broken wire simply reads back as garbage.
    pub fn transfer(&mut self, word: u16) -> u16 {
        let mut response = 0u16;
        for bit in (0..16).rev() {
            if word & (1 << bit) != 0 {
                let _ = self.mosi.set_high();
            } else {
                let _ = self.mosi.set_low();
            }
            let _ = self.sclk.set_high();
            clock_delay();
            if self.miso.is_high().unwrap_or(false) {
                response |= 1 << bit;
            }
            let _ = self.sclk.set_low();
            clock_delay();
        }
        response
    }
}

impl<MOSI, MISO, SCLK, SCS, EN, FAULT, DELAY> Drv8301Driver
    for BitBangDriver<MOSI, MISO, SCLK, SCS, EN, FAULT, DELAY>
where
    MOSI: OutputPin,
    MISO: InputPin,
    SCLK: OutputPin,
    SCS: OutputPin,
    EN: OutputPin,
    FAULT: InputPin,
    DELAY: DelayNs,
{
    fn framed_transfer(&mut self, word: u16) -> u16 {
        let _ = self.scs.set_low();
        let response = self.transfer(word);
        let _ = self.scs.set_high();
        response
    }

    fn power_up(&mut self) {
        let _ = self.en_gate.set_low();
        let _ = self.scs.set_high();
        let _ = self.sclk.set_low();
        let _ = self.mosi.set_low();
        self.delay.delay_us(40);
        let _ = self.en_gate.set_high();
        // internal regulator start-up before the SPI core answers
        self.delay.delay_ms(20);
        debug!("drv8301: gate driver enabled");
    }

    fn is_fault(&mut self) -> bool {
        // nFAULT is active low
        self.fault.is_low().unwrap_or(false)
    }
}
