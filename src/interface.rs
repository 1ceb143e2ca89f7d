//! The transport between the driver and the SH1107, and an optional reset helper.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

/// A byte-oriented link to the controller. Command bytes and display RAM data travel over the
/// same wire and are told apart by the transport, so the two are separate methods.
pub trait DisplayInterface {
    type Error;

    /// Send a sequence of command bytes (opcodes and their arguments).
    fn send_commands(&mut self, cmds: &[u8]) -> Result<(), Self::Error>;

    /// Send bytes to be written into display RAM at the current page/column address.
    fn send_data(&mut self, buf: &[u8]) -> Result<(), Self::Error>;
}

/// Pulse the active-low reset line of the controller: hold it low for 10 ms, release it, and
/// give the chip 50 ms to come out of reset.
///
/// Boards without a reset line can skip this; bring-up then starts from whatever state the
/// controller was left in.
pub fn hardware_reset<RST, DELAY>(rst: &mut RST, delay: &mut DELAY) -> Result<(), RST::Error>
where
    RST: OutputPin,
    DELAY: DelayNs,
{
    rst.set_low()?;
    delay.delay_ms(10);
    rst.set_high()?;
    delay.delay_ms(50);
    Ok(())
}

pub mod i2c {
    //! The I2C interface. Every write starts with a control byte: `0x00` announces a stream of
    //! command bytes and `0x40` a stream of display RAM data.

    use embedded_hal::i2c::I2c;

    use super::DisplayInterface;

    /// The 7-bit address the SH1107 answers on with SA0 tied low.
    pub const DEFAULT_ADDRESS: u8 = 0x3C;

    const CONTROL_COMMANDS: u8 = 0x00;
    const CONTROL_DATA: u8 = 0x40;

    // Short data writes keep slow or clock-stretching buses happy.
    const DATA_CHUNK_LEN: usize = 16;
    const COMMAND_CHUNK_LEN: usize = 8;

    pub struct I2cInterface<I2C> {
        /// The I2C master the SH1107 hangs off.
        i2c: I2C,
        /// 7-bit device address.
        address: u8,
    }

    impl<I2C> I2cInterface<I2C>
    where
        I2C: I2c,
    {
        /// Create an interface talking to a display at `DEFAULT_ADDRESS`.
        pub fn new(i2c: I2C) -> Self {
            Self::with_address(i2c, DEFAULT_ADDRESS)
        }

        /// Create an interface talking to a display at a non-default address, e.g. `0x3D` when
        /// SA0 is strapped high.
        pub fn with_address(i2c: I2C, address: u8) -> Self {
            Self { i2c, address }
        }

        pub fn address(&self) -> u8 {
            self.address
        }

        /// Give back the I2C bus.
        pub fn release(self) -> I2C {
            self.i2c
        }

        fn write_framed<const N: usize>(
            &mut self,
            control: u8,
            bytes: &[u8],
        ) -> Result<(), I2C::Error> {
            let mut frame = [0u8; N];
            frame[0] = control;
            for chunk in bytes.chunks(N - 1) {
                frame[1..=chunk.len()].copy_from_slice(chunk);
                self.i2c.write(self.address, &frame[..=chunk.len()])?;
            }
            Ok(())
        }
    }

    impl<I2C> DisplayInterface for I2cInterface<I2C>
    where
        I2C: I2c,
    {
        type Error = I2C::Error;

        fn send_commands(&mut self, cmds: &[u8]) -> Result<(), Self::Error> {
            self.write_framed::<{ COMMAND_CHUNK_LEN + 1 }>(CONTROL_COMMANDS, cmds)
        }

        fn send_data(&mut self, buf: &[u8]) -> Result<(), Self::Error> {
            self.write_framed::<{ DATA_CHUNK_LEN + 1 }>(CONTROL_DATA, buf)
        }
    }

}
