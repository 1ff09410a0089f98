//! Cabinet port map.
//!
//! | port | IN                         | OUT                  |
//! |------|----------------------------|----------------------|
//! | 1    | coin, start buttons, P1    |                      |
//! | 2    | DIP switches, tilt, P2     | shift amount         |
//! | 3    | shift register result      | sound latch 1        |
//! | 4    |                            | shift data           |
//! | 5    |                            | sound latch 2        |
//! | 6    |                            | watchdog             |

use nace_8080::PortIo;

pub const IN1_BIT_COIN: u8 = 0;
pub const IN1_BIT_P2_START: u8 = 1;
pub const IN1_BIT_P1_START: u8 = 2;
pub const IN1_BIT_ALWAYS_ONE: u8 = 3;
pub const IN1_BIT_P1_SHOOT: u8 = 4;
pub const IN1_BIT_P1_LEFT: u8 = 5;
pub const IN1_BIT_P1_RIGHT: u8 = 6;

pub const IN2_BIT_TILT: u8 = 2;
pub const IN2_BIT_P2_SHOOT: u8 = 4;
pub const IN2_BIT_P2_LEFT: u8 = 5;
pub const IN2_BIT_P2_RIGHT: u8 = 6;
/// Set to hide the coin info line in attract mode.
pub const IN2_BIT_COIN_INFO: u8 = 7;

const IN2_MASK_SHIPS_PER_CREDIT: u8 = 0x03;

/// The DIP switches read through port 2.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DipConfig {
    /// Ships per game, 3 to 6. Encoded in bits 0-1 as `ships - 3`.
    pub ships_per_credit: u8,
    pub show_coin_info: bool,
}

impl Default for DipConfig {
    fn default() -> Self {
        Self {
            ships_per_credit: 3,
            show_coin_info: true,
        }
    }
}

impl DipConfig {
    fn apply_to_port2(&self, in_port2: &mut u8) {
        *in_port2 &= !(IN2_MASK_SHIPS_PER_CREDIT | (1 << IN2_BIT_COIN_INFO));

        let ships = self.ships_per_credit.clamp(3, 6);
        *in_port2 |= (ships - 3) & IN2_MASK_SHIPS_PER_CREDIT;

        if !self.show_coin_info {
            *in_port2 |= 1 << IN2_BIT_COIN_INFO;
        }
    }
}

/// Input latches, the external shift register and the sound latches.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InvadersIo {
    pub in_port1: u8,
    pub in_port2: u8,
    pub out_port3: u8,
    pub out_port5: u8,
    shift_register: u16,
    shift_offset: u8,
}

impl Default for InvadersIo {
    fn default() -> Self {
        Self {
            in_port1: 1 << IN1_BIT_ALWAYS_ONE,
            in_port2: 0,
            out_port3: 0,
            out_port5: 0,
            shift_register: 0,
            shift_offset: 0,
        }
    }
}

impl InvadersIo {
    pub fn new(dip_config: DipConfig) -> Self {
        let mut io = Self::default();
        io.apply_dip_config(dip_config);
        io
    }

    pub fn apply_dip_config(&mut self, dip_config: DipConfig) {
        dip_config.apply_to_port2(&mut self.in_port2);
    }

    /// Value the game reads back from port 3.
    pub fn shift_result(&self) -> u8 {
        (self.shift_register >> (8 - self.shift_offset)) as u8
    }
}

impl PortIo for InvadersIo {
    fn handle_port_in(&mut self, port: u8) -> u8 {
        match port {
            1 => self.in_port1,
            2 => self.in_port2,
            3 => self.shift_result(),
            _ => {
                log::debug!("IN from unmapped port {port}");
                0
            }
        }
    }

    fn handle_port_out(&mut self, port: u8, value: u8) {
        match port {
            2 => self.shift_offset = value & 0x07,
            3 => self.out_port3 = value,
            4 => self.shift_register = (self.shift_register >> 8) | (u16::from(value) << 8),
            5 => self.out_port5 = value,
            // watchdog
            6 => {}
            _ => log::debug!("OUT 0x{value:02x} to unmapped port {port}"),
        }
    }
}

pub fn set_input_bit(port: &mut u8, bit: u8, pressed: bool) {
    let mask = 1 << bit;
    if pressed {
        *port |= mask;
    } else {
        *port &= !mask;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shift_register_returns_window_at_offset() {
        let mut io = InvadersIo::default();
        io.handle_port_out(4, 0xaa);
        io.handle_port_out(4, 0xff);
        // Register is now 0xffaa.
        io.handle_port_out(2, 0);
        assert_eq!(io.handle_port_in(3), 0xff);
        io.handle_port_out(2, 4);
        assert_eq!(io.handle_port_in(3), 0xfa);
        io.handle_port_out(2, 7);
        assert_eq!(io.handle_port_in(3), 0xd5);
        // Only the low three bits select the offset.
        io.handle_port_out(2, 0x0c);
        assert_eq!(io.handle_port_in(3), 0xfa);
    }

    #[test]
    fn port1_bit3_is_always_set() {
        let io = InvadersIo::default();
        assert_eq!(io.in_port1, 0x08);
    }

    #[test]
    fn dip_switches_encode_ships_and_coin_info() {
        let io = InvadersIo::new(DipConfig::default());
        assert_eq!(io.in_port2, 0x00);

        let io = InvadersIo::new(DipConfig {
            ships_per_credit: 5,
            show_coin_info: false,
        });
        assert_eq!(io.in_port2, 0x82);

        // Out-of-range ship counts clamp.
        let io = InvadersIo::new(DipConfig {
            ships_per_credit: 9,
            show_coin_info: true,
        });
        assert_eq!(io.in_port2 & 0x03, 0x03);
    }

    #[test]
    fn dip_switches_leave_player_two_bits_alone() {
        let mut io = InvadersIo::default();
        set_input_bit(&mut io.in_port2, IN2_BIT_P2_SHOOT, true);
        io.apply_dip_config(DipConfig {
            ships_per_credit: 4,
            show_coin_info: true,
        });
        assert_eq!(io.in_port2, 0x11);
    }

    #[test]
    fn sound_latches_are_recorded() {
        let mut io = InvadersIo::default();
        io.handle_port_out(3, 0x02);
        io.handle_port_out(5, 0x10);
        io.handle_port_out(6, 0xff);
        assert_eq!((io.out_port3, io.out_port5), (0x02, 0x10));
        assert_eq!(io.handle_port_in(0), 0);
    }
}
