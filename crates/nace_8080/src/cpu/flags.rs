use bitflags::bitflags;

bitflags! {
    /// Bit layout of the flag byte stored by `PUSH PSW`.
    ///
    /// Bit 1 always reads as one, bits 3 and 5 always read as zero.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct Psw: u8 {
        const S = 0x80;
        const Z = 0x40;
        const AC = 0x10;
        const P = 0x04;
        const ALWAYS_ONE = 0x02;
        const CY = 0x01;
    }
}

/// CPU flags for Intel 8080.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Flags {
    pub z: bool,  // zero
    pub s: bool,  // sign
    pub p: bool,  // parity (even)
    pub cy: bool, // carry
    pub ac: bool, // auxiliary carry
}

impl Flags {
    /// Pack the flags into the PSW byte.
    pub fn to_u8(self) -> u8 {
        let mut psw = Psw::ALWAYS_ONE;
        psw.set(Psw::S, self.s);
        psw.set(Psw::Z, self.z);
        psw.set(Psw::AC, self.ac);
        psw.set(Psw::P, self.p);
        psw.set(Psw::CY, self.cy);
        psw.bits()
    }

    /// Unpack a PSW byte. The fixed bits are ignored.
    pub fn from_u8(value: u8) -> Self {
        let psw = Psw::from_bits_truncate(value);
        Self {
            z: psw.contains(Psw::Z),
            s: psw.contains(Psw::S),
            p: psw.contains(Psw::P),
            cy: psw.contains(Psw::CY),
            ac: psw.contains(Psw::AC),
        }
    }

    /// Compact `zspca` view used by the instruction trace.
    pub fn describe(self) -> String {
        [
            (self.z, 'z'),
            (self.s, 's'),
            (self.p, 'p'),
            (self.cy, 'c'),
            (self.ac, 'a'),
        ]
        .iter()
        .map(|&(set, c)| if set { c } else { '.' })
        .collect()
    }
}
