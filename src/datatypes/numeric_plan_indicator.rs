use num_enum::TryFromPrimitive;

/// Numbering plan identification (TS 23.040 section 9.1.2.5, bits 3-0 of the
/// type-of-address octet)
#[derive(TryFromPrimitive)]
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NumericPlanIndicator {
    Unknown = 0b0000,
    IsdnTelephone = 0b0001,
    Data = 0b0011,
    Telex = 0b0100,
    National = 0b1000,
    Private = 0b1001,
    Ermes = 0b1010,
}
