use num_enum::TryFromPrimitive;

/// Type of number (TS 23.040 section 9.1.2.5, bits 6-4 of the type-of-address octet)
#[derive(TryFromPrimitive)]
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TypeOfNumber {
    Unknown = 0b000,
    International = 0b001,
    National = 0b010,
    NetworkSpecific = 0b011,
    Subscriber = 0b100,
    Alphanumeric = 0b101,
    Abbreviated = 0b110,
}
