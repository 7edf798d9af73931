//! Bit constants reported by the game in death events.

/// `damagebits` flags.
pub mod damage_bits {
    pub const VEHICLE: i64 = 1 << 4;
}

/// `death_flags` flags.
pub mod death_flags {
    pub const KILLER_DOMINATION: i64 = 1 << 0;
    pub const ASSISTER_DOMINATION: i64 = 1 << 1;
    pub const KILLER_REVENGE: i64 = 1 << 2;
    pub const ASSISTER_REVENGE: i64 = 1 << 3;
    pub const FIRST_BLOOD: i64 = 1 << 4;
    pub const DEAD_RINGER: i64 = 1 << 5;
}

/// True if any bit of `mask` is set in `bits`.
#[inline]
pub const fn has_any(bits: Option<i64>, mask: i64) -> bool {
    match bits {
        Some(bits) => bits & mask != 0,
        None => false,
    }
}
