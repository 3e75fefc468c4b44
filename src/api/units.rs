use crate::api::capacity::Capacity;
use ahash::RandomState;
use derive_new::new;
use hashbrown::HashMap;
use once_cell::sync::Lazy;
use static_assertions::const_assert;

const BYTE_BITS: i128 = 8;
const KIB_BITS: i128 = 1024 * BYTE_BITS;
const MIB_BITS: i128 = 1024 * KIB_BITS;
const GIB_BITS: i128 = 1024 * MIB_BITS;
const TIB_BITS: i128 = 1024 * GIB_BITS;
const PIB_BITS: i128 = 1024 * TIB_BITS;
const EIB_BITS: i128 = 1024 * PIB_BITS;
const KB_BITS: i128 = 1000 * BYTE_BITS;
const MB_BITS: i128 = 1000 * KB_BITS;
const GB_BITS: i128 = 1000 * MB_BITS;
const TB_BITS: i128 = 1000 * GB_BITS;
const PB_BITS: i128 = 1000 * TB_BITS;
const EB_BITS: i128 = 1000 * PB_BITS;

// An exbibyte is 2^63 bits; the bit count must not be a 64-bit integer.
const_assert!(EIB_BITS > i64::MAX as i128);
// Each decimal unit sits just below its binary counterpart.
const_assert!(KB_BITS < KIB_BITS && KIB_BITS < MB_BITS);
const_assert!(EB_BITS < EIB_BITS);

/// A single bit.
pub const BIT: Capacity = Capacity::from_int(1);
/// 8 bits.
pub const BYTE: Capacity = Capacity::from_int(BYTE_BITS);
/// Alias of [BYTE].
pub const B: Capacity = BYTE;

/// 1024 bytes.
pub const KIB: Capacity = Capacity::from_int(KIB_BITS);
/// 1024 KiB.
pub const MIB: Capacity = Capacity::from_int(MIB_BITS);
/// 1024 MiB.
pub const GIB: Capacity = Capacity::from_int(GIB_BITS);
/// 1024 GiB.
pub const TIB: Capacity = Capacity::from_int(TIB_BITS);
/// 1024 TiB.
pub const PIB: Capacity = Capacity::from_int(PIB_BITS);
/// 1024 PiB.
pub const EIB: Capacity = Capacity::from_int(EIB_BITS);

/// 1000 bytes.
pub const KB: Capacity = Capacity::from_int(KB_BITS);
/// 1000 KB.
pub const MB: Capacity = Capacity::from_int(MB_BITS);
/// 1000 MB.
pub const GB: Capacity = Capacity::from_int(GB_BITS);
/// 1000 GB.
pub const TB: Capacity = Capacity::from_int(TB_BITS);
/// 1000 TB.
pub const PB: Capacity = Capacity::from_int(PB_BITS);
/// 1000 PB.
pub const EB: Capacity = Capacity::from_int(EB_BITS);

/// Alternative spelling of `byte` accepted when parsing.
const BYTE_ALIAS: &str = "b";

/// Multiplier and names of each chain of units built on top of a byte.
const UNIT_CHAINS: [(i64, [&str; 6]); 2] = [
    (1024, ["KiB", "MiB", "GiB", "TiB", "PiB", "EiB"]),
    (1000, ["KB", "MB", "GB", "TB", "PB", "EB"]),
];

/// A named capacity, used when parsing and formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct Unit {
    name: &'static str,
    capacity: Capacity,
}

impl Unit {
    /// Name of the unit, e.g. `MiB`.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Size of one of this unit.
    pub fn capacity(&self) -> Capacity {
        self.capacity
    }
}

static UNITS: Lazy<Vec<Unit>> = Lazy::new(build_unit_table);

static UNITS_BY_NAME: Lazy<HashMap<&'static str, Capacity, RandomState>> = Lazy::new(|| {
    let mut by_name = HashMap::with_hasher(RandomState::new());
    by_name.extend(UNITS.iter().map(|unit| (unit.name, unit.capacity)));
    by_name.insert(BYTE_ALIAS, BYTE);
    by_name
});

fn build_unit_table() -> Vec<Unit> {
    let mut units = vec![Unit::new("bit", BIT), Unit::new("byte", BYTE)];
    for (multiplier, names) in UNIT_CHAINS {
        let mut current = BYTE * multiplier;
        for name in names {
            units.push(Unit::new(name, current));
            current *= multiplier;
        }
    }

    units.sort_by_key(|unit| unit.capacity);
    units
}

/// Returns every known unit, sorted by ascending size.
///
/// # Remarks
///
/// Aliases (`b`) are not listed; each size appears under its canonical name only.
pub fn units() -> &'static [Unit] {
    &UNITS
}

/// Looks up a unit by its exact, case-sensitive name.
///
/// # Arguments
///
/// * `name` - Name of the unit, e.g. `GiB`, `byte` or `b`.
pub fn unit_by_name(name: &str) -> Option<Capacity> {
    UNITS_BY_NAME.get(name).copied()
}
