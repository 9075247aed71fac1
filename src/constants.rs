/// Slices of this many records or fewer become leaves.
pub const DEFAULT_MIN_LEAF_SIZE: usize = 3;
/// Value predicted when a slice's target is split evenly.
pub const TIE_VALUE: u8 = 0;
