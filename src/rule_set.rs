/// Rules of Conway's Game of Life.
pub const B3S23: RuleSet = RuleSet::new(0b1000, 0b1100);

/// # Representation
/// Life rules are represented as
/// ```notrust
/// |------birth------|
/// 0000_0000_0000_0000_0000_0000_0000_0000
///                     |----survival-----|
/// ```
///
/// Bit `i` of either half is set when a cell with `i` live neighbors is born (or survives).
///
/// ```notrust
/// b3s23:                0000_0000_0000_1000_0000_0000_0000_1100
/// ```
///
/// See: https://conwaylife.com/wiki/Rulestring
#[repr(transparent)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RuleSet {
    rule: u32,
}

impl Default for RuleSet {
    fn default() -> Self {
        B3S23
    }
}

impl RuleSet {
    /// Any bit past the 8th is ignored, a cell never has more than 8 neighbors.
    const fn new(b: u16, s: u16) -> Self {
        let b = b & 0x1FF;
        let s = s & 0x1FF;

        Self {
            rule: (b as u32) << 16 | s as u32,
        }
    }

    pub fn births(&self) -> u16 {
        ((self.rule & 0x1FF0000) >> 0x10) as u16
    }

    pub fn survivals(&self) -> u16 {
        (self.rule & 0x1FF) as u16
    }

    /// Whether a dead cell with `count` live neighbors comes alive
    pub fn is_born(&self, count: u8) -> bool {
        count <= 8 && self.births() & (1 << count) != 0
    }

    /// Whether a living cell with `count` live neighbors stays alive
    pub fn survives(&self, count: u8) -> bool {
        count <= 8 && self.survivals() & (1 << count) != 0
    }

    pub fn next_state(&self, alive: bool, count: u8) -> bool {
        if alive {
            self.survives(count)
        } else {
            self.is_born(count)
        }
    }
}
