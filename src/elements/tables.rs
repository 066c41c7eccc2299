//! Static element tables, one per product line
//!
//! Pressures are in millibar; evacuation times are negative seconds. An
//! element that has to be drained below ambient carries a pressure of 0.

/// One letter of a product line's alphabet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementSpec {
    pub letter: char,
    pub pressure_mbar: u32,
    pub evacuation_secs: i32,
}

const fn element(letter: char, pressure_mbar: u32, evacuation_secs: i32) -> ElementSpec {
    ElementSpec {
        letter,
        pressure_mbar,
        evacuation_secs,
    }
}

/// Liegesimulator stamps
pub const LIEGESIMULATOR: &[ElementSpec] = &[
    element('W', 0, -40),
    element('T', 0, -25),
    element('S', 12, 0),
    element('L', 16, 0),
    element('K', 22, 0),
    element('B', 30, 0),
];

/// Liegesimulator 2.0 roles
pub const LIEGESIMULATOR_2: &[ElementSpec] = &[
    element('W', 0, -35),
    element('T', 0, -20),
    element('S', 14, 0),
    element('L', 18, 0),
    element('K', 24, 0),
    element('B', 32, 0),
];

/// Ergonometer NL roles
pub const ERGONOMETER_NL: &[ElementSpec] = &[
    element('T', 0, -18),
    element('D', 10, 0),
    element('L', 15, 0),
    element('K', 20, 0),
    element('B', 26, 0),
    element('H', 34, 0),
];

/// Ergo4 roles
pub const ERGO4: &[ElementSpec] = &[
    element('W', 0, -30),
    element('M', 12, 0),
    element('L', 18, 0),
    element('F', 26, 0),
];

// Orthonometer bars
pub const ORTHONOMETER: &[ElementSpec] = &[
    element('A', 0, -45),
    element('B', 0, -30),
    element('C', 10, 0),
    element('D', 20, 0),
    element('E', 30, 0),
];

/// SF contact roles
pub const SF_CONTACT: &[ElementSpec] = &[
    element('T', 0, -22),
    element('S', 11, 0),
    element('L', 17, 0),
    element('K', 23, 0),
    element('B', 29, 0),
];
