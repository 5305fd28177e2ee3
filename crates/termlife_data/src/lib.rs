//! Built-in pattern tables.
//!
//! Rows use the plaintext convention: `O` is a live cell, `.` a dead one.
//! Row 0 is the top of the pattern and column 0 its left edge, so stamping
//! at a cursor puts the cursor on the pattern's top-left corner.

pub struct PatternData {
    pub name: &'static str,
    /// Key that stamps this pattern in the interactive view.
    pub shortcut: char,
    pub rows: &'static [&'static str],
}

pub const ACORN: PatternData = PatternData {
    name: "Acorn",
    shortcut: 'a',
    rows: &[
        ".O.....", //
        "...O...",
        "OO..OOO",
    ],
};

pub const DIEHARD: PatternData = PatternData {
    name: "Diehard",
    shortcut: 'd',
    rows: &[
        "......O.", //
        "OO......",
        ".O...OOO",
    ],
};

pub const LIGHTWEIGHT_SPACESHIP: PatternData = PatternData {
    name: "Lightweight spaceship",
    shortcut: 'L',
    rows: &[
        ".O..O", //
        "O....",
        "O...O",
        "OOOO.",
    ],
};

pub const GLIDER: PatternData = PatternData {
    name: "Glider",
    shortcut: 'g',
    rows: &[
        ".O.", //
        "..O",
        "OOO",
    ],
};

pub const GOSPER_GLIDER_GUN: PatternData = PatternData {
    name: "Gosper glider gun",
    shortcut: 'G',
    rows: &[
        "........................O...........",
        "......................O.O...........",
        "............OO......OO............OO",
        "...........O...O....OO............OO",
        "OO........O.....O...OO..............",
        "OO........O...O.OO....O.O...........",
        "..........O.....O.......O...........",
        "...........O...O....................",
        "............OO......................",
    ],
};

/// Two lightweight spaceships flying in formation with a tagalong between
/// them. The tagalong dies on its own but rides along at c/2 with the pair.
pub const LWSS_TAGALONG: PatternData = PatternData {
    name: "LWSS tagalong",
    shortcut: 't',
    rows: &[
        ".O..O.....",
        "O.........",
        "O...O.....",
        "OOOO......",
        ".......O..",
        "......O..O",
        ".....O...O",
        "....O.....",
        "....O..OO.",
        "....O.....",
        ".....O...O",
        "......O..O",
        ".......O..",
        "OOOO......",
        "O...O.....",
        "O.........",
        ".O..O.....",
    ],
};

pub const TOAD: PatternData = PatternData {
    name: "Toad",
    shortcut: 'T',
    rows: &[
        ".OOO", //
        "OOO.",
    ],
};

/// Every built-in pattern, in the order the help overlay lists them.
pub const PATTERNS: &[PatternData] = &[
    ACORN,
    DIEHARD,
    LIGHTWEIGHT_SPACESHIP,
    GLIDER,
    GOSPER_GLIDER_GUN,
    LWSS_TAGALONG,
    TOAD,
];
