//! ROM classification and emulator core selection.
//!
//! A file's category is decided by a case-insensitive substring scan of its
//! name, checked in the fixed order `.gbc`, `.gb`, `.sgb`. Matching is
//! containment, not suffix: `Tetris.gbc.bak` still selects the Goomba Color
//! core.

use std::fmt;

/// ROM category detected from a file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RomCategory {
    None,
    Gb,
    Gbc,
    Sgb,
}

impl RomCategory {
    /// Classify a file name.
    ///
    /// `.gbc` is tested before `.gb`, so a name containing `.gbc` can never
    /// classify as plain GB. `.sgb` is safe to test last: it contains
    /// neither of the first two substrings.
    pub fn from_file_name(name: &str) -> Self {
        let lower = name.to_ascii_lowercase();
        if lower.contains(".gbc") {
            RomCategory::Gbc
        } else if lower.contains(".gb") {
            RomCategory::Gb
        } else if lower.contains(".sgb") {
            RomCategory::Sgb
        } else {
            RomCategory::None
        }
    }
}

impl fmt::Display for RomCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RomCategory::None => "NULL",
            RomCategory::Gb => "gb",
            RomCategory::Gbc => "gbc",
            RomCategory::Sgb => "sgb",
        };
        f.write_str(s)
    }
}

/// Emulator core prepended to a classified ROM.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmulatorKind {
    None,
    Goomba,
    GoombaColor,
}

impl EmulatorKind {
    /// Core for a ROM category. GB runs under Goomba; GBC and SGB both run
    /// under Goomba Color.
    pub fn for_category(category: RomCategory) -> Self {
        match category {
            RomCategory::Gb => EmulatorKind::Goomba,
            RomCategory::Gbc | RomCategory::Sgb => EmulatorKind::GoombaColor,
            RomCategory::None => EmulatorKind::None,
        }
    }
}

impl fmt::Display for EmulatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EmulatorKind::None => "NULL",
            EmulatorKind::Goomba => "Goomba",
            EmulatorKind::GoombaColor => "Goomba Color",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_by_extension() {
        assert_eq!(RomCategory::from_file_name("tetris.gb"), RomCategory::Gb);
        assert_eq!(RomCategory::from_file_name("zelda.gbc"), RomCategory::Gbc);
        assert_eq!(RomCategory::from_file_name("kirby.sgb"), RomCategory::Sgb);
        assert_eq!(RomCategory::from_file_name("doom.wad"), RomCategory::None);
        assert_eq!(RomCategory::from_file_name(""), RomCategory::None);
    }

    #[test]
    fn test_classify_is_case_insensitive() {
        assert_eq!(RomCategory::from_file_name("TETRIS.GB"), RomCategory::Gb);
        assert_eq!(RomCategory::from_file_name("Zelda.GbC"), RomCategory::Gbc);
        assert_eq!(RomCategory::from_file_name("Kirby.SGB"), RomCategory::Sgb);
    }

    #[test]
    fn test_gbc_wins_over_gb() {
        // Substring containment, not suffix matching: any .gbc hit takes
        // priority even when .gb would also match.
        assert_eq!(
            RomCategory::from_file_name("game.gbc.bak"),
            RomCategory::Gbc
        );
        assert_eq!(
            RomCategory::from_file_name("game.gbcfoo"),
            RomCategory::Gbc
        );
        assert_eq!(RomCategory::from_file_name("a.gbc.gb"), RomCategory::Gbc);
    }

    #[test]
    fn test_gb_matches_anywhere() {
        assert_eq!(
            RomCategory::from_file_name("backup.gb.old"),
            RomCategory::Gb
        );
    }

    #[test]
    fn test_sgb_does_not_collide_with_gb() {
        // ".sgb" contains neither ".gbc" nor ".gb", so it falls through to
        // the last check.
        assert_eq!(RomCategory::from_file_name("mario.sgb"), RomCategory::Sgb);
    }

    #[test]
    fn test_emulator_selection() {
        assert_eq!(
            EmulatorKind::for_category(RomCategory::Gb),
            EmulatorKind::Goomba
        );
        assert_eq!(
            EmulatorKind::for_category(RomCategory::Gbc),
            EmulatorKind::GoombaColor
        );
        assert_eq!(
            EmulatorKind::for_category(RomCategory::Sgb),
            EmulatorKind::GoombaColor
        );
        assert_eq!(
            EmulatorKind::for_category(RomCategory::None),
            EmulatorKind::None
        );
    }

    #[test]
    fn test_report_strings() {
        assert_eq!(RomCategory::Gbc.to_string(), "gbc");
        assert_eq!(RomCategory::None.to_string(), "NULL");
        assert_eq!(EmulatorKind::Goomba.to_string(), "Goomba");
        assert_eq!(EmulatorKind::GoombaColor.to_string(), "Goomba Color");
    }
}
