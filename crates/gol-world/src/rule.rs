//! Life-like transition rules in B/S notation.

use gol_core::{Cell, Error, Result};
use std::fmt;
use std::str::FromStr;

/// Birth and survival neighbour counts, one bit per count `0..=8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rule {
    birth: u16,
    survival: u16,
}

impl Rule {
    /// `B3/S23`
    pub const fn conway() -> Self {
        Self {
            birth: 1 << 3,
            survival: (1 << 2) | (1 << 3),
        }
    }

    /// Parse a rule string such as `B3/S23` or `b36/s23`.
    pub fn parse(rule: &str) -> Result<Self> {
        let invalid = || Error::InvalidRule(rule.to_string());

        let (birth, survival) = rule.trim().split_once('/').ok_or_else(invalid)?;
        let birth = birth
            .strip_prefix(&['B', 'b'][..])
            .ok_or_else(invalid)
            .and_then(|digits| parse_counts(digits).ok_or_else(invalid))?;
        let survival = survival
            .strip_prefix(&['S', 's'][..])
            .ok_or_else(invalid)
            .and_then(|digits| parse_counts(digits).ok_or_else(invalid))?;

        Ok(Self { birth, survival })
    }

    pub fn is_birth(&self, neighbors: u8) -> bool {
        neighbors <= 8 && self.birth & (1 << neighbors) != 0
    }

    pub fn is_survival(&self, neighbors: u8) -> bool {
        neighbors <= 8 && self.survival & (1 << neighbors) != 0
    }

    /// State of a cell in the next generation given its live-neighbour count
    pub fn next(&self, cell: Cell, neighbors: u8) -> Cell {
        match cell {
            Cell::Alive => Cell::from(self.is_survival(neighbors)),
            Cell::Dead => Cell::from(self.is_birth(neighbors)),
        }
    }
}

impl Default for Rule {
    fn default() -> Self {
        Self::conway()
    }
}

impl FromStr for Rule {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "B")?;
        write_counts(f, self.birth)?;
        write!(f, "/S")?;
        write_counts(f, self.survival)
    }
}

fn parse_counts(digits: &str) -> Option<u16> {
    digits.chars().try_fold(0u16, |mask, c| match c.to_digit(10) {
        Some(n) if n <= 8 => Some(mask | (1 << n)),
        _ => None,
    })
}

fn write_counts(f: &mut fmt::Formatter<'_>, mask: u16) -> fmt::Result {
    for n in 0..=8 {
        if mask & (1 << n) != 0 {
            write!(f, "{}", n)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conway_transitions() {
        let rule = Rule::conway();

        assert_eq!(rule.next(Cell::Alive, 1), Cell::Dead);
        assert_eq!(rule.next(Cell::Alive, 2), Cell::Alive);
        assert_eq!(rule.next(Cell::Alive, 3), Cell::Alive);
        assert_eq!(rule.next(Cell::Alive, 4), Cell::Dead);

        assert_eq!(rule.next(Cell::Dead, 2), Cell::Dead);
        assert_eq!(rule.next(Cell::Dead, 3), Cell::Alive);
        assert_eq!(rule.next(Cell::Dead, 4), Cell::Dead);
    }

    #[test]
    fn test_parse_conway() {
        let rule = Rule::parse("B3/S23").unwrap();
        assert_eq!(rule, Rule::conway());
        assert_eq!(rule.to_string(), "B3/S23");

        let lower: Rule = "b3/s32".parse().unwrap();
        assert_eq!(lower, Rule::conway());
    }

    #[test]
    fn test_parse_highlife() {
        let rule = Rule::parse("B36/S23").unwrap();
        assert!(rule.is_birth(6));
        assert!(!rule.is_survival(6));
        assert_eq!(rule.to_string(), "B36/S23");
    }

    #[test]
    fn test_parse_empty_counts() {
        let rule = Rule::parse("B2/S").unwrap();
        assert_eq!(rule.next(Cell::Alive, 2), Cell::Dead);
        assert_eq!(rule.next(Cell::Dead, 2), Cell::Alive);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for bad in ["", "B3S23", "3/23", "B3/23", "B9/S23", "B3/S2x", "S23/B3"] {
            assert!(
                matches!(Rule::parse(bad), Err(Error::InvalidRule(_))),
                "{} should be rejected",
                bad
            );
        }
    }
}
