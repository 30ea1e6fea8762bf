//! Currency display.

use std::fmt;

/// Dollar amount formatter.
///
/// Whole amounts print without decimals (`$79`), anything else with two
/// (`$49.50`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Money(pub f64);

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let amount = self.0;
        if amount.fract() == 0.0 {
            write!(f, "${amount:.0}")
        } else {
            write!(f, "${amount:.2}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_display() {
        assert_eq!(Money(79.0).to_string(), "$79");
        assert_eq!(Money(129.0).to_string(), "$129");
        assert_eq!(Money(49.5).to_string(), "$49.50");
        assert_eq!(Money(0.0).to_string(), "$0");
    }
}
