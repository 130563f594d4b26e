use std::fmt;

use rust_decimal::Decimal;

/// Currency amount as rendered on the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Money(pub Decimal);

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} UAH", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_always_shows_two_decimals() {
        assert_eq!(Money(Decimal::new(2_500_000, 2)).to_string(), "25000.00 UAH");
        assert_eq!(Money(Decimal::ZERO).to_string(), "0.00 UAH");
        assert_eq!(Money(Decimal::new(15, 1)).to_string(), "1.50 UAH");
    }
}
