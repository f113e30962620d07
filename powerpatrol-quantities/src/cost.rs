use std::fmt::{Debug, Display, Formatter};

use crate::Quantity;

/// Money in the tariff currency (rupees).
pub type Cost = Quantity<0, 0, 1>;

impl Display for Cost {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "₹{:.2}", self.0)
    }
}

impl Debug for Cost {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "₹{:.4}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Cost::from(1143).to_string(), "₹1143.00");
        assert_eq!(Cost::from(20.0 / 30.0).to_string(), "₹0.67");
    }
}
