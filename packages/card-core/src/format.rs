/// Turns a plain numeric amount into a display string.
#[derive(Clone, Debug, PartialEq)]
pub struct PriceFormat {
    pub currency_symbol: String,

    /// How many units of the incoming amount make one unit of display currency.
    /// `1` shows amounts as-is, `100` treats them as cents.
    pub minor_units_per_major: u32,
}

impl Default for PriceFormat {
    fn default() -> Self {
        Self {
            currency_symbol: "$".to_string(),
            minor_units_per_major: 1,
        }
    }
}

impl PriceFormat {
    pub fn format_price(&self, amount: f64) -> String {
        let major = match self.minor_units_per_major {
            0 | 1 => amount,
            units => amount / f64::from(units),
        };
        // `-0` prints as `-0`; show it as a plain zero.
        let major = if major == 0.0 { 0.0 } else { major };
        format!("{}{major}", self.currency_symbol)
    }
}

/// `1 Color`, `4 Colors`, `0 Colors`.
pub fn pluralize(word: &str, count: u32) -> String {
    match count {
        1 => format!("{count} {word}"),
        _ => format!("{count} {word}s"),
    }
}
