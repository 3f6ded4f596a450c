//! Locale-specific money formatting for prices and totals.

/// Currency display rules. Defaults to Brazilian real (`R$ 1.234,50`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyFormat {
    pub symbol: String,
    pub decimal_separator: char,
    pub thousands_separator: char,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self {
            symbol: "R$".to_string(),
            decimal_separator: ',',
            thousands_separator: '.',
        }
    }
}

impl CurrencyFormat {
    /// Formats `amount` rounded to cents, e.g. `R$ 26,00` or `-R$ 1,50`.
    pub fn format(&self, amount: f64) -> String {
        let cents = (amount.abs() * 100.0).round() as u64;
        let units = (cents / 100).to_string();
        let fraction = cents % 100;

        let mut grouped = String::with_capacity(units.len() + units.len() / 3);
        for (i, digit) in units.chars().enumerate() {
            if i > 0 && (units.len() - i) % 3 == 0 {
                grouped.push(self.thousands_separator);
            }
            grouped.push(digit);
        }

        let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
        format!(
            "{}{} {}{}{:02}",
            sign, self.symbol, grouped, self.decimal_separator, fraction
        )
    }
}
