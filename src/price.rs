//! Brazilian-format price string parsing.
//!
//! Marketplace listings print prices as "R$ 1.299,90", "1.299",
//! "129.90" or plain digit runs depending on the page element scraped.
//! [`parse_price`] normalizes these to a positive float for the
//! scraping collaborator; the evaluation pipeline itself only consumes
//! already-numeric prices.

/// Parse a scraped price string into a positive value.
///
/// Handles the separator conventions seen on Brazilian marketplace
/// pages:
///
/// - `"R$ 1.299,90"` — dot as thousands separator, comma as decimal
/// - `"1299,90"` — comma as decimal
/// - `"1.299"` — dot as thousands separator (more than two digits after it)
/// - `"129.90"` — dot as decimal (two or fewer digits after it)
/// - `"1299"` — whole units
///
/// Currency symbols, spaces and other non-numeric characters are
/// stripped first. Returns `None` for unparseable or non-positive
/// input.
///
/// # Examples
///
/// ```
/// use price_scout::price::parse_price;
///
/// assert_eq!(parse_price("R$ 1.299,90"), Some(1299.90));
/// assert_eq!(parse_price("grátis"), None);
/// ```
pub fn parse_price(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == ',' || *c == '.')
        .collect();
    if cleaned.is_empty() {
        return None;
    }

    let has_comma = cleaned.contains(',');
    let has_dot = cleaned.contains('.');

    let normalized = if has_comma && has_dot {
        // Brazilian long form: dots are thousands, comma is decimal.
        let parts: Vec<&str> = cleaned.split(',').collect();
        if parts.len() != 2 {
            return None;
        }
        format!("{}.{}", parts[0].replace('.', ""), parts[1])
    } else if has_comma {
        cleaned.replace(',', ".")
    } else if has_dot {
        let parts: Vec<&str> = cleaned.split('.').collect();
        if parts.len() == 2 && parts[1].len() > 2 {
            // "1.299" — a thousands separator, not a decimal point.
            cleaned.replace('.', "")
        } else {
            cleaned
        }
    } else {
        cleaned
    };

    let value: f64 = normalized.parse().ok()?;
    (value > 0.0 && value.is_finite()).then_some(value)
}
