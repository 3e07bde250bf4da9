//! Number formatting for the `id-ID` locale

/// Group digits in threes with `.`, e.g. `25000000` → `25.000.000`
pub fn group_thousands(value: impl Into<u128>) -> String {
    let digits = value.into().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

/// Money with the currency prefix, e.g. `Rp 25.000.000`
pub fn money(prefix: &str, value: impl Into<u128>) -> String {
    format!("{} {}", prefix, group_thousands(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0u64), "0");
        assert_eq!(group_thousands(999u64), "999");
        assert_eq!(group_thousands(1000u64), "1.000");
        assert_eq!(group_thousands(25_000_000u64), "25.000.000");
        assert_eq!(group_thousands(1_234_567u64), "1.234.567");
    }

    #[test]
    fn test_money() {
        assert_eq!(money("Rp", 850_000u64), "Rp 850.000");
    }
}
