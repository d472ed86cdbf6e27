/// Formats an amount of Rupiah with thousands separators, e.g. `Rp. 1,234,567`.
pub fn format_rupiah(amount: i64) -> String {
    let negative = amount < 0;
    let digits = amount.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 5);
    for (i, ch) in digits.chars().enumerate() {
        if i != 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if negative {
        format!("Rp. -{grouped}")
    } else {
        format!("Rp. {grouped}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_amounts_have_no_separator() {
        assert_eq!(format_rupiah(0), "Rp. 0");
        assert_eq!(format_rupiah(7), "Rp. 7");
        assert_eq!(format_rupiah(999), "Rp. 999");
    }

    #[test]
    fn groups_of_three_from_the_right() {
        assert_eq!(format_rupiah(1_000), "Rp. 1,000");
        assert_eq!(format_rupiah(25_000), "Rp. 25,000");
        assert_eq!(format_rupiah(100_000), "Rp. 100,000");
        assert_eq!(format_rupiah(1_234_567), "Rp. 1,234,567");
        assert_eq!(format_rupiah(50_000_000), "Rp. 50,000,000");
    }

    #[test]
    fn negative_amounts_keep_the_sign_before_groups() {
        assert_eq!(format_rupiah(-1_500), "Rp. -1,500");
    }

    #[test]
    fn grouping_matches_manual_insertion() {
        use proptest::prelude::*;

        proptest!(|(n in 0i64..=i64::MAX)| {
            let formatted = format_rupiah(n);
            let digits_only: String =
                formatted.chars().filter(|c| c.is_ascii_digit()).collect();
            prop_assert_eq!(digits_only, n.to_string());
            // every comma sits exactly 4 positions apart counting from the right
            let body = formatted.trim_start_matches("Rp. ");
            for (i, ch) in body.chars().rev().enumerate() {
                if ch == ',' {
                    prop_assert_eq!(i % 4, 3);
                }
            }
        });
    }
}
