use bistro_types::MenuItem;

/// Currency sign appended to every stored price
pub const CURRENCY_SIGN: &str = "₽";

/// Strip any currency signs the admin typed and append exactly one.
/// An empty price stays empty.
pub fn normalize_price(raw: &str) -> String {
    let amount = raw.replace(CURRENCY_SIGN, "");
    let amount = amount.trim();
    if amount.is_empty() {
        return String::new();
    }
    format!("{amount}{CURRENCY_SIGN}")
}

/// Normalize the price of a leaf in place; containers are left alone
pub fn normalize_item_price(item: &mut MenuItem) {
    if item.is_container() {
        return;
    }
    if let Some(price) = item.price.as_mut() {
        *price = normalize_price(price);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1200", "1200₽")]
    #[case("1200₽", "1200₽")]
    #[case(" 1 200 ₽ ", "1 200₽")]
    #[case("₽₽950", "950₽")]
    #[case("", "")]
    #[case(" ₽ ", "")]
    fn test_normalize_price(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(normalize_price(raw), expected);
    }

    #[test]
    fn test_containers_are_not_priced() {
        let mut container = MenuItem::subcategory("Rum", "");
        normalize_item_price(&mut container);
        assert_eq!(container.price, None);

        let mut leaf = MenuItem {
            price: Some("2100".to_string()),
            ..MenuItem::default()
        };
        normalize_item_price(&mut leaf);
        assert_eq!(leaf.price.as_deref(), Some("2100₽"));
    }
}
