use crate::installment::InstallmentOption;
use crate::types::FilterCriteria;

/// apply the payment system and quantity filters, preserving input order
///
/// Without criteria every option is returned. The result may be empty.
pub fn apply_filters<'a>(
    options: &'a [InstallmentOption],
    criteria: Option<&FilterCriteria>,
) -> Vec<&'a InstallmentOption> {
    let mut filtered: Vec<&InstallmentOption> = options.iter().collect();

    let Some(criteria) = criteria else {
        return filtered;
    };

    if let Some(name) = criteria.payment_system() {
        filtered.retain(|option| option.payment_system_name == name);
    }

    if let Some(quantity) = criteria.quantity() {
        filtered.retain(|option| option.number_of_installments == quantity);
    }

    filtered
}

#[cfg(test)]
mod tests {
    use super::*;

    fn option(count: u32, payment_system: &str) -> InstallmentOption {
        InstallmentOption::builder()
            .number_of_installments(count)
            .payment_system_name(payment_system)
            .build()
            .unwrap()
    }

    fn counts(options: &[&InstallmentOption]) -> Vec<(u32, String)> {
        options
            .iter()
            .map(|o| (o.number_of_installments, o.payment_system_name.clone()))
            .collect()
    }

    #[test]
    fn test_no_criteria_returns_everything() {
        let options = vec![option(5, "Visa"), option(3, "Visa"), option(5, "Mastercard")];
        let filtered = apply_filters(&options, None);

        assert_eq!(filtered.len(), 3);
        assert!(std::ptr::eq(filtered[0], &options[0]));
        assert!(std::ptr::eq(filtered[2], &options[2]));
    }

    #[test]
    fn test_filters_compose() {
        let options = vec![option(3, "visa"), option(5, "visa"), option(5, "master")];

        let by_name = apply_filters(&options, Some(&FilterCriteria::by_payment_system("visa")));
        assert_eq!(counts(&by_name), vec![(3, "visa".to_string()), (5, "visa".to_string())]);

        let both = FilterCriteria::by_payment_system("visa").with_quantity(5);
        let filtered = apply_filters(&options, Some(&both));
        assert_eq!(counts(&filtered), vec![(5, "visa".to_string())]);
    }

    #[test]
    fn test_quantity_only() {
        let options = vec![option(5, "master"), option(3, "visa"), option(5, "visa")];
        let filtered = apply_filters(&options, Some(&FilterCriteria::by_quantity(5)));

        assert_eq!(counts(&filtered), vec![(5, "master".to_string()), (5, "visa".to_string())]);
    }

    #[test]
    fn test_no_match_is_empty() {
        let options = vec![option(3, "visa")];
        let filtered = apply_filters(&options, Some(&FilterCriteria::by_payment_system("Elo")));

        assert!(filtered.is_empty());
    }

    #[test]
    fn test_unset_predicates_are_ignored() {
        let options = vec![option(3, "visa"), option(10, "master")];
        let criteria = FilterCriteria {
            payment_system_name: Some(String::new()),
            installments_quantity: Some(0),
        };

        assert_eq!(apply_filters(&options, Some(&criteria)).len(), 2);
    }

    #[test]
    fn test_input_untouched() {
        let options = vec![option(10, "visa"), option(3, "visa")];
        let before = options.clone();
        let _ = apply_filters(&options, Some(&FilterCriteria::by_quantity(3)));

        assert_eq!(options, before);
    }
}
