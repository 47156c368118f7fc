/// clustering - list the installments of the payment system with most options
use installment_selector::{pick_by_cluster, ClusterField, InstallmentOption};

fn option(count: u32, payment_system: &str) -> installment_selector::Result<InstallmentOption> {
    InstallmentOption::builder()
        .number_of_installments(count)
        .payment_system_name(payment_system)
        .build()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let options = vec![
        option(12, "Mastercard")?,
        option(3, "Visa")?,
        option(1, "Visa")?,
        option(6, "Visa")?,
        option(1, "Mastercard")?,
        option(6, "Mastercard")?,
    ];

    // both clusters hold three options, Mastercard wins with 12x
    let field: ClusterField = "PaymentSystemName".parse()?;
    for option in pick_by_cluster(&options, field)? {
        println!("{} {}x", option.payment_system_name, option.number_of_installments);
    }

    Ok(())
}
