/// quick start - pick the installment option to show for an offer
use installment_selector::{pick_max, pick_max_no_interest, InstallmentOption, Money, Rate};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let options = vec![
        InstallmentOption::builder()
            .number_of_installments(1)
            .value(Money::from_major(300))
            .payment_system_name("Visa")
            .build()?,
        InstallmentOption::builder()
            .number_of_installments(3)
            .value(Money::from_major(100))
            .payment_system_name("Visa")
            .build()?,
        InstallmentOption::builder()
            .number_of_installments(10)
            .value(Money::from_decimal(dec!(33.41)))
            .interest_rate(Rate::new(dec!(1.99)))
            .payment_system_name("Visa")
            .build()?,
    ];

    let max = pick_max(&options, None)?;
    println!("max installments: {}x of {}", max.number_of_installments, max.value);

    let no_interest = pick_max_no_interest(&options, None)?;
    println!(
        "max without interest: {}x of {}",
        no_interest.number_of_installments, no_interest.value
    );

    Ok(())
}
