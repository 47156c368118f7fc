/// display policy - configure the selection from json block props
use installment_selector::{CommercialOffer, DisplayPolicy};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const OFFER: &str = r#"{
    "Installments": [
        {"Value": 120.0, "InterestRate": 0, "TotalValuePlusInterestRate": 120.0, "NumberOfInstallments": 1, "PaymentSystemName": "Visa"},
        {"Value": 40.0, "InterestRate": 0, "TotalValuePlusInterestRate": 120.0, "NumberOfInstallments": 3, "PaymentSystemName": "Visa"},
        {"Value": 13.21, "InterestRate": 1.99, "TotalValuePlusInterestRate": 132.1, "NumberOfInstallments": 10, "PaymentSystemName": "Visa"},
        {"Value": 20.0, "InterestRate": 0, "TotalValuePlusInterestRate": 120.0, "NumberOfInstallments": 6, "PaymentSystemName": "Mastercard"}
    ]
}"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("installment_selector=debug")),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false).compact())
        .init();

    let offer: CommercialOffer = serde_json::from_str(OFFER)?;

    let policies = [
        r#"{}"#,
        r#"{"installmentsCriteria": "max-quantity-no-interest"}"#,
        r#"{"installmentsCriteria": "max-quantity-no-interest", "installmentOptionsFilter": {"paymentSystemName": "Visa"}}"#,
        r#"{"installmentsCriteria": "first"}"#,
    ];

    for props in policies {
        let policy = DisplayPolicy::from_json(props)?;
        println!("policy: {}", props);

        match policy.view(&offer.installments)? {
            Some(view) => println!("{}\n", view.to_json_pretty()?),
            None => println!("nothing to display\n"),
        }
    }

    Ok(())
}
