//! Static calculator metadata used to drive input forms.
//!
//! The table is fixed at compile time and read-only for the life of the
//! process. Field names match the serde names of the engine input structs,
//! so a form built from a descriptor produces JSON the engine deserializes
//! directly.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

/// Semantic type tag for a form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Currency,
    Percent,
    Number,
    Select,
}

/// Grouping shown in the calculator index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CalculatorCategory {
    Loans,
    Investments,
    Analysis,
}

/// One input field of a calculator's form schema.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct InputField {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub label: &'static str,
    pub required: bool,
    /// Fixed option strings, only for `Select` fields.
    #[serde(skip_serializing_if = "options_empty")]
    pub options: &'static [&'static str],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<Decimal>,
}

fn options_empty(options: &&'static [&'static str]) -> bool {
    options.is_empty()
}

/// Static metadata describing one calculator.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CalculatorDescriptor {
    pub slug: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub category: CalculatorCategory,
    pub inputs: &'static [InputField],
}

const fn field(
    name: &'static str,
    field_type: FieldType,
    label: &'static str,
    required: bool,
) -> InputField {
    InputField {
        name,
        field_type,
        label,
        required,
        options: &[],
        default_value: None,
    }
}

static CALCULATORS: [CalculatorDescriptor; 6] = [
    CalculatorDescriptor {
        slug: "emi",
        title: "EMI Calculator",
        description: "Calculate monthly loan payments with detailed amortization schedule",
        category: CalculatorCategory::Loans,
        inputs: &[
            field("principal", FieldType::Currency, "Loan Amount", true),
            field("annual_rate", FieldType::Percent, "Annual Interest Rate", true),
            field("tenure_years", FieldType::Number, "Loan Tenure (Years)", true),
            field("prepayment", FieldType::Currency, "Prepayment Amount", false),
            InputField {
                name: "prepayment_type",
                field_type: FieldType::Select,
                label: "Prepayment Type",
                required: false,
                options: &["one-time", "recurring"],
                default_value: None,
            },
        ],
    },
    CalculatorDescriptor {
        slug: "fd",
        title: "Fixed Deposit Calculator",
        description: "Calculate FD maturity amount with compound interest",
        category: CalculatorCategory::Investments,
        inputs: &[
            field("principal", FieldType::Currency, "Deposit Amount", true),
            field("annual_rate", FieldType::Percent, "Annual Interest Rate", true),
            field("tenure_years", FieldType::Number, "Tenure (Years)", true),
            InputField {
                name: "compounding",
                field_type: FieldType::Select,
                label: "Compounding",
                required: true,
                options: &["monthly", "quarterly", "half-yearly", "annual"],
                default_value: None,
            },
        ],
    },
    CalculatorDescriptor {
        slug: "rd",
        title: "Recurring Deposit Calculator",
        description: "Calculate RD maturity with monthly deposits",
        category: CalculatorCategory::Investments,
        inputs: &[
            field("monthly_deposit", FieldType::Currency, "Monthly Deposit", true),
            field("annual_rate", FieldType::Percent, "Annual Interest Rate", true),
            field("tenure_years", FieldType::Number, "Tenure (Years)", true),
        ],
    },
    CalculatorDescriptor {
        slug: "sip",
        title: "SIP Calculator",
        description: "Calculate mutual fund SIP returns and wealth creation",
        category: CalculatorCategory::Investments,
        inputs: &[
            field("monthly_investment", FieldType::Currency, "Monthly Investment", true),
            field("expected_return", FieldType::Percent, "Expected Annual Return", true),
            field("tenure_years", FieldType::Number, "Investment Period (Years)", true),
            field("step_up_percent", FieldType::Percent, "Annual Step-up %", false),
        ],
    },
    CalculatorDescriptor {
        slug: "loan-eligibility",
        title: "Loan Eligibility Calculator",
        description: "Check your maximum loan eligibility based on income",
        category: CalculatorCategory::Loans,
        inputs: &[
            field("monthly_income", FieldType::Currency, "Monthly Net Income", true),
            field("existing_emi", FieldType::Currency, "Existing EMIs", false),
            InputField {
                name: "foir_percent",
                field_type: FieldType::Percent,
                label: "FOIR %",
                required: true,
                options: &[],
                default_value: Some(dec!(40)),
            },
            field("annual_rate", FieldType::Percent, "Interest Rate", true),
            field("tenure_years", FieldType::Number, "Loan Tenure (Years)", true),
        ],
    },
    CalculatorDescriptor {
        slug: "cagr",
        title: "CAGR Calculator",
        description: "Calculate Compound Annual Growth Rate of investments",
        category: CalculatorCategory::Analysis,
        inputs: &[
            field("initial_value", FieldType::Currency, "Initial Investment", true),
            field("final_value", FieldType::Currency, "Final Value", true),
            field("years", FieldType::Number, "Investment Period (Years)", true),
        ],
    },
];

/// Look up a calculator by slug.
pub fn describe(slug: &str) -> Option<&'static CalculatorDescriptor> {
    CALCULATORS.iter().find(|c| c.slug == slug)
}

/// All calculators in registry order.
pub fn list_all() -> &'static [CalculatorDescriptor] {
    &CALCULATORS
}
