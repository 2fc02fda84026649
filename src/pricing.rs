//! Keeps monthly price, annual price and annual discount consistent while one
//! of them is being edited:
//!
//! `annual = monthly × 12 × (1 − discount / 100)`
//!
//! Each edit stores the new value and recomputes at most one dependent field.
//! Nothing here rejects input; prices are validated when the plan form is
//! submitted.

use crate::models::plan::Plan;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PricingField {
    Monthly,
    Annual,
    Discount,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlanPricing {
    monthly: Option<f64>,
    annual: Option<f64>,
    discount: Option<f64>,
    last_edited: Option<PricingField>,
}

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

fn numeric(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

fn annual_from(monthly: f64, discount: f64) -> f64 {
    round_to(monthly * 12.0 * (1.0 - discount / 100.0), 2)
}

/// Reads a form field. Blank or non-numeric text counts as empty.
pub fn parse_field(input: &str) -> Option<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    numeric(trimmed.parse::<f64>().ok())
}

impl PlanPricing {
    pub fn new(monthly: Option<f64>, annual: Option<f64>, discount: Option<f64>) -> Self {
        Self {
            monthly: numeric(monthly),
            annual: numeric(annual),
            discount: numeric(discount),
            last_edited: None,
        }
    }

    pub fn from_plan(plan: &Plan) -> Self {
        Self::new(
            Some(plan.monthly_price),
            Some(plan.annual_price),
            plan.annual_discount_percent,
        )
    }

    pub fn monthly(&self) -> Option<f64> {
        self.monthly
    }

    pub fn annual(&self) -> Option<f64> {
        self.annual
    }

    pub fn discount(&self) -> Option<f64> {
        self.discount
    }

    pub fn last_edited(&self) -> Option<PricingField> {
        self.last_edited
    }

    /// Recomputes the annual price only when a positive discount is already set.
    pub fn set_monthly(&mut self, value: Option<f64>) {
        let value = numeric(value);
        self.monthly = value;
        self.last_edited = Some(PricingField::Monthly);

        if let (Some(monthly), Some(discount)) = (value, self.discount) {
            if monthly > 0.0 && discount > 0.0 {
                self.annual = Some(annual_from(monthly, discount));
            }
        }
    }

    /// Derives the discount from the two prices. A derived discount that is
    /// not positive clears the field instead of storing it.
    pub fn set_annual(&mut self, value: Option<f64>) {
        let value = numeric(value);
        self.annual = value;
        self.last_edited = Some(PricingField::Annual);

        let (Some(monthly), Some(annual)) = (self.monthly, value) else {
            return;
        };
        if monthly <= 0.0 || annual < 0.0 {
            return;
        }

        let full_price = monthly * 12.0;
        if full_price <= 0.0 {
            return;
        }

        let discount = (1.0 - annual / full_price) * 100.0;
        self.discount = if discount > 0.0 {
            Some(round_to(discount, 1))
        } else {
            None
        };
    }

    pub fn set_discount(&mut self, value: Option<f64>) {
        let value = numeric(value);
        self.discount = value;
        self.last_edited = Some(PricingField::Discount);

        if let (Some(monthly), Some(discount)) = (self.monthly, value) {
            if monthly > 0.0 && discount >= 0.0 {
                self.annual = Some(annual_from(monthly, discount));
            }
        }
    }

    /// Applies raw form input to one field.
    pub fn edit(&mut self, field: PricingField, input: &str) {
        let value = parse_field(input);
        match field {
            PricingField::Monthly => self.set_monthly(value),
            PricingField::Annual => self.set_annual(value),
            PricingField::Discount => self.set_discount(value),
        }
    }

    /// Annual price implied by the monthly price and discount, if any.
    pub fn expected_annual(&self) -> Option<f64> {
        let monthly = self.monthly?;
        Some(annual_from(monthly, self.discount.unwrap_or(0.0)))
    }

    /// Monthly equivalent of the annual price, as shown on plan cards.
    pub fn annual_per_month(&self) -> Option<f64> {
        self.annual.map(|annual| round_to(annual / 12.0, 2))
    }
}
