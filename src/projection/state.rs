//! Running state carried between projection years

use crate::input::InvestmentInput;

/// Unadjusted running position of the investment
#[derive(Debug, Clone)]
pub struct ProjectionState {
    /// Last completed projection year (0 before the first year)
    pub year: u32,

    /// Cumulative nominal value; never inflation-adjusted
    pub value: f64,
}

impl ProjectionState {
    /// Initialize state from the input at projection start
    pub fn from_input(input: &InvestmentInput) -> Self {
        Self {
            year: 0,
            value: input.initial_investment,
        }
    }

    /// Advance one year and return the interest earned in it
    ///
    /// Interest accrues on the value at the start of the year; the
    /// contribution lands at year end and earns nothing until next year.
    pub fn advance_year(&mut self, input: &InvestmentInput) -> f64 {
        let interest = self.value * (input.expected_return / 100.0);
        // Grouping matters for bit-exact output: value + (interest + contribution)
        self.value += interest + input.annual_investment;
        self.year += 1;
        interest
    }

    /// Present-value factor for the current year
    pub fn inflation_multiplier(&self, input: &InvestmentInput) -> f64 {
        if input.adjust_for_inflation {
            (1.0 + input.inflation_rate / 100.0).powf(-(self.year as f64))
        } else {
            1.0
        }
    }
}
