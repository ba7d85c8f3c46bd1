//! Year-by-year projection of a recurring investment

use super::records::YearRecord;
use super::state::ProjectionState;
use crate::error::Result;
use crate::input::InvestmentInput;
use log::debug;

/// Project the investment over `input.duration` years
///
/// The running value is always nominal. When the input asks for an inflation
/// adjustment, each emitted record is scaled by `(1 + inflation)^-year`; the
/// scaling never feeds back into the next year's compounding.
///
/// The input is not validated: callers are expected to have checked it
/// already (see [`try_project`]). A zero duration yields an empty projection.
pub fn project(input: &InvestmentInput) -> Vec<YearRecord> {
    let mut state = ProjectionState::from_input(input);
    let real_return_rate = input.real_return_rate();
    let mut records = Vec::with_capacity(input.duration as usize);

    for _year in 1..=input.duration {
        let interest = state.advance_year(input);
        let multiplier = state.inflation_multiplier(input);

        records.push(YearRecord {
            year: state.year,
            interest: interest * multiplier,
            value_end_of_year: state.value * multiplier,
            annual_investment: input.annual_investment * multiplier,
            real_return_rate,
        });
    }

    debug!(
        "projected {:?}: {} years, final nominal value {:.2}",
        input, state.year, state.value
    );

    records
}

/// Validate the input, then project it
///
/// Out-of-range inputs fail with `InvalidInput` instead of producing a
/// meaningless projection.
pub fn try_project(input: &InvestmentInput) -> Result<Vec<YearRecord>> {
    input.validate()?;
    Ok(project(input))
}
