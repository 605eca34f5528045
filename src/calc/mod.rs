//! The metrics core: a pure derivation from the user's current numbers to the
//! burn / ROI / break-even figures everything else displays.

mod input;
mod offer;
mod results;

pub use input::{CalculatorInput, Control, Distribution, FieldDomain};
pub use offer::{
    BOOKING_URL, BREAK_EVEN_HORIZON, HOURLY_RATE, OFFER_INVESTMENT, TIME_RETURNED, WEEKS_PER_MONTH,
};
pub use results::{BreakEven, CalculationResult, calculate};
