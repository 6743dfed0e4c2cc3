use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;
use rust_decimal_macros::dec;

use crate::error::RetireError;
use crate::types::Rate;
use crate::RetireResult;

/// Compute (1 + r)^n via iterative multiplication (avoids Decimal::powd
/// drift for integer exponents). `rate` is a fraction, not a percentage.
pub fn compound(rate: Rate, n: u32) -> Decimal {
    let mut result = Decimal::ONE;
    let factor = Decimal::ONE + rate;
    for _ in 0..n {
        result *= factor;
    }
    result
}

/// Effective monthly compounding rate for a stated annual percentage rate:
/// (1 + pct/100)^(1/12) - 1.
///
/// The fractional power is undefined for a non-positive base, so an annual
/// rate at or below -100% is rejected before exponentiation rather than
/// left to produce a garbage value.
pub fn monthly_rate(annual_pct: Rate) -> RetireResult<Rate> {
    if annual_pct.is_zero() {
        return Ok(Decimal::ZERO);
    }

    let base = Decimal::ONE + annual_pct / dec!(100);
    if base <= Decimal::ZERO {
        return Err(RetireError::ComputationFault {
            context: format!(
                "annual return of {annual_pct}% gives growth base {base}; (1 + r)^(1/12) is undefined"
            ),
        });
    }

    Ok(base.powd(Decimal::ONE / dec!(12)) - Decimal::ONE)
}
