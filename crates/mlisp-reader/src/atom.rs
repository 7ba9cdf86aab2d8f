//! Classification of bare atoms into numbers and symbols.
//!
//! Priority order: rational (`n/d`), float (has a decimal point),
//! integer (optional sign and digits), anything else is a symbol.

use mlisp_value::{Error, Result, Value};

/// Classify one atom token.
pub fn classify(token: &str) -> Result<Value> {
    if let Some((numer, denom)) = split_rational(token) {
        let too_long = |_| Error::out_of_range(format!("{token} too long"));
        let numer: i64 = numer.parse().map_err(too_long)?;
        let denom: i64 = denom.parse().map_err(too_long)?;
        return Value::rational(numer, denom);
    }
    if is_float(token) {
        let value = token
            .parse::<f64>()
            .map_err(|_| Error::syntax(format!("invalid float literal {token}")))?;
        if !value.is_finite() {
            return Err(Error::out_of_range(format!("{token} too long")));
        }
        return Ok(Value::Float(value));
    }
    if is_integer(token) {
        return token
            .parse::<i64>()
            .map(Value::Int)
            .map_err(|_| Error::out_of_range(format!("{token} too long")));
    }
    Ok(Value::symbol(token))
}

fn strip_sign(s: &str) -> &str {
    s.strip_prefix(['+', '-']).unwrap_or(s)
}

fn all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// `[+-]?\d+/\d+`
fn split_rational(token: &str) -> Option<(&str, &str)> {
    let (numer, denom) = token.split_once('/')?;
    (all_digits(strip_sign(numer)) && all_digits(denom)).then_some((numer, denom))
}

/// `[+-]?(\d+\.\d*|\.\d+)`
fn is_float(token: &str) -> bool {
    let Some((whole, frac)) = strip_sign(token).split_once('.') else {
        return false;
    };
    let frac_ok = frac.is_empty() || all_digits(frac);
    (all_digits(whole) && frac_ok) || (whole.is_empty() && all_digits(frac))
}

/// `[+-]?\d+`
fn is_integer(token: &str) -> bool {
    all_digits(strip_sign(token))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_order() {
        assert!(matches!(classify("3/6"), Ok(Value::Rational(r)) if r.numer() == 1 && r.denom() == 2));
        assert!(matches!(classify("-1.5"), Ok(Value::Float(f)) if f == -1.5));
        assert!(matches!(classify("1."), Ok(Value::Float(f)) if f == 1.0));
        assert!(matches!(classify(".5"), Ok(Value::Float(f)) if f == 0.5));
        assert!(matches!(classify("+42"), Ok(Value::Int(42))));
        assert!(matches!(classify("-"), Ok(Value::Symbol(_))));
        assert!(matches!(classify("1.2.3"), Ok(Value::Symbol(_))));
        assert!(matches!(classify("a/b"), Ok(Value::Symbol(_))));
    }

    #[test]
    fn literal_failures() {
        assert_eq!(
            classify("99999999999999999999"),
            Err(Error::OutOfRange("99999999999999999999 too long".into()))
        );
        assert!(matches!(classify("1/0"), Err(Error::DivisionByZero(_))));
        let wide = format!("1{}.0", "0".repeat(400));
        assert_eq!(classify(&wide), Err(Error::OutOfRange(format!("{wide} too long"))));
    }
}
