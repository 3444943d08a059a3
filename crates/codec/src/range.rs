use decimal::Decimal;
use policy::{FormatPolicy, OverrideLimits};

/// Outcome of a bound check; floor and ceiling are reported separately so
/// callers can tell which limit was crossed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RangeCheck {
    pub floor_ok: bool,
    pub ceiling_ok: bool,
}

impl RangeCheck {
    #[inline]
    pub fn is_ok(self) -> bool {
        self.floor_ok && self.ceiling_ok
    }
}

/// Check a raw value against the policy's bounds. The empty value is always
/// in range; text that is not a decimal never is.
pub fn in_range(raw: &str, policy: &FormatPolicy) -> RangeCheck {
    if raw.is_empty() {
        return RangeCheck {
            floor_ok: true,
            ceiling_ok: true,
        };
    }
    let Ok(value) = Decimal::parse(raw) else {
        log::warn!(target: "numfield.codec", "range check on non-decimal {raw:?}");
        return RangeCheck {
            floor_ok: false,
            ceiling_ok: false,
        };
    };

    let bounds = &policy.bounds;
    let mut check = RangeCheck {
        floor_ok: value >= bounds.minimum,
        ceiling_ok: value <= bounds.maximum,
    };
    match bounds.override_limits {
        Some(OverrideLimits::Ceiling) => check.floor_ok = true,
        Some(OverrideLimits::Floor) => check.ceiling_ok = true,
        Some(OverrideLimits::Ignore) => {
            check.floor_ok = true;
            check.ceiling_ok = true;
        }
        None => {}
    }
    check
}
