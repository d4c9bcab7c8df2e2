//! Numeric conversion for unit values.

/// Value types a [`Units`](super::Units) can be converted from.
///
/// Conversions return `None` when the value has no integer/float reading
/// (non-finite floats, out-of-range integers, unparsable text).
pub trait UnitValue {
    fn to_int(&self) -> Option<i64>;
    fn to_float(&self) -> Option<f64>;
}

macro_rules! int_unit_value {
    ($($t:ty),*) => {
        $(
            impl UnitValue for $t {
                fn to_int(&self) -> Option<i64> {
                    i64::try_from(*self).ok()
                }

                fn to_float(&self) -> Option<f64> {
                    Some(*self as f64)
                }
            }
        )*
    };
}

int_unit_value!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

fn float_to_int(f: f64) -> Option<i64> {
    let t = f.trunc();
    // i64::MAX as f64 rounds up to 2^63, hence the strict bound.
    if t.is_finite() && t >= i64::MIN as f64 && t < i64::MAX as f64 {
        Some(t as i64)
    } else {
        None
    }
}

impl UnitValue for f64 {
    fn to_int(&self) -> Option<i64> {
        float_to_int(*self)
    }

    fn to_float(&self) -> Option<f64> {
        Some(*self)
    }
}

impl UnitValue for f32 {
    fn to_int(&self) -> Option<i64> {
        float_to_int(f64::from(*self))
    }

    fn to_float(&self) -> Option<f64> {
        Some(f64::from(*self))
    }
}

impl UnitValue for str {
    fn to_int(&self) -> Option<i64> {
        let s = self.trim();
        s.parse::<i64>()
            .ok()
            .or_else(|| s.parse::<f64>().ok().and_then(float_to_int))
    }

    fn to_float(&self) -> Option<f64> {
        self.trim().parse::<f64>().ok()
    }
}

impl UnitValue for String {
    fn to_int(&self) -> Option<i64> {
        self.as_str().to_int()
    }

    fn to_float(&self) -> Option<f64> {
        self.as_str().to_float()
    }
}

impl<T: UnitValue + ?Sized> UnitValue for &T {
    fn to_int(&self) -> Option<i64> {
        (**self).to_int()
    }

    fn to_float(&self) -> Option<f64> {
        (**self).to_float()
    }
}
