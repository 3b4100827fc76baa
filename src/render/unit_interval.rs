use num_traits::{Num, NumCast};

#[derive(Debug)]
pub struct UnitInterval {
    value: f64,
}

impl UnitInterval {
    pub fn new_linear<V, M>(value: V, max_value: M) -> Self
    where
        V: Num + NumCast,
        M: Num + NumCast,
    {
        assert!(!max_value.is_zero());

        let v = value.to_f64().unwrap() / max_value.to_f64().unwrap();
        UnitInterval { value: v }
    }

    /// Scale onto 0..=max_value, rounded to the nearest step.
    pub fn scale<M, R>(&self, max_value: M) -> R
    where
        M: Num + NumCast,
        R: Num + NumCast,
    {
        R::from((self.value * max_value.to_f64().unwrap()).round()).unwrap()
    }
}

pub trait NumUnitIntervalExt {
    fn to_unit<M>(&self, max_value: M) -> UnitInterval
    where
        M: Num + NumCast;
}

impl<T> NumUnitIntervalExt for T
where
    T: Num + NumCast + Clone,
{
    fn to_unit<M>(&self, max_value: M) -> UnitInterval
    where
        M: Num + NumCast,
    {
        UnitInterval::new_linear(self.clone(), max_value)
    }
}
