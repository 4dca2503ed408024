/// Values that can be read as a boolean condition.
pub trait Truthy {
    fn is_truthy(&self) -> bool;
}

impl Truthy for bool {
    fn is_truthy(&self) -> bool {
        *self
    }
}

macro_rules! truthy_int {
    ($($ty:ty),*) => {
        $(impl Truthy for $ty {
            fn is_truthy(&self) -> bool {
                *self != 0
            }
        })*
    };
}

truthy_int!(i8, i16, i32, i64, u8, u16, u32, u64, usize, isize);

// NaN compares unequal to zero and therefore counts as true.
impl Truthy for f32 {
    fn is_truthy(&self) -> bool {
        *self != 0.0
    }
}

impl Truthy for f64 {
    fn is_truthy(&self) -> bool {
        *self != 0.0
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

/// Inclusive `[start, end]` index ranges of the contiguous truthy runs in
/// `values`.
///
/// A run is only reported once a falsy value closes it: a run still open at
/// the end of the input is dropped, so `[0, 1, 1]` yields no groups. Callers
/// that need the trailing run should append a falsy terminator.
pub fn group_runs<I>(values: I) -> Vec<[usize; 2]>
where
    I: IntoIterator,
    I::Item: Truthy,
{
    let mut groups = Vec::new();
    let mut start = None;
    for (idx, value) in values.into_iter().enumerate() {
        match (start, value.is_truthy()) {
            (Some(s), false) => {
                groups.push([s, idx - 1]);
                start = None;
            }
            (None, true) => start = Some(idx),
            _ => {}
        }
    }
    groups
}
