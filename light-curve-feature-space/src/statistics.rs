use crate::float_trait::Float;
use crate::sorted_vec::SortedVec;

use conv::prelude::*;

pub trait Statistics<T>
where
    T: Float,
{
    fn minimum(&self) -> T;
    fn maximum(&self) -> T;
    fn mean(&self) -> T;
    fn median(&self) -> T;
}

impl<T> Statistics<T> for [T]
where
    T: Float,
{
    fn minimum(&self) -> T {
        *self
            .iter()
            .min_by(|a, b| a.partial_cmp(b).unwrap())
            .unwrap()
    }

    fn maximum(&self) -> T {
        *self
            .iter()
            .max_by(|a, b| a.partial_cmp(b).unwrap())
            .unwrap()
    }

    fn mean(&self) -> T {
        self.iter().copied().sum::<T>() / self.len().value_as::<T>().unwrap()
    }

    fn median(&self) -> T {
        SortedVec::from(self).median()
    }
}
