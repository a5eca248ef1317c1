use crate::float_trait::Float;

use conv::prelude::*;
use std::ops::Deref;

/// Ascending sorted copy of a sample, the source of order statistics
#[derive(Clone, Debug)]
pub struct SortedVec<T>(Vec<T>);

impl<T> SortedVec<T>
where
    T: Float,
{
    pub fn maximum(&self) -> T {
        self[self.len() - 1]
    }

    pub fn minimum(&self) -> T {
        self[0]
    }

    pub fn median(&self) -> T {
        assert_ne!(self.len(), 0);
        let i = (self.len() - 1) / 2;
        if self.len() % 2 == 0 {
            T::half() * (self[i] + self[i + 1])
        } else {
            self[i]
        }
    }

    // R-5 from https://en.wikipedia.org/wiki/Quantile
    pub fn ppf(&self, q: f32) -> T {
        assert_ne!(self.len(), 0);
        assert!(
            (0.0..=1.0).contains(&q),
            "quantile should be between zero and unity"
        );
        let h = (self.len() as f32) * q - 0.5;
        let h_floor = h.floor();
        if h_floor < 0.0 {
            self.minimum()
        } else {
            let i = h_floor as usize;
            if i >= self.len() - 1 {
                self.maximum()
            } else {
                self[i] + (h - h_floor).value_as::<T>().unwrap() * (self[i + 1] - self[i])
            }
        }
    }
}

impl<T> From<Vec<T>> for SortedVec<T>
where
    T: Float,
{
    fn from(mut v: Vec<T>) -> Self {
        v[..].sort_unstable_by(|a, b| a.partial_cmp(b).unwrap());
        Self(v)
    }
}

impl<T> From<&[T]> for SortedVec<T>
where
    T: Float,
{
    fn from(s: &[T]) -> Self {
        s.to_vec().into()
    }
}

impl<T> Deref for SortedVec<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[allow(clippy::float_cmp)]
#[cfg(test)]
mod tests {
    use super::*;

    use crate::tests::all_close;

    #[test]
    fn median_odd_and_even() {
        let odd: SortedVec<f64> = vec![3.0, 1.0, 2.0].into();
        assert_eq!(odd.median(), 2.0);
        let even: SortedVec<f64> = vec![4.0, 1.0, 3.0, 2.0].into();
        assert_eq!(even.median(), 2.5);
    }

    #[test]
    fn median_is_ppf_half() {
        for i in 0..10 {
            let a: SortedVec<f64> = (0..100 + i)
                .map(|_| rand::random())
                .collect::<Vec<_>>()
                .into();
            all_close(&[a.median()], &[a.ppf(0.5)], 1e-12);
        }
    }

    #[test]
    fn extremes_are_ppf_zero_and_unity() {
        let a: SortedVec<f32> = (0..101)
            .map(|_| rand::random())
            .collect::<Vec<_>>()
            .into();
        assert_eq!(a.minimum(), a.ppf(0.0));
        assert_eq!(a.maximum(), a.ppf(1.0));
    }

    #[test]
    fn ppf_tenths() {
        let a: SortedVec<f64> = (0..11).map(|i| i as f64 / 10.0).collect::<Vec<_>>().into();
        let actual: Vec<_> = (0..11).map(|i| a.ppf(i as f32 / 10.0)).collect();
        // from scipy.stats.mstats import mquantiles
        // mquantiles(np.linspace(0, 1, 11), prob=np.linspace(0, 1, 11), alphap=0.5, betap=0.5)
        let desired = [0., 0.06, 0.17, 0.28, 0.39, 0.5, 0.61, 0.72, 0.83, 0.94, 1.];
        all_close(&actual, &desired, 1e-6);
    }
}
