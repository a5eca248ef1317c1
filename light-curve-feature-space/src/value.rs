use std::iter::FromIterator;

/// Raw output of a feature evaluator: a scalar or an arbitrary nested sequence of scalars
#[derive(Clone, Debug, PartialEq)]
pub enum Value<T> {
    Scalar(T),
    Sequence(Vec<Value<T>>),
}

impl<T> Value<T>
where
    T: Copy,
{
    /// Flat sequence built from scalars
    pub fn flat<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self::Sequence(values.into_iter().map(Self::Scalar).collect())
    }

    /// Number of scalars inside, at any depth
    pub fn len(&self) -> usize {
        match self {
            Self::Scalar(_) => 1,
            Self::Sequence(v) => v.iter().map(Self::len).sum(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Depth-first flattening, appends scalars to `out`
    pub fn flatten_into(&self, out: &mut Vec<T>) {
        match self {
            Self::Scalar(x) => out.push(*x),
            Self::Sequence(v) => v.iter().for_each(|value| value.flatten_into(out)),
        }
    }

    pub fn flatten(&self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.len());
        self.flatten_into(&mut out);
        out
    }
}

impl<T> From<T> for Value<T> {
    fn from(x: T) -> Self {
        Self::Scalar(x)
    }
}

impl<T> FromIterator<Value<T>> for Value<T> {
    fn from_iter<I: IntoIterator<Item = Value<T>>>(iter: I) -> Self {
        Self::Sequence(iter.into_iter().collect())
    }
}

/// Flattens outputs of several evaluators into one linear sequence
pub fn flatten<'a, T, I>(values: I) -> Vec<T>
where
    T: Copy + 'a,
    I: IntoIterator<Item = &'a Value<T>>,
{
    let mut out = vec![];
    for value in values {
        value.flatten_into(&mut out);
    }
    out
}
