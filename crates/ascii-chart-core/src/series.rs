// File: crates/ascii-chart-core/src/series.rs
// Summary: Series model: ordered samples with optional per-sample labels.

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Series {
    pub samples: Vec<f64>,
    pub labels: Option<Vec<String>>, // element i labels sample i
}

impl Series {
    pub fn new(samples: Vec<f64>) -> Self {
        Self { samples, labels: None }
    }

    pub fn with_labels<S: Into<String>>(mut self, labels: impl IntoIterator<Item = S>) -> Self {
        self.labels = Some(labels.into_iter().map(Into::into).collect());
        self
    }

    pub fn len(&self) -> usize { self.samples.len() }
    pub fn is_empty(&self) -> bool { self.samples.is_empty() }

    /// Labels, treating an empty list the same as none.
    pub fn labels(&self) -> Option<&[String]> {
        self.labels.as_deref().filter(|l| !l.is_empty())
    }

    /// `(min, max)` of the samples, `None` when empty.
    pub fn range(&self) -> Option<(f64, f64)> {
        let first = *self.samples.first()?;
        Some(self.samples.iter().skip(1).fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v))))
    }
}
