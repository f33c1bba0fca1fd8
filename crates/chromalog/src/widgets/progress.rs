//! Static progress bars.

/// A progress bar description, rendered on demand for a given value.
///
/// # Example
///
/// ```rust
/// use chromalog::ProgressBar;
///
/// let bar = ProgressBar::new(10).width(10);
/// assert_eq!(bar.render(5.0), "│█████░░░░░│ 50% (5/10)");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressBar {
    pub min: f64,
    pub max: f64,
    pub width: usize,
    pub fill: char,
    pub remain: char,
    pub bracket_start: String,
    pub bracket_end: String,
    pub show_percentage: bool,
}

impl Default for ProgressBar {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 100.0,
            width: 30,
            fill: '█',
            remain: '░',
            bracket_start: "│".to_string(),
            bracket_end: "│".to_string(),
            show_percentage: true,
        }
    }
}

impl ProgressBar {
    /// A bar from 0 to `total`.
    pub fn new(total: impl Into<f64>) -> Self {
        Self {
            max: total.into(),
            ..Self::default()
        }
    }

    pub fn range(mut self, min: f64, max: f64) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    pub fn width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    pub fn chars(mut self, fill: char, remain: char) -> Self {
        self.fill = fill;
        self.remain = remain;
        self
    }

    pub fn brackets(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.bracket_start = start.into();
        self.bracket_end = end.into();
        self
    }

    pub fn show_percentage(mut self, show: bool) -> Self {
        self.show_percentage = show;
        self
    }

    /// Fraction complete for `current`, clamped to `[0, 1]`.
    ///
    /// An empty or NaN range is always complete.
    pub fn ratio(&self, current: f64) -> f64 {
        let max = self.upper();
        let range = max - self.min;
        if range > 0.0 {
            (self.bound(current) - self.min) / range
        } else {
            1.0
        }
    }

    pub fn render(&self, current: f64) -> String {
        let max = self.upper();
        let current = self.bound(current);
        let ratio = self.ratio(current);

        let filled = ((self.width as f64) * ratio).round() as usize;
        let filled = filled.min(self.width);
        let bar = format!(
            "{}{}{}{}",
            self.bracket_start,
            self.fill.to_string().repeat(filled),
            self.remain.to_string().repeat(self.width - filled),
            self.bracket_end
        );

        if self.show_percentage {
            let percent = (ratio * 100.0).round();
            format!(
                "{} {}% ({}/{})",
                bar,
                percent,
                crate::value::float_to_string(current),
                crate::value::float_to_string(max)
            )
        } else {
            bar
        }
    }

    fn upper(&self) -> f64 {
        self.max.max(self.min)
    }

    // f64::max/min skip a NaN operand, where clamp would panic on a NaN bound.
    fn bound(&self, current: f64) -> f64 {
        current.max(self.min).min(self.upper())
    }
}
