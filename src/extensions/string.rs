pub trait NumericSuffix {
    /// Splits off the trailing run of ASCII digits, returning
    /// `(prefix, digits)`. `None` when the value does not end in a digit.
    fn split_numeric_suffix(&self) -> Option<(&str, &str)>;

    /// Adds `step` to the trailing number, keeping its zero padding width.
    /// `A009` stepped by 1 becomes `A010`; `A99` stepped by 1 becomes `A100`.
    fn step_numeric_suffix(&self, step: u64) -> Option<String>;
}

impl NumericSuffix for str {
    fn split_numeric_suffix(&self) -> Option<(&str, &str)> {
        let idx = self
            .char_indices()
            .rev()
            .take_while(|(_, c)| c.is_ascii_digit())
            .last()
            .map(|(i, _)| i)?;
        Some(self.split_at(idx))
    }

    fn step_numeric_suffix(&self, step: u64) -> Option<String> {
        let (prefix, digits) = self.split_numeric_suffix()?;
        let n: u64 = digits.parse().ok()?;
        let next = n.checked_add(step)?;
        Some(format!("{prefix}{next:0width$}", width = digits.len()))
    }
}

impl NumericSuffix for String {
    fn split_numeric_suffix(&self) -> Option<(&str, &str)> {
        self.as_str().split_numeric_suffix()
    }

    fn step_numeric_suffix(&self, step: u64) -> Option<String> {
        self.as_str().step_numeric_suffix(step)
    }
}
