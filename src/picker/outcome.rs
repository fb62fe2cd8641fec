/// How a picker session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T, R> {
    /// The user confirmed the highlighted option
    Selected { option: T, index: usize },
    /// The user pressed a cancel key
    Cancelled,
    /// A custom handler returned a result
    Custom(R),
}

impl<T, R> Outcome<T, R> {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Outcome::Cancelled)
    }

    /// Selected option and index, if the user confirmed one
    pub fn selected(&self) -> Option<(&T, usize)> {
        match self {
            Outcome::Selected { option, index } => Some((option, *index)),
            _ => None,
        }
    }
}

/// Result of feeding one key to the picker
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step<R> {
    /// Keep looping
    Continue,
    /// Finish with the highlighted option
    Confirm,
    /// Finish without a selection
    Cancel,
    /// Finish with a custom handler's result
    Custom(R),
}
