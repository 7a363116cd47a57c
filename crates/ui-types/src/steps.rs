/// Progress through a sequence of steps, `current` being zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepProgress {
    current: usize,
    total: usize,
}

impl StepProgress {
    pub fn new(current: usize, total: usize) -> Self {
        Self {
            current: current.min(total.saturating_sub(1)),
            total,
        }
    }

    /// Share of steps reached, counting the current one as done.
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (self.current + 1) as f64 / self.total as f64 * 100.0
    }

    pub fn step_label(&self) -> String {
        if self.total == 0 {
            return "No steps".to_string();
        }
        format!("Step {} of {}", self.current + 1, self.total)
    }

    pub fn percent_label(&self) -> String {
        format!("{}% Complete", self.percent().round())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_for_a_middle_step() {
        let progress = StepProgress::new(1, 3);
        assert_eq!(progress.step_label(), "Step 2 of 3");
        assert_eq!(progress.percent_label(), "67% Complete");
    }

    #[test]
    fn last_step_is_complete() {
        assert_eq!(StepProgress::new(3, 4).percent(), 100.0);
    }

    #[test]
    fn current_past_the_end_is_clamped() {
        assert_eq!(StepProgress::new(9, 4).step_label(), "Step 4 of 4");
    }

    #[test]
    fn empty_sequence_is_zero_percent() {
        let progress = StepProgress::new(0, 0);
        assert_eq!(progress.percent(), 0.0);
        assert_eq!(progress.percent_label(), "0% Complete");
    }
}
