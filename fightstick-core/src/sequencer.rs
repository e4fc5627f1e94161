//! Command sequencer: holds each scripted step for a number of ticks.

use switch_proto::{Buttons, Hat, Report};

/// What a single step does to the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Action {
    Up,
    Down,
    Left,
    Right,
    A,
    B,
    X,
    Y,
    L,
    R,
    Plus,
    Minus,
    Home,
    /// Explicit rest: resets the whole report to neutral.
    Nothing,
}

impl Action {
    /// Apply this action's single mutation to `report`.
    pub fn apply(self, report: &mut Report) {
        match self {
            Self::Up => report.hat = Hat::Up,
            Self::Down => report.hat = Hat::Down,
            Self::Left => report.hat = Hat::Left,
            Self::Right => report.hat = Hat::Right,
            Self::A => report.buttons |= Buttons::A,
            Self::B => report.buttons |= Buttons::B,
            Self::X => report.buttons |= Buttons::X,
            Self::Y => report.buttons |= Buttons::Y,
            Self::L => report.buttons |= Buttons::L,
            Self::R => report.buttons |= Buttons::R,
            Self::Plus => report.buttons |= Buttons::PLUS,
            Self::Minus => report.buttons |= Buttons::MINUS,
            Self::Home => report.buttons |= Buttons::HOME,
            Self::Nothing => report.clear(),
        }
    }
}

/// One scripted step: an action held for `hold_ticks` ticks past its first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Step {
    pub action: Action,
    pub hold_ticks: u16,
}

impl Step {
    #[must_use]
    pub const fn new(action: Action, hold_ticks: u16) -> Self {
        Self { action, hold_ticks }
    }
}

/// Result of one [`Sequencer::apply`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Progress {
    /// The current step is still being held.
    Holding,
    /// The current step finished on this tick; the next call uses the next step.
    Advanced,
    /// No step was left to apply. The report is untouched.
    Exhausted,
}

/// Walks an immutable step list left to right without wrapping.
///
/// A step with `hold_ticks = k` is applied on `k + 1` consecutive calls: the
/// duration counter counts up to `k` before the index moves on.
#[derive(Debug, Clone)]
pub struct Sequencer<'a> {
    steps: &'a [Step],
    index: usize,
    duration_count: u16,
}

impl<'a> Sequencer<'a> {
    #[must_use]
    pub const fn new(steps: &'a [Step]) -> Self {
        Self {
            steps,
            index: 0,
            duration_count: 0,
        }
    }

    /// The step the next call will apply, if any.
    #[must_use]
    pub fn current(&self) -> Option<&Step> {
        self.steps.get(self.index)
    }

    #[inline]
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.index >= self.steps.len()
    }

    /// Apply the current step to `report` and count one tick against it.
    pub fn apply(&mut self, report: &mut Report) -> Progress {
        let Some(step) = self.steps.get(self.index).copied() else {
            return Progress::Exhausted;
        };

        step.action.apply(report);

        // Compared before counting so `hold_ticks = u16::MAX` still advances.
        if self.duration_count >= step.hold_ticks {
            self.index += 1;
            self.duration_count = 0;
            Progress::Advanced
        } else {
            self.duration_count += 1;
            Progress::Holding
        }
    }

    /// Rewind to the first step.
    pub fn reset(&mut self) {
        self.index = 0;
        self.duration_count = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use switch_proto::{Stick, STICK_MIN};

    fn run(sequencer: &mut Sequencer<'_>, ticks: usize) -> Vec<(Report, Progress)> {
        (0..ticks)
            .map(|_| {
                let mut report = Report::neutral();
                let progress = sequencer.apply(&mut report);
                (report, progress)
            })
            .collect()
    }

    #[test]
    fn test_step_held_for_hold_ticks_plus_one() {
        let steps = [Step::new(Action::Down, 3), Step::new(Action::A, 0)];
        let mut sequencer = Sequencer::new(&steps);

        let out = run(&mut sequencer, 6);
        let hats: Vec<Hat> = out.iter().map(|(r, _)| r.hat).collect();
        assert_eq!(hats[..4], [Hat::Down; 4]);
        assert_eq!(hats[4], Hat::Center);
        assert!(out[4].0.buttons.contains(Buttons::A));

        assert_eq!(out[2].1, Progress::Holding);
        assert_eq!(out[3].1, Progress::Advanced);
        assert_eq!(out[4].1, Progress::Advanced);
        assert_eq!(out[5].1, Progress::Exhausted);
        assert!(out[5].0.is_neutral());
    }

    #[test]
    fn test_longest_hold_still_advances() {
        let steps = [Step::new(Action::A, u16::MAX), Step::new(Action::B, 0)];
        let mut sequencer = Sequencer::new(&steps);

        let held = run(&mut sequencer, usize::from(u16::MAX));
        assert!(held.iter().all(|(_, progress)| *progress == Progress::Holding));
        assert_eq!(sequencer.index(), 0);

        let out = run(&mut sequencer, 3);
        assert!(out[0].0.buttons.contains(Buttons::A));
        assert_eq!(out[0].1, Progress::Advanced);
        assert_eq!(out[1].0.buttons, Buttons::B);
        assert_eq!(out[1].1, Progress::Advanced);
        assert_eq!(out[2].1, Progress::Exhausted);
    }

    #[test]
    fn test_actions_map_to_single_mutation() {
        let cases = [
            (Action::Up, Report { hat: Hat::Up, ..Report::neutral() }),
            (Action::Left, Report { hat: Hat::Left, ..Report::neutral() }),
            (Action::Right, Report { hat: Hat::Right, ..Report::neutral() }),
            (Action::B, Report { buttons: Buttons::B, ..Report::neutral() }),
            (Action::Minus, Report { buttons: Buttons::MINUS, ..Report::neutral() }),
        ];
        for (action, expected) in cases {
            let mut report = Report::neutral();
            action.apply(&mut report);
            assert_eq!(report, expected, "{action:?}");
        }
    }

    #[test]
    fn test_buttons_are_or_ed() {
        let mut report = Report {
            buttons: Buttons::L,
            ..Report::neutral()
        };
        Action::A.apply(&mut report);
        assert_eq!(report.buttons, Buttons::L | Buttons::A);
    }

    #[test]
    fn test_nothing_resets_everything() {
        let mut report = Report {
            buttons: Buttons::A,
            hat: Hat::Down,
            left_stick: Stick::new(STICK_MIN, STICK_MIN),
            ..Report::neutral()
        };
        Action::Nothing.apply(&mut report);
        assert!(report.is_neutral());
    }

    #[test]
    fn test_empty_list_is_exhausted() {
        let mut sequencer = Sequencer::new(&[]);
        assert!(sequencer.is_exhausted());
        assert!(sequencer.current().is_none());

        let mut report = Report::neutral();
        assert_eq!(sequencer.apply(&mut report), Progress::Exhausted);
        assert!(report.is_neutral());
    }

    #[test]
    fn test_reset_rewinds() {
        let steps = [Step::new(Action::B, 0)];
        let mut sequencer = Sequencer::new(&steps);
        let mut report = Report::neutral();
        sequencer.apply(&mut report);
        assert!(sequencer.is_exhausted());

        sequencer.reset();
        assert_eq!(sequencer.index(), 0);
        assert_eq!(sequencer.current(), Some(&steps[0]));
    }
}
