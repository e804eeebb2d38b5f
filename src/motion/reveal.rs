//! Staggered reveal timing for animated text blocks.
//!
//! A text block is split into [`RevealUnit`]s (words or characters). A
//! [`Stagger`] maps a unit's position to its millisecond offset, and a
//! [`RevealSchedule`] pins the computed offsets to the units so a block's
//! timing is fixed at mount and survives re-renders untouched. The math
//! here is plain arithmetic on delay parameters; nothing executes the
//! scheduled work, so offsets can be asserted exactly.

/// Timing parameters for one staggered block: the unit at position `i`
/// starts revealing at `base_ms + i * step_ms`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Stagger {
    pub base_ms: u32,
    pub step_ms: u32,
}

impl Stagger {
    pub const fn new(base_ms: u32, step_ms: u32) -> Self {
        Self { base_ms, step_ms }
    }

    /// Offset of the unit at `index`, in milliseconds after the trigger.
    pub fn delay_for(&self, index: usize) -> u32 {
        self.base_ms + index as u32 * self.step_ms
    }

    /// Running time consumed by `unit_count` units, excluding the base.
    pub fn span_ms(&self, unit_count: usize) -> u32 {
        unit_count as u32 * self.step_ms
    }

    /// Offset at which a block of `unit_count` units has finished starting
    /// its last unit.
    pub fn end_ms(&self, unit_count: usize) -> u32 {
        self.base_ms + self.span_ms(unit_count)
    }

    /// Timing for a block that runs after this one: based at this block's
    /// end plus a pause, with its own per-unit step. Chaining this way keeps
    /// consecutive blocks sequential rather than simultaneous.
    pub fn followed_by(&self, unit_count: usize, pause_ms: u32, step_ms: u32) -> Stagger {
        Stagger::new(self.end_ms(unit_count) + pause_ms, step_ms)
    }
}

/// One animatable fragment of a text block. `revealed` flips to true when
/// the owning schedule is triggered and never reverts.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct RevealUnit {
    pub content: String,
    pub order_index: usize,
    pub revealed: bool,
}

impl RevealUnit {
    fn new(content: String, order_index: usize) -> Self {
        Self {
            content,
            order_index,
            revealed: false,
        }
    }
}

/// Splits a text into per-character units. Whitespace characters become
/// units of their own; rendering decides how to display them.
pub fn chars_of(text: &str) -> Vec<RevealUnit> {
    text.chars()
        .enumerate()
        .map(|(i, ch)| RevealUnit::new(ch.to_string(), i))
        .collect()
}

/// Splits a text into per-word units, dropping the whitespace between them.
pub fn words_of(text: &str) -> Vec<RevealUnit> {
    text.split_whitespace()
        .enumerate()
        .map(|(i, word)| RevealUnit::new(word.to_string(), i))
        .collect()
}

/// A block's units plus their precomputed offsets. Delays are fixed at
/// construction; only the trigger state changes afterwards.
#[derive(Clone, PartialEq, Debug)]
pub struct RevealSchedule {
    units: Vec<RevealUnit>,
    delays: Vec<u32>,
    stagger: Stagger,
    triggered: bool,
}

impl RevealSchedule {
    pub fn new(units: Vec<RevealUnit>, stagger: Stagger) -> Self {
        let delays = (0..units.len()).map(|i| stagger.delay_for(i)).collect();
        Self {
            units,
            delays,
            stagger,
            triggered: false,
        }
    }

    /// Marks every unit revealed. Idempotent: a second trigger changes
    /// nothing, and units never revert.
    pub fn trigger(&mut self) {
        if self.triggered {
            return;
        }
        self.triggered = true;
        for unit in &mut self.units {
            unit.revealed = true;
        }
    }

    pub fn is_triggered(&self) -> bool {
        self.triggered
    }

    /// An empty block has nothing to animate and counts as done even
    /// before its trigger condition is met.
    pub fn is_complete(&self) -> bool {
        self.triggered || self.units.is_empty()
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn delays(&self) -> &[u32] {
        &self.delays
    }

    /// Units paired with their reveal offsets, in declared order.
    pub fn iter(&self) -> impl Iterator<Item = (&RevealUnit, u32)> {
        self.units.iter().zip(self.delays.iter().copied())
    }

    /// Offset at which the last unit has started revealing.
    pub fn end_ms(&self) -> u32 {
        self.stagger.end_ms(self.units.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delay_is_base_plus_index_times_step() {
        let stagger = Stagger::new(100, 75);
        assert_eq!(stagger.delay_for(0), 100);
        assert_eq!(stagger.delay_for(1), 175);
        assert_eq!(stagger.delay_for(5), 475);
    }

    #[test]
    fn delays_are_monotonic_in_index() {
        let schedule = RevealSchedule::new(chars_of("kahaani"), Stagger::new(200, 5));
        let delays = schedule.delays();
        for pair in delays.windows(2) {
            assert!(pair[0] <= pair[1]);
            assert!(pair[0] < pair[1], "strictly increasing for nonzero step");
        }
    }

    #[test]
    fn zero_step_gives_equal_delays() {
        let schedule = RevealSchedule::new(chars_of("abc"), Stagger::new(40, 0));
        assert!(schedule.delays().iter().all(|&d| d == 40));
    }

    #[test]
    fn followed_by_offsets_next_block_past_this_one() {
        // Two paragraph blocks: the second starts after the first block's
        // full span plus a fixed pause, with its own step.
        let first = Stagger::new(200, 5);
        let second = first.followed_by(100, 300, 30);
        assert_eq!(second.base_ms, 200 + 100 * 5 + 300);
        assert_eq!(second.step_ms, 30);
        assert_eq!(second.delay_for(0), 1000);
        assert_eq!(second.delay_for(2), 1060);
    }

    #[test]
    fn chained_title_lines_stay_sequential() {
        let line1 = Stagger::new(100, 70);
        let line2 = line1.followed_by(4, 0, 70);
        // Last unit of line one starts strictly before the first of line two.
        assert!(line1.delay_for(3) < line2.delay_for(0));
        assert_eq!(line2.base_ms, line1.end_ms(4));
    }

    #[test]
    fn empty_schedule_completes_immediately() {
        let schedule = RevealSchedule::new(Vec::new(), Stagger::new(100, 75));
        assert!(schedule.is_complete());
        assert!(!schedule.is_triggered());
        assert_eq!(schedule.iter().count(), 0);
        assert_eq!(schedule.end_ms(), 100);
    }

    #[test]
    fn trigger_reveals_every_unit_once() {
        let mut schedule = RevealSchedule::new(words_of("the essence of oudh"), Stagger::new(0, 75));
        assert!(schedule.iter().all(|(unit, _)| !unit.revealed));

        schedule.trigger();
        assert!(schedule.is_triggered());
        assert!(schedule.iter().all(|(unit, _)| unit.revealed));

        // A second trigger is a no-op; units stay revealed.
        schedule.trigger();
        assert!(schedule.iter().all(|(unit, _)| unit.revealed));
    }

    #[test]
    fn delays_survive_trigger_unchanged() {
        let mut schedule = RevealSchedule::new(chars_of("oudh"), Stagger::new(100, 70));
        let before: Vec<u32> = schedule.delays().to_vec();
        schedule.trigger();
        assert_eq!(schedule.delays(), &before[..]);
    }

    #[test]
    fn units_keep_declared_order() {
        let units = words_of("each drop carries a secret");
        let indices: Vec<usize> = units.iter().map(|u| u.order_index).collect();
        assert_eq!(indices, vec![0, 1, 2, 3, 4]);
        assert_eq!(units[1].content, "drop");
    }
}
