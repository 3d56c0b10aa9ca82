use std::collections::BTreeSet;

use crate::models::booking::{Booking, BookingSummary};

/// Steps of the return workflow. Transitions are strictly forward; the UI
/// never rewinds a session, it discards it and starts over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReturnStep {
    Lookup,
    ChooseBooking,
    Checklist,
    Completed,
}

/// What a name lookup produced. `Single` asks the page to fetch that
/// booking's detail and skip the chooser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    NoMatch,
    Single(i64),
    Multiple,
}

/// State of one return session: created fresh on entering the flow,
/// discarded on navigation away or completion.
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnFlow {
    step: ReturnStep,
    candidates: Vec<BookingSummary>,
    booking: Option<Booking>,
    checked: BTreeSet<i64>,
}

impl Default for ReturnFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl ReturnFlow {
    pub fn new() -> Self {
        Self {
            step: ReturnStep::Lookup,
            candidates: Vec::new(),
            booking: None,
            checked: BTreeSet::new(),
        }
    }

    pub fn step(&self) -> ReturnStep {
        self.step
    }

    pub fn candidates(&self) -> &[BookingSummary] {
        &self.candidates
    }

    pub fn booking(&self) -> Option<&Booking> {
        self.booking.as_ref()
    }

    /// Applies the result of the name lookup. Zero matches leave the state at
    /// `Lookup`; two or more advance to the chooser; exactly one reports
    /// `Single` so the caller can fetch the detail and go straight to the
    /// checklist. A no-op outside `Lookup`.
    pub fn apply_lookup(&mut self, found: Vec<BookingSummary>) -> LookupOutcome {
        if self.step != ReturnStep::Lookup {
            return LookupOutcome::NoMatch;
        }

        match found.len() {
            0 => LookupOutcome::NoMatch,
            1 => LookupOutcome::Single(found[0].id),
            _ => {
                self.candidates = found;
                self.step = ReturnStep::ChooseBooking;
                LookupOutcome::Multiple
            }
        }
    }

    /// Enters the checklist with a fully-loaded booking, from `Lookup`
    /// (single match) or `ChooseBooking`. Checks start empty.
    pub fn begin_checklist(&mut self, booking: Booking) {
        if !matches!(self.step, ReturnStep::Lookup | ReturnStep::ChooseBooking) {
            return;
        }

        self.booking = Some(booking);
        self.checked.clear();
        self.step = ReturnStep::Checklist;
    }

    pub fn toggle_kit(&mut self, kit_id: i64) {
        if self.step != ReturnStep::Checklist {
            return;
        }

        if !self.checked.remove(&kit_id) {
            self.checked.insert(kit_id);
        }
    }

    pub fn is_checked(&self, kit_id: i64) -> bool {
        self.checked.contains(&kit_id)
    }

    /// All-or-nothing: confirm is possible only when every kit line item is
    /// checked off.
    pub fn can_confirm(&self) -> bool {
        match &self.booking {
            Some(booking) if self.step == ReturnStep::Checklist => {
                self.checked.len() == booking.kits.len()
            }
            _ => false,
        }
    }

    pub fn complete(&mut self) {
        if self.step == ReturnStep::Checklist {
            self.step = ReturnStep::Completed;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::booking::BookingKit;

    fn summary(id: i64, title: &str) -> BookingSummary {
        BookingSummary {
            id,
            project_title: Some(title.to_string()),
            start_time: "2025-08-25 09:00:00".to_string(),
            end_time: "2025-08-25 17:00:00".to_string(),
        }
    }

    fn booking(id: i64, kit_ids: &[i64]) -> Booking {
        Booking {
            id,
            user_id: 1,
            project_title: None,
            start_time: "2025-08-25 09:00:00".to_string(),
            end_time: "2025-08-25 17:00:00".to_string(),
            kits: kit_ids
                .iter()
                .map(|kit_id| BookingKit {
                    id: *kit_id,
                    name: format!("Kit {}", kit_id),
                    quantity: 1,
                })
                .collect(),
        }
    }

    #[test]
    fn zero_matches_stay_at_lookup() {
        let mut flow = ReturnFlow::new();
        assert_eq!(flow.apply_lookup(vec![]), LookupOutcome::NoMatch);
        assert_eq!(flow.step(), ReturnStep::Lookup);
    }

    #[test]
    fn single_match_skips_the_chooser() {
        let mut flow = ReturnFlow::new();
        assert_eq!(
            flow.apply_lookup(vec![summary(7, "Promo")]),
            LookupOutcome::Single(7)
        );
        // no transition yet; the page fetches the detail first
        assert_eq!(flow.step(), ReturnStep::Lookup);

        flow.begin_checklist(booking(7, &[1, 2]));
        assert_eq!(flow.step(), ReturnStep::Checklist);
    }

    #[test]
    fn multiple_matches_go_to_the_chooser() {
        let mut flow = ReturnFlow::new();
        let outcome = flow.apply_lookup(vec![
            summary(1, "A"),
            summary(2, "B"),
            summary(3, "C"),
        ]);

        assert_eq!(outcome, LookupOutcome::Multiple);
        assert_eq!(flow.step(), ReturnStep::ChooseBooking);
        assert_eq!(flow.candidates().len(), 3);
    }

    #[test]
    fn choosing_a_candidate_advances_to_its_checklist() {
        let mut flow = ReturnFlow::new();
        flow.apply_lookup(vec![summary(1, "A"), summary(2, "B"), summary(3, "C")]);

        flow.begin_checklist(booking(2, &[10, 11]));
        assert_eq!(flow.step(), ReturnStep::Checklist);
        assert_eq!(flow.booking().unwrap().id, 2);
    }

    #[test]
    fn confirm_requires_every_kit_checked() {
        let mut flow = ReturnFlow::new();
        flow.begin_checklist(booking(7, &[1, 2, 3]));

        assert!(!flow.can_confirm());

        flow.toggle_kit(1);
        flow.toggle_kit(2);
        assert!(!flow.can_confirm());

        flow.toggle_kit(3);
        assert!(flow.can_confirm());

        flow.toggle_kit(2);
        assert!(!flow.can_confirm());
    }

    #[test]
    fn failed_confirm_keeps_checks_intact() {
        let mut flow = ReturnFlow::new();
        flow.begin_checklist(booking(7, &[1, 2]));
        flow.toggle_kit(1);
        flow.toggle_kit(2);

        // the page only calls complete() after the backend acknowledges
        assert_eq!(flow.step(), ReturnStep::Checklist);
        assert!(flow.is_checked(1) && flow.is_checked(2));
        assert!(flow.can_confirm());
    }

    #[test]
    fn complete_is_terminal() {
        let mut flow = ReturnFlow::new();
        flow.begin_checklist(booking(7, &[1]));
        flow.toggle_kit(1);
        flow.complete();

        assert_eq!(flow.step(), ReturnStep::Completed);

        // no backward transitions
        flow.apply_lookup(vec![summary(9, "Z")]);
        assert_eq!(flow.step(), ReturnStep::Completed);
        flow.begin_checklist(booking(9, &[5]));
        assert_eq!(flow.step(), ReturnStep::Completed);
    }

    #[test]
    fn lookup_is_ignored_mid_checklist() {
        let mut flow = ReturnFlow::new();
        flow.begin_checklist(booking(7, &[1]));

        assert_eq!(flow.apply_lookup(vec![summary(9, "Z")]), LookupOutcome::NoMatch);
        assert_eq!(flow.step(), ReturnStep::Checklist);
    }
}
