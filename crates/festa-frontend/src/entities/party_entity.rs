use chrono::{DateTime, Local};

use crate::data::{self, Category, PartyPick};

/// One message left on the guestbook wall. Lives in memory only; the book
/// empties when the app closes.
#[derive(Debug, Clone)]
pub struct GuestbookEntry {
    pub message: String,
    pub signer: String,
    pub left_at: DateTime<Local>,
}

/// Selections made while walking through the stages. The dish and place are
/// only meaningful while a category is chosen; [`Self::choose_category`]
/// keeps that straight.
#[derive(Debug, Clone, Default)]
pub struct PartyEntity {
    category: Option<usize>,
    pick: Option<PartyPick>,
    pub captured_frame: Option<&'static str>,
    pub guestbook: Vec<GuestbookEntry>,
}

impl PartyEntity {
    /// Switches to the category at `index` and stores the spread drawn for
    /// it. A stale pick from a previous category never survives the switch.
    pub fn choose_category(&mut self, index: usize, pick: Option<PartyPick>) {
        self.category = Some(index);
        self.pick = pick;
    }

    /// Replaces the pick within the currently chosen category.
    pub fn repick(&mut self, pick: Option<PartyPick>) {
        if self.category.is_some() {
            self.pick = pick;
        }
    }

    pub fn category(&self) -> Option<&'static Category> {
        self.category.and_then(data::category)
    }

    pub fn pick(&self) -> Option<PartyPick> {
        self.pick.filter(|_| self.category.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PICK: PartyPick = PartyPick {
        dish: "Sunday roast, gravy mandatory",
        place: "Our own kitchen",
    };

    #[test]
    fn pick_requires_a_chosen_category() {
        let mut party = PartyEntity::default();
        assert!(party.pick().is_none());

        party.repick(Some(PICK));
        assert!(party.pick().is_none(), "repick without a category is a no-op");

        party.choose_category(3, Some(PICK));
        assert_eq!(party.pick(), Some(PICK));
        assert_eq!(party.category().map(|c| c.name), Some("Cozy home cooking"));
    }

    #[test]
    fn switching_category_replaces_the_pick() {
        let mut party = PartyEntity::default();
        party.choose_category(3, Some(PICK));
        party.choose_category(0, None);
        assert!(party.pick().is_none());
    }
}
