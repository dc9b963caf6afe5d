//! Fragment storage with stable identities
//!
//! Fragments live in an arena keyed by monotonically assigned ids. Removal
//! marks a slot dead instead of shifting later entries, so an id held across
//! a removal still names the same fragment.

/// Stable identifier for a fragment in a [`FragmentSet`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FragmentId(u32);

impl FragmentId {
    /// Slot index this id was assigned at
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Arena of text fragments with dead-slot removal
///
/// Iteration visits live fragments in id order, which keeps scan order
/// deterministic across reduction passes.
#[derive(Debug, Clone, Default)]
pub struct FragmentSet {
    slots: Vec<Option<String>>,
    live: usize,
}

impl FragmentSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from a sequence of fragment texts, in order
    pub fn from_texts<I>(texts: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut set = Self::new();
        for text in texts {
            set.insert(text);
        }
        set
    }

    /// Insert a fragment, returning its id
    ///
    /// Ids are assigned in insertion order and never reused.
    pub fn insert(&mut self, text: String) -> FragmentId {
        let id = FragmentId(self.slots.len() as u32);
        self.slots.push(Some(text));
        self.live += 1;
        id
    }

    /// Text of a live fragment, or `None` if the slot is dead
    pub fn get(&self, id: FragmentId) -> Option<&str> {
        self.slots.get(id.index())?.as_deref()
    }

    /// Remove a fragment, returning its text
    ///
    /// The slot stays dead; other ids are unaffected.
    pub fn remove(&mut self, id: FragmentId) -> Option<String> {
        let text = self.slots.get_mut(id.index())?.take()?;
        self.live -= 1;
        Some(text)
    }

    /// Replace the text of a live fragment, returning the old text
    ///
    /// The fragment keeps its id and its position in iteration order.
    pub fn replace(&mut self, id: FragmentId, text: String) -> Option<String> {
        let slot = self.slots.get_mut(id.index())?;
        slot.as_ref()?;
        slot.replace(text)
    }

    /// Number of live fragments
    pub fn live_len(&self) -> usize {
        self.live
    }

    /// Whether no live fragments remain
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Iterate over live fragments in id order
    pub fn iter(&self) -> impl Iterator<Item = (FragmentId, &str)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_deref().map(|text| (FragmentId(i as u32), text)))
    }

    /// Consume the set, returning the sole live fragment if exactly one remains
    pub fn into_single(self) -> Option<String> {
        if self.live != 1 {
            return None;
        }
        self.slots.into_iter().flatten().next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set_of(texts: &[&str]) -> FragmentSet {
        FragmentSet::from_texts(texts.iter().map(|t| t.to_string()))
    }

    #[test]
    fn test_insert_assigns_sequential_ids() {
        let mut set = FragmentSet::new();
        let a = set.insert("a".to_string());
        let b = set.insert("b".to_string());
        assert_eq!(a.index(), 0);
        assert_eq!(b.index(), 1);
        assert_eq!(set.live_len(), 2);
    }

    #[test]
    fn test_remove_keeps_other_ids_stable() {
        let mut set = set_of(&["a", "b", "c"]);
        let ids: Vec<FragmentId> = set.iter().map(|(id, _)| id).collect();
        assert_eq!(set.remove(ids[1]), Some("b".to_string()));
        assert_eq!(set.get(ids[0]), Some("a"));
        assert_eq!(set.get(ids[1]), None);
        assert_eq!(set.get(ids[2]), Some("c"));
        assert_eq!(set.live_len(), 2);
    }

    #[test]
    fn test_remove_dead_slot_is_none() {
        let mut set = set_of(&["a"]);
        let id = set.iter().next().map(|(id, _)| id).unwrap();
        assert!(set.remove(id).is_some());
        assert!(set.remove(id).is_none());
        assert!(set.is_empty());
    }

    #[test]
    fn test_replace_keeps_id_and_order() {
        let mut set = set_of(&["a", "b"]);
        let first = set.iter().next().map(|(id, _)| id).unwrap();
        assert_eq!(set.replace(first, "abc".to_string()), Some("a".to_string()));
        let texts: Vec<&str> = set.iter().map(|(_, t)| t).collect();
        assert_eq!(texts, vec!["abc", "b"]);
    }

    #[test]
    fn test_replace_dead_slot_is_none() {
        let mut set = set_of(&["a"]);
        let id = set.iter().next().map(|(id, _)| id).unwrap();
        set.remove(id);
        assert_eq!(set.replace(id, "x".to_string()), None);
    }

    #[test]
    fn test_iter_skips_dead_slots_in_id_order() {
        let mut set = set_of(&["a", "b", "c", "d"]);
        let ids: Vec<FragmentId> = set.iter().map(|(id, _)| id).collect();
        set.remove(ids[0]);
        set.remove(ids[2]);
        let texts: Vec<&str> = set.iter().map(|(_, t)| t).collect();
        assert_eq!(texts, vec!["b", "d"]);
    }

    #[test]
    fn test_into_single() {
        let set = set_of(&["only"]);
        assert_eq!(set.into_single(), Some("only".to_string()));

        let set = set_of(&["a", "b"]);
        assert_eq!(set.into_single(), None);

        assert_eq!(FragmentSet::new().into_single(), None);
    }
}
