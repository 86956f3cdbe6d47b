use crate::notestore::NoteStore;

/// Notes every fresh page starts with, in insertion order.
pub const SEED_NOTES: [&str; 3] = ["운동\n스트레칭\n유산소\n런지\n스쿼트", "요리", "공부"];

/// Add [`SEED_NOTES`] to the store.
///
/// On an empty store this yields ids 1, 2 and 3, listed as 3, 2, 1.
pub fn populate_seed_data(store: &mut dyn NoteStore) {
    for content in SEED_NOTES {
        store.add(content.to_owned());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{InMemoryStore, NoteID};

    #[test]
    fn seed_order() {
        let mut store = InMemoryStore::new();
        populate_seed_data(&mut store);
        let ids: Vec<u64> = store.notes().iter().map(|n| n.get_id().get()).collect();
        assert_eq!(ids, vec![3, 2, 1]);
        assert_eq!(
            store.find_by_id(NoteID::new(1)).unwrap().get_content(),
            SEED_NOTES[0]
        );
        assert_eq!(store.notes()[0].get_content(), "공부");
    }
}
