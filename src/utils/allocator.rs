use serde::{Deserialize, Serialize};

/// Handle to an actor stored in an [`Arena`]; the generation guards against
/// reuse of a slot after its actor was destroyed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct ActorHandle {
    index: usize,
    generation: u32,
}

impl ActorHandle {
    pub fn new(index: usize, generation: u32) -> Self {
        Self { index, generation }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }
}

#[derive(Debug, Clone)]
struct Slot<T> {
    generation: u32,
    value: Option<T>,
}

/// Actor storage addressed by [`ActorHandle`]. Destroyed slots are reused
/// with a bumped generation so stale handles stop resolving.
#[derive(Debug, Clone)]
pub struct Arena<T> {
    slots: Vec<Slot<T>>,
    vacant: Vec<usize>,
    live: usize,
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Arena<T> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            vacant: Vec::new(),
            live: 0,
        }
    }

    pub fn insert(&mut self, value: T) -> ActorHandle {
        self.live += 1;
        match self.vacant.pop() {
            Some(index) => {
                let slot = &mut self.slots[index];
                slot.value = Some(value);
                ActorHandle::new(index, slot.generation)
            }
            None => {
                self.slots.push(Slot {
                    generation: 0,
                    value: Some(value),
                });
                ActorHandle::new(self.slots.len() - 1, 0)
            }
        }
    }

    pub fn contains(&self, handle: ActorHandle) -> bool {
        self.get(handle).is_some()
    }

    pub fn get(&self, handle: ActorHandle) -> Option<&T> {
        self.slots
            .get(handle.index)
            .filter(|slot| slot.generation == handle.generation)
            .and_then(|slot| slot.value.as_ref())
    }

    pub fn get_mut(&mut self, handle: ActorHandle) -> Option<&mut T> {
        self.slots
            .get_mut(handle.index)
            .filter(|slot| slot.generation == handle.generation)
            .and_then(|slot| slot.value.as_mut())
    }

    /// Borrows the actors behind two different handles at once, in argument
    /// order. `None` when the handles share a slot or either is stale.
    pub fn get2_mut(&mut self, a: ActorHandle, b: ActorHandle) -> Option<(&mut T, &mut T)> {
        if a.index == b.index {
            return None;
        }
        let mut pair = self
            .slots
            .iter_mut()
            .enumerate()
            .filter(|(index, _)| *index == a.index || *index == b.index);

        let (first_index, first) = pair.next()?;
        let (_, second) = pair.next()?;
        let (slot_a, slot_b) = if first_index == a.index {
            (first, second)
        } else {
            (second, first)
        };

        if slot_a.generation != a.generation || slot_b.generation != b.generation {
            return None;
        }
        Some((slot_a.value.as_mut()?, slot_b.value.as_mut()?))
    }

    pub fn remove(&mut self, handle: ActorHandle) -> Option<T> {
        let slot = self
            .slots
            .get_mut(handle.index)
            .filter(|slot| slot.generation == handle.generation)?;
        let value = slot.value.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.vacant.push(handle.index);
        self.live -= 1;
        Some(value)
    }

    pub fn clear(&mut self) {
        for (index, slot) in self.slots.iter_mut().enumerate() {
            if slot.value.take().is_some() {
                slot.generation = slot.generation.wrapping_add(1);
                self.vacant.push(index);
            }
        }
        self.live = 0;
    }

    pub fn iter(&self) -> impl Iterator<Item = (ActorHandle, &T)> + '_ {
        self.slots.iter().enumerate().filter_map(|(index, slot)| {
            let value = slot.value.as_ref()?;
            Some((ActorHandle::new(index, slot.generation), value))
        })
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> + '_ {
        self.slots.iter_mut().filter_map(|slot| slot.value.as_mut())
    }

    /// Handles of every live actor, in slot order.
    pub fn handles(&self) -> Vec<ActorHandle> {
        self.iter().map(|(handle, _)| handle).collect()
    }

    pub fn len(&self) -> usize {
        self.live
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stale_handles_are_rejected_after_removal() {
        let mut arena = Arena::new();
        let first = arena.insert("cue");
        assert_eq!(arena.remove(first), Some("cue"));

        let second = arena.insert("eight");
        assert_eq!(second.index(), first.index());
        assert_ne!(second.generation(), first.generation());
        assert!(arena.get(first).is_none());
        assert_eq!(arena.get(second), Some(&"eight"));
    }

    #[test]
    fn get2_mut_respects_argument_order() {
        let mut arena = Arena::new();
        let a = arena.insert(1);
        let b = arena.insert(2);

        let (x, y) = arena.get2_mut(b, a).expect("distinct handles");
        assert_eq!((*x, *y), (2, 1));
        assert!(arena.get2_mut(a, a).is_none());
    }

    #[test]
    fn clear_invalidates_everything() {
        let mut arena = Arena::new();
        let a = arena.insert(1);
        let b = arena.insert(2);
        arena.clear();

        assert!(arena.is_empty());
        assert_eq!(arena.len(), 0);
        assert!(!arena.contains(a));
        assert!(!arena.contains(b));
        assert_eq!(arena.handles().len(), 0);
    }

    #[test]
    fn stale_handle_cannot_borrow_a_reused_slot_as_a_pair() {
        let mut arena = Arena::new();
        let a = arena.insert(1);
        let b = arena.insert(2);
        arena.remove(b);
        let c = arena.insert(3);

        assert!(arena.get2_mut(a, b).is_none());
        let (x, y) = arena.get2_mut(a, c).expect("both live");
        *x += 10;
        *y += 10;
        assert_eq!(arena.get(a), Some(&11));
        assert_eq!(arena.get(c), Some(&13));
        assert_eq!(arena.len(), 2);
    }
}
