//! Slot arena with an intrusive doubly-linked paint order.
//!
//! The container behind the HUD's surface list. Handles are generational, so
//! a removed surface's id can never alias the slot after reuse. Link surgery
//! on insert/remove/reorder is O(1) and touches only the affected node and
//! its neighbors; every other node's id and links are untouched.

/// Stable handle to an arena slot.
///
/// Survives reorders of any element (including the one it names) and is
/// invalidated only by removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SurfaceId {
    index: u32,
    generation: u32,
}

#[derive(Debug)]
struct Entry<T> {
    value: T,
    prev: Option<u32>,
    next: Option<u32>,
}

#[derive(Debug)]
struct Slot<T> {
    generation: u32,
    entry: Option<Entry<T>>,
}

/// Ordered arena: slot vector + free list + intrusive head/tail links.
///
/// Iteration runs head to tail. For the HUD, head is painted first (visually
/// bottom) and tail last (visually top).
#[derive(Debug)]
pub struct OrderedArena<T> {
    slots: Vec<Slot<T>>,
    free: Vec<u32>,
    head: Option<u32>,
    tail: Option<u32>,
    len: usize,
}

impl<T> Default for OrderedArena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> OrderedArena<T> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn contains(&self, id: SurfaceId) -> bool {
        self.slots
            .get(id.index as usize)
            .is_some_and(|s| s.generation == id.generation && s.entry.is_some())
    }

    pub fn get(&self, id: SurfaceId) -> Option<&T> {
        let slot = self.slots.get(id.index as usize)?;
        if slot.generation != id.generation {
            return None;
        }
        slot.entry.as_ref().map(|e| &e.value)
    }

    pub fn get_mut(&mut self, id: SurfaceId) -> Option<&mut T> {
        let slot = self.slots.get_mut(id.index as usize)?;
        if slot.generation != id.generation {
            return None;
        }
        slot.entry.as_mut().map(|e| &mut e.value)
    }

    /// Insert at the tail (painted last) and return the new element's id.
    pub fn push_back(&mut self, value: T) -> SurfaceId {
        let index = self.alloc(value);
        self.link_tail(index);
        self.len += 1;
        SurfaceId {
            index,
            generation: self.slots[index as usize].generation,
        }
    }

    /// Unlink and drop the slot's entry. The slot's generation bumps, so the
    /// removed id is dead from here on. Neighbors are spliced together;
    /// their ids and relative order are untouched.
    pub fn remove(&mut self, id: SurfaceId) -> Option<T> {
        if !self.contains(id) {
            return None;
        }
        self.unlink(id.index);
        let slot = &mut self.slots[id.index as usize];
        slot.generation = slot.generation.wrapping_add(1);
        let entry = slot.entry.take()?;
        self.free.push(id.index);
        self.len -= 1;
        Some(entry.value)
    }

    /// Relink at the tail. A no-op (other than revalidating the links) when
    /// the element is already the tail. Returns false for stale ids.
    pub fn move_to_tail(&mut self, id: SurfaceId) -> bool {
        if !self.contains(id) {
            return false;
        }
        if self.tail != Some(id.index) {
            self.unlink(id.index);
            self.link_tail(id.index);
        }
        true
    }

    /// Relink at the head. Returns false for stale ids.
    pub fn move_to_head(&mut self, id: SurfaceId) -> bool {
        if !self.contains(id) {
            return false;
        }
        if self.head != Some(id.index) {
            self.unlink(id.index);
            self.link_head(id.index);
        }
        true
    }

    /// Visit live elements head to tail, each exactly once.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            arena: self,
            cursor: self.head,
        }
    }

    fn alloc(&mut self, value: T) -> u32 {
        let entry = Entry {
            value,
            prev: None,
            next: None,
        };
        match self.free.pop() {
            Some(index) => {
                self.slots[index as usize].entry = Some(entry);
                index
            }
            None => {
                self.slots.push(Slot {
                    generation: 0,
                    entry: Some(entry),
                });
                (self.slots.len() - 1) as u32
            }
        }
    }

    fn unlink(&mut self, index: u32) {
        let Some(entry) = self.slots[index as usize].entry.as_mut() else {
            return;
        };
        let prev = entry.prev.take();
        let next = entry.next.take();

        match prev {
            Some(p) => {
                if let Some(e) = self.slots[p as usize].entry.as_mut() {
                    e.next = next;
                }
            }
            None => self.head = next,
        }
        match next {
            Some(n) => {
                if let Some(e) = self.slots[n as usize].entry.as_mut() {
                    e.prev = prev;
                }
            }
            None => self.tail = prev,
        }
    }

    /// Expects `index` to be live and fully unlinked.
    fn link_tail(&mut self, index: u32) {
        let old_tail = self.tail;
        if let Some(entry) = self.slots[index as usize].entry.as_mut() {
            entry.prev = old_tail;
            entry.next = None;
        }
        match old_tail {
            Some(t) => {
                if let Some(e) = self.slots[t as usize].entry.as_mut() {
                    e.next = Some(index);
                }
            }
            None => self.head = Some(index),
        }
        self.tail = Some(index);
    }

    /// Expects `index` to be live and fully unlinked.
    fn link_head(&mut self, index: u32) {
        let old_head = self.head;
        if let Some(entry) = self.slots[index as usize].entry.as_mut() {
            entry.prev = None;
            entry.next = old_head;
        }
        match old_head {
            Some(h) => {
                if let Some(e) = self.slots[h as usize].entry.as_mut() {
                    e.prev = Some(index);
                }
            }
            None => self.tail = Some(index),
        }
        self.head = Some(index);
    }
}

pub struct Iter<'a, T> {
    arena: &'a OrderedArena<T>,
    cursor: Option<u32>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = (SurfaceId, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.cursor?;
        let slot = self.arena.slots.get(index as usize)?;
        let entry = slot.entry.as_ref()?;
        self.cursor = entry.next;
        Some((
            SurfaceId {
                index,
                generation: slot.generation,
            },
            &entry.value,
        ))
    }
}
