// Owned records for ephemeral elements.
//
// An element is spawned, animates, and is removed exactly once: either by
// its explicit completion event or by an `expire` sweep once its duration
// has elapsed. Nothing else keeps a reference to it.

use fnv::FnvHashMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EphemeralId(pub u64);

#[derive(Clone, Debug)]
struct Record<H> {
    handle: H,
    spawned_at_ms: f64,
    duration_ms: f64,
}

impl<H> Record<H> {
    #[inline]
    fn ends_at(&self) -> f64 {
        self.spawned_at_ms + self.duration_ms
    }
}

#[derive(Debug)]
pub struct EphemeralSet<H> {
    live: FnvHashMap<EphemeralId, Record<H>>,
    next_id: u64,
}

impl<H> Default for EphemeralSet<H> {
    fn default() -> Self {
        Self {
            live: FnvHashMap::default(),
            next_id: 0,
        }
    }
}

impl<H> EphemeralSet<H> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn(&mut self, handle: H, now_ms: f64, duration_ms: f64) -> EphemeralId {
        let id = EphemeralId(self.next_id);
        self.next_id += 1;
        self.live.insert(
            id,
            Record {
                handle,
                spawned_at_ms: now_ms,
                duration_ms: duration_ms.max(0.0),
            },
        );
        id
    }

    /// Completion event for `id`; yields the handle the first time only.
    pub fn complete(&mut self, id: EphemeralId) -> Option<H> {
        self.live.remove(&id).map(|r| r.handle)
    }

    /// Remove every record whose animation has finished by `now_ms`, oldest first.
    pub fn expire(&mut self, now_ms: f64) -> Vec<H> {
        let mut done: Vec<EphemeralId> = self
            .live
            .iter()
            .filter(|(_, r)| r.ends_at() <= now_ms)
            .map(|(id, _)| *id)
            .collect();
        done.sort_unstable();
        done.into_iter()
            .filter_map(|id| self.live.remove(&id).map(|r| r.handle))
            .collect()
    }

    /// Take every live handle, oldest first; used on teardown.
    pub fn drain(&mut self) -> Vec<H> {
        let mut all: Vec<(EphemeralId, Record<H>)> = self.live.drain().collect();
        all.sort_unstable_by_key(|(id, _)| *id);
        all.into_iter().map(|(_, r)| r.handle).collect()
    }

    /// Handle of a live record, for attaching state that exists only after spawn.
    pub fn get_mut(&mut self, id: EphemeralId) -> Option<&mut H> {
        self.live.get_mut(&id).map(|r| &mut r.handle)
    }

    pub fn contains(&self, id: EphemeralId) -> bool {
        self.live.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }
}
