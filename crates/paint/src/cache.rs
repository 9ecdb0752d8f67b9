use boxpaint_tree::BoxId;
use boxpaint_types::Size;
use std::collections::HashMap;

/// Children extents measured during one paint pass, keyed by the parent box.
///
/// Valid only while the tree it was filled from is unchanged; a pass owns
/// one and drops it at the end.
#[derive(Debug, Default, Clone)]
pub struct SizeCache {
    measured: HashMap<BoxId, Size>,
    hits: usize,
}

impl SizeCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&mut self, id: BoxId) -> Option<Size> {
        let found = self.measured.get(&id).copied();
        if found.is_some() {
            self.hits += 1;
        }
        found
    }

    pub fn insert(&mut self, id: BoxId, size: Size) {
        self.measured.insert(id, size);
    }

    pub fn len(&self) -> usize {
        self.measured.len()
    }

    pub fn is_empty(&self) -> bool {
        self.measured.is_empty()
    }

    pub fn hits(&self) -> usize {
        self.hits
    }
}
