// src/services/picker.rs
use rand::seq::SliceRandom;

/// Selection strategy for canned replies. Pluggable so tests can swap in a
/// deterministic picker; production uses [`RandomPicker`].
pub trait ResponsePicker: Send + Sync {
    fn pick(&self, catalog: &[&'static str]) -> &'static str;
}

/// Uniform random selection. Seedless; selection never depends on the
/// inbound message.
#[derive(Debug, Default)]
pub struct RandomPicker;

impl ResponsePicker for RandomPicker {
    fn pick(&self, catalog: &[&'static str]) -> &'static str {
        catalog
            .choose(&mut rand::thread_rng())
            .copied()
            .unwrap_or_default()
    }
}

/// Always returns the entry at a fixed index. Test double.
#[derive(Debug)]
pub struct FixedPicker(pub usize);

impl ResponsePicker for FixedPicker {
    fn pick(&self, catalog: &[&'static str]) -> &'static str {
        catalog.get(self.0).copied().unwrap_or_default()
    }
}
