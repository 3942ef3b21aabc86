// src/services/catalog.rs

/// The canned Malagasy replies. Ordered, immutable, process-wide. Every
/// successful chat response is drawn from this list.
pub const RESPONSES: &[&str] = &[
    "Salama! Inona no azoko atao ho anao androany?",
    "Tsara ny fanontanianao! Azoko ho tanterahina izany.",
    "Mirary soa aho amin'ny andro ho avy!",
    "Misaotra anao! Mila fanampiana hafa ve ianao?",
    "Eny ary, izaho eto mba hanampy anao.",
    "Tsara ny fiainana, tsy misy olana!",
    "Ahoana ny fiainanao ankehitriny?",
    "Raha misy zavatra hafa ilainao, ampahafantaro ahy fotsiny.",
    "Faly aho mahafantatra anao!",
    "Vonona hanompo anao foana aho.",
];

/// Membership check, used by tests asserting the catalog invariant.
pub fn contains(candidate: &str) -> bool {
    RESPONSES.contains(&candidate)
}
