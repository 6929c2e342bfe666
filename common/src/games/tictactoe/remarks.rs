use crate::games::SessionRng;

pub const DEFAULT_REMARKS: &[&str] = &[
    "Calculating infinity...",
    "Nice move, but I've seen better.",
    "I see what you're doing there.",
    "Block!",
    "You can't beat pure logic.",
    "Analyzing outcomes...",
    "Is that your best shot?",
    "Corner strategy? Classic.",
    "My algorithms are tingling.",
    "Processing... Victory imminent.",
    "Oops, did I do that?",
    "Too easy.",
    "I'm thinking 3 moves ahead.",
    "Your defeat is statistically probable.",
];

/// Flavor lines shown next to bot moves. Has no effect on play.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemarkCatalog {
    remarks: Vec<String>,
}

impl RemarkCatalog {
    pub fn new(remarks: Vec<String>) -> Self {
        Self { remarks }
    }

    pub fn remarks(&self) -> &[String] {
        &self.remarks
    }

    pub fn pick(&self, rng: &mut SessionRng) -> String {
        rng.choose(&self.remarks).cloned().unwrap_or_default()
    }
}

impl Default for RemarkCatalog {
    fn default() -> Self {
        Self::new(DEFAULT_REMARKS.iter().map(|r| r.to_string()).collect())
    }
}
