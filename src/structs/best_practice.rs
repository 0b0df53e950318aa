use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BestPractice {
    pub name: &'static str,
    pub description: &'static str,
    pub category: &'static str,
}

impl BestPractice {
    pub const fn new(name: &'static str, description: &'static str, category: &'static str) -> Self {
        Self { name, description, category }
    }
}
