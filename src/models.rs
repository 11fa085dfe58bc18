#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputRow {
    pub name: String,
    pub username: String,
}

/// Accepted-submission counts for one user, in upstream index order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SolveCounts {
    pub total: u64,
    pub easy: u64,
    pub medium: u64,
    pub hard: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatRecord {
    pub name: String,
    pub username: String,
    pub total: u64,
    pub easy: u64,
    pub medium: u64,
    pub hard: u64,
}

impl StatRecord {
    pub fn new(name: String, username: String, counts: SolveCounts) -> Self {
        Self {
            name,
            username,
            total: counts.total,
            easy: counts.easy,
            medium: counts.medium,
            hard: counts.hard,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnresolvedRow {
    pub name: String,
    pub username: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outcome {
    pub resolved: Vec<StatRecord>,
    pub unresolved: Vec<UnresolvedRow>,
}

impl Outcome {
    pub fn len(&self) -> usize {
        self.resolved.len() + self.unresolved.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
