/// Status of a single network-backed operation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OpStatus {
    #[default]
    Idle,
    InFlight,
    Failed(String),
}

impl OpStatus {
    pub fn is_busy(&self) -> bool {
        matches!(self, OpStatus::InFlight)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            OpStatus::Failed(e) => Some(e),
            _ => None,
        }
    }
}
