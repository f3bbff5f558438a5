use super::activity_intent::ActivityIntent;

/// Result of a write together with the activity entries it should produce
///
/// The coordinator that owns the transaction decides when the intents are
/// written; producing an outcome never touches the activity table.
#[derive(Debug)]
pub struct ActionOutcome<T> {
    pub value: T,
    pub activities: Vec<ActivityIntent>,
}

impl<T> ActionOutcome<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            activities: Vec::new(),
        }
    }

    pub fn with_activity(mut self, intent: ActivityIntent) -> Self {
        self.activities.push(intent);
        self
    }
}
