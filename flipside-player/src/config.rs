//! Search settings.

/// What the search does when the side to move has no legal placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PassRule {
    /// The branch ends there, counting as lost for the blocked side.
    DeadEnd,
    /// The blocked side passes and the other side moves at the same ply.
    /// If both sides are blocked, the finished position is scored by disc count.
    Continue,
}

impl Default for PassRule {
    fn default() -> Self {
        PassRule::DeadEnd
    }
}

/// How deep and by which rules [`crate::search`] looks ahead.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    /// Number of plies searched, counting the root move. Values below 1
    /// behave like 1.
    pub look_ahead: u32,
    pub pass_rule: PassRule,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            look_ahead: 2,
            pass_rule: PassRule::default(),
        }
    }
}

impl SearchConfig {
    pub fn with_look_ahead(self, look_ahead: u32) -> Self {
        Self { look_ahead, ..self }
    }

    pub fn with_pass_rule(self, pass_rule: PassRule) -> Self {
        Self { pass_rule, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = SearchConfig::default();
        assert_eq!(config.look_ahead, 2);
        assert_eq!(config.pass_rule, PassRule::DeadEnd);
    }

    #[test]
    fn builder_keeps_other_fields() {
        let config = SearchConfig::default()
            .with_pass_rule(PassRule::Continue)
            .with_look_ahead(4);
        assert_eq!(
            config,
            SearchConfig {
                look_ahead: 4,
                pass_rule: PassRule::Continue
            }
        );
    }
}
