//! Substitution bookkeeping for the live roster.

use super::state::{MatchState, MAX_SUBSTITUTIONS};
use crate::error::SubstitutionError;
use crate::models::{MatchEvent, SquadStatus, Team};

/// Who has played and who has been taken off.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubstitutionLedger {
    appeared: Vec<String>,
    withdrawn: Vec<String>,
}

impl SubstitutionLedger {
    /// Everyone starting at kick-off counts as having appeared.
    pub fn from_lineup(team: &Team) -> Self {
        Self { appeared: team.starters().map(|p| p.id.clone()).collect(), withdrawn: Vec::new() }
    }

    /// Ids of every player who held starting status at some point, in order.
    pub fn appearances(&self) -> &[String] {
        &self.appeared
    }

    pub fn withdrawn(&self) -> &[String] {
        &self.withdrawn
    }

    /// Validate and perform one swap. On error nothing is touched.
    pub fn apply(
        &mut self,
        team: &mut Team,
        state: &mut MatchState,
        bench_id: &str,
        on_field_id: &str,
    ) -> Result<MatchEvent, SubstitutionError> {
        if state.substitutions_used >= MAX_SUBSTITUTIONS {
            return Err(SubstitutionError::LimitReached { max: MAX_SUBSTITUTIONS });
        }

        let incoming = team
            .player(bench_id)
            .ok_or_else(|| SubstitutionError::UnknownPlayer { id: bench_id.to_string() })?;
        let outgoing = team
            .player(on_field_id)
            .ok_or_else(|| SubstitutionError::UnknownPlayer { id: on_field_id.to_string() })?;

        if self.withdrawn.iter().any(|id| id == bench_id) {
            return Err(SubstitutionError::AlreadyWithdrawn { id: bench_id.to_string() });
        }
        if incoming.squad_status != SquadStatus::Substitute {
            return Err(SubstitutionError::NotOnBench { id: bench_id.to_string() });
        }
        if !outgoing.is_starting() {
            return Err(SubstitutionError::NotOnField { id: on_field_id.to_string() });
        }

        let event =
            MatchEvent::substitution(state.minute, &team.name, &incoming.name, &outgoing.name);

        if let Some(player) = team.player_mut(bench_id) {
            player.squad_status = SquadStatus::Starting;
        }
        if let Some(player) = team.player_mut(on_field_id) {
            player.squad_status = SquadStatus::Substitute;
        }

        if !self.appeared.iter().any(|id| id == bench_id) {
            self.appeared.push(bench_id.to_string());
        }
        self.withdrawn.push(on_field_id.to_string());
        state.substitutions_used += 1;
        state.events.push(event.clone());
        Ok(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::config::EngineConfig;
    use crate::models::fixtures::demo_squad;
    use crate::models::EventType;

    fn setup() -> (Team, MatchState, SubstitutionLedger) {
        let team = demo_squad("Home", 70);
        let ledger = SubstitutionLedger::from_lineup(&team);
        (team, MatchState::kick_off(&EngineConfig::default()), ledger)
    }

    #[test]
    fn test_swap_statuses_and_log_event() {
        let (mut team, mut state, mut ledger) = setup();
        let event = ledger.apply(&mut team, &mut state, "hom-17", "hom-10").unwrap();

        assert_eq!(event.event_type, EventType::Substitution);
        assert!(team.player("hom-17").unwrap().is_starting());
        assert!(team.player("hom-10").unwrap().is_substitute());
        assert_eq!(team.starter_count(), 11);
        assert_eq!(state.substitutions_used, 1);
        assert_eq!(state.events.len(), 1);
        assert_eq!(ledger.appearances().len(), 12);
    }

    #[test]
    fn test_reserve_cannot_come_on() {
        let (mut team, mut state, mut ledger) = setup();
        let err = ledger.apply(&mut team, &mut state, "hom-19", "hom-06").unwrap_err();
        assert_eq!(err, SubstitutionError::NotOnBench { id: "hom-19".into() });
        assert_eq!(state.substitutions_used, 0);
        assert!(state.events.is_empty());
    }

    #[test]
    fn test_bench_player_cannot_replace_bench_player() {
        let (mut team, mut state, mut ledger) = setup();
        let err = ledger.apply(&mut team, &mut state, "hom-12", "hom-13").unwrap_err();
        assert_eq!(err, SubstitutionError::NotOnField { id: "hom-13".into() });
    }

    #[test]
    fn test_unknown_ids() {
        let (mut team, mut state, mut ledger) = setup();
        let err = ledger.apply(&mut team, &mut state, "nobody", "hom-02").unwrap_err();
        assert!(matches!(err, SubstitutionError::UnknownPlayer { .. }));
        let err = ledger.apply(&mut team, &mut state, "hom-12", "ghost").unwrap_err();
        assert_eq!(err, SubstitutionError::UnknownPlayer { id: "ghost".into() });
    }

    #[test]
    fn test_withdrawn_player_cannot_return() {
        let (mut team, mut state, mut ledger) = setup();
        ledger.apply(&mut team, &mut state, "hom-16", "hom-10").unwrap();
        let err = ledger.apply(&mut team, &mut state, "hom-10", "hom-16").unwrap_err();
        assert_eq!(err, SubstitutionError::AlreadyWithdrawn { id: "hom-10".into() });
        assert_eq!(state.substitutions_used, 1);
    }

    #[test]
    fn test_sixth_substitution_rejected() {
        let (mut team, mut state, mut ledger) = setup();
        let swaps = [
            ("hom-12", "hom-01"),
            ("hom-13", "hom-02"),
            ("hom-14", "hom-03"),
            ("hom-15", "hom-06"),
            ("hom-16", "hom-07"),
        ];
        for (bench, field) in swaps {
            ledger.apply(&mut team, &mut state, bench, field).unwrap();
        }
        let before = team.clone();
        let err = ledger.apply(&mut team, &mut state, "hom-17", "hom-10").unwrap_err();
        assert_eq!(err, SubstitutionError::LimitReached { max: 5 });
        assert_eq!(team, before);
        assert_eq!(state.events.len(), 5);
        assert_eq!(state.substitutions_used, 5);
    }
}
