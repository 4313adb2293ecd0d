//! Round lifecycle coordinator.

use tracing::{debug, error, info, warn};

use crate::content::Catalog;
use crate::core::{IdentityId, ParticipantId, RandomSource, RoundRng, RuleConfig};
use crate::error::{ConfigError, LifecycleError, ResourceError};
use crate::locale::{FallbackLocalizer, LocMessage, Localizer};
use crate::naming::{NameGenerator, NameState};
use crate::roles::{assign, RoleRegistry, RoleState};
use crate::selection::{check_preconditions, select_team, SelectionParams, Team};
use crate::summary::{build_summary, SessionDirectory};

use super::{RoundHost, RoundPhase, Signal, SpawnRequest, SpawningContext, StartAttempt};

/// Drives the rule through one round at a time.
///
/// Owns every piece of round state. Handlers are no-ops until
/// [`RoundCoordinator::start_rule`] enables the rule.
pub struct RoundCoordinator<C, R = RoundRng> {
    config: RuleConfig,
    catalog: C,
    rng: R,
    localizer: Box<dyn Localizer>,
    enabled: bool,
    phase: RoundPhase,
    team: Team,
    roles: Vec<RoleState>,
    registry: RoleRegistry,
    names: NameGenerator,
}

impl<C: Catalog, R: RandomSource> RoundCoordinator<C, R> {
    /// Create a disabled coordinator after validating `config`.
    pub fn new(config: RuleConfig, catalog: C, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        let names = NameGenerator::new(config.datasets.clone());

        Ok(Self {
            config,
            catalog,
            rng,
            localizer: Box::new(FallbackLocalizer),
            enabled: false,
            phase: RoundPhase::Idle,
            team: Team::new(),
            roles: Vec::new(),
            registry: RoleRegistry::new(),
            names,
        })
    }

    /// Render briefings and summaries with `localizer`.
    #[must_use]
    pub fn with_localizer(mut self, localizer: Box<dyn Localizer>) -> Self {
        self.localizer = localizer;
        self
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &RuleConfig {
        &self.config
    }

    #[must_use]
    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    #[must_use]
    pub fn rng(&self) -> &R {
        &self.rng
    }

    /// The team selected this round.
    #[must_use]
    pub fn team(&self) -> &Team {
        &self.team
    }

    /// Role state of every team member, in selection order.
    #[must_use]
    pub fn roles(&self) -> &[RoleState] {
        &self.roles
    }

    /// Flavor names drawn so far this round.
    #[must_use]
    pub fn names(&self) -> &NameState {
        self.names.names()
    }

    /// Codewords handed out this round.
    #[must_use]
    pub fn codewords(&self) -> Option<&[String]> {
        self.names.cached_codewords()
    }

    /// Organization name for the round, drawn on first request.
    pub fn organization_name(&mut self) -> Option<&str> {
        self.names.organization_name(&self.catalog, &mut self.rng)
    }

    /// Check whether `identity` holds this rule's role.
    #[must_use]
    pub fn holds_role(&self, identity: IdentityId) -> bool {
        self.registry.holds_role(identity, &self.config.antag_prototype)
    }

    /// Sessions that should hear the team's alert cue.
    #[must_use]
    pub fn alert_recipients(&self) -> Vec<ParticipantId> {
        self.roles
            .iter()
            .filter(|role| self.holds_role(role.identity))
            .map(|role| role.participant)
            .collect()
    }

    // === Rule activation ===

    /// Enable the rule and announce it.
    pub fn start_rule(&mut self, host: &mut dyn RoundHost) {
        self.enabled = true;
        host.announce(&LocMessage::new("rule-nuclear-added-announcement"));
        info!(target: "antag::lifecycle", "Rule started");
    }

    /// Disable the rule and drop any round in progress.
    pub fn end_rule(&mut self) {
        self.enabled = false;
        self.reset();
        info!(target: "antag::lifecycle", "Rule ended");
    }

    /// Clear round state and return to [`RoundPhase::Idle`].
    pub fn reset(&mut self) {
        self.clear_round();
        self.phase = RoundPhase::Idle;
    }

    // === Signal handlers ===

    /// Register the rule's map before maps load.
    ///
    /// A missing map is logged and skipped; the round still proceeds.
    pub fn on_loading_maps(&mut self, maps: &mut Vec<String>) -> Result<(), LifecycleError> {
        if !self.accept(Signal::LoadingMaps, &[RoundPhase::Idle, RoundPhase::RoundEnded])? {
            return Ok(());
        }

        self.clear_round();
        if self.catalog.has_map(&self.config.map) {
            maps.push(self.config.map.clone());
        } else {
            let err = ResourceError::MissingMap(self.config.map.clone());
            error!(target: "antag::lifecycle", error = %err, "Failed getting map for the rule");
        }

        self.phase = RoundPhase::PreRound;
        Ok(())
    }

    /// Cancel the round start if there are not enough ready participants.
    pub fn on_start_attempt(
        &mut self,
        attempt: &mut StartAttempt,
        host: &mut dyn RoundHost,
    ) -> Result<(), LifecycleError> {
        if !self.accept(Signal::StartAttempt, &[RoundPhase::PreRound])? {
            return Ok(());
        }

        let min_players = self.config.sizing.min_players;
        if let Err(failure) = check_preconditions(attempt.ready, attempt.forced, min_players) {
            info!(
                target: "antag::lifecycle",
                ready = attempt.ready,
                forced = attempt.forced,
                reason = %failure,
                "Cancelling round start"
            );
            host.announce(&failure.to_message());
            attempt.cancel();
            self.phase = RoundPhase::Idle;
        }

        Ok(())
    }

    /// Select the team and hand each member to the host for spawning.
    ///
    /// Selection failure does not abort the round: it is logged and the
    /// round continues without a team.
    pub fn on_player_spawning(
        &mut self,
        ctx: &mut dyn SpawningContext,
    ) -> Result<(), LifecycleError> {
        if !self.accept(Signal::PlayerSpawning, &[RoundPhase::PreRound])? {
            return Ok(());
        }
        self.phase = RoundPhase::TeamSelected;

        let Some(prototype) = self
            .catalog
            .antag_prototype(&self.config.antag_prototype)
            .cloned()
        else {
            let err = ResourceError::MissingPrototype(self.config.antag_prototype.clone());
            error!(target: "antag::lifecycle", error = %err, "Cannot assign team roles");
            return Ok(());
        };

        let candidates = ctx.candidates();
        let params = SelectionParams::new(self.config.sizing, &self.config.antag_prototype)
            .forced(ctx.forced());

        let team = match select_team(&candidates, &params, &*ctx, &mut self.rng) {
            Ok(team) => team,
            Err(err) => {
                warn!(
                    target: "antag::lifecycle",
                    error = %err,
                    candidates = candidates.len(),
                    "Team selection failed, round continues without a team"
                );
                return Ok(());
            }
        };

        for pick in team.iter() {
            let leader = team.is_leader(pick.participant);
            ctx.remove_from_pool(pick.participant);

            let mut role = assign(&mut self.registry, pick, &prototype, leader);
            role.character_name = candidates
                .iter()
                .find(|c| c.id == pick.participant)
                .and_then(|c| c.profile.as_ref())
                .and_then(|profile| profile.character_name.clone());
            role.official_name = self.names.official_name(leader, &self.catalog, &mut self.rng);

            ctx.spawn(SpawnRequest {
                participant: pick.participant,
                identity: pick.identity,
                map: self.config.map.clone(),
                name: role.display_name().map(str::to_string),
                starting_gear: role.starting_gear.clone(),
                starting_balance: self.config.starting_balance,
                leader,
            });
            self.roles.push(role);
        }

        info!(
            target: "antag::lifecycle",
            size = team.len(),
            candidates = candidates.len(),
            "Team spawned"
        );
        self.team = team;
        Ok(())
    }

    /// Generate codewords and brief every team member.
    pub fn on_jobs_assigned(&mut self, host: &mut dyn RoundHost) -> Result<(), LifecycleError> {
        if !self.accept(Signal::JobsAssigned, &[RoundPhase::TeamSelected])? {
            return Ok(());
        }

        let codewords = self
            .names
            .codewords(self.config.codeword_count, &self.catalog, &mut self.rng)
            .join(", ");
        let greeting = LocMessage::new("operative-role-greeting");
        let briefing = LocMessage::new("operative-role-codewords").with_arg("codewords", &codewords);
        let briefing_text = self.localizer.localize(&briefing);

        for role in &mut self.roles {
            host.send_to(role.participant, &greeting);
            host.send_to(role.participant, &briefing);
            role.briefing = Some(briefing_text.clone());
        }

        debug!(
            target: "antag::lifecycle",
            members = self.roles.len(),
            "Codewords distributed"
        );
        self.phase = RoundPhase::RoundActive;
        Ok(())
    }

    /// Append the round summary and clear all round state.
    pub fn on_round_end(
        &mut self,
        lines: &mut Vec<String>,
        sessions: &dyn SessionDirectory,
    ) -> Result<(), LifecycleError> {
        let allowed = [
            RoundPhase::PreRound,
            RoundPhase::TeamSelected,
            RoundPhase::RoundActive,
        ];
        if !self.accept(Signal::RoundEnd, &allowed)? {
            return Ok(());
        }

        lines.push(build_summary(&self.roles, sessions, self.localizer.as_ref()));
        self.clear_round();
        self.phase = RoundPhase::RoundEnded;
        Ok(())
    }

    // === Internals ===

    /// `Ok(true)` if the signal should be handled, `Ok(false)` if the rule is
    /// disabled, `Err` if the phase cannot accept it.
    fn accept(&self, signal: Signal, allowed: &[RoundPhase]) -> Result<bool, LifecycleError> {
        if !self.enabled {
            debug!(target: "antag::lifecycle", ?signal, "Rule disabled, ignoring signal");
            return Ok(false);
        }
        if !allowed.contains(&self.phase) {
            return Err(LifecycleError::UnexpectedSignal {
                signal,
                phase: self.phase,
            });
        }
        Ok(true)
    }

    fn clear_round(&mut self) {
        self.team = Team::new();
        self.roles.clear();
        self.registry.clear();
        self.names.clear();
    }
}
