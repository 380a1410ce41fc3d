//! Apply context shared by all action handlers
//!
//! A handler runs in two steps. The validate step only sees the token
//! database through a shared reference and returns a commit plan; the commit
//! step is the only place that receives `&mut dyn TokenDb`. A rejected action
//! therefore never reaches a mutating call.

use chrono::{DateTime, Utc};
use tracing::{debug, error, info, trace, warn};

use evt_core::logging::LogLevel;
use evt_core::{
    AuthorizationOracle, AuthorizationScope, ContractAction, ContractConfig, ContractError,
    ContractResult, TokenDb,
};

/// Everything a handler may consult while applying one action
pub struct ApplyContext<'a> {
    tokendb: &'a mut dyn TokenDb,
    authority: &'a dyn AuthorizationOracle,
    head_block_time: DateTime<Utc>,
    config: &'a ContractConfig,
}

impl<'a> ApplyContext<'a> {
    pub fn new(
        tokendb: &'a mut dyn TokenDb,
        authority: &'a dyn AuthorizationOracle,
        head_block_time: DateTime<Utc>,
        config: &'a ContractConfig,
    ) -> Self {
        Self {
            tokendb,
            authority,
            head_block_time,
            config,
        }
    }

    /// Read-only view of the token database
    pub fn tokendb(&self) -> &dyn TokenDb {
        &*self.tokendb
    }

    /// Time of the block the action is applied in
    pub fn head_block_time(&self) -> DateTime<Utc> {
        self.head_block_time
    }

    pub fn config(&self) -> &ContractConfig {
        self.config
    }

    pub fn has_authorized(&self, scope: &AuthorizationScope) -> bool {
        self.authority.has_authorized(scope)
    }

    /// Fail unless the action is authorized for `scope`
    pub fn require_authorized(&self, scope: &AuthorizationScope) -> ContractResult<()> {
        if self.has_authorized(scope) {
            Ok(())
        } else {
            debug!(scope = %scope, "Authorization missing");
            Err(ContractError::validation(
                "Authorized information doesn't match",
            ))
        }
    }

    /// Validate `act`, then hand the resulting plan to `commit`
    pub(crate) fn execute<A, P, V, C>(&mut self, act: &A, validate: V, commit: C) -> ContractResult<()>
    where
        A: ContractAction,
        V: FnOnce(&ApplyContext<'a>, &A) -> ContractResult<P>,
        C: FnOnce(&mut dyn TokenDb, P) -> ContractResult<()>,
    {
        debug!(action = A::NAME, "Applying action");
        trace!(action = A::NAME, payload = ?serde_json::to_string(act).ok(), "Action payload");

        let plan = match validate(&*self, act) {
            Ok(plan) => plan,
            Err(e) => {
                self.log_rejection(A::NAME, &e);
                return Err(e.with_action(A::NAME, act));
            }
        };

        if let Err(e) = commit(&mut *self.tokendb, plan) {
            error!(action = A::NAME, error = %e, "Commit failed after validation");
            return Err(e.with_action(A::NAME, act));
        }

        info!(action = A::NAME, "Action applied");
        Ok(())
    }

    fn log_rejection(&self, action: &str, e: &ContractError) {
        match self.config.rejection_log_level {
            LogLevel::Error => error!(action, error = %e, "Action rejected"),
            LogLevel::Warn => warn!(action, error = %e, "Action rejected"),
            LogLevel::Info => info!(action, error = %e, "Action rejected"),
            LogLevel::Debug => debug!(action, error = %e, "Action rejected"),
            LogLevel::Trace => trace!(action, error = %e, "Action rejected"),
        }
    }
}
