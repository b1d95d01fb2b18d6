//! Gate enforcement for application handlers.
//!
//! Wraps the domain access gate with audit logging. Handlers call
//! [`enforce_role`] before touching the store and [`enforce`] once the
//! target resource is loaded.

use tracing::warn;

use crate::domain::foundation::{
    authorize, check_role, AccessDecision, DomainError, Identity, Operation, Resource,
};

/// Role-only check, run before any store access.
pub fn enforce_role(operation: Operation, identity: &Identity) -> Result<(), DomainError> {
    let decision = check_role(operation, identity);
    log_denial(operation, identity, None, &decision);
    decision.into_result()
}

/// Full check of role and ownership against a loaded resource.
pub fn enforce(
    operation: Operation,
    identity: &Identity,
    resource: &Resource,
) -> Result<(), DomainError> {
    let decision = authorize(operation, identity, resource);
    log_denial(operation, identity, Some(resource), &decision);
    decision.into_result()
}

fn log_denial(
    operation: Operation,
    identity: &Identity,
    resource: Option<&Resource>,
    decision: &AccessDecision,
) {
    if let AccessDecision::Deny { reason } = decision {
        warn!(
            operation = %operation,
            user_id = %identity.id(),
            role = %identity.role(),
            resource_type = resource.map(Resource::kind).unwrap_or("-"),
            resource_id = resource.and_then(Resource::id).unwrap_or("-"),
            reason = %reason,
            "Access denied"
        );
    }
}
