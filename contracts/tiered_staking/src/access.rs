use soroban_sdk::{symbol_short, Address, Env, Symbol};

use crate::{ContractError, COOLDOWN_INTERVAL, OWNER};

// ── Storage keys ─────────────────────────────────────────────────────────────

// Per-account persistent storage uses tuple keys:  (prefix, account)
const ALLOW_LIST: Symbol = symbol_short!("ALLOW");
const LAST_STAKE: Symbol = symbol_short!("LAST_STK");
const WITHDRAWN: Symbol = symbol_short!("WDRN");

const TTL_THRESHOLD: u32 = 5184000;
const TTL_EXTEND_TO: u32 = 10368000;

// ── Storage helpers ──────────────────────────────────────────────────────────

fn allow_key(account: &Address) -> (Symbol, Address) {
    (ALLOW_LIST, account.clone())
}

fn last_stake_key(account: &Address) -> (Symbol, Address) {
    (LAST_STAKE, account.clone())
}

fn withdrawn_key(account: &Address) -> (Symbol, Address) {
    (WITHDRAWN, account.clone())
}

fn extend_ttl(env: &Env, key: &(Symbol, Address)) {
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

/// Grant or revoke allow-list membership. Revocation removes the key rather
/// than storing `false`.
pub fn set_allow_listed(env: &Env, account: &Address, allowed: bool) {
    let key = allow_key(account);
    if allowed {
        env.storage().persistent().set(&key, &true);
        extend_ttl(env, &key);
    } else {
        env.storage().persistent().remove(&key);
    }
}

pub fn is_allow_listed(env: &Env, account: &Address) -> bool {
    env.storage()
        .persistent()
        .get(&allow_key(account))
        .unwrap_or(false)
}

/// Timestamp of the account's last stake in any tier, if it ever staked.
pub fn last_stake_time(env: &Env, account: &Address) -> Option<u64> {
    env.storage().persistent().get(&last_stake_key(account))
}

pub fn set_last_stake_time(env: &Env, account: &Address, now: u64) {
    let key = last_stake_key(account);
    env.storage().persistent().set(&key, &now);
    extend_ttl(env, &key);
}

/// Whether the account has ever completed a withdrawal. One flag per account,
/// not per tier.
pub fn has_withdrawn(env: &Env, account: &Address) -> bool {
    env.storage()
        .persistent()
        .get(&withdrawn_key(account))
        .unwrap_or(false)
}

/// Permanently mark the account as withdrawn. No operation clears this.
pub fn set_withdrawn(env: &Env, account: &Address) {
    let key = withdrawn_key(account);
    env.storage().persistent().set(&key, &true);
    extend_ttl(env, &key);
}

// ── Guards ───────────────────────────────────────────────────────────────────
//
// Pure predicate evaluation over current state. Each operation composes the
// guards it needs, in order, at the top of its body.

/// Guard: revert unless `caller` is the configured owner.
pub fn require_owner(env: &Env, caller: &Address) -> Result<(), ContractError> {
    let owner: Address = env
        .storage()
        .instance()
        .get(&OWNER)
        .ok_or(ContractError::NotInitialized)?;
    if *caller != owner {
        return Err(ContractError::Unauthorized);
    }
    Ok(())
}

/// Guard: revert unless `caller` holds allow-list membership.
pub fn require_allow_listed(env: &Env, caller: &Address) -> Result<(), ContractError> {
    if !is_allow_listed(env, caller) {
        return Err(ContractError::NotAllowListed);
    }
    Ok(())
}

/// Guard: revert unless the account-wide cooldown has elapsed since the
/// caller's last stake. Accounts that never staked pass.
pub fn require_cooldown_elapsed(env: &Env, caller: &Address, now: u64) -> Result<(), ContractError> {
    match last_stake_time(env, caller) {
        Some(last) if now < last.saturating_add(COOLDOWN_INTERVAL) => {
            Err(ContractError::CooldownActive)
        }
        _ => Ok(()),
    }
}

/// Guard: revert if the caller's account-wide withdrawn flag is already set.
pub fn require_not_already_withdrawn(env: &Env, caller: &Address) -> Result<(), ContractError> {
    if has_withdrawn(env, caller) {
        return Err(ContractError::AlreadyWithdrawn);
    }
    Ok(())
}
