#![allow(deprecated)] // events().publish migration tracked separately

use soroban_sdk::{symbol_short, Address, Env};

// ── Event payloads ──────────────────────────────────────────────────────────

/// Fired once when the contract is bootstrapped.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub owner: Address,
    pub reward_token: Address,
    pub cooldown_interval: u64,
    pub timestamp: u64,
}

/// Fired when the owner inserts or overwrites a tier definition.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TierModifiedEvent {
    pub tier_id: u32,
    pub reward_rate_bps: u32,
    pub lock_duration: u64,
    pub timestamp: u64,
}

/// Fired when the owner grants or revokes allow-list membership.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AllowListStatusUpdatedEvent {
    pub account: Address,
    pub allowed: bool,
    pub timestamp: u64,
}

/// Fired when a user deposits into a tier.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakedEvent {
    pub account: Address,
    pub amount: i128,
    pub tier_id: u32,
    pub reward: i128,
    pub release_time: u64,
    pub timestamp: u64,
}

/// Fired when a user withdraws principal plus accrued reward.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WithdrawnEvent {
    pub account: Address,
    pub total: i128,
    pub timestamp: u64,
}

// ── Publishers ──────────────────────────────────────────────────────────────

pub fn publish_initialized(env: &Env, owner: Address, reward_token: Address, cooldown_interval: u64) {
    env.events().publish(
        (symbol_short!("INIT"),),
        InitializedEvent {
            owner,
            reward_token,
            cooldown_interval,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_tier_modified(env: &Env, tier_id: u32, reward_rate_bps: u32, lock_duration: u64) {
    env.events().publish(
        (symbol_short!("TIER_MOD"),),
        TierModifiedEvent {
            tier_id,
            reward_rate_bps,
            lock_duration,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_allow_list_updated(env: &Env, account: Address, allowed: bool) {
    env.events().publish(
        (symbol_short!("ALLOW_UPD"), account.clone()),
        AllowListStatusUpdatedEvent {
            account,
            allowed,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_staked(
    env: &Env,
    account: Address,
    amount: i128,
    tier_id: u32,
    reward: i128,
    release_time: u64,
) {
    env.events().publish(
        (symbol_short!("STAKED"), account.clone()),
        StakedEvent {
            account,
            amount,
            tier_id,
            reward,
            release_time,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_withdrawn(env: &Env, account: Address, total: i128) {
    env.events().publish(
        (symbol_short!("WITHDRAWN"), account.clone()),
        WithdrawnEvent {
            account,
            total,
            timestamp: env.ledger().timestamp(),
        },
    );
}
