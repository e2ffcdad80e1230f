use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

// ── Storage keys ─────────────────────────────────────────────────────────────

// Per-position persistent storage uses tuple keys:  (prefix, account, tier_id)
const STAKE: Symbol = symbol_short!("STK");

const TTL_THRESHOLD: u32 = 5184000;
const TTL_EXTEND_TO: u32 = 10368000;

// ── Types ────────────────────────────────────────────────────────────────────

/// A single account's position in one tier.
///
/// `staked_amount` and `earned_reward` accumulate across repeat stakes into
/// the same tier; `release_time` folds the previous value into each new lock
/// computation (see `stake` in `lib.rs`). After a successful withdrawal the
/// amounts are zeroed and `withdrawn` stays true.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakeRecord {
    pub staked_amount: i128,
    pub earned_reward: i128,
    pub release_time: u64,
    pub withdrawn: bool,
}

impl StakeRecord {
    /// Default record for an account/tier pair that has never staked.
    pub fn empty() -> Self {
        StakeRecord {
            staked_amount: 0,
            earned_reward: 0,
            release_time: 0,
            withdrawn: false,
        }
    }

    /// An active stake exists iff the staked amount is non-zero.
    pub fn is_active(&self) -> bool {
        self.staked_amount > 0
    }
}

// ── Storage helpers ──────────────────────────────────────────────────────────

fn stake_key(account: &Address, tier_id: u32) -> (Symbol, Address, u32) {
    (STAKE, account.clone(), tier_id)
}

fn extend_ttl(env: &Env, key: &(Symbol, Address, u32)) {
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

/// Read the record for `(account, tier_id)`, defaulting to the empty record.
pub fn get_record(env: &Env, account: &Address, tier_id: u32) -> StakeRecord {
    let key = stake_key(account, tier_id);
    let record: Option<StakeRecord> = env.storage().persistent().get(&key);
    match record {
        Some(r) => {
            extend_ttl(env, &key);
            r
        }
        None => StakeRecord::empty(),
    }
}

/// Persist the record for `(account, tier_id)`.
pub fn set_record(env: &Env, account: &Address, tier_id: u32, record: &StakeRecord) {
    let key = stake_key(account, tier_id);
    env.storage().persistent().set(&key, record);
    extend_ttl(env, &key);
}
