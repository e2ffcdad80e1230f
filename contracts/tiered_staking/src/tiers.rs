use soroban_sdk::{contracttype, symbol_short, Env, Symbol};

// ── Storage keys ─────────────────────────────────────────────────────────────

// Per-tier persistent storage uses tuple keys:  (prefix, tier_id)
const TIER: Symbol = symbol_short!("TIER");

const TTL_THRESHOLD: u32 = 5184000;
const TTL_EXTEND_TO: u32 = 10368000;

// ── Types ────────────────────────────────────────────────────────────────────

/// A staking tier: reward rate in basis points plus the lock window applied
/// to deposits made into it.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Tier {
    pub reward_rate_bps: u32,
    pub lock_duration: u64,
}

impl Tier {
    /// Zero-valued tier returned for ids that were never configured.
    pub fn zero() -> Self {
        Tier {
            reward_rate_bps: 0,
            lock_duration: 0,
        }
    }

    /// A tier with no lock window is treated as "not configured" and rejects
    /// stakes. Tier id 0 is reserved and can never be configured, so it is
    /// always in this state.
    pub fn is_configured(&self) -> bool {
        self.lock_duration > 0
    }
}

/// Tiers seeded at initialization: (id, reward_rate_bps, lock_duration).
pub(crate) const DEFAULT_TIERS: [(u32, u32, u64); 3] = [
    (1, 500, 7 * 86_400),
    (2, 1_000, 14 * 86_400),
    (3, 1_500, 30 * 86_400),
];

// ── Storage helpers ──────────────────────────────────────────────────────────

fn tier_key(tier_id: u32) -> (Symbol, u32) {
    (TIER, tier_id)
}

fn extend_ttl(env: &Env, key: &(Symbol, u32)) {
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

/// Read a tier definition. Absent ids read as the zero-valued tier.
pub fn get_tier(env: &Env, tier_id: u32) -> Tier {
    let key = tier_key(tier_id);
    let tier: Option<Tier> = env.storage().persistent().get(&key);
    match tier {
        Some(t) => {
            extend_ttl(env, &key);
            t
        }
        None => Tier::zero(),
    }
}

/// Insert or overwrite a tier definition. Tiers are never deleted.
pub fn set_tier(env: &Env, tier_id: u32, tier: &Tier) {
    let key = tier_key(tier_id);
    env.storage().persistent().set(&key, tier);
    extend_ttl(env, &key);
}

/// Write the default tier table during initialization.
pub fn seed_default_tiers(env: &Env) {
    for (tier_id, reward_rate_bps, lock_duration) in DEFAULT_TIERS {
        set_tier(
            env,
            tier_id,
            &Tier {
                reward_rate_bps,
                lock_duration,
            },
        );
    }
}
