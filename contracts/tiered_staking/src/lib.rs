#![no_std]

pub mod access;
pub mod events;
pub mod ledger;
pub mod rewards;
pub mod tiers;

use soroban_sdk::{contract, contractimpl, symbol_short, token, Address, Env, Symbol};

use ledger::StakeRecord;
use tiers::Tier;

// ── Storage key constants ────────────────────────────────────────────────────

pub(crate) const OWNER: Symbol = symbol_short!("OWNER");
const INITIALIZED: Symbol = symbol_short!("INIT");
const REWARD_TOKEN: Symbol = symbol_short!("RWD_TOK");

/// Minimum spacing between two stake calls by the same account, in any tier.
/// Fixed at construction; not configurable.
pub const COOLDOWN_INTERVAL: u64 = 86_400;

// ── Contract errors ──────────────────────────────────────────────────────────

#[soroban_sdk::contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ContractError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    Unauthorized = 3,
    NotAllowListed = 4,
    NoActiveStake = 5,
    CooldownActive = 6,
    AlreadyWithdrawn = 7,
    InvalidTier = 8,
    InvalidAmount = 9,
    StakeStillLocked = 10,
    TransferFailed = 11,
}

// ── Contract ─────────────────────────────────────────────────────────────────

#[contract]
pub struct TieredStakingContract;

#[contractimpl]
impl TieredStakingContract {
    // ── Initialisation ──────────────────────────────────────────────────────

    /// Bootstrap the contract.
    ///
    /// * `owner` – address allowed to configure tiers and the allow-list.
    /// * `reward_token` – SAC address of the single principal/reward asset.
    ///
    /// Seeds the default tier table: (1: 500 bps / 7 d), (2: 1000 bps / 14 d),
    /// (3: 1500 bps / 30 d). Tier id 0 stays reserved and unconfigured.
    pub fn initialize(env: Env, owner: Address, reward_token: Address) -> Result<(), ContractError> {
        if env.storage().instance().has(&INITIALIZED) {
            return Err(ContractError::AlreadyInitialized);
        }

        env.storage().instance().set(&OWNER, &owner);
        env.storage().instance().set(&INITIALIZED, &true);
        env.storage().instance().set(&REWARD_TOKEN, &reward_token);

        tiers::seed_default_tiers(&env);

        events::publish_initialized(&env, owner, reward_token, COOLDOWN_INTERVAL);

        Ok(())
    }

    // ── Owner operations ────────────────────────────────────────────────────

    /// Insert or overwrite a tier definition. Owner only.
    ///
    /// Tier id 0 is reserved. Rate and duration values are deliberately not
    /// bounds-checked: a zero `lock_duration` leaves the tier rejecting
    /// stakes, since stake validation treats lock == 0 as "not configured".
    pub fn modify_tier(
        env: Env,
        caller: Address,
        tier_id: u32,
        reward_rate_bps: u32,
        lock_duration: u64,
    ) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        access::require_owner(&env, &caller)?;

        if tier_id == 0 {
            return Err(ContractError::InvalidTier);
        }

        tiers::set_tier(
            &env,
            tier_id,
            &Tier {
                reward_rate_bps,
                lock_duration,
            },
        );

        events::publish_tier_modified(&env, tier_id, reward_rate_bps, lock_duration);

        Ok(())
    }

    /// Grant or revoke allow-list membership for `account`. Owner only.
    pub fn update_allow_list_status(
        env: Env,
        caller: Address,
        account: Address,
        status: bool,
    ) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        access::require_owner(&env, &caller)?;

        access::set_allow_listed(&env, &account, status);

        events::publish_allow_list_updated(&env, account, status);

        Ok(())
    }

    // ── Staking ─────────────────────────────────────────────────────────────

    /// Deposit `amount` into `tier_id`.
    ///
    /// Repeat stakes into the same tier accumulate `staked_amount` and
    /// `earned_reward`. The release time folds the previous value into the
    /// new lock computation (`old + now + lock_duration`), so repeat stakes
    /// extend the lock by more than the tier duration alone.
    pub fn stake(
        env: Env,
        staker: Address,
        tier_id: u32,
        amount: i128,
    ) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        staker.require_auth();

        let now = env.ledger().timestamp();

        // 1. Guard chain.
        access::require_allow_listed(&env, &staker)?;
        access::require_cooldown_elapsed(&env, &staker, now)?;

        // 2. Validation.
        if amount <= 0 {
            return Err(ContractError::InvalidAmount);
        }
        if tier_id == 0 {
            return Err(ContractError::InvalidTier);
        }
        let tier = tiers::get_tier(&env, tier_id);
        if !tier.is_configured() {
            return Err(ContractError::InvalidTier);
        }

        // 3. Reward for this deposit, fixed at stake time.
        let reward = rewards::compute_reward(amount, tier.reward_rate_bps);

        // 4. Pull the principal in before any ledger mutation, so a failed
        //    transfer cannot leave phantom stake behind.
        let reward_token = Self::reward_token(&env)?;
        let transfer = token::Client::new(&env, &reward_token).try_transfer(
            &staker,
            &env.current_contract_address(),
            &amount,
        );
        if transfer.is_err() {
            return Err(ContractError::TransferFailed);
        }

        // 5. Update the record in place.
        let mut record = ledger::get_record(&env, &staker, tier_id);
        record.staked_amount = record.staked_amount.saturating_add(amount);
        record.earned_reward = record.earned_reward.saturating_add(reward);
        record.release_time = record
            .release_time
            .saturating_add(now)
            .saturating_add(tier.lock_duration);
        record.withdrawn = false;
        ledger::set_record(&env, &staker, tier_id, &record);

        // 6. The cooldown clock is account-wide, not per tier.
        access::set_last_stake_time(&env, &staker, now);

        events::publish_staked(&env, staker, amount, tier_id, reward, record.release_time);

        Ok(())
    }

    // ── Withdrawal ──────────────────────────────────────────────────────────

    /// Withdraw principal plus accrued reward for `tier_id` once the lock has
    /// expired. Returns the total paid out.
    ///
    /// The withdrawn flag is account-wide: one successful withdrawal, in any
    /// tier, permanently blocks every later withdrawal by the same account.
    pub fn withdraw(env: Env, staker: Address, tier_id: u32) -> Result<i128, ContractError> {
        Self::require_initialized(&env)?;
        staker.require_auth();

        let now = env.ledger().timestamp();

        // 1. Guard chain.
        access::require_allow_listed(&env, &staker)?;
        let record = ledger::get_record(&env, &staker, tier_id);
        if !record.is_active() {
            return Err(ContractError::NoActiveStake);
        }
        access::require_not_already_withdrawn(&env, &staker)?;

        // 2. Strict inequality: at now == release_time the stake stays locked.
        if now <= record.release_time {
            return Err(ContractError::StakeStillLocked);
        }

        // 3. Payout.
        let total = record.staked_amount.saturating_add(record.earned_reward);

        // 4–5. Commit state before the outbound transfer so a re-entrant call
        //      observes the withdrawn flag and fails its own guards.
        access::set_withdrawn(&env, &staker);
        ledger::set_record(
            &env,
            &staker,
            tier_id,
            &StakeRecord {
                staked_amount: 0,
                earned_reward: 0,
                release_time: 0,
                withdrawn: true,
            },
        );

        // 6. Pay out to the staker.
        let reward_token = Self::reward_token(&env)?;
        let transfer = token::Client::new(&env, &reward_token).try_transfer(
            &env.current_contract_address(),
            &staker,
            &total,
        );
        if transfer.is_err() {
            return Err(ContractError::TransferFailed);
        }

        events::publish_withdrawn(&env, staker, total);

        Ok(total)
    }

    // ── View functions ──────────────────────────────────────────────────────

    /// Return the record for `(account, tier_id)`. No guards, no side effects;
    /// never-staked pairs read as the zero record.
    pub fn get_stake_details(env: Env, account: Address, tier_id: u32) -> StakeRecord {
        ledger::get_record(&env, &account, tier_id)
    }

    /// Return the tier definition. Absent ids read as the zero-valued tier.
    pub fn get_tier(env: Env, tier_id: u32) -> Tier {
        tiers::get_tier(&env, tier_id)
    }

    pub fn is_allow_listed(env: Env, account: Address) -> bool {
        access::is_allow_listed(&env, &account)
    }

    /// Whether the account has ever completed a withdrawal (any tier).
    pub fn has_withdrawn(env: Env, account: Address) -> bool {
        access::has_withdrawn(&env, &account)
    }

    /// Timestamp of the account's last stake, if it ever staked.
    pub fn get_last_stake_time(env: Env, account: Address) -> Option<u64> {
        access::last_stake_time(&env, &account)
    }

    pub fn get_cooldown_interval(_env: Env) -> u64 {
        COOLDOWN_INTERVAL
    }

    pub fn get_owner(env: Env) -> Result<Address, ContractError> {
        env.storage()
            .instance()
            .get(&OWNER)
            .ok_or(ContractError::NotInitialized)
    }

    pub fn get_reward_token(env: Env) -> Result<Address, ContractError> {
        Self::reward_token(&env)
    }

    pub fn is_initialized(env: Env) -> bool {
        env.storage().instance().has(&INITIALIZED)
    }

    // ── Internal helpers ────────────────────────────────────────────────────

    /// Guard: revert if the contract is not yet initialized.
    fn require_initialized(env: &Env) -> Result<(), ContractError> {
        if !env.storage().instance().has(&INITIALIZED) {
            return Err(ContractError::NotInitialized);
        }
        Ok(())
    }

    fn reward_token(env: &Env) -> Result<Address, ContractError> {
        env.storage()
            .instance()
            .get(&REWARD_TOKEN)
            .ok_or(ContractError::NotInitialized)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────


#[cfg(test)]
mod test_admin;
