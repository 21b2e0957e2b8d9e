//! Compile-time vesting configuration. All amounts are whole tokens;
//! scaling to base units happens once, at mint time.

/// Number of vesting schedules held by the vault.
pub const SCHEDULE_COUNT: usize = 8;

/// Seconds per vesting period, shared by every schedule.
pub const PERIOD_LENGTH: i64 = 2_529_100;

/// Canonical schedule indices, assigned at registration and stable forever.
pub const TEAM: u8 = 0;
pub const TEAM_PRIVATE: u8 = 1;
pub const ADVISORS: u8 = 2;
pub const MARKETING: u8 = 3;
pub const NFT_HOLDERS: u8 = 4;
pub const LIQUIDITY: u8 = 5;
pub const TREASURY: u8 = 6;
pub const STAKING: u8 = 7;

/// Per-category parameters, fixed at compile time.
pub struct ScheduleParams {
    pub total_allocation: u64,
    pub cliff_periods: u64,
    pub total_periods: u64,
}

/// The eight schedules in canonical order: team, teamPrivate, advisors,
/// marketing, nftHolders, liquidity, treasury, staking.
pub const SCHEDULE_PARAMS: [ScheduleParams; SCHEDULE_COUNT] = [
    ScheduleParams {
        total_allocation: 96_000_000,
        cliff_periods: 12,
        total_periods: 12,
    },
    ScheduleParams {
        total_allocation: 35_000_000,
        cliff_periods: 12,
        total_periods: 6,
    },
    ScheduleParams {
        total_allocation: 24_000_000,
        cliff_periods: 6,
        total_periods: 12,
    },
    ScheduleParams {
        total_allocation: 112_000_000,
        cliff_periods: 1,
        total_periods: 48,
    },
    ScheduleParams {
        total_allocation: 44_000_000,
        cliff_periods: 1,
        total_periods: 6,
    },
    ScheduleParams {
        total_allocation: 135_000_000,
        cliff_periods: 1,
        total_periods: 12,
    },
    ScheduleParams {
        total_allocation: 193_800_000,
        cliff_periods: 1,
        total_periods: 48,
    },
    ScheduleParams {
        total_allocation: 300_000_000,
        cliff_periods: 1,
        total_periods: 48,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_well_formed() {
        for params in SCHEDULE_PARAMS.iter() {
            assert!(params.total_allocation > 0);
            assert!(params.total_periods > 0);
            assert!(params.cliff_periods >= 1);
        }
    }

    #[test]
    fn total_vested_supply() {
        let total: u64 = SCHEDULE_PARAMS.iter().map(|p| p.total_allocation).sum();
        assert_eq!(total, 939_800_000);
    }

    #[test]
    fn canonical_order() {
        assert_eq!(SCHEDULE_PARAMS[TEAM as usize].total_allocation, 96_000_000);
        assert_eq!(
            SCHEDULE_PARAMS[TEAM_PRIVATE as usize].total_allocation,
            35_000_000
        );
        assert_eq!(
            SCHEDULE_PARAMS[ADVISORS as usize].total_allocation,
            24_000_000
        );
        assert_eq!(
            SCHEDULE_PARAMS[MARKETING as usize].total_allocation,
            112_000_000
        );
        assert_eq!(
            SCHEDULE_PARAMS[NFT_HOLDERS as usize].total_allocation,
            44_000_000
        );
        assert_eq!(
            SCHEDULE_PARAMS[LIQUIDITY as usize].total_allocation,
            135_000_000
        );
        assert_eq!(
            SCHEDULE_PARAMS[TREASURY as usize].total_allocation,
            193_800_000
        );
        assert_eq!(
            SCHEDULE_PARAMS[STAKING as usize].total_allocation,
            300_000_000
        );
        assert_eq!(SCHEDULE_PARAMS[MARKETING as usize].total_periods, 48);
        assert_eq!(SCHEDULE_PARAMS[MARKETING as usize].cliff_periods, 1);
    }
}
