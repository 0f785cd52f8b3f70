// Property-based tests for pre-tax revenue allocation across appointment days

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use wtd_upcoming::revenue::{Job, RevenueAllocator};

fn allocator() -> RevenueAllocator {
    RevenueAllocator::new(dec!(1.13))
}

#[test]
fn test_pre_tax_revenue_divides_out_tax() {
    let job = Job::new(Some(1), dec!(1130.00));
    assert_eq!(allocator().pre_tax_revenue(&job), dec!(1000.00));
}

#[test]
fn test_pre_tax_revenue_rounds_to_cents() {
    // 100 / 1.13 = 88.4955...
    let job = Job::new(Some(1), dec!(100.00));
    assert_eq!(allocator().pre_tax_revenue(&job), dec!(88.50));
}

#[test]
fn test_one_of_three_and_two_of_three() {
    let job = Job::new(Some(1), dec!(226.00));

    assert_eq!(allocator().allocate(&job, 1, 3), dec!(66.67));
    assert_eq!(allocator().allocate(&job, 2, 3), dec!(133.33));
}

#[test]
fn test_zero_total_job_allocates_zero() {
    let job = Job::new(Some(1), Decimal::ZERO);
    assert_eq!(allocator().allocate(&job, 1, 4), Decimal::ZERO);
}

#[test]
fn test_custom_tax_rate() {
    let allocator = RevenueAllocator::new(dec!(1.05));
    let job = Job::new(Some(1), dec!(210.00));

    assert_eq!(allocator.tax_rate(), dec!(1.05));
    assert_eq!(allocator.pre_tax_revenue(&job), dec!(200.00));
}

proptest! {
    /// Property: shares across all days sum to the pre-tax revenue within one cent per day
    #[test]
    fn test_split_conserves_revenue(
        total_cents in 0i64..100_000_000i64,
        day_counts in prop::collection::vec(1u32..6u32, 1..4),
    ) {
        let job = Job::new(Some(1), Decimal::new(total_cents, 2));
        let total_count: u32 = day_counts.iter().sum();
        let pre_tax = allocator().pre_tax_revenue(&job);

        let allocated: Decimal = day_counts
            .iter()
            .map(|count| allocator().allocate(&job, *count, total_count))
            .sum();

        let tolerance = dec!(0.01) * Decimal::from(day_counts.len());
        prop_assert!((allocated - pre_tax).abs() <= tolerance);
    }

    /// Property: a job whose appointments all fall on one day gets its full pre-tax revenue
    #[test]
    fn test_single_day_gets_full_revenue(
        total_cents in 0i64..100_000_000i64,
        count in 1u32..20u32,
    ) {
        let job = Job::new(Some(1), Decimal::new(total_cents, 2));
        prop_assert_eq!(allocator().allocate(&job, count, count), allocator().pre_tax_revenue(&job));
    }

    /// Property: every share is cent-precise and never exceeds the full pre-tax revenue
    #[test]
    fn test_share_is_bounded_and_cent_precise(
        total_cents in 0i64..100_000_000i64,
        day_count in 1u32..10u32,
        extra in 0u32..10u32,
    ) {
        let job = Job::new(Some(1), Decimal::new(total_cents, 2));
        let share = allocator().allocate(&job, day_count, day_count + extra);

        prop_assert!(share >= Decimal::ZERO);
        prop_assert!(share <= allocator().pre_tax_revenue(&job));
        prop_assert!(share.scale() <= 2);
    }
}
