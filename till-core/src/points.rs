//! Loyalty points rules.
//!
//! Each rule reads its own fields of a validated [`Receipt`] and contributes
//! independently; the score is the plain sum, so rule order is irrelevant.

use chrono::{Datelike, Timelike};
use serde::Serialize;
use tracing::debug;

use crate::receipt::{Item, Receipt};

/// Points for a total with no cents.
pub const ROUND_DOLLAR_POINTS: u64 = 50;
/// Points for a total that is a multiple of `0.25`.
pub const QUARTER_MULTIPLE_POINTS: u64 = 25;
/// Points for every two items on the receipt.
pub const ITEM_PAIR_POINTS: u64 = 5;
/// Points when the day of the purchase date is odd.
pub const ODD_DAY_POINTS: u64 = 6;
/// Points when the purchase falls in the afternoon window.
pub const AFTERNOON_POINTS: u64 = 10;

const DESCRIPTION_PRICE_FACTOR: f64 = 0.2;
const AFTERNOON_START_HOUR: u32 = 14;
const AFTERNOON_END_HOUR: u32 = 16;

/// Per-rule contributions to a receipt's score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct PointsBreakdown {
    /// One point per alphanumeric character in the retailer name.
    pub retailer_name: u64,
    /// Round-dollar total bonus.
    pub round_dollar: u64,
    /// Quarter-multiple total bonus.
    pub quarter_multiple: u64,
    /// Five points per pair of items.
    pub item_pairs: u64,
    /// Sum of `ceil(price * 0.2)` over items with qualifying descriptions.
    pub item_descriptions: u64,
    /// Odd purchase day bonus.
    pub odd_day: u64,
    /// Purchase between 14:00 and 16:00.
    pub afternoon: u64,
}

impl PointsBreakdown {
    /// Sum of all rule contributions, saturating at `u64::MAX`.
    #[must_use]
    pub fn total(&self) -> u64 {
        [
            self.retailer_name,
            self.round_dollar,
            self.quarter_multiple,
            self.item_pairs,
            self.item_descriptions,
            self.odd_day,
            self.afternoon,
        ]
        .into_iter()
        .fold(0, u64::saturating_add)
    }
}

/// Evaluate every rule against `receipt`.
#[must_use]
pub fn breakdown(receipt: &Receipt) -> PointsBreakdown {
    let total = receipt.total.value();
    let points = PointsBreakdown {
        retailer_name: retailer_name_points(&receipt.retailer),
        round_dollar: round_dollar_points(total),
        quarter_multiple: quarter_multiple_points(total),
        item_pairs: item_pair_points(receipt.items.len()),
        item_descriptions: receipt
            .items
            .iter()
            .map(item_description_points)
            .fold(0, u64::saturating_add),
        odd_day: odd_day_points(receipt.purchase_date.day()),
        afternoon: afternoon_points(receipt.purchase_time.hour()),
    };
    debug!(
        retailer = %receipt.retailer,
        retailer_name = points.retailer_name,
        round_dollar = points.round_dollar,
        quarter_multiple = points.quarter_multiple,
        item_pairs = points.item_pairs,
        item_descriptions = points.item_descriptions,
        odd_day = points.odd_day,
        afternoon = points.afternoon,
        "scored receipt"
    );
    points
}

/// Total points awarded for `receipt`.
#[must_use]
pub fn score(receipt: &Receipt) -> u64 {
    breakdown(receipt).total()
}

fn retailer_name_points(retailer: &str) -> u64 {
    retailer.chars().filter(char::is_ascii_alphanumeric).count() as u64
}

#[expect(clippy::float_cmp, reason = "round dollar means exact equality")]
fn round_dollar_points(total: f64) -> u64 {
    if total == total.round() {
        ROUND_DOLLAR_POINTS
    } else {
        0
    }
}

fn quarter_multiple_points(total: f64) -> u64 {
    // Multiples of 0.25 are exact in binary, so the remainder is exactly zero.
    if (total * 100.0) % 25.0 == 0.0 {
        QUARTER_MULTIPLE_POINTS
    } else {
        0
    }
}

fn item_pair_points(count: usize) -> u64 {
    ((count / 2) as u64).saturating_mul(ITEM_PAIR_POINTS)
}

#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "validated prices are finite and non-negative; the cast saturates"
)]
fn item_description_points(item: &Item) -> u64 {
    let len = item.short_description.trim().chars().count();
    if len == 0 || len % 3 != 0 {
        return 0;
    }
    (item.price.value() * DESCRIPTION_PRICE_FACTOR).ceil() as u64
}

fn odd_day_points(day: u32) -> u64 {
    if day % 2 == 1 {
        ODD_DAY_POINTS
    } else {
        0
    }
}

fn afternoon_points(hour: u32) -> u64 {
    if (AFTERNOON_START_HOUR..AFTERNOON_END_HOUR).contains(&hour) {
        AFTERNOON_POINTS
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::receipt::{ItemPayload, ReceiptPayload};
    use crate::validate::validate;

    fn item(desc: &str, price: &str) -> ItemPayload {
        ItemPayload {
            short_description: desc.to_owned(),
            price: price.to_owned(),
        }
    }

    /// A receipt that scores zero on every rule except the ones a test edits.
    fn neutral() -> ReceiptPayload {
        ReceiptPayload {
            retailer: "-".to_owned(),
            purchase_date: "2024-01-02".to_owned(),
            purchase_time: "10:00".to_owned(),
            total: "12.33".to_owned(),
            items: vec![item("ab", "10.00")],
        }
    }

    fn points_for(payload: &ReceiptPayload) -> PointsBreakdown {
        match validate(payload) {
            Ok(r) => breakdown(&r),
            Err(e) => panic!("test payload rejected: {e}"),
        }
    }

    #[test]
    fn neutral_receipt_scores_zero() {
        assert_eq!(points_for(&neutral()).total(), 0);
    }

    #[test]
    fn retailer_counts_only_alphanumerics() {
        let mut p = neutral();
        p.retailer = "Target".to_owned();
        assert_eq!(points_for(&p).retailer_name, 6);
        p.retailer = "Corner - Market_2".to_owned();
        assert_eq!(points_for(&p).retailer_name, 13);
    }

    #[test]
    fn round_dollar_total_earns_both_total_bonuses() {
        let mut p = neutral();
        p.total = "12.00".to_owned();
        let pts = points_for(&p);
        assert_eq!(pts.round_dollar, 50);
        assert_eq!(pts.quarter_multiple, 25);
        assert_eq!(pts.total(), 75);
    }

    #[test]
    fn quarter_total_earns_only_quarter_bonus() {
        let mut p = neutral();
        for total in ["12.25", "12.50", "12.75"] {
            p.total = total.to_owned();
            let pts = points_for(&p);
            assert_eq!(pts.round_dollar, 0, "total {total}");
            assert_eq!(pts.quarter_multiple, 25, "total {total}");
        }
    }

    #[test]
    fn other_totals_earn_no_total_bonus() {
        let mut p = neutral();
        for total in ["12.33", "0.10", "35.35", "9.99"] {
            p.total = total.to_owned();
            let pts = points_for(&p);
            assert_eq!(pts.round_dollar + pts.quarter_multiple, 0, "total {total}");
        }
    }

    #[test]
    fn zero_total_is_round_and_quarter() {
        let mut p = neutral();
        p.total = "0.00".to_owned();
        assert_eq!(points_for(&p).total(), 75);
    }

    #[test]
    fn item_pairs_score_five_per_pair() {
        for (count, expected) in [(1, 0), (2, 5), (3, 5), (4, 10), (5, 10)] {
            let mut p = neutral();
            p.items = vec![item("ab", "1.00"); count];
            assert_eq!(points_for(&p).item_pairs, expected, "{count} items");
        }
    }

    #[test]
    fn description_multiple_of_three_earns_ceiled_fifth_of_price() {
        let mut p = neutral();
        p.items = vec![item("abc", "10.00")];
        assert_eq!(points_for(&p).item_descriptions, 2);

        p.items = vec![item("Emils Cheese Pizza", "12.25")];
        assert_eq!(points_for(&p).item_descriptions, 3);
    }

    #[test]
    fn description_length_is_measured_after_trimming() {
        let mut p = neutral();
        p.items = vec![item("   Klarbrunn 12-PK 12 FL OZ  ", "12.00")];
        assert_eq!(points_for(&p).item_descriptions, 3);
    }

    #[test]
    fn description_not_multiple_of_three_earns_nothing() {
        let mut p = neutral();
        p.items = vec![item("ab", "100.00"), item("abcd", "100.00")];
        assert_eq!(points_for(&p).item_descriptions, 0);
    }

    #[test]
    fn blank_description_earns_nothing() {
        let mut p = neutral();
        p.items = vec![item("   ", "100.00")];
        assert_eq!(points_for(&p).item_descriptions, 0);
    }

    #[test]
    fn zero_price_description_earns_nothing() {
        let mut p = neutral();
        p.items = vec![item("abc", "0.00")];
        assert_eq!(points_for(&p).item_descriptions, 0);
    }

    #[test]
    fn odd_day_earns_six() {
        let mut p = neutral();
        p.purchase_date = "2024-01-01".to_owned();
        assert_eq!(points_for(&p).odd_day, 6);
        p.purchase_date = "2024-01-02".to_owned();
        assert_eq!(points_for(&p).odd_day, 0);
        p.purchase_date = "2024-01-31".to_owned();
        assert_eq!(points_for(&p).odd_day, 6);
    }

    #[test]
    fn afternoon_window_is_half_open() {
        for (time, expected) in [
            ("13:59", 0),
            ("14:00", 10),
            ("14:01", 10),
            ("15:59", 10),
            ("16:00", 0),
            ("23:59", 0),
            ("00:00", 0),
        ] {
            let mut p = neutral();
            p.purchase_time = time.to_owned();
            assert_eq!(points_for(&p).afternoon, expected, "time {time}");
        }
    }

    #[test]
    fn pepsi_receipt_scores_thirty_seven() {
        let p = ReceiptPayload {
            retailer: "Target".to_owned(),
            purchase_date: "2022-01-01".to_owned(),
            purchase_time: "13:01".to_owned(),
            total: "1.25".to_owned(),
            items: vec![item("Pepsi - 12-oz", "1.25")],
        };
        let pts = points_for(&p);
        assert_eq!(
            pts,
            PointsBreakdown {
                retailer_name: 6,
                round_dollar: 0,
                quarter_multiple: 25,
                item_pairs: 0,
                item_descriptions: 0,
                odd_day: 6,
                afternoon: 0,
            }
        );
        assert_eq!(pts.total(), 37);
    }

    #[test]
    fn huge_item_price_saturates_instead_of_overflowing() {
        let mut p = neutral();
        p.retailer = "Target".to_owned();
        p.items = vec![item("abc", "99999999999999999999.00")];
        let pts = points_for(&p);
        assert_eq!(pts.item_descriptions, u64::MAX);
        assert_eq!(pts.total(), u64::MAX);
        assert_eq!(score(&validate(&p).unwrap_or_else(|e| panic!("{e}"))), u64::MAX);
    }

    #[test]
    fn several_huge_prices_saturate_the_description_sum() {
        let mut p = neutral();
        p.items = vec![item("abc", "1e300"); 3];
        assert_eq!(points_for(&p).item_descriptions, u64::MAX);
    }

    #[test]
    fn breakdown_total_saturates() {
        let pts = PointsBreakdown {
            retailer_name: u64::MAX,
            round_dollar: ROUND_DOLLAR_POINTS,
            quarter_multiple: QUARTER_MULTIPLE_POINTS,
            item_pairs: u64::MAX,
            item_descriptions: u64::MAX,
            odd_day: ODD_DAY_POINTS,
            afternoon: AFTERNOON_POINTS,
        };
        assert_eq!(pts.total(), u64::MAX);
    }

    #[test]
    fn largest_well_formed_total_scores_without_panicking() {
        let mut p = neutral();
        p.total = format!("{}.00", u64::MAX);
        let pts = points_for(&p);
        assert_eq!(pts.round_dollar, ROUND_DOLLAR_POINTS);
        assert_eq!(pts.total(), pts.round_dollar + pts.quarter_multiple);
    }

    fn price_strategy() -> impl proptest::strategy::Strategy<Value = String> {
        use proptest::prelude::*;
        prop_oneof![
            (0u64..=u64::MAX, 0u32..100).prop_map(|(d, c)| format!("{d}.{c:02}")),
            (0u32..=308).prop_map(|e| format!("1e{e}")),
            Just("1.7976931348623157e308".to_owned()),
        ]
    }

    proptest::proptest! {
        #[test]
        fn proptest_extreme_amounts_score_without_panicking(
            retailer in "[A-Za-z0-9_ -]{1,20}",
            dollars in 0u64..=u64::MAX,
            cents in 0u32..100,
            prices in proptest::collection::vec(price_strategy(), 1..8),
        ) {
            let p = ReceiptPayload {
                retailer,
                total: format!("{dollars}.{cents:02}"),
                items: prices.iter().map(|price| item("abc", price)).collect(),
                ..neutral()
            };
            let receipt = match validate(&p) {
                Ok(r) => r,
                Err(e) => return Err(proptest::test_runner::TestCaseError::fail(e.to_string())),
            };
            let first = score(&receipt);
            proptest::prop_assert_eq!(first, score(&receipt));
            proptest::prop_assert_eq!(first, breakdown(&receipt).total());
        }

        #[test]
        fn proptest_score_is_deterministic_and_sums_breakdown(
            retailer in "[A-Za-z0-9_ -]{1,20}",
            day in 1u32..=28,
            hour in 0u32..24,
            minute in 0u32..60,
            dollars in 0u32..10_000,
            cents in 0u32..100,
            items in proptest::collection::vec(("[A-Za-z0-9 -]{1,12}", 0u32..100_000), 1..8),
        ) {
            let p = ReceiptPayload {
                retailer,
                purchase_date: format!("2023-06-{day:02}"),
                purchase_time: format!("{hour:02}:{minute:02}"),
                total: format!("{dollars}.{cents:02}"),
                items: items
                    .into_iter()
                    .map(|(desc, c)| item(&desc, &format!("{}.{:02}", c / 100, c % 100)))
                    .collect(),
            };
            let receipt = match validate(&p) {
                Ok(r) => r,
                Err(e) => return Err(proptest::test_runner::TestCaseError::fail(e.to_string())),
            };
            let first = score(&receipt);
            proptest::prop_assert_eq!(first, score(&receipt));
            proptest::prop_assert_eq!(first, breakdown(&receipt).total());
        }
    }
}
