//! Monetary computation at order creation.
//!
//! All amounts are whole currency units. Percentage surcharges round
//! half-up in integer arithmetic: `(amount × pct + 50) / 100`. The breakdown
//! is computed once when the order is placed and frozen into it.

use crate::config::PricingPolicy;
use crate::model::{OrderItem, Pricing};

/// `percent`% of `amount`, rounded half-up to the nearest whole unit.
pub fn percent_of(amount: u32, percent: u32) -> u32 {
    ((amount as u64 * percent as u64 + 50) / 100) as u32
}

/// Derives the full breakdown for a priced item list.
///
/// Line totals are accumulated in `u64`; `None` means the order is too
/// large to represent and must be rejected.
pub fn price_order(
    items: &[OrderItem],
    delivery_fee: u32,
    policy: &PricingPolicy,
) -> Option<Pricing> {
    let wide: u64 = items
        .iter()
        .map(|i| u64::from(i.unit_price) * u64::from(i.quantity))
        .sum();
    let subtotal = u32::try_from(wide).ok()?;
    let platform_fee = percent_of(subtotal, policy.platform_fee_percent);
    let taxes = percent_of(subtotal, policy.tax_percent);
    let total = subtotal
        .checked_add(delivery_fee)?
        .checked_add(platform_fee)?
        .checked_add(taxes)?;
    Some(Pricing {
        subtotal,
        delivery_fee,
        platform_fee,
        taxes,
        total,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(price: u32, quantity: u32) -> OrderItem {
        OrderItem {
            menu_item_id: 1,
            name: "item".to_string(),
            unit_price: price,
            quantity,
            note: None,
        }
    }

    #[test]
    fn worked_example() {
        // Two items at 100, one at 50, fee 40: subtotal 250, platform 2% = 5,
        // taxes 5% = 13 (12.5 rounds up), total 308.
        let pricing = price_order(
            &[item(100, 2), item(50, 1)],
            40,
            &PricingPolicy::default(),
        )
        .unwrap();
        assert_eq!(pricing.subtotal, 250);
        assert_eq!(pricing.delivery_fee, 40);
        assert_eq!(pricing.platform_fee, 5);
        assert_eq!(pricing.taxes, 13);
        assert_eq!(pricing.total, 308);
    }

    #[test]
    fn total_always_equals_sum_of_parts() {
        let policy = PricingPolicy::default();
        for subtotal_items in [
            vec![item(1, 1)],
            vec![item(99, 3), item(7, 11)],
            vec![item(12345, 2)],
        ] {
            let p = price_order(&subtotal_items, 25, &policy).unwrap();
            assert_eq!(
                p.total,
                p.subtotal + p.delivery_fee + p.platform_fee + p.taxes
            );
        }
    }

    #[test]
    fn rounding_is_half_up() {
        assert_eq!(percent_of(250, 5), 13); // 12.5 -> 13
        assert_eq!(percent_of(249, 5), 12); // 12.45 -> 12
        assert_eq!(percent_of(10, 5), 1); // 0.5 -> 1
        assert_eq!(percent_of(0, 5), 0);
    }

    #[test]
    fn unrepresentable_totals_are_rejected_not_wrapped() {
        let policy = PricingPolicy::default();
        // A single line past u32::MAX.
        assert!(price_order(&[item(u32::MAX, 2)], 0, &policy).is_none());
        // Lines that fit individually but overflow when summed.
        assert!(price_order(&[item(u32::MAX, 1), item(1, 1)], 0, &policy).is_none());
        // Subtotal at the ceiling, pushed over by the surcharges.
        assert!(price_order(&[item(u32::MAX, 1)], 0, &policy).is_none());
    }
}
