//! Policy configuration.
//!
//! The magic numbers of the business rules — fee percentages, the dispatch
//! radius, the cancellation grace window — live here rather than inline, with
//! environment-variable overrides for deployments.

use std::str::FromStr;

/// Pricing surcharges applied at order creation.
#[derive(Debug, Clone)]
pub struct PricingPolicy {
    /// Platform fee as a percentage of the subtotal.
    pub platform_fee_percent: u32,
    /// Taxes as a percentage of the subtotal.
    pub tax_percent: u32,
    /// Delivery fee used when the restaurant has none configured.
    pub default_delivery_fee: u32,
}

impl Default for PricingPolicy {
    fn default() -> Self {
        Self {
            platform_fee_percent: 2,
            tax_percent: 5,
            default_delivery_fee: 30,
        }
    }
}

/// Rider dispatch tuning.
#[derive(Debug, Clone)]
pub struct DispatchPolicy {
    /// Search radius when the rider supplies a location but no radius.
    pub default_radius_km: f64,
    /// Ceiling on the number of ready orders returned to a rider.
    pub max_results: usize,
}

impl Default for DispatchPolicy {
    fn default() -> Self {
        Self {
            default_radius_km: 10.0,
            max_results: 20,
        }
    }
}

/// Order lifecycle timing rules.
#[derive(Debug, Clone)]
pub struct OrderPolicy {
    /// How long after creation a customer may still cancel a confirmed order.
    pub cancellation_grace_minutes: i64,
    /// Offset used for the estimated delivery time at creation.
    pub delivery_estimate_minutes: i64,
}

impl Default for OrderPolicy {
    fn default() -> Self {
        Self {
            cancellation_grace_minutes: 5,
            delivery_estimate_minutes: 45,
        }
    }
}

/// Aggregate configuration handed to the order actor.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub pricing: PricingPolicy,
    pub dispatch: DispatchPolicy,
    pub orders: OrderPolicy,
}

impl Config {
    /// Builds a config from the environment, falling back to defaults for
    /// anything unset or unparseable.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            pricing: PricingPolicy {
                platform_fee_percent: env_or(
                    "PLATFORM_FEE_PERCENT",
                    defaults.pricing.platform_fee_percent,
                ),
                tax_percent: env_or("TAX_PERCENT", defaults.pricing.tax_percent),
                default_delivery_fee: env_or(
                    "DEFAULT_DELIVERY_FEE",
                    defaults.pricing.default_delivery_fee,
                ),
            },
            dispatch: DispatchPolicy {
                default_radius_km: env_or(
                    "DISPATCH_RADIUS_KM",
                    defaults.dispatch.default_radius_km,
                ),
                max_results: env_or("DISPATCH_MAX_RESULTS", defaults.dispatch.max_results),
            },
            orders: OrderPolicy {
                cancellation_grace_minutes: env_or(
                    "CANCELLATION_GRACE_MINUTES",
                    defaults.orders.cancellation_grace_minutes,
                ),
                delivery_estimate_minutes: env_or(
                    "DELIVERY_ESTIMATE_MINUTES",
                    defaults.orders.delivery_estimate_minutes,
                ),
            },
        }
    }
}

fn env_or<T: FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_policy() {
        let config = Config::default();
        assert_eq!(config.pricing.platform_fee_percent, 2);
        assert_eq!(config.pricing.tax_percent, 5);
        assert_eq!(config.orders.cancellation_grace_minutes, 5);
        assert_eq!(config.dispatch.max_results, 20);
    }

    #[test]
    fn env_or_falls_back_on_garbage() {
        std::env::set_var("DELIVERY_CORE_TEST_GARBAGE", "not-a-number");
        let value: u32 = env_or("DELIVERY_CORE_TEST_GARBAGE", 7);
        assert_eq!(value, 7);
        std::env::remove_var("DELIVERY_CORE_TEST_GARBAGE");
    }
}
