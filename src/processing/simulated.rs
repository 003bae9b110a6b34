use std::time::Duration;

use super::{BusinessRules, OrderProcessor, ProcessingOutcome};
use crate::config::DispatcherConfig;
use crate::constants::{limits, Priority};
use crate::models::Order;

/// Stand-in for real business logic.
///
/// Sleeps for `priority tier × delay_per_priority` so that lower priorities are
/// observably slower, then runs the business rules.
#[derive(Debug, Clone)]
pub struct SimulatedProcessor {
    rules: BusinessRules,
    delay_per_priority: Duration,
}

impl Default for SimulatedProcessor {
    fn default() -> Self {
        Self {
            rules: BusinessRules::default(),
            delay_per_priority: Duration::from_millis(limits::PROCESSING_DELAY_PER_PRIORITY_MS),
        }
    }
}

impl SimulatedProcessor {
    pub fn new(rules: BusinessRules, delay_per_priority: Duration) -> Self {
        Self {
            rules,
            delay_per_priority,
        }
    }

    pub fn from_config(config: &DispatcherConfig) -> Self {
        Self::new(
            BusinessRules::from(config),
            Duration::from_millis(config.processing_delay_per_priority_ms),
        )
    }

    pub fn rules(&self) -> &BusinessRules {
        &self.rules
    }

    pub fn delay_for(&self, priority: Priority) -> Duration {
        self.delay_per_priority * u32::from(priority.tier())
    }
}

impl OrderProcessor for SimulatedProcessor {
    fn process(&self, order: Order) -> ProcessingOutcome {
        let delay = self.delay_for(order.priority);
        if !delay.is_zero() {
            std::thread::sleep(delay);
        }
        self.rules.apply(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::OrderStatus;
    use crate::models::OrderRequest;
    use std::time::Instant;

    fn order(priority: u8) -> Order {
        OrderRequest {
            amount: 42.0,
            priority: Some(priority),
            items: vec!["mouse".to_string()],
            customer: "c@example.com".to_string(),
            address: "1 Main St".to_string(),
            ..Default::default()
        }
        .into_order()
        .unwrap()
    }

    #[test]
    fn test_delay_scales_with_priority_tier() {
        let processor = SimulatedProcessor::default();
        assert_eq!(processor.delay_for(Priority::High), Duration::from_millis(10));
        assert_eq!(processor.delay_for(Priority::Low), Duration::from_millis(30));
    }

    #[test]
    fn test_process_sleeps_then_applies_rules() {
        let processor =
            SimulatedProcessor::new(BusinessRules::default(), Duration::from_millis(5));

        let started = Instant::now();
        let outcome = processor.process(order(3));

        assert!(started.elapsed() >= Duration::from_millis(15));
        assert!(outcome.success);
        assert_eq!(outcome.order.status, OrderStatus::Processing);
    }

    #[test]
    fn test_from_config() {
        let config = DispatcherConfig {
            processing_delay_per_priority_ms: 0,
            max_order_amount: 10.0,
            ..DispatcherConfig::default()
        };
        let processor = SimulatedProcessor::from_config(&config);

        assert!(processor.delay_for(Priority::Low).is_zero());
        assert_eq!(processor.rules().max_amount, 10.0);
        assert!(!processor.process(order(2)).success);
    }
}
