//! Builders for orders and dispatchers used across integration tests.

use crossbeam::channel::{bounded, Receiver, Sender};
use order_dispatch::config::DispatcherConfig;
use order_dispatch::dispatcher::Dispatcher;
use order_dispatch::models::{Order, OrderRequest};
use order_dispatch::processing::{BusinessRules, ProcessingOutcome};
use std::time::{Duration, Instant};

/// Builder for valid order requests with overridable fields
#[derive(Debug, Clone)]
pub struct OrderBuilder {
    request: OrderRequest,
}

impl Default for OrderBuilder {
    fn default() -> Self {
        Self {
            request: OrderRequest {
                id: None,
                amount: 100.0,
                items: vec!["widget".to_string()],
                customer: "customer@example.com".to_string(),
                status: Some("pending".to_string()),
                address: "1 Main St".to_string(),
                notes: None,
                priority: Some(2),
                created_at: None,
            },
        }
    }
}

impl OrderBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: &str) -> Self {
        self.request.id = Some(id.to_string());
        self
    }

    pub fn amount(mut self, amount: f64) -> Self {
        self.request.amount = amount;
        self
    }

    pub fn item_count(mut self, count: usize) -> Self {
        self.request.items = (0..count).map(|i| format!("item_{i}")).collect();
        self
    }

    pub fn priority(mut self, priority: u8) -> Self {
        self.request.priority = Some(priority);
        self
    }

    pub fn request(self) -> OrderRequest {
        self.request
    }

    pub fn build(self) -> Order {
        self.request.into_order().expect("builder produces valid orders")
    }
}

/// Config with no simulated latency
pub fn instant_config(workers: usize, capacity: usize) -> DispatcherConfig {
    DispatcherConfig::new(workers, capacity).with_processing_delay_ms(0)
}

/// A processor that blocks until released, then applies the default rules.
///
/// Every call waits for one token on the gate, so tests control exactly when
/// each order finishes processing.
pub struct Gate {
    release: Sender<()>,
    wait: Receiver<()>,
}

impl Gate {
    pub fn new() -> Self {
        let (release, wait) = bounded(1024);
        Self { release, wait }
    }

    pub fn release(&self, count: usize) {
        for _ in 0..count {
            self.release.send(()).expect("gate receiver alive");
        }
    }

    pub fn processor(&self) -> impl Fn(Order) -> ProcessingOutcome + Send + Sync + 'static {
        let wait = self.wait.clone();
        let rules = BusinessRules::default();
        move |order| {
            let _ = wait.recv();
            rules.apply(order)
        }
    }
}

/// Poll until `condition` holds or the timeout elapses
pub fn wait_until(timeout: Duration, mut condition: impl FnMut() -> bool) -> bool {
    let deadline = Instant::now() + timeout;
    while Instant::now() < deadline {
        if condition() {
            return true;
        }
        std::thread::sleep(Duration::from_millis(2));
    }
    condition()
}

/// Start a dispatcher with the simulated processor and no latency
pub fn instant_dispatcher(workers: usize, capacity: usize) -> Dispatcher {
    Dispatcher::with_simulated_processing(instant_config(workers, capacity))
        .expect("valid config")
}
