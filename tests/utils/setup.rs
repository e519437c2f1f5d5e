use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;

use highlow::{FeatureHandler, HelperConfig, HighLowHelper, ResetPolicy};

use super::mocks::RecordingSink;

// ============================================================================
// Test Setup Infrastructure
// ============================================================================

pub struct TestSetup {
    pub helper: HighLowHelper,
    pub sink: RecordingSink,
}

pub struct TestSetupBuilder {
    config: HelperConfig,
    activate: bool,
}

impl TestSetupBuilder {
    pub fn new() -> Self {
        Self {
            config: HelperConfig::default(),
            activate: true,
        }
    }

    pub fn with_reset_policy(mut self, policy: ResetPolicy) -> Self {
        self.config.reset_policy = policy;
        self
    }

    pub fn with_auto_choose(mut self) -> Self {
        self.config.auto_choose = true;
        self
    }

    pub fn inactive(mut self) -> Self {
        self.activate = false;
        self
    }

    pub fn build(self) -> TestSetup {
        let sink = RecordingSink::new();
        let mut helper = HighLowHelper::new(self.config, Arc::new(sink.clone()))
            .with_rng(StdRng::seed_from_u64(1234));

        if self.activate {
            helper.on_activate();
        }

        TestSetup { helper, sink }
    }
}
