use reviewload_api_interface::ApiService;
use reviewload_config::Config;

use crate::{CoreModule, Scenario};

pub struct CoreContext<'a> {
    pub config: &'a Config,
    pub core_module: &'a CoreModule,
    pub scenario: &'a Scenario,
    pub api_service: &'a (dyn ApiService + 'a),
}

#[cfg(any(test, feature = "testkit"))]
pub(crate) mod tests {
    use reviewload_api_interface::MockApiService;
    use reviewload_config::Config;

    use crate::{CoreContext, CoreModule, Scenario};

    #[allow(dead_code)]
    pub struct CoreContextTest {
        pub config: Config,
        pub core_module: CoreModule,
        pub scenario: Scenario,
        pub api_service: MockApiService,
    }

    impl CoreContextTest {
        #[allow(dead_code)]
        pub fn new() -> Self {
            let mut config = Config::from_env_no_version().unwrap();
            config.scenario.team_name = "payments".into();
            config.scenario.author_id = "u1".into();

            Self {
                scenario: Scenario::from_config(&config.scenario),
                config,
                core_module: CoreModule::builder().build(),
                api_service: MockApiService::new(),
            }
        }

        #[allow(dead_code)]
        pub fn as_context(&self) -> CoreContext {
            CoreContext {
                config: &self.config,
                core_module: &self.core_module,
                scenario: &self.scenario,
                api_service: &self.api_service,
            }
        }
    }
}
