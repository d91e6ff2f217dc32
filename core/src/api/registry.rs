//! Endpoint registry for managing available endpoints

use crate::api::{Endpoint, EndpointExecutor};
use crate::config::AppConfig;
use std::collections::HashMap;
use std::sync::Arc;

/// Registry for managing endpoint creation and registration
pub struct EndpointRegistry {
    factories: HashMap<String, Box<dyn EndpointFactory>>,
}

/// Factory trait for creating endpoints
pub trait EndpointFactory: Send + Sync {
    /// Create a new instance of the endpoint bound to `config`
    fn create(&self, config: Arc<AppConfig>) -> Box<dyn Endpoint>;

    /// Get the name of the endpoint this factory creates
    fn endpoint_name(&self) -> &str;

    /// Get the description of the endpoint this factory creates
    fn endpoint_description(&self) -> &str;
}

impl EndpointRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Register an endpoint factory
    pub fn register_factory(&mut self, factory: Box<dyn EndpointFactory>) {
        self.factories
            .insert(factory.endpoint_name().to_string(), factory);
    }

    /// Create an endpoint by name
    pub fn create_endpoint(&self, name: &str, config: Arc<AppConfig>) -> Option<Box<dyn Endpoint>> {
        self.factories.get(name).map(|factory| factory.create(config))
    }

    /// List all available endpoint names, sorted
    pub fn list_endpoints(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.factories.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// Get endpoint name and description
    pub fn get_endpoint_info(&self, name: &str) -> Option<(&str, &str)> {
        self.factories
            .get(name)
            .map(|factory| (factory.endpoint_name(), factory.endpoint_description()))
    }

    /// Create an executor with every registered endpoint
    pub fn create_executor(&self, config: Arc<AppConfig>) -> EndpointExecutor {
        let mut executor = EndpointExecutor::new();

        for factory in self.factories.values() {
            executor.register_endpoint(factory.create(Arc::clone(&config)));
        }

        executor
    }
}

impl Default for EndpointRegistry {
    fn default() -> Self {
        let mut registry = Self::new();

        // Register built-in endpoints
        registry.register_factory(Box::new(crate::api::builtin::SearchEndpointFactory));
        registry.register_factory(Box::new(crate::api::builtin::ListDirectoryEndpointFactory));
        registry.register_factory(Box::new(crate::api::builtin::OpenInEditorEndpointFactory));

        registry
    }
}

/// Macro to help implement endpoint factories
#[macro_export]
macro_rules! impl_endpoint_factory {
    ($factory:ident, $endpoint:ident, $name:expr, $description:expr) => {
        pub struct $factory;

        impl $crate::api::EndpointFactory for $factory {
            fn create(
                &self,
                config: ::std::sync::Arc<$crate::config::AppConfig>,
            ) -> Box<dyn $crate::api::Endpoint> {
                Box::new($endpoint::new(config))
            }

            fn endpoint_name(&self) -> &str {
                $name
            }

            fn endpoint_description(&self) -> &str {
                $description
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Arc<AppConfig> {
        Arc::new(AppConfig::new("/usr/bin/rg"))
    }

    #[test]
    fn test_default_registry_has_all_endpoints() {
        let registry = EndpointRegistry::default();
        assert_eq!(
            registry.list_endpoints(),
            vec!["list_directory", "open_in_editor", "run_ripgrep"]
        );
    }

    #[test]
    fn test_endpoint_creation() {
        let registry = EndpointRegistry::default();

        for name in registry.list_endpoints() {
            let endpoint = registry
                .create_endpoint(name, config())
                .unwrap_or_else(|| panic!("Failed to create endpoint '{}'", name));
            assert_eq!(endpoint.name(), name, "Endpoint name mismatch for '{}'", name);
            assert!(
                !endpoint.description().is_empty(),
                "Endpoint '{}' has empty description",
                name
            );

            let schema = endpoint.parameters_schema();
            assert_eq!(
                schema["type"], "object",
                "Endpoint '{}' schema type is not 'object'",
                name
            );
            assert!(schema["properties"].is_object());
        }
    }

    #[test]
    fn test_endpoint_info() {
        let registry = EndpointRegistry::default();

        for name in registry.list_endpoints() {
            let (info_name, description) = registry.get_endpoint_info(name).unwrap();
            assert_eq!(info_name, name);
            assert!(!description.is_empty());
        }
        assert!(registry.get_endpoint_info("missing").is_none());
    }

    #[test]
    fn test_endpoint_examples() {
        let registry = EndpointRegistry::default();

        for name in registry.list_endpoints() {
            let endpoint = registry.create_endpoint(name, config()).unwrap();
            let examples = endpoint.examples();
            assert!(!examples.is_empty(), "Endpoint '{}' has no examples", name);

            for (i, example) in examples.iter().enumerate() {
                assert!(
                    !example.description.is_empty(),
                    "Endpoint '{}' example {} has empty description",
                    name,
                    i
                );
                assert!(
                    example.parameters.is_object(),
                    "Endpoint '{}' example {} parameters is not an object",
                    name,
                    i
                );
                assert!(!example.expected_result.is_empty());
            }
        }
    }

    #[test]
    fn test_executor_creation() {
        let registry = EndpointRegistry::default();
        let executor = registry.create_executor(config());
        assert_eq!(executor.list_endpoints(), registry.list_endpoints());
    }
}
