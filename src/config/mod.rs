//! Configuration for mapping hosts and mappers.

/// Configuration for the [`DelegateMappingHost`](crate::DelegateMappingHost)
#[derive(Debug, Clone)]
pub struct HostConfig {
    /// Name used to tell hosts apart in log output and reports
    pub name: String,
    /// Number of registrations to reserve space for up front
    pub initial_capacity: usize,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            name: "default".to_string(),
            initial_capacity: 32,
        }
    }
}

impl HostConfig {
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[must_use]
    pub fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }
}

/// Configuration for the [`Mapper`](crate::Mapper)
#[derive(Debug, Clone)]
pub struct MapperConfig {
    /// Log every resolution and collection call at trace level
    pub log_dispatch: bool,
}

impl Default for MapperConfig {
    fn default() -> Self {
        Self { log_dispatch: true }
    }
}

impl MapperConfig {
    #[must_use]
    pub fn with_log_dispatch(mut self, log_dispatch: bool) -> Self {
        self.log_dispatch = log_dispatch;
        self
    }
}
