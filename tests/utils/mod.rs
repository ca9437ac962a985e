use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use obj_mapper::{
    AnyMapping, DelegateMapping, DelegateMappingHost, DescriptorKey, Mapper, MapperConfig,
    MappingHost, descriptor,
};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Source {
    pub first: Option<String>,
    pub second: Option<i32>,
    pub third: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Destination {
    pub dst_first: Option<String>,
    pub dst_second: Option<i32>,
    pub dst_third: Option<String>,
}

/// A second source type, registered separately, for runtime dispatch tests
#[derive(Debug, Clone, PartialEq)]
pub struct LegacySource {
    pub label: String,
}

/// Initialise logging once per test binary
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[must_use]
pub fn generate_source(index: i32) -> Source {
    Source {
        first: Some(format!("source {index} first value")),
        second: Some((43 * index) % 31),
        third: Some(format!("source {index} third value")),
    }
}

#[must_use]
pub fn generate_source_collection(size: i32) -> Vec<Source> {
    (0..size).map(generate_source).collect()
}

/// Sources with every third element (0, 3, 6, ...) absent when `with_nulls`
#[must_use]
pub fn generate_source_collection_nullable(size: i32, with_nulls: bool) -> Vec<Option<Source>> {
    (0..size)
        .map(|index| {
            if with_nulls && index % 3 == 0 {
                None
            } else {
                Some(generate_source(index))
            }
        })
        .collect()
}

#[must_use]
pub fn generate_destination(index: i32) -> Destination {
    Destination {
        dst_first: Some(format!("destination {index} first value")),
        dst_second: Some(index),
        dst_third: Some(format!("destination {index} third value")),
    }
}

#[must_use]
pub fn generate_destination_collection(size: i32) -> Vec<Destination> {
    (0..size).map(generate_destination).collect()
}

/// Destinations with every other element absent when `with_nulls`
#[must_use]
pub fn generate_destination_collection_nullable(
    size: i32,
    with_nulls: bool,
) -> Vec<Option<Destination>> {
    (0..size)
        .map(|index| {
            if with_nulls && index % 2 == 1 {
                None
            } else {
                Some(generate_destination(index))
            }
        })
        .collect()
}

pub fn plain_mapping(source: &Source) -> Destination {
    Destination {
        dst_first: source.first.clone(),
        dst_second: source.second,
        dst_third: source.third.clone(),
    }
}

pub fn plain_populate(source: &Source, destination: &mut Destination) {
    destination.dst_first.clone_from(&source.first);
    destination.dst_second = source.second;
    destination.dst_third.clone_from(&source.third);
}

pub fn legacy_mapping(source: &LegacySource) -> Destination {
    Destination {
        dst_first: Some(source.label.clone()),
        dst_second: None,
        dst_third: None,
    }
}

pub fn assert_mapped(source: &Source, destination: &Destination) {
    assert_eq!(source.first, destination.dst_first);
    assert_eq!(source.second, destination.dst_second);
    assert_eq!(source.third, destination.dst_third);
}

pub fn assert_mapped_all(sources: &[Source], destinations: &[Destination]) {
    assert_eq!(sources.len(), destinations.len());
    for (source, destination) in sources.iter().zip(destinations) {
        assert_mapped(source, destination);
    }
}

pub fn assert_mapped_nullable(sources: &[Option<Source>], destinations: &[Option<Destination>]) {
    assert_eq!(sources.len(), destinations.len());
    for (source, destination) in sources.iter().zip(destinations) {
        match (source, destination) {
            (Some(source), Some(destination)) => assert_mapped(source, destination),
            (None, None) => {}
            (source, destination) => {
                panic!("presence differs: source {source:?}, destination {destination:?}")
            }
        }
    }
}

/// Host wrapper counting lookups, to observe how often the mapper resolves
#[derive(Debug, Default)]
pub struct CountingHost {
    pub inner: DelegateMappingHost,
    lookups: AtomicUsize,
}

impl CountingHost {
    #[must_use]
    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

impl MappingHost for CountingHost {
    fn find(&self, descriptor: &DescriptorKey) -> Option<Arc<dyn AnyMapping>> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.inner.find(descriptor)
    }
}

/// Mapper over a counting host with `Source -> Destination` registered both
/// ways, plus counters for how often each function ran
pub struct Fixture {
    pub host: Arc<CountingHost>,
    pub mapper: Mapper<CountingHost>,
    pub creates: Arc<AtomicUsize>,
    pub populates: Arc<AtomicUsize>,
}

impl Fixture {
    #[must_use]
    pub fn new() -> Self {
        Self::with_mapping(true, true)
    }

    /// Register only the halves asked for
    #[must_use]
    pub fn with_mapping(create: bool, populate: bool) -> Self {
        init_logging();

        let creates = Arc::new(AtomicUsize::new(0));
        let populates = Arc::new(AtomicUsize::new(0));

        let mut mapping = DelegateMapping::empty();
        if create {
            let creates = Arc::clone(&creates);
            mapping = mapping.with_create(move |source: &Source| {
                creates.fetch_add(1, Ordering::SeqCst);
                plain_mapping(source)
            });
        }
        if populate {
            let populates = Arc::clone(&populates);
            mapping = mapping.with_populate(move |source: &Source, destination: &mut Destination| {
                populates.fetch_add(1, Ordering::SeqCst);
                plain_populate(source, destination);
            });
        }

        let host = Arc::new(CountingHost::default());
        host.inner
            .register(descriptor::<Source, Destination>(), mapping)
            .expect("fresh host accepts the first registration");
        host.inner
            .add_mapping(legacy_mapping)
            .expect("fresh host accepts the legacy registration");

        let mapper = Mapper::with_config(
            Arc::clone(&host),
            MapperConfig::default().with_log_dispatch(true),
        );

        Self {
            host,
            mapper,
            creates,
            populates,
        }
    }

    #[must_use]
    pub fn creates(&self) -> usize {
        self.creates.load(Ordering::SeqCst)
    }

    #[must_use]
    pub fn populates(&self) -> usize {
        self.populates.load(Ordering::SeqCst)
    }

    #[must_use]
    pub fn lookups(&self) -> usize {
        self.host.lookups()
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}
