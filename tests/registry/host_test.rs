use std::sync::Arc;

use crate::utils::{
    Destination, Fixture, LegacySource, Source, generate_source, init_logging, plain_mapping,
    plain_populate,
};
use obj_mapper::{
    AnyMapping, DelegateMapping, DelegateMappingHost, DescriptorKey, HostConfig, HostReport,
    Mapper, MapperError, MapperErrorReason, Mapping, MappingHost, MappingHostExt, MappingMode,
    TypeKey, descriptor,
};

/// Hand-written mapping that uppercases the first field
struct ShoutingMapping;

impl Mapping<Source, Destination> for ShoutingMapping {
    fn create_from(&self, source: &Source) -> obj_mapper::Result<Destination> {
        let mut destination = Destination::default();
        self.populate(source, &mut destination)?;
        Ok(destination)
    }

    fn populate(&self, source: &Source, destination: &mut Destination) -> obj_mapper::Result<()> {
        plain_populate(source, destination);
        destination.dst_first = source.first.as_deref().map(str::to_uppercase);
        Ok(())
    }

    fn supports(&self, _mode: MappingMode) -> bool {
        true
    }
}

/// Hand-written mapping that can only write onto existing destinations
struct OverwriteOnly;

impl Mapping<LegacySource, Destination> for OverwriteOnly {
    fn create_from(&self, _source: &LegacySource) -> obj_mapper::Result<Destination> {
        Err(MapperError::MappingUnsupported(MappingMode::Create))
    }

    fn populate(
        &self,
        source: &LegacySource,
        destination: &mut Destination,
    ) -> obj_mapper::Result<()> {
        destination.dst_first = Some(source.label.clone());
        Ok(())
    }

    fn supports(&self, mode: MappingMode) -> bool {
        mode == MappingMode::Populate
    }
}

/// Host that answers every lookup with the same mapping
struct MisroutingHost {
    mapping: Arc<dyn AnyMapping>,
}

impl MappingHost for MisroutingHost {
    fn find(&self, _descriptor: &DescriptorKey) -> Option<Arc<dyn AnyMapping>> {
        Some(Arc::clone(&self.mapping))
    }
}

#[test]
fn test_register_custom_mapping() -> anyhow::Result<()> {
    init_logging();
    let host = DelegateMappingHost::with_config(HostConfig::default().with_name("custom"));
    host.register(descriptor::<Source, Destination>(), ShoutingMapping)?;
    let mapper = Mapper::new(Arc::new(host));

    let destination = mapper.map_create(descriptor::<Source, Destination>(), &generate_source(1))?;

    assert_eq!(destination.dst_first.as_deref(), Some("SOURCE 1 FIRST VALUE"));
    assert_eq!(mapper.host().name(), "custom");
    Ok(())
}

#[test]
fn test_duplicate_registration() {
    let fixture = Fixture::new();

    let err = fixture
        .host
        .inner
        .add_mapping(plain_mapping)
        .unwrap_err();

    assert!(err.is_duplicate());
    assert_eq!(err.reason(), MapperErrorReason::MappingAlreadyExists);
    assert_eq!(
        err,
        MapperError::DuplicateMapping {
            descriptor: DescriptorKey::of::<Source, Destination>()
        }
    );
    assert_eq!(fixture.host.inner.len(), 2);
}

#[test]
fn test_duplicate_is_rejected_regardless_of_modes() {
    let host = DelegateMappingHost::new();
    host.add_populate_mapping(plain_populate)
        .expect("first registration");

    let err = host
        .register_delegate(
            descriptor::<Source, Destination>(),
            DelegateMapping::from_create(plain_mapping),
        )
        .unwrap_err();

    assert!(err.is_duplicate());
    let mapping = host
        .find_mapping(descriptor::<Source, Destination>())
        .expect("types line up")
        .expect("still registered");
    assert!(!mapping.supports(MappingMode::Create));
}

#[test]
fn test_lookup_helpers() {
    let fixture = Fixture::new();
    let host = &fixture.host.inner;

    assert!(host.contains(&DescriptorKey::of::<Source, Destination>()));
    assert!(host.has_mapping::<LegacySource, Destination>());
    assert!(!host.has_mapping::<Destination, Source>());
    assert!(
        host.find_mapping(descriptor::<Destination, Source>())
            .expect("absent is not an error")
            .is_none()
    );
}

#[test]
fn test_descriptors_are_sorted_by_name() {
    let fixture = Fixture::new();

    let descriptors = fixture.host.inner.descriptors();

    assert_eq!(descriptors.len(), 2);
    assert!(descriptors.contains(&DescriptorKey::of::<Source, Destination>()));
    assert!(descriptors.contains(&DescriptorKey::of::<LegacySource, Destination>()));
    assert!(descriptors.is_sorted_by_key(|key| (key.source().name(), key.destination().name())));
}

#[test]
fn test_report_serializes_to_json() -> anyhow::Result<()> {
    let host = DelegateMappingHost::with_config(HostConfig::default().with_name("report"));
    host.add_mappings(plain_mapping, plain_populate)?;
    host.add_mapping(|legacy: &LegacySource| Source {
        first: Some(legacy.label.clone()),
        ..Source::default()
    })?;
    host.add_populate_mapping(|_: &Destination, _: &mut Source| {})?;

    let report = host.report();
    let json = serde_json::to_string_pretty(&report)?;
    let parsed: HostReport = serde_json::from_str(&json)?;

    assert_eq!(parsed, report);
    assert_eq!(report.name, "report");
    assert_eq!(report.mappings.len(), 3);
    assert_eq!(report.create_only().count(), 1);
    assert_eq!(report.populate_only().count(), 1);

    let value: serde_json::Value = serde_json::to_value(&report)?;
    assert_eq!(value["mappings"].as_array().map(Vec::len), Some(3));
    Ok(())
}

#[test]
fn test_misrouted_mapping_is_type_mismatch() {
    init_logging();
    let host = DelegateMappingHost::new();
    host.add_mapping(plain_mapping).expect("first registration");
    let mapping = host
        .find(&DescriptorKey::of::<Source, Destination>())
        .expect("registered");
    let mapper = Mapper::new(Arc::new(MisroutingHost { mapping }));

    let err = mapper
        .map_create(
            descriptor::<LegacySource, Destination>(),
            &LegacySource {
                label: "legacy".into(),
            },
        )
        .unwrap_err();

    assert_eq!(
        err,
        MapperError::TypeMismatch {
            expected: TypeKey::of::<LegacySource>(),
            found: TypeKey::of::<Source>(),
        }
    );
    assert_eq!(err.reason(), MapperErrorReason::MappingTypeMismatch);
}

#[test]
fn test_mapper_shares_host_across_threads() -> anyhow::Result<()> {
    let fixture = Fixture::new();
    let sources: Arc<Vec<Source>> = Arc::new((0..8).map(generate_source).collect());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let mapper = fixture.mapper.clone();
            let sources = Arc::clone(&sources);
            std::thread::spawn(move || {
                mapper.map_create_many(descriptor::<Source, Destination>(), sources.iter())
            })
        })
        .collect();

    for handle in handles {
        let destinations = handle
            .join()
            .map_err(|_| anyhow::anyhow!("mapping thread panicked"))??;
        assert_eq!(destinations.len(), 8);
    }
    assert_eq!(fixture.creates(), 32);
    Ok(())
}

#[test]
fn test_report_uses_declared_capabilities() -> anyhow::Result<()> {
    let host = DelegateMappingHost::new();
    host.register(descriptor::<LegacySource, Destination>(), OverwriteOnly)?;

    let report = host.report();

    assert_eq!(report.mappings.len(), 1);
    assert!(!report.mappings[0].create);
    assert!(report.mappings[0].populate);
    assert_eq!(report.populate_only().count(), 1);
    Ok(())
}

#[test]
fn test_resolved_mapping_reports_modes_with_both_traits_in_scope() -> anyhow::Result<()> {
    let host = DelegateMappingHost::new();
    host.register(descriptor::<LegacySource, Destination>(), OverwriteOnly)?;
    let mapper = Mapper::new(Arc::new(host));

    let mapping = mapper.resolve(descriptor::<LegacySource, Destination>())?;

    assert!(!mapping.supports(MappingMode::Create));
    assert!(mapping.supports(MappingMode::Populate));
    assert!(!mapping.supports_any(MappingMode::Create));

    let err = mapper
        .map_create(
            descriptor::<LegacySource, Destination>(),
            &LegacySource {
                label: "legacy".into(),
            },
        )
        .unwrap_err();
    assert_eq!(err, MapperError::MappingUnsupported(MappingMode::Create));
    Ok(())
}
