//! Layered model mapping through one registry
//!
//! Domain records are mapped to transport DTOs for the wire and to view
//! models for display, and DTOs coming back in are mapped onto existing
//! domain records. Run with `RUST_LOG=debug` to see registrations and
//! `RUST_LOG=trace` to see every dispatch.

use std::sync::Arc;

use anyhow::Context;
use log::{info, warn};
use obj_mapper::{
    DelegateMappingHost, HostConfig, MapWith, Mappable, Mapper, MapperConfig, descriptor,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq)]
struct Person {
    id: u32,
    first_name: String,
    last_name: String,
    birth_year: i32,
}

/// A person who only exists in an old export format
#[derive(Debug, Clone)]
struct ArchivedPerson {
    id: u32,
    full_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
struct PersonDto {
    id: u32,
    name: String,
    birth_year: i32,
}

#[derive(Debug, Clone, Default, PartialEq)]
struct PersonView {
    title: String,
}

fn build_host() -> obj_mapper::Result<DelegateMappingHost> {
    let host = DelegateMappingHost::with_config(
        HostConfig::default()
            .with_name("layers")
            .with_initial_capacity(8),
    );

    host.add_mapping(|person: &Person| PersonDto {
        id: person.id,
        name: format!("{} {}", person.first_name, person.last_name),
        birth_year: person.birth_year,
    })?;
    host.add_populate_mapping(|dto: &PersonDto, person: &mut Person| {
        let (first, last) = dto.name.split_once(' ').unwrap_or((dto.name.as_str(), ""));
        person.first_name = first.to_string();
        person.last_name = last.to_string();
        person.birth_year = dto.birth_year;
    })?;
    host.add_mappings(
        |person: &Person| PersonView {
            title: format!("{}, {}", person.last_name, person.first_name),
        },
        |person: &Person, view: &mut PersonView| {
            view.title = format!("{}, {}", person.last_name, person.first_name);
        },
    )?;
    host.add_mapping(|archived: &ArchivedPerson| PersonView {
        title: format!("{} (archived #{})", archived.full_name, archived.id),
    })?;

    Ok(host)
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let host = Arc::new(build_host().context("registering layer mappings")?);
    let mapper = Mapper::with_config(Arc::clone(&host), MapperConfig::default());

    let mut people = vec![
        Person {
            id: 1,
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            birth_year: 1815,
        },
        Person {
            id: 2,
            first_name: "Alan".into(),
            last_name: "Turing".into(),
            birth_year: 1912,
        },
    ];

    // Domain -> transport
    let dtos = people
        .iter()
        .map_with(&mapper, descriptor::<Person, PersonDto>())?;
    info!("Outgoing payload: {}", serde_json::to_string(&dtos)?);

    // Transport -> existing domain records
    let incoming: Vec<PersonDto> = serde_json::from_str(
        r#"[{"id":1,"name":"Augusta Lovelace","birth_year":1815},
            {"id":2,"name":"Alan Turing","birth_year":1912}]"#,
    )?;
    mapper.map_populate_many(descriptor::<PersonDto, Person>(), &incoming, &mut people)?;
    info!("Updated first record: {:?}", people[0]);

    // Domain and archive records -> view, dispatched on the value's type
    let archived = ArchivedPerson {
        id: 7,
        full_name: "Grace Hopper".into(),
    };
    let mixed: [&dyn Mappable; 3] = [&people[0] as &dyn Mappable, &archived, &people[1]];
    let views: Vec<PersonView> = mixed.into_iter().runtime_map_with(&mapper)?;
    for view in &views {
        info!("View: {}", view.title);
    }

    // Missing rules surface as errors, not silent defaults
    if let Err(err) = mapper.map_create(descriptor::<PersonView, PersonDto>(), &views[0]) {
        warn!("Expected failure: {err}");
    }

    info!(
        "Registry snapshot:\n{}",
        serde_json::to_string_pretty(&host.report())?
    );

    Ok(())
}
