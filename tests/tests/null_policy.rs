use pretty_assertions::assert_eq;
use remap::MapperFactory;
use tests::models::{Destination, Source};

#[test]
fn nulls_are_mapped_by_default() {
    let mut factory = MapperFactory::new();
    factory
        .class_map::<Source, Destination>()
        .by_default()
        .register()
        .unwrap();

    let mut dest = Destination::new(Some("Clinton"), 55);
    factory
        .mapper_facade()
        .map_into(&Source::new(None, 10), &mut dest)
        .unwrap();

    assert_eq!(dest, Destination::new(None, 10));
}

#[test]
fn factory_level_policy_applies_to_derived_class_maps() {
    let factory = MapperFactory::builder().map_nulls(false).build();

    let mut dest = Destination::new(Some("Clinton"), 55);
    factory
        .mapper_facade()
        .map_into(&Source::new(None, 10), &mut dest)
        .unwrap();

    assert_eq!(dest, Destination::new(Some("Clinton"), 10));
}

#[test]
fn class_level_policy_overrides_factory_level() {
    let mut factory = MapperFactory::builder().map_nulls(false).build();
    factory
        .class_map::<Source, Destination>()
        .map_nulls(true)
        .by_default()
        .register()
        .unwrap();

    let mut dest = Destination::new(Some("Clinton"), 55);
    factory
        .mapper_facade()
        .map_into(&Source::new(None, 10), &mut dest)
        .unwrap();

    assert_eq!(dest, Destination::new(None, 10));
}

#[test]
fn class_level_suppression() {
    let mut factory = MapperFactory::new();
    factory
        .class_map::<Source, Destination>()
        .field("age", "age")
        .map_nulls(false)
        .field("name", "name")
        .by_default()
        .register()
        .unwrap();

    let mut dest = Destination::new(Some("Clinton"), 55);
    factory
        .mapper_facade()
        .map_into(&Source::new(None, 10), &mut dest)
        .unwrap();

    assert_eq!(dest, Destination::new(Some("Clinton"), 10));
}

#[test]
fn class_level_policies_are_direction_specific() {
    let mut factory = MapperFactory::new();
    factory
        .class_map::<Source, Destination>()
        .field("age", "age")
        .map_nulls_in_reverse(false)
        .field("name", "name")
        .by_default()
        .register()
        .unwrap();

    let mapper = factory.mapper_facade();

    // B -> A suppresses nulls
    let mut source = Source::new(Some("Vin"), 44);
    mapper
        .map_into(&Destination::new(None, 10), &mut source)
        .unwrap();
    assert_eq!(source, Source::new(Some("Vin"), 10));

    // A -> B still maps them
    let mut dest = Destination::new(Some("Vin"), 44);
    mapper.map_into(&Source::new(None, 10), &mut dest).unwrap();
    assert_eq!(dest, Destination::new(None, 10));
}

#[test]
fn field_level_policy_overrides_class_level() {
    let mut factory = MapperFactory::new();
    factory
        .class_map::<Source, Destination>()
        .map_nulls(true)
        .field("age", "age")
        .field_map("name", "name")
        .map_nulls(false)
        .add()
        .by_default()
        .register()
        .unwrap();

    let mapper = factory.mapper_facade();

    let mut dest = Destination::new(Some("X"), 55);
    mapper.map_into(&Source::new(None, 10), &mut dest).unwrap();
    assert_eq!(dest, Destination::new(Some("X"), 10));

    // A fresh destination keeps its default
    let dest: Destination = mapper.map(&Source::new(None, 10)).unwrap();
    assert_eq!(dest, Destination::new(None, 10));
}

#[test]
fn field_level_mapping_of_nulls_overrides_class_suppression() {
    let mut factory = MapperFactory::new();
    factory
        .class_map::<Source, Destination>()
        .map_nulls(false)
        .field_map("name", "name")
        .map_nulls(true)
        .add()
        .field("age", "age")
        .register()
        .unwrap();

    let mut dest = Destination::new(Some("X"), 55);
    factory
        .mapper_facade()
        .map_into(&Source::new(None, 10), &mut dest)
        .unwrap();

    assert_eq!(dest, Destination::new(None, 10));
}

#[test]
fn field_level_reverse_policy() {
    let mut factory = MapperFactory::new();
    factory
        .class_map::<Source, Destination>()
        .field_map("name", "name")
        .map_nulls_in_reverse(false)
        .add()
        .by_default()
        .register()
        .unwrap();

    let mapper = factory.mapper_facade();

    let mut source = Source::new(Some("Vin"), 44);
    mapper
        .map_into(&Destination::new(None, 10), &mut source)
        .unwrap();
    assert_eq!(source, Source::new(Some("Vin"), 10));

    let mut dest = Destination::new(Some("Vin"), 44);
    mapper.map_into(&Source::new(None, 10), &mut dest).unwrap();
    assert_eq!(dest, Destination::new(None, 10));
}
