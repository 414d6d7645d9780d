use pretty_assertions::assert_eq;
use remap::{Mappable, MapperFactory, PathErrorKind};
use tests::models::{Destination, Person, PersonNameList, Personne, Source};

#[derive(Debug, Default, Mappable)]
struct Raw {
    age: String,
}

#[derive(Debug, Default, PartialEq, Mappable)]
struct Parsed {
    age: i32,
}

#[derive(Debug, Default, Mappable)]
struct Strict {
    name: String,
}

#[test]
fn unregistered_pairs_fail_without_auto_mapping() {
    let factory = MapperFactory::builder().use_auto_mapping(false).build();

    let err = factory
        .mapper_facade()
        .map::<_, Destination>(&Source::new(Some("Joe"), 1))
        .unwrap_err();
    assert!(err.is_unregistered_type_pair());
    assert_eq!(
        err.to_string(),
        "no class map registered or derivable for Source -> Destination"
    );

    let err = factory.bound_mapper::<Source, Destination>().unwrap_err();
    assert!(err.is_unregistered_type_pair());
}

#[test]
fn registered_pairs_work_without_auto_mapping() {
    let mut factory = MapperFactory::builder().use_auto_mapping(false).build();
    factory
        .class_map::<Source, Destination>()
        .by_default()
        .register()
        .unwrap();

    let dest: Destination = factory
        .mapper_facade()
        .map(&Source::new(Some("Joe"), 1))
        .unwrap();
    assert_eq!(dest, Destination::new(Some("Joe"), 1));

    let source: Source = factory.mapper_facade().map(&dest).unwrap();
    assert_eq!(source, Source::new(Some("Joe"), 1));
}

#[test]
fn pairs_without_common_fields_are_not_derived() {
    let err = MapperFactory::new()
        .mapper_facade()
        .map::<_, Source>(&PersonNameList::default())
        .unwrap_err();

    assert!(err.is_unregistered_type_pair());
    assert_eq!(
        err.to_string(),
        "no class map registered or derivable for PersonNameList -> Source"
    );
}

#[test]
fn unknown_fields_fail_at_registration() {
    let mut factory = MapperFactory::new();
    let err = factory
        .class_map::<Personne, Person>()
        .field("nom", "nmae")
        .register()
        .unwrap_err();

    assert!(err.is_path());
    assert_eq!(
        err.to_string(),
        "registering class map Personne -> Person: invalid path `nmae`: `Person` has no field `nmae`"
    );

    // Nothing was registered
    assert!(factory.class_map_for::<Personne, Person>().is_none());
}

#[test]
fn malformed_paths_fail_at_registration() {
    let mut factory = MapperFactory::new();
    let err = factory
        .class_map::<Source, Destination>()
        .field("name[", "name")
        .field("age", "age")
        .register()
        .unwrap_err();

    assert!(matches!(
        err.path_error_kind(),
        Some(PathErrorKind::Malformed { .. })
    ));
    assert!(err
        .to_string()
        .starts_with("registering class map Source -> Destination: invalid path `name[`: "));
}

#[test]
fn conversion_errors_name_the_pair_and_rule() {
    let err = MapperFactory::new()
        .mapper_facade()
        .map::<_, Parsed>(&Raw {
            age: "forty".to_string(),
        })
        .unwrap_err();

    assert!(err.is_type_conversion());
    assert_eq!(
        err.to_string(),
        "Raw -> Parsed: `age` <-> `age`: cannot convert String to i32"
    );
}

#[test]
fn strings_holding_numbers_convert() {
    let dest: Parsed = MapperFactory::new()
        .mapper_facade()
        .map(&Raw {
            age: " 40 ".to_string(),
        })
        .unwrap();

    assert_eq!(dest, Parsed { age: 40 });
}

#[test]
fn null_into_a_required_field_fails_on_load() {
    let err = MapperFactory::new()
        .mapper_facade()
        .map::<_, Strict>(&Source::new(None, 1))
        .unwrap_err();

    assert!(err.is_type_conversion());
    assert_eq!(
        err.to_string(),
        "loading `Strict.name`: cannot convert Null to String"
    );
}

#[test]
fn null_into_a_required_field_can_be_suppressed() {
    let factory = MapperFactory::builder().map_nulls(false).build();

    let mut dest = Strict {
        name: "unchanged".to_string(),
    };
    factory
        .mapper_facade()
        .map_into(&Source::new(None, 1), &mut dest)
        .unwrap();

    assert_eq!(dest.name, "unchanged");
}
