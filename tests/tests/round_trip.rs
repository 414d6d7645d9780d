use proptest::prelude::*;
use remap::MapperFactory;
use tests::models::{Destination, Person, PersonNameMap, PersonNameParts, Personne, Source};

use std::collections::HashMap;

fn name() -> impl Strategy<Value = Option<String>> {
    proptest::option::of("[A-Za-z0-9 ]{0,16}")
}

proptest! {
    #[test]
    fn derived_maps_round_trip(name in name(), age in any::<i32>()) {
        let mapper = MapperFactory::new().mapper_facade();
        let source = Source { name, age };

        let dest: Destination = mapper.map(&source).unwrap();
        let back: Source = mapper.map(&dest).unwrap();

        prop_assert_eq!(back, source);
    }

    #[test]
    fn registered_maps_round_trip(
        nom in name(),
        surnom in name(),
        age in any::<i32>(),
    ) {
        let mut factory = MapperFactory::new();
        factory
            .class_map::<Personne, Person>()
            .field("nom", "name")
            .field("surnom", "nickname")
            .by_default()
            .register()
            .unwrap();

        let mapper = factory.bound_mapper::<Personne, Person>().unwrap();
        let source = Personne { nom, surnom, age };

        let dest = mapper.map(&source).unwrap();
        prop_assert_eq!(&dest.name, &source.nom);
        prop_assert_eq!(&dest.nickname, &source.surnom);

        prop_assert_eq!(mapper.map_reverse(&dest).unwrap(), source);
    }

    #[test]
    fn keyed_paths_round_trip(first in "[A-Za-z]{1,12}", last in "[A-Za-z]{1,12}") {
        let mut factory = MapperFactory::new();
        factory
            .class_map::<PersonNameMap, PersonNameParts>()
            .field("nameMap['first']", "firstName")
            .field("nameMap['last']", "lastName")
            .register()
            .unwrap();

        let mapper = factory.mapper_facade();
        let parts = PersonNameParts {
            first_name: Some(first.clone()),
            last_name: Some(last.clone()),
        };

        let map: PersonNameMap = mapper.map(&parts).unwrap();
        prop_assert_eq!(
            &map.name_map,
            &HashMap::from([("first".to_string(), first), ("last".to_string(), last)])
        );

        let back: PersonNameParts = mapper.map(&map).unwrap();
        prop_assert_eq!(back, parts);
    }
}
