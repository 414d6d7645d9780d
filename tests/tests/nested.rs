use pretty_assertions::assert_eq;
use remap::{CustomMapper, Mappable, MapperFactory, MappingContext};

#[derive(Debug, Default, Clone, PartialEq, Mappable)]
struct Address {
    street: Option<String>,
    city: Option<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Mappable)]
#[remap(rename_all = "camelCase")]
struct AddressDto {
    street_name: Option<String>,
    city: Option<String>,
    zip: Option<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Mappable)]
struct Customer {
    name: Option<String>,
    address: Option<Address>,
    previous: Vec<Address>,
}

#[derive(Debug, Default, Clone, PartialEq, Mappable)]
struct CustomerDto {
    name: Option<String>,
    address: Option<AddressDto>,
    previous: Vec<AddressDto>,
}

fn address(street: &str, city: &str) -> Address {
    Address {
        street: Some(street.to_string()),
        city: Some(city.to_string()),
    }
}

fn address_dto(street: &str, city: &str) -> AddressDto {
    AddressDto {
        street_name: Some(street.to_string()),
        city: Some(city.to_string()),
        zip: None,
    }
}

fn factory() -> MapperFactory {
    let mut factory = MapperFactory::new();
    factory
        .class_map::<Address, AddressDto>()
        .field("street", "streetName")
        .by_default()
        .register()
        .unwrap();
    factory
}

#[test]
fn nested_records_use_the_registered_class_map() {
    tests::init_tracing();

    let source = Customer {
        name: Some("Ann".to_string()),
        address: Some(address("1 Main St", "Springfield")),
        previous: vec![address("2 Elm St", "Shelbyville")],
    };

    let dest: CustomerDto = factory().mapper_facade().map(&source).unwrap();

    assert_eq!(
        dest,
        CustomerDto {
            name: Some("Ann".to_string()),
            address: Some(address_dto("1 Main St", "Springfield")),
            previous: vec![address_dto("2 Elm St", "Shelbyville")],
        }
    );

    let back: Customer = factory().mapper_facade().map(&dest).unwrap();
    assert_eq!(back, source);
}

#[test]
fn null_nested_records_stay_null() {
    let source = Customer {
        name: Some("Ann".to_string()),
        ..Default::default()
    };

    let dest: CustomerDto = factory().mapper_facade().map(&source).unwrap();

    assert_eq!(dest.address, None);
    assert!(dest.previous.is_empty());
}

#[test]
fn nested_pairs_are_derived_when_unregistered() {
    let source = Customer {
        address: Some(address("1 Main St", "Springfield")),
        ..Default::default()
    };

    let dest: CustomerDto = MapperFactory::new().mapper_facade().map(&source).unwrap();

    // Only `city` is shared between the address types
    assert_eq!(
        dest.address,
        Some(AddressDto {
            street_name: None,
            city: Some("Springfield".to_string()),
            zip: None,
        })
    );
}

#[test]
fn nested_records_are_mapped_onto_the_existing_destination() {
    let mut factory = MapperFactory::builder().map_nulls(false).build();
    factory
        .class_map::<Address, AddressDto>()
        .field("street", "streetName")
        .by_default()
        .register()
        .unwrap();

    let source = Customer {
        address: Some(Address {
            street: Some("New St".to_string()),
            city: None,
        }),
        ..Default::default()
    };
    let mut dest = CustomerDto {
        name: Some("Ann".to_string()),
        address: Some(AddressDto {
            street_name: Some("Old St".to_string()),
            city: Some("Kept".to_string()),
            zip: Some("12345".to_string()),
        }),
        previous: vec![],
    };

    factory.mapper_facade().map_into(&source, &mut dest).unwrap();

    assert_eq!(
        dest,
        CustomerDto {
            name: Some("Ann".to_string()),
            address: Some(AddressDto {
                street_name: Some("New St".to_string()),
                city: Some("Kept".to_string()),
                zip: Some("12345".to_string()),
            }),
            previous: vec![],
        }
    );
}

#[test]
fn unmapped_nested_fields_survive_when_nulls_are_mapped() {
    let source = Customer {
        address: Some(address("New St", "Shelbyville")),
        ..Default::default()
    };
    let mut dest = CustomerDto {
        address: Some(AddressDto {
            zip: Some("12345".to_string()),
            ..address_dto("Old St", "Springfield")
        }),
        ..Default::default()
    };

    factory().mapper_facade().map_into(&source, &mut dest).unwrap();

    assert_eq!(
        dest.address,
        Some(AddressDto {
            zip: Some("12345".to_string()),
            ..address_dto("New St", "Shelbyville")
        })
    );
}

struct RecordDepth;

impl CustomMapper<Address, AddressDto> for RecordDepth {
    fn map_a_to_b(
        &self,
        _: &Address,
        dto: &mut AddressDto,
        context: &mut MappingContext,
    ) -> anyhow::Result<()> {
        dto.city = Some(format!("depth {}", context.depth()));
        Ok(())
    }
}

#[test]
fn hooks_see_the_nesting_depth() {
    let mut factory = MapperFactory::new();
    factory
        .class_map::<Address, AddressDto>()
        .customize(RecordDepth)
        .register()
        .unwrap();

    let mapper = factory.mapper_facade();

    let dto: AddressDto = mapper.map(&Address::default()).unwrap();
    assert_eq!(dto.city.as_deref(), Some("depth 0"));

    let source = Customer {
        address: Some(Address::default()),
        previous: vec![Address::default()],
        ..Default::default()
    };
    let mut context = MappingContext::new();
    let dest: CustomerDto = mapper.map_with_context(&source, &mut context).unwrap();

    assert_eq!(dest.address.unwrap().city.as_deref(), Some("depth 1"));
    assert_eq!(dest.previous[0].city.as_deref(), Some("depth 1"));
    assert_eq!(context.depth(), 0);
}
