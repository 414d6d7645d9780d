#![allow(dead_code)]

use remap_core::{
    record,
    schema::{Field, Model, Type},
    Error, FieldValue, Mappable, ModelRef, Record, Result, Value,
};
use std::{collections::HashMap, sync::OnceLock};

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Name {
    pub first: Option<String>,
    pub last: Option<String>,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Person {
    pub name: Option<Name>,
    pub nicknames: Vec<String>,
    pub scores: HashMap<String, i32>,
    pub ranks: HashMap<i64, String>,
}

impl Mappable for Name {
    fn model() -> &'static Model {
        static MODEL: OnceLock<Model> = OnceLock::new();
        MODEL.get_or_init(|| {
            Model::new(
                "Name",
                vec![Field::new("first", Type::String), Field::new("last", Type::String)],
            )
        })
    }

    fn to_record(&self) -> Record {
        record! { "first" => self.first.clone(), "last" => self.last.clone() }
    }

    fn load(mut record: Record) -> Result<Self> {
        Ok(Self {
            first: FieldValue::load(record.take("first"))?,
            last: FieldValue::load(record.take("last"))?,
        })
    }
}

impl FieldValue for Name {
    fn ty() -> Type {
        Type::Model(ModelRef::of::<Self>())
    }

    fn to_value(&self) -> Value {
        Value::Record(self.to_record())
    }

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::Record(record) => <Self as Mappable>::load(record),
            value => Err(Error::type_conversion(value, "Name")),
        }
    }
}

impl Mappable for Person {
    fn model() -> &'static Model {
        static MODEL: OnceLock<Model> = OnceLock::new();
        MODEL.get_or_init(|| {
            Model::new(
                "Person",
                vec![
                    Field::new("name", <Option<Name>>::ty()),
                    Field::new("nicknames", <Vec<String>>::ty()),
                    Field::new("scores", <HashMap<String, i32>>::ty()),
                    Field::new("ranks", <HashMap<i64, String>>::ty()),
                ],
            )
        })
    }

    fn to_record(&self) -> Record {
        record! {
            "name" => self.name.to_value(),
            "nicknames" => self.nicknames.to_value(),
            "scores" => self.scores.to_value(),
            "ranks" => self.ranks.to_value(),
        }
    }

    fn load(mut record: Record) -> Result<Self> {
        Ok(Self {
            name: FieldValue::load(record.take("name"))?,
            nicknames: FieldValue::load(record.take("nicknames"))?,
            scores: FieldValue::load(record.take("scores"))?,
            ranks: FieldValue::load(record.take("ranks"))?,
        })
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Contact {
    pub name: Option<Name>,
    pub nicknames: Vec<String>,
    pub email: Option<String>,
}

impl Mappable for Contact {
    fn model() -> &'static Model {
        static MODEL: OnceLock<Model> = OnceLock::new();
        MODEL.get_or_init(|| {
            Model::new(
                "Contact",
                vec![
                    Field::new("name", <Option<Name>>::ty()),
                    Field::new("nicknames", <Vec<String>>::ty()),
                    Field::new("email", Type::String),
                ],
            )
        })
    }

    fn to_record(&self) -> Record {
        record! {
            "name" => self.name.to_value(),
            "nicknames" => self.nicknames.to_value(),
            "email" => self.email.clone(),
        }
    }

    fn load(mut record: Record) -> Result<Self> {
        Ok(Self {
            name: FieldValue::load(record.take("name"))?,
            nicknames: FieldValue::load(record.take("nicknames"))?,
            email: FieldValue::load(record.take("email"))?,
        })
    }
}
