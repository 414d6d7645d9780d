//! Types mapped by the integration tests.

use remap::Mappable;

use std::collections::HashMap;

#[derive(Debug, Default, Clone, PartialEq, Mappable)]
pub struct Source {
    pub name: Option<String>,
    pub age: i32,
}

#[derive(Debug, Default, Clone, PartialEq, Mappable)]
pub struct Destination {
    pub name: Option<String>,
    pub age: i32,
}

#[derive(Debug, Default, Clone, PartialEq, Mappable)]
pub struct Personne {
    pub nom: Option<String>,
    pub surnom: Option<String>,
    pub age: i32,
}

#[derive(Debug, Default, Clone, PartialEq, Mappable)]
pub struct Person {
    pub name: Option<String>,
    pub nickname: Option<String>,
    pub age: i32,
}

#[derive(Debug, Default, Clone, PartialEq, Mappable)]
#[remap(rename_all = "camelCase")]
pub struct PersonNameList {
    pub name_list: Vec<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Mappable)]
#[remap(rename_all = "camelCase")]
pub struct PersonNameParts {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Mappable)]
#[remap(rename_all = "camelCase")]
pub struct PersonNameMap {
    pub name_map: HashMap<String, String>,
}

#[derive(Debug, Default, Clone, PartialEq, Mappable)]
#[remap(rename_all = "camelCase")]
pub struct Name {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub full_name: Option<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Mappable)]
pub struct PersonContainer {
    pub name: Option<Name>,
}

#[derive(Debug, Default, Clone, PartialEq, Mappable)]
pub struct Personne2 {
    pub name: Option<String>,

    /// Milliseconds since the Unix epoch
    pub dtob: i64,
}

#[derive(Debug, Default, Clone, PartialEq, Mappable)]
pub struct Person2 {
    pub name: Option<String>,

    /// RFC 3339 timestamp
    pub dtob: Option<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Mappable)]
pub struct Person3 {
    pub names: Vec<Name>,
}

#[derive(Debug, Default, Clone, PartialEq, Mappable)]
#[remap(rename_all = "camelCase")]
pub struct PersonDto {
    pub personal_names: HashMap<String, Name>,
}

impl Source {
    pub fn new(name: Option<&str>, age: i32) -> Self {
        Self {
            name: name.map(String::from),
            age,
        }
    }
}

impl Destination {
    pub fn new(name: Option<&str>, age: i32) -> Self {
        Self {
            name: name.map(String::from),
            age,
        }
    }
}

impl Personne {
    pub fn new(nom: &str, surnom: &str, age: i32) -> Self {
        Self {
            nom: Some(nom.to_string()),
            surnom: Some(surnom.to_string()),
            age,
        }
    }
}

impl Name {
    pub fn new(first_name: &str, last_name: &str, full_name: &str) -> Self {
        Self {
            first_name: Some(first_name.to_string()),
            last_name: Some(last_name.to_string()),
            full_name: Some(full_name.to_string()),
        }
    }
}
