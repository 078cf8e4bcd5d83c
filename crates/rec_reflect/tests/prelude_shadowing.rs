//! Records declared where prelude names are taken by local items.

use rec_reflect::access::{self, FieldError};
use rec_reflect::builder::BuildError;
use rec_reflect::info::Typed;
use rec_reflect::lens::{self, TupleLens};
use rec_reflect::ops::DynamicStruct;
use rec_reflect::{FromReflect, Reflect as _, Record, format};

use crate::local::{Default as Settings, Option as Choice, Result as Done};

mod local {
    #![allow(dead_code, reason = "these items only occupy prelude names")]

    use rec_reflect::derive::Reflect;

    pub struct Some;
    pub struct None;
    pub struct Ok;
    pub struct Err;
    pub struct Box;
    pub struct Clone;
    pub struct PartialEq;
    pub struct PartialOrd;
    pub struct Debug;

    #[derive(Reflect, Debug, Clone, PartialEq, PartialOrd)]
    #[reflect(clone, debug, partial_eq, partial_cmp)]
    pub struct Option {
        pub some: i32,
        pub none: String,
        #[reflect(ignore)]
        pub cache: u8,
    }

    #[derive(Reflect, Debug, PartialEq)]
    pub struct Default {
        pub value: i64,
        #[reflect(ignore)]
        pub hits: u32,
        pub label: &'static str,
    }

    #[derive(Reflect, Debug, PartialEq)]
    pub struct Result;
}

fn choice(some: i32, none: &str) -> Choice {
    Choice {
        some,
        none: String::from(none),
        cache: 3,
    }
}

#[test]
fn schema_and_tokens() {
    let info = Choice::schema();
    assert_eq!(info.type_name(), "Option");
    assert_eq!(info.field_names(), &["some", "none"]);
    assert!(info.field("some").unwrap().type_is::<i32>());

    assert_eq!(Settings::schema().type_name(), "Default");
    assert_eq!(Settings::schema().field_names(), &["value", "label"]);
    assert_eq!((Settings::FIELDS.label.index(), Settings::FIELDS.label.name()), (1, "label"));

    assert!(<Done as Typed>::type_info().as_struct().is_ok());
    assert_eq!(Done::schema().field_len(), 0);
}

#[test]
fn format_and_debug() {
    let value = choice(1, "x");
    assert_eq!(format(&value), "(Option) {\n\tsome : 1,\n\tnone : x\n}\n");
    assert_eq!(format(&Done), "(Result) {\n}\n");

    let value: &dyn rec_reflect::Reflect = &value;
    assert_eq!(format!("{value:?}"), "Option { some: 1, none: \"x\", cache: 3 }");
}

#[test]
fn wrap_and_builder() {
    let mut value = choice(0, "");
    access::wrap(&mut value).set("some", 5_i8).unwrap();
    access::wrap(&mut value).bind("none").assign("y").unwrap();
    assert_eq!(value, choice(5, "y"));

    let err = access::wrap(&mut value).set("cache", 1_u8).unwrap_err();
    assert!(matches!(err, FieldError::UnknownField { .. }));
    assert_eq!(err.field(), "cache");

    let built = Choice::builder()
        .with(Choice::FIELDS.none, "z")
        .with(Choice::FIELDS.some, 2)
        .make()
        .unwrap();
    assert_eq!(
        built,
        Choice {
            some: 2,
            none: String::from("z"),
            cache: 0,
        }
    );

    let settings = Settings::builder().with(Settings::FIELDS.value, 7_u16);
    assert!(matches!(
        settings.make(),
        Err(BuildError::MissingField { field: "label", .. })
    ));
    assert_eq!(Done::builder().make(), Ok(Done));
}

#[test]
fn from_reflect_and_compare() {
    let value = choice(1, "a");
    assert_eq!(Choice::from_reflect(&value), Some(value.clone()));

    let dynamic = DynamicStruct::new().with("label", "b").with("value", 4_i32);
    assert_eq!(
        Settings::from_reflect(&dynamic),
        Some(Settings {
            value: 4,
            hits: 0,
            label: "b",
        })
    );
    assert_eq!(Settings::from_reflect(&1_i64), None);

    let larger = choice(2, "a");
    assert_eq!(value.reflect_partial_eq(&value.clone()), Some(true));
    assert_eq!(value.reflect_partial_cmp(&larger), Some(core::cmp::Ordering::Less));
    assert!(lens::lt(&value, &larger));

    let loaded = lens::load(choice(0, ""), (9, "n"));
    assert_eq!(loaded.project(), (&9, &String::from("n")));
    assert_eq!(loaded.cache, 3);
}
