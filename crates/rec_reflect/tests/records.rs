use rec_reflect::access::{self, FieldError};
use rec_reflect::builder::BuildError;
use rec_reflect::derive::Reflect;
use rec_reflect::info::Typed;
use rec_reflect::lens::{self, TupleLens};
use rec_reflect::ops::{DynamicStruct, Struct};
use rec_reflect::{FromReflect, Reflect as _, Record, format};

#[derive(Reflect, Debug, Default, Clone, PartialEq)]
#[reflect(clone, debug, partial_eq)]
struct Point {
    x: i32,
    y: i32,
}

#[derive(Reflect, Debug, Default, PartialEq)]
struct Foo {
    a: i64,
    b: i16,
    c: i32,
    d: String,
}

#[derive(Reflect, Debug, PartialEq)]
struct Bar {
    a: i32,
    b: String,
}

#[derive(Reflect, Debug)]
struct Line {
    start: Point,
    end: Point,
}

#[derive(Reflect, Debug, PartialEq)]
#[reflect(type_path = "shop::Item")]
struct Item {
    #[reflect(rename = "id")]
    item_id: u64,
    #[reflect(ignore)]
    hits: u32,
    r#type: &'static str,
}

#[derive(Reflect, Debug, PartialEq)]
struct Empty;

// -----------------------------------------------------------------------------
// Schema

#[test]
fn schema_follows_declaration() {
    let info = Foo::schema();
    assert_eq!(info.type_name(), "Foo");
    assert_eq!(info.field_names(), &["a", "b", "c", "d"]);
    assert!(info.field("b").unwrap().type_is::<i16>());
    assert_eq!(info.position("c").map(|(index, _)| index), Some(2));
    assert!(core::ptr::eq(Foo::schema(), Foo::schema()));

    let item = Item::schema();
    assert_eq!(item.type_path(), "shop::Item");
    assert_eq!(item.type_name(), "Item");
    assert_eq!(item.field_names(), &["id", "type"]);

    assert_eq!(Empty::schema().field_len(), 0);
    assert!(<Empty as Typed>::type_info().as_struct().is_ok());
}

#[test]
fn field_tokens() {
    let fields = Foo::FIELDS;
    assert_eq!((fields.a.index(), fields.d.index()), (0, 3));
    assert_eq!(fields.d.name(), "d");

    let tokens = Item::FIELDS;
    assert_eq!((tokens.item_id.index(), tokens.item_id.name()), (0, "id"));
    assert_eq!(tokens.r#type.index(), 1);
}

// -----------------------------------------------------------------------------
// Format

#[test]
fn format_point() {
    assert_eq!(format(&Point { x: 1, y: 2 }), "(Point) {\n\tx : 1,\n\ty : 2\n}\n");
}

#[test]
fn format_lines_and_commas() {
    let text = format(&Foo {
        a: 1,
        b: 2,
        c: 3,
        d: String::from("fun"),
    });
    let lines = text.lines().collect::<Vec<_>>();

    assert_eq!(lines.len(), 6);
    assert_eq!(lines[0], "(Foo) {");
    assert_eq!(&lines[1..5], ["\ta : 1,", "\tb : 2,", "\tc : 3,", "\td : fun"]);
    assert_eq!(lines[5], "}");
    assert!(text.ends_with("}\n"));

    assert_eq!(format(&Empty), "(Empty) {\n}\n");
}

#[test]
fn format_nested() {
    let line = Line {
        start: Point { x: 0, y: 1 },
        end: Point { x: 2, y: 3 },
    };
    assert_eq!(
        format(&line),
        "(Line) {\n\
         \tstart : (Point) {\n\
         \t\tx : 0,\n\
         \t\ty : 1\n\
         \t},\n\
         \tend : (Point) {\n\
         \t\tx : 2,\n\
         \t\ty : 3\n\
         \t}\n\
         }\n"
    );
}

#[test]
fn debug_output() {
    let value: &dyn rec_reflect::Reflect = &Bar {
        a: 1,
        b: String::from("x"),
    };
    assert_eq!(format!("{value:?}"), "Bar { a: 1, b: \"x\" }");
}

// -----------------------------------------------------------------------------
// Lens

#[test]
fn lexicographic_lt() {
    assert!(lens::lt(&Point { x: 1, y: 2 }, &Point { x: 1, y: 3 }));
    assert!(!lens::lt(&Point { x: 2, y: 1 }, &Point { x: 1, y: 9 }));
    assert!(!lens::lt(&Point { x: 1, y: 2 }, &Point { x: 1, y: 2 }));
    assert_eq!(
        lens::partial_cmp(&Point { x: 1, y: 2 }, &Point { x: 1, y: 2 }),
        Some(core::cmp::Ordering::Equal)
    );

    let small = Foo {
        d: String::from("a"),
        ..Foo::default()
    };
    let large = Foo {
        d: String::from("b"),
        ..Foo::default()
    };
    assert!(lens::lt(&small, &large));
}

#[test]
fn load_round_trip() {
    let foo = lens::load(Foo::default(), (1, 2_i16, 3, "fun"));
    assert_eq!(foo.project(), (&1, &2, &3, &String::from("fun")));
    assert_eq!(
        foo,
        Foo {
            a: 1,
            b: 2,
            c: 3,
            d: String::from("fun"),
        }
    );

    let mut point = Point::default();
    lens::load_into(&mut point, (4, 5));
    assert_eq!(point, Point { x: 4, y: 5 });

    let (x, _) = point.project_mut();
    *x = 40;
    assert_eq!(point.x, 40);
}

#[test]
fn load_skips_ignored_fields() {
    let item = Item {
        item_id: 0,
        hits: 7,
        r#type: "",
    };
    let item = lens::load(item, (9_u32, "book"));
    assert_eq!((item.item_id, item.hits, item.r#type), (9, 7, "book"));
}

// -----------------------------------------------------------------------------
// Dynamic access

#[test]
fn wrap_assigns() {
    let mut bar = Bar {
        a: 0,
        b: String::new(),
    };
    access::wrap(&mut bar).bind("a").assign(9001).unwrap();
    access::wrap(&mut bar).set("b", "hi").unwrap();
    assert_eq!(
        bar,
        Bar {
            a: 9001,
            b: String::from("hi"),
        }
    );
}

#[test]
fn wrap_rejects_bad_type() {
    let mut bar = Bar {
        a: 9001,
        b: String::from("hi"),
    };
    let err = access::wrap(&mut bar).set("b", 50).unwrap_err();

    assert!(matches!(err, FieldError::TypeMismatch { field: "b", .. }));
    assert!(err.to_string().starts_with("bad assignment type"));
    assert_eq!(bar.b, "hi");
    assert_eq!(bar.a, 9001);
}

#[test]
fn wrap_rejects_unknown_field() {
    let mut bar = Bar {
        a: 1,
        b: String::new(),
    };
    let err = access::wrap(&mut bar).set("c", 1).unwrap_err();
    assert!(matches!(err, FieldError::UnknownField { .. }));
    assert_eq!(err.to_string(), format!("unknown field `c` on `{}`", Bar::schema().type_path()));
    assert_eq!(bar.a, 1);
}

#[test]
fn wrap_uses_schema_names() {
    let mut item = Item {
        item_id: 1,
        hits: 0,
        r#type: "a",
    };
    access::wrap(&mut item).set("id", 5_u8).unwrap();
    access::wrap(&mut item).set("type", "b").unwrap();
    assert!(access::wrap(&mut item).set("item_id", 6_u64).is_err());
    assert!(access::wrap(&mut item).set("hits", 1_u32).is_err());
    assert_eq!((item.item_id, item.r#type), (5, "b"));
}

#[test]
fn wrap_nested_record() {
    let mut line = Line {
        start: Point::default(),
        end: Point::default(),
    };
    let patch = DynamicStruct::new().with("x", 3_i8).with("y", 4_i16);
    access::wrap(&mut line).set_reflect("end", &patch).unwrap();
    assert_eq!(line.end, Point { x: 3, y: 4 });

    access::wrap(&mut line).set("start", Point { x: 1, y: 1 }).unwrap();
    assert_eq!(line.start, Point { x: 1, y: 1 });
}

// -----------------------------------------------------------------------------
// Builder

#[test]
fn builder_matches_literal() {
    let mut builder = Point::builder();
    builder.set(Point::FIELDS.x, 1);
    builder.set(Point::FIELDS.y, 2);
    assert_eq!(builder.make(), Ok(Point { x: 1, y: 2 }));

    let foo = Foo::builder()
        .with(Foo::FIELDS.d, "fun")
        .with(Foo::FIELDS.c, 3)
        .with(Foo::FIELDS.b, 2_i8)
        .with(Foo::FIELDS.a, 1)
        .make()
        .unwrap();
    assert_eq!(foo, lens::load(Foo::default(), (1, 2_i16, 3, "fun")));
}

#[test]
fn builder_last_write_wins() {
    let point = Point::builder()
        .with(Point::FIELDS.x, 1)
        .with(Point::FIELDS.x, 2)
        .with(Point::FIELDS.y, 0)
        .make()
        .unwrap();
    assert_eq!(point.x, 2);
}

#[test]
fn builder_missing_field() {
    let err = Point::builder()
        .with(Point::FIELDS.x, 1)
        .make()
        .unwrap_err();
    assert!(matches!(err, BuildError::MissingField { field: "y", .. }));

    let builder = Foo::builder().with(Foo::FIELDS.c, 0);
    assert_eq!(builder.missing().collect::<Vec<_>>(), ["a", "b", "d"]);
    assert!(matches!(
        builder.make(),
        Err(BuildError::MissingField { field: "a", .. })
    ));
}

#[test]
fn builder_fills_ignored_and_unit() {
    let item = Item::builder()
        .with(Item::FIELDS.r#type, "pen")
        .with(Item::FIELDS.item_id, 3_u8)
        .make()
        .unwrap();
    assert_eq!(
        item,
        Item {
            item_id: 3,
            hits: 0,
            r#type: "pen",
        }
    );

    assert_eq!(Empty::builder().make(), Ok(Empty));
}

// -----------------------------------------------------------------------------
// Reflect core

#[test]
fn from_reflect_by_name() {
    let dynamic = DynamicStruct::new()
        .with("b", "text")
        .with("a", 2_u8);
    assert_eq!(
        Bar::from_reflect(&dynamic),
        Some(Bar {
            a: 2,
            b: String::from("text"),
        })
    );

    let partial = DynamicStruct::new().with("a", 2_i32);
    assert_eq!(Bar::from_reflect(&partial), None);
    assert_eq!(Bar::from_reflect(&1_i32), None);
}

#[test]
fn reflect_compare() {
    let a = Point { x: 1, y: 2 };
    let b = Point { x: 1, y: 3 };
    assert_eq!(a.reflect_partial_eq(&a.clone()), Some(true));
    assert_eq!(a.reflect_partial_eq(&b), Some(false));
    assert_eq!(a.reflect_partial_cmp(&b), Some(core::cmp::Ordering::Less));

    let dynamic = DynamicStruct::new().with("x", 1_i32).with("y", 2_i32);
    assert_eq!(a.reflect_partial_eq(&dynamic), Some(true));

    let record: &dyn Struct = &a;
    assert_eq!(record.field_as::<i32>("y"), Some(&2));
}
