//! Shared fixtures for unit tests.

use std::sync::Arc;

use crate::{
    typesystem::{BoxedValue, TypeBuilder, TypeDescriptor, TypeRegistry},
    BoxError,
};

/// Value created by the `com.example.Foo` constructor
#[derive(Debug, Default, PartialEq)]
pub struct Foo {
    pub value: u32,
}

/// Constants of `com.example.Color`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Green,
    Blue,
}

#[derive(Debug, thiserror::Error)]
#[error("connection refused")]
struct Refused;

/// A registry with one type for every resolver scenario:
///
/// | Type | Shape |
/// |---|---|
/// | `com.example.Foo` | fields `id: i64`, `name: string`; methods `getName: i32`, `getname: string`, `size: u64` |
/// | `com.example.Bar` | interface |
/// | `com.example.Box` | generic parent, field `content: T` |
/// | `com.example.IntBox` | extends `Box<java.lang.Integer>` |
/// | `com.example.Pair` / `NamedCount` | `NamedCount` extends `Pair<java.lang.String, u64>` |
/// | `com.example.Child` | extends `Foo` (plain), field `extra: bool`, method `getValue: i32` |
/// | `com.example.Clash` | fields `value: i8`, `VALUE: i16` |
/// | `com.example.Holder` | fields `boxed: Box<i32>`, `foo: Foo`, `unknown: Unknown` |
/// | `com.example.Color` | enum `RED`, `GREEN`, `BLUE` |
/// | `com.example.NeedsArgs` | no zero-argument constructor |
/// | `com.example.Hidden` | private zero-argument constructor |
/// | `com.example.Shape` | abstract with public constructor |
/// | `com.example.Failing` | constructor that reports an error |
pub fn sample_registry() -> Arc<TypeRegistry> {
    let registry = Arc::new(TypeRegistry::new());

    let types = [
        TypeBuilder::class("com.example.Foo")
            .field("id", TypeDescriptor::named("i64"))
            .field("name", TypeDescriptor::named("string"))
            .method("getName", TypeDescriptor::named("i32"))
            .method("getname", TypeDescriptor::named("string"))
            .method("size", TypeDescriptor::named("u64"))
            .default_constructor::<Foo>(),
        TypeBuilder::interface("com.example.Bar"),
        TypeBuilder::class("com.example.Box")
            .field("content", TypeDescriptor::named("T"))
            .default_constructor::<Option<u32>>(),
        TypeBuilder::class("com.example.IntBox")
            .extends(TypeDescriptor::parameterized(
                "com.example.Box",
                [TypeDescriptor::class("java.lang.Integer")],
            ))
            .default_constructor::<Option<u32>>(),
        TypeBuilder::class("com.example.Pair").default_constructor::<(String, u64)>(),
        TypeBuilder::class("com.example.NamedCount")
            .extends(TypeDescriptor::parameterized(
                "com.example.Pair",
                [
                    TypeDescriptor::class("java.lang.String"),
                    TypeDescriptor::named("u64"),
                ],
            ))
            .default_constructor::<(String, u64)>(),
        TypeBuilder::class("com.example.Child")
            .extends(TypeDescriptor::class("com.example.Foo"))
            .field("extra", TypeDescriptor::named("bool"))
            .method("getValue", TypeDescriptor::named("i32"))
            .default_constructor::<Foo>(),
        TypeBuilder::class("com.example.Clash")
            .field("value", TypeDescriptor::named("i8"))
            .field("VALUE", TypeDescriptor::named("i16")),
        TypeBuilder::class("com.example.Holder")
            .field(
                "boxed",
                TypeDescriptor::parameterized("com.example.Box", [TypeDescriptor::named("i32")]),
            )
            .field("foo", TypeDescriptor::class("com.example.Foo"))
            .field("unknown", TypeDescriptor::class("com.example.Unknown")),
        TypeBuilder::enumeration("com.example.Color")
            .constant("RED", Color::Red)
            .constant("GREEN", Color::Green)
            .constant("BLUE", Color::Blue),
        TypeBuilder::class("com.example.NeedsArgs"),
        TypeBuilder::class("com.example.Hidden")
            .private_constructor(|| Ok(Box::new(Foo::default()) as BoxedValue)),
        TypeBuilder::class("com.example.Shape")
            .abstract_class()
            .default_constructor::<Foo>(),
        TypeBuilder::class("com.example.Failing")
            .constructor(|| Err(Box::new(Refused) as BoxError)),
    ];

    for builder in types {
        builder
            .register(&registry)
            .expect("sample types register cleanly");
    }

    registry
}
