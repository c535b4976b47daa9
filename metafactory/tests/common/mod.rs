#![allow(dead_code)]

use metafactory::testing::{ConstructionLog, DropToken};
use metafactory::{Construct, Identified, Keyed, Upcast};
use std::any::Any;

fn parse_or(raw: &str, fallback: i32) -> i32 {
    raw.trim().parse().unwrap_or(fallback)
}

// ============================================================================
// Value Candidates
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct A {
    pub value: i32,
}

impl Identified for A {
    const ID: &'static str = "A";
}

impl Construct<(&str,)> for A {
    fn construct((raw,): (&str,)) -> Self {
        A {
            value: parse_or(raw, 0),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct B {
    pub value: i32,
}

impl Identified for B {
    const ID: &'static str = "B";
}

impl Construct<(&str,)> for B {
    fn construct((raw,): (&str,)) -> Self {
        B {
            value: parse_or(raw, 0),
        }
    }
}

/// Default member with a recognisable default state.
#[derive(Debug, Clone, PartialEq)]
pub struct Fallback {
    pub value: i32,
}

impl Default for Fallback {
    fn default() -> Self {
        Fallback { value: -1 }
    }
}

/// Two-argument candidate.
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Identified for Point {
    const ID: &'static str = "point";
}

impl Construct<(i32, i32)> for Point {
    fn construct((x, y): (i32, i32)) -> Self {
        Point { x, y }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub len: i32,
}

impl Identified for Span {
    const ID: &'static str = "span";
}

impl Construct<(i32, i32)> for Span {
    fn construct((start, end): (i32, i32)) -> Self {
        Span { len: end - start }
    }
}

// ============================================================================
// Keyed Candidates
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Codec {
    Json,
    Yaml,
    Toml,
}

#[derive(Debug, PartialEq)]
pub struct JsonCodec;
#[derive(Debug, PartialEq)]
pub struct YamlCodec;

impl Keyed<Codec> for JsonCodec {
    const KEY: Codec = Codec::Json;
}

impl Keyed<Codec> for YamlCodec {
    const KEY: Codec = Codec::Yaml;
}

impl Construct<()> for JsonCodec {
    fn construct((): ()) -> Self {
        JsonCodec
    }
}

impl Construct<()> for YamlCodec {
    fn construct((): ()) -> Self {
        YamlCodec
    }
}

// ============================================================================
// Polymorphic Candidates
// ============================================================================

pub trait Base {
    fn value(&self) -> i32;
    fn describe(&self) -> &'static str;
    fn as_any(&self) -> &dyn Any;
}

#[derive(Debug)]
pub struct DerivedA {
    value: i32,
}

impl Identified for DerivedA {
    const ID: &'static str = "A";
}

impl Construct<(&str,)> for DerivedA {
    fn construct((raw,): (&str,)) -> Self {
        DerivedA {
            value: parse_or(raw, -1),
        }
    }
}

impl Base for DerivedA {
    fn value(&self) -> i32 {
        self.value
    }
    fn describe(&self) -> &'static str {
        "This is an A"
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl Upcast<dyn Base> for DerivedA {
    fn upcast(self: Box<Self>) -> Box<dyn Base> {
        self
    }
}

#[derive(Debug)]
pub struct DerivedB {
    value: i32,
}

impl Identified for DerivedB {
    const ID: &'static str = "B";
}

impl Construct<(&str,)> for DerivedB {
    fn construct((raw,): (&str,)) -> Self {
        DerivedB {
            value: parse_or(raw, -1),
        }
    }
}

impl Base for DerivedB {
    fn value(&self) -> i32 {
        self.value
    }
    fn describe(&self) -> &'static str {
        "This is a B"
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl Upcast<dyn Base> for DerivedB {
    fn upcast(self: Box<Self>) -> Box<dyn Base> {
        self
    }
}

// ============================================================================
// Instrumented Candidates
// ============================================================================

/// Candidates that log their construction and hold a drop token.
pub trait Tracked {
    fn name(&self) -> &'static str;
}

macro_rules! tracked_candidate {
    ($name:ident, $id:literal) => {
        pub struct $name {
            _token: DropToken,
        }

        impl Identified for $name {
            const ID: &'static str = $id;
        }

        impl Construct<(ConstructionLog, DropToken)> for $name {
            fn construct((log, token): (ConstructionLog, DropToken)) -> Self {
                log.record(stringify!($name));
                $name { _token: token }
            }
        }

        impl Tracked for $name {
            fn name(&self) -> &'static str {
                stringify!($name)
            }
        }

        impl Upcast<dyn Tracked> for $name {
            fn upcast(self: Box<Self>) -> Box<dyn Tracked> {
                self
            }
        }
    };
}

tracked_candidate!(First, "shared");
tracked_candidate!(Second, "shared");
tracked_candidate!(Third, "third");
