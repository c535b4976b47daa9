#![cfg(feature = "macros")]

use metafactory::prelude::*;

// ============================================================================
// Candidates
// ============================================================================

trait Shape {
    fn area(&self) -> f64;
}

trait Named {
    fn label(&self) -> String;
}

#[derive(Debug, PartialEq, Candidate)]
#[candidate(id = "circle", base = dyn Shape)]
#[candidate(base = dyn Named)]
struct Circle {
    radius: f64,
}

#[derive(Debug, PartialEq, Candidate)]
#[candidate(base = dyn Shape, base = dyn Named)]
struct Square {
    side: f64,
}

impl Construct<(f64,)> for Circle {
    fn construct((radius,): (f64,)) -> Self {
        Circle { radius }
    }
}

impl Construct<(f64,)> for Square {
    fn construct((side,): (f64,)) -> Self {
        Square { side }
    }
}

impl Shape for Circle {
    fn area(&self) -> f64 {
        3.0 * self.radius * self.radius
    }
}

impl Shape for Square {
    fn area(&self) -> f64 {
        self.side * self.side
    }
}

impl Named for Circle {
    fn label(&self) -> String {
        format!("circle r={}", self.radius)
    }
}

impl Named for Square {
    fn label(&self) -> String {
        format!("square s={}", self.side)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Protocol {
    Http,
    Grpc,
}

#[derive(Debug, PartialEq, Candidate)]
#[candidate(id = "http", key = Protocol::Http, key_type = Protocol)]
struct HttpClient;

#[derive(Debug, PartialEq, Candidate)]
#[candidate(id = "grpc", key = Protocol::Grpc, key_type = Protocol)]
struct GrpcClient;

impl Construct<()> for HttpClient {
    fn construct((): ()) -> Self {
        HttpClient
    }
}

impl Construct<()> for GrpcClient {
    fn construct((): ()) -> Self {
        GrpcClient
    }
}

// ============================================================================
// Candidate derive
// ============================================================================

#[test]
fn test_candidate_ids() {
    assert_eq!(<Circle as Identified>::ID, "circle");
    assert_eq!(<Square as Identified>::ID, "Square");
    assert_eq!(<HttpClient as Identified>::ID, "http");
}

#[test]
fn test_candidate_keys() {
    assert_eq!(<HttpClient as Keyed<Protocol>>::KEY, Protocol::Http);

    let factory = MetaFactory::<Candidates![HttpClient, GrpcClient], _>::new(SameKey);
    let product = factory.produce_variant(&Protocol::Grpc, ());

    assert_eq!(product.get::<GrpcClient, _>(), Some(&GrpcClient));
}

#[test]
fn test_candidate_bases() {
    let factory = MetaFactory::<Candidates![Circle, Square], _>::new(SameId);

    let shape = factory
        .produce_ptr_to::<dyn Shape, _, _>("Square", (2.0,))
        .expect("Square should match");
    assert_eq!(shape.area(), 4.0);

    let named = factory
        .produce_ptr_to::<dyn Named, _, _>("circle", (1.5,))
        .expect("circle should match");
    assert_eq!(named.label(), "circle r=1.5");
}

// ============================================================================
// Dispatch derive
// ============================================================================

#[derive(Debug, PartialEq, Dispatch)]
enum AnyShape {
    #[dispatch(default)]
    Unknown,
    Circle(Circle),
    Square(Square),
}

#[derive(Debug, PartialEq, Default)]
struct Disconnected {
    retries: u32,
}

#[derive(Debug, PartialEq, Dispatch)]
enum Client {
    Http(HttpClient),
    Grpc(GrpcClient),
    #[dispatch(default)]
    Offline(Disconnected),
}

#[test]
fn test_dispatch_produce_hit() {
    let shape = AnyShape::produce(&SameId, "circle", (2.0,));

    assert_eq!(shape, AnyShape::Circle(Circle { radius: 2.0 }));
    assert!(!shape.is_default());
    assert_eq!(shape.variant_name(), "Circle");
}

#[test]
fn test_dispatch_produce_miss() {
    let shape = AnyShape::produce(&SameId, "triangle", (2.0,));

    assert_eq!(shape, AnyShape::Unknown);
    assert!(shape.is_default());
    assert_eq!(shape.variant_name(), "Unknown");
}

#[test]
fn test_dispatch_default_field() {
    let client = Client::produce(&SameKey, &Protocol::Http, ());
    assert_eq!(client, Client::Http(HttpClient));

    let client = Client::produce(&SameId, "smtp", ());
    assert_eq!(client, Client::Offline(Disconnected { retries: 0 }));
    assert!(client.is_default());
    assert_eq!(client.variant_name(), "Offline");
}

#[test]
fn test_dispatch_agrees_with_factory() {
    let factory = MetaFactory::<Candidates![Circle, Square], _>::new(SameId);

    for id in ["circle", "Square", "hexagon"] {
        let named = AnyShape::produce(&SameId, id, (1.0,));
        let product = factory.produce_variant(id, (1.0,));
        assert_eq!(named.is_default(), product.index() == 0, "id {id}");
    }
}
