//! Integration tests for gof-core: every example through its public API only.

use gof_core::abstract_factory::{App, MobileWidgetFactory, Platform, WebWidgetFactory};
use gof_core::adapter::{Adaptee, Adapter, Data, Target, TargetClass};
use gof_core::bridge::{Artist, ArtistResource, LongFormView, ShortFormView, View};
use gof_core::composite::{Component, Composite, Product, ShippingBox};
use gof_core::factory_method::{Logistics, RoadLogistics, SeaLogistics};
use gof_core::memento::{Caretaker, Originator};
use gof_core::observer::{MirrorObserver, NotifyMode, Subject};
use gof_core::prelude::*;
use gof_core::prototype::{Circle, Shape, Square};
use gof_core::singleton::{SimpleSingleton, ThreadSafeSingleton};
use gof_core::visitor::{City, ExportXmlVisitor, Industry, Node, NodeKind, visit_all};

#[test]
fn abstract_factory_swaps_families() {
    let mut app = App::new(Box::new(MobileWidgetFactory));
    let popup = app.widget_factory().create_popup();
    assert_eq!(popup.pop(), "Popping on mobile!");
    assert_eq!(popup.family(), Platform::Mobile);

    app.change_widget_factory(Box::new(WebWidgetFactory));
    let popup = app.widget_factory().create_popup();
    assert_eq!(popup.pop(), "Popping on the web!");
}

#[test]
fn adapter_and_target_agree_on_shape() {
    let data = Data::new(42);
    assert_eq!(TargetClass.some_method(&data), "someMethod called with 42.");

    let adaptee = Adaptee;
    let adapter = Adapter::new(&adaptee);
    assert_eq!(adapter.some_method(&data), "specialMethod called with 42.");
}

#[test]
fn bridge_views_over_one_resource() {
    let resource = ArtistResource::new(Artist::new("Kurt Kobain", "Lived fast, died young."));
    assert_eq!(
        LongFormView::new(&resource).render(),
        "Using Kurt Kobain and Lived fast, died young. for rendering"
    );
    assert_eq!(
        ShortFormView::new(&resource).render(),
        "Using Kurt Kobain for rendering"
    );
}

#[test]
fn composite_prices() {
    let mut boxed = ShippingBox::new();
    boxed.add(Box::new(Product::new(30.0)));
    boxed.add(Box::new(Product::new(40.0)));

    assert_eq!(boxed.price(), 70.0);
    assert_eq!(Product::new(10.0).price(), 10.0);
}

#[test]
fn factory_method_logistics() {
    assert_eq!(
        RoadLogistics.create_transporter().deliver(42),
        "Delivering 42 using a truck."
    );
    assert_eq!(
        SeaLogistics.create_transporter().deliver(69),
        "Delivering 69 using a ship."
    );
}

#[test]
fn memento_round_trip_and_misuse() {
    let mut originator = Originator::new("Foo");
    let mut caretaker = Caretaker::new();

    caretaker.push(originator.create_memento());
    originator.set_state("Bar");
    assert_eq!(originator.state(), "Bar");

    let memento = caretaker.pop().unwrap();
    originator.apply_memento(&memento);
    assert_eq!(originator.state(), "Foo");

    let err = caretaker.pop().unwrap_err();
    assert_eq!(err, PatternError::EmptyHistory);
    assert_eq!(err.category(), ErrorCategory::Misuse);
}

#[test]
fn observer_modes() {
    let mut pull = Subject::new(0, NotifyMode::Pull);
    let pulled = MirrorObserver::attach(&mut pull);
    pull.set_state(1);
    assert_eq!(pulled.state(), 0);
    pull.notify();
    assert_eq!(pulled.state(), 1);

    let mut push = Subject::new(0, "push".parse().unwrap());
    let pushed = MirrorObserver::attach(&mut push);
    push.set_state(1);
    assert_eq!(pushed.state(), 1);
}

#[test]
fn prototype_clones_are_independent() {
    let circle = Circle::new(2);
    let mut clone = circle.clone();
    assert_eq!(circle.area(), clone.area());

    clone.set_radius(3);
    assert_eq!(circle.radius(), 2);

    let square = Square::new(4.0);
    assert_eq!(square.clone_shape().area(), 16.0);
}

#[test]
fn singletons_keep_identity() {
    assert!(std::ptr::eq(
        SimpleSingleton::instance(),
        SimpleSingleton::instance()
    ));

    let ids: Vec<_> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|_| s.spawn(|| ThreadSafeSingleton::instance().id()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    assert!(ids.iter().all(|id| *id == ids[0]));
    assert_eq!(ThreadSafeSingleton::constructions(), 1);
}

#[test]
fn visitor_exports_in_order() {
    let nodes = vec![Node::City(City), Node::Industry(Industry)];
    let mut visitor = ExportXmlVisitor::new();
    visit_all(&nodes, &mut visitor);

    let exports = visitor.exports();
    assert_eq!(exports.len(), 2);
    assert_eq!(exports[0].kind, NodeKind::City);
    assert_eq!(exports[0].description, "Description of a city.");
    assert_eq!(exports[1].kind, NodeKind::Industry);
    assert_eq!(exports[1].description, "Description of an industry.");
}

#[test]
fn every_catalogue_entry_runs() {
    for pattern in Pattern::ALL {
        let report = gof_core::demo::run(pattern).unwrap();
        assert_eq!(report.pattern, pattern);
    }
}
